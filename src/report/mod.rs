//! Serializable records of finished runs.
//!
//! A [`RunReport`] captures the input, the outcome and every configuration
//! of one run, so a trace can be stored, shipped to a renderer, or compared
//! against a later run of the same definition.

use crate::core::{Outcome, State, Trace};
use crate::definition::Definition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::ReportError;

/// Version identifier for report format
pub const REPORT_VERSION: u32 = 1;

/// Serializable record of one finished run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RunReport<S: State> {
    /// Report format version
    pub version: u32,

    /// Unique report identifier
    pub id: String,

    /// When the report was created
    pub created_at: DateTime<Utc>,

    /// The input string as given to the run
    pub input: String,

    /// Every configuration and the outcome
    pub trace: Trace<S>,
}

impl<S: State> RunReport<S> {
    /// Wrap an already collected trace.
    pub fn new(input: impl Into<String>, trace: Trace<S>) -> Self {
        Self {
            version: REPORT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            input: input.into(),
            trace,
        }
    }

    /// Run `input` to completion and record it.
    pub fn capture(definition: &Definition<S>, input: &str) -> Self {
        Self::new(input, definition.trace(input))
    }

    pub fn outcome(&self) -> &Outcome {
        self.trace.outcome()
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))?;
        report.validate()
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ReportError> {
        bincode::serialize(self).map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReportError> {
        let report: Self = bincode::deserialize(bytes)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))?;
        report.validate()
    }

    fn validate(self) -> Result<Self, ReportError> {
        if self.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: self.version,
                supported: REPORT_VERSION,
            });
        }

        let Some(first) = self.trace.configurations().first() else {
            return Err(ReportError::EmptyTrace);
        };
        if first.remaining_input != self.input {
            return Err(ReportError::InputMismatch {
                trace_input: first.remaining_input.clone(),
                report_input: self.input,
            });
        }

        let closing_error = self.trace.last().and_then(|c| c.terminal_error.as_ref());
        if closing_error != self.trace.outcome().error() {
            return Err(ReportError::OutcomeMismatch);
        }

        Ok(self)
    }
}
