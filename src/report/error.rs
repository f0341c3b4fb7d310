//! Errors raised while storing or loading a [`RunReport`](super::RunReport).

use thiserror::Error;

/// Why a run report could not be written or read back.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Run report could not be written: {0}")]
    SerializationFailed(String),

    #[error("Run report could not be read: {0}")]
    DeserializationFailed(String),

    #[error("Run report has format version {found}, this build reads version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// A run always records its start configuration.
    #[error("Run report holds no configurations")]
    EmptyTrace,

    /// The start configuration must read exactly the recorded input.
    #[error("Run report input {report_input:?} does not match the trace input {trace_input:?}")]
    InputMismatch {
        trace_input: String,
        report_input: String,
    },

    /// The outcome disagrees with the error carried by the last configuration.
    #[error("Run report outcome does not match its last configuration")]
    OutcomeMismatch,
}
