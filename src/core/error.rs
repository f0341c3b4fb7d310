//! Terminal run outcomes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a run rejected its input.
///
/// These are ordinary results carried by the last configuration of a
/// rejecting run, never panics.
#[derive(Clone, PartialEq, Eq, Debug, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunError {
    #[error(
        "no matching transition for state {state}, input symbol {input}, stack top {stack_top}"
    )]
    NoMatchingTransition {
        state: String,
        input: char,
        stack_top: char,
    },

    #[error("input exhausted without reaching an accepting configuration (state {state})")]
    NotAcceptedAtExhaustion { state: String },
}

/// How a finished run ended.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Accepted,
    Rejected(RunError),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn error(&self) -> Option<&RunError> {
        match self {
            Self::Accepted => None,
            Self::Rejected(error) => Some(error),
        }
    }
}
