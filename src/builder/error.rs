//! Build errors for definition and rule builders.

use crate::validation::DefinitionViolation;
use thiserror::Error;

/// Errors that can occur when building definitions and rules.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Bottom marker not specified. Call .bottom_marker(symbol) before .build()")]
    MissingBottomMarker,

    #[error("Rule source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Rule trigger not specified. Call .on(symbol) or .on_lambda()")]
    MissingTrigger,

    #[error("Rule stack match not specified. Call .top(symbol) or .any_top()")]
    MissingStackMatch,

    #[error("Rule target state not specified. Call .to(state)")]
    MissingNextState,

    #[error("Definition failed validation: {}", list(.violations))]
    InvalidDefinition {
        violations: Vec<DefinitionViolation>,
    },

    #[error("Definition document is malformed: {0}")]
    MalformedDocument(String),

    #[error("Definition could not be written as a document: {0}")]
    SerializationFailed(String),
}

fn list(violations: &[DefinitionViolation]) -> String {
    let count = violations.len();
    let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();
    format!("{count} violation(s): {}", messages.join("; "))
}
