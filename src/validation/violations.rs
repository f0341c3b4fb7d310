//! Authoring errors found in a definition.

use thiserror::Error;

/// A single problem with a definition's parts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionViolation {
    #[error("{role} '{state}' is not a declared state")]
    UnknownState { state: String, role: String },

    #[error("{role} '{symbol}' is not in the input alphabet")]
    UnknownInputSymbol { symbol: char, role: String },

    #[error("{role} '{symbol}' is not in the stack alphabet")]
    UnknownStackSymbol { symbol: char, role: String },

    #[error("more than one rule is keyed by {key}")]
    DuplicateRule { key: String },

    #[error("lambda rule {rule} must name a stack top, not the wildcard")]
    LambdaOnWildcard { rule: String },

    #[error("lambda rule {rule} changes neither state nor stack and would loop forever")]
    NoOpLambda { rule: String },
}
