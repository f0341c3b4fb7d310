//! Rule key components and stack actions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering of the lambda marker and of an empty right-hand side.
pub const LAMBDA: char = 'λ';

/// Rendering of the wildcard stack match.
pub const WILDCARD: char = '*';

/// What a rule reads from the input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Consume nothing; fire on state and stack top alone.
    Lambda,
    /// Consume exactly this input symbol.
    Input(char),
}

impl Trigger {
    pub fn is_lambda(&self) -> bool {
        matches!(self, Self::Lambda)
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lambda => write!(f, "{LAMBDA}"),
            Self::Input(c) => write!(f, "{c}"),
        }
    }
}

/// What a rule requires on top of the stack.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackMatch {
    /// Match regardless of the stack top.
    Any,
    /// Match only when this symbol is on top.
    Top(char),
}

impl fmt::Display for StackMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "{WILDCARD}"),
            Self::Top(c) => write!(f, "{c}"),
        }
    }
}

/// One entry of a rule's action list.
///
/// In documents an action is a string: `"pop"` or a single symbol.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StackOp {
    /// Remove the current top. No-op on the bottom marker.
    Pop,
    /// Push a literal symbol.
    Push(char),
}

impl StackOp {
    /// Push actions for every symbol of `symbols`, in order.
    pub fn pushes(symbols: &str) -> Vec<StackOp> {
        symbols.chars().map(StackOp::Push).collect()
    }
}

impl TryFrom<String> for StackOp {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "pop" {
            return Ok(Self::Pop);
        }
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::Push(c)),
            _ => Err(format!(
                "stack action must be \"pop\" or a single symbol, got {value:?}"
            )),
        }
    }
}

impl From<StackOp> for String {
    fn from(op: StackOp) -> Self {
        match op {
            StackOp::Pop => "pop".to_string(),
            StackOp::Push(c) => c.to_string(),
        }
    }
}
