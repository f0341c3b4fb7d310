//! Serializable form of a definition.

use crate::core::{Rule, State};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which stack condition accompanies an accepting state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptanceMode {
    /// Accepting state and nothing above the bottom marker.
    #[default]
    FinalStateAndEmptyStack,
    /// Accepting state; stack contents are irrelevant.
    FinalState,
}

/// The raw parts of a definition, as written in a JSON document.
///
/// Parts are unchecked. [`Definition::from_parts`](super::Definition::from_parts)
/// validates them before anything can run.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DefinitionParts<S: State> {
    pub states: Vec<S>,
    pub input_alphabet: BTreeSet<char>,
    pub stack_alphabet: BTreeSet<char>,
    pub bottom_marker: char,
    pub initial_state: S,
    pub accepting_states: Vec<S>,
    #[serde(default)]
    pub acceptance: AcceptanceMode,
    #[serde(default)]
    pub end_marker: Option<char>,
    pub rules: Vec<Rule<S>>,
}
