//! Configuration snapshots emitted by a run.

use super::error::RunError;
use super::rule::Rule;
use super::stack::Stack;
use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a run: state, unread input and stack, plus how it got here.
///
/// Configurations are immutable once emitted. The engine derives each step
/// from the previous one, so a caller keeping earlier snapshots sees a
/// faithful history.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Configuration<S: State> {
    pub state: S,
    pub remaining_input: String,
    pub stack: Stack,
    /// The rule that produced this step; `None` for the start snapshot and
    /// for the rejection snapshot.
    pub fired_rule: Option<Rule<S>>,
    /// Annotation carried over from the fired rule.
    pub rule_label: Option<String>,
    /// Set only on the final snapshot of a rejecting run.
    pub terminal_error: Option<RunError>,
}

impl<S: State> Configuration<S> {
    /// The start snapshot of a run.
    pub fn initial(state: S, input: &str, bottom_marker: char) -> Self {
        Self {
            state,
            remaining_input: input.to_string(),
            stack: Stack::new(bottom_marker),
            fired_rule: None,
            rule_label: None,
            terminal_error: None,
        }
    }

    /// The next unread input symbol.
    pub fn next_symbol(&self) -> Option<char> {
        self.remaining_input.chars().next()
    }

    pub fn input_exhausted(&self) -> bool {
        self.remaining_input.is_empty()
    }

    pub fn is_error(&self) -> bool {
        self.terminal_error.is_some()
    }
}

impl<S: State> fmt::Display for Configuration<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "State: {}, Stack: {}, Remaining Input: {}",
            self.state.name(),
            self.stack,
            self.remaining_input
        )?;
        if let Some(rule) = &self.fired_rule {
            write!(f, ", Rule: {rule}")?;
        }
        if let Some(label) = &self.rule_label {
            write!(f, " [{label}]")?;
        }
        Ok(())
    }
}
