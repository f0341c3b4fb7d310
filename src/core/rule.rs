//! Transition rules.

use super::state::State;
use super::symbol::{StackMatch, StackOp, Trigger, LAMBDA};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The `(state, trigger, stack top)` triple a rule is keyed by.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RuleKey<S: State> {
    pub state: S,
    pub trigger: Trigger,
    pub stack_top: StackMatch,
}

impl<S: State> fmt::Display for RuleKey<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.state.name(),
            self.trigger,
            self.stack_top
        )
    }
}

/// A single entry of the transition table.
///
/// `actions` is the physical action list, applied left-to-right (see
/// [`Stack::apply`](super::Stack::apply)). The `Display` rendering shows
/// the pushed right-hand side in reading order instead, which is the
/// reverse of the push order.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{Rule, StackMatch, StackOp, StateId, Trigger};
///
/// // S -> aSb, written as pop then push b, S, a
/// let rule = Rule::new(
///     StateId::from("q"),
///     Trigger::Lambda,
///     StackMatch::Top('S'),
///     StateId::from("q"),
///     vec![StackOp::Pop, StackOp::Push('b'), StackOp::Push('S'), StackOp::Push('a')],
/// )
/// .with_label("S -> aSb");
///
/// assert_eq!(rule.to_string(), "(q, λ, S) -> (q, aSb)");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Rule<S: State> {
    pub from: S,
    pub trigger: Trigger,
    pub stack_top: StackMatch,
    pub to: S,
    pub actions: Vec<StackOp>,
    #[serde(default)]
    pub label: Option<String>,
}

impl<S: State> Rule<S> {
    pub fn new(
        from: S,
        trigger: Trigger,
        stack_top: StackMatch,
        to: S,
        actions: Vec<StackOp>,
    ) -> Self {
        Self {
            from,
            trigger,
            stack_top,
            to,
            actions,
            label: None,
        }
    }

    /// Attach a human annotation, e.g. the grammar production this rule encodes.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn key(&self) -> RuleKey<S> {
        RuleKey {
            state: self.from.clone(),
            trigger: self.trigger,
            stack_top: self.stack_top,
        }
    }

    pub fn is_lambda(&self) -> bool {
        self.trigger.is_lambda()
    }

    /// The pushed symbols in reading order: pops dropped, push order reversed.
    pub fn right_hand_side(&self) -> String {
        self.actions
            .iter()
            .rev()
            .filter_map(|op| match op {
                StackOp::Push(symbol) => Some(*symbol),
                StackOp::Pop => None,
            })
            .collect()
    }
}

impl<S: State> fmt::Display for Rule<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rhs = self.right_hand_side();
        let rhs = if rhs.is_empty() {
            LAMBDA.to_string()
        } else {
            rhs
        };
        write!(f, "{} -> ({}, {})", self.key(), self.to.name(), rhs)
    }
}
