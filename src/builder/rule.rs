//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{Rule, StackMatch, StackOp, State, Trigger};

/// Builder for constructing rules with a fluent API.
///
/// Actions accumulate in call order and are applied in that order when the
/// rule fires.
pub struct RuleBuilder<S: State> {
    from: Option<S>,
    trigger: Option<Trigger>,
    stack_top: Option<StackMatch>,
    to: Option<S>,
    actions: Vec<StackOp>,
    label: Option<String>,
}

impl<S: State> RuleBuilder<S> {
    /// Create a new rule builder.
    pub fn new() -> Self {
        Self {
            from: None,
            trigger: None,
            stack_top: None,
            to: None,
            actions: Vec::new(),
            label: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Fire on this input symbol.
    pub fn on(mut self, symbol: char) -> Self {
        self.trigger = Some(Trigger::Input(symbol));
        self
    }

    /// Fire without consuming input.
    pub fn on_lambda(mut self) -> Self {
        self.trigger = Some(Trigger::Lambda);
        self
    }

    /// Require this symbol on top of the stack.
    pub fn top(mut self, symbol: char) -> Self {
        self.stack_top = Some(StackMatch::Top(symbol));
        self
    }

    /// Match any stack top.
    pub fn any_top(mut self) -> Self {
        self.stack_top = Some(StackMatch::Any);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    pub fn pop(mut self) -> Self {
        self.actions.push(StackOp::Pop);
        self
    }

    pub fn push(mut self, symbol: char) -> Self {
        self.actions.push(StackOp::Push(symbol));
        self
    }

    /// Replace the action list.
    pub fn actions(mut self, actions: Vec<StackOp>) -> Self {
        self.actions = actions;
        self
    }

    /// Replace the top with `rhs`, leaving its first symbol on top.
    ///
    /// `expand("aSb")` records `[pop, b, S, a]`.
    pub fn expand(mut self, rhs: &str) -> Self {
        self.actions.push(StackOp::Pop);
        self.actions.extend(rhs.chars().rev().map(StackOp::Push));
        self
    }

    /// Attach a human annotation (optional).
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<Rule<S>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let trigger = self.trigger.ok_or(BuildError::MissingTrigger)?;
        let stack_top = self.stack_top.ok_or(BuildError::MissingStackMatch)?;
        let to = self.to.ok_or(BuildError::MissingNextState)?;

        Ok(Rule {
            from,
            trigger,
            stack_top,
            to,
            actions: self.actions,
            label: self.label,
        })
    }
}

impl<S: State> Default for RuleBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
