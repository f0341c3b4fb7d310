//! Builder API for ergonomic definition construction.
//!
//! This module provides fluent builders, rule helpers and the
//! [`state_enum!`](crate::state_enum) macro for writing transition tables
//! with minimal boilerplate.

pub mod definition;
pub mod error;
pub mod macros;
pub mod rule;

pub use definition::DefinitionBuilder;
pub use error::BuildError;
pub use rule::RuleBuilder;

use crate::core::{Rule, StackMatch, StackOp, State, Trigger, LAMBDA};

/// Create a rule that consumes `symbol`.
///
/// # Example
///
/// ```
/// use pushdown::builder::input_rule;
/// use pushdown::core::{StackMatch, StackOp, StateId};
///
/// let rule = input_rule(
///     StateId::from("p"),
///     'a',
///     StackMatch::Top('Z'),
///     StateId::from("p"),
///     vec![StackOp::Push('A')],
/// );
/// assert_eq!(rule.to_string(), "(p, a, Z) -> (p, A)");
/// ```
pub fn input_rule<S: State>(
    from: S,
    symbol: char,
    stack_top: StackMatch,
    to: S,
    actions: Vec<StackOp>,
) -> Rule<S> {
    Rule::new(from, Trigger::Input(symbol), stack_top, to, actions)
}

/// Create a lambda rule on stack top `top`.
pub fn lambda_rule<S: State>(from: S, top: char, to: S, actions: Vec<StackOp>) -> Rule<S> {
    Rule::new(from, Trigger::Lambda, StackMatch::Top(top), to, actions)
}

/// Create a lambda rule that rewrites `nonterminal` on top of the stack
/// into `rhs`, leftmost symbol on top, labelled with the production.
///
/// An empty `rhs` pops the nonterminal.
///
/// # Example
///
/// ```
/// use pushdown::builder::production;
/// use pushdown::core::{StackOp, StateId};
///
/// let rule = production(StateId::from("q"), 'S', "aSb");
/// assert_eq!(rule.actions[0], StackOp::Pop);
/// assert_eq!(rule.label.as_deref(), Some("S -> aSb"));
/// assert_eq!(rule.to_string(), "(q, λ, S) -> (q, aSb)");
///
/// let empty = production(StateId::from("q"), 'S', "");
/// assert_eq!(empty.label.as_deref(), Some("S -> λ"));
/// ```
pub fn production<S: State>(state: S, nonterminal: char, rhs: &str) -> Rule<S> {
    let mut actions = vec![StackOp::Pop];
    actions.extend(rhs.chars().rev().map(StackOp::Push));

    let shown = if rhs.is_empty() {
        LAMBDA.to_string()
    } else {
        rhs.to_string()
    };

    lambda_rule(state.clone(), nonterminal, state, actions)
        .with_label(format!("{nonterminal} -> {shown}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateId;

    #[test]
    fn input_rule_builds() {
        let rule = input_rule(
            StateId::from("p"),
            'a',
            StackMatch::Any,
            StateId::from("q"),
            vec![],
        );
        assert_eq!(rule.trigger, Trigger::Input('a'));
        assert_eq!(rule.stack_top, StackMatch::Any);
        assert!(rule.label.is_none());
    }

    #[test]
    fn lambda_rule_builds() {
        let state = StateId::from("p");
        let rule = lambda_rule(state.clone(), 'A', state, vec![StackOp::Pop]);
        assert!(rule.is_lambda());
        assert_eq!(rule.stack_top, StackMatch::Top('A'));
    }

    #[test]
    fn production_matches_rule_builder_expand() {
        let from_helper = production(StateId::from("q"), 'E', "E+T");
        let from_builder = RuleBuilder::new()
            .from(StateId::from("q"))
            .on_lambda()
            .top('E')
            .to(StateId::from("q"))
            .expand("E+T")
            .label("E -> E+T")
            .build()
            .unwrap();
        assert_eq!(from_helper, from_builder);
    }
}
