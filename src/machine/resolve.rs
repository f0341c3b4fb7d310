//! Transition resolution.

use crate::core::{Rule, RunError, StackMatch, State, Trigger};
use crate::definition::Definition;

/// What the table says about the current position of a run.
#[derive(Debug)]
pub(crate) enum Resolution<'a, S: State> {
    /// This rule fires next.
    Fire(&'a Rule<S>),
    /// Input exhausted and no lambda move applies: time to decide acceptance.
    Halt,
    /// Input remains but nothing matches.
    Stuck(RunError),
}

/// Pick the single rule that applies, by fixed priority:
///
/// 1. `(state, λ, top)`: stack rewriting runs before any input is read
/// 2. `(state, c, top)`
/// 3. `(state, c, *)`
pub(crate) fn resolve<'a, S: State>(
    definition: &'a Definition<S>,
    state: &S,
    top: char,
    next_symbol: Option<char>,
) -> Resolution<'a, S> {
    if let Some(rule) = definition.rule(state, Trigger::Lambda, StackMatch::Top(top)) {
        return Resolution::Fire(rule);
    }

    let Some(symbol) = next_symbol else {
        return Resolution::Halt;
    };

    definition
        .rule(state, Trigger::Input(symbol), StackMatch::Top(top))
        .or_else(|| definition.rule(state, Trigger::Input(symbol), StackMatch::Any))
        .map(Resolution::Fire)
        .unwrap_or_else(|| {
            Resolution::Stuck(RunError::NoMatchingTransition {
                state: state.name().to_string(),
                input: symbol,
                stack_top: top,
            })
        })
}
