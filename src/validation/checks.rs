//! Individual definition checks.
//!
//! Each check returns a `Validation` so that [`validate`](super::validate)
//! can accumulate every violation instead of stopping at the first one.

use crate::core::{Rule, RuleKey, Stack, StackMatch, StackOp, State, Trigger};
use crate::definition::DefinitionParts;
use crate::validation::violations::DefinitionViolation;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub(crate) type Check = Validation<(), NonEmptyVec<DefinitionViolation>>;

fn require(condition: bool, violation: impl FnOnce() -> DefinitionViolation) -> Check {
    if condition {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

pub(crate) fn known_state<S: State>(parts: &DefinitionParts<S>, state: &S, role: &str) -> Check {
    require(parts.states.contains(state), || {
        DefinitionViolation::UnknownState {
            state: state.name().to_string(),
            role: role.to_string(),
        }
    })
}

pub(crate) fn known_input_symbol<S: State>(
    parts: &DefinitionParts<S>,
    symbol: char,
    role: &str,
) -> Check {
    require(parts.input_alphabet.contains(&symbol), || {
        DefinitionViolation::UnknownInputSymbol {
            symbol,
            role: role.to_string(),
        }
    })
}

pub(crate) fn known_stack_symbol<S: State>(
    parts: &DefinitionParts<S>,
    symbol: char,
    role: &str,
) -> Check {
    require(parts.stack_alphabet.contains(&symbol), || {
        DefinitionViolation::UnknownStackSymbol {
            symbol,
            role: role.to_string(),
        }
    })
}

/// Every check that concerns a single rule.
pub(crate) fn rule_checks<S: State>(parts: &DefinitionParts<S>, rule: &Rule<S>) -> Vec<Check> {
    let mut checks = vec![
        known_state(parts, &rule.from, "rule source"),
        known_state(parts, &rule.to, "rule target"),
    ];

    if let Trigger::Input(symbol) = rule.trigger {
        checks.push(known_input_symbol(parts, symbol, "rule input"));
    }
    if let StackMatch::Top(symbol) = rule.stack_top {
        checks.push(known_stack_symbol(parts, symbol, "rule stack top"));
    }
    for op in &rule.actions {
        if let StackOp::Push(symbol) = op {
            checks.push(known_stack_symbol(parts, *symbol, "pushed symbol"));
        }
    }

    if rule.is_lambda() {
        checks.push(lambda_names_stack_top(rule));
        checks.push(lambda_makes_progress(parts, rule));
    }

    checks
}

fn lambda_names_stack_top<S: State>(rule: &Rule<S>) -> Check {
    require(rule.stack_top != StackMatch::Any, || {
        DefinitionViolation::LambdaOnWildcard {
            rule: rule.to_string(),
        }
    })
}

/// Fire the rule on a stack holding just its key symbol and compare.
fn lambda_makes_progress<S: State>(parts: &DefinitionParts<S>, rule: &Rule<S>) -> Check {
    let StackMatch::Top(top) = rule.stack_top else {
        return Validation::success(());
    };
    if rule.from != rule.to {
        return Validation::success(());
    }

    let before = if top == parts.bottom_marker {
        Stack::new(parts.bottom_marker)
    } else {
        Stack::new(parts.bottom_marker).push(top)
    };
    let after = before.apply(&rule.actions);

    require(after != before, || DefinitionViolation::NoOpLambda {
        rule: rule.to_string(),
    })
}

/// One failure per key that appears more than once.
pub(crate) fn unique_keys<S: State>(rules: &[Rule<S>]) -> Vec<Check> {
    let mut seen: HashSet<RuleKey<S>> = HashSet::new();
    let mut reported: HashSet<RuleKey<S>> = HashSet::new();
    let mut checks = Vec::new();

    for rule in rules {
        let key = rule.key();
        if !seen.insert(key.clone()) && reported.insert(key.clone()) {
            checks.push(Validation::fail(DefinitionViolation::DuplicateRule {
                key: key.to_string(),
            }));
        }
    }

    checks
}
