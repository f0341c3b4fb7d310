//! Authoring checks for automaton definitions.
//!
//! The engine trusts its definition: it resolves rules by a fixed priority
//! order and never second-guesses the table. This module is the separate
//! tooling that catches authoring mistakes before a definition is built.
//!
//! Checks use Stillwater's `Validation` to accumulate ALL violations, so a
//! broken table is reported in one pass instead of one error at a time.
//!
//! # Example
//!
//! ```rust
//! use pushdown::core::{Rule, StackMatch, StackOp, StateId, Trigger};
//! use pushdown::definition::{AcceptanceMode, DefinitionParts};
//! use pushdown::validation::{check_definition, DefinitionViolation};
//!
//! let q = StateId::from("q");
//! let parts = DefinitionParts {
//!     states: vec![q.clone()],
//!     input_alphabet: ['a'].into_iter().collect(),
//!     stack_alphabet: ['Z'].into_iter().collect(),
//!     bottom_marker: 'Z',
//!     initial_state: q.clone(),
//!     accepting_states: vec![StateId::from("f")],
//!     acceptance: AcceptanceMode::FinalState,
//!     end_marker: None,
//!     rules: vec![Rule::new(q.clone(), Trigger::Lambda, StackMatch::Top('Z'), q, vec![])],
//! };
//!
//! let violations = check_definition(&parts).unwrap_err();
//! assert_eq!(violations.len(), 2);
//! assert!(matches!(violations[0], DefinitionViolation::UnknownState { .. }));
//! assert!(matches!(violations[1], DefinitionViolation::NoOpLambda { .. }));
//! ```

mod checks;
mod violations;

pub use violations::DefinitionViolation;

use crate::core::State;
use crate::definition::DefinitionParts;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Run every check over `parts`, accumulating ALL violations.
///
/// Returns `Validation::Success(())` if the table is well formed.
pub fn validate<S: State>(
    parts: &DefinitionParts<S>,
) -> Validation<(), NonEmptyVec<DefinitionViolation>> {
    let mut all = vec![checks::known_state(
        parts,
        &parts.initial_state,
        "initial state",
    )];

    for state in &parts.accepting_states {
        all.push(checks::known_state(parts, state, "accepting state"));
    }

    all.push(checks::known_stack_symbol(
        parts,
        parts.bottom_marker,
        "bottom marker",
    ));
    if let Some(marker) = parts.end_marker {
        all.push(checks::known_input_symbol(parts, marker, "end marker"));
    }

    for rule in &parts.rules {
        all.extend(checks::rule_checks(parts, rule));
    }
    all.extend(checks::unique_keys(&parts.rules));

    Validation::all_vec(all).map(|_| ())
}

/// [`validate`] as a `Result`, violations in discovery order.
pub fn check_definition<S: State>(
    parts: &DefinitionParts<S>,
) -> Result<(), Vec<DefinitionViolation>> {
    match validate(parts) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rule, StackMatch, StackOp, StateId, Trigger};
    use crate::definition::AcceptanceMode;

    fn id(name: &str) -> StateId {
        StateId::from(name)
    }

    fn balanced() -> DefinitionParts<StateId> {
        DefinitionParts {
            states: vec![id("p"), id("q"), id("f")],
            input_alphabet: ['a', 'b', '$'].into_iter().collect(),
            stack_alphabet: ['A', 'Z'].into_iter().collect(),
            bottom_marker: 'Z',
            initial_state: id("p"),
            accepting_states: vec![id("f")],
            acceptance: AcceptanceMode::FinalStateAndEmptyStack,
            end_marker: Some('$'),
            rules: vec![
                Rule::new(
                    id("p"),
                    Trigger::Input('a'),
                    StackMatch::Top('Z'),
                    id("p"),
                    vec![StackOp::Push('A')],
                ),
                Rule::new(
                    id("p"),
                    Trigger::Input('b'),
                    StackMatch::Top('A'),
                    id("q"),
                    vec![StackOp::Pop],
                ),
                Rule::new(
                    id("q"),
                    Trigger::Input('$'),
                    StackMatch::Top('Z'),
                    id("f"),
                    vec![],
                ),
            ],
        }
    }

    #[test]
    fn well_formed_definition_passes() {
        assert!(validate(&balanced()).is_success());
        assert_eq!(check_definition(&balanced()), Ok(()));
    }

    #[test]
    fn accumulates_all_violations() {
        let mut parts = balanced();
        parts.initial_state = id("start");
        parts.bottom_marker = '#';
        parts.rules.push(Rule::new(
            id("q"),
            Trigger::Input('c'),
            StackMatch::Top('B'),
            id("q"),
            vec![],
        ));

        let violations = check_definition(&parts).unwrap_err();
        assert_eq!(violations.len(), 4);
        assert!(violations
            .iter()
            .any(|v| matches!(v, DefinitionViolation::UnknownState { .. })));
        assert!(violations.iter().any(|v| matches!(
            v,
            DefinitionViolation::UnknownStackSymbol { symbol: '#', .. }
        )));
        assert!(violations.iter().any(|v| matches!(
            v,
            DefinitionViolation::UnknownInputSymbol { symbol: 'c', .. }
        )));
        assert!(violations.iter().any(|v| matches!(
            v,
            DefinitionViolation::UnknownStackSymbol { symbol: 'B', .. }
        )));
    }

    #[test]
    fn duplicate_keys_reported_once() {
        let mut parts = balanced();
        let duplicate = parts.rules[0].clone();
        parts.rules.push(duplicate.clone());
        parts.rules.push(duplicate);

        let violations = check_definition(&parts).unwrap_err();
        assert_eq!(
            violations,
            vec![DefinitionViolation::DuplicateRule {
                key: "(p, a, Z)".to_string()
            }]
        );
    }

    #[test]
    fn lambda_on_wildcard_is_rejected() {
        let mut parts = balanced();
        parts.rules.push(Rule::new(
            id("q"),
            Trigger::Lambda,
            StackMatch::Any,
            id("f"),
            vec![],
        ));

        let violations = check_definition(&parts).unwrap_err();
        assert!(matches!(
            violations.as_slice(),
            [DefinitionViolation::LambdaOnWildcard { .. }]
        ));
    }

    #[test]
    fn no_op_lambda_is_rejected() {
        let mut parts = balanced();
        // pop A then push A back: nothing changes
        parts.rules.push(Rule::new(
            id("q"),
            Trigger::Lambda,
            StackMatch::Top('A'),
            id("q"),
            vec![StackOp::Pop, StackOp::Push('A')],
        ));

        let violations = check_definition(&parts).unwrap_err();
        assert!(matches!(
            violations.as_slice(),
            [DefinitionViolation::NoOpLambda { .. }]
        ));
    }

    #[test]
    fn lambda_changing_state_is_progress() {
        let mut parts = balanced();
        parts.rules.push(Rule::new(
            id("q"),
            Trigger::Lambda,
            StackMatch::Top('A'),
            id("p"),
            vec![],
        ));
        assert!(validate(&parts).is_success());
    }

    #[test]
    fn popping_bottom_marker_is_not_progress() {
        let mut parts = balanced();
        parts.rules.push(Rule::new(
            id("p"),
            Trigger::Lambda,
            StackMatch::Top('Z'),
            id("p"),
            vec![StackOp::Pop],
        ));
        let violations = check_definition(&parts).unwrap_err();
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn unknown_end_marker_is_rejected() {
        let mut parts = balanced();
        parts.end_marker = Some('#');
        let violations = check_definition(&parts).unwrap_err();
        assert_eq!(
            violations,
            vec![DefinitionViolation::UnknownInputSymbol {
                symbol: '#',
                role: "end marker".to_string()
            }]
        );
    }

    #[test]
    fn violation_messages_name_the_problem() {
        let violation = DefinitionViolation::UnknownState {
            state: "x".to_string(),
            role: "rule target".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "rule target 'x' is not a declared state"
        );
    }
}
