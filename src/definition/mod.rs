//! Immutable automaton definitions.
//!
//! A [`Definition`] is built once, either through
//! [`DefinitionBuilder`](crate::builder::DefinitionBuilder) or from a JSON
//! document, and is then shared read-only by any number of runs.

mod document;

pub use document::{AcceptanceMode, DefinitionParts};

use crate::builder::BuildError;
use crate::core::{Configuration, Rule, Stack, StackMatch, State, Trace, Trigger};
use crate::machine::{self, Run};
use crate::validation;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

type RuleIndex<S> = HashMap<S, HashMap<(Trigger, StackMatch), usize>>;

/// A deterministic pushdown automaton.
///
/// Holds the states, both alphabets, the transition table, the start
/// configuration and the acceptance criterion. Construction validates the
/// whole table (see [`validation::check_definition`]).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
    bound = "",
    try_from = "DefinitionParts<S>",
    into = "DefinitionParts<S>"
)]
pub struct Definition<S: State> {
    states: Vec<S>,
    input_alphabet: BTreeSet<char>,
    stack_alphabet: BTreeSet<char>,
    bottom_marker: char,
    initial_state: S,
    accepting_states: Vec<S>,
    acceptance: AcceptanceMode,
    end_marker: Option<char>,
    rules: Vec<Rule<S>>,
    index: RuleIndex<S>,
}

impl<S: State> Definition<S> {
    /// Validate `parts` and build the definition.
    pub fn from_parts(parts: DefinitionParts<S>) -> Result<Self, BuildError> {
        if let Err(violations) = validation::check_definition(&parts) {
            return Err(BuildError::InvalidDefinition { violations });
        }

        let mut index: RuleIndex<S> = HashMap::new();
        for (position, rule) in parts.rules.iter().enumerate() {
            index
                .entry(rule.from.clone())
                .or_default()
                .entry((rule.trigger, rule.stack_top))
                .or_insert(position);
        }

        Ok(Self {
            states: parts.states,
            input_alphabet: parts.input_alphabet,
            stack_alphabet: parts.stack_alphabet,
            bottom_marker: parts.bottom_marker,
            initial_state: parts.initial_state,
            accepting_states: parts.accepting_states,
            acceptance: parts.acceptance,
            end_marker: parts.end_marker,
            rules: parts.rules,
            index,
        })
    }

    /// Copy out the raw parts, e.g. for editing and rebuilding.
    pub fn to_parts(&self) -> DefinitionParts<S> {
        DefinitionParts {
            states: self.states.clone(),
            input_alphabet: self.input_alphabet.clone(),
            stack_alphabet: self.stack_alphabet.clone(),
            bottom_marker: self.bottom_marker,
            initial_state: self.initial_state.clone(),
            accepting_states: self.accepting_states.clone(),
            acceptance: self.acceptance,
            end_marker: self.end_marker,
            rules: self.rules.clone(),
        }
    }

    /// Load a definition from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let parts: DefinitionParts<S> =
            serde_json::from_str(json).map_err(|e| BuildError::MalformedDocument(e.to_string()))?;
        Self::from_parts(parts)
    }

    /// Write the definition as a pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String, BuildError> {
        serde_json::to_string_pretty(&self.to_parts())
            .map_err(|e| BuildError::SerializationFailed(e.to_string()))
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn input_alphabet(&self) -> &BTreeSet<char> {
        &self.input_alphabet
    }

    pub fn stack_alphabet(&self) -> &BTreeSet<char> {
        &self.stack_alphabet
    }

    pub fn bottom_marker(&self) -> char {
        self.bottom_marker
    }

    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    pub fn accepting_states(&self) -> &[S] {
        &self.accepting_states
    }

    pub fn acceptance(&self) -> AcceptanceMode {
        self.acceptance
    }

    pub fn end_marker(&self) -> Option<char> {
        self.end_marker
    }

    pub fn rules(&self) -> &[Rule<S>] {
        &self.rules
    }

    pub fn is_accepting_state(&self, state: &S) -> bool {
        self.accepting_states.contains(state)
    }

    /// Exact table lookup, no priority resolution.
    pub fn rule(&self, state: &S, trigger: Trigger, stack_top: StackMatch) -> Option<&Rule<S>> {
        self.index
            .get(state)
            .and_then(|by_key| by_key.get(&(trigger, stack_top)))
            .map(|&position| &self.rules[position])
    }

    /// Whether `configuration` is an accepting end point of a run: no
    /// error, input exhausted, accepting state, and the stack condition of
    /// the acceptance mode.
    pub fn accepts(&self, configuration: &Configuration<S>) -> bool {
        if configuration.is_error() || !configuration.input_exhausted() {
            return false;
        }
        self.accepts_at_end(&configuration.state, &configuration.stack)
    }

    /// Acceptance test for a position whose input is already exhausted.
    pub(crate) fn accepts_at_end(&self, state: &S, stack: &Stack) -> bool {
        let stack_holds = match self.acceptance {
            AcceptanceMode::FinalStateAndEmptyStack => stack.holds_only_bottom(),
            AcceptanceMode::FinalState => true,
        };
        stack_holds && self.is_accepting_state(state)
    }

    /// Start a lazy run over `input`.
    pub fn run<'a>(&'a self, input: &str) -> Run<'a, S> {
        machine::run(self, input)
    }

    /// Start a run over `input` with the declared end marker appended.
    /// Without a declared marker this is the same as [`run`](Self::run).
    pub fn run_terminated<'a>(&'a self, input: &str) -> Run<'a, S> {
        match self.end_marker {
            Some(marker) => machine::run(self, &format!("{input}{marker}")),
            None => machine::run(self, input),
        }
    }

    /// Run `input` to completion and collect the trace.
    pub fn trace(&self, input: &str) -> Trace<S> {
        self.run(input).into_trace()
    }
}

impl<S: State> TryFrom<DefinitionParts<S>> for Definition<S> {
    type Error = BuildError;

    fn try_from(parts: DefinitionParts<S>) -> Result<Self, Self::Error> {
        Self::from_parts(parts)
    }
}

impl<S: State> From<Definition<S>> for DefinitionParts<S> {
    fn from(definition: Definition<S>) -> Self {
        DefinitionParts {
            states: definition.states,
            input_alphabet: definition.input_alphabet,
            stack_alphabet: definition.stack_alphabet,
            bottom_marker: definition.bottom_marker,
            initial_state: definition.initial_state,
            accepting_states: definition.accepting_states,
            acceptance: definition.acceptance,
            end_marker: definition.end_marker,
            rules: definition.rules,
        }
    }
}
