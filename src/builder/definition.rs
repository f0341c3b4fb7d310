//! Builder for constructing automaton definitions.

use crate::builder::error::BuildError;
use crate::builder::rule::RuleBuilder;
use crate::core::{Rule, State};
use crate::definition::{AcceptanceMode, Definition, DefinitionParts};
use std::collections::BTreeSet;

/// Builder for constructing definitions with a fluent API.
pub struct DefinitionBuilder<S: State> {
    states: Vec<S>,
    input_alphabet: BTreeSet<char>,
    stack_alphabet: BTreeSet<char>,
    bottom_marker: Option<char>,
    initial: Option<S>,
    accepting: Vec<S>,
    acceptance: AcceptanceMode,
    end_marker: Option<char>,
    rules: Vec<Rule<S>>,
}

impl<S: State> DefinitionBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            input_alphabet: BTreeSet::new(),
            stack_alphabet: BTreeSet::new(),
            bottom_marker: None,
            initial: None,
            accepting: Vec::new(),
            acceptance: AcceptanceMode::default(),
            end_marker: None,
            rules: Vec::new(),
        }
    }

    /// Declare states. Repeated declarations are ignored.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        for state in states {
            if !self.states.contains(&state) {
                self.states.push(state);
            }
        }
        self
    }

    /// Add every character of `symbols` to the input alphabet.
    pub fn input_alphabet(mut self, symbols: &str) -> Self {
        self.input_alphabet.extend(symbols.chars());
        self
    }

    /// Add every character of `symbols` to the stack alphabet.
    pub fn stack_alphabet(mut self, symbols: &str) -> Self {
        self.stack_alphabet.extend(symbols.chars());
        self
    }

    /// Set the bottom marker (required). It must be in the stack alphabet.
    pub fn bottom_marker(mut self, symbol: char) -> Self {
        self.bottom_marker = Some(symbol);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    pub fn accepting(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Defaults to [`AcceptanceMode::FinalStateAndEmptyStack`].
    pub fn acceptance(mut self, mode: AcceptanceMode) -> Self {
        self.acceptance = mode;
        self
    }

    /// Declare an end-of-input symbol for
    /// [`Definition::run_terminated`]. It must be in the input alphabet.
    pub fn end_marker(mut self, symbol: char) -> Self {
        self.end_marker = Some(symbol);
        self
    }

    /// Add a rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn rule_with(mut self, builder: RuleBuilder<S>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.rules.push(rule);
        Ok(self)
    }

    /// Add a pre-built rule.
    pub fn rule(mut self, rule: Rule<S>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once.
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule<S>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Build the definition.
    /// Returns an error if required fields are missing or the table fails
    /// validation.
    pub fn build(self) -> Result<Definition<S>, BuildError> {
        let initial_state = self.initial.ok_or(BuildError::MissingInitialState)?;
        let bottom_marker = self.bottom_marker.ok_or(BuildError::MissingBottomMarker)?;

        Definition::from_parts(DefinitionParts {
            states: self.states,
            input_alphabet: self.input_alphabet,
            stack_alphabet: self.stack_alphabet,
            bottom_marker,
            initial_state,
            accepting_states: self.accepting,
            acceptance: self.acceptance,
            end_marker: self.end_marker,
            rules: self.rules,
        })
    }
}

impl<S: State> Default for DefinitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
