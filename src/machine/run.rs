//! The lazy step-sequence producer.

use crate::core::{Configuration, Outcome, Rule, RunError, Stack, State, Trace, Trigger};
use crate::definition::Definition;
use crate::machine::resolve::{resolve, Resolution};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Where a run stands between snapshots.
struct Cursor<S: State> {
    state: S,
    // bytes of input already read
    consumed: usize,
    stack: Stack,
}

impl<S: State> Cursor<S> {
    fn fire(&self, rule: &Rule<S>) -> Self {
        let consumed = match rule.trigger {
            Trigger::Input(symbol) => self.consumed + symbol.len_utf8(),
            Trigger::Lambda => self.consumed,
        };
        Self {
            state: rule.to.clone(),
            consumed,
            stack: self.stack.apply(&rule.actions),
        }
    }
}

enum Phase<S: State> {
    Start(Cursor<S>),
    Running(Cursor<S>),
    Finished(Outcome),
}

/// Result of advancing a run by one step.
enum Step<S: State> {
    Emit(Configuration<S>),
    Done(Outcome),
}

/// One execution of a definition over one input string.
///
/// `Run` is a forward-only iterator of [`Configuration`] snapshots: the start
/// snapshot first, then one snapshot per fired rule. It ends after the
/// accepting snapshot, or after a single snapshot carrying
/// [`terminal_error`](Configuration::terminal_error). To replay, start a new
/// run.
///
/// Each run owns its own stack and snapshots; dropping it at any point is
/// safe. Snapshots share stack cells with each other, so yielding one costs
/// a copy of the unread input and nothing proportional to the stack depth.
///
/// # Precondition
///
/// The definition must not contain lambda cycles that leave state and stack
/// unchanged. Such a definition never terminates. Single-rule no-op lambdas
/// are rejected at build time; longer cycles are not detected.
///
/// # Example
///
/// ```rust
/// use pushdown::builder::{DefinitionBuilder, RuleBuilder};
/// use pushdown::core::{Outcome, StateId};
///
/// let p = StateId::from("p");
/// let definition = DefinitionBuilder::new()
///     .states([p.clone()])
///     .input_alphabet("a")
///     .stack_alphabet("AZ")
///     .bottom_marker('Z')
///     .initial(p.clone())
///     .accepting([p.clone()])
///     .rule_with(RuleBuilder::new().from(p.clone()).on('a').any_top().to(p.clone()))
///     .and_then(|b| b.build())
///     .unwrap();
///
/// let mut run = definition.run("aa");
/// assert_eq!(run.next().unwrap().remaining_input, "aa");
/// assert_eq!(run.next().unwrap().remaining_input, "a");
/// assert_eq!(run.next().unwrap().remaining_input, "");
/// assert!(run.next().is_none());
/// assert_eq!(run.outcome(), Some(&Outcome::Accepted));
/// ```
pub struct Run<'a, S: State> {
    definition: &'a Definition<S>,
    input: String,
    phase: Phase<S>,
    steps: usize,
}

/// Start a run of `definition` over `input`.
pub fn run<'a, S: State>(definition: &'a Definition<S>, input: &str) -> Run<'a, S> {
    let start = Cursor {
        state: definition.initial_state().clone(),
        consumed: 0,
        stack: Stack::new(definition.bottom_marker()),
    };
    Run {
        definition,
        input: input.to_string(),
        phase: Phase::Start(start),
        steps: 0,
    }
}

impl<'a, S: State> Run<'a, S> {
    pub fn definition(&self) -> &'a Definition<S> {
        self.definition
    }

    /// How the run ended; `None` until the sequence is exhausted.
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Number of rules fired so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Consume the rest of the run into a [`Trace`].
    pub fn into_trace(mut self) -> Trace<S> {
        let mut configurations = Vec::new();
        loop {
            match self.step() {
                Step::Emit(configuration) => configurations.push(configuration),
                Step::Done(outcome) => return Trace::new(configurations, outcome),
            }
        }
    }

    fn snapshot(&self, cursor: &Cursor<S>, rule: Option<&Rule<S>>) -> Configuration<S> {
        Configuration {
            state: cursor.state.clone(),
            remaining_input: self.input[cursor.consumed..].to_string(),
            stack: cursor.stack.clone(),
            fired_rule: rule.cloned(),
            rule_label: rule.and_then(|r| r.label.clone()),
            terminal_error: None,
        }
    }

    fn step(&mut self) -> Step<S> {
        let phase = std::mem::replace(&mut self.phase, Phase::Finished(Outcome::Accepted));
        let cursor = match phase {
            Phase::Start(cursor) => {
                trace!(
                    state = cursor.state.name(),
                    input = %self.input,
                    "run started"
                );
                let start = self.snapshot(&cursor, None);
                self.phase = Phase::Running(cursor);
                return Step::Emit(start);
            }
            Phase::Running(cursor) => cursor,
            Phase::Finished(outcome) => {
                self.phase = Phase::Finished(outcome.clone());
                return Step::Done(outcome);
            }
        };

        let top = cursor.stack.top();
        let next_symbol = self.input[cursor.consumed..].chars().next();
        match resolve(self.definition, &cursor.state, top, next_symbol) {
            Resolution::Fire(rule) => {
                let next = cursor.fire(rule);
                self.steps += 1;
                let snapshot = self.snapshot(&next, Some(rule));
                trace!(
                    step = self.steps,
                    rule = %rule,
                    state = snapshot.state.name(),
                    stack = %snapshot.stack,
                    remaining = snapshot.remaining_input.chars().count(),
                    "fired rule"
                );
                self.phase = Phase::Running(next);
                Step::Emit(snapshot)
            }
            Resolution::Halt => self.finish(cursor),
            Resolution::Stuck(error) => self.reject(cursor, error),
        }
    }

    fn finish(&mut self, cursor: Cursor<S>) -> Step<S> {
        if self.definition.accepts_at_end(&cursor.state, &cursor.stack) {
            debug!(
                state = cursor.state.name(),
                steps = self.steps,
                "input accepted"
            );
            self.phase = Phase::Finished(Outcome::Accepted);
            return Step::Done(Outcome::Accepted);
        }
        let error = RunError::NotAcceptedAtExhaustion {
            state: cursor.state.name().to_string(),
        };
        self.reject(cursor, error)
    }

    fn reject(&mut self, cursor: Cursor<S>, error: RunError) -> Step<S> {
        debug!(%error, steps = self.steps, "input rejected");
        let mut rejected = self.snapshot(&cursor, None);
        rejected.terminal_error = Some(error.clone());
        self.phase = Phase::Finished(Outcome::Rejected(error));
        Step::Emit(rejected)
    }
}

impl<S: State> Iterator for Run<'_, S> {
    type Item = Configuration<S>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Step::Emit(configuration) => Some(configuration),
            Step::Done(_) => None,
        }
    }
}

impl<S: State> FusedIterator for Run<'_, S> {}
