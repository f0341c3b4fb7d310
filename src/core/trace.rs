//! Collected run history.
//!
//! A [`Trace`] is the fully consumed configuration sequence of one run
//! together with its outcome.

use super::configuration::Configuration;
use super::error::{Outcome, RunError};
use super::state::State;
use serde::{Deserialize, Serialize};

/// Ordered configurations of a finished run.
///
/// # Example
///
/// ```rust
/// use pushdown::builder::{DefinitionBuilder, RuleBuilder};
/// use pushdown::core::StateId;
///
/// let p = StateId::from("p");
/// let f = StateId::from("f");
/// let definition = DefinitionBuilder::new()
///     .states([p.clone(), f.clone()])
///     .input_alphabet("a")
///     .stack_alphabet("Z")
///     .bottom_marker('Z')
///     .initial(p.clone())
///     .accepting([f.clone()])
///     .rule_with(RuleBuilder::new().from(p).on('a').top('Z').to(f))
///     .and_then(|b| b.build())
///     .unwrap();
///
/// let trace = definition.trace("a");
/// assert!(trace.is_accepted());
/// assert_eq!(trace.len(), 2);
/// assert_eq!(trace.path().len(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Trace<S: State> {
    configurations: Vec<Configuration<S>>,
    outcome: Outcome,
}

impl<S: State> Trace<S> {
    pub fn new(configurations: Vec<Configuration<S>>, outcome: Outcome) -> Self {
        Self {
            configurations,
            outcome,
        }
    }

    /// All configurations, start snapshot first.
    pub fn configurations(&self) -> &[Configuration<S>] {
        &self.configurations
    }

    pub fn into_configurations(self) -> Vec<Configuration<S>> {
        self.configurations
    }

    pub fn last(&self) -> Option<&Configuration<S>> {
        self.configurations.last()
    }

    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_accepted(&self) -> bool {
        self.outcome.is_accepted()
    }

    pub fn error(&self) -> Option<&RunError> {
        self.outcome.error()
    }

    /// States visited, one per configuration.
    pub fn path(&self) -> Vec<&S> {
        self.configurations.iter().map(|c| &c.state).collect()
    }

    /// Plain-text step listing, one line per configuration.
    ///
    /// The rejection snapshot is not listed as a step; its error closes the
    /// listing instead.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.configurations.len() + 1);
        for (index, configuration) in self
            .configurations
            .iter()
            .filter(|c| !c.is_error())
            .enumerate()
        {
            lines.push(format!("Step {index}: {configuration}"));
        }
        match &self.outcome {
            Outcome::Accepted => lines.push("Accepted".to_string()),
            Outcome::Rejected(error) => lines.push(format!("Rejected: {error}")),
        }
        lines.join("\n")
    }
}
