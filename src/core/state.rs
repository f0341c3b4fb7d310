//! State labels for pushdown automata.
//!
//! Automaton states are opaque labels. Anything implementing [`State`] can
//! label a state: a plain enum (see [`state_enum!`](crate::state_enum)) or
//! the string-backed [`StateId`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for automaton state labels.
///
/// All methods are pure. States are compared and hashed to index the
/// transition table, and serialized with definitions and run reports.
///
/// # Required Traits
///
/// - `Clone`: states are copied into every configuration snapshot
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states travel in definition documents and reports
///
/// # Example
///
/// ```rust
/// use pushdown::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Parse {
///     Reading,
///     Matching,
///     Done,
/// }
///
/// impl State for Parse {
///     fn name(&self) -> &str {
///         match self {
///             Self::Reading => "Reading",
///             Self::Matching => "Matching",
///             Self::Done => "Done",
///         }
///     }
/// }
///
/// assert_eq!(Parse::Matching.name(), "Matching");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display, rule formatting and logging.
    fn name(&self) -> &str;
}

/// String-backed state label, for automata whose states are not known
/// at compile time (e.g. loaded from a JSON document).
///
/// # Example
///
/// ```rust
/// use pushdown::core::{State, StateId};
///
/// let p = StateId::from("p");
/// assert_eq!(p.name(), "p");
/// assert_eq!(p.to_string(), "p");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl State for StateId {
    fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for StateId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
