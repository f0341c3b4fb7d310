//! Pushdown: a deterministic pushdown automaton engine
//!
//! Pushdown runs hand-written DPDA transition tables over input strings and
//! yields every intermediate configuration, lazily, one step at a time.
//! The core is pure: a [`Definition`](definition::Definition) is immutable,
//! each run owns its own stack, and every emitted
//! [`Configuration`](core::Configuration) is a snapshot that never changes.
//!
//! # Core Concepts
//!
//! - **Definition**: states, alphabets, transition table, start configuration
//!   and acceptance mode
//! - **Rules**: keyed by `(state, input symbol or λ, stack top or *)`, with an
//!   ordered stack action list
//! - **Run**: an iterator of configurations ending in acceptance or a terminal error
//! - **Validation**: authoring checks that report every problem at once
//!
//! # Example
//!
//! ```rust
//! use pushdown::builder::{input_rule, DefinitionBuilder};
//! use pushdown::core::StackMatch::{Any, Top};
//! use pushdown::core::StackOp::{Pop, Push};
//! use pushdown::state_enum;
//!
//! state_enum! {
//!     enum Balanced {
//!         Pushing,
//!         Popping,
//!         Accept,
//!     }
//! }
//! use Balanced::{Accept, Popping, Pushing};
//!
//! let definition = DefinitionBuilder::new()
//!     .states([Pushing, Popping, Accept])
//!     .input_alphabet("ab$")
//!     .stack_alphabet("AZ")
//!     .bottom_marker('Z')
//!     .initial(Pushing)
//!     .accepting([Accept])
//!     .rules([
//!         input_rule(Pushing, 'a', Any, Pushing, vec![Push('A')]),
//!         input_rule(Pushing, 'b', Top('A'), Popping, vec![Pop]),
//!         input_rule(Popping, 'b', Top('A'), Popping, vec![Pop]),
//!         input_rule(Popping, '$', Top('Z'), Accept, vec![]),
//!     ])
//!     .build()
//!     .unwrap();
//!
//! let steps: Vec<_> = definition.run("aabb$").collect();
//! assert_eq!(steps.len(), 6);
//! assert_eq!(steps[5].state, Balanced::Accept);
//! assert!(definition.accepts(&steps[5]));
//!
//! let rejected = definition.trace("aab$");
//! assert!(rejected.error().is_some());
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod machine;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, DefinitionBuilder, RuleBuilder};
pub use core::{
    Configuration, Outcome, Rule, RunError, Stack, StackMatch, StackOp, State, StateId, Trigger,
};
pub use definition::{AcceptanceMode, Definition};
pub use machine::{run, Run};
