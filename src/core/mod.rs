//! Core automaton value types.
//!
//! This module contains the pure building blocks of a pushdown automaton:
//! - State labels via the `State` trait
//! - Rule keys, stack actions and transition rules
//! - The value-semantics `Stack`
//! - Configuration snapshots and collected traces
//!
//! Nothing here performs I/O or mutates shared state.

mod configuration;
mod error;
mod rule;
mod stack;
mod state;
mod symbol;
mod trace;

pub use configuration::Configuration;
pub use error::{Outcome, RunError};
pub use rule::{Rule, RuleKey};
pub use stack::Stack;
pub use state::{State, StateId};
pub use symbol::{StackMatch, StackOp, Trigger, LAMBDA, WILDCARD};
pub use trace::Trace;
