//! The execution engine.
//!
//! A run resolves one rule per step, by fixed priority:
//!
//! 1. a lambda rule on the current stack top (no input consumed)
//! 2. a rule on the next input symbol and the stack top
//! 3. a rule on the next input symbol and the wildcard stack match
//!
//! Lambda moves keep firing after the input is exhausted. Once nothing
//! applies, the run accepts if the definition's acceptance criterion holds
//! and otherwise emits one final snapshot carrying the [`RunError`].
//!
//! Runs are synchronous and pull-based: nothing happens until the caller
//! asks for the next snapshot.
//!
//! [`RunError`]: crate::core::RunError

mod resolve;
mod run;

pub use run::{run, Run};
