//! The pure functional core of the calculator.
//!
//! This module contains everything with non-trivial logic:
//! - The state and action value types
//! - The reducer mapping (state, action) to the next state
//! - The evaluator and the operand formatter
//! - Invariant checks over state values
//!
//! All logic in this module is pure (no side effects), following the
//! "pure core, imperative shell" philosophy. The imperative shell lives
//! in [`crate::session`].

mod action;
mod eval;
mod format;
pub mod invariants;
mod reducer;
mod state;

pub use action::{Action, Digit, InvalidKey};
pub use eval::evaluate;
pub use format::format_operand;
pub use reducer::reduce;
pub use state::{CalculatorState, Operation, Phase};
