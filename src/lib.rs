//! Tally: a pure functional calculator input state machine.
//!
//! Tally models an in-progress arithmetic expression of the form
//! `previous operation current` as an immutable value, driven by a pure
//! reducer over five user actions: digit entry, operator selection,
//! clear, delete, and evaluate. The core is referentially transparent;
//! the thin imperative shell in [`session`] owns the state value and
//! serializes dispatches for a host.
//!
//! # Core Concepts
//!
//! - **Reducer**: pure function mapping (state, action) to the next state
//! - **Evaluator**: computes a numeric result from the pending expression
//! - **Formatter**: renders an operand with grouped integer digits
//!
//! Premature or malformed requests never error: they are defined identity
//! transitions. The only "error" values ever produced are the evaluator's
//! empty string on a failed parse and the standard floating-point
//! `inf`/`NaN` renderings, both surfaced as display text.
//!
//! # Example
//!
//! ```rust
//! use tally::core::{reduce, Action, CalculatorState, Digit, Operation};
//!
//! // 2 + 3 * 4 chains left to right: (2 + 3) * 4
//! let actions = [
//!     Action::AddDigit(Digit::Two),
//!     Action::ChooseOperation(Operation::Add),
//!     Action::AddDigit(Digit::Three),
//!     Action::ChooseOperation(Operation::Multiply),
//!     Action::AddDigit(Digit::Four),
//!     Action::Evaluate,
//! ];
//!
//! let state = actions
//!     .into_iter()
//!     .fold(CalculatorState::default(), reduce);
//!
//! assert_eq!(state.current_operand.as_deref(), Some("20"));
//! ```

pub mod core;
pub mod session;

// Re-export commonly used types
pub use self::core::{
    evaluate, format_operand, reduce, Action, CalculatorState, Digit, Operation, Phase,
};
pub use self::session::{DisplayFrame, Session, SharedSession};
