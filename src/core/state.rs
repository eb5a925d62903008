//! Calculator state and operation types.
//!
//! The state is an immutable value: every transition produces a brand-new
//! `CalculatorState` and never mutates in place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four supported binary arithmetic operators.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// The display symbol for this operation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "÷",
        }
    }

    /// Parse an operation from its keypad symbol.
    ///
    /// Returns `None` for anything outside `+ - * ÷`; the fallible host
    /// boundary lives in [`Action::operation_key`](crate::core::Action::operation_key).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The logical phase a calculator state is in.
///
/// Phases are derived from the state value, never stored. None of them is
/// terminal: the machine runs indefinitely across a session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// No operands, no operation. The initial state and the result of clear.
    Empty,
    /// The first operand is being typed; no operation chosen yet.
    EnteringFirst,
    /// An operation is pending and the second operand has not started.
    OperatorChosen,
    /// An operation is pending and the second operand is being typed.
    EnteringSecond,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::EnteringFirst => "EnteringFirst",
            Self::OperatorChosen => "OperatorChosen",
            Self::EnteringSecond => "EnteringSecond",
        }
    }
}

/// The in-progress arithmetic expression `previous operation current`.
///
/// All fields are optional; the all-absent value (with `overwrite` false)
/// is the empty initial state. Transitions are performed by
/// [`crate::core::reducer::reduce`], which replaces the whole value.
///
/// # Example
///
/// ```rust
/// use tally::core::{reduce, Action, CalculatorState, Digit};
///
/// let state = CalculatorState::default();
/// let state = reduce(state, Action::AddDigit(Digit::Seven));
/// assert_eq!(state.current_operand.as_deref(), Some("7"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    /// The operand currently being typed, or absent.
    pub current_operand: Option<String>,
    /// An operand already committed to a pending operation, or absent.
    pub previous_operand: Option<String>,
    /// The pending operation, or absent.
    pub operation: Option<Operation>,
    /// When true, the next digit entry replaces `current_operand`
    /// instead of appending. Set only by an evaluate transition.
    #[serde(default)]
    pub overwrite: bool,
}

impl CalculatorState {
    /// The empty state: both operands and the operation absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if this is the empty state.
    pub fn is_empty(&self) -> bool {
        self.current_operand.is_none() && self.previous_operand.is_none() && self.operation.is_none()
    }

    /// Derive the logical phase of this state.
    pub fn phase(&self) -> Phase {
        match (&self.previous_operand, &self.current_operand) {
            (None, None) => Phase::Empty,
            (None, Some(_)) => Phase::EnteringFirst,
            (Some(_), None) => Phase::OperatorChosen,
            (Some(_), Some(_)) => Phase::EnteringSecond,
        }
    }
}
