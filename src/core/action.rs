//! Calculator actions and their payload types.
//!
//! Actions form a closed tagged union: one variant per user input kind,
//! each carrying only the payload it needs. A malformed payload cannot be
//! constructed, so the reducer never has to reject one.

use crate::core::state::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A key that is not one of the calculator's input affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("'{0}' is not a calculator key")]
pub struct InvalidKey(pub char);

/// A single digit-entry payload: `0` through `9` or the decimal point.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Digit {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Point,
}

impl Digit {
    /// Parse a digit from its keypad character.
    pub fn from_char(c: char) -> Result<Self, InvalidKey> {
        match c {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            '2' => Ok(Self::Two),
            '3' => Ok(Self::Three),
            '4' => Ok(Self::Four),
            '5' => Ok(Self::Five),
            '6' => Ok(Self::Six),
            '7' => Ok(Self::Seven),
            '8' => Ok(Self::Eight),
            '9' => Ok(Self::Nine),
            '.' => Ok(Self::Point),
            other => Err(InvalidKey(other)),
        }
    }

    /// The character this digit appends to an operand.
    pub fn as_char(&self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Point => '.',
        }
    }

    /// True for the `0` digit.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Zero)
    }

    /// True for the decimal point.
    pub fn is_point(&self) -> bool {
        matches!(self, Self::Point)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A user input event dispatched into the reducer.
///
/// The five variants map one-to-one onto the calculator's input
/// affordances: nineteen keys in total (ten digits, the decimal point,
/// four operators, clear, delete, evaluate).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Action {
    /// Append a digit (or decimal point) to the current operand.
    AddDigit(Digit),
    /// Commit the current operand to a pending operation.
    ChooseOperation(Operation),
    /// Reset to the empty state.
    Clear,
    /// Drop the last character of the current operand.
    DeleteDigit,
    /// Evaluate the pending expression.
    Evaluate,
}

impl Action {
    /// Build an `AddDigit` action from a raw keypad character.
    pub fn digit_key(c: char) -> Result<Self, InvalidKey> {
        Digit::from_char(c).map(Self::AddDigit)
    }

    /// Build a `ChooseOperation` action from a raw operator symbol.
    pub fn operation_key(c: char) -> Result<Self, InvalidKey> {
        Operation::from_symbol(c)
            .map(Self::ChooseOperation)
            .ok_or(InvalidKey(c))
    }
}
