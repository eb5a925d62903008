//! The calculator reducer: projects actions onto state.
//!
//! `reduce` is pure and total. Premature or malformed requests (deleting
//! from an empty operand, evaluating an incomplete expression) are defined
//! identity transitions, never errors.

use crate::core::action::{Action, Digit};
use crate::core::eval::evaluate;
use crate::core::state::{CalculatorState, Operation};

/// Apply one action to a state, returning the next state.
///
/// The input state is consumed and a brand-new value is returned; the
/// caller replaces its held state wholesale.
///
/// # Example
///
/// ```rust
/// use tally::core::{reduce, Action, CalculatorState, Digit, Operation};
///
/// let mut state = CalculatorState::default();
/// state = reduce(state, Action::AddDigit(Digit::Two));
/// state = reduce(state, Action::ChooseOperation(Operation::Add));
/// state = reduce(state, Action::AddDigit(Digit::Three));
/// state = reduce(state, Action::Evaluate);
/// assert_eq!(state.current_operand.as_deref(), Some("5"));
/// ```
pub fn reduce(state: CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(operation) => choose_operation(state, operation),
        Action::Clear => CalculatorState::default(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_expression(state),
    }
}

fn add_digit(state: CalculatorState, digit: Digit) -> CalculatorState {
    // A fresh digit right after a result starts a new computation.
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.as_char().to_string()),
            overwrite: false,
            ..state
        };
    }

    // No leading-zero accumulation.
    if digit.is_zero() && state.current_operand.as_deref() == Some("0") {
        return state;
    }

    // At most one decimal point per operand.
    if digit.is_point()
        && state
            .current_operand
            .as_deref()
            .is_some_and(|operand| operand.contains('.'))
    {
        return state;
    }

    let mut operand = state.current_operand.clone().unwrap_or_default();
    operand.push(digit.as_char());
    CalculatorState {
        current_operand: Some(operand),
        ..state
    }
}

fn choose_operation(state: CalculatorState, operation: Operation) -> CalculatorState {
    if state.current_operand.is_none() && state.previous_operand.is_none() {
        return state;
    }

    // Rebind the pending operator before the second operand starts.
    if state.current_operand.is_none() {
        return CalculatorState {
            operation: Some(operation),
            ..state
        };
    }

    // Finalize the first operand.
    if state.previous_operand.is_none() {
        return CalculatorState {
            operation: Some(operation),
            previous_operand: state.current_operand,
            current_operand: None,
            overwrite: state.overwrite,
        };
    }

    // Both operands present: chain left-to-right, no precedence.
    CalculatorState {
        previous_operand: Some(evaluate(&state)),
        operation: Some(operation),
        current_operand: None,
        overwrite: state.overwrite,
    }
}

fn delete_digit(state: CalculatorState) -> CalculatorState {
    // Right after a result, delete starts fresh.
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state
        };
    }

    match state.current_operand.as_deref() {
        None => state,
        Some(operand) => {
            let mut chars = operand.chars();
            chars.next_back();
            let truncated = chars.as_str().to_string();
            CalculatorState {
                current_operand: if truncated.is_empty() {
                    None
                } else {
                    Some(truncated)
                },
                ..state
            }
        }
    }
}

fn evaluate_expression(state: CalculatorState) -> CalculatorState {
    if state.operation.is_none()
        || state.current_operand.is_none()
        || state.previous_operand.is_none()
    {
        return state;
    }

    CalculatorState {
        current_operand: Some(evaluate(&state)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}
