//! Evaluation of a pending expression.

use crate::core::state::{CalculatorState, Operation};

/// Compute the numeric result of `previous operation current`.
///
/// Both operands are parsed as `f64`. If either is absent or fails to
/// parse, returns the empty string. Division by zero is not guarded: it
/// yields the standard floating-point `inf`/`NaN` renderings, which are
/// surfaced as display text rather than errors.
pub fn evaluate(state: &CalculatorState) -> String {
    let prev = state
        .previous_operand
        .as_deref()
        .and_then(|s| s.parse::<f64>().ok());
    let current = state
        .current_operand
        .as_deref()
        .and_then(|s| s.parse::<f64>().ok());

    let (Some(prev), Some(current), Some(operation)) = (prev, current, state.operation) else {
        return String::new();
    };

    let computation = match operation {
        Operation::Add => prev + current,
        Operation::Subtract => prev - current,
        Operation::Multiply => prev * current,
        Operation::Divide => prev / current,
    };
    computation.to_string()
}
