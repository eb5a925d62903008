//! Invariant checks for state values.
//!
//! Checks accumulate ALL violations instead of stopping at the first one,
//! giving tests and host diagnostics a complete picture in a single pass.

use crate::core::state::CalculatorState;
use thiserror::Error;

/// A state value that breaks one of the calculator's invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("{field} operand '{value}' contains more than one decimal point")]
    MultipleDecimalPoints { field: &'static str, value: String },

    #[error("{field} operand '{value}' contains a character outside digits and '.'")]
    MalformedOperand { field: &'static str, value: String },

    #[error("an operation is pending with no operand to apply it to")]
    DanglingOperation,
}

/// Check every invariant of a state value, returning all violations found.
///
/// An empty vector means the state is well formed. Evaluator outputs
/// (`""`, `inf`, `-inf`, `NaN` and parsed numeric renderings) are
/// permitted operand values: they reach `current_operand` by design and
/// `previous_operand` through chaining.
pub fn check(state: &CalculatorState) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_operand("current", state.current_operand.as_deref(), &mut violations);
    check_operand(
        "previous",
        state.previous_operand.as_deref(),
        &mut violations,
    );

    if state.operation.is_some()
        && state.current_operand.is_none()
        && state.previous_operand.is_none()
    {
        violations.push(Violation::DanglingOperation);
    }

    violations
}

/// True if the state satisfies every invariant.
pub fn is_valid(state: &CalculatorState) -> bool {
    check(state).is_empty()
}

fn check_operand(field: &'static str, operand: Option<&str>, violations: &mut Vec<Violation>) {
    let Some(operand) = operand else { return };

    // Evaluator outputs bypass the digit-string shape.
    if operand.is_empty() || operand.parse::<f64>().is_ok() {
        return;
    }

    if operand.matches('.').count() > 1 {
        violations.push(Violation::MultipleDecimalPoints {
            field,
            value: operand.to_string(),
        });
    }

    if !operand.chars().all(|c| c.is_ascii_digit() || c == '.') {
        violations.push(Violation::MalformedOperand {
            field,
            value: operand.to_string(),
        });
    }
}
