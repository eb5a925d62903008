//! Display rendering for the presentation boundary.

use crate::core::{format_operand, CalculatorState};
use serde::{Deserialize, Serialize};

/// The two lines of display text a host renders after each dispatch.
///
/// `expression` is the committed half of the expression (formatted
/// previous operand plus the pending operation symbol), `operand` is the
/// formatted current operand. Either line may be empty; the host renders
/// them as-is.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct DisplayFrame {
    pub expression: String,
    pub operand: String,
}

impl DisplayFrame {
    /// Render the display lines for a state.
    pub fn render(state: &CalculatorState) -> Self {
        let expression = match (
            format_operand(state.previous_operand.as_deref()),
            state.operation,
        ) {
            (Some(previous), Some(operation)) => format!("{previous} {operation}"),
            (Some(previous), None) => previous,
            _ => String::new(),
        };
        let operand = format_operand(state.current_operand.as_deref()).unwrap_or_default();
        Self {
            expression,
            operand,
        }
    }
}
