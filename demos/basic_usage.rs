//! Basic Reducer Usage
//!
//! This example drives the pure reducer directly, the way any host can.
//!
//! Key concepts:
//! - Immutable state values replaced on every transition
//! - Left-to-right chaining with no operator precedence
//! - Overwrite semantics after an evaluate
//!
//! Run with: cargo run --example basic_usage

use tally::core::{reduce, Action, CalculatorState, Digit, Operation};

fn main() {
    println!("=== Basic Reducer Usage ===\n");

    // 2 + 3 * 4 chains as (2 + 3) * 4
    let actions = [
        Action::AddDigit(Digit::Two),
        Action::ChooseOperation(Operation::Add),
        Action::AddDigit(Digit::Three),
        Action::ChooseOperation(Operation::Multiply),
        Action::AddDigit(Digit::Four),
        Action::Evaluate,
    ];

    let mut state = CalculatorState::default();
    for action in actions {
        state = reduce(state, action);
        println!("{action:?} -> phase {}, state {state:?}", state.phase().name());
    }

    println!("\nResult: {:?}", state.current_operand);

    // The next digit starts a fresh computation instead of appending.
    state = reduce(state, Action::AddDigit(Digit::Nine));
    println!("After AddDigit(Nine): {:?}", state.current_operand);

    println!("\n=== Example Complete ===");
}
