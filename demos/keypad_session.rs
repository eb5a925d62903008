//! Keypad Session
//!
//! This example wires raw keypad characters into a session, the way a
//! presentation layer would: translate each key to an action, dispatch,
//! then read the two display lines.
//!
//! Key concepts:
//! - Fallible key-to-action translation at the host boundary
//! - The single-owner dispatch loop
//! - Display rendering with grouped integer digits
//!
//! Run with: cargo run --example keypad_session

use tally::core::{Action, InvalidKey};
use tally::session::Session;

/// Translate one keypad character into an action.
fn key_to_action(key: char) -> Result<Action, InvalidKey> {
    match key {
        'c' => Ok(Action::Clear),
        'd' => Ok(Action::DeleteDigit),
        '=' => Ok(Action::Evaluate),
        '+' | '-' | '*' | '÷' => Action::operation_key(key),
        other => Action::digit_key(other),
    }
}

fn main() {
    println!("=== Keypad Session ===\n");

    let mut session = Session::new();

    for key in "1234567.89+100=".chars() {
        match key_to_action(key) {
            Ok(action) => {
                session.dispatch(action);
                let frame = session.display();
                println!("key '{key}': [{}] [{}]", frame.expression, frame.operand);
            }
            Err(err) => println!("key '{key}': ignored ({err})"),
        }
    }

    // Unknown keys never reach the reducer.
    if let Err(err) = key_to_action('q') {
        println!("\nkey 'q': {err}");
    }

    println!(
        "\nDispatches: {}, final operand: {:?}",
        session.metadata().dispatches,
        session.state().current_operand
    );

    println!("\n=== Example Complete ===");
}
