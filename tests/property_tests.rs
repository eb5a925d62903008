//! Property-based tests for the calculator core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated action sequences.

use proptest::prelude::*;
use tally::core::{invariants, reduce, Action, CalculatorState, Digit, Operation};

prop_compose! {
    fn arbitrary_digit()(variant in 0..11u8) -> Digit {
        match variant {
            0 => Digit::Zero,
            1 => Digit::One,
            2 => Digit::Two,
            3 => Digit::Three,
            4 => Digit::Four,
            5 => Digit::Five,
            6 => Digit::Six,
            7 => Digit::Seven,
            8 => Digit::Eight,
            9 => Digit::Nine,
            _ => Digit::Point,
        }
    }
}

prop_compose! {
    fn arbitrary_operation()(variant in 0..4u8) -> Operation {
        match variant {
            0 => Operation::Add,
            1 => Operation::Subtract,
            2 => Operation::Multiply,
            _ => Operation::Divide,
        }
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        5 => arbitrary_digit().prop_map(Action::AddDigit),
        2 => arbitrary_operation().prop_map(Action::ChooseOperation),
        1 => Just(Action::Clear),
        2 => Just(Action::DeleteDigit),
        2 => Just(Action::Evaluate),
    ]
}

/// Replay a whole action sequence from the empty state.
fn drive(actions: &[Action]) -> CalculatorState {
    actions
        .iter()
        .fold(CalculatorState::default(), |state, action| {
            reduce(state, *action)
        })
}

proptest! {
    #[test]
    fn reducer_is_deterministic(
        actions in prop::collection::vec(arbitrary_action(), 0..30),
        action in arbitrary_action(),
    ) {
        let state = drive(&actions);
        let result1 = reduce(state.clone(), action);
        let result2 = reduce(state, action);
        prop_assert_eq!(result1, result2);
    }

    #[test]
    fn clear_from_any_state_yields_the_empty_state(
        actions in prop::collection::vec(arbitrary_action(), 0..30)
    ) {
        let state = drive(&actions);
        let cleared = reduce(state, Action::Clear);
        prop_assert_eq!(cleared, CalculatorState::default());
    }

    #[test]
    fn reachable_states_satisfy_the_invariants(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let mut state = CalculatorState::default();
        for action in &actions {
            state = reduce(state, *action);
            let violations = invariants::check(&state);
            prop_assert!(violations.is_empty(), "violations after {:?}: {:?}", action, violations);
        }
    }

    #[test]
    fn operands_never_hold_two_decimal_points(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let state = drive(&actions);
        for operand in [&state.current_operand, &state.previous_operand] {
            if let Some(operand) = operand {
                // Evaluator outputs are numeric renderings; typed operands
                // are guarded by the reducer. Either way, one point max.
                prop_assert!(operand.matches('.').count() <= 1, "operand: {:?}", operand);
            }
        }
    }

    #[test]
    fn delete_is_a_no_op_without_a_current_operand(
        actions in prop::collection::vec(arbitrary_action(), 0..30)
    ) {
        let state = drive(&actions);
        prop_assume!(state.current_operand.is_none() && !state.overwrite);
        let after = reduce(state.clone(), Action::DeleteDigit);
        prop_assert_eq!(after, state);
    }

    #[test]
    fn formatting_never_alters_the_digits(
        actions in prop::collection::vec(arbitrary_action(), 0..30)
    ) {
        let state = drive(&actions);
        if let Some(operand) = state.current_operand.as_deref() {
            let formatted = tally::format_operand(Some(operand)).unwrap();
            prop_assert_eq!(formatted.replace(',', ""), operand);
        }
    }

    #[test]
    fn append_then_delete_restores_the_operand(
        actions in prop::collection::vec(arbitrary_action(), 0..30),
        digit in arbitrary_digit(),
    ) {
        let state = drive(&actions);
        prop_assume!(!state.overwrite);

        let appended = reduce(state.clone(), Action::AddDigit(digit));
        // Only consider cases where the digit actually landed.
        prop_assume!(appended != state);

        let deleted = reduce(appended, Action::DeleteDigit);
        prop_assert_eq!(deleted.current_operand, state.current_operand);
    }

    #[test]
    fn overwrite_is_set_only_by_a_completed_evaluate(
        actions in prop::collection::vec(arbitrary_action(), 0..30),
        action in arbitrary_action(),
    ) {
        let state = drive(&actions);
        prop_assume!(!state.overwrite);
        let next = reduce(state.clone(), action);
        if next.overwrite {
            // Only a completed evaluate may raise the flag.
            prop_assert_eq!(action, Action::Evaluate);
            prop_assert!(state.operation.is_some());
            prop_assert!(state.current_operand.is_some());
            prop_assert!(state.previous_operand.is_some());
        }
    }

    #[test]
    fn state_round_trips_through_json(
        actions in prop::collection::vec(arbitrary_action(), 0..30)
    ) {
        let state = drive(&actions);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
