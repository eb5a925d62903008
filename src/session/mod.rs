//! The imperative shell around the pure core.
//!
//! A [`Session`] owns a single [`CalculatorState`] value and replaces it
//! atomically on every dispatch. Each action is fully processed before the
//! next one can be dispatched; no transition suspends or blocks.

mod display;
mod shared;

pub use display::DisplayFrame;
pub use shared::SharedSession;

use crate::core::{reduce, Action, CalculatorState, Phase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bookkeeping tracked by a session, separate from the calculator state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// When the session was created
    pub created_at: DateTime<Utc>,

    /// When the last action was dispatched
    pub updated_at: DateTime<Utc>,

    /// Total number of actions dispatched
    pub dispatches: usize,
}

impl Default for SessionMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            dispatches: 0,
        }
    }
}

/// Single-owner dispatch loop over the pure reducer.
///
/// The session holds the current state value; each [`dispatch`] replaces
/// it with `reduce(state, action)`. State lives only for the duration of
/// the session — nothing is persisted by the crate, though the state is
/// serializable if a host wants to snapshot it.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, Digit, Operation};
/// use tally::session::Session;
///
/// let mut session = Session::new();
/// session.dispatch(Action::AddDigit(Digit::One));
/// session.dispatch(Action::AddDigit(Digit::Two));
/// session.dispatch(Action::ChooseOperation(Operation::Add));
/// session.dispatch(Action::AddDigit(Digit::Eight));
/// session.dispatch(Action::Evaluate);
///
/// assert_eq!(session.display().operand, "20");
/// ```
///
/// [`dispatch`]: Session::dispatch
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Session {
    state: CalculatorState,
    metadata: SessionMetadata,
}

impl Session {
    /// Create a session holding the empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a session from a previously captured state.
    pub fn from_state(state: CalculatorState) -> Self {
        Self {
            state,
            metadata: SessionMetadata::default(),
        }
    }

    /// Apply one action, replacing the held state with the reducer's
    /// output. Returns the new state.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        self.state = reduce(std::mem::take(&mut self.state), action);
        self.metadata.dispatches += 1;
        self.metadata.updated_at = Utc::now();
        &self.state
    }

    /// The current state (pure).
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The logical phase of the current state (pure).
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Render the current display lines (pure).
    pub fn display(&self) -> DisplayFrame {
        DisplayFrame::render(&self.state)
    }

    /// Session bookkeeping (pure).
    pub fn metadata(&self) -> &SessionMetadata {
        &self.metadata
    }
}
