//! Mutex-guarded session for multi-threaded hosts.

use crate::core::{Action, CalculatorState, Phase};
use crate::session::{DisplayFrame, Session};
use std::sync::{Arc, Mutex, PoisonError};

/// A [`Session`] behind a mutex, for hosts where input events arrive on
/// more than one thread.
///
/// Dispatches are serialized through the lock, preserving the
/// single-writer discipline the reducer assumes. The state is a plain
/// value replaced wholesale on each transition, so a panicked writer
/// cannot leave it torn; lock poisoning is therefore recovered by taking
/// the inner value.
#[derive(Clone, Debug, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    /// Create a shared session holding the empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one action, returning the resulting state.
    pub fn dispatch(&self, action: Action) -> CalculatorState {
        let mut session = self.lock();
        session.dispatch(action).clone()
    }

    /// A copy of the current state.
    pub fn state(&self) -> CalculatorState {
        self.lock().state().clone()
    }

    /// The logical phase of the current state.
    pub fn phase(&self) -> Phase {
        self.lock().phase()
    }

    /// Render the current display lines.
    pub fn display(&self) -> DisplayFrame {
        self.lock().display()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
