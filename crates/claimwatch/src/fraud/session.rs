use std::sync::{Mutex, MutexGuard, PoisonError};

use super::domain::PredictionResult;

/// Identifies one submission within an [`AnalysisSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Default)]
struct SessionState {
    generation: u64,
    current: Option<PredictionResult>,
}

/// The single displayed result of an interactive surface.
///
/// A result is applied only while its ticket is current; a newer submission
/// or a reset makes every older ticket stale, so a slow explanation can never
/// land on a form that has moved on.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    state: Mutex<SessionState>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a new submission. Clears the displayed result.
    pub fn begin(&self) -> SubmissionTicket {
        let mut state = self.lock();
        state.generation += 1;
        state.current = None;
        SubmissionTicket(state.generation)
    }

    /// Clear the form. Outstanding tickets become stale.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.generation += 1;
        state.current = None;
    }

    /// Apply a finished result. Returns `false` if the ticket is stale.
    pub fn complete(&self, ticket: SubmissionTicket, result: PredictionResult) -> bool {
        let mut state = self.lock();
        if state.generation != ticket.0 {
            return false;
        }
        state.current = Some(result);
        true
    }

    pub fn is_current(&self, ticket: SubmissionTicket) -> bool {
        self.lock().generation == ticket.0
    }

    pub fn current(&self) -> Option<PredictionResult> {
        self.lock().current.clone()
    }
}
