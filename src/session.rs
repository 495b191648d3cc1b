//! One operator's debugging session.
//!
//! A [`DebugSession`] owns an [`AnalysisOrchestrator`] and a private
//! [`HistoryStore`]. Submitting a request validates it, records it in the
//! history, then runs the analysis. A request that fails validation is
//! neither recorded nor dispatched.

use crate::analysis::{AnalysisOrchestrator, AnalysisOutcome, AnalysisRequest};
use crate::error::{HistoryError, ValidationError};
use crate::history::HistoryStore;
use crate::traits::{RealTimeProvider, TimeProvider};

/// Orchestrator plus per-session history.
#[derive(Debug)]
pub struct DebugSession<T: TimeProvider = RealTimeProvider> {
    orchestrator: AnalysisOrchestrator,
    history: HistoryStore<T>,
}

impl DebugSession {
    /// Start a session with an empty history on the system clock.
    #[must_use]
    pub const fn new(orchestrator: AnalysisOrchestrator) -> Self {
        Self::with_history(orchestrator, HistoryStore::new())
    }
}

impl<T: TimeProvider> DebugSession<T> {
    /// Start a session with the given history store.
    #[must_use]
    pub const fn with_history(orchestrator: AnalysisOrchestrator, history: HistoryStore<T>) -> Self {
        Self {
            orchestrator,
            history,
        }
    }

    /// Validate, record, and analyze a request.
    ///
    /// The request is recorded before dispatch, so it stays in the history
    /// even when the analysis degrades.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the request is incomplete or names an
    /// unpublished model; nothing is recorded in that case.
    pub async fn submit(
        &mut self,
        request: AnalysisRequest,
    ) -> Result<AnalysisOutcome, ValidationError> {
        self.orchestrator.validate(&request)?;
        self.history.append(request.clone());
        self.orchestrator.analyze_outcome(&request).await
    }

    /// Copy of a stored request, for editing and resubmission.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NotFound`] if `index` is out of range.
    pub fn replay(&self, index: usize) -> Result<AnalysisRequest, HistoryError> {
        self.history.replay(index)
    }

    /// The session's history.
    #[must_use]
    pub const fn history(&self) -> &HistoryStore<T> {
        &self.history
    }

    /// Forget every stored request.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// The session's orchestrator.
    #[must_use]
    pub const fn orchestrator(&self) -> &AnalysisOrchestrator {
        &self.orchestrator
    }
}
