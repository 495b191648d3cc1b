//! In-memory analysis history.
//!
//! [`HistoryStore`] keeps every distinct request submitted during a session,
//! oldest first. Entries are immutable once appended and leave the store
//! only through [`HistoryStore::clear`]. Nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisRequest;
use crate::error::HistoryError;
use crate::text::truncate;
use crate::traits::{RealTimeProvider, TimeProvider};

/// Characters of the defective user message shown in a label.
const LABEL_MESSAGE_CHARS: usize = 40;

/// One stored request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the request was accepted.
    pub timestamp: DateTime<Utc>,
    /// The request as submitted.
    pub request: AnalysisRequest,
}

impl HistoryEntry {
    /// One-line summary for history pickers.
    ///
    /// Format: `<timestamp> | <bot type> | <provider>/<model> | <message>`,
    /// with the defective user message cut to 40 characters.
    #[must_use]
    pub fn label(&self) -> String {
        let message = truncate(
            self.request.defective_user_message.trim(),
            LABEL_MESSAGE_CHARS,
        );
        format!(
            "{} | {} | {}/{} | {}",
            self.timestamp.to_rfc3339(),
            self.request.bot_type.label(),
            self.request.provider.as_str(),
            self.request.model,
            message
        )
    }
}

/// Ordered, deduplicated log of past requests.
#[derive(Debug)]
pub struct HistoryStore<T: TimeProvider = RealTimeProvider> {
    entries: Vec<HistoryEntry>,
    clock: T,
}

impl HistoryStore {
    /// Create an empty store on the system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_clock(RealTimeProvider)
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeProvider> HistoryStore<T> {
    /// Create an empty store on the given clock.
    #[must_use]
    pub const fn with_clock(clock: T) -> Self {
        Self {
            entries: Vec::new(),
            clock,
        }
    }

    /// Append a request unless an equal one is already stored.
    ///
    /// Returns true if a new entry was created.
    pub fn append(&mut self, request: AnalysisRequest) -> bool {
        if self.entries.iter().any(|e| e.request == request) {
            tracing::debug!(len = self.entries.len(), "Request already in history");
            return false;
        }
        self.entries.push(HistoryEntry {
            timestamp: self.clock.now(),
            request,
        });
        tracing::info!(len = self.entries.len(), "History entry appended");
        true
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NotFound`] if `index` is out of range.
    pub fn get(&self, index: usize) -> Result<&HistoryEntry, HistoryError> {
        self.entries.get(index).ok_or(HistoryError::NotFound {
            index,
            len: self.entries.len(),
        })
    }

    /// Copy of the request at `index`, for editing and resubmission.
    ///
    /// The entry itself stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NotFound`] if `index` is out of range.
    pub fn replay(&self, index: usize) -> Result<AnalysisRequest, HistoryError> {
        self.get(index).map(|e| e.request.clone())
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        tracing::info!(removed, "History cleared");
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
