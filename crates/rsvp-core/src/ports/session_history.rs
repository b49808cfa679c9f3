use super::errors::HistoryError;
use crate::flow::HistoryEntry;

/// Session-history stack of the hosting page.
///
/// `HistoryError::Unavailable` means back/forward cannot be offered; the
/// flow keeps working without it.
pub trait SessionHistoryPort: Send + Sync {
    /// State of the entry the page is currently on.
    fn current(&self) -> Result<Option<HistoryEntry>, HistoryError>;

    /// Add an entry after the current one, dropping any forward entries.
    fn push(&self, entry: HistoryEntry) -> Result<(), HistoryError>;

    /// Overwrite the current entry in place.
    fn replace(&self, entry: HistoryEntry) -> Result<(), HistoryError>;
}
