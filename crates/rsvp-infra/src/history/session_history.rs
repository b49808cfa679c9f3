//! In-process session history.
//!
//! Models a browser history stack: one current index, pushing drops the
//! forward entries, back/forward move the index and hand the landed-on
//! entry to whoever handles navigation.

use std::sync::{Mutex, MutexGuard};

use rsvp_core::flow::HistoryEntry;
use rsvp_core::ports::{HistoryError, SessionHistoryPort};

#[derive(Debug)]
struct Stack {
    entries: Vec<HistoryEntry>,
    index: usize,
}

#[derive(Debug)]
pub struct InMemorySessionHistory {
    stack: Mutex<Stack>,
}

impl Default for InMemorySessionHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionHistory {
    /// Stack holding the page-load entry, whose state is `null`.
    pub fn new() -> Self {
        Self::with_initial(HistoryEntry::default())
    }

    pub fn with_initial(entry: HistoryEntry) -> Self {
        Self {
            stack: Mutex::new(Stack {
                entries: vec![entry],
                index: 0,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Stack>, HistoryError> {
        self.stack.lock().map_err(|_| HistoryError::Unavailable)
    }

    /// Move one entry back. `None` at the start of the stack.
    pub fn back(&self) -> Option<HistoryEntry> {
        let mut stack = self.lock().ok()?;
        if stack.index == 0 {
            return None;
        }
        stack.index -= 1;
        Some(stack.entries[stack.index].clone())
    }

    /// Move one entry forward. `None` at the end of the stack.
    pub fn forward(&self) -> Option<HistoryEntry> {
        let mut stack = self.lock().ok()?;
        if stack.index + 1 >= stack.entries.len() {
            return None;
        }
        stack.index += 1;
        Some(stack.entries[stack.index].clone())
    }

    pub fn len(&self) -> usize {
        self.lock().map(|stack| stack.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index(&self) -> usize {
        self.lock().map(|stack| stack.index).unwrap_or(0)
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.lock()
            .map(|stack| stack.entries.clone())
            .unwrap_or_default()
    }
}

impl SessionHistoryPort for InMemorySessionHistory {
    fn current(&self) -> Result<Option<HistoryEntry>, HistoryError> {
        let stack = self.lock()?;
        Ok(stack.entries.get(stack.index).cloned())
    }

    fn push(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let mut stack = self.lock()?;
        let keep = stack.index + 1;
        stack.entries.truncate(keep);
        stack.entries.push(entry);
        stack.index = keep;
        Ok(())
    }

    fn replace(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let mut stack = self.lock()?;
        let index = stack.index;
        stack.entries[index] = entry;
        Ok(())
    }
}
