//! Visited-state history with an undo/redo cursor.
//!
//! History is a linear sequence: recording a new state while the cursor is
//! behind the newest entry discards everything after the cursor.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A state reached through an explicit transition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// Name of the state that was entered
    pub state: String,
    /// When the state was entered
    pub entered_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn now(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            entered_at: Utc::now(),
        }
    }
}

/// Ordered history of visited states plus a cursor into it.
///
/// The cursor always lies in `0..len()` while history is non-empty and is
/// `0` when history is empty.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateHistory;
///
/// let mut history = StateHistory::new("draft");
/// history.record("review");
/// history.record("published");
///
/// assert_eq!(history.step_back(), Some("review"));
/// history.record("rejected");
///
/// assert_eq!(history.path(), vec!["draft", "review", "rejected"]);
/// assert!(!history.can_step_forward());
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct StateHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl StateHistory {
    /// Create a history holding only the starting state.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry::now(initial)],
            cursor: 0,
        }
    }

    /// Record a newly entered state.
    ///
    /// Entries after the cursor are dropped, the state is appended and the
    /// cursor moves onto it. On an empty history the state becomes the sole
    /// entry at index `0`.
    pub fn record(&mut self, state: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry::now(state));
        self.cursor = self.entries.len() - 1;
    }

    /// Move the cursor one entry back, returning the state it lands on.
    pub fn step_back(&mut self) -> Option<&str> {
        if !self.can_step_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].state.as_str())
    }

    /// Move the cursor one entry forward, returning the state it lands on.
    pub fn step_forward(&mut self) -> Option<&str> {
        if !self.can_step_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].state.as_str())
    }

    /// Whether an entry exists before the cursor.
    pub fn can_step_back(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    /// Whether an entry exists after the cursor.
    pub fn can_step_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Drop every entry and reset the cursor to `0`.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// State under the cursor, `None` when history is empty.
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(|e| e.state.as_str())
    }

    /// Index of the active entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether history holds no entries, as after `clear`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// State names in the order they were recorded.
    pub fn path(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.state.as_str()).collect()
    }

    /// Recorded entries with their timestamps.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_holds_initial_state() {
        let history = StateHistory::new("Initial");

        assert_eq!(history.path(), vec!["Initial"]);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current(), Some("Initial"));
        assert!(!history.can_step_back());
        assert!(!history.can_step_forward());
    }

    #[test]
    fn record_appends_and_advances_cursor() {
        let mut history = StateHistory::new("Initial");
        history.record("Processing");
        history.record("Complete");

        assert_eq!(history.path(), vec!["Initial", "Processing", "Complete"]);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.current(), Some("Complete"));
    }

    #[test]
    fn step_back_and_forward_walk_the_path() {
        let mut history = StateHistory::new("Initial");
        history.record("Processing");

        assert_eq!(history.step_back(), Some("Initial"));
        assert_eq!(history.step_back(), None);
        assert_eq!(history.step_forward(), Some("Processing"));
        assert_eq!(history.step_forward(), None);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn record_after_step_back_discards_forward_branch() {
        let mut history = StateHistory::new("A");
        history.record("B");
        history.record("C");
        history.step_back();
        history.step_back();

        history.record("D");

        assert_eq!(history.path(), vec!["A", "D"]);
        assert_eq!(history.cursor(), 1);
        assert!(!history.can_step_forward());
    }

    #[test]
    fn cleared_history_cannot_step() {
        let mut history = StateHistory::new("A");
        history.record("B");

        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current(), None);
        assert_eq!(history.step_back(), None);
        assert_eq!(history.step_forward(), None);
    }

    #[test]
    fn record_after_clear_starts_at_index_zero() {
        let mut history = StateHistory::new("A");
        history.record("B");
        history.clear();

        history.record("C");

        assert_eq!(history.path(), vec!["C"]);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current(), Some("C"));

        history.record("D");
        assert_eq!(history.path(), vec!["C", "D"]);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn entries_are_timestamped_when_recorded() {
        let before_initial = Utc::now();
        let mut history = StateHistory::new("A");
        let after_initial = Utc::now();

        let before_record = Utc::now();
        history.record("B");
        let after_record = Utc::now();

        let entries = history.entries();
        assert!(entries[0].entered_at >= before_initial);
        assert!(entries[0].entered_at <= after_initial);
        assert!(entries[1].entered_at >= before_record);
        assert!(entries[1].entered_at <= after_record);
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new("A");
        history.record("B");

        let json = serde_json::to_value(&history).unwrap();

        assert_eq!(json["cursor"], 1);
        assert_eq!(json["entries"][1]["state"], "B");
    }
}
