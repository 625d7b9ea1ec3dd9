//! Live result list and selection cursor.
//!
//! The list is rebuilt wholesale on every applied query; there is no diffing
//! against the previous sequence, and a previous selection is not preserved.
//! A non-empty replace always lands the cursor on index 0 so the top match is
//! immediately activatable from the keyboard.

use issuedash_core::IssueRecord;

/// Modifier-key state at the moment of a navigation or activation event.
///
/// Passed explicitly by the shell per event; the core keeps no process-wide
/// pressed-keys table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Hold-open override: activation should leave the popup running.
    pub shift: bool,
    pub ctrl: bool,
}

/// Externally observable activation event for the selected record.
///
/// Opening the issue (browser, terminal, whatever the shell does with the
/// key) is the environment's business; deciding *which* record was activated
/// is decided here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// Key field (first projected column) of the activated record.
    pub key: String,
    /// Whether the popup should stay open after activation.
    pub keep_open: bool,
}

/// Ordered record sequence plus the selection cursor.
///
/// Cursor invariant: `Some(i)` implies `i < records.len()`; `None` iff the
/// list is empty.
#[derive(Debug, Clone, Default)]
pub struct ResultList {
    records: Vec<IssueRecord>,
    cursor: Option<usize>,
}

impl ResultList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sequence wholesale with a query's records.
    ///
    /// Non-empty results auto-select index 0; empty results clear the
    /// selection.
    pub fn replace(&mut self, records: Vec<IssueRecord>) {
        self.cursor = if records.is_empty() { None } else { Some(0) };
        self.records = records;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in result order.
    #[must_use]
    pub fn records(&self) -> &[IssueRecord] {
        &self.records
    }

    /// Zero-based selection index, `None` when the list is empty.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.cursor
    }

    /// The currently selected record.
    #[must_use]
    pub fn selected(&self) -> Option<&IssueRecord> {
        self.cursor.and_then(|i| self.records.get(i))
    }

    /// Move the selection up one row. Saturates at the top; no wrap.
    ///
    /// Returns whether the event was consumed (a selection exists).
    pub fn move_up(&mut self) -> bool {
        match self.cursor {
            Some(i) => {
                self.cursor = Some(i.saturating_sub(1));
                true
            }
            None => false,
        }
    }

    /// Move the selection down one row. Saturates at the bottom; no wrap.
    ///
    /// Returns whether the event was consumed (a selection exists).
    pub fn move_down(&mut self) -> bool {
        match self.cursor {
            Some(i) => {
                self.cursor = Some((i + 1).min(self.records.len() - 1));
                true
            }
            None => false,
        }
    }

    /// Activate the selected record, if any. Does not mutate the list.
    #[must_use]
    pub fn activate(&self, modifiers: Modifiers) -> Option<Activation> {
        self.selected().map(|record| Activation {
            key: record.key().to_string(),
            keep_open: modifiers.shift,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(keys: &[&str]) -> Vec<IssueRecord> {
        keys.iter()
            .map(|k| IssueRecord::new(vec![(*k).to_string(), format!("summary of {k}")]))
            .collect()
    }

    #[test]
    fn starts_empty_with_no_selection() {
        let list = ResultList::new();
        assert!(list.is_empty());
        assert_eq!(list.selected_index(), None);
        assert_eq!(list.activate(Modifiers::default()), None);
    }

    #[test]
    fn non_empty_replace_selects_first() {
        let mut list = ResultList::new();
        list.replace(records(&["A-1", "A-2", "A-3"]));
        assert_eq!(list.selected_index(), Some(0));
        assert_eq!(list.selected().unwrap().key(), "A-1");
    }

    #[test]
    fn empty_replace_clears_selection() {
        let mut list = ResultList::new();
        list.replace(records(&["A-1"]));
        list.replace(Vec::new());
        assert!(list.is_empty());
        assert_eq!(list.selected_index(), None);
        assert_eq!(list.activate(Modifiers::default()), None);
    }

    #[test]
    fn replace_discards_previous_selection() {
        let mut list = ResultList::new();
        list.replace(records(&["A-1", "A-2", "A-3"]));
        list.move_down();
        list.move_down();
        list.replace(records(&["B-1", "B-2"]));
        assert_eq!(list.selected_index(), Some(0));
        assert_eq!(list.selected().unwrap().key(), "B-1");
    }

    #[test]
    fn move_down_saturates_at_bottom() {
        let mut list = ResultList::new();
        list.replace(records(&["A-1", "A-2", "A-3"]));
        for expected in [1, 2, 2, 2] {
            assert!(list.move_down());
            assert_eq!(list.selected_index(), Some(expected));
        }
    }

    #[test]
    fn move_up_saturates_at_top() {
        let mut list = ResultList::new();
        list.replace(records(&["A-1", "A-2"]));
        assert!(list.move_up());
        assert_eq!(list.selected_index(), Some(0));
        list.move_down();
        assert!(list.move_up());
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn navigation_not_consumed_when_empty() {
        let mut list = ResultList::new();
        assert!(!list.move_up());
        assert!(!list.move_down());
        assert_eq!(list.selected_index(), None);
    }

    #[test]
    fn activate_yields_selected_key() {
        let mut list = ResultList::new();
        list.replace(records(&["PROJ-7", "PROJ-9"]));
        list.move_down();
        let activation = list.activate(Modifiers::default()).unwrap();
        assert_eq!(activation.key, "PROJ-9");
        assert!(!activation.keep_open);
        // activation does not move the cursor
        assert_eq!(list.selected_index(), Some(1));
    }

    #[test]
    fn shift_activation_keeps_popup_open() {
        let mut list = ResultList::new();
        list.replace(records(&["PROJ-7"]));
        let activation = list
            .activate(Modifiers {
                shift: true,
                ctrl: false,
            })
            .unwrap();
        assert!(activation.keep_open);
    }

    #[test]
    fn full_walk_reaches_last_index() {
        let mut list = ResultList::new();
        let n = 5;
        list.replace(records(&["K-1", "K-2", "K-3", "K-4", "K-5"]));
        for _ in 0..n - 1 {
            assert!(list.move_down());
        }
        assert_eq!(list.selected_index(), Some(n - 1));
        assert!(list.move_down());
        assert_eq!(list.selected_index(), Some(n - 1));
    }
}
