use std::fmt;

use tracing::{debug, instrument, trace};

/// Contract violations at the store boundary. Row count is fixed at
/// construction, so an out-of-range index is a caller bug rather than a
/// recoverable condition; capacity exhaustion is the one user-visible
/// rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    IndexOutOfRange { index: usize, capacity: usize },
    CapacityExceeded,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IndexOutOfRange { index, capacity } => {
                write!(f, "row index {index} out of range (capacity {capacity})")
            }
            StoreError::CapacityExceeded => write!(f, "checklist is full"),
        }
    }
}

impl std::error::Error for StoreError {}

/// One checklist entry. Identity is the slot index; rows are never
/// reordered or removed, only cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistRow {
    pub completed: bool,
    pub text: String,
}

impl ChecklistRow {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Fixed-capacity ordered list of checklist rows plus the single
/// in-progress edit session. At most one row is editing at a time; the
/// live editor text is mirrored into `draft` so that opening another
/// row's editor can commit the current one without asking the view.
#[derive(Debug)]
pub struct ChecklistStore {
    rows: Vec<ChecklistRow>,
    editing_index: Option<usize>,
    draft: Option<String>,
}

impl ChecklistStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            rows: vec![ChecklistRow::default(); capacity],
            editing_index: None,
            draft: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[ChecklistRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Result<&ChecklistRow, StoreError> {
        self.check_index(index)?;
        Ok(&self.rows[index])
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing_index
    }

    /// Flips the completion flag and returns the new value. Text is
    /// untouched; the caller repaints only this row's indicator.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, index: usize) -> Result<bool, StoreError> {
        self.check_index(index)?;
        let row = &mut self.rows[index];
        row.completed = !row.completed;
        debug!(index, completed = row.completed, "toggled row");
        Ok(row.completed)
    }

    /// Opens an edit session on `index` and returns the text the inline
    /// editor should be seeded with. Any other in-progress edit is
    /// committed first, so at most one editor is ever live.
    #[instrument(skip(self))]
    pub fn begin_edit(&mut self, index: usize) -> Result<String, StoreError> {
        self.check_index(index)?;
        if self.editing_index.is_some() {
            self.commit_current();
        }
        let seed = self.rows[index].text.clone();
        self.editing_index = Some(index);
        self.draft = Some(seed.clone());
        debug!(index, "began edit");
        Ok(seed)
    }

    /// Mirrors the editor's live text while an edit session is open.
    /// Ignored otherwise.
    pub fn set_draft(&mut self, text: &str) {
        if self.editing_index.is_some() {
            self.draft = Some(text.to_string());
        }
    }

    /// Writes `new_text` (trimmed) into the editing row and ends the
    /// session. A commit with no edit in progress is a no-op, which makes
    /// it safe to call from both confirm-on-enter and focus-loss without
    /// double handling.
    #[instrument(skip(self, new_text))]
    pub fn commit_edit(&mut self, new_text: &str) {
        if self.editing_index.is_none() {
            trace!("commit with no edit in progress; ignoring");
            return;
        }
        self.draft = Some(new_text.to_string());
        self.commit_current();
    }

    fn commit_current(&mut self) {
        let Some(index) = self.editing_index.take() else {
            return;
        };
        let text = self.draft.take().unwrap_or_default();
        self.rows[index].text = text.trim().to_string();
        debug!(index, "committed edit");
    }

    /// Smallest index whose text is blank, or `None` when every slot is
    /// occupied.
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.rows.iter().position(ChecklistRow::is_empty)
    }

    /// Places `text` (trimmed) into the first empty slot and returns its
    /// index. A full list is reported instead of silently dropping the
    /// input.
    #[instrument(skip(self, text))]
    pub fn add(&mut self, text: &str) -> Result<usize, StoreError> {
        let index = self
            .first_empty_slot()
            .ok_or(StoreError::CapacityExceeded)?;
        self.rows[index].text = text.trim().to_string();
        debug!(index, "added item");
        Ok(index)
    }

    /// Resets every completed row to empty and unchecked. An edit session
    /// on a cleared row is dropped rather than committed back into it.
    #[instrument(skip(self))]
    pub fn clear_completed(&mut self) -> usize {
        let mut cleared = 0;
        for (index, row) in self.rows.iter_mut().enumerate() {
            if row.completed {
                *row = ChecklistRow::default();
                cleared += 1;
                if self.editing_index == Some(index) {
                    self.editing_index = None;
                    self.draft = None;
                }
            }
        }
        debug!(cleared, "cleared completed rows");
        cleared
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                capacity: self.rows.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChecklistStore, StoreError};

    #[test]
    fn toggle_flips_only_the_target_row() {
        let mut store = ChecklistStore::new(3);
        store.add("alpha").expect("add");
        store.add("beta").expect("add");

        assert!(store.toggle(0).expect("toggle"));
        assert!(store.rows()[0].completed);
        assert_eq!(store.rows()[0].text, "alpha");
        assert!(!store.rows()[1].completed);

        assert!(!store.toggle(0).expect("toggle back"));
        assert!(!store.rows()[0].completed);
    }

    #[test]
    fn toggle_out_of_range_is_a_contract_error() {
        let mut store = ChecklistStore::new(2);
        assert_eq!(
            store.toggle(2),
            Err(StoreError::IndexOutOfRange {
                index: 2,
                capacity: 2
            })
        );
    }

    #[test]
    fn begin_edit_on_another_row_commits_the_live_draft() {
        let mut store = ChecklistStore::new(4);
        store.begin_edit(0).expect("begin");
        store.set_draft("typed but not confirmed");

        store.begin_edit(1).expect("begin other");

        assert_eq!(store.rows()[0].text, "typed but not confirmed");
        assert_eq!(store.editing_index(), Some(1));
    }

    #[test]
    fn commit_without_begin_is_a_noop() {
        let mut store = ChecklistStore::new(2);
        store.add("keep me").expect("add");
        store.commit_edit("should be ignored");
        assert_eq!(store.rows()[0].text, "keep me");
        assert_eq!(store.editing_index(), None);
    }

    #[test]
    fn unchanged_commit_round_trips() {
        let mut store = ChecklistStore::new(2);
        store.add("  spaced  ").expect("add");
        assert_eq!(store.rows()[0].text, "spaced");

        let seed = store.begin_edit(0).expect("begin");
        store.commit_edit(&seed);

        assert_eq!(store.rows()[0].text, "spaced");
        assert_eq!(store.editing_index(), None);
    }

    #[test]
    fn commit_trims_surrounding_whitespace() {
        let mut store = ChecklistStore::new(2);
        store.begin_edit(1).expect("begin");
        store.commit_edit("  walk dog \n");
        assert_eq!(store.rows()[1].text, "walk dog");
    }

    #[test]
    fn first_empty_slot_scans_in_order() {
        let mut store = ChecklistStore::new(3);
        assert_eq!(store.first_empty_slot(), Some(0));

        store.add("one").expect("add");
        store.add("two").expect("add");
        assert_eq!(store.first_empty_slot(), Some(2));

        store.add("three").expect("add");
        assert_eq!(store.first_empty_slot(), None);
    }

    #[test]
    fn add_past_capacity_is_rejected_and_state_unchanged() {
        let mut store = ChecklistStore::new(2);
        store.add("a").expect("add");
        store.add("b").expect("add");

        assert_eq!(store.add("c"), Err(StoreError::CapacityExceeded));
        assert_eq!(store.rows()[0].text, "a");
        assert_eq!(store.rows()[1].text, "b");
    }

    #[test]
    fn clear_completed_resets_rows_and_drops_their_edit() {
        let mut store = ChecklistStore::new(3);
        store.add("done").expect("add");
        store.add("open").expect("add");
        store.toggle(0).expect("toggle");
        store.begin_edit(0).expect("begin");

        assert_eq!(store.clear_completed(), 1);
        assert!(store.rows()[0].is_empty());
        assert!(!store.rows()[0].completed);
        assert_eq!(store.rows()[1].text, "open");
        assert_eq!(store.editing_index(), None);
    }
}
