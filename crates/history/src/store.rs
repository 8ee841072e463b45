use crate::state::MementoState;

/// Bounded, ordered sequence of recorded states plus the cursor.
///
/// Entries are chronological; `position` is the index of the state the
/// editor currently displays. The store owns every entry and its snapshot
/// exclusively and knows nothing about voxel semantics.
///
/// Invariants: `position < len` whenever `len > 0`, and `len <= max_states`
/// always. Overflow evicts the oldest entry; it never fails or blocks.
#[derive(Debug)]
pub struct HistoryStore {
    states: Vec<MementoState>,
    position: usize,
    max_states: usize,
}

impl HistoryStore {
    /// Create an empty store holding at most `max_states` entries.
    /// The capacity is fixed for the lifetime of the store.
    pub fn new(max_states: usize) -> Self {
        assert!(max_states > 0, "history capacity must be positive");
        Self {
            states: Vec::new(),
            position: 0,
            max_states,
        }
    }

    /// Append a state at the tail and move the cursor onto it.
    ///
    /// If the cursor is not at the tail, every entry after it is dropped
    /// first: a new edit on an undone state discards the obsolete redo
    /// future. If the push exceeds capacity the oldest entry is evicted.
    pub fn append(&mut self, state: MementoState) {
        if !self.states.is_empty() && self.position + 1 < self.states.len() {
            tracing::debug!(
                dropped = self.states.len() - self.position - 1,
                "new edit discards redo future"
            );
            self.states.truncate(self.position + 1);
        }
        self.states.push(state);
        if self.states.len() > self.max_states {
            tracing::debug!(max_states = self.max_states, "evicting oldest history entry");
            self.states.remove(0);
        }
        self.position = self.states.len() - 1;
    }

    /// Whether a state exists before the cursor.
    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    /// Whether a state exists after the cursor.
    pub fn can_redo(&self) -> bool {
        !self.states.is_empty() && self.position + 1 < self.states.len()
    }

    /// Step the cursor back and return the state now under it.
    ///
    /// Without anything to undo this is a no-op returning the unavailable
    /// sentinel; callers either check [`can_undo`](Self::can_undo) first or
    /// treat an absent, unnamed result as "nothing happened".
    pub fn undo(&mut self) -> MementoState {
        if !self.can_undo() {
            return MementoState::unavailable();
        }
        self.position -= 1;
        self.states[self.position].clone()
    }

    /// Step the cursor forward and return the state now under it.
    /// Symmetric to [`undo`](Self::undo).
    pub fn redo(&mut self) -> MementoState {
        if !self.can_redo() {
            return MementoState::unavailable();
        }
        self.position += 1;
        self.states[self.position].clone()
    }

    /// Number of retained states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Cursor index. Meaningful only while the store is non-empty.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Maximum number of retained states, fixed at construction.
    pub fn max_states(&self) -> usize {
        self.max_states
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Read-only access to the retained states, oldest first.
    pub fn states(&self) -> &[MementoState] {
        &self.states
    }

    /// Drop every retained state and snapshot.
    pub fn clear(&mut self) {
        self.states.clear();
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ChangeKind, Snapshot};
    use strata_common::LayerId;

    fn entry(tag: u32) -> MementoState {
        MementoState::new(
            LayerId(tag),
            format!("entry {tag}"),
            ChangeKind::Modify,
            Snapshot::Absent,
        )
    }

    #[test]
    fn empty_store_has_no_transitions() {
        let store = HistoryStore::new(8);
        assert!(store.is_empty());
        assert!(!store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn first_append_cannot_be_undone() {
        let mut store = HistoryStore::new(8);
        store.append(entry(0));
        assert_eq!(store.size(), 1);
        assert_eq!(store.position(), 0);
        assert!(!store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn append_moves_cursor_to_tail() {
        let mut store = HistoryStore::new(8);
        for i in 0..3 {
            store.append(entry(i));
        }
        assert_eq!(store.size(), 3);
        assert_eq!(store.position(), 2);
        assert!(store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn undo_returns_state_at_new_cursor() {
        let mut store = HistoryStore::new(8);
        for i in 0..3 {
            store.append(entry(i));
        }
        let s = store.undo();
        assert_eq!(s.layer, LayerId(1));
        assert_eq!(store.position(), 1);
        assert!(store.can_redo());
    }

    #[test]
    fn redo_returns_state_at_new_cursor() {
        let mut store = HistoryStore::new(8);
        for i in 0..3 {
            store.append(entry(i));
        }
        store.undo();
        store.undo();
        let s = store.redo();
        assert_eq!(s.layer, LayerId(1));
        assert_eq!(store.position(), 1);
    }

    #[test]
    fn exhausted_undo_is_a_sentinel_noop() {
        let mut store = HistoryStore::new(8);
        store.append(entry(0));
        for _ in 0..3 {
            let s = store.undo();
            assert!(s.snapshot.is_absent());
            assert!(s.name.is_empty());
            assert_eq!(store.position(), 0);
            assert_eq!(store.size(), 1);
        }
    }

    #[test]
    fn exhausted_redo_is_a_sentinel_noop() {
        let mut store = HistoryStore::new(8);
        store.append(entry(0));
        store.append(entry(1));
        let s = store.redo();
        assert!(s.snapshot.is_absent());
        assert_eq!(store.position(), 1);
    }

    #[test]
    fn append_after_undo_discards_redo_future() {
        let mut store = HistoryStore::new(8);
        for i in 0..4 {
            store.append(entry(i));
        }
        store.undo();
        store.undo();
        assert_eq!(store.position(), 1);

        store.append(entry(99));
        assert_eq!(store.size(), 3);
        assert_eq!(store.position(), 2);
        assert!(!store.can_redo());
        let s = store.undo();
        assert_eq!(s.layer, LayerId(1));
    }

    #[test]
    fn overflow_evicts_oldest_entry() {
        let mut store = HistoryStore::new(4);
        for i in 0..10 {
            store.append(entry(i));
        }
        assert_eq!(store.size(), 4);
        assert_eq!(store.position(), 3);

        // Oldest survivors are 6..=9; walking back lands on 6.
        store.undo();
        store.undo();
        let s = store.undo();
        assert_eq!(s.layer, LayerId(6));
        assert!(!store.can_undo());
    }

    #[test]
    fn capacity_is_never_exceeded_mid_sequence() {
        let mut store = HistoryStore::new(3);
        for i in 0..20 {
            store.append(entry(i));
            assert!(store.size() <= 3);
            assert_eq!(store.position(), store.size() - 1);
        }
    }

    #[test]
    fn clear_releases_everything() {
        let mut store = HistoryStore::new(8);
        for i in 0..5 {
            store.append(entry(i));
        }
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.position(), 0);
        assert!(!store.can_undo());
        assert!(!store.can_redo());
    }
}
