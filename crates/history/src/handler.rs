use strata_common::LayerId;
use strata_volume::RawVolume;

use crate::codec::{self, CodecError};
use crate::state::{ChangeKind, MementoState, Snapshot};
use crate::store::HistoryStore;

/// Default bound on retained history entries.
pub const DEFAULT_MAX_STATES: usize = 64;

/// The editor-facing history controller.
///
/// Records edits and layer lifecycle events as encoded snapshots and walks
/// them with `undo`/`redo`. The handler holds no state of its own beyond
/// the store; every operation is a deterministic function of the recorded
/// entries, the cursor, and its input.
///
/// The volume passed to the `mark_*` calls is only read during the call;
/// the snapshot is a deep copy, so the editor is free to mutate or drop its
/// live volume afterwards.
#[derive(Debug)]
pub struct MementoHandler {
    store: HistoryStore,
}

impl MementoHandler {
    /// Create a handler retaining up to [`DEFAULT_MAX_STATES`] entries.
    pub fn new() -> Self {
        Self::with_max_states(DEFAULT_MAX_STATES)
    }

    /// Create a handler with an explicit capacity, fixed for the session.
    pub fn with_max_states(max_states: usize) -> Self {
        Self {
            store: HistoryStore::new(max_states),
        }
    }

    /// Record the content of `layer` after an in-place edit.
    pub fn mark_undo(
        &mut self,
        layer: LayerId,
        name: &str,
        volume: &RawVolume,
    ) -> Result<(), CodecError> {
        let data = codec::encode(volume)?;
        tracing::debug!(%layer, name, "recording modify");
        self.store.append(MementoState::new(
            layer,
            name,
            ChangeKind::Modify,
            Snapshot::Present(data),
        ));
        Ok(())
    }

    /// Record that `layer` came into existence with the given content.
    ///
    /// Appends two entries: first an absent marker ("the layer did not
    /// exist yet"), then the populated state. An `undo` therefore lands
    /// exactly on the marker that tells the editor to delete the layer, and
    /// the matching `redo` on the content to recreate it from.
    pub fn mark_layer_added(
        &mut self,
        layer: LayerId,
        name: &str,
        volume: &RawVolume,
    ) -> Result<(), CodecError> {
        // Encode before touching the store: a codec failure records nothing.
        let data = codec::encode(volume)?;
        tracing::debug!(%layer, name, "recording layer added");
        self.store.append(MementoState::new(
            layer,
            name,
            ChangeKind::LayerAdded,
            Snapshot::Absent,
        ));
        self.store.append(MementoState::new(
            layer,
            name,
            ChangeKind::LayerAdded,
            Snapshot::Present(data),
        ));
        Ok(())
    }

    /// Record that `layer` went out of existence, keeping its last content.
    ///
    /// Appends two entries: first the last known content (undoing the
    /// deletion restores it), then an absent marker ("the layer is gone").
    pub fn mark_layer_deleted(
        &mut self,
        layer: LayerId,
        name: &str,
        volume: &RawVolume,
    ) -> Result<(), CodecError> {
        let data = codec::encode(volume)?;
        tracing::debug!(%layer, name, "recording layer deleted");
        self.store.append(MementoState::new(
            layer,
            name,
            ChangeKind::LayerDeleted,
            Snapshot::Present(data),
        ));
        self.store.append(MementoState::new(
            layer,
            name,
            ChangeKind::LayerDeleted,
            Snapshot::Absent,
        ));
        Ok(())
    }

    /// Step back one state and return what the volume should now look like.
    pub fn undo(&mut self) -> MementoState {
        self.store.undo()
    }

    /// Step forward one state and return what the volume should now look like.
    pub fn redo(&mut self) -> MementoState {
        self.store.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    /// Number of retained history entries.
    pub fn state_size(&self) -> usize {
        self.store.size()
    }

    /// Current cursor index.
    pub fn state_position(&self) -> usize {
        self.store.position()
    }

    /// Maximum number of retained entries, fixed at construction.
    pub fn max_states(&self) -> usize {
        self.store.max_states()
    }

    /// Read-only view of the retained history, oldest first.
    pub fn states(&self) -> &[MementoState] {
        self.store.states()
    }

    /// Release all retained snapshots and return to the pre-edit state.
    pub fn clear(&mut self) {
        self.store.clear();
    }
}

impl Default for MementoHandler {
    fn default() -> Self {
        Self::new()
    }
}
