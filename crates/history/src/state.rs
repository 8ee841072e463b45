use serde::{Deserialize, Serialize};
use strata_common::{LayerId, Region};

/// What kind of structural change a history entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// Content of an existing layer changed.
    Modify,
    /// A layer came into existence.
    LayerAdded,
    /// A layer went out of existence.
    LayerDeleted,
}

/// An encoded, self-contained copy of a layer's content plus its extent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotData {
    region: Region,
    buffer: Vec<u8>,
}

impl SnapshotData {
    pub(crate) fn new(region: Region, buffer: Vec<u8>) -> Self {
        Self { region, buffer }
    }

    /// The extent the encoded content covers.
    pub fn region(&self) -> Region {
        self.region
    }

    /// The opaque encoded bytes.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }
}

/// A recorded layer state.
///
/// `Absent` means the layer does not exist at this point in history. It is
/// distinct from empty content: an empty layer still has a `Present`
/// snapshot whose buffer describes zero solid voxels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Snapshot {
    Absent,
    Present(SnapshotData),
}

impl Snapshot {
    pub fn is_absent(&self) -> bool {
        matches!(self, Snapshot::Absent)
    }

    /// The encoded data, or `None` for an absent snapshot.
    pub fn data(&self) -> Option<&SnapshotData> {
        match self {
            Snapshot::Absent => None,
            Snapshot::Present(data) => Some(data),
        }
    }

    /// The covered extent, or `None` for an absent snapshot.
    pub fn region(&self) -> Option<Region> {
        self.data().map(SnapshotData::region)
    }
}

/// One history entry: which layer changed, how, and the content to restore.
///
/// Immutable once constructed. After `undo`/`redo` the editor applies it:
/// an absent snapshot on a `LayerAdded`/`LayerDeleted` entry means "remove
/// the layer"; a present snapshot means "(re)create the layer with this
/// decoded content".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MementoState {
    pub layer: LayerId,
    pub name: String,
    pub kind: ChangeKind,
    pub snapshot: Snapshot,
}

impl MementoState {
    pub fn new(
        layer: LayerId,
        name: impl Into<String>,
        kind: ChangeKind,
        snapshot: Snapshot,
    ) -> Self {
        Self {
            layer,
            name: name.into(),
            kind,
            snapshot,
        }
    }

    /// The sentinel returned when an undo/redo transition is unavailable.
    ///
    /// Layer and name carry no meaning; callers recognize it by the absent
    /// snapshot, or avoid it entirely by checking `can_undo`/`can_redo`.
    pub fn unavailable() -> Self {
        Self {
            layer: LayerId::default(),
            name: String::new(),
            kind: ChangeKind::Modify,
            snapshot: Snapshot::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_not_present_with_empty_buffer() {
        let empty = Snapshot::Present(SnapshotData::new(Region::cube(1), Vec::new()));
        assert!(!empty.is_absent());
        assert!(Snapshot::Absent.is_absent());
        assert_ne!(empty, Snapshot::Absent);
    }

    #[test]
    fn snapshot_region_accessor() {
        let data = SnapshotData::new(Region::cube(3), vec![1, 2, 3]);
        let snap = Snapshot::Present(data);
        assert_eq!(snap.region().unwrap().width_in_voxels(), 3);
        assert!(Snapshot::Absent.region().is_none());
    }

    #[test]
    fn unavailable_sentinel_has_absent_snapshot() {
        let s = MementoState::unavailable();
        assert!(s.snapshot.is_absent());
        assert!(s.name.is_empty());
    }
}
