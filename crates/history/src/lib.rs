//! Layer-aware undo/redo history for multi-layer voxel editing.
//!
//! The editor records every reversible operation through [`MementoHandler`]:
//! content edits via `mark_undo`, layer lifecycle via `mark_layer_added` /
//! `mark_layer_deleted`. Each record snapshots the affected layer's content
//! into an independent encoded buffer; `undo`/`redo` walk the bounded
//! history and hand back the [`MementoState`] the volume should now match.
//!
//! # Invariants
//! - History is linear: recording while undone discards the redo future.
//! - At most `max_states` entries are retained; overflow evicts the oldest.
//! - Snapshots never alias the live volume; recorded state is immutable.
//!
//! All operations are synchronous and meant for a single logical edit
//! thread. A host issuing edits from several threads must wrap the handler
//! in a `std::sync::Mutex` so each check-then-mutate sequence is atomic.

pub mod codec;
pub mod handler;
pub mod state;
pub mod store;

pub use codec::CodecError;
pub use handler::{MementoHandler, DEFAULT_MAX_STATES};
pub use state::{ChangeKind, MementoState, Snapshot, SnapshotData};
pub use store::HistoryStore;
