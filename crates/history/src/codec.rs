//! Snapshot codec: live volume to encoded bytes and back.
//!
//! The wire format is CBOR-encoded cells compressed with zstd, paired with
//! the region the cells cover. Encoding always produces an independent copy;
//! nothing in the result references the caller's volume. The format is a
//! whole-snapshot codec on purpose: swapping in a diff/patch scheme later
//! only touches this module.

use std::io::{Read, Write};

use strata_common::Voxel;
use strata_volume::{RawVolume, VolumeError};

use crate::state::{Snapshot, SnapshotData};

/// zstd level used for snapshot buffers. Paint-sized volumes compress in
/// well under a millisecond at this level.
const COMPRESSION_LEVEL: i32 = 3;

/// Errors from snapshot encoding and decoding.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CBOR serialization error: {0}")]
    CborEncode(String),
    #[error("CBOR deserialization error: {0}")]
    CborDecode(String),
    #[error(transparent)]
    Volume(#[from] VolumeError),
    #[error("cannot decode an absent snapshot: the layer has no content at this history point")]
    AbsentSnapshot,
}

/// Encode a volume's content into a self-contained snapshot.
pub fn encode(volume: &RawVolume) -> Result<SnapshotData, CodecError> {
    let mut cbor = Vec::new();
    ciborium::into_writer(volume.cells(), &mut cbor)
        .map_err(|e| CodecError::CborEncode(e.to_string()))?;

    let mut encoder = zstd::Encoder::new(Vec::new(), COMPRESSION_LEVEL)?;
    encoder.write_all(&cbor)?;
    let buffer = encoder.finish()?;

    tracing::trace!(
        cells = volume.cells().len(),
        bytes = buffer.len(),
        "encoded snapshot"
    );
    Ok(SnapshotData::new(volume.region(), buffer))
}

/// Decode a snapshot back into a volume. Exact inverse of [`encode`].
///
/// Fails closed if the buffer is corrupt or its cell count does not match
/// the recorded region.
pub fn decode(data: &SnapshotData) -> Result<RawVolume, CodecError> {
    let mut decoder = zstd::Decoder::new(data.buffer())?;
    let mut cbor = Vec::new();
    decoder.read_to_end(&mut cbor)?;

    let cells: Vec<Voxel> =
        ciborium::from_reader(cbor.as_slice()).map_err(|e| CodecError::CborDecode(e.to_string()))?;
    Ok(RawVolume::from_cells(data.region(), cells)?)
}

impl Snapshot {
    /// Decode the snapshot's content.
    ///
    /// Attempting this on an absent snapshot is a caller logic defect (the
    /// editor must check [`Snapshot::is_absent`] and remove the layer
    /// instead); it fails with [`CodecError::AbsentSnapshot`].
    pub fn decode(&self) -> Result<RawVolume, CodecError> {
        match self.data() {
            Some(data) => decode(data),
            None => {
                tracing::error!("decode called on an absent snapshot");
                Err(CodecError::AbsentSnapshot)
            }
        }
    }
}
