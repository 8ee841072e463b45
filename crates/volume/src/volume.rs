use glam::IVec3;
use serde::{Deserialize, Serialize};
use strata_common::{Region, Voxel};

/// Errors from volume construction.
#[derive(Debug, thiserror::Error)]
pub enum VolumeError {
    #[error("cell count mismatch: region covers {expected} voxels, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },
}

/// The live content of a single editable layer.
///
/// A dense row-major grid of voxels covering `region`. The editor mutates it
/// in place through `set_voxel`; history snapshots always copy the cells out,
/// so later mutation of a `RawVolume` can never corrupt recorded state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVolume {
    region: Region,
    voxels: Vec<Voxel>,
}

impl RawVolume {
    /// Create a volume covering `region`, filled with air.
    pub fn new(region: Region) -> Self {
        Self {
            region,
            voxels: vec![Voxel::AIR; region.voxel_count()],
        }
    }

    /// Reassemble a volume from a region and its raw cells (snapshot decode).
    pub fn from_cells(region: Region, voxels: Vec<Voxel>) -> Result<Self, VolumeError> {
        if voxels.len() != region.voxel_count() {
            return Err(VolumeError::CellCountMismatch {
                expected: region.voxel_count(),
                actual: voxels.len(),
            });
        }
        Ok(Self { region, voxels })
    }

    /// The extent this volume covers. Fixed for the lifetime of the volume.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Read-only access to the raw cells in row-major order.
    pub fn cells(&self) -> &[Voxel] {
        &self.voxels
    }

    /// The voxel at `pos`, or air if `pos` lies outside the region.
    pub fn voxel(&self, pos: IVec3) -> Voxel {
        match self.index(pos) {
            Some(idx) => self.voxels[idx],
            None => Voxel::AIR,
        }
    }

    /// Set the voxel at `pos`. Returns false if `pos` lies outside the region.
    pub fn set_voxel(&mut self, pos: IVec3, voxel: Voxel) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.voxels[idx] = voxel;
                true
            }
            None => {
                tracing::debug!(?pos, "set_voxel outside region ignored");
                false
            }
        }
    }

    /// Fill the entire volume with one voxel value.
    pub fn fill(&mut self, voxel: Voxel) {
        self.voxels.fill(voxel);
    }

    /// Number of non-air cells.
    pub fn solid_count(&self) -> usize {
        self.voxels.iter().filter(|v| !v.is_air()).count()
    }

    fn index(&self, pos: IVec3) -> Option<usize> {
        if !self.region.contains(pos) {
            return None;
        }
        let rel = pos - self.region.mins();
        let w = self.region.width_in_voxels() as usize;
        let h = self.region.height_in_voxels() as usize;
        Some((rel.z as usize * h + rel.y as usize) * w + rel.x as usize)
    }
}
