use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Identifier of an independently editable layer within a multi-layer scene.
///
/// Layers are addressed by their index in the editor's layer list; ids are
/// small and reused, unlike entity handles.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LayerId(pub u32);

impl LayerId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "layer {}", self.0)
    }
}

/// Axis-aligned integer bounding box with inclusive corners.
///
/// Describes the extent of a volume. Immutable once a snapshot has been
/// taken over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    mins: IVec3,
    maxs: IVec3,
}

impl Region {
    /// Create a region from inclusive corners.
    ///
    /// Panics if `mins` exceeds `maxs` on any axis; an inverted region is a
    /// programmer error, not a runtime condition.
    pub fn new(mins: IVec3, maxs: IVec3) -> Self {
        assert!(
            mins.cmple(maxs).all(),
            "inverted region: mins={mins:?} maxs={maxs:?}"
        );
        Self { mins, maxs }
    }

    /// A cube region spanning `[0, size-1]` on every axis.
    pub fn cube(size: i32) -> Self {
        assert!(size > 0, "region size must be positive, got {size}");
        Self::new(IVec3::ZERO, IVec3::splat(size - 1))
    }

    pub fn mins(&self) -> IVec3 {
        self.mins
    }

    pub fn maxs(&self) -> IVec3 {
        self.maxs
    }

    /// Extent along x, counted in voxels (inclusive corners).
    pub fn width_in_voxels(&self) -> i32 {
        self.maxs.x - self.mins.x + 1
    }

    /// Extent along y, counted in voxels.
    pub fn height_in_voxels(&self) -> i32 {
        self.maxs.y - self.mins.y + 1
    }

    /// Extent along z, counted in voxels.
    pub fn depth_in_voxels(&self) -> i32 {
        self.maxs.z - self.mins.z + 1
    }

    /// Total number of voxel cells covered by this region.
    pub fn voxel_count(&self) -> usize {
        self.width_in_voxels() as usize
            * self.height_in_voxels() as usize
            * self.depth_in_voxels() as usize
    }

    /// Whether the given position lies inside the region.
    pub fn contains(&self, pos: IVec3) -> bool {
        pos.cmpge(self.mins).all() && pos.cmple(self.maxs).all()
    }
}

/// A single voxel cell. Material `0` is air.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Voxel {
    pub material: u8,
}

impl Voxel {
    pub const AIR: Voxel = Voxel { material: 0 };

    pub fn solid(material: u8) -> Self {
        Self { material }
    }

    pub fn is_air(&self) -> bool {
        self.material == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_extents() {
        let r = Region::new(IVec3::ZERO, IVec3::new(2, 3, 4));
        assert_eq!(r.width_in_voxels(), 3);
        assert_eq!(r.height_in_voxels(), 4);
        assert_eq!(r.depth_in_voxels(), 5);
        assert_eq!(r.voxel_count(), 60);
    }

    #[test]
    fn region_cube_width_matches_size() {
        let r = Region::cube(4);
        assert_eq!(r.width_in_voxels(), 4);
        assert_eq!(r.height_in_voxels(), 4);
        assert_eq!(r.depth_in_voxels(), 4);
    }

    #[test]
    fn region_contains_corners() {
        let r = Region::new(IVec3::new(-1, -1, -1), IVec3::new(1, 1, 1));
        assert!(r.contains(IVec3::new(-1, -1, -1)));
        assert!(r.contains(IVec3::new(1, 1, 1)));
        assert!(!r.contains(IVec3::new(2, 0, 0)));
    }

    #[test]
    #[should_panic(expected = "inverted region")]
    fn region_rejects_inverted_bounds() {
        let _ = Region::new(IVec3::new(1, 0, 0), IVec3::ZERO);
    }

    #[test]
    fn voxel_air_is_default() {
        assert_eq!(Voxel::default(), Voxel::AIR);
        assert!(Voxel::AIR.is_air());
        assert!(!Voxel::solid(3).is_air());
    }
}
