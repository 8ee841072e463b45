//! Live layer content: a dense voxel grid bounded by a region.
//!
//! # Invariants
//! - The backing store always holds exactly `region.voxel_count()` cells.
//! - All mutation goes through explicit operations; the region never changes
//!   after construction.

pub mod volume;

pub use volume::{RawVolume, VolumeError};
