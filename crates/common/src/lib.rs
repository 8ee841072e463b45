//! Shared leaf types for the strata voxel editing core.
//!
//! # Invariants
//! - A `Region` is normalized (`mins <= maxs` componentwise) from construction on.
//! - `LayerId` is a plain index into the editor's layer list, not a handle.

pub mod types;

pub use types::{LayerId, Region, Voxel};
