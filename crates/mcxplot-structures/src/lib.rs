//! Structure implementations for mcxplot-rs.
//!
//! This crate provides the data preparation behind the two figure kinds:
//! - Volume fields and their orthogonal slices
//! - Triangle meshes filtered by axis thresholds, with unique edges

// Grid code intentionally converts between index and coordinate types
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod filtered_mesh;
pub mod volume_field;

pub use filtered_mesh::{validate_color, EdgeSegments, FilterThresholds, FilteredMesh};
pub use volume_field::{Slice, SliceAxis, SliceIndices, VolumeField, VolumeSlices};
