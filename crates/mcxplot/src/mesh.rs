//! Filtered triangle meshes with a wireframe overlay.
//!
//! Vertices below any of the per-axis thresholds are dropped together with
//! every face that uses them. The surviving faces are drawn in one uniform
//! color and each unique edge is drawn once in black on top.
//!
//! # Example
//!
//! ```no_run
//! use mcxplot::*;
//!
//! fn main() -> Result<()> {
//!     let vertices = vec![
//!         DVec3::new(0.0, 0.0, 0.0),
//!         DVec3::new(2.0, 0.0, 0.0),
//!         DVec3::new(0.0, 2.0, 0.0),
//!         DVec3::new(0.0, 0.0, 2.0),
//!     ];
//!     let faces = vec![
//!         UVec3::new(0, 1, 2),
//!         UVec3::new(0, 1, 3),
//!         UVec3::new(0, 2, 3),
//!         UVec3::new(1, 2, 3),
//!     ];
//!
//!     // Hide everything at or below z = -1
//!     plot_mesh(&vertices, &faces, "#3366cc", FilterThresholds::none().with_z_min(-1.0))?;
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use glam::{DVec3, UVec3};
use mcxplot_core::{Figure, Layout, Options, Structure};
use mcxplot_structures::{FilterThresholds, FilteredMesh};

use crate::Result;

/// Color used when the caller has no preference.
pub const DEFAULT_MESH_COLOR: &str = "blue";

/// Filters a mesh without building a figure.
///
/// The result exposes the compacted vertices, reindexed faces and unique
/// edges.
///
/// # Errors
///
/// Returns [`crate::McxPlotError::InvalidFaceIndex`] if a face refers to a
/// missing vertex.
pub fn filter_mesh(
    vertices: &[DVec3],
    faces: &[UVec3],
    thresholds: FilterThresholds,
) -> Result<FilteredMesh> {
    FilteredMesh::new("mesh", vertices, faces, &thresholds)
}

/// Builds the mesh figure without writing it anywhere.
///
/// # Errors
///
/// Returns [`crate::McxPlotError::InvalidFaceIndex`] if a face refers to a
/// missing vertex and [`crate::McxPlotError::InvalidColor`] for a malformed
/// color.
pub fn mesh_figure(
    vertices: &[DVec3],
    faces: &[UVec3],
    color: &str,
    thresholds: FilterThresholds,
    options: &Options,
) -> Result<Figure> {
    let mut mesh = filter_mesh(vertices, faces, thresholds)?;
    mesh.set_color(color)?
        .set_edge_style(options.edge_color.as_str(), options.edge_width)?;

    let mut layout = Layout::new(options.mesh_canvas);
    layout.margin = Some(options.mesh_margin);

    let mut figure = Figure::new(layout);
    mesh.add_to(&mut figure);
    Ok(figure)
}

/// Plots a filtered triangle mesh with its edges and shows the figure.
///
/// Returns the path of the written page.
pub fn plot_mesh(
    vertices: &[DVec3],
    faces: &[UVec3],
    color: &str,
    thresholds: FilterThresholds,
) -> Result<PathBuf> {
    let figure = mesh_figure(vertices, faces, color, thresholds, &crate::options())?;
    crate::show_as(&figure, "mesh")
}
