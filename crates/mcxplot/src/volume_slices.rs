//! Orthogonal slices through a 3D scalar field.
//!
//! Three axis-aligned cross-sections are drawn as colored surfaces. They share
//! one color scale spanning the minimum and maximum of the whole field, and
//! only the last one shows a color bar.
//!
//! # Example
//!
//! ```no_run
//! use mcxplot::*;
//!
//! fn main() -> Result<()> {
//!     init()?;
//!
//!     // Distance from the center of a 32^3 grid
//!     let field = VolumeField::from_fn(UVec3::splat(32), |i, j, k| {
//!         let p = DVec3::new(f64::from(i), f64::from(j), f64::from(k)) - 15.5;
//!         p.length()
//!     })?;
//!
//!     // Slice through the center on X and Y, near the bottom on Z
//!     let path = plot_3d_slices(&field, SliceIndices { z: Some(4), ..Default::default() })?;
//!     println!("open {}", path.display());
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use mcxplot_core::{Figure, Layout, Options, Scene, Structure, Title};
use mcxplot_render::ColorMapRegistry;
use mcxplot_structures::{SliceIndices, VolumeField, VolumeSlices};

use crate::headless::render_error;
use crate::Result;

/// Builds the slice figure without writing it anywhere.
///
/// Missing indices default to the middle of their axis.
///
/// # Errors
///
/// Returns [`crate::McxPlotError::IndexOutOfRange`] for an index past the end
/// of its axis, [`crate::McxPlotError::EmptyField`] if the field has no finite
/// sample, and a render error for an unknown color map name.
pub fn slices_figure(
    field: &VolumeField,
    indices: SliceIndices,
    options: &Options,
) -> Result<Figure> {
    let color_scale = ColorMapRegistry::new()
        .color_scale(&options.slice_colormap)
        .map_err(render_error)?;
    let slices = VolumeSlices::new("volume_slices", field, indices, color_scale)?;

    let mut layout = Layout::new(options.slice_canvas);
    layout.title = Some(Title::new(options.slice_title.as_str()));
    layout.autosize = Some(false);
    layout.scene = Scene::with_axis_titles("X axis", "Y axis", "Z axis");

    let mut figure = Figure::new(layout);
    slices.add_to(&mut figure);
    Ok(figure)
}

/// Plots three orthogonal slices of `field` and shows the figure.
///
/// Returns the path of the written page.
pub fn plot_3d_slices(field: &VolumeField, indices: SliceIndices) -> Result<PathBuf> {
    let figure = slices_figure(field, indices, &crate::options())?;
    crate::show_as(&figure, "volume_slices")
}
