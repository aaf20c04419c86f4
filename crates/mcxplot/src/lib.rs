//! mcxplot-rs: interactive plots of volume fields and triangle meshes.
//!
//! mcxplot turns in-memory arrays into plotly.js figures. Two plot kinds are
//! provided:
//!
//! - [`plot_3d_slices`] draws three orthogonal slices of a 3D scalar field
//!   with one shared color scale.
//! - [`plot_mesh`] draws a triangle mesh after dropping vertices below
//!   per-axis thresholds, with each unique edge outlined once.
//!
//! # Quick Start
//!
//! ```no_run
//! use mcxplot::*;
//!
//! fn main() -> Result<()> {
//!     // Optional: sets up logging and the global options
//!     init()?;
//!
//!     let field = VolumeField::from_fn(UVec3::new(40, 40, 40), |i, j, k| {
//!         f64::from(i * j + k).ln_1p()
//!     })?;
//!     let page = plot_3d_slices(&field, SliceIndices::default())?;
//!     println!("open {}", page.display());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Each plot call prepares a **structure** ([`VolumeSlices`], [`FilteredMesh`]),
//! turns it into plotly traces inside a [`Figure`], and writes the figure as a
//! standalone HTML page. Use [`slices_figure`] and [`mesh_figure`] together with
//! the headless functions to get the figure without writing a page.

mod headless;
mod init;
mod mesh;
mod volume_slices;

// Re-export core types
pub use mcxplot_core::{
    error::{McxPlotError, Result},
    figure::{
        Canvas, ColorScale, Figure, Layout, Margin, Mesh3dTrace, Scatter3dTrace, Scene,
        SurfaceTrace, Title, Trace,
    },
    options::Options,
    state::{with_context, with_context_mut, Context},
    structure::Structure,
    DVec3, UVec3, Vec3,
};

// Re-export render types
pub use mcxplot_render::{ColorMap, ColorMapRegistry};

// Re-export structures
pub use mcxplot_structures::{
    EdgeSegments, FilterThresholds, FilteredMesh, Slice, SliceAxis, SliceIndices, VolumeField,
    VolumeSlices,
};

pub use headless::{render_to_file, render_to_html, render_to_json};
pub use init::{
    init, init_with_options, is_initialized, options, set_options, show, show_as, shutdown,
};
pub use mesh::{filter_mesh, mesh_figure, plot_mesh, DEFAULT_MESH_COLOR};
pub use volume_slices::{plot_3d_slices, slices_figure};
