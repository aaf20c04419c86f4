//! Rendering backend for mcxplot-rs.
//!
//! mcxplot draws through plotly.js. This crate provides:
//! - The color map system, converted to explicit plotly color scales
//! - Export of a [`mcxplot_core::Figure`] as JSON or a standalone HTML page

// Color channels are converted between float and byte ranges
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod color_maps;
pub mod error;
pub mod export;

pub use color_maps::{css_rgb, ColorMap, ColorMapRegistry};
pub use error::{RenderError, RenderResult};
pub use export::{figure_to_html, figure_to_json, save_figure, ExportFormat, HtmlOptions};
