//! Headless export API for mcxplot-rs.
//!
//! Provides functions to turn a figure into an HTML page, plotly JSON or a
//! file without going through [`crate::show`]. Useful for integration tests,
//! notebooks and batch processing.

use std::path::Path;

use mcxplot_core::{Figure, Options};
use mcxplot_render::{HtmlOptions, RenderError};

use crate::{McxPlotError, Result};

/// Renders a figure as a standalone HTML page.
///
/// The page loads plotly.js from the URL in the current [`Options`].
///
/// # Example
/// ```no_run
/// use mcxplot::*;
///
/// let field = VolumeField::from_fn(UVec3::splat(8), |i, j, k| f64::from(i + j + k)).unwrap();
/// let figure = slices_figure(&field, SliceIndices::default(), &options()).unwrap();
/// let html = render_to_html(&figure).unwrap();
/// assert!(html.contains("Plotly.newPlot"));
/// ```
pub fn render_to_html(figure: &Figure) -> Result<String> {
    mcxplot_render::figure_to_html(figure, &html_options(&crate::options()))
        .map_err(render_error)
}

/// Serializes a figure as plotly JSON (`{ "data": [...], "layout": {...} }`).
pub fn render_to_json(figure: &Figure) -> Result<String> {
    mcxplot_render::figure_to_json(figure).map_err(render_error)
}

/// Writes a figure to a file. The extension picks the format: `.html`/`.htm`
/// for a page, `.json` for the bare figure.
pub fn render_to_file(figure: &Figure, path: impl AsRef<Path>) -> Result<()> {
    render_to_file_with(figure, path.as_ref(), &crate::options())
}

pub(crate) fn render_to_file_with(figure: &Figure, path: &Path, options: &Options) -> Result<()> {
    mcxplot_render::save_figure(path, figure, &html_options(options)).map_err(render_error)
}

fn html_options(options: &Options) -> HtmlOptions {
    HtmlOptions {
        plotly_js_url: options.plotly_js_url.clone(),
        ..HtmlOptions::default()
    }
}

pub(crate) fn render_error(e: RenderError) -> McxPlotError {
    match e {
        RenderError::Io(e) => McxPlotError::IoError(e),
        RenderError::Serialization(e) => McxPlotError::JsonError(e),
        other => McxPlotError::RenderError(other.to_string()),
    }
}
