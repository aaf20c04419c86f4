//! Initialization and lifecycle management for mcxplot-rs.
//!
//! This module provides the functions to initialize mcxplot, adjust its
//! options, show figures and shut it down again.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use mcxplot_core::{Figure, Options};

use crate::Result;

/// Sequence number appended to output file names written by [`show_as`].
static FIGURE_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Initializes mcxplot with default settings.
///
/// Calling this is optional: plot functions fall back to the default
/// [`Options`] when mcxplot was never initialized. It also installs the
/// `env_logger` backend if no logger is set yet.
///
/// # Errors
///
/// Returns an error if mcxplot has already been initialized.
///
/// # Example
///
/// ```no_run
/// use mcxplot::*;
///
/// fn main() -> Result<()> {
///     init()?;
///     // Now you can call plot_3d_slices() and plot_mesh()
///     Ok(())
/// }
/// ```
pub fn init() -> Result<()> {
    init_with_options(Options::default())
}

/// Initializes mcxplot with the given options.
pub fn init_with_options(options: Options) -> Result<()> {
    let _ = env_logger::try_init();
    mcxplot_core::state::init_context(options)?;
    log::info!("mcxplot-rs initialized");
    Ok(())
}

/// Returns whether mcxplot has been initialized.
#[must_use]
pub fn is_initialized() -> bool {
    mcxplot_core::state::is_initialized()
}

/// Shuts down mcxplot and resets the options.
///
/// After calling this, you can call [`init()`] again to reinitialize.
pub fn shutdown() {
    mcxplot_core::state::shutdown_context();
    log::info!("mcxplot-rs shut down");
}

/// Returns the current options, or the defaults if mcxplot is not initialized.
#[must_use]
pub fn options() -> Options {
    mcxplot_core::state::current_options()
}

/// Replaces the global options.
///
/// # Errors
///
/// Returns an error if mcxplot has not been initialized.
pub fn set_options(options: Options) -> Result<()> {
    mcxplot_core::state::with_context_mut(|ctx| ctx.options = options)
}

/// Shows a figure.
///
/// Writes the figure as an interactive HTML page into the configured output
/// directory and returns the path of the page. Open it in a browser to
/// interact with the plot.
pub fn show(figure: &Figure) -> Result<PathBuf> {
    show_as(figure, "figure")
}

/// Shows a figure, naming the output file after `stem`.
///
/// File names have the form `{stem}_{YYYYmmdd_HHMMSS}_{n}.html`.
pub fn show_as(figure: &Figure, stem: &str) -> Result<PathBuf> {
    let _ = env_logger::try_init();
    let options = options();

    let dir = options.resolved_output_dir();
    std::fs::create_dir_all(&dir)?;

    // Add human-readable timestamp to avoid overwriting earlier figures
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let seq = FIGURE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let path = dir.join(format!("{}_{timestamp}_{seq}.html", sanitize_stem(stem)));

    crate::headless::render_to_file_with(figure, &path, &options)?;
    log::info!("figure written to {}", path.display());
    Ok(path)
}

fn sanitize_stem(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "figure".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_stem() {
        assert_eq!(sanitize_stem("volume_slices"), "volume_slices");
        assert_eq!(sanitize_stem("my mesh/v2"), "my_mesh_v2");
        assert_eq!(sanitize_stem(""), "figure");
    }
}
