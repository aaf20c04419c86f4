//! Rendering error types.

use thiserror::Error;

/// Errors that can occur while turning a figure into an output document.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No color map is registered under the requested name.
    #[error("unknown color map '{0}'")]
    UnknownColorMap(String),

    /// The output file extension is not one we can write.
    #[error("unsupported output format '{0}'")]
    UnsupportedFormat(String),

    /// Serializing the figure failed.
    #[error("figure serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
