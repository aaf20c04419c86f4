//! Error types for mcxplot-rs.

use thiserror::Error;

/// The main error type for mcxplot-rs operations.
#[derive(Error, Debug)]
pub enum McxPlotError {
    /// mcxplot has not been initialized.
    #[error("mcxplot not initialized - call mcxplot::init() first")]
    NotInitialized,

    /// mcxplot has already been initialized.
    #[error("mcxplot already initialized")]
    AlreadyInitialized,

    /// A slice index lies outside the extent of its axis.
    #[error("{axis} index {index} out of range for extent {extent}")]
    IndexOutOfRange {
        axis: char,
        index: u32,
        extent: u32,
    },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The volume field has a zero extent or holds no finite sample.
    #[error("volume field is empty")]
    EmptyField,

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but the mesh has {num_vertices} vertices")]
    InvalidFaceIndex {
        face: usize,
        index: u32,
        num_vertices: usize,
    },

    /// A display color string could not be used.
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    /// Rendering error.
    #[error("render error: {0}")]
    RenderError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for mcxplot-rs operations.
pub type Result<T> = std::result::Result<T, McxPlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_message() {
        let err = McxPlotError::IndexOutOfRange {
            axis: 'y',
            index: 7,
            extent: 4,
        };
        assert_eq!(err.to_string(), "y index 7 out of range for extent 4");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: McxPlotError = io.into();
        assert!(matches!(err, McxPlotError::IoError(_)));
    }
}
