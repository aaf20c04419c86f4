//! Configuration options for mcxplot.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::figure::{Canvas, Margin};

/// Default plotly.js bundle loaded by exported pages.
pub const DEFAULT_PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Global configuration options for mcxplot.
///
/// Missing fields in a JSON config fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Directory that `show()` writes figures into. `None` means the system
    /// temp directory.
    pub output_dir: Option<PathBuf>,

    /// URL of the plotly.js bundle referenced by exported pages.
    pub plotly_js_url: String,

    /// Name of the color map shared by the three volume slices.
    pub slice_colormap: String,

    /// Title of the volume slice figure.
    pub slice_title: String,

    /// Canvas size of the volume slice figure.
    pub slice_canvas: Canvas,

    /// Canvas size of the mesh figure.
    pub mesh_canvas: Canvas,

    /// Margins of the mesh figure.
    pub mesh_margin: Margin,

    /// Wireframe color of the mesh figure.
    pub edge_color: String,

    /// Wireframe line width of the mesh figure.
    pub edge_width: f32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output_dir: None,
            plotly_js_url: DEFAULT_PLOTLY_JS_URL.to_string(),
            slice_colormap: "turbo".to_string(),
            slice_title: "3D Surface Slices of Logarithmic Data".to_string(),
            slice_canvas: Canvas::new(800, 800),
            mesh_canvas: Canvas::new(700, 700),
            mesh_margin: Margin {
                r: 20,
                l: 10,
                b: 10,
                t: 10,
            },
            edge_color: "black".to_string(),
            edge_width: 2.0,
        }
    }
}

impl Options {
    /// Parses options from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&text)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the directory figures are written into.
    #[must_use]
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_sizes() {
        let options = Options::default();
        assert_eq!(options.slice_canvas, Canvas::new(800, 800));
        assert_eq!(options.mesh_canvas, Canvas::new(700, 700));
        assert_eq!(options.mesh_margin.r, 20);
        assert_eq!(options.mesh_margin.t, 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options =
            Options::from_json_str(r#"{ "slice_colormap": "viridis", "edge_width": 3.5 }"#)
                .unwrap();
        assert_eq!(options.slice_colormap, "viridis");
        assert!((options.edge_width - 3.5).abs() < f32::EPSILON);
        assert_eq!(options.mesh_canvas, Canvas::new(700, 700));
        assert_eq!(options.plotly_js_url, DEFAULT_PLOTLY_JS_URL);
    }

    #[test]
    fn test_json_round_trip() {
        let mut options = Options::default();
        options.output_dir = Some(PathBuf::from("/tmp/figures"));
        let json = options.to_json_string().unwrap();
        assert_eq!(Options::from_json_str(&json).unwrap(), options);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = Options::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, crate::McxPlotError::JsonError(_)));
    }

    #[test]
    fn test_from_json_file() {
        let path =
            std::env::temp_dir().join(format!("mcxplot_options_{}.json", std::process::id()));
        let json = r#"{ "slice_title": "Fluence", "mesh_canvas": { "width": 500, "height": 400 } }"#;
        std::fs::write(&path, json).unwrap();
        let options = Options::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(options.slice_title, "Fluence");
        assert_eq!(options.mesh_canvas, Canvas::new(500, 400));
        assert_eq!(options.slice_colormap, "turbo");
        assert_eq!(options.slice_canvas, Canvas::new(800, 800));
    }

    #[test]
    fn test_missing_json_file_is_io_error() {
        let path = std::env::temp_dir().join("mcxplot_options_does_not_exist.json");
        let err = Options::from_json_file(path).unwrap_err();
        assert!(matches!(err, crate::McxPlotError::IoError(_)));
    }

    #[test]
    fn test_resolved_output_dir_defaults_to_temp() {
        assert_eq!(Options::default().resolved_output_dir(), std::env::temp_dir());
    }
}
