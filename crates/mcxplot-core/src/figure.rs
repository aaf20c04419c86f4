//! Figure model handed to the plotly.js backend.
//!
//! A [`Figure`] is an ordered list of [`Trace`]s plus a [`Layout`]. Every type
//! here serializes to the JSON shape plotly.js expects, so the backend only has
//! to embed `serde_json::to_string(&figure)` in a page.

use serde::{Deserialize, Serialize};

/// A plotly color scale: `(position, css color)` stops with positions in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ColorScale(pub Vec<(f64, String)>);

impl ColorScale {
    /// Returns the number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the scale has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A colored surface patch positioned in 3D space.
///
/// All grids are row-major and share the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
    pub surfacecolor: Vec<Vec<f64>>,
    pub colorscale: ColorScale,
    pub cmin: f64,
    pub cmax: f64,
    pub showscale: bool,
}

/// A triangulated mesh with one uniform color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh3dTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub i: Vec<u32>,
    pub j: Vec<u32>,
    pub k: Vec<u32>,
    pub color: String,
    pub opacity: f64,
}

/// Line style for [`Scatter3dTrace`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub color: String,
    pub width: f32,
}

/// A 3D polyline. `None` entries serialize to `null`, which plotly treats as a
/// break between segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scatter3dTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    pub z: Vec<Option<f64>>,
    pub mode: String,
    pub line: Line,
    pub showlegend: bool,
}

/// One data series of a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Surface(SurfaceTrace),
    Mesh3d(Mesh3dTrace),
    Scatter3d(Scatter3dTrace),
}

impl Trace {
    /// Returns the plotly trace type name.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Surface(_) => "surface",
            Self::Mesh3d(_) => "mesh3d",
            Self::Scatter3d(_) => "scatter3d",
        }
    }
}

/// A text title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Figure margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub r: u32,
    pub l: u32,
    pub b: u32,
    pub t: u32,
}

/// Figure canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A 3D scene axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
}

/// The 3D scene of a figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
}

impl Scene {
    /// Creates a scene with the given axis titles.
    pub fn with_axis_titles(x: &str, y: &str, z: &str) -> Self {
        Self {
            xaxis: Axis { title: Title::new(x) },
            yaxis: Axis { title: Title::new(y) },
            zaxis: Axis { title: Title::new(z) },
        }
    }
}

/// Figure layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    pub scene: Scene,
}

impl Layout {
    /// Creates a layout of the given size with default axis titles.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            title: None,
            autosize: None,
            width: canvas.width,
            height: canvas.height,
            margin: None,
            scene: Scene::with_axis_titles("X", "Y", "Z"),
        }
    }
}

/// A complete figure: traces in draw order plus layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    data: Vec<Trace>,
    layout: Layout,
}

impl Figure {
    /// Creates an empty figure with the given layout.
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    /// Appends a trace. Later traces draw on top of earlier ones.
    pub fn add_trace(&mut self, trace: Trace) -> &mut Self {
        self.data.push(trace);
        self
    }

    /// Returns the traces in draw order.
    #[must_use]
    pub fn traces(&self) -> &[Trace] {
        &self.data
    }

    /// Returns the layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the layout for modification.
    pub fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    /// Returns the number of traces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the figure has no traces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn edge_trace() -> Trace {
        Trace::Scatter3d(Scatter3dTrace {
            name: None,
            x: vec![Some(0.0), Some(1.0), None],
            y: vec![Some(0.0), Some(0.0), None],
            z: vec![Some(0.0), Some(0.0), None],
            mode: "lines".to_string(),
            line: Line {
                color: "black".to_string(),
                width: 2.0,
            },
            showlegend: false,
        })
    }

    #[test]
    fn test_trace_type_tag() {
        let value = serde_json::to_value(edge_trace()).unwrap();
        assert_eq!(value["type"], "scatter3d");
        assert_eq!(value["x"], json!([0.0, 1.0, null]));
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_color_scale_serializes_as_pairs() {
        let scale = ColorScale(vec![(0.0, "rgb(0,0,0)".into()), (1.0, "rgb(255,255,255)".into())]);
        let value = serde_json::to_value(&scale).unwrap();
        assert_eq!(value, json!([[0.0, "rgb(0,0,0)"], [1.0, "rgb(255,255,255)"]]));
    }

    #[test]
    fn test_layout_skips_unset_fields() {
        let layout = Layout::new(Canvas::new(700, 700));
        let value: Value = serde_json::to_value(&layout).unwrap();
        assert_eq!(value["width"], 700);
        assert!(value.get("margin").is_none());
        assert!(value.get("title").is_none());
        assert_eq!(value["scene"]["zaxis"]["title"]["text"], "Z");
    }

    #[test]
    fn test_figure_keeps_trace_order() {
        let mut fig = Figure::new(Layout::new(Canvas::new(10, 10)));
        assert!(fig.is_empty());
        fig.add_trace(edge_trace());
        fig.add_trace(Trace::Mesh3d(Mesh3dTrace {
            name: None,
            x: vec![],
            y: vec![],
            z: vec![],
            i: vec![],
            j: vec![],
            k: vec![],
            color: "blue".to_string(),
            opacity: 1.0,
        }));
        let names: Vec<_> = fig.traces().iter().map(Trace::type_name).collect();
        assert_eq!(names, ["scatter3d", "mesh3d"]);

        let value = serde_json::to_value(&fig).unwrap();
        assert_eq!(value["data"].as_array().unwrap().len(), 2);
        assert_eq!(value["layout"]["height"], 10);
    }
}
