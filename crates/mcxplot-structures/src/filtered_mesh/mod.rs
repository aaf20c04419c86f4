//! Triangle mesh filtered by per-axis minimum coordinates.

mod geometry;
mod wireframe;

pub use wireframe::EdgeSegments;

use glam::{DVec3, UVec3};
use mcxplot_core::{Line, McxPlotError, Mesh3dTrace, Result, Scatter3dTrace, Structure, Trace};

/// Per-axis minimum coordinates a vertex must strictly exceed.
///
/// An unset axis imposes no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilterThresholds {
    pub x_min: Option<f64>,
    pub y_min: Option<f64>,
    pub z_min: Option<f64>,
}

impl FilterThresholds {
    /// No filtering.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the X threshold.
    #[must_use]
    pub fn with_x_min(mut self, x_min: f64) -> Self {
        self.x_min = Some(x_min);
        self
    }

    /// Sets the Y threshold.
    #[must_use]
    pub fn with_y_min(mut self, y_min: f64) -> Self {
        self.y_min = Some(y_min);
        self
    }

    /// Sets the Z threshold.
    #[must_use]
    pub fn with_z_min(mut self, z_min: f64) -> Self {
        self.z_min = Some(z_min);
        self
    }

    /// Returns true if `v` exceeds every set threshold.
    ///
    /// NaN never exceeds a threshold.
    #[must_use]
    pub fn accepts(&self, v: DVec3) -> bool {
        [(self.x_min, v.x), (self.y_min, v.y), (self.z_min, v.z)]
            .into_iter()
            .all(|(min, coord)| min.map_or(true, |m| coord > m))
    }
}

/// Checks a display color: a CSS color name, `rgb(...)` string or hex code.
///
/// Only hex codes are checked for well-formedness; other names are passed
/// to plotly as-is.
pub fn validate_color(color: &str) -> Result<()> {
    let trimmed = color.trim();
    let valid = match trimmed.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => !trimmed.is_empty(),
    };
    if valid {
        Ok(())
    } else {
        Err(McxPlotError::InvalidColor(color.to_string()))
    }
}

/// A triangle mesh after vertex filtering, with compacted faces and unique
/// edges.
#[derive(Debug, Clone)]
pub struct FilteredMesh {
    name: String,

    // Filtered geometry
    vertices: Vec<DVec3>,
    faces: Vec<UVec3>,
    edges: Vec<[u32; 2]>,

    // Filter bookkeeping
    kept_mask: Vec<bool>,
    num_source_faces: usize,

    // Render options
    color: String,
    opacity: f64,
    edge_color: String,
    edge_width: f32,
}

impl FilteredMesh {
    /// Filters a mesh.
    ///
    /// Vertices that fail `thresholds` are dropped, along with every face
    /// that uses one of them. Surviving faces are rewritten to index the
    /// compacted vertex list.
    pub fn new(
        name: impl Into<String>,
        vertices: &[DVec3],
        faces: &[UVec3],
        thresholds: &FilterThresholds,
    ) -> Result<Self> {
        let name = name.into();
        geometry::validate_faces(faces, vertices.len())?;

        let kept_mask = geometry::compute_keep_mask(vertices, thresholds);
        let index_map = geometry::compute_index_map(&kept_mask);
        let kept_faces = geometry::remap_faces(faces, &index_map);
        let kept_vertices: Vec<DVec3> = vertices
            .iter()
            .zip(&kept_mask)
            .filter_map(|(&v, &kept)| kept.then_some(v))
            .collect();
        let edges = geometry::compute_edges(&kept_faces);

        if kept_vertices.is_empty() && !vertices.is_empty() {
            log::warn!("mesh '{name}': thresholds {thresholds:?} removed every vertex");
        }
        log::debug!(
            "mesh '{name}': kept {}/{} vertices, {}/{} faces, {} edges",
            kept_vertices.len(),
            vertices.len(),
            kept_faces.len(),
            faces.len(),
            edges.len()
        );

        Ok(Self {
            name,
            vertices: kept_vertices,
            faces: kept_faces,
            edges,
            kept_mask,
            num_source_faces: faces.len(),
            color: "blue".to_string(),
            opacity: 1.0,
            edge_color: "black".to_string(),
            edge_width: 2.0,
        })
    }

    /// Returns the kept vertices in their original order.
    #[must_use]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the surviving faces, indexing [`Self::vertices`].
    #[must_use]
    pub fn faces(&self) -> &[UVec3] {
        &self.faces
    }

    /// Returns the unique edges as sorted `[low, high]` pairs.
    #[must_use]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Returns, for every input vertex, whether it was kept.
    #[must_use]
    pub fn kept_mask(&self) -> &[bool] {
        &self.kept_mask
    }

    /// Returns the number of kept vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of surviving faces.
    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of unique edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of faces removed by the filter.
    #[must_use]
    pub fn num_dropped_faces(&self) -> usize {
        self.num_source_faces - self.faces.len()
    }

    /// Gets the surface color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Sets the surface color.
    pub fn set_color(&mut self, color: impl Into<String>) -> Result<&mut Self> {
        let color = color.into();
        validate_color(&color)?;
        self.color = color;
        Ok(self)
    }

    /// Sets the wireframe color and line width.
    pub fn set_edge_style(&mut self, color: impl Into<String>, width: f32) -> Result<&mut Self> {
        let color = color.into();
        validate_color(&color)?;
        self.edge_color = color;
        self.edge_width = width;
        Ok(self)
    }

    /// Builds the wireframe segments of the unique edges.
    #[must_use]
    pub fn edge_segments(&self) -> EdgeSegments {
        EdgeSegments::new(&self.vertices, &self.edges)
    }

    fn surface_trace(&self) -> Trace {
        let (mut i, mut j, mut k) = (
            Vec::with_capacity(self.faces.len()),
            Vec::with_capacity(self.faces.len()),
            Vec::with_capacity(self.faces.len()),
        );
        for f in &self.faces {
            i.push(f.x);
            j.push(f.y);
            k.push(f.z);
        }

        Trace::Mesh3d(Mesh3dTrace {
            name: Some(self.name.clone()),
            x: self.vertices.iter().map(|v| v.x).collect(),
            y: self.vertices.iter().map(|v| v.y).collect(),
            z: self.vertices.iter().map(|v| v.z).collect(),
            i,
            j,
            k,
            color: self.color.clone(),
            opacity: self.opacity,
        })
    }

    fn edge_trace(&self) -> Trace {
        let EdgeSegments { x, y, z } = self.edge_segments();
        Trace::Scatter3d(Scatter3dTrace {
            name: None,
            x,
            y,
            z,
            mode: "lines".to_string(),
            line: Line {
                color: self.edge_color.clone(),
                width: self.edge_width,
            },
            showlegend: false,
        })
    }
}

impl Structure for FilteredMesh {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "FilteredMesh"
    }

    fn traces(&self) -> Vec<Trace> {
        vec![self.surface_trace(), self.edge_trace()]
    }
}
