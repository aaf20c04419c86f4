//! Wireframe line geometry.
//!
//! plotly draws one `scatter3d` trace as a single polyline. A `null` point
//! breaks the line, so each edge is written as its two endpoints followed by
//! a break and all edges fit in one trace.

use glam::DVec3;

/// Coordinates of a broken polyline, one list per axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeSegments {
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    pub z: Vec<Option<f64>>,
}

impl EdgeSegments {
    /// Builds segments for `edges` over `nodes`.
    pub fn new(nodes: &[DVec3], edges: &[[u32; 2]]) -> Self {
        let len = edges.len() * 3;
        let mut segments = Self {
            x: Vec::with_capacity(len),
            y: Vec::with_capacity(len),
            z: Vec::with_capacity(len),
        };
        for &[tail, tip] in edges {
            segments.push_point(nodes[tail as usize]);
            segments.push_point(nodes[tip as usize]);
            segments.push_break();
        }
        segments
    }

    fn push_point(&mut self, p: DVec3) {
        self.x.push(Some(p.x));
        self.y.push(Some(p.y));
        self.z.push(Some(p.z));
    }

    fn push_break(&mut self) {
        self.x.push(None);
        self.y.push(None);
        self.z.push(None);
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn num_segments(&self) -> usize {
        self.x.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_are_separated_by_breaks() {
        let nodes = [DVec3::ZERO, DVec3::X, DVec3::Y];
        let segments = EdgeSegments::new(&nodes, &[[0, 1], [1, 2]]);
        assert_eq!(segments.num_segments(), 2);
        assert_eq!(segments.x, [Some(0.0), Some(1.0), None, Some(1.0), Some(0.0), None]);
        assert_eq!(segments.y, [Some(0.0), Some(0.0), None, Some(0.0), Some(1.0), None]);
        assert!(segments.z.iter().step_by(3).all(Option::is_some));
    }

    #[test]
    fn test_no_edges() {
        let segments = EdgeSegments::new(&[DVec3::ONE], &[]);
        assert_eq!(segments, EdgeSegments::default());
    }
}
