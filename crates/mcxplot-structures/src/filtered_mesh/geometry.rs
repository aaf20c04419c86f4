//! Filtering, compaction and edge extraction for triangle meshes.
//!
//! This module contains the steps that turn raw vertices and faces into the
//! filtered mesh:
//! - Per-vertex keep mask from axis thresholds
//! - Old to new index map preserving vertex order
//! - Face selection and reindexing
//! - Unique undirected edges for wireframe rendering

use std::collections::HashSet;

use glam::{DVec3, UVec3};
use mcxplot_core::{McxPlotError, Result};

use super::FilterThresholds;

/// Checks that every face index refers to an existing vertex.
pub(super) fn validate_faces(faces: &[UVec3], num_vertices: usize) -> Result<()> {
    for (face_idx, face) in faces.iter().enumerate() {
        if let Some(&bad) = face
            .to_array()
            .iter()
            .find(|&&vi| vi as usize >= num_vertices)
        {
            return Err(McxPlotError::InvalidFaceIndex {
                face: face_idx,
                index: bad,
                num_vertices,
            });
        }
    }
    Ok(())
}

/// Computes which vertices pass the thresholds.
pub(super) fn compute_keep_mask(vertices: &[DVec3], thresholds: &FilterThresholds) -> Vec<bool> {
    vertices.iter().map(|&v| thresholds.accepts(v)).collect()
}

/// Maps each kept vertex to its position among the kept vertices.
///
/// Dropped vertices map to `None`. Relative order is preserved.
pub(super) fn compute_index_map(keep: &[bool]) -> Vec<Option<u32>> {
    let mut next = 0u32;
    keep.iter()
        .map(|&kept| {
            kept.then(|| {
                let new_index = next;
                next += 1;
                new_index
            })
        })
        .collect()
}

/// Keeps faces whose three vertices all survive and rewrites them to the
/// compacted indices.
pub(super) fn remap_faces(faces: &[UVec3], index_map: &[Option<u32>]) -> Vec<UVec3> {
    faces
        .iter()
        .filter_map(|face| {
            Some(UVec3::new(
                index_map[face.x as usize]?,
                index_map[face.y as usize]?,
                index_map[face.z as usize]?,
            ))
        })
        .collect()
}

/// Computes unique edges as sorted pairs.
///
/// `(a, b)` and `(b, a)` are the same edge, however many faces share it.
pub(super) fn compute_edges(faces: &[UVec3]) -> Vec<[u32; 2]> {
    let mut edge_set: HashSet<[u32; 2]> = HashSet::with_capacity(faces.len() * 3);

    for face in faces {
        let f = face.to_array();
        for i in 0..3 {
            let v0 = f[i];
            let v1 = f[(i + 1) % 3];
            // Store as sorted pair to avoid duplicates
            edge_set.insert([v0.min(v1), v0.max(v1)]);
        }
    }

    let mut edges: Vec<[u32; 2]> = edge_set.into_iter().collect();
    edges.sort_unstable(); // Sort for deterministic ordering
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_map_compacts_in_order() {
        let map = compute_index_map(&[false, true, false, true, true]);
        assert_eq!(map, [None, Some(0), None, Some(1), Some(2)]);
    }

    #[test]
    fn test_remap_drops_faces_with_missing_vertex() {
        let map = compute_index_map(&[false, true, true, true]);
        let faces = [
            UVec3::new(0, 1, 2),
            UVec3::new(1, 2, 3),
            UVec3::new(3, 0, 1),
        ];
        assert_eq!(remap_faces(&faces, &map), [UVec3::new(0, 1, 2)]);
    }

    #[test]
    fn test_shared_edge_counted_once() {
        // Two triangles sharing edge 1-2, wound in opposite directions.
        let faces = [UVec3::new(0, 1, 2), UVec3::new(2, 1, 3)];
        let edges = compute_edges(&faces);
        assert_eq!(edges, [[0, 1], [0, 2], [1, 2], [1, 3], [2, 3]]);
    }

    #[test]
    fn test_degenerate_face_edges() {
        let edges = compute_edges(&[UVec3::new(4, 4, 5)]);
        assert_eq!(edges, [[4, 4], [4, 5]]);
    }

    #[test]
    fn test_validate_faces() {
        assert!(validate_faces(&[UVec3::new(0, 1, 2)], 3).is_ok());
        let err = validate_faces(&[UVec3::new(0, 1, 2), UVec3::new(0, 3, 1)], 3).unwrap_err();
        assert!(matches!(
            err,
            McxPlotError::InvalidFaceIndex {
                face: 1,
                index: 3,
                num_vertices: 3
            }
        ));
    }
}
