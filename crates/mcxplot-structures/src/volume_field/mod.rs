//! Dense 3D scalar field and its axis-aligned slices.

mod slices;

pub use slices::*;

use glam::UVec3;
use mcxplot_core::{McxPlotError, Result};

/// A dense regular 3D array of samples.
///
/// Samples are stored with the first axis fastest:
/// `flat = i + j * nx + k * nx * ny`.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeField {
    node_dim: UVec3,
    values: Vec<f64>,
}

impl VolumeField {
    /// Creates a field from flattened samples.
    ///
    /// # Arguments
    /// * `node_dim` - Number of samples along X, Y and Z
    /// * `values` - `nx * ny * nz` samples, first axis fastest
    pub fn new(node_dim: UVec3, values: Vec<f64>) -> Result<Self> {
        if node_dim.cmpeq(UVec3::ZERO).any() {
            return Err(McxPlotError::EmptyField);
        }
        let expected = num_nodes(node_dim);
        if values.len() != expected {
            return Err(McxPlotError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { node_dim, values })
    }

    /// Creates a field by evaluating `f(i, j, k)` at every node.
    pub fn from_fn(node_dim: UVec3, mut f: impl FnMut(u32, u32, u32) -> f64) -> Result<Self> {
        let mut values = Vec::with_capacity(num_nodes(node_dim));
        for k in 0..node_dim.z {
            for j in 0..node_dim.y {
                for i in 0..node_dim.x {
                    values.push(f(i, j, k));
                }
            }
        }
        Self::new(node_dim, values)
    }

    /// Creates a field from nested vectors indexed `[i][j][k]`.
    ///
    /// Every inner vector must have the same length as the first one.
    pub fn from_nested(data: &[Vec<Vec<f64>>]) -> Result<Self> {
        let nx = data.len();
        let ny = data.first().map_or(0, Vec::len);
        let nz = data.first().and_then(|p| p.first()).map_or(0, Vec::len);

        for plane in data {
            if plane.len() != ny {
                return Err(McxPlotError::SizeMismatch {
                    expected: ny,
                    actual: plane.len(),
                });
            }
            if let Some(row) = plane.iter().find(|row| row.len() != nz) {
                return Err(McxPlotError::SizeMismatch {
                    expected: nz,
                    actual: row.len(),
                });
            }
        }

        let node_dim = UVec3::new(
            dim_from_len(nx)?,
            dim_from_len(ny)?,
            dim_from_len(nz)?,
        );
        Self::from_fn(node_dim, |i, j, k| {
            data[i as usize][j as usize][k as usize]
        })
    }

    /// Returns the number of samples in each dimension.
    #[must_use]
    pub fn node_dim(&self) -> UVec3 {
        self.node_dim
    }

    /// Returns the total number of samples.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.values.len()
    }

    /// Returns the flattened samples.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Flattens a 3D node index to a linear index.
    #[must_use]
    pub fn flatten_node_index(&self, i: u32, j: u32, k: u32) -> usize {
        let nx = self.node_dim.x as usize;
        let ny = self.node_dim.y as usize;
        i as usize + j as usize * nx + k as usize * nx * ny
    }

    /// Unflattens a linear node index to a 3D index.
    #[must_use]
    pub fn unflatten_node_index(&self, idx: usize) -> UVec3 {
        let nx = self.node_dim.x as usize;
        let ny = self.node_dim.y as usize;
        UVec3::new(
            (idx % nx) as u32,
            ((idx / nx) % ny) as u32,
            (idx / (nx * ny)) as u32,
        )
    }

    /// Returns the sample at `(i, j, k)`, or `None` outside the field.
    #[must_use]
    pub fn get(&self, i: u32, j: u32, k: u32) -> Option<f64> {
        let dim = self.node_dim;
        if i >= dim.x || j >= dim.y || k >= dim.z {
            return None;
        }
        Some(self.values[self.flatten_node_index(i, j, k)])
    }

    /// Returns the minimum and maximum over all finite samples.
    ///
    /// Returns `None` if no sample is finite.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for &v in &self.values {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        (min <= max).then_some((min, max))
    }

    /// Returns the default slice position for each axis: the middle node,
    /// rounded down.
    #[must_use]
    pub fn center_indices(&self) -> UVec3 {
        self.node_dim / 2
    }
}

fn num_nodes(node_dim: UVec3) -> usize {
    node_dim.x as usize * node_dim.y as usize * node_dim.z as usize
}

fn dim_from_len(len: usize) -> Result<u32> {
    match u32::try_from(len) {
        Ok(0) => Err(McxPlotError::EmptyField),
        Ok(n) => Ok(n),
        Err(_) => Err(McxPlotError::SizeMismatch {
            expected: u32::MAX as usize,
            actual: len,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation() {
        let field = VolumeField::new(UVec3::new(2, 3, 4), vec![0.0; 24]).unwrap();
        assert_eq!(field.node_dim(), UVec3::new(2, 3, 4));
        assert_eq!(field.num_nodes(), 24);
    }

    #[test]
    fn test_size_mismatch() {
        let err = VolumeField::new(UVec3::new(2, 2, 2), vec![0.0; 7]).unwrap_err();
        assert!(matches!(
            err,
            McxPlotError::SizeMismatch {
                expected: 8,
                actual: 7
            }
        ));
    }

    #[test]
    fn test_zero_extent_is_empty() {
        let err = VolumeField::new(UVec3::new(0, 2, 2), Vec::new()).unwrap_err();
        assert!(matches!(err, McxPlotError::EmptyField));
    }

    #[test]
    fn test_index_conversion() {
        let field = VolumeField::from_fn(UVec3::new(5, 6, 7), |_, _, _| 0.0).unwrap();
        let idx = field.flatten_node_index(2, 3, 4);
        assert_eq!(field.unflatten_node_index(idx), UVec3::new(2, 3, 4));
    }

    #[test]
    fn test_from_fn_layout() {
        let field =
            VolumeField::from_fn(UVec3::new(3, 4, 5), |i, j, k| f64::from(i * 100 + j * 10 + k))
                .unwrap();
        assert_eq!(field.get(2, 3, 4), Some(234.0));
        assert_eq!(field.values()[1], 100.0);
        assert_eq!(field.get(3, 0, 0), None);
    }

    #[test]
    fn test_from_nested() {
        let data = vec![
            vec![vec![0.0, 1.0], vec![2.0, 3.0]],
            vec![vec![4.0, 5.0], vec![6.0, 7.0]],
        ];
        let field = VolumeField::from_nested(&data).unwrap();
        assert_eq!(field.node_dim(), UVec3::new(2, 2, 2));
        assert_eq!(field.get(1, 0, 1), Some(5.0));
        assert_eq!(field.get(0, 1, 0), Some(2.0));
    }

    #[test]
    fn test_from_nested_rejects_ragged() {
        let data = vec![vec![vec![0.0, 1.0], vec![2.0]]];
        assert!(matches!(
            VolumeField::from_nested(&data),
            Err(McxPlotError::SizeMismatch {
                expected: 2,
                actual: 1
            })
        ));
        assert!(matches!(
            VolumeField::from_nested(&[]),
            Err(McxPlotError::EmptyField)
        ));
    }

    #[test]
    fn test_value_range_skips_nan() {
        let field =
            VolumeField::new(UVec3::new(4, 1, 1), vec![f64::NAN, -2.0, 5.0, 1.0]).unwrap();
        assert_eq!(field.value_range(), Some((-2.0, 5.0)));

        let all_nan = VolumeField::new(UVec3::ONE, vec![f64::NAN]).unwrap();
        assert_eq!(all_nan.value_range(), None);
    }

    #[test]
    fn test_value_range_skips_infinities() {
        // log10 of zero fluence
        let field =
            VolumeField::new(UVec3::new(3, 1, 1), vec![f64::NEG_INFINITY, 0.0, 2.0]).unwrap();
        assert_eq!(field.value_range(), Some((0.0, 2.0)));

        let all_inf =
            VolumeField::new(UVec3::new(2, 1, 1), vec![f64::NEG_INFINITY, f64::INFINITY]).unwrap();
        assert_eq!(all_inf.value_range(), None);
    }

    #[test]
    fn test_center_indices_round_down() {
        let field = VolumeField::from_fn(UVec3::new(4, 5, 1), |_, _, _| 0.0).unwrap();
        assert_eq!(field.center_indices(), UVec3::new(2, 2, 0));
    }
}
