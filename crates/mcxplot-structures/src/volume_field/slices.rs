//! Orthogonal slices through a volume field.

use std::fmt;

use glam::UVec3;
use mcxplot_core::{ColorScale, McxPlotError, Result, Structure, SurfaceTrace, Trace};

use super::VolumeField;

/// One of the three grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceAxis {
    X,
    Y,
    Z,
}

impl SliceAxis {
    /// All axes in slice order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Returns the component index of this axis (0, 1 or 2).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Returns the axes spanning the slice plane as `(rows, columns)`.
    #[must_use]
    pub fn in_plane(self) -> (Self, Self) {
        match self {
            Self::X => (Self::Y, Self::Z),
            Self::Y => (Self::X, Self::Z),
            Self::Z => (Self::X, Self::Y),
        }
    }

    /// Returns the lowercase axis letter.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
        }
    }
}

impl fmt::Display for SliceAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Requested slice positions. A missing index means the middle of the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceIndices {
    pub x: Option<u32>,
    pub y: Option<u32>,
    pub z: Option<u32>,
}

impl SliceIndices {
    /// Slice positions at the given indices on all three axes.
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Resolves missing indices to the field center and checks the rest.
    pub fn resolve(&self, field: &VolumeField) -> Result<UVec3> {
        let dim = field.node_dim();
        let center = field.center_indices();
        let mut resolved = UVec3::ZERO;

        for (axis, requested) in SliceAxis::ALL.into_iter().zip([self.x, self.y, self.z]) {
            let a = axis.index();
            let index = requested.unwrap_or(center[a]);
            if index >= dim[a] {
                return Err(McxPlotError::IndexOutOfRange {
                    axis: axis.letter(),
                    index,
                    extent: dim[a],
                });
            }
            resolved[a] = index;
        }
        Ok(resolved)
    }
}

/// A 2D cross-section of a field with its position in space.
///
/// Grids are row-major; rows run along the first in-plane axis and columns
/// along the second (see [`SliceAxis::in_plane`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    axis: SliceAxis,
    index: u32,
    x: Vec<Vec<f64>>,
    y: Vec<Vec<f64>>,
    z: Vec<Vec<f64>>,
    values: Vec<Vec<f64>>,
}

impl Slice {
    /// Extracts the slice of `field` that holds `axis` fixed at `index`.
    pub fn extract(field: &VolumeField, axis: SliceAxis, index: u32) -> Result<Self> {
        let dim = field.node_dim();
        let a = axis.index();
        if index >= dim[a] {
            return Err(McxPlotError::IndexOutOfRange {
                axis: axis.letter(),
                index,
                extent: dim[a],
            });
        }

        let (row_axis, col_axis) = axis.in_plane();
        let rows = dim[row_axis.index()];
        let cols = dim[col_axis.index()];

        let mut slice = Self {
            axis,
            index,
            x: Vec::with_capacity(rows as usize),
            y: Vec::with_capacity(rows as usize),
            z: Vec::with_capacity(rows as usize),
            values: Vec::with_capacity(rows as usize),
        };

        for r in 0..rows {
            let mut xs = Vec::with_capacity(cols as usize);
            let mut ys = Vec::with_capacity(cols as usize);
            let mut zs = Vec::with_capacity(cols as usize);
            let mut vs = Vec::with_capacity(cols as usize);
            for c in 0..cols {
                let mut p = UVec3::ZERO;
                p[a] = index;
                p[row_axis.index()] = r;
                p[col_axis.index()] = c;

                xs.push(f64::from(p.x));
                ys.push(f64::from(p.y));
                zs.push(f64::from(p.z));
                vs.push(field.values()[field.flatten_node_index(p.x, p.y, p.z)]);
            }
            slice.x.push(xs);
            slice.y.push(ys);
            slice.z.push(zs);
            slice.values.push(vs);
        }

        Ok(slice)
    }

    /// Returns the fixed axis.
    #[must_use]
    pub fn axis(&self) -> SliceAxis {
        self.axis
    }

    /// Returns the index along the fixed axis.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the `(rows, columns)` shape of the slice grids.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.values.len(), self.values.first().map_or(0, Vec::len))
    }

    /// Returns the field values on the slice.
    #[must_use]
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Returns the x, y and z coordinate grids.
    #[must_use]
    pub fn coordinates(&self) -> (&[Vec<f64>], &[Vec<f64>], &[Vec<f64>]) {
        (&self.x, &self.y, &self.z)
    }

    fn to_trace(&self, color_scale: &ColorScale, range: (f64, f64), show_scale: bool) -> Trace {
        Trace::Surface(SurfaceTrace {
            name: Some(format!("{} = {}", self.axis, self.index)),
            x: self.x.clone(),
            y: self.y.clone(),
            z: self.z.clone(),
            surfacecolor: self.values.clone(),
            colorscale: color_scale.clone(),
            cmin: range.0,
            cmax: range.1,
            showscale: show_scale,
        })
    }
}

/// Three orthogonal slices sharing one color scale.
///
/// The color range is the minimum and maximum over the whole field, so the
/// slices are comparable with each other.
#[derive(Debug, Clone)]
pub struct VolumeSlices {
    name: String,
    slices: [Slice; 3],
    value_range: (f64, f64),
    color_scale: ColorScale,
}

impl VolumeSlices {
    /// Extracts the X, Y and Z slices of `field` at `indices`.
    pub fn new(
        name: impl Into<String>,
        field: &VolumeField,
        indices: SliceIndices,
        color_scale: ColorScale,
    ) -> Result<Self> {
        let at = indices.resolve(field)?;
        let value_range = field.value_range().ok_or(McxPlotError::EmptyField)?;
        log::debug!(
            "slicing {:?} field at ({}, {}, {}), range [{}, {}]",
            field.node_dim().to_array(),
            at.x,
            at.y,
            at.z,
            value_range.0,
            value_range.1
        );

        Ok(Self {
            name: name.into(),
            slices: [
                Slice::extract(field, SliceAxis::X, at.x)?,
                Slice::extract(field, SliceAxis::Y, at.y)?,
                Slice::extract(field, SliceAxis::Z, at.z)?,
            ],
            value_range,
            color_scale,
        })
    }

    /// Returns the slices in X, Y, Z order.
    #[must_use]
    pub fn slices(&self) -> &[Slice; 3] {
        &self.slices
    }

    /// Returns the slice that holds `axis` fixed.
    #[must_use]
    pub fn slice(&self, axis: SliceAxis) -> &Slice {
        &self.slices[axis.index()]
    }

    /// Returns the shared color range.
    #[must_use]
    pub fn value_range(&self) -> (f64, f64) {
        self.value_range
    }

    /// Returns the shared color scale.
    #[must_use]
    pub fn color_scale(&self) -> &ColorScale {
        &self.color_scale
    }
}

impl Structure for VolumeSlices {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "VolumeSlices"
    }

    fn traces(&self) -> Vec<Trace> {
        // One color bar is enough: only the last slice shows it.
        let last = self.slices.len() - 1;
        self.slices
            .iter()
            .enumerate()
            .map(|(i, s)| s.to_trace(&self.color_scale, self.value_range, i == last))
            .collect()
    }
}
