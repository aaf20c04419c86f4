//! Color map system.
//!
//! Color maps are stored as evenly spaced RGB samples and converted into
//! explicit plotly color scales, so the page does not depend on which named
//! scales a given plotly.js build ships.

use std::collections::HashMap;

use glam::Vec3;
use mcxplot_core::ColorScale;

use crate::error::{RenderError, RenderResult};

/// A color map for mapping scalar values to colors.
#[derive(Debug, Clone)]
pub struct ColorMap {
    /// Color map name.
    pub name: String,
    /// Color samples (evenly spaced from 0 to 1).
    pub colors: Vec<Vec3>,
}

impl ColorMap {
    /// Creates a new color map.
    pub fn new(name: impl Into<String>, colors: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Converts the samples into plotly color scale stops.
    ///
    /// A single sample becomes a constant scale with stops at 0 and 1.
    pub fn to_color_scale(&self) -> ColorScale {
        match self.colors.as_slice() {
            [] => ColorScale::default(),
            [only] => ColorScale(vec![(0.0, css_rgb(*only)), (1.0, css_rgb(*only))]),
            colors => {
                let last = (colors.len() - 1) as f64;
                ColorScale(
                    colors
                        .iter()
                        .enumerate()
                        .map(|(i, c)| (i as f64 / last, css_rgb(*c)))
                        .collect(),
                )
            }
        }
    }
}

/// Formats a `[0, 1]` RGB color as a CSS `rgb()` string.
pub fn css_rgb(color: Vec3) -> String {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    format!("rgb({},{},{})", c.x as u8, c.y as u8, c.z as u8)
}

/// Registry for managing color maps.
///
/// Names are matched case-insensitively.
#[derive(Default)]
pub struct ColorMapRegistry {
    color_maps: HashMap<String, ColorMap>,
}

impl ColorMapRegistry {
    /// Creates a new color map registry with default color maps.
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        // Turbo color map
        self.register(ColorMap::new(
            "turbo",
            vec![
                Vec3::new(0.188, 0.071, 0.231),
                Vec3::new(0.255, 0.271, 0.671),
                Vec3::new(0.275, 0.459, 0.929),
                Vec3::new(0.224, 0.635, 0.988),
                Vec3::new(0.106, 0.812, 0.831),
                Vec3::new(0.141, 0.925, 0.651),
                Vec3::new(0.380, 0.988, 0.424),
                Vec3::new(0.643, 0.988, 0.231),
                Vec3::new(0.820, 0.910, 0.204),
                Vec3::new(0.953, 0.776, 0.227),
                Vec3::new(0.996, 0.608, 0.176),
                Vec3::new(0.953, 0.388, 0.082),
                Vec3::new(0.851, 0.220, 0.024),
                Vec3::new(0.694, 0.098, 0.004),
                Vec3::new(0.478, 0.016, 0.008),
            ],
        ));

        // Viridis color map
        self.register(ColorMap::new(
            "viridis",
            vec![
                Vec3::new(0.267, 0.004, 0.329),
                Vec3::new(0.282, 0.140, 0.457),
                Vec3::new(0.253, 0.265, 0.529),
                Vec3::new(0.206, 0.371, 0.553),
                Vec3::new(0.163, 0.471, 0.558),
                Vec3::new(0.127, 0.566, 0.550),
                Vec3::new(0.134, 0.658, 0.517),
                Vec3::new(0.266, 0.749, 0.440),
                Vec3::new(0.477, 0.821, 0.318),
                Vec3::new(0.741, 0.873, 0.150),
                Vec3::new(0.993, 0.906, 0.144),
            ],
        ));

        // Blues color map
        self.register(ColorMap::new(
            "blues",
            vec![
                Vec3::new(0.969, 0.984, 1.000),
                Vec3::new(0.776, 0.859, 0.937),
                Vec3::new(0.419, 0.682, 0.839),
                Vec3::new(0.129, 0.443, 0.710),
                Vec3::new(0.031, 0.188, 0.420),
            ],
        ));

        // Coolwarm color map
        self.register(ColorMap::new(
            "coolwarm",
            vec![
                Vec3::new(0.230, 0.299, 0.754),
                Vec3::new(0.552, 0.690, 0.996),
                Vec3::new(0.866, 0.866, 0.866),
                Vec3::new(0.956, 0.604, 0.486),
                Vec3::new(0.706, 0.016, 0.150),
            ],
        ));
    }

    /// Registers a color map, replacing any map with the same name.
    pub fn register(&mut self, color_map: ColorMap) {
        self.color_maps
            .insert(color_map.name.to_lowercase(), color_map);
    }

    /// Gets a color map by name.
    pub fn get(&self, name: &str) -> Option<&ColorMap> {
        self.color_maps.get(&name.to_lowercase())
    }

    /// Gets a color map by name as a plotly color scale.
    pub fn color_scale(&self, name: &str) -> RenderResult<ColorScale> {
        self.get(name)
            .map(ColorMap::to_color_scale)
            .ok_or_else(|| RenderError::UnknownColorMap(name.to_string()))
    }
}
