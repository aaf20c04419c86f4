//! Core abstractions for mcxplot-rs.
//!
//! This crate provides the fundamental types used throughout mcxplot-rs:
//! - [`Figure`], [`Trace`] and [`Layout`], the plotly.js figure model
//! - [`Structure`] trait for prepared data that turns into traces
//! - Global state management and configuration options

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Plotly attribute names are terse by convention
#![allow(clippy::many_single_char_names)]

pub mod error;
pub mod figure;
pub mod options;
pub mod state;
pub mod structure;

pub use error::{McxPlotError, Result};
pub use figure::{
    Axis, Canvas, ColorScale, Figure, Layout, Line, Margin, Mesh3dTrace, Scatter3dTrace, Scene,
    SurfaceTrace, Title, Trace,
};
pub use options::Options;
pub use state::{with_context, with_context_mut, Context};
pub use structure::Structure;

// Re-export glam types for convenience
pub use glam::{DVec3, UVec3, Vec3};
