//! Structure trait.
//!
//! A [`Structure`] is a piece of prepared data (a set of volume slices, a
//! filtered mesh) that knows how to describe itself as plotly traces.

use crate::figure::{Figure, Trace};

/// A geometric object that can be placed into a [`Figure`].
pub trait Structure {
    /// Returns the name of this structure.
    fn name(&self) -> &str;

    /// Returns the type name of this structure (e.g., "`VolumeSlices`").
    fn type_name(&self) -> &'static str;

    /// Builds the traces for this structure in draw order.
    fn traces(&self) -> Vec<Trace>;

    /// Appends this structure's traces to a figure.
    fn add_to(&self, figure: &mut Figure) {
        let traces = self.traces();
        log::debug!(
            "adding {} '{}' with {} traces",
            self.type_name(),
            self.name(),
            traces.len()
        );
        for trace in traces {
            figure.add_trace(trace);
        }
    }
}
