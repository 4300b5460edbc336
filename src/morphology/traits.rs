//! Core morphology traits
//!
//! Defines the read-only interface a simulation engine must expose for its
//! anatomy to be shape-plotted. Engines adapt their own section/segment
//! objects to these traits; the plotter never reaches into engine state
//! directly.

use super::{Pt3d, SectionId};

/// Read-only view of one segment's simulated state.
///
/// A segment is the resolution unit for simulated state (e.g. membrane
/// voltage): a fractional subdivision of its section.
pub trait SegmentState {
    /// Fractional position of the segment center along its section, in [0, 1].
    fn x(&self) -> f64;

    /// Segment diameter in µm.
    fn diam(&self) -> f64;

    /// A variable stored directly on the segment ("v", "ina").
    ///
    /// Returns `None` when the segment does not carry the variable; lookup
    /// never fails.
    fn var(&self, name: &str) -> Option<f64>;

    /// A variable nested under a named mechanism ("hh"."gkbar").
    ///
    /// Returns `None` when either the mechanism or the variable is absent.
    fn mech_var(&self, mech: &str, name: &str) -> Option<f64>;

    /// Resolve a possibly dotted variable path.
    ///
    /// `"v"` reads a direct variable, `"hh.gkbar"` reads `gkbar` on the
    /// `hh` mechanism. Equivalent to [`var`](Self::var) when the path has
    /// no dot.
    fn lookup(&self, path: &str) -> Option<f64> {
        match path.split_once('.') {
            Some((mech, name)) => self.mech_var(mech, name),
            None => self.var(path),
        }
    }
}

/// Read-only geometry of one anatomical section.
///
/// A section is a linear compartment modeled as a polyline of 3D points
/// with an intrinsic length.
pub trait SectionGeometry {
    /// Section name, for labels and logging.
    fn name(&self) -> &str;

    /// Ordered 3D points with arc-length positions.
    ///
    /// Empty or single-point slices mean the shape-define step has not run
    /// for this section yet.
    fn points3d(&self) -> &[Pt3d];

    /// Total section length in µm.
    ///
    /// Once shape is defined this equals the last recorded point's arc
    /// length.
    fn length(&self) -> f64;

    /// Number of segments the section is subdivided into.
    fn nseg(&self) -> usize;

    /// Segment state views, in segment-iteration order.
    fn segments(&self) -> Vec<&dyn SegmentState>;
}

/// A morphology model: the collection of sections registered with a
/// simulation engine.
pub trait MorphologyModel {
    /// Materialize 3D point geometry for sections that lack it.
    ///
    /// Must be idempotent; sections that already carry 3D points are left
    /// untouched. Called by the plotter before any geometry read.
    fn define_shape(&mut self);

    /// All registered sections, in registration order.
    fn sections(&self) -> Vec<&dyn SectionGeometry>;

    /// A single section by id.
    fn section(&self, id: SectionId) -> Option<&dyn SectionGeometry>;
}
