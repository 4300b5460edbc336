// src/morphology/mod.rs
//! # Morphology model
//!
//! Section/segment anatomy as seen by the plotter, independent of any
//! particular simulation engine.
//!
//! - **Traits** ([`traits`]) - read-only views the engine must provide
//! - **Geometry** ([`geometry`]) - arc-length interpolation and per-segment
//!   decomposition of a section polyline
//! - **Cable model** ([`cable`]) - an in-memory [`MorphologyModel`] used by
//!   demos and tests

pub mod cable;
pub mod geometry;
pub mod traits;

pub use cable::{CableModel, CableSection, CableSegment};
pub use traits::{MorphologyModel, SectionGeometry, SegmentState};

use cgmath::Point3;

/// Identifier of a section within a morphology model.
///
/// Stable for the lifetime of the model; handed out at section creation and
/// accepted back by section queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(pub usize);

/// One recorded 3D point of a section's polyline, carrying its cumulative
/// arc length from the section start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pt3d {
    pub pos: Point3<f64>,
    pub arc: f64,
}

impl Pt3d {
    pub fn new(x: f64, y: f64, z: f64, arc: f64) -> Self {
        Self {
            pos: Point3::new(x, y, z),
            arc,
        }
    }
}
