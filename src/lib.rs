// src/lib.rs
//! Dendrite
//!
//! A 3D shape-plot layer for simulated neuron morphologies, built on a
//! pluggable plotting surface. Draws one line per segment of each anatomical
//! section, optionally styled by a simulation variable, and places numbered
//! markers at fractional positions along a section.

pub mod error;
pub mod morphology;
pub mod plotter;
pub mod surface;

// Re-export main types for convenience
pub use error::PlotError;
pub use morphology::{MorphologyModel, SectionGeometry, SectionId, SegmentState};
pub use plotter::{auto_aspect, mark, shapeplot, AspectMode, ShapePlotOptions};
pub use surface::{Color, LineId, LineStyle, MarkerStyle, Scene3, Surface3};
