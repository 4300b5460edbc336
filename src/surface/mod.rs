// src/surface/mod.rs
//! # Plotting surface
//!
//! Abstraction over a 3D plotting backend: axis limits, polyline draws that
//! return restylable handles, markers, and text. [`Scene3`] is the built-in
//! in-memory implementation used by demos and tests; real backends adapt
//! their own axes object to [`Surface3`].

pub mod colormap;
pub mod scene;
pub mod traits;

pub use colormap::ColorMap;
pub use scene::{Label3, Line3, PointMark, Scene3};
pub use traits::{
    Color, FontWeight, LineId, LineStyle, MarkerGlyph, MarkerStyle, Surface3, TextStyle,
};
