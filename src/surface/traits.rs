//! Core surface traits and style types
//!
//! Defines the interface a 3D plotting backend must implement for the
//! plotter to draw onto it. The plotter only ever talks to a surface
//! through [`Surface3`]; it never owns a line's lifecycle beyond the call
//! that created it.

use cgmath::Point3;

use crate::error::PlotError;

/// Handle to a line created on a surface.
///
/// Valid for the lifetime of the surface that returned it; restyle calls
/// with a stale handle fail with [`PlotError::UnknownLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(pub usize);

/// RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Style applied when a line is first drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Marker glyphs for point annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerGlyph {
    Circle,
    Square,
    Diamond,
    Cross,
}

/// Style of a marker point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub glyph: MarkerGlyph,
    pub color: Color,
    pub size: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        // A red circle, matching the classic shape-plot marker.
        Self {
            glyph: MarkerGlyph::Circle,
            color: Color::RED,
            size: 6.0,
        }
    }
}

/// Font weight for 3D text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Style of a 3D text label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

/// A 3D plotting surface.
///
/// Backends implement this to receive shape-plot output. Axis limits are
/// per-axis `(lo, hi)` pairs; line draws return a [`LineId`] that later
/// restyle calls accept.
pub trait Surface3 {
    fn xlim(&self) -> (f64, f64);
    fn ylim(&self) -> (f64, f64);
    fn zlim(&self) -> (f64, f64);

    fn set_xlim(&mut self, lo: f64, hi: f64);
    fn set_ylim(&mut self, lo: f64, hi: f64);
    fn set_zlim(&mut self, lo: f64, hi: f64);

    /// Draw a 3D polyline, returning a handle for later restyling.
    fn plot_line(&mut self, points: &[Point3<f64>], style: &LineStyle)
        -> Result<LineId, PlotError>;

    /// Change an existing line's color.
    fn set_line_color(&mut self, line: LineId, color: Color) -> Result<(), PlotError>;

    /// Change an existing line's width.
    fn set_line_width(&mut self, line: LineId, width: f64) -> Result<(), PlotError>;

    /// Draw a single marker point.
    fn plot_marker(&mut self, at: Point3<f64>, style: &MarkerStyle) -> Result<(), PlotError>;

    /// Draw text anchored at a 3D coordinate.
    fn plot_text(&mut self, at: Point3<f64>, text: &str, style: &TextStyle)
        -> Result<(), PlotError>;
}
