//! Color maps
//!
//! Normalized-value to color lookup with linear interpolation between
//! evenly spaced stops. The built-in [`cool`](ColorMap::cool) map (cyan to
//! magenta) is the default used by the shape-plot restyle pass.

use super::traits::Color;

/// A color map over the normalized range [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    stops: Vec<Color>,
}

impl ColorMap {
    /// Build a map from evenly spaced stops. At least two are required.
    pub fn new(stops: Vec<Color>) -> Self {
        assert!(stops.len() >= 2, "a color map needs at least two stops");
        Self { stops }
    }

    /// Cyan-to-magenta, the classic "cool" map.
    pub fn cool() -> Self {
        Self::new(vec![Color::CYAN, Color::MAGENTA])
    }

    /// Sample the map at `t`, clamping to [0, 1].
    pub fn sample(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let scaled = t * (self.stops.len() - 1) as f64;
        let i = (scaled.floor() as usize).min(self.stops.len() - 2);
        let frac = (scaled - i as f64) as f32;
        lerp(self.stops[i], self.stops[i + 1], frac)
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::cool()
    }
}

fn lerp(a: Color, b: Color, t: f32) -> Color {
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a + (b.a - a.a) * t,
    }
}
