//! In-memory recording surface
//!
//! [`Scene3`] stores everything drawn onto it as plain data, making it the
//! reference backend for demos and the assertion target for tests.

use cgmath::Point3;

use crate::error::PlotError;

use super::traits::{Color, LineId, LineStyle, MarkerStyle, Surface3, TextStyle};

/// A recorded 3D polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct Line3 {
    pub points: Vec<Point3<f64>>,
    pub color: Color,
    pub width: f64,
}

/// A recorded marker point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMark {
    pub at: Point3<f64>,
    pub style: MarkerStyle,
}

/// A recorded text label.
#[derive(Debug, Clone, PartialEq)]
pub struct Label3 {
    pub at: Point3<f64>,
    pub text: String,
    pub style: TextStyle,
}

/// In-memory scene holding lines, markers, text, and axis limits.
#[derive(Debug, Clone)]
pub struct Scene3 {
    lines: Vec<Line3>,
    markers: Vec<PointMark>,
    texts: Vec<Label3>,
    xlim: (f64, f64),
    ylim: (f64, f64),
    zlim: (f64, f64),
}

impl Scene3 {
    /// Creates an empty scene with unit axis limits on all three axes.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            markers: Vec::new(),
            texts: Vec::new(),
            xlim: (0.0, 1.0),
            ylim: (0.0, 1.0),
            zlim: (0.0, 1.0),
        }
    }

    pub fn lines(&self) -> &[Line3] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&Line3> {
        self.lines.get(id.0)
    }

    pub fn markers(&self) -> &[PointMark] {
        &self.markers
    }

    pub fn texts(&self) -> &[Label3] {
        &self.texts
    }

    /// Set axis limits to the bounding box of everything drawn so far.
    ///
    /// An empty scene keeps its current limits.
    pub fn fit_limits(&mut self) {
        let mut pts = self
            .lines
            .iter()
            .flat_map(|l| l.points.iter().copied())
            .chain(self.markers.iter().map(|m| m.at))
            .chain(self.texts.iter().map(|t| t.at));
        let first = match pts.next() {
            Some(p) => p,
            None => return,
        };
        let mut lo = first;
        let mut hi = first;
        for p in pts {
            lo.x = lo.x.min(p.x);
            lo.y = lo.y.min(p.y);
            lo.z = lo.z.min(p.z);
            hi.x = hi.x.max(p.x);
            hi.y = hi.y.max(p.y);
            hi.z = hi.z.max(p.z);
        }
        self.xlim = (lo.x, hi.x);
        self.ylim = (lo.y, hi.y);
        self.zlim = (lo.z, hi.z);
    }

    fn line_mut(&mut self, id: LineId) -> Result<&mut Line3, PlotError> {
        self.lines.get_mut(id.0).ok_or(PlotError::UnknownLine(id))
    }
}

impl Default for Scene3 {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface3 for Scene3 {
    fn xlim(&self) -> (f64, f64) {
        self.xlim
    }

    fn ylim(&self) -> (f64, f64) {
        self.ylim
    }

    fn zlim(&self) -> (f64, f64) {
        self.zlim
    }

    fn set_xlim(&mut self, lo: f64, hi: f64) {
        self.xlim = (lo, hi);
    }

    fn set_ylim(&mut self, lo: f64, hi: f64) {
        self.ylim = (lo, hi);
    }

    fn set_zlim(&mut self, lo: f64, hi: f64) {
        self.zlim = (lo, hi);
    }

    fn plot_line(
        &mut self,
        points: &[Point3<f64>],
        style: &LineStyle,
    ) -> Result<LineId, PlotError> {
        self.lines.push(Line3 {
            points: points.to_vec(),
            color: style.color,
            width: style.width,
        });
        Ok(LineId(self.lines.len() - 1))
    }

    fn set_line_color(&mut self, line: LineId, color: Color) -> Result<(), PlotError> {
        self.line_mut(line)?.color = color;
        Ok(())
    }

    fn set_line_width(&mut self, line: LineId, width: f64) -> Result<(), PlotError> {
        self.line_mut(line)?.width = width;
        Ok(())
    }

    fn plot_marker(&mut self, at: Point3<f64>, style: &MarkerStyle) -> Result<(), PlotError> {
        self.markers.push(PointMark { at, style: *style });
        Ok(())
    }

    fn plot_text(
        &mut self,
        at: Point3<f64>,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), PlotError> {
        self.texts.push(Label3 {
            at,
            text: text.to_string(),
            style: *style,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restyle_through_handle() {
        let mut scene = Scene3::new();
        let id = scene
            .plot_line(
                &[Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
                &LineStyle::default(),
            )
            .unwrap();

        scene.set_line_color(id, Color::RED).unwrap();
        scene.set_line_width(id, 3.0).unwrap();

        let line = scene.line(id).unwrap();
        assert_eq!(line.color, Color::RED);
        assert_eq!(line.width, 3.0);
    }

    #[test]
    fn test_unknown_handle_is_an_error() {
        let mut scene = Scene3::new();
        let err = scene.set_line_width(LineId(7), 2.0).unwrap_err();
        assert!(matches!(err, PlotError::UnknownLine(LineId(7))));
    }

    #[test]
    fn test_fit_limits_covers_content() {
        let mut scene = Scene3::new();
        scene
            .plot_line(
                &[Point3::new(-5.0, 2.0, 0.0), Point3::new(10.0, -4.0, 8.0)],
                &LineStyle::default(),
            )
            .unwrap();
        scene
            .plot_marker(Point3::new(0.0, 20.0, -1.0), &MarkerStyle::default())
            .unwrap();

        scene.fit_limits();
        assert_eq!(scene.xlim(), (-5.0, 10.0));
        assert_eq!(scene.ylim(), (-4.0, 20.0));
        assert_eq!(scene.zlim(), (-1.0, 8.0));
    }

    #[test]
    fn test_fit_limits_on_empty_scene_keeps_defaults() {
        let mut scene = Scene3::new();
        scene.fit_limits();
        assert_eq!(scene.xlim(), (0.0, 1.0));
    }
}
