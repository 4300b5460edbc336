//! In-memory cable model
//!
//! A concrete [`MorphologyModel`] for demos and tests, playing the role a
//! full simulation engine plays in production: named sections built from 3D
//! points (or from a bare length, with geometry synthesized by
//! [`define_shape`](MorphologyModel::define_shape)), `nseg` subdivision,
//! per-segment diameters, direct variables, and named mechanisms.

use std::collections::HashMap;

use cgmath::{MetricSpace, Point3};

use super::traits::{MorphologyModel, SectionGeometry, SegmentState};
use super::{Pt3d, SectionId};

/// One segment's state: center position, diameter, and named scalars.
#[derive(Debug, Clone, Default)]
pub struct CableSegment {
    x: f64,
    diam: f64,
    vars: HashMap<String, f64>,
    mechs: HashMap<String, HashMap<String, f64>>,
}

impl CableSegment {
    fn new(x: f64, diam: f64) -> Self {
        Self {
            x,
            diam,
            vars: HashMap::new(),
            mechs: HashMap::new(),
        }
    }

    /// Set a variable stored directly on the segment.
    pub fn set_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Set a variable under a named mechanism, inserting the mechanism if
    /// it is not present yet.
    pub fn set_mech_var(&mut self, mech: &str, name: &str, value: f64) {
        self.mechs
            .entry(mech.to_string())
            .or_default()
            .insert(name.to_string(), value);
    }

    /// Set the segment diameter in µm.
    pub fn set_diam(&mut self, diam: f64) {
        self.diam = diam;
    }
}

impl SegmentState for CableSegment {
    fn x(&self) -> f64 {
        self.x
    }

    fn diam(&self) -> f64 {
        self.diam
    }

    fn var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    fn mech_var(&self, mech: &str, name: &str) -> Option<f64> {
        self.mechs.get(mech)?.get(name).copied()
    }
}

/// A named section: polyline geometry plus its segment subdivision.
#[derive(Debug, Clone)]
pub struct CableSection {
    name: String,
    pts: Vec<Pt3d>,
    length: f64,
    segments: Vec<CableSegment>,
}

impl CableSection {
    fn new(name: &str, length: f64, diam: f64, nseg: usize) -> Self {
        let nseg = nseg.max(1);
        // Segment centers at (2i + 1) / (2 nseg), NEURON-style.
        let segments = (0..nseg)
            .map(|i| CableSegment::new((2 * i + 1) as f64 / (2 * nseg) as f64, diam))
            .collect();
        Self {
            name: name.to_string(),
            pts: Vec::new(),
            length,
            segments,
        }
    }

    /// Mutable access to the segments, for loading simulated state.
    pub fn segments_mut(&mut self) -> &mut [CableSegment] {
        &mut self.segments
    }
}

impl SectionGeometry for CableSection {
    fn name(&self) -> &str {
        &self.name
    }

    fn points3d(&self) -> &[Pt3d] {
        &self.pts
    }

    fn length(&self) -> f64 {
        match self.pts.last() {
            Some(last) if self.pts.len() >= 2 => last.arc,
            _ => self.length,
        }
    }

    fn nseg(&self) -> usize {
        self.segments.len()
    }

    fn segments(&self) -> Vec<&dyn SegmentState> {
        self.segments
            .iter()
            .map(|s| s as &dyn SegmentState)
            .collect()
    }
}

/// An in-memory collection of sections.
#[derive(Debug, Clone, Default)]
pub struct CableModel {
    sections: Vec<CableSection>,
}

impl CableModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section with only a prescribed length.
    ///
    /// The section has no 3D points until
    /// [`define_shape`](MorphologyModel::define_shape) synthesizes a
    /// straight polyline of the prescribed length for it.
    pub fn add_section(&mut self, name: &str, length: f64, diam: f64, nseg: usize) -> SectionId {
        self.sections
            .push(CableSection::new(name, length, diam, nseg));
        SectionId(self.sections.len() - 1)
    }

    /// Add a section with explicit 3D points.
    ///
    /// Arc lengths are accumulated from the point-to-point distances; the
    /// section length is the final arc length.
    pub fn add_section_3d(
        &mut self,
        name: &str,
        points: &[Point3<f64>],
        diam: f64,
        nseg: usize,
    ) -> SectionId {
        let pts = arcs_from_points(points);
        let length = pts.last().map(|p| p.arc).unwrap_or(0.0);
        let mut sec = CableSection::new(name, length, diam, nseg);
        sec.pts = pts;
        self.sections.push(sec);
        SectionId(self.sections.len() - 1)
    }

    /// Mutable access to a section, for loading simulated state.
    pub fn section_mut(&mut self, id: SectionId) -> Option<&mut CableSection> {
        self.sections.get_mut(id.0)
    }
}

impl MorphologyModel for CableModel {
    fn define_shape(&mut self) {
        for sec in &mut self.sections {
            if sec.pts.len() < 2 {
                // Straight polyline along +x from the origin.
                sec.pts = vec![
                    Pt3d::new(0.0, 0.0, 0.0, 0.0),
                    Pt3d::new(sec.length, 0.0, 0.0, sec.length),
                ];
            }
        }
    }

    fn sections(&self) -> Vec<&dyn SectionGeometry> {
        self.sections
            .iter()
            .map(|s| s as &dyn SectionGeometry)
            .collect()
    }

    fn section(&self, id: SectionId) -> Option<&dyn SectionGeometry> {
        self.sections.get(id.0).map(|s| s as &dyn SectionGeometry)
    }
}

fn arcs_from_points(points: &[Point3<f64>]) -> Vec<Pt3d> {
    let mut arc = 0.0;
    let mut pts = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            arc += points[i - 1].distance(*p);
        }
        pts.push(Pt3d { pos: *p, arc });
    }
    pts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_lengths_accumulate() {
        let mut model = CableModel::new();
        let id = model.add_section_3d(
            "dend",
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(3.0, 4.0, 0.0),
                Point3::new(3.0, 4.0, 5.0),
            ],
            1.0,
            1,
        );
        let sec = model.section(id).unwrap();
        let arcs: Vec<f64> = sec.points3d().iter().map(|p| p.arc).collect();
        assert_eq!(arcs, vec![0.0, 5.0, 10.0]);
        assert_eq!(sec.length(), 10.0);
    }

    #[test]
    fn test_define_shape_synthesizes_geometry() {
        let mut model = CableModel::new();
        let id = model.add_section("axon", 100.0, 1.0, 10);
        assert!(model.section(id).unwrap().points3d().is_empty());

        model.define_shape();
        let sec = model.section(id).unwrap();
        assert_eq!(sec.points3d().len(), 2);
        assert_eq!(sec.length(), 100.0);

        // Idempotent: a second call leaves existing geometry alone.
        let before = sec.points3d().to_vec();
        model.define_shape();
        assert_eq!(model.section(id).unwrap().points3d(), &before[..]);
    }

    #[test]
    fn test_segment_centers() {
        let mut model = CableModel::new();
        let id = model.add_section("dend", 50.0, 2.0, 4);
        let sec = model.section(id).unwrap();
        let centers: Vec<f64> = sec.segments().iter().map(|s| s.x()).collect();
        assert_eq!(centers, vec![0.125, 0.375, 0.625, 0.875]);
    }

    #[test]
    fn test_dotted_lookup_matches_direct() {
        let mut seg = CableSegment::new(0.5, 1.0);
        seg.set_var("v", -65.0);
        seg.set_mech_var("hh", "gkbar", 0.036);

        assert_eq!(seg.lookup("v"), Some(-65.0));
        assert_eq!(seg.lookup("hh.gkbar"), Some(0.036));
        assert_eq!(seg.mech_var("hh", "gkbar"), seg.lookup("hh.gkbar"));
        assert_eq!(seg.lookup("nav"), None);
        assert_eq!(seg.lookup("hh.missing"), None);
        assert_eq!(seg.lookup("kv.gkbar"), None);
    }
}
