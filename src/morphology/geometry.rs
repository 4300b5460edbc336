//! Arc-length geometry helpers
//!
//! Pure functions over a section's recorded polyline: clamped linear
//! interpolation and decomposition into per-segment point lists.

use cgmath::Point3;

use super::{Pt3d, SectionGeometry};

/// Piecewise-linear interpolation of `x` against knots `xs` with values `ys`.
///
/// `xs` is assumed non-decreasing and the same length as `ys`. Values of `x`
/// outside the recorded range clamp to the nearest endpoint value. An empty
/// knot list yields NaN.
pub fn interp(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.is_empty() {
        return f64::NAN;
    }
    if x <= xs[0] {
        return ys[0];
    }
    let last = xs.len() - 1;
    if x >= xs[last] {
        return ys[last];
    }
    for i in 1..xs.len() {
        if x <= xs[i] {
            let (x0, x1) = (xs[i - 1], xs[i]);
            if x1 == x0 {
                return ys[i];
            }
            let t = (x - x0) / (x1 - x0);
            return ys[i - 1] + t * (ys[i] - ys[i - 1]);
        }
    }
    ys[last]
}

/// Interpolate the 3D coordinate at arc length `arc` along a polyline.
///
/// Each coordinate axis is interpolated independently against the recorded
/// arc-length positions, so the result lies on the polyline for in-range
/// arcs and clamps to the nearest endpoint otherwise.
pub fn point_at_arc(pts: &[Pt3d], arc: f64) -> Point3<f64> {
    let arcs: Vec<f64> = pts.iter().map(|p| p.arc).collect();
    let xs: Vec<f64> = pts.iter().map(|p| p.pos.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.pos.y).collect();
    let zs: Vec<f64> = pts.iter().map(|p| p.pos.z).collect();
    Point3::new(
        interp(arc, &arcs, &xs),
        interp(arc, &arcs, &ys),
        interp(arc, &arcs, &zs),
    )
}

/// Partition a section's polyline into one point list per segment.
///
/// Segment boundaries sit at exact fractional arc lengths `i / nseg` of the
/// section length; boundary points are interpolated so adjacent segments
/// share their boundary coordinate, and recorded points strictly inside a
/// segment are kept between the two boundaries.
///
/// Sections with fewer than two recorded points come back as `nseg` copies
/// of whatever exists; run the model's shape-define step first to avoid
/// degenerate output.
pub fn segment_3d_pts(sec: &dyn SectionGeometry) -> Vec<Vec<Pt3d>> {
    let pts = sec.points3d();
    let nseg = sec.nseg().max(1);
    if pts.len() < 2 {
        return vec![pts.to_vec(); nseg];
    }

    let total = sec.length();
    let mut out = Vec::with_capacity(nseg);
    for i in 0..nseg {
        let lo = total * i as f64 / nseg as f64;
        let hi = total * (i + 1) as f64 / nseg as f64;
        let mut seg = Vec::new();
        seg.push(Pt3d {
            pos: point_at_arc(pts, lo),
            arc: lo,
        });
        for p in pts.iter().filter(|p| p.arc > lo && p.arc < hi) {
            seg.push(*p);
        }
        seg.push(Pt3d {
            pos: point_at_arc(pts, hi),
            arc: hi,
        });
        out.push(seg);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::cable::CableModel;
    use crate::morphology::traits::MorphologyModel;
    use cgmath::Point3;

    #[test]
    fn test_interp_exact_at_knots() {
        let xs = [0.0, 10.0, 20.0];
        let ys = [1.0, -3.0, 5.0];
        assert_eq!(interp(0.0, &xs, &ys), 1.0);
        assert_eq!(interp(10.0, &xs, &ys), -3.0);
        assert_eq!(interp(20.0, &xs, &ys), 5.0);
    }

    #[test]
    fn test_interp_midpoints_and_clamping() {
        let xs = [0.0, 10.0];
        let ys = [0.0, 4.0];
        assert_eq!(interp(5.0, &xs, &ys), 2.0);
        assert_eq!(interp(-100.0, &xs, &ys), 0.0);
        assert_eq!(interp(100.0, &xs, &ys), 4.0);
    }

    #[test]
    fn test_point_at_arc_follows_polyline() {
        let pts = vec![
            Pt3d::new(0.0, 0.0, 0.0, 0.0),
            Pt3d::new(10.0, 0.0, 0.0, 10.0),
            Pt3d::new(10.0, 10.0, 0.0, 20.0),
        ];
        assert_eq!(point_at_arc(&pts, 0.0), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(point_at_arc(&pts, 15.0), Point3::new(10.0, 5.0, 0.0));
        assert_eq!(point_at_arc(&pts, 20.0), Point3::new(10.0, 10.0, 0.0));
    }

    #[test]
    fn test_segment_pts_share_boundaries() {
        let mut model = CableModel::new();
        let id = model.add_section_3d(
            "dend",
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(10.0, 0.0, 0.0),
                Point3::new(20.0, 0.0, 0.0),
            ],
            1.0,
            4,
        );
        let sec = model.section(id).unwrap();
        let per_seg = segment_3d_pts(sec);
        assert_eq!(per_seg.len(), 4);
        for pair in per_seg.windows(2) {
            assert_eq!(pair[0].last().unwrap().pos, pair[1][0].pos);
            assert_eq!(pair[0].last().unwrap().arc, pair[1][0].arc);
        }
        // Boundaries land at exact fractional arc lengths.
        assert_eq!(per_seg[0][0].arc, 0.0);
        assert_eq!(per_seg[1][0].arc, 5.0);
        assert_eq!(per_seg[3].last().unwrap().arc, 20.0);
    }

    #[test]
    fn test_segment_pts_keep_interior_points() {
        let mut model = CableModel::new();
        let id = model.add_section_3d(
            "dend",
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(10.0, 0.0, 0.0),
                Point3::new(20.0, 0.0, 0.0),
            ],
            1.0,
            3,
        );
        let sec = model.section(id).unwrap();
        let per_seg = segment_3d_pts(sec);
        // The recorded point at arc 10 falls strictly inside segment 1
        // (boundaries at 20/3 and 40/3) and must be preserved there.
        assert!(per_seg[1].iter().any(|p| p.arc == 10.0));
        assert_eq!(per_seg[1].len(), 3);
    }

    #[test]
    fn test_segment_pts_single_segment_covers_section() {
        let mut model = CableModel::new();
        let id = model.add_section_3d(
            "soma",
            &[Point3::new(0.0, 0.0, 0.0), Point3::new(20.0, 0.0, 0.0)],
            12.0,
            1,
        );
        let sec = model.section(id).unwrap();
        let per_seg = segment_3d_pts(sec);
        assert_eq!(per_seg.len(), 1);
        assert_eq!(per_seg[0][0].pos, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(per_seg[0].last().unwrap().pos, Point3::new(20.0, 0.0, 0.0));
    }
}
