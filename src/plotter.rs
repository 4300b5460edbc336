// src/plotter.rs
//! # Morphology plotter
//!
//! Shape-plotting of a morphology model onto a [`Surface3`]:
//!
//! - [`shapeplot`] - one line per segment across a set of sections, with an
//!   optional variable-driven restyle pass
//! - [`mark`] - a numbered marker at a fractional position along a section,
//!   placed by arc-length interpolation
//! - [`auto_aspect`] - cube the view volume so 3D rotation preserves
//!   proportions

use log::{debug, trace};

use crate::error::PlotError;
use crate::morphology::{geometry, MorphologyModel, SectionGeometry, SectionId};
use crate::surface::{
    Color, ColorMap, FontWeight, LineId, LineStyle, MarkerStyle, Surface3, TextStyle,
};

/// Half-width, in model units, of the default fixed view cube.
pub const CUBE_HALF_WIDTH: f64 = 160.0;

/// How [`auto_aspect`] sizes the cubed view volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AspectMode {
    /// A fixed half-width around each axis midpoint.
    FixedCube(f64),
    /// The largest current half-extent across the three axes.
    MaxExtent,
}

impl Default for AspectMode {
    fn default() -> Self {
        AspectMode::FixedCube(CUBE_HALF_WIDTH)
    }
}

/// Options for [`shapeplot`].
#[derive(Debug, Clone)]
pub struct ShapePlotOptions {
    /// Variable to sample per segment, optionally dotted as
    /// "mechanism.attribute". `None` skips the restyle pass entirely.
    pub variable: Option<String>,
    /// Base style for every drawn line.
    pub style: LineStyle,
    /// Map applied in the restyle pass when `apply_color_map` is set.
    pub color_map: ColorMap,
    /// When false the restyle pass forces solid black and only carries the
    /// segment diameter into the line width.
    pub apply_color_map: bool,
}

impl Default for ShapePlotOptions {
    fn default() -> Self {
        Self {
            variable: None,
            style: LineStyle::default(),
            color_map: ColorMap::cool(),
            apply_color_map: false,
        }
    }
}

impl ShapePlotOptions {
    /// Options sampling the named variable, everything else at defaults.
    pub fn variable(name: impl Into<String>) -> Self {
        Self {
            variable: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Plot a 3D shape plot of `model` onto `surface`.
///
/// Draws one line per segment, sections outer and segments inner, and
/// returns the line handles in that order. `sections` selects which
/// sections to draw; `None` plots every section registered with the model.
/// The model's shape-define step runs first so 3D geometry exists for every
/// section.
///
/// When `options.variable` is set, each segment is sampled and lines whose
/// segments carry a value are restyled afterwards: width becomes the
/// segment diameter, color comes from the color map when
/// `options.apply_color_map` is set and is forced to black otherwise.
/// Segments without the variable keep the base style; if no segment carries
/// it, or every value is equal, the restyle pass is skipped.
///
/// ```
/// use cgmath::Point3;
/// use dendrite::morphology::CableModel;
/// use dendrite::{shapeplot, Scene3, ShapePlotOptions};
///
/// let mut model = CableModel::new();
/// model.add_section_3d(
///     "soma",
///     &[Point3::new(0.0, 0.0, 0.0), Point3::new(20.0, 0.0, 0.0)],
///     12.0,
///     1,
/// );
/// let mut scene = Scene3::new();
/// let lines = shapeplot(&mut model, &mut scene, None, &ShapePlotOptions::default()).unwrap();
/// assert_eq!(lines.len(), 1);
/// ```
pub fn shapeplot(
    model: &mut dyn MorphologyModel,
    surface: &mut dyn Surface3,
    sections: Option<&[SectionId]>,
    options: &ShapePlotOptions,
) -> Result<Vec<LineId>, PlotError> {
    // Geometry must exist before any read.
    model.define_shape();

    let secs: Vec<&dyn SectionGeometry> = match sections {
        Some(ids) => ids
            .iter()
            .map(|&id| {
                model
                    .section(id)
                    .ok_or_else(|| PlotError::Model(format!("unknown section {:?}", id)))
            })
            .collect::<Result<_, _>>()?,
        None => model.sections(),
    };

    let mut lines = Vec::new();
    let mut vals = Vec::new();
    let mut diams = Vec::new();

    for sec in &secs {
        let per_seg = geometry::segment_3d_pts(*sec);
        for (seg, pts) in sec.segments().iter().zip(&per_seg) {
            let coords: Vec<_> = pts.iter().map(|p| p.pos).collect();
            let line = surface.plot_line(&coords, &options.style)?;
            if let Some(ref variable) = options.variable {
                vals.push(seg.lookup(variable));
            }
            diams.push(seg.diam());
            lines.push(line);
        }
    }
    debug!(
        "shapeplot drew {} segment lines over {} sections",
        lines.len(),
        secs.len()
    );

    if options.variable.is_some() {
        restyle_by_value(surface, &lines, &vals, &diams, options)?;
    }
    Ok(lines)
}

/// Restyle pass over the lines recorded by [`shapeplot`].
///
/// `lines`, `vals`, and `diams` are parallel, one entry per drawn segment.
fn restyle_by_value(
    surface: &mut dyn Surface3,
    lines: &[LineId],
    vals: &[Option<f64>],
    diams: &[f64],
    options: &ShapePlotOptions,
) -> Result<(), PlotError> {
    let mut val_min = f64::INFINITY;
    let mut val_max = f64::NEG_INFINITY;
    let mut have_values = false;
    for v in vals.iter().flatten() {
        have_values = true;
        val_min = val_min.min(*v);
        val_max = val_max.max(*v);
    }
    if !have_values {
        trace!("shapeplot: no segment exposed the requested variable");
        return Ok(());
    }
    let range = val_max - val_min;
    if range == 0.0 {
        trace!("shapeplot: zero value range, keeping default line style");
        return Ok(());
    }

    for ((line, val), diam) in lines.iter().zip(vals).zip(diams) {
        if let Some(v) = val {
            let color = if options.apply_color_map {
                options.color_map.sample((v - val_min) / range)
            } else {
                Color::BLACK
            };
            surface.set_line_color(*line, color)?;
            surface.set_line_width(*line, *diam)?;
        }
    }
    Ok(())
}

/// Place a numbered marker on a segment.
///
/// The segment is identified by its owning section and the fractional
/// position `x` in [0, 1]. The 3D coordinate is interpolated at arc length
/// `section length * x` against the section's recorded point list, then a
/// marker in `style` and a bold red text label with `number` are drawn
/// there.
///
/// The model's shape-define step must have run for the section; otherwise
/// this fails with [`PlotError::DegenerateSection`].
pub fn mark(
    model: &dyn MorphologyModel,
    surface: &mut dyn Surface3,
    section: SectionId,
    x: f64,
    style: &MarkerStyle,
    number: u32,
) -> Result<(), PlotError> {
    let sec = model
        .section(section)
        .ok_or_else(|| PlotError::Model(format!("unknown section {:?}", section)))?;
    let pts = sec.points3d();
    if pts.len() < 2 {
        return Err(PlotError::DegenerateSection(section));
    }

    let target = sec.length() * x;
    let at = geometry::point_at_arc(pts, target);
    debug!(
        "mark {} on {}({}) at ({:.2}, {:.2}, {:.2})",
        number,
        sec.name(),
        x,
        at.x,
        at.y,
        at.z
    );

    surface.plot_marker(at, style)?;
    surface.plot_text(
        at,
        &number.to_string(),
        &TextStyle {
            color: Color::RED,
            weight: FontWeight::Bold,
        },
    )?;
    Ok(())
}

/// Set the x, y, and z ranges symmetric around their centers.
///
/// Cubes the view volume so 3D rotation preserves lengths. Probably needs a
/// square figure on the backend side for the effect to hold exactly.
pub fn auto_aspect(surface: &mut dyn Surface3, mode: AspectMode) {
    let bounds = [surface.xlim(), surface.ylim(), surface.zlim()];
    let half = match mode {
        AspectMode::FixedCube(half) => half,
        AspectMode::MaxExtent => bounds
            .iter()
            .map(|(lo, hi)| (hi - lo) / 2.0)
            .fold(0.0, f64::max),
    };
    let [xmid, ymid, zmid] = bounds.map(|(lo, hi)| (lo + hi) / 2.0);
    surface.set_xlim(xmid - half, xmid + half);
    surface.set_ylim(ymid - half, ymid + half);
    surface.set_zlim(zmid - half, zmid + half);
}
