//! Shape-plot demo: a ball-and-stick cell with a distance-graded membrane
//! voltage, plotted onto the in-memory scene.
//!
//! Run with `RUST_LOG=debug cargo run --example shapeplot` to see the plot
//! boundaries logged.

use anyhow::Result;
use cgmath::Point3;
use rand::Rng;

use dendrite::morphology::CableModel;
use dendrite::{
    auto_aspect, mark, shapeplot, AspectMode, MarkerStyle, Scene3, SegmentState, ShapePlotOptions,
    Surface3,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut model = CableModel::new();
    let mut rng = rand::rng();

    let soma = model.add_section_3d(
        "soma",
        &[Point3::new(0.0, 0.0, 0.0), Point3::new(20.0, 0.0, 0.0)],
        12.0,
        1,
    );

    // A slightly tortuous apical dendrite climbing in +y.
    let mut apic_pts = vec![Point3::new(20.0, 0.0, 0.0)];
    for i in 1..=10 {
        apic_pts.push(Point3::new(
            20.0 + rng.random_range(-4.0..4.0),
            25.0 * i as f64,
            rng.random_range(-4.0..4.0),
        ));
    }
    let apic = model.add_section_3d("apic", &apic_pts, 2.0, 10);

    // The axon gets geometry from the shape-define step inside shapeplot.
    let axon = model.add_section("axon", 300.0, 1.0, 20);

    // Distance-graded membrane voltage, plus a potassium conductance on
    // the soma so dotted lookups have something to resolve.
    for (id, base) in [(soma, -65.0), (apic, -60.0), (axon, -70.0)] {
        let sec = model.section_mut(id).expect("section just created");
        for seg in sec.segments_mut() {
            let x = seg.x();
            seg.set_var("v", base + 10.0 * x);
        }
    }
    for seg in model.section_mut(soma).unwrap().segments_mut() {
        seg.set_mech_var("hh", "gkbar", 0.036);
    }

    let mut scene = Scene3::new();
    let lines = shapeplot(
        &mut model,
        &mut scene,
        None,
        &ShapePlotOptions {
            apply_color_map: true,
            ..ShapePlotOptions::variable("v")
        },
    )?;

    mark(&model, &mut scene, soma, 0.5, &MarkerStyle::default(), 1)?;
    mark(&model, &mut scene, apic, 1.0, &MarkerStyle::default(), 2)?;
    mark(&model, &mut scene, axon, 0.1, &MarkerStyle::default(), 3)?;

    scene.fit_limits();
    auto_aspect(&mut scene, AspectMode::default());

    println!(
        "shapeplot: {} segment lines, {} markers",
        lines.len(),
        scene.markers().len()
    );
    println!(
        "view volume: x {:?}  y {:?}  z {:?}",
        scene.xlim(),
        scene.ylim(),
        scene.zlim()
    );
    Ok(())
}
