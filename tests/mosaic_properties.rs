// tests/mosaic_properties.rs
//
// Whole-run properties of the subdivision engine and the paint driver.

use approx::assert_relative_eq;

use stained_glass::palette::FixedPalette;
use stained_glass::{
    Canvas, Color, DrawCommand, DrawList, EdgeAnalyzer, Generation, MosaicError, MosaicGenerator,
    MosaicParams, Palette, Point2, Polygon, SeededRandom, SequenceRandom, SubdivisionEngine,
};

fn two_tone() -> FixedPalette {
    FixedPalette::new(Palette::new(vec![Color::rgb(0.9, 0.2, 0.1), Color::rgb(0.1, 0.3, 0.8)]).unwrap())
}

#[test]
fn analyze_wide_rectangle() {
    let rect = Polygon::from_points(&[
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(4.0, 1.0),
        Point2::new(0.0, 1.0),
    ]);
    let result = EdgeAnalyzer::analyze(&rect);
    assert!(matches!(result.longest_edge, 0 | 2));
    assert_relative_eq!(result.ratio, 4.0);
}

#[test]
fn single_slicing_pass_on_square() {
    let engine = SubdivisionEngine::new(MosaicParams::slicing_only());
    let square = Polygon::from_points(&[
        Point2::new(0.0, 0.0),
        Point2::new(99.0, 0.0),
        Point2::new(99.0, 99.0),
        Point2::new(0.0, 99.0),
    ]);
    let ratio = EdgeAnalyzer::analyze(&square).ratio;
    let upper = 2 + (ratio - 2.0).ceil().max(0.0) as usize;

    for seed in 0..20 {
        let mut rng = SeededRandom::new(seed);
        let pass = engine
            .subdivide(&Generation::new(vec![square.clone()]), 0, &mut rng)
            .unwrap();
        assert!((2..=upper).contains(&pass.next.len()));
        assert!(pass.next.iter().all(Polygon::is_quad));
        assert_relative_eq!(pass.next.total_area(), 9801.0, epsilon = 1e-6);
    }
}

#[test]
fn slicing_only_runs_preserve_area_exactly() {
    let engine = SubdivisionEngine::new(MosaicParams::slicing_only());
    let mut rng = SeededRandom::new(314);
    let mut generation = Generation::canvas(800, 600);
    let area = generation.total_area();

    for depth in 0..10 {
        generation = engine.subdivide(&generation, depth, &mut rng).unwrap().next;
        assert!(generation.iter().all(Polygon::is_quad));
        assert_relative_eq!(generation.total_area(), area, epsilon = 1e-6 * area);
    }
}

#[test]
fn every_generation_has_triangles_or_quads() {
    let generator = MosaicGenerator::new(MosaicParams::default(), two_tone());
    for seed in [1, 2, 3, 42, 1000] {
        let run = generator
            .run(Canvas::new(640, 480), &mut SeededRandom::new(seed))
            .unwrap();
        assert_eq!(run.pass_stats.len(), 10);
        assert!(!run.final_generation.is_empty());
        assert!(run
            .final_generation
            .iter()
            .chain(run.retired.iter())
            .all(|p| matches!(p.count(), 3 | 4)));
        for polygon in run.final_generation.iter() {
            assert!(polygon.vertices().iter().all(|v| v.x.is_finite() && v.y.is_finite()));
            assert!(polygon.area() > 0.0);
        }
    }
}

#[test]
fn every_polygon_cancels_at_depth_five() {
    let params = MosaicParams {
        cancel_probability: 1.0,
        ..MosaicParams::slicing_only()
    };
    let generator = MosaicGenerator::new(params, two_tone());
    let run = generator
        .run(Canvas::new(200, 100), &mut SequenceRandom::constant(0.0))
        .unwrap();
    assert!(run.final_generation.is_empty());
    assert!(!run.retired.is_empty());
}

#[test]
fn outline_shares_the_snapshot_generation() {
    let generator = MosaicGenerator::new(MosaicParams::default(), two_tone());
    let run = generator
        .run(Canvas::new(300, 300), &mut SeededRandom::new(9))
        .unwrap();
    let outline = run.outline.expect("base depth is inside the run");
    assert!((2..=5).contains(&run.base_depth));
    // the outline covers the canvas at a coarser level than the final mosaic
    assert!(outline.len() < run.final_generation.len());
}

#[test]
fn painted_outline_uses_one_colour() {
    let mut generator = MosaicGenerator::new(MosaicParams::default(), two_tone());
    let mut list = DrawList::new();
    let summary = generator
        .paint(Canvas::new(400, 300), &mut SeededRandom::new(12), &mut list)
        .unwrap();

    let outline_colors: Vec<Color> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Stroke { color, line_width, .. } if *line_width == 10.0 => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(outline_colors.len(), summary.outline_polygons);
    assert!(outline_colors.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn malformed_generation_aborts_the_pass() {
    let engine = SubdivisionEngine::new(MosaicParams::default());
    let hexagon = Polygon::from_points(&[
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(3.0, 1.0),
        Point2::new(2.0, 2.0),
        Point2::new(0.0, 2.0),
        Point2::new(-1.0, 1.0),
    ]);
    let result = engine.subdivide(
        &Generation::new(vec![hexagon]),
        0,
        &mut SeededRandom::new(0),
    );
    assert_eq!(
        result.unwrap_err(),
        MosaicError::StructuralViolation { vertex_count: 6 }
    );
}
