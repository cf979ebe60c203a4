// benches/subdivision_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stained_glass::{
    Canvas, DrawList, EdgeAnalyzer, Generation, MosaicGenerator, MosaicParams, RandomPalette,
    SeededRandom, SubdivisionEngine,
};

const CANVAS: Canvas = Canvas { width: 1920, height: 1080 };

fn subdivision_benchmark_fn(c: &mut Criterion) {
    let mut group = c.benchmark_group("SubdivisionOperations");

    group.bench_function("analyze_canvas_rectangle", |b| {
        let generation = Generation::canvas(CANVAS.width, CANVAS.height);
        b.iter(|| EdgeAnalyzer::analyze(black_box(&generation[0])))
    });

    group.bench_function("single_pass_from_depth_5", |b| {
        let engine = SubdivisionEngine::new(MosaicParams::default());
        let mut rng = SeededRandom::new(5);
        let mut generation = Generation::canvas(CANVAS.width, CANVAS.height);
        for depth in 0..5 {
            generation = engine.subdivide(&generation, depth, &mut rng).unwrap().next;
        }

        b.iter(|| engine.subdivide(black_box(&generation), 5, &mut rng).unwrap())
    });

    group.bench_function("full_run_10_passes", |b| {
        let generator = MosaicGenerator::new(MosaicParams::default(), RandomPalette::default());
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut rng = SeededRandom::new(seed);
            generator.run(black_box(CANVAS), &mut rng).unwrap()
        })
    });

    group.bench_function("full_paint_cycle_into_draw_list", |b| {
        let mut generator = MosaicGenerator::new(MosaicParams::default(), RandomPalette::default());
        let mut list = DrawList::new();
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut rng = SeededRandom::new(seed);
            generator.paint(black_box(CANVAS), &mut rng, &mut list).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, subdivision_benchmark_fn);
criterion_main!(benches);
