// src/mosaic.rs

use std::sync::Arc;

use log::{debug, info, warn};

use crate::error::MosaicResult;
use crate::geometry::{Generation, Polygon};
use crate::painter::MosaicPainter;
use crate::palette::{Palette, PaletteProvider, BLACK};
use crate::params::MosaicParams;
use crate::random::RandomSource;
use crate::subdivision::{PassStats, SubdivisionEngine};

/// Pixel size of the drawing surface, read once per paint cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Canvases thinner than two pixels collapse the starting rectangle.
    pub fn is_degenerate(&self) -> bool {
        self.width < 2 || self.height < 2
    }
}

/// Every generation-level result of one run, without any drawing.
#[derive(Clone, Debug)]
pub struct MosaicRun {
    pub base_depth: u32,
    /// Generation captured before pass `base_depth`, if that pass ran.
    pub outline: Option<Arc<Generation>>,
    pub final_generation: Arc<Generation>,
    pub retired: Vec<Polygon>,
    pub pass_stats: Vec<PassStats>,
}

/// What a paint cycle drew.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MosaicSummary {
    pub base_depth: u32,
    pub passes: u32,
    pub final_polygons: usize,
    pub retired_polygons: usize,
    pub outline_polygons: usize,
    pub pass_stats: Vec<PassStats>,
}

/// Drives the subdivision engine from the canvas rectangle to the final
/// mosaic and paints the result.
pub struct MosaicGenerator<P: PaletteProvider> {
    engine: SubdivisionEngine,
    palette_provider: P,
}

impl<P: PaletteProvider> MosaicGenerator<P> {
    pub fn new(params: MosaicParams, palette_provider: P) -> Self {
        Self {
            engine: SubdivisionEngine::new(params),
            palette_provider,
        }
    }

    pub fn params(&self) -> &MosaicParams {
        self.engine.params()
    }

    /// Pass index before which the outline generation is captured.
    pub fn choose_base_depth(&self, rng: &mut dyn RandomSource) -> u32 {
        let params = self.engine.params();
        params.min_base_depth + rng.pick(params.base_depth_span as usize) as u32
    }

    /// Runs every pass and returns the generations without drawing anything.
    pub fn run(&self, canvas: Canvas, rng: &mut dyn RandomSource) -> MosaicResult<MosaicRun> {
        let base_depth = self.choose_base_depth(rng);
        self.descend(canvas, base_depth, rng, &mut |_: &Polygon, _: &mut dyn RandomSource| {})
    }

    /// One full paint cycle: palette, background, subdivision, fills and the
    /// outline layer. A structural violation aborts the cycle part-way; the
    /// painter then holds an incomplete image.
    pub fn paint(
        &mut self,
        canvas: Canvas,
        rng: &mut dyn RandomSource,
        painter: &mut dyn MosaicPainter,
    ) -> MosaicResult<MosaicSummary> {
        let palette = self.palette_provider.generate_palette(rng);
        painter.clear(BLACK);

        if canvas.is_degenerate() {
            warn!(
                "canvas {}x{} is too small to subdivide",
                canvas.width, canvas.height
            );
            return Ok(MosaicSummary::default());
        }

        let base_depth = self.choose_base_depth(rng);
        let edge_width = self.engine.params().edge_width;

        let run = self.descend(
            canvas,
            base_depth,
            rng,
            &mut |polygon: &Polygon, rng: &mut dyn RandomSource| {
                fill_polygon(painter, polygon, &palette, edge_width, rng);
            },
        )?;

        for polygon in run.final_generation.iter() {
            fill_polygon(painter, polygon, &palette, edge_width, rng);
        }

        let outline_color = palette.pick(rng);
        let outline_width = self.engine.params().outline_width;
        let outline_polygons = match &run.outline {
            Some(outline) => {
                for polygon in outline.iter() {
                    painter.stroke_polygon(polygon.vertices(), outline_color, outline_width);
                }
                outline.len()
            }
            None => 0,
        };

        let summary = MosaicSummary {
            base_depth,
            passes: run.pass_stats.len() as u32,
            final_polygons: run.final_generation.len(),
            retired_polygons: run.retired.len(),
            outline_polygons,
            pass_stats: run.pass_stats,
        };
        info!(
            "painted {}x{} mosaic: {} polygons, {} retired early, outline of {} from pass {}",
            canvas.width,
            canvas.height,
            summary.final_polygons,
            summary.retired_polygons,
            summary.outline_polygons,
            base_depth
        );
        Ok(summary)
    }

    fn descend(
        &self,
        canvas: Canvas,
        base_depth: u32,
        rng: &mut dyn RandomSource,
        on_retired: &mut dyn FnMut(&Polygon, &mut dyn RandomSource),
    ) -> MosaicResult<MosaicRun> {
        let max_depth = self.engine.params().max_depth;
        let mut current = Arc::new(Generation::canvas(canvas.width, canvas.height));
        let mut outline = None;
        let mut retired = Vec::new();
        let mut pass_stats = Vec::with_capacity(max_depth as usize);

        for depth in 0..max_depth {
            if depth == base_depth {
                outline = Some(Arc::clone(&current));
            }

            let pass = self.engine.subdivide(&current, depth, rng)?;
            debug!(
                "pass {depth}: {} -> {} polygons ({:?})",
                current.len(),
                pass.next.len(),
                pass.stats
            );
            for polygon in &pass.retired {
                on_retired(polygon, rng);
            }

            retired.extend(pass.retired);
            pass_stats.push(pass.stats);
            current = Arc::new(pass.next);
        }

        Ok(MosaicRun {
            base_depth,
            outline,
            final_generation: current,
            retired,
            pass_stats,
        })
    }
}

fn fill_polygon(
    painter: &mut dyn MosaicPainter,
    polygon: &Polygon,
    palette: &Palette,
    edge_width: f64,
    rng: &mut dyn RandomSource,
) {
    painter.fill_polygon(polygon.vertices(), palette.pick(rng));
    painter.stroke_polygon(polygon.vertices(), BLACK, edge_width);
}
