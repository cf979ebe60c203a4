// src/subdivision.rs

use log::trace;

use crate::analyzer::{EdgeAnalyzer, EdgeRatio};
use crate::error::{MosaicError, MosaicResult};
use crate::geometry::{Generation, Point2, Polygon, MAX_VERTICES, MIN_VERTICES};
use crate::params::MosaicParams;
use crate::random::RandomSource;

/// Per-pass tally of the branch each polygon took.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    pub retired: usize,
    pub triangulated: usize,
    pub sliced: usize,
    pub chamfered: usize,
}

/// Output of one subdivision pass.
#[derive(Clone, Debug, Default)]
pub struct Subdivision {
    /// The next generation's polygons.
    pub next: Generation,
    /// Polygons that left the tiling this pass. They are drawn as-is and have
    /// no descendants.
    pub retired: Vec<Polygon>,
    pub stats: PassStats,
}

pub struct SubdivisionEngine {
    params: MosaicParams,
}

impl SubdivisionEngine {
    pub fn new(params: MosaicParams) -> Self {
        Self {
            params: params.sanitized(),
        }
    }

    pub fn params(&self) -> &MosaicParams {
        &self.params
    }

    /// Runs one pass over `generation`. Every polygon draws its own random
    /// decisions from `rng`, in generation order.
    pub fn subdivide(
        &self,
        generation: &Generation,
        depth: u32,
        rng: &mut dyn RandomSource,
    ) -> MosaicResult<Subdivision> {
        let mut result = Subdivision {
            next: Generation::default(),
            retired: Vec::new(),
            stats: PassStats::default(),
        };
        let mut children = Vec::with_capacity(generation.len() * 2);

        for polygon in generation.iter() {
            let count = polygon.count();
            if !(MIN_VERTICES..=MAX_VERTICES).contains(&count) {
                return Err(MosaicError::StructuralViolation {
                    vertex_count: count,
                });
            }

            if depth > self.params.min_cancel_level && rng.chance(self.params.cancel_probability) {
                result.retired.push(polygon.clone());
                result.stats.retired += 1;
                continue;
            }

            let edges = EdgeAnalyzer::analyze(polygon);
            trace!(
                "depth {depth}: {count}-gon longest edge {} ratio {:.3}",
                edges.longest_edge,
                edges.ratio
            );

            if polygon.is_quad() {
                if edges.ratio < self.params.tri_limit && rng.chance(self.params.tri_probability) {
                    let (first, second) = Self::triangulate(polygon, rng.chance(0.5));
                    children.push(first);
                    children.push(second);
                    result.stats.triangulated += 1;
                } else {
                    children.extend(self.slice_strips(polygon, edges, rng));
                    result.stats.sliced += 1;
                }
            } else {
                children.push(Self::chamfer(polygon, rng.pick(3)));
                result.stats.chamfered += 1;
            }
        }

        result.next = Generation::new(children);
        Ok(result)
    }

    /// Splits a quad into two triangles. `across_v1_v3` cuts along the
    /// v1–v3 diagonal, otherwise along v0–v2.
    pub fn triangulate(quad: &Polygon, across_v1_v3: bool) -> (Polygon, Polygon) {
        let v = quad.vertices();
        if across_v1_v3 {
            (
                Polygon::triangle(v[0], v[1], v[3]),
                Polygon::triangle(v[1], v[2], v[3]),
            )
        } else {
            (
                Polygon::triangle(v[0], v[1], v[2]),
                Polygon::triangle(v[0], v[2], v[3]),
            )
        }
    }

    /// Number of strips for a quad with the given edge ratio.
    pub fn slice_count(ratio: f64, rng: &mut dyn RandomSource) -> usize {
        let span = (ratio - 2.0).ceil();
        let extra = (rng.next_unit() * span).floor();
        if extra.is_finite() && extra > 0.0 {
            2 + extra as usize
        } else {
            2
        }
    }

    /// `count` strip widths summing to 1. Each raw width is drawn from
    /// `[min_fraction, 1)` before normalization.
    pub fn slice_fractions(count: usize, min_fraction: f64, rng: &mut dyn RandomSource) -> Vec<f64> {
        let mut fractions: Vec<f64> = (0..count)
            .map(|_| min_fraction + rng.next_unit() * (1.0 - min_fraction))
            .collect();
        let sum: f64 = fractions.iter().sum();
        if sum > 0.0 {
            let scale = 1.0 / sum;
            for fraction in &mut fractions {
                *fraction *= scale;
            }
        } else if count > 0 {
            fractions.fill(1.0 / count as f64);
        }
        fractions
    }

    /// Cuts a quad into parallel strips across its longest edge.
    fn slice_strips(
        &self,
        quad: &Polygon,
        edges: EdgeRatio,
        rng: &mut dyn RandomSource,
    ) -> Vec<Polygon> {
        let quad = quad.rotated(edges.longest_edge);
        let count = Self::slice_count(edges.ratio, rng);
        let fractions = Self::slice_fractions(count, self.params.min_slice_fraction, rng);
        Self::strips_from_fractions(&quad, &fractions)
    }

    /// Walks the top edge v0→v1 and the bottom edge v3→v2 together. Each
    /// strip is `[top_start, top_end, bottom_end, bottom_start]`.
    pub fn strips_from_fractions(quad: &Polygon, fractions: &[f64]) -> Vec<Polygon> {
        let v = quad.vertices();
        let (top_start, top_end) = (v[0], v[1]);
        let (bottom_start, bottom_end) = (v[3], v[2]);

        let cut = |t: f64| -> (Point2, Point2) {
            (top_start.lerp(&top_end, t), bottom_start.lerp(&bottom_end, t))
        };

        let mut strips = Vec::with_capacity(fractions.len());
        let mut sum = 0.0;
        for (i, fraction) in fractions.iter().enumerate() {
            let (top0, bottom0) = cut(sum);
            sum += fraction;
            // last boundary lands exactly on v1/v2
            let t1 = if i + 1 == fractions.len() { 1.0 } else { sum };
            let (top1, bottom1) = cut(t1);
            strips.push(Polygon::quad(top0, top1, bottom1, bottom0));
        }
        strips
    }

    /// Replaces corner `corner` (0, 1 or 2) of a triangle with a cut through
    /// the midpoints of its two adjacent edges. The cut-off corner, a quarter
    /// of the triangle's area, is left uncovered.
    pub fn chamfer(triangle: &Polygon, corner: usize) -> Polygon {
        let v = triangle.vertices();
        let m01 = v[0].midpoint(&v[1]);
        let m12 = v[1].midpoint(&v[2]);
        let m02 = v[0].midpoint(&v[2]);

        match corner {
            0 => Polygon::quad(m01, v[1], v[2], m02),
            1 => Polygon::quad(v[0], m01, m12, v[2]),
            _ => Polygon::quad(v[0], v[1], m12, m02),
        }
    }
}
