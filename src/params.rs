//! Parameters for mosaic subdivision and painting.

/// Tuning knobs for the subdivision policy and the paint cycle.
///
/// `Default` reproduces the reference look.
#[derive(Debug, Clone, PartialEq)]
pub struct MosaicParams {
    /// Number of subdivision passes. Default: 10
    pub max_depth: u32,

    /// Quads whose edge ratio is below this may be split into triangles.
    /// Default: 3.0
    pub tri_limit: f64,

    /// Probability that an eligible quad is split into triangles. Default: 0.05
    pub tri_probability: f64,

    /// Early termination is only considered at depths strictly above this.
    /// Default: 4
    pub min_cancel_level: u32,

    /// Probability that a polygon retires early. Default: 0.025
    pub cancel_probability: f64,

    /// Lower bound of a raw strip width before normalization. Default: 0.15
    pub min_slice_fraction: f64,

    /// Smallest pass index at which the outline layer is captured. Default: 2
    pub min_base_depth: u32,

    /// Number of candidate outline pass indices above `min_base_depth`.
    /// Default: 4
    pub base_depth_span: u32,

    /// Stroke width of every filled polygon. Default: 1.0
    pub edge_width: f64,

    /// Stroke width of the outline layer. Default: 10.0
    pub outline_width: f64,
}

impl Default for MosaicParams {
    fn default() -> Self {
        Self {
            max_depth: 10,
            tri_limit: 3.0,
            tri_probability: 0.05,
            min_cancel_level: 4,
            cancel_probability: 0.025,
            min_slice_fraction: 0.15,
            min_base_depth: 2,
            base_depth_span: 4,
            edge_width: 1.0,
            outline_width: 10.0,
        }
    }
}

impl MosaicParams {
    /// Params with a different number of passes.
    #[must_use]
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Params where every quad is strip-sliced and nothing retires early.
    #[must_use]
    pub fn slicing_only() -> Self {
        Self {
            tri_probability: 0.0,
            cancel_probability: 0.0,
            ..Default::default()
        }
    }

    /// Clamp probabilities and fractions into their meaningful ranges.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.tri_probability = self.tri_probability.clamp(0.0, 1.0);
        self.cancel_probability = self.cancel_probability.clamp(0.0, 1.0);
        self.min_slice_fraction = self.min_slice_fraction.clamp(0.0, 1.0);
        self.base_depth_span = self.base_depth_span.max(1);
        self.edge_width = self.edge_width.max(0.0);
        self.outline_width = self.outline_width.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference() {
        let params = MosaicParams::default();
        assert_eq!(params.max_depth, 10);
        assert_eq!(params.tri_limit, 3.0);
        assert_eq!(params.min_cancel_level, 4);
        assert_eq!(params.outline_width, 10.0);
    }

    #[test]
    fn test_slicing_only_disables_gates() {
        let params = MosaicParams::slicing_only();
        assert_eq!(params.tri_probability, 0.0);
        assert_eq!(params.cancel_probability, 0.0);
        assert_eq!(params.max_depth, 10);
    }

    #[test]
    fn test_sanitized_clamps() {
        let params = MosaicParams {
            tri_probability: 2.0,
            cancel_probability: -1.0,
            base_depth_span: 0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(params.tri_probability, 1.0);
        assert_eq!(params.cancel_probability, 0.0);
        assert_eq!(params.base_depth_span, 1);
    }
}
