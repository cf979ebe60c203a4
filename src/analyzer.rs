// src/analyzer.rs

use crate::geometry::Polygon;

/// Longest edge of a polygon and how much longer it is than the shortest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRatio {
    /// Index of the longest edge, i.e. the vertex it starts at.
    pub longest_edge: usize,
    /// Longest edge length divided by shortest edge length.
    pub ratio: f64,
}

pub struct EdgeAnalyzer;

impl EdgeAnalyzer {
    /// Length of every edge; edge `i` runs from vertex `i` to vertex `i + 1`,
    /// wrapping at the end.
    pub fn edge_lengths(polygon: &Polygon) -> Vec<f64> {
        let vertices = polygon.vertices();
        let count = vertices.len();
        (0..count)
            .map(|i| vertices[i].distance(&vertices[(i + 1) % count]))
            .collect()
    }

    /// Callers must pass a polygon with at least two vertices. A zero-length
    /// edge yields an infinite ratio.
    pub fn analyze(polygon: &Polygon) -> EdgeRatio {
        let mut edges: Vec<(usize, f64)> = Self::edge_lengths(polygon)
            .into_iter()
            .enumerate()
            .collect();
        edges.sort_by(|a, b| a.1.total_cmp(&b.1));

        let (longest_edge, longest) = edges[edges.len() - 1];
        let (_, shortest) = edges[0];

        EdgeRatio {
            longest_edge,
            ratio: longest / shortest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2;
    use approx::assert_relative_eq;

    #[test]
    fn wide_rectangle() {
        let rect = Polygon::rectangle(0.0, 0.0, 4.0, 1.0);
        let result = EdgeAnalyzer::analyze(&rect);
        assert!(result.longest_edge == 0 || result.longest_edge == 2);
        assert_relative_eq!(result.ratio, 4.0);
    }

    #[test]
    fn tall_rectangle_reports_side_edge() {
        let rect = Polygon::rectangle(0.0, 0.0, 1.0, 5.0);
        let result = EdgeAnalyzer::analyze(&rect);
        assert!(result.longest_edge == 1 || result.longest_edge == 3);
        assert_relative_eq!(result.ratio, 5.0);
    }

    #[test]
    fn square_ratio_is_one() {
        let square = Polygon::rectangle(0.0, 0.0, 99.0, 99.0);
        assert_relative_eq!(EdgeAnalyzer::analyze(&square).ratio, 1.0);
    }

    #[test]
    fn right_triangle_hypotenuse() {
        let tri = Polygon::triangle(
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(0.0, 4.0),
        );
        let lengths = EdgeAnalyzer::edge_lengths(&tri);
        assert_eq!(lengths, vec![3.0, 5.0, 4.0]);

        let result = EdgeAnalyzer::analyze(&tri);
        assert_eq!(result.longest_edge, 1);
        assert_relative_eq!(result.ratio, 5.0 / 3.0);
    }

    #[test]
    fn zero_length_edge_is_infinite() {
        let tri = Polygon::triangle(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
        );
        assert!(EdgeAnalyzer::analyze(&tri).ratio.is_infinite());
    }
}
