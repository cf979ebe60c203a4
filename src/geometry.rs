// src/geometry.rs

use std::ops::Deref;

/// Smallest vertex count the subdivision policy accepts.
pub const MIN_VERTICES: usize = 3;
/// Largest vertex count the subdivision policy accepts.
pub const MAX_VERTICES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point2) -> Point2 {
        Point2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Point at parameter `t` on the segment from `self` to `other`.
    pub fn lerp(&self, other: &Point2, t: f64) -> Point2 {
        Point2::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A closed polygon. The last vertex connects back to the first.
///
/// Construction does not validate the vertex count: the subdivision engine
/// owns that contract and reports violations itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    pub fn from_points(points: &[Point2]) -> Self {
        Self {
            vertices: points.to_vec(),
        }
    }

    pub fn triangle(a: Point2, b: Point2, c: Point2) -> Self {
        Self {
            vertices: vec![a, b, c],
        }
    }

    pub fn quad(a: Point2, b: Point2, c: Point2, d: Point2) -> Self {
        Self {
            vertices: vec![a, b, c, d],
        }
    }

    /// Axis-aligned rectangle wound `(x0,y0) -> (x1,y0) -> (x1,y1) -> (x0,y1)`.
    pub fn rectangle(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::quad(
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        )
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_triangle(&self) -> bool {
        self.count() == 3
    }

    pub fn is_quad(&self) -> bool {
        self.count() == 4
    }

    /// Copy of this polygon with vertex `start` moved to the front.
    /// Winding order is preserved.
    pub fn rotated(&self, start: usize) -> Polygon {
        let mut vertices = self.vertices.clone();
        if !vertices.is_empty() {
            vertices.rotate_left(start % self.count());
        }
        Polygon { vertices }
    }

    /// Shoelace area; positive for counter-clockwise winding in a y-up frame.
    pub fn signed_area(&self) -> f64 {
        if self.count() < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..self.count() {
            let j = (i + 1) % self.count();
            area += self.vertices[i].x * self.vertices[j].y;
            area -= self.vertices[j].x * self.vertices[i].y;
        }
        area / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}

/// The tiling state after some number of subdivision passes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Generation {
    polygons: Vec<Polygon>,
}

impl Generation {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Generation 0: one rectangle spanning a `width` x `height` canvas.
    pub fn canvas(width: u32, height: u32) -> Self {
        let right = f64::from(width.saturating_sub(1));
        let bottom = f64::from(height.saturating_sub(1));
        Self::new(vec![Polygon::rectangle(0.0, 0.0, right, bottom)])
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    pub fn total_area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }
}

impl Deref for Generation {
    type Target = [Polygon];

    fn deref(&self) -> &[Polygon] {
        &self.polygons
    }
}

impl FromIterator<Polygon> for Generation {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
