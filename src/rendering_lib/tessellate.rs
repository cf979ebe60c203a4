// src/rendering_lib/tessellate.rs

use glam::Vec2;

use stained_glass::geometry::Point2;
use stained_glass::painter::{DrawList, MosaicPainter};
use stained_glass::palette::{Color, BLACK};

use super::vertex::Vertex;

/// Triangle mesh built from painter calls. Fills become triangle fans,
/// strokes become one quad per edge.
#[derive(Clone, Debug)]
pub struct MeshBuilder {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    background: Color,
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            background: BLACK,
        }
    }
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_draw_list(list: &DrawList) -> Self {
        let mut mesh = Self::new();
        list.replay(&mut mesh);
        mesh
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    fn push_quad(&mut self, corners: [Vec2; 4], color: [f32; 4]) {
        let start = self.vertices.len() as u32;
        for corner in corners {
            self.vertices.push(Vertex::new(corner.to_array(), color));
        }
        self.indices
            .extend_from_slice(&[start, start + 1, start + 2, start, start + 2, start + 3]);
    }
}

fn to_vec2(point: &Point2) -> Vec2 {
    Vec2::new(point.x as f32, point.y as f32)
}

impl MosaicPainter for MeshBuilder {
    fn clear(&mut self, color: Color) {
        self.vertices.clear();
        self.indices.clear();
        self.background = color;
    }

    fn fill_polygon(&mut self, vertices: &[Point2], color: Color) {
        if vertices.len() < 3 {
            return;
        }
        let color = color.to_array();
        let start = self.vertices.len() as u32;
        for point in vertices {
            self.vertices.push(Vertex::new(to_vec2(point).to_array(), color));
        }
        for i in 1..(vertices.len() as u32 - 1) {
            self.indices.push(start);
            self.indices.push(start + i);
            self.indices.push(start + i + 1);
        }
    }

    fn stroke_polygon(&mut self, vertices: &[Point2], color: Color, line_width: f64) {
        if vertices.len() < 2 || line_width <= 0.0 {
            return;
        }
        let color = color.to_array();
        let half_width = line_width as f32 / 2.0;

        for i in 0..vertices.len() {
            let start = to_vec2(&vertices[i]);
            let end = to_vec2(&vertices[(i + 1) % vertices.len()]);
            let direction = (end - start).normalize_or_zero();
            if direction == Vec2::ZERO {
                continue;
            }
            // square caps overlap at the corners and hide the joins
            let along = direction * half_width;
            let across = direction.perp() * half_width;
            self.push_quad(
                [
                    start - along + across,
                    end + along + across,
                    end + along - across,
                    start - along - across,
                ],
                color,
            );
        }
    }
}
