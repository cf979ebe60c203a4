// src/painter.rs

use crate::geometry::Point2;
use crate::palette::Color;

/// Drawing surface a paint cycle talks to. Paths are closed by the painter:
/// the last vertex connects back to the first.
pub trait MosaicPainter {
    fn clear(&mut self, color: Color);
    fn fill_polygon(&mut self, vertices: &[Point2], color: Color);
    fn stroke_polygon(&mut self, vertices: &[Point2], color: Color, line_width: f64);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Fill {
        vertices: Vec<Point2>,
        color: Color,
    },
    Stroke {
        vertices: Vec<Point2>,
        color: Color,
        line_width: f64,
    },
}

/// Records draw calls in order so they can be replayed or tessellated later.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { .. }))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
            .count()
    }

    /// Colour of the last `Clear`, if any.
    pub fn background(&self) -> Option<Color> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Clear(color) => Some(*color),
            _ => None,
        })
    }

    /// Sends every recorded command to another painter.
    pub fn replay(&self, painter: &mut dyn MosaicPainter) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => painter.clear(*color),
                DrawCommand::Fill { vertices, color } => painter.fill_polygon(vertices, *color),
                DrawCommand::Stroke {
                    vertices,
                    color,
                    line_width,
                } => painter.stroke_polygon(vertices, *color, *line_width),
            }
        }
    }
}

impl MosaicPainter for DrawList {
    fn clear(&mut self, color: Color) {
        // everything before a clear is invisible
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_polygon(&mut self, vertices: &[Point2], color: Color) {
        self.commands.push(DrawCommand::Fill {
            vertices: vertices.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, vertices: &[Point2], color: Color, line_width: f64) {
        self.commands.push(DrawCommand::Stroke {
            vertices: vertices.to_vec(),
            color,
            line_width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLACK, NEAR_BLACK};

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn records_in_order() {
        let mut list = DrawList::new();
        list.clear(BLACK);
        list.fill_polygon(&square(), NEAR_BLACK);
        list.stroke_polygon(&square(), BLACK, 2.0);

        assert_eq!(list.len(), 3);
        assert_eq!(list.fill_count(), 1);
        assert_eq!(list.stroke_count(), 1);
        assert_eq!(list.background(), Some(BLACK));
        assert!(matches!(list.commands()[2], DrawCommand::Stroke { line_width, .. } if line_width == 2.0));
    }

    #[test]
    fn clear_discards_earlier_commands() {
        let mut list = DrawList::new();
        list.fill_polygon(&square(), NEAR_BLACK);
        list.clear(NEAR_BLACK);
        assert_eq!(list.len(), 1);
        assert_eq!(list.fill_count(), 0);
    }

    #[test]
    fn replay_copies_commands() {
        let mut list = DrawList::new();
        list.clear(BLACK);
        list.fill_polygon(&square(), NEAR_BLACK);

        let mut copy = DrawList::new();
        list.replay(&mut copy);
        assert_eq!(copy.commands(), list.commands());
    }
}
