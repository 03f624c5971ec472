// src/draw/command.rs
//
// Shape emissions recorded as draw commands so a static schematic can be
// tessellated once and replayed every frame. The buffer doubles as the
// recording sink in tests.

use nannou::prelude::*;

use super::{DrawSink, TextFitter};

#[derive(Debug, Clone)]
pub enum DrawCommand {
    Quad {
        corners: [Point2; 4],
        color: Rgb<f32>,
    },
    Polygon {
        points: Vec<Point2>,
        color: Rgb<f32>,
    },
    Label {
        anchor: Point2,
        text: String,
        max_width: f32,
        max_height: f32,
    },
}

#[derive(Debug, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSink for CommandBuffer {
    fn fill_quad(&mut self, corners: [Point2; 4], color: Rgb<f32>) {
        self.commands.push(DrawCommand::Quad { corners, color });
    }

    fn fill_polygon(&mut self, points: &[Point2], color: Rgb<f32>) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }
}

impl TextFitter for CommandBuffer {
    fn place_text(&mut self, anchor: Point2, text: &str, max_width: f32, max_height: f32) {
        self.commands.push(DrawCommand::Label {
            anchor,
            text: text.to_string(),
            max_width,
            max_height,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_emission_order() {
        let mut buffer = CommandBuffer::new();
        buffer.fill_quad([pt2(0.0, 0.0); 4], rgb(1.0, 0.0, 0.0));
        buffer.place_text(pt2(5.0, 5.0), "Q", 75.0, 37.5);
        buffer.fill_polygon(&[pt2(0.0, 0.0), pt2(1.0, 0.0)], rgb(0.0, 0.0, 0.0));

        assert_eq!(buffer.commands.len(), 3);
        assert!(matches!(buffer.commands[0], DrawCommand::Quad { .. }));
        assert!(matches!(buffer.commands[1], DrawCommand::Label { .. }));
        assert!(matches!(buffer.commands[2], DrawCommand::Polygon { .. }));

        buffer.clear();
        assert!(buffer.commands.is_empty());
    }
}
