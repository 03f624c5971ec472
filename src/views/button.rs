// src/views/button.rs
// Grid-aligned rounded button spanning one row and `extend + 1` columns.
//
// The silhouette is a body rectangle with the four corners rounded by
// full arcs. A set value shows as a half-height overlay with its own
// rounded ends, drawn from the half shapes.

use crate::draw::{DrawSink, ShapeGenerator, TextFitter};
use crate::views::theme;

pub struct Button {
    pub x: i32,
    pub y: i32,
    pub extend: i32,
    pub era: usize,
    pub color: usize,
    pub label: String,
    value: i32,
}

impl Button {
    pub fn new(x: i32, y: i32, extend: i32, era: usize, color: usize, label: String) -> Self {
        Self {
            x,
            y,
            extend,
            era,
            color,
            label,
            value: 0,
        }
    }

    /// Positive values fill the top half, negative the bottom half,
    /// zero clears the overlay.
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn draw<S: DrawSink + TextFitter>(&self, shapes: &ShapeGenerator, sink: &mut S) {
        let color = theme::lookup(self.era, self.color);
        let right = self.x + self.extend;

        shapes.rectangle(sink, self.x, right, self.y, self.y, color);
        shapes.full_arc(sink, self.x, self.y, true, true, color);
        shapes.full_arc(sink, self.x, self.y, true, false, color);
        shapes.full_arc(sink, right, self.y, false, true, color);
        shapes.full_arc(sink, right, self.y, false, false, color);

        if self.value != 0 {
            let highlight = theme::value_highlight(self.era);
            let at_top = self.value > 0;

            shapes.half_rectangle(sink, self.x, right, self.y, self.y + 1, at_top, highlight);
            shapes.half_arc(sink, self.x, self.y, true, at_top, !at_top, highlight);
            shapes.half_arc(sink, right, self.y, false, at_top, !at_top, highlight);
        }

        shapes.cell_label(sink, self.x, self.y, &self.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::draw::{CommandBuffer, DrawCommand, GridTransform};

    fn transform() -> GridTransform {
        GridTransform::new(&GridConfig {
            cell_width: 100.0,
            cell_height: 50.0,
            gap: 5.0,
            scale_factor: 1.0,
        })
    }

    fn draw(button: &Button) -> CommandBuffer {
        let tx = transform();
        let shapes = ShapeGenerator::new(&tx, 1440);
        let mut buffer = CommandBuffer::new();
        button.draw(&shapes, &mut buffer);
        buffer
    }

    #[test]
    fn test_idle_button_emissions() {
        let buffer = draw(&Button::new(0, 0, 1, 0, 2, "NAND".to_string()));

        // body + 4 corner sectors + label
        assert_eq!(buffer.commands.len(), 6);
        assert!(matches!(buffer.commands[0], DrawCommand::Quad { .. }));
        for i in 1..5 {
            assert!(matches!(buffer.commands[i], DrawCommand::Polygon { .. }));
        }
        assert!(matches!(buffer.commands[5], DrawCommand::Label { .. }));
    }

    #[test]
    fn test_value_overlay_emissions() {
        let mut button = Button::new(0, 0, 1, 0, 2, "NAND".to_string());
        button.set_value(1);
        let buffer = draw(&button);

        // overlay adds a half quad and two half sectors
        assert_eq!(buffer.commands.len(), 9);
        assert!(matches!(buffer.commands[5], DrawCommand::Quad { .. }));
        assert!(matches!(buffer.commands[6], DrawCommand::Polygon { .. }));
        assert!(matches!(buffer.commands[7], DrawCommand::Polygon { .. }));

        match &buffer.commands[5] {
            DrawCommand::Quad { corners, color } => {
                // top half of the cell: bottom edge on the midline
                assert_eq!(corners[2].y, 25.0);
                assert_eq!(*color, theme::value_highlight(0));
            }
            _ => panic!("Wrong variant"),
        }
    }

    #[test]
    fn test_clearing_value_removes_overlay() {
        let mut button = Button::new(2, 3, 0, 1, 1, "CLK".to_string());
        button.set_value(-1);
        assert_eq!(draw(&button).commands.len(), 9);

        button.set_value(0);
        assert_eq!(draw(&button).commands.len(), 6);
    }

    #[test]
    fn test_corner_sector_radius() {
        let buffer = draw(&Button::new(0, 0, 1, 0, 2, "NAND".to_string()));

        match &buffer.commands[1] {
            DrawCommand::Polygon { points, .. } => {
                let center = points[0];
                for point in &points[1..] {
                    assert!((point.distance(center) - 50.0).abs() < 1e-3);
                }
            }
            _ => panic!("Wrong variant"),
        }
    }
}
