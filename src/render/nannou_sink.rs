// src/render/nannou_sink.rs
// DrawSink / TextFitter backend over nannou's immediate-mode Draw.

use nannou::prelude::*;

use crate::draw::{DrawCommand, DrawSink, TextFitter};
use crate::views::theme;

const MAX_FONT_SIZE: u32 = 60;
const MIN_FONT_SIZE: u32 = 8;
// Rough advance width of a glyph relative to the font size. Good enough
// for fitting; the labels are short.
const GLYPH_ASPECT: f32 = 0.6;

pub struct NannouSink<'a> {
    draw: &'a Draw,
}

impl<'a> NannouSink<'a> {
    pub fn new(draw: &'a Draw) -> Self {
        Self { draw }
    }

    /// Replay a recorded command buffer.
    pub fn replay(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            match command {
                DrawCommand::Quad { corners, color } => self.fill_quad(*corners, *color),
                DrawCommand::Polygon { points, color } => self.fill_polygon(points, *color),
                DrawCommand::Label {
                    anchor,
                    text,
                    max_width,
                    max_height,
                } => self.place_text(*anchor, text, *max_width, *max_height),
            }
        }
    }
}

impl DrawSink for NannouSink<'_> {
    fn fill_quad(&mut self, corners: [Point2; 4], color: Rgb<f32>) {
        self.draw
            .quad()
            .points(corners[0], corners[1], corners[2], corners[3])
            .color(color);
    }

    fn fill_polygon(&mut self, points: &[Point2], color: Rgb<f32>) {
        self.draw
            .polygon()
            .points(points.iter().copied())
            .color(color);
    }
}

impl TextFitter for NannouSink<'_> {
    /// Shrink the font until the estimated bounding box fits the given
    /// bounds, then draw from the bottom-left anchor.
    fn place_text(&mut self, anchor: Point2, text: &str, max_width: f32, max_height: f32) {
        let glyphs = text.chars().count().max(1) as f32;

        let mut font_size = MAX_FONT_SIZE;
        while font_size > MIN_FONT_SIZE {
            let width = glyphs * font_size as f32 * GLYPH_ASPECT;
            if width <= max_width && (font_size as f32) <= max_height {
                break;
            }
            font_size -= 1;
        }

        let width = glyphs * font_size as f32 * GLYPH_ASPECT;
        self.draw
            .text(text)
            .x_y(anchor.x + width / 2.0, anchor.y + font_size as f32 / 2.0)
            .font_size(font_size)
            .color(theme::black());
    }
}
