// src/draw/mod.rs
// The grid-to-pixel geometry engine: grid coordinates in, filled shapes out.
//
// Types in this module:
// DrawSink, TextFitter, DrawCommand, CommandBuffer

pub mod command;
pub mod grid_transform;
pub mod shapes;

pub use command::{CommandBuffer, DrawCommand};
pub use grid_transform::GridTransform;
pub use shapes::ShapeGenerator;

use nannou::prelude::*;

/// Where generated shapes end up. Color is an explicit argument on every
/// emission; there is no current-color mode in the sink.
pub trait DrawSink {
    fn fill_quad(&mut self, corners: [Point2; 4], color: Rgb<f32>);
    fn fill_polygon(&mut self, points: &[Point2], color: Rgb<f32>);
}

/// Label placement service. The implementation shrinks the font until the
/// text fits the given bounds; the geometry engine only supplies the
/// bottom-left anchor and the bounds.
pub trait TextFitter {
    fn place_text(&mut self, anchor: Point2, text: &str, max_width: f32, max_height: f32);
}
