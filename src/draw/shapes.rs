// src/draw/shapes.rs
// Shape generation for schematic objects.
//
// Three groups of operations:
// 1. Grid-space rectangles (full and half-cell)
// 2. Corner-rounding arc sectors (full and half radius)
// 3. Pixel-space shapes for free-placed layouts

use nannou::prelude::*;

use super::{DrawSink, GridTransform, TextFitter};
use crate::models::ArcSpec;

pub struct ShapeGenerator<'a> {
    tx: &'a GridTransform,
    arc_resolution: u32,
}

impl<'a> ShapeGenerator<'a> {
    /// `arc_resolution` is the number of boundary samples a full circle
    /// would get; shorter sectors get proportionally fewer.
    pub fn new(tx: &'a GridTransform, arc_resolution: u32) -> Self {
        Self { tx, arc_resolution }
    }

    pub fn transform(&self) -> &GridTransform {
        self.tx
    }

    /// Axis-aligned quad covering the cells from (left, bottom) to
    /// (right, top) inclusive. Degenerate spans are legal and produce a
    /// zero-area quad.
    pub fn rectangle(
        &self,
        sink: &mut impl DrawSink,
        left: i32,
        right: i32,
        bottom: i32,
        top: i32,
        color: Rgb<f32>,
    ) {
        let l = self.tx.col_left(left);
        let r = self.tx.col_right(right);
        let b = self.tx.row_bottom(bottom);
        let t = self.tx.row_top(top);

        sink.fill_quad([pt2(l, t), pt2(r, t), pt2(r, b), pt2(l, b)], color);
    }

    /// Like `rectangle`, but the vertical span runs between cell origins
    /// and is bisected: `at_top` keeps the upper half by lifting the
    /// bottom edge, otherwise the top edge drops by the same half cell.
    pub fn half_rectangle(
        &self,
        sink: &mut impl DrawSink,
        left: i32,
        right: i32,
        bottom: i32,
        top: i32,
        at_top: bool,
        color: Rgb<f32>,
    ) {
        let l = self.tx.col_left(left);
        let r = self.tx.col_right(right);
        let mut b = self.tx.row_bottom(bottom);
        let mut t = self.tx.row_bottom(top);

        if at_top {
            b += self.tx.half_cell_height_px();
        } else {
            t -= self.tx.half_cell_height_px();
        }

        sink.fill_quad([pt2(l, t), pt2(r, t), pt2(r, b), pt2(l, b)], color);
    }

    /// Which quadrant of a circle rounds the corner at each of the four
    /// corner positions, as (start, end) degrees.
    pub fn corner_angles(left: bool, down: bool) -> (f32, f32) {
        match (left, down) {
            (true, true) => (90.0, 180.0),
            (true, false) => (180.0, 270.0),
            (false, true) => (0.0, 90.0),
            (false, false) => (270.0, 360.0),
        }
    }

    /// Corner-rounding sector with radius of a full cell height. The
    /// center sits on the cell's bottom or top edge, inset one cell
    /// height from the left or right edge.
    pub fn full_arc(
        &self,
        sink: &mut impl DrawSink,
        x: i32,
        y: i32,
        left: bool,
        down: bool,
        color: Rgb<f32>,
    ) {
        let center_y = if down {
            self.tx.row_bottom(y)
        } else {
            self.tx.row_top(y)
        };
        let center = pt2(self.corner_center_x(x, left), center_y);
        let (start_deg, end_deg) = Self::corner_angles(left, down);

        self.arc(
            sink,
            ArcSpec {
                center,
                radius: self.tx.cell_height_px(),
                start_deg,
                end_deg,
            },
            color,
        );
    }

    /// Half-radius variant used to round the seam corners of half-height
    /// overlays; `at_top` shifts the center to the cell's vertical
    /// midline when the overlay hugs the opposite edge.
    pub fn half_arc(
        &self,
        sink: &mut impl DrawSink,
        x: i32,
        y: i32,
        left: bool,
        at_top: bool,
        down: bool,
        color: Rgb<f32>,
    ) {
        let center_x = self.corner_center_x(x, left);
        let center_y = if down {
            let mut cy = self.tx.row_bottom(y);
            if at_top {
                cy += self.tx.half_cell_height_px();
            }
            cy
        } else {
            let mut cy = self.tx.row_top(y);
            if !at_top {
                cy -= self.tx.half_cell_height_px();
            }
            cy
        };
        let (start_deg, end_deg) = Self::corner_angles(left, down);

        self.arc(
            sink,
            ArcSpec {
                center: pt2(center_x, center_y),
                radius: self.tx.half_cell_height_px(),
                start_deg,
                end_deg,
            },
            color,
        );
    }

    fn corner_center_x(&self, col: i32, left: bool) -> f32 {
        if left {
            self.tx.col_left(col) + self.tx.cell_height_px()
        } else {
            self.tx.col_right(col) - self.tx.cell_height_px()
        }
    }

    /// Tessellate a sector as a triangle fan: the center first, then
    /// boundary samples from the start angle to the end angle. A
    /// zero-sweep sector still gets one boundary sample so the fan is
    /// never a bare center point.
    pub fn arc(&self, sink: &mut impl DrawSink, spec: ArcSpec, color: Rgb<f32>) {
        let sweep = spec.end_deg - spec.start_deg;
        let steps = (((sweep.abs() / 360.0) * self.arc_resolution as f32).ceil() as usize).max(1);

        let mut points = Vec::with_capacity(steps + 2);
        points.push(spec.center);
        for i in 0..=steps {
            let angle = (spec.start_deg + sweep * i as f32 / steps as f32).to_radians();
            points.push(pt2(
                spec.center.x + angle.cos() * spec.radius,
                spec.center.y + angle.sin() * spec.radius,
            ));
        }

        sink.fill_polygon(&points, color);
    }

    /// Rectangle in unscaled design pixels, for layouts that place their
    /// parts off the cell grid.
    pub fn rect_px(
        &self,
        sink: &mut impl DrawSink,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        color: Rgb<f32>,
    ) {
        let l = self.tx.px(left);
        let r = self.tx.px(right);
        let b = self.tx.px(bottom);
        let t = self.tx.px(top);

        sink.fill_quad([pt2(l, t), pt2(r, t), pt2(r, b), pt2(l, b)], color);
    }

    /// Sector in unscaled design pixels.
    pub fn arc_px(
        &self,
        sink: &mut impl DrawSink,
        center_x: f32,
        center_y: f32,
        radius: f32,
        start_deg: f32,
        end_deg: f32,
        color: Rgb<f32>,
    ) {
        self.arc(
            sink,
            ArcSpec {
                center: pt2(self.tx.px(center_x), self.tx.px(center_y)),
                radius: self.tx.px(radius),
                start_deg,
                end_deg,
            },
            color,
        );
    }

    /// Label anchored inside a cell, bounded to three quarters of the
    /// cell so the fitter can shrink it into place.
    pub fn cell_label(&self, fitter: &mut impl TextFitter, col: i32, row: i32, text: &str) {
        let (left, bottom) = self.tx.label_anchor(col, row);
        let (max_width, max_height) = self.tx.label_bounds();
        fitter.place_text(pt2(left, bottom), text, max_width, max_height);
    }
}
