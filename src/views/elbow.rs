// src/views/elbow.rs
// The L-shaped connector between two schematic regions.
//
// Each orientation composes a stem rectangle, an outer corner sector, a
// riser and an arm rectangle, and an inner corner sector drawn in black to
// mask the overlap seam. The layout constants are hand-tuned artwork
// values in design pixels; they are deliberately not derived from the
// grid dimensions.

use nannou::prelude::*;

use crate::draw::{DrawSink, ShapeGenerator, TextFitter};
use crate::models::ElbowOrientation;
use crate::views::theme;

pub const CORNER_OUTER_RADIUS: f32 = 45.0;
pub const CORNER_INNER_RADIUS: f32 = 27.0;
pub const STEM_BASE: f32 = 10.0;
pub const ARM_BRIDGE: f32 = 18.0;

const SIZE_PAD: f32 = 2.0;
const LABEL_MARGIN: f32 = 5.0;
const LABEL_DROP: f32 = 15.0;

/// Immutable description of one elbow. Positions are design pixels;
/// `length` extends the arm, `size` is the thickness multiplier of the
/// stem. Negative lengths or sizes are not validated here and simply
/// produce degenerate geometry.
pub struct Elbow {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub size: i32,
    pub orientation: ElbowOrientation,
    pub era: usize,
    pub color: usize,
    pub label: String,
}

impl Elbow {
    fn stem_height(&self, cell_height: f32) -> f32 {
        STEM_BASE + self.size as f32 * cell_height + (self.size as f32 - 1.0) * SIZE_PAD
    }

    /// Emit the full connector: four rectangles, two corner sectors and
    /// one label, in a fixed order per orientation.
    pub fn draw<S: DrawSink + TextFitter>(&self, shapes: &ShapeGenerator, sink: &mut S) {
        let color = theme::lookup(self.era, self.color);
        match self.orientation {
            ElbowOrientation::ArmRightBendUp => self.draw_arm_right_bend_up(shapes, sink, color),
            ElbowOrientation::ArmLeftBendUp => self.draw_arm_left_bend_up(shapes, sink, color),
            ElbowOrientation::ArmRightBendDown => self.draw_arm_right_bend_down(shapes, sink, color),
            ElbowOrientation::ArmLeftBendDown => self.draw_arm_left_bend_down(shapes, sink, color),
        }
    }

    fn draw_arm_right_bend_up<S: DrawSink + TextFitter>(
        &self,
        shapes: &ShapeGenerator,
        sink: &mut S,
        color: Rgb<f32>,
    ) {
        let (x, y, len) = (self.x, self.y, self.length);
        let bw = shapes.transform().cell_width();
        let stem_h = self.stem_height(shapes.transform().cell_height());

        shapes.rect_px(sink, x, x + bw, y, y + stem_h, color);
        shapes.arc_px(
            sink,
            x + CORNER_OUTER_RADIUS,
            y + stem_h,
            CORNER_OUTER_RADIUS,
            90.0,
            180.0,
            color,
        );
        shapes.rect_px(
            sink,
            x + CORNER_OUTER_RADIUS,
            x + bw + CORNER_INNER_RADIUS,
            y + stem_h,
            y + stem_h + CORNER_OUTER_RADIUS,
            color,
        );
        shapes.rect_px(
            sink,
            x + bw + CORNER_INNER_RADIUS,
            x + bw + len + CORNER_INNER_RADIUS,
            y + stem_h + CORNER_INNER_RADIUS,
            y + stem_h + CORNER_OUTER_RADIUS,
            color,
        );
        shapes.arc_px(
            sink,
            x + bw + CORNER_INNER_RADIUS,
            y + stem_h,
            CORNER_INNER_RADIUS,
            90.0,
            180.0,
            theme::black(),
        );
        self.place_label(shapes, sink, x + LABEL_MARGIN, y + LABEL_MARGIN);
    }

    fn draw_arm_left_bend_up<S: DrawSink + TextFitter>(
        &self,
        shapes: &ShapeGenerator,
        sink: &mut S,
        color: Rgb<f32>,
    ) {
        let (x, y, len) = (self.x, self.y, self.length);
        let bw = shapes.transform().cell_width();
        let stem_h = self.stem_height(shapes.transform().cell_height());

        shapes.rect_px(
            sink,
            x + len + CORNER_INNER_RADIUS,
            x + len + CORNER_INNER_RADIUS + bw,
            y,
            y + stem_h,
            color,
        );
        shapes.arc_px(
            sink,
            x + len + CORNER_INNER_RADIUS + (bw - CORNER_OUTER_RADIUS),
            y + stem_h,
            CORNER_OUTER_RADIUS,
            0.0,
            90.0,
            color,
        );
        shapes.rect_px(
            sink,
            x + len,
            x + len + CORNER_INNER_RADIUS + (bw - CORNER_OUTER_RADIUS),
            y + stem_h,
            y + stem_h + CORNER_OUTER_RADIUS,
            color,
        );
        shapes.rect_px(
            sink,
            x,
            x + len,
            y + stem_h + CORNER_INNER_RADIUS,
            y + stem_h + CORNER_OUTER_RADIUS,
            color,
        );
        shapes.arc_px(
            sink,
            x + len,
            y + stem_h,
            CORNER_INNER_RADIUS,
            0.0,
            90.0,
            theme::black(),
        );
        self.place_label(
            shapes,
            sink,
            x + len + CORNER_INNER_RADIUS + LABEL_MARGIN,
            y + LABEL_MARGIN,
        );
    }

    fn draw_arm_right_bend_down<S: DrawSink + TextFitter>(
        &self,
        shapes: &ShapeGenerator,
        sink: &mut S,
        color: Rgb<f32>,
    ) {
        let (x, y, len) = (self.x, self.y, self.length);
        let bw = shapes.transform().cell_width();
        let ch = shapes.transform().cell_height();
        let stem_h = self.stem_height(ch);

        shapes.rect_px(
            sink,
            x,
            x + bw,
            y + CORNER_OUTER_RADIUS,
            y + CORNER_OUTER_RADIUS + stem_h,
            color,
        );
        shapes.arc_px(
            sink,
            x + CORNER_OUTER_RADIUS,
            y + CORNER_OUTER_RADIUS,
            CORNER_OUTER_RADIUS,
            180.0,
            270.0,
            color,
        );
        shapes.rect_px(
            sink,
            x + CORNER_OUTER_RADIUS,
            x + bw + CORNER_INNER_RADIUS,
            y,
            y + CORNER_OUTER_RADIUS,
            color,
        );
        shapes.rect_px(
            sink,
            x + bw + CORNER_INNER_RADIUS,
            x + bw + len + CORNER_INNER_RADIUS,
            y,
            y + ARM_BRIDGE,
            color,
        );
        shapes.arc_px(
            sink,
            x + bw + CORNER_INNER_RADIUS,
            y + CORNER_OUTER_RADIUS,
            CORNER_INNER_RADIUS,
            180.0,
            270.0,
            theme::black(),
        );
        self.place_label(
            shapes,
            sink,
            x + LABEL_MARGIN,
            y + CORNER_OUTER_RADIUS + ch * self.size as f32 - LABEL_DROP,
        );
    }

    fn draw_arm_left_bend_down<S: DrawSink + TextFitter>(
        &self,
        shapes: &ShapeGenerator,
        sink: &mut S,
        color: Rgb<f32>,
    ) {
        let (x, y, len) = (self.x, self.y, self.length);
        let bw = shapes.transform().cell_width();
        let ch = shapes.transform().cell_height();
        let stem_h = self.stem_height(ch);

        shapes.rect_px(
            sink,
            x + len + CORNER_INNER_RADIUS,
            x + len + CORNER_INNER_RADIUS + bw,
            y + CORNER_OUTER_RADIUS,
            y + CORNER_OUTER_RADIUS + stem_h,
            color,
        );
        shapes.arc_px(
            sink,
            x + len + CORNER_INNER_RADIUS + (bw - CORNER_OUTER_RADIUS),
            y + CORNER_OUTER_RADIUS,
            CORNER_OUTER_RADIUS,
            -90.0,
            0.0,
            color,
        );
        shapes.rect_px(
            sink,
            x + len,
            x + len + CORNER_INNER_RADIUS + (bw - CORNER_OUTER_RADIUS),
            y,
            y + CORNER_OUTER_RADIUS,
            color,
        );
        shapes.rect_px(sink, x, x + len, y, y + ARM_BRIDGE, color);
        shapes.arc_px(
            sink,
            x + len,
            y + CORNER_OUTER_RADIUS,
            CORNER_INNER_RADIUS,
            -90.0,
            0.0,
            theme::black(),
        );
        self.place_label(
            shapes,
            sink,
            x + len + CORNER_INNER_RADIUS + LABEL_MARGIN,
            y + ch * self.size as f32 + CORNER_OUTER_RADIUS - LABEL_DROP,
        );
    }

    fn place_label<S: TextFitter>(&self, shapes: &ShapeGenerator, sink: &mut S, x: f32, y: f32) {
        let tx = shapes.transform();
        let (max_width, max_height) = tx.label_bounds();
        sink.place_text(pt2(tx.px(x), tx.px(y)), &self.label, max_width, max_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::draw::{CommandBuffer, DrawCommand, GridTransform};

    const EPSILON: f32 = 1e-3;

    fn transform() -> GridTransform {
        GridTransform::new(&GridConfig {
            cell_width: 100.0,
            cell_height: 50.0,
            gap: 5.0,
            scale_factor: 1.0,
        })
    }

    fn elbow(orientation: ElbowOrientation, length: f32, size: i32) -> Elbow {
        Elbow {
            x: 0.0,
            y: 0.0,
            length,
            size,
            orientation,
            era: 1,
            color: 4,
            label: "Q0".to_string(),
        }
    }

    fn draw(elbow: &Elbow) -> CommandBuffer {
        let tx = transform();
        let shapes = ShapeGenerator::new(&tx, 1440);
        let mut buffer = CommandBuffer::new();
        elbow.draw(&shapes, &mut buffer);
        buffer
    }

    fn quad(command: &DrawCommand) -> ([Point2; 4], Rgb<f32>) {
        match command {
            DrawCommand::Quad { corners, color } => (*corners, *color),
            _ => panic!("Wrong variant"),
        }
    }

    fn polygon(command: &DrawCommand) -> (&[Point2], Rgb<f32>) {
        match command {
            DrawCommand::Polygon { points, color } => (points, *color),
            _ => panic!("Wrong variant"),
        }
    }

    #[test]
    fn test_emission_shape_and_order() {
        for orientation in [
            ElbowOrientation::ArmRightBendUp,
            ElbowOrientation::ArmLeftBendUp,
            ElbowOrientation::ArmRightBendDown,
            ElbowOrientation::ArmLeftBendDown,
        ] {
            let buffer = draw(&elbow(orientation, 100.0, 1));
            assert_eq!(buffer.commands.len(), 6);
            assert!(matches!(buffer.commands[0], DrawCommand::Quad { .. }));
            assert!(matches!(buffer.commands[1], DrawCommand::Polygon { .. }));
            assert!(matches!(buffer.commands[2], DrawCommand::Quad { .. }));
            assert!(matches!(buffer.commands[3], DrawCommand::Quad { .. }));
            assert!(matches!(buffer.commands[4], DrawCommand::Polygon { .. }));
            assert!(matches!(buffer.commands[5], DrawCommand::Label { .. }));
        }
    }

    #[test]
    fn test_stem_bounds_arm_right_bend_up() {
        let buffer = draw(&elbow(ElbowOrientation::ArmRightBendUp, 100.0, 1));

        // stem: one cell wide, 10 + 1*50 + 0 = 60 high from the origin
        let (corners, _) = quad(&buffer.commands[0]);
        assert_eq!(corners[3], pt2(0.0, 0.0));
        assert_eq!(corners[1], pt2(100.0, 60.0));
    }

    #[test]
    fn test_stem_grows_with_size() {
        let buffer = draw(&elbow(ElbowOrientation::ArmRightBendUp, 100.0, 3));

        // 10 + 3*50 + 2*2 = 164
        let (corners, _) = quad(&buffer.commands[0]);
        assert_eq!(corners[0].y, 164.0);
    }

    #[test]
    fn test_arm_extends_by_length() {
        let buffer = draw(&elbow(ElbowOrientation::ArmRightBendUp, 250.0, 1));

        let (corners, _) = quad(&buffer.commands[3]);
        assert_eq!(corners[3].x, 127.0); // cell width + inner radius
        assert_eq!(corners[1].x, 377.0);
        // arm thickness is the radius difference
        assert_eq!(corners[0].y - corners[2].y, ARM_BRIDGE);
    }

    #[test]
    fn test_inner_arc_is_black_between_theme_emissions() {
        let buffer = draw(&elbow(ElbowOrientation::ArmRightBendUp, 100.0, 1));
        let color = theme::lookup(1, 4);

        let (_, outer_color) = polygon(&buffer.commands[1]);
        let (_, inner_color) = polygon(&buffer.commands[4]);
        assert_eq!(outer_color, color);
        assert_eq!(inner_color, theme::black());
        for i in [0usize, 2, 3] {
            let (_, quad_color) = quad(&buffer.commands[i]);
            assert_eq!(quad_color, color);
        }
    }

    #[test]
    fn test_theme_color_reasserted_on_next_draw() {
        let tx = transform();
        let shapes = ShapeGenerator::new(&tx, 1440);
        let mut buffer = CommandBuffer::new();
        let elbow = elbow(ElbowOrientation::ArmRightBendUp, 100.0, 1);

        elbow.draw(&shapes, &mut buffer);
        elbow.draw(&shapes, &mut buffer);

        // the black seam of draw one does not leak into draw two
        let (_, stem_color) = quad(&buffer.commands[6]);
        assert_eq!(stem_color, theme::lookup(1, 4));
    }

    #[test]
    fn test_left_arm_mirrors_right_arm() {
        let right = draw(&elbow(ElbowOrientation::ArmRightBendUp, 100.0, 1));
        let left = draw(&elbow(ElbowOrientation::ArmLeftBendUp, 100.0, 1));

        // footprint width: cell width + length + inner radius
        let footprint = 100.0 + 100.0 + 27.0;
        let reflect = |x: f32| footprint - x;

        for i in [0usize, 2, 3] {
            let (r, _) = quad(&right.commands[i]);
            let (l, _) = quad(&left.commands[i]);

            // reflection swaps left and right edges, keeps the y span
            assert!((reflect(r[1].x) - l[0].x).abs() < EPSILON);
            assert!((reflect(r[0].x) - l[1].x).abs() < EPSILON);
            assert!((r[0].y - l[0].y).abs() < EPSILON);
            assert!((r[2].y - l[2].y).abs() < EPSILON);
        }

        // arc centers reflect too
        let (r_outer, _) = polygon(&right.commands[1]);
        let (l_outer, _) = polygon(&left.commands[1]);
        assert!((reflect(r_outer[0].x) - l_outer[0].x).abs() < EPSILON);
        assert!((r_outer[0].y - l_outer[0].y).abs() < EPSILON);

        let (r_inner, _) = polygon(&right.commands[4]);
        let (l_inner, _) = polygon(&left.commands[4]);
        assert!((reflect(r_inner[0].x) - l_inner[0].x).abs() < EPSILON);
    }

    #[test]
    fn test_bend_down_arm_hugs_baseline() {
        let buffer = draw(&elbow(ElbowOrientation::ArmRightBendDown, 80.0, 1));

        // the thin arm sits at the bottom of the footprint
        let (corners, _) = quad(&buffer.commands[3]);
        assert_eq!(corners[2].y, 0.0);
        assert_eq!(corners[0].y, ARM_BRIDGE);

        // stem starts above the outer corner radius
        let (stem, _) = quad(&buffer.commands[0]);
        assert_eq!(stem[2].y, CORNER_OUTER_RADIUS);
        assert_eq!(stem[0].y, CORNER_OUTER_RADIUS + 60.0);
    }

    #[test]
    fn test_scale_factor_applies_uniformly() {
        let tx = GridTransform::new(&GridConfig {
            cell_width: 100.0,
            cell_height: 50.0,
            gap: 5.0,
            scale_factor: 2.0,
        });
        let shapes = ShapeGenerator::new(&tx, 1440);
        let mut buffer = CommandBuffer::new();
        elbow(ElbowOrientation::ArmRightBendUp, 100.0, 1).draw(&shapes, &mut buffer);

        let (stem, _) = quad(&buffer.commands[0]);
        assert_eq!(stem[1], pt2(200.0, 120.0));
        let (outer, _) = polygon(&buffer.commands[1]);
        assert_eq!(outer[0], pt2(90.0, 120.0));
        assert!((outer[1].distance(outer[0]) - 90.0).abs() < EPSILON);
    }
}
