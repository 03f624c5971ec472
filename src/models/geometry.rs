// src/models/geometry.rs
// Geometry types shared by the shape generator and the object views

use nannou::prelude::*;

/// A circular sector handed to the tessellator. Angles are in degrees,
/// counter-clockwise, with 0 at the positive x axis.
#[derive(Debug, Clone, Copy)]
pub struct ArcSpec {
    pub center: Point2,
    pub radius: f32,
    pub start_deg: f32,
    pub end_deg: f32,
}

/// The four elbow layouts. Named by where the arm leaves the stem:
/// the arm either runs right or left of the stem, and the corner either
/// bends up over the stem or down under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElbowOrientation {
    ArmRightBendUp,
    ArmLeftBendUp,
    ArmRightBendDown,
    ArmLeftBendDown,
}

impl ElbowOrientation {
    /// Build an orientation from the two mirror flags of a schematic file.
    pub fn from_mirrors(x_mirror: bool, y_mirror: bool) -> Self {
        match (x_mirror, y_mirror) {
            (false, false) => ElbowOrientation::ArmRightBendUp,
            (true, false) => ElbowOrientation::ArmLeftBendUp,
            (false, true) => ElbowOrientation::ArmRightBendDown,
            (true, true) => ElbowOrientation::ArmLeftBendDown,
        }
    }

    pub fn x_mirrored(self) -> bool {
        matches!(
            self,
            ElbowOrientation::ArmLeftBendUp | ElbowOrientation::ArmLeftBendDown
        )
    }

    pub fn y_mirrored(self) -> bool {
        matches!(
            self,
            ElbowOrientation::ArmRightBendDown | ElbowOrientation::ArmLeftBendDown
        )
    }
}
