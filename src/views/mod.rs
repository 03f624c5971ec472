// src/views/mod.rs

pub mod button;
pub mod elbow;
pub mod theme;

pub use button::Button;
pub use elbow::Elbow;

use crate::draw::{DrawSink, ShapeGenerator, TextFitter};
use crate::models::{ElbowOrientation, ObjectSpec, Schematic};

/// A drawable schematic object.
pub enum ObjectView {
    Button(Button),
    Elbow(Elbow),
}

impl ObjectView {
    pub fn draw<S: DrawSink + TextFitter>(&self, shapes: &ShapeGenerator, sink: &mut S) {
        match self {
            ObjectView::Button(button) => button.draw(shapes, sink),
            ObjectView::Elbow(elbow) => elbow.draw(shapes, sink),
        }
    }
}

/// Instantiate views for every object of a schematic file.
pub fn build(schematic: &Schematic) -> Vec<ObjectView> {
    schematic
        .objects
        .iter()
        .map(|spec| match spec {
            ObjectSpec::Button {
                x,
                y,
                extend,
                era,
                color,
                label,
                value,
            } => {
                let mut button = Button::new(*x, *y, *extend, *era, *color, label.clone());
                button.set_value(*value);
                ObjectView::Button(button)
            }
            ObjectSpec::Elbow {
                x,
                y,
                length,
                size,
                x_mirror,
                y_mirror,
                era,
                color,
                label,
            } => ObjectView::Elbow(Elbow {
                x: *x,
                y: *y,
                length: *length,
                size: *size,
                orientation: ElbowOrientation::from_mirrors(*x_mirror, *y_mirror),
                era: *era,
                color: *color,
                label: label.clone(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::draw::{CommandBuffer, GridTransform};

    #[test]
    fn test_build_from_schematic() {
        let json = r#"{
            "name": "latch",
            "objects": [
                { "type": "button", "x": 0, "y": 0, "extend": 0,
                  "era": 0, "color": 1, "label": "S", "value": 1 },
                { "type": "elbow", "x": 0.0, "y": 70.0, "length": 90.0,
                  "size": 1, "y_mirror": true,
                  "era": 0, "color": 1, "label": "out" }
            ]
        }"#;
        let schematic: Schematic = serde_json::from_str(json).unwrap();
        let views = build(&schematic);
        assert_eq!(views.len(), 2);

        match &views[1] {
            ObjectView::Elbow(elbow) => {
                assert_eq!(elbow.orientation, ElbowOrientation::ArmRightBendDown);
            }
            _ => panic!("Wrong variant"),
        }

        // every view draws without panicking
        let tx = GridTransform::new(&GridConfig {
            cell_width: 100.0,
            cell_height: 50.0,
            gap: 5.0,
            scale_factor: 1.0,
        });
        let shapes = ShapeGenerator::new(&tx, 1440);
        let mut buffer = CommandBuffer::new();
        for view in &views {
            view.draw(&shapes, &mut buffer);
        }
        assert!(!buffer.commands.is_empty());
    }
}
