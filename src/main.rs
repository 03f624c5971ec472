// src/main.rs
use nannou::prelude::*;

use gatevis::{
    config::Config,
    draw::{CommandBuffer, GridTransform, ShapeGenerator},
    models::Schematic,
    render::NannouSink,
    views,
};

struct Model {
    // Tessellated once at startup; the schematic is static.
    commands: CommandBuffer,
}

fn main() {
    nannou::app(model).run();
}

fn model(app: &App) -> Model {
    let config = Config::load().expect("Failed to load config file");

    let schematic_path = config.resolve_schematic_path();
    let schematic = Schematic::load(schematic_path).expect("Failed to load schematic file");

    app.new_window()
        .title(format!("gatevis - {}", schematic.name))
        .size(config.window.width, config.window.height)
        .view(view)
        .build()
        .unwrap();

    let transform = GridTransform::new(&config.grid);
    let shapes = ShapeGenerator::new(&transform, config.rendering.arc_resolution);

    let mut commands = CommandBuffer::new();
    for object in views::build(&schematic) {
        object.draw(&shapes, &mut commands);
    }

    Model { commands }
}

fn view(app: &App, model: &Model, frame: Frame) {
    // Schematic coordinates start at the bottom-left corner of the window
    let window = app.window_rect();
    let draw = app.draw().x_y(window.left(), window.bottom());

    draw.background().color(rgb(0.13, 0.13, 0.14));

    let mut sink = NannouSink::new(&draw);
    sink.replay(&model.commands.commands);

    draw.to_frame(app, &frame).unwrap();
}
