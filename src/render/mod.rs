// src/render/mod.rs
// Replay of generated shapes onto a nannou Draw

pub mod nannou_sink;

pub use nannou_sink::NannouSink;
