// src/lib.rs

pub mod config;
pub mod draw;
pub mod models;
pub mod render;
pub mod views;
