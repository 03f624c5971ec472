// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

/// The logical grid: cell pitch, inter-cell gap and the global zoom factor.
/// Loaded once at startup and read-only afterwards.
#[derive(Debug, Deserialize, Clone)]
pub struct GridConfig {
    pub cell_width: f32,
    pub cell_height: f32,
    pub gap: f32,
    pub scale_factor: f32,
}

impl GridConfig {
    /// Fail fast on a malformed grid instead of producing degenerate
    /// geometry on every draw call.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.cell_width <= 0.0 || self.cell_height <= 0.0 {
            return Err(format!(
                "grid cell dimensions must be positive, got {}x{}",
                self.cell_width, self.cell_height
            )
            .into());
        }
        if self.gap < 0.0 {
            return Err(format!("grid gap must not be negative, got {}", self.gap).into());
        }
        if self.scale_factor <= 0.0 {
            return Err(format!("scale factor must be positive, got {}", self.scale_factor).into());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    /// Arc smoothness: boundary samples per full circle.
    pub arc_resolution: u32,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub schematic_file: String,
}
