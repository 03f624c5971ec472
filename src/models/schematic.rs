// src/models/schematic.rs
// the JSON-based schematic data model

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct Schematic {
    pub name: String,
    pub objects: Vec<ObjectSpec>,
}

/// One object of a schematic file. Grid positions are cell indices for
/// buttons; elbows are free-placed in (unscaled) pixel coordinates, as in
/// the original hand-authored layouts.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectSpec {
    Button {
        x: i32,
        y: i32,
        extend: i32,
        era: usize,
        color: usize,
        label: String,
        #[serde(default)]
        value: i32,
    },
    Elbow {
        x: f32,
        y: f32,
        length: f32,
        size: i32,
        #[serde(default)]
        x_mirror: bool,
        #[serde(default)]
        y_mirror: bool,
        era: usize,
        color: usize,
        label: String,
    },
}

impl Schematic {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let schematic: Schematic = serde_json::from_str(&content)?;
        Ok(schematic)
    }
}
