// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::{GridConfig, PathConfig, RenderConfig, WindowConfig};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub grid: GridConfig,
    pub rendering: RenderConfig,
    pub paths: PathConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        let config = if let Some(exe_config) = Self::load_from_exe_dir() {
            exe_config
        } else {
            // Fallback to loading from the current working directory
            Self::load_from_working_dir()?
        };

        config.grid.validate()?;
        Ok(config)
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }

    pub fn resolve_schematic_path(&self) -> PathBuf {
        if Path::new(&self.paths.schematic_file).is_absolute() {
            PathBuf::from(&self.paths.schematic_file)
        } else {
            // If path is relative, resolve it relative to the executable or working directory
            if let Some(exe_dir) = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            {
                exe_dir.join(&self.paths.schematic_file)
            } else {
                PathBuf::from(&self.paths.schematic_file)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
            [window]
            width = 1280
            height = 800

            [grid]
            cell_width = 100.0
            cell_height = 50.0
            gap = 5.0
            scale_factor = 1.0

            [rendering]
            arc_resolution = 1440

            [paths]
            schematic_file = "schematic.json"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.grid.cell_height, 50.0);
        assert_eq!(config.rendering.arc_resolution, 1440);
        assert!(config.grid.validate().is_ok());
    }
}
