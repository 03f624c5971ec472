// src/draw/grid_transform.rs
// Pure grid-to-pixel coordinate mapping.
//
// A grid coordinate (col, row) addresses one cell of the schematic; cells
// are cell_width x cell_height with a gap between neighbors, and the whole
// layout is multiplied by a single scale factor for zoom.

use crate::config::GridConfig;

#[derive(Debug, Clone)]
pub struct GridTransform {
    cell_width: f32,
    cell_height: f32,
    gap: f32,
    scale: f32,
}

impl GridTransform {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            gap: config.gap,
            scale: config.scale_factor,
        }
    }

    /// Pixel x of a cell's left edge.
    pub fn col_left(&self, col: i32) -> f32 {
        col as f32 * (self.cell_width + self.gap) * self.scale
    }

    /// Pixel x of a cell's right edge.
    pub fn col_right(&self, col: i32) -> f32 {
        (col as f32 * (self.cell_width + self.gap) + self.cell_width) * self.scale
    }

    /// Pixel y of a cell's bottom edge.
    pub fn row_bottom(&self, row: i32) -> f32 {
        row as f32 * (self.cell_height + self.gap) * self.scale
    }

    /// Pixel y of a cell's top edge.
    pub fn row_top(&self, row: i32) -> f32 {
        (row as f32 * (self.cell_height + self.gap) + self.cell_height) * self.scale
    }

    /// Scale a raw pixel-space design coordinate.
    pub fn px(&self, v: f32) -> f32 {
        v * self.scale
    }

    /// Cell width in unscaled design units.
    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Cell height in unscaled design units.
    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    pub fn cell_height_px(&self) -> f32 {
        self.cell_height * self.scale
    }

    pub fn half_cell_height_px(&self) -> f32 {
        self.cell_height / 2.0 * self.scale
    }

    /// Bottom-left anchor for a label inside a cell: inset an eighth of a
    /// cell from the left, one gap up from the cell bottom.
    pub fn label_anchor(&self, col: i32, row: i32) -> (f32, f32) {
        let left = (col as f32 * (self.cell_width + self.gap) + self.cell_width / 8.0) * self.scale;
        let bottom = (row as f32 * (self.cell_height + self.gap) + self.gap) * self.scale;
        (left, bottom)
    }

    /// Labels must fit within three quarters of a cell.
    pub fn label_bounds(&self) -> (f32, f32) {
        (
            self.cell_width * 3.0 / 4.0 * self.scale,
            self.cell_height * 3.0 / 4.0 * self.scale,
        )
    }
}
