// src/views/theme.rs
// Fixed color table for schematic objects.
//
// Objects carry an (era, color) pair: the era selects a palette row, the
// color id a column. The table is hand-picked, not computed.

use nannou::prelude::*;

const PALETTE: [[(f32, f32, f32); 8]; 2] = [
    // era 0: vintage panel tones
    [
        (0.86, 0.83, 0.76), // bone
        (0.74, 0.56, 0.37), // copper
        (0.55, 0.60, 0.48), // sage
        (0.78, 0.65, 0.31), // brass
        (0.45, 0.51, 0.60), // slate
        (0.62, 0.38, 0.34), // oxide
        (0.36, 0.42, 0.38), // bakelite
        (0.70, 0.70, 0.72), // aluminum
    ],
    // era 1: modern bright tones
    [
        (0.95, 0.95, 0.95), // white
        (0.91, 0.45, 0.19), // orange
        (0.30, 0.69, 0.35), // green
        (0.98, 0.77, 0.19), // amber
        (0.25, 0.51, 0.89), // blue
        (0.86, 0.25, 0.30), // red
        (0.42, 0.30, 0.65), // violet
        (0.55, 0.57, 0.60), // steel
    ],
];

/// Look up a theme color; out-of-range ids clamp to the last entry.
pub fn lookup(era: usize, color: usize) -> Rgb<f32> {
    let row = &PALETTE[era.min(PALETTE.len() - 1)];
    let (r, g, b) = row[color.min(row.len() - 1)];
    rgb(r, g, b)
}

/// Highlight for value-state overlays.
pub fn value_highlight(era: usize) -> Rgb<f32> {
    lookup(era, 3)
}

/// Seam and label color.
pub fn black() -> Rgb<f32> {
    rgb(0.0, 0.0, 0.0)
}
