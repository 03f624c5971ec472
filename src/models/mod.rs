pub mod geometry;
pub mod schematic;

pub use geometry::{ArcSpec, ElbowOrientation};
pub use schematic::{ObjectSpec, Schematic};
