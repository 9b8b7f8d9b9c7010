pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod path;
pub mod shape;

pub use error::{Result, RoundelError};
pub use geometry::{CornerArc, RoundedPolygon, Sweep};
pub use path::PathWriter;
