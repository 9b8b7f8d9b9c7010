//! Star-shaped clip regions built on the rounding engine.
//!
//! Takes a loosely specified configuration, clamps it, generates the star
//! vertices, rounds them and emits the resulting path under a unique id.

pub mod clip;
pub mod config;
pub mod id;
pub mod star;

pub use clip::{ClipPath, StarClip};
pub use config::{ClampWarning, Clamped, RawStarConfig, StarConfig};
pub use id::IdGenerator;
pub use star::star_vertices;
