pub mod arc;
pub mod corner;
pub mod outline;
pub mod rounded_polygon;

pub use arc::{CornerArc, Sweep};
pub use corner::{build_corners, interior_angle, PolygonPoint};
pub use outline::{Aabb2, Outline, OutlineVertex};
pub use rounded_polygon::RoundedPolygon;
