pub mod compensation;
pub mod radius_limit;
pub mod round_corners;

pub use compensation::{compensation_scale, COMPENSATION_MARGIN};
pub use radius_limit::{max_common_radius, usable_radius};
pub use round_corners::RoundCorners;
