//! Serialization of rounded polygons into the move/line/arc path
//! mini-language understood by SVG `d` attributes and CSS `path()`.

pub mod command;
pub mod writer;

pub use command::{format_number, PathCommand};
pub use writer::{PathTransform, PathWriter, DEFAULT_PRECISION};
