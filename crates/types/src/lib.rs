pub mod color;
pub mod document;
pub mod geometry;

pub use color::{Color, ColorParseError};
pub use document::OutlineEntry;
pub use geometry::Rect;
