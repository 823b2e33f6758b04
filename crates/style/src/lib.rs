pub mod dimension;
pub mod font;
pub mod page;
pub mod registry;
pub mod text;

pub use dimension::{Margins, PageSize};
pub use font::FontWeight;
pub use page::PageLayout;
pub use registry::{StyleDefinition, StyleName, StyleRegistry, UnknownStyleError};
pub use text::TextAlign;
