//! Turns a flat list of [`Block`]s into positioned elements on fixed-size pages.

use thiserror::Error;
use tripsheet_style::UnknownStyleError;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid page geometry: {0}")]
    InvalidPage(String),
    #[error(transparent)]
    Style(#[from] UnknownStyleError),
}

pub mod algorithms;
pub mod block;
pub mod config;
mod elements;
pub(crate) mod engine;
pub mod fonts;
pub mod painting;
pub mod text;

pub use self::block::{Block, DetailRow, DetailTable, EventHeader, Paragraph};
pub use self::config::{CardMetrics, LayoutConfig};
pub use self::elements::{LayoutElement, Page, PositionedElement, RectElement, TextElement};
pub use self::engine::LayoutEngine;
pub use self::fonts::{FontFace, encode_win_ansi};

// Re-export geometry types so downstream crates agree on them.
pub use tripsheet_types::{OutlineEntry, Rect};
