//! Converts an itinerary into the flat block sequence the paginator consumes.
//!
//! Composition is pure: the same itinerary and color map always produce the
//! same blocks, and nothing here touches the filesystem.

pub mod day;
pub mod document;
pub mod event;

pub use day::{DAY_SPACING, compose_day};
pub use document::{SUBTITLE_SEPARATOR, TOP_SPACING, compose_itinerary};
pub use event::{EVENT_SPACING, compose_event, humanize_label};
