//! The itinerary model handed to the document composer.
//!
//! An [`Itinerary`] is an immutable snapshot: the title, optional destination
//! and date range, and an ordered list of [`Day`]s, each holding ordered
//! [`Event`]s. Events carry an open-ended kind tag, an optional time and any
//! number of labelled fields whose insertion order is preserved.

mod color_map;
mod error;
mod json;
mod model;

pub use color_map::{ColorMap, DEFAULT_KIND_COLORS};
pub use error::ModelError;
pub use model::{Day, Event, Itinerary, FALLBACK_KIND_LABEL, RESERVED_KEYS};
