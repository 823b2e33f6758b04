//! Renders travel itineraries into paginated, color-coded PDF documents.
//!
//! ```no_run
//! use tripsheet::{ColorMap, Itinerary, Day, Event, render};
//!
//! let trip = Itinerary::new("Weekend").with_day(
//!     Day::new(1)
//!         .with_date("Fri")
//!         .with_event(Event::new("flight").at("8:00 AM").with_field("airline", "UA1")),
//! );
//! render(&trip, "weekend.pdf", &ColorMap::default())?;
//! # Ok::<(), tripsheet::PipelineError>(())
//! ```

pub mod compose;
pub mod error;
pub mod pipeline;
pub mod sample;

pub use error::PipelineError;
pub use pipeline::{Generator, RenderOptions, render, render_json};
pub use sample::sample_itinerary;

pub use tripsheet_itinerary::{ColorMap, Day, Event, Itinerary, ModelError};
pub use tripsheet_style::{Margins, PageLayout, PageSize, StyleName, StyleRegistry};
pub use tripsheet_types::Color;
