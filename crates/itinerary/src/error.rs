use thiserror::Error;
use tripsheet_types::ColorParseError;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Itinerary has no usable title")]
    EmptyTitle,

    #[error("Invalid event {event_index} on day {day_number}: {reason}")]
    InvalidEvent {
        day_number: u32,
        /// Zero-based position of the event within its day.
        event_index: usize,
        reason: String,
    },

    #[error("Invalid day at position {position}: {reason}")]
    InvalidDay { position: usize, reason: String },

    #[error("Malformed itinerary: {0}")]
    Malformed(String),

    #[error("Invalid color for kind '{kind}': {source}")]
    InvalidColor {
        kind: String,
        #[source]
        source: ColorParseError,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
