use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tripsheet_itinerary::ModelError;
use tripsheet_layout::LayoutError;
use tripsheet_render_core::RenderError;
use tripsheet_style::UnknownStyleError;

/// A comprehensive error type for the whole itinerary-to-PDF pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Itinerary has no usable title")]
    EmptyTitle,

    #[error("Invalid event {event_index} on day {day_number}: {reason}")]
    InvalidEvent {
        day_number: u32,
        event_index: usize,
        reason: String,
    },

    /// Other malformed input: bad days, bad colors, wrong JSON shape.
    #[error(transparent)]
    Input(ModelError),

    /// A renderer asked for a style the registry does not define.
    #[error("Internal style error: {0}")]
    UnknownStyle(#[from] UnknownStyleError),

    #[error("Failed to write '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Layout failed: {0}")]
    Layout(LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ModelError> for PipelineError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::EmptyTitle => PipelineError::EmptyTitle,
            ModelError::InvalidEvent {
                day_number,
                event_index,
                reason,
            } => PipelineError::InvalidEvent {
                day_number,
                event_index,
                reason,
            },
            ModelError::Json(e) => PipelineError::Json(e),
            other => PipelineError::Input(other),
        }
    }
}

impl From<LayoutError> for PipelineError {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::Style(e) => PipelineError::UnknownStyle(e),
            other => PipelineError::Layout(other),
        }
    }
}
