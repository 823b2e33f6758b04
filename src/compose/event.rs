use crate::error::PipelineError;
use tripsheet_itinerary::{ColorMap, Event};
use tripsheet_layout::{Block, DetailRow, DetailTable, EventHeader};
use tripsheet_style::dimension::POINTS_PER_INCH;

/// Gap after every event card.
pub const EVENT_SPACING: f32 = 0.2 * POINTS_PER_INCH;

/// Turns a field key into a row label: underscores become spaces and every
/// word starts with a capital, the rest lower case (`check_in` -> `Check In`).
pub fn humanize_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len());
    let mut at_word_start = true;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if at_word_start {
                label.extend(c.to_uppercase());
            } else {
                label.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            label.push(c);
            at_word_start = true;
        }
    }
    label
}

/// Blocks for one event: a keep-together card (colored header, then the
/// detail table when there is at least one row) followed by a spacer.
///
/// `event_index` is zero-based and only used to locate errors.
pub fn compose_event(
    day_number: u32,
    event_index: usize,
    event: &Event,
    colors: &ColorMap,
) -> Result<Vec<Block>, PipelineError> {
    if let Some(key) = event.fields.keys().find(|k| k.trim().is_empty()) {
        return Err(PipelineError::InvalidEvent {
            day_number,
            event_index,
            reason: format!("field name {:?} is blank", key),
        });
    }

    let header = Block::EventHeader(EventHeader {
        label: event.kind_label().to_uppercase(),
        time: event.display_time().map(str::to_string),
        background: colors.resolve(event.kind.as_deref().unwrap_or_default()),
    });

    let rows: Vec<DetailRow> = event
        .detail_fields()
        .map(|(key, value)| DetailRow::new(humanize_label(key), value))
        .collect();

    let mut card = vec![header];
    if !rows.is_empty() {
        card.push(Block::Details(DetailTable { rows }));
    }

    Ok(vec![Block::KeepTogether(card), Block::Spacer(EVENT_SPACING)])
}
