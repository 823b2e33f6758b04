use super::event::compose_event;
use crate::error::PipelineError;
use log::debug;
use tripsheet_itinerary::{ColorMap, Day};
use tripsheet_layout::{Block, Paragraph};
use tripsheet_style::StyleName;
use tripsheet_style::dimension::POINTS_PER_INCH;

/// Gap after the last event of a day, on top of that event's own spacing.
pub const DAY_SPACING: f32 = 0.15 * POINTS_PER_INCH;

/// Blocks for one day: the heading (an outline anchor), every event in
/// order, then the day spacing.
///
/// The heading shares a keep-together group with the first event card so a
/// day never starts with a heading stranded at the foot of a page.
pub fn compose_day(day: &Day, colors: &ColorMap) -> Result<Vec<Block>, PipelineError> {
    let heading = day.heading();
    let heading_block = Block::Paragraph(Paragraph::new(heading.clone(), StyleName::DayHeader).with_anchor(heading));

    let mut events = Vec::with_capacity(day.events.len() * 2);
    for (index, event) in day.events.iter().enumerate() {
        events.extend(compose_event(day.day_number, index, event, colors)?);
    }

    let mut blocks = Vec::with_capacity(events.len() + 2);
    let mut events = events.into_iter();
    match events.next() {
        Some(first_card) => blocks.push(Block::KeepTogether(vec![heading_block, first_card])),
        None => blocks.push(heading_block),
    }
    blocks.extend(events);
    blocks.push(Block::Spacer(DAY_SPACING));

    debug!("Composed day {} with {} event(s)", day.day_number, day.events.len());
    Ok(blocks)
}
