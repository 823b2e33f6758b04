use super::day::compose_day;
use crate::error::PipelineError;
use log::debug;
use tripsheet_itinerary::{ColorMap, Itinerary};
use tripsheet_layout::Block;
use tripsheet_style::StyleName;
use tripsheet_style::dimension::POINTS_PER_INCH;

/// Gap above the title. Also stands in for a missing subtitle.
pub const TOP_SPACING: f32 = 0.3 * POINTS_PER_INCH;

pub const SUBTITLE_SEPARATOR: &str = " \u{2022} ";

/// The whole document as one flow: spacer, title, subtitle (or spacing),
/// then every day in order. The title is painted without surrounding
/// whitespace.
pub fn compose_itinerary(itinerary: &Itinerary, colors: &ColorMap) -> Result<Vec<Block>, PipelineError> {
    let title = itinerary.title.trim();
    if title.is_empty() {
        return Err(PipelineError::EmptyTitle);
    }

    let mut blocks = vec![
        Block::Spacer(TOP_SPACING),
        Block::paragraph(title, StyleName::TripTitle),
    ];

    let subtitle = itinerary.subtitle_parts();
    if subtitle.is_empty() {
        blocks.push(Block::Spacer(TOP_SPACING));
    } else {
        blocks.push(Block::paragraph(subtitle.join(SUBTITLE_SEPARATOR), StyleName::TripSubtitle));
    }

    for day in &itinerary.days {
        blocks.extend(compose_day(day, colors)?);
    }

    debug!(
        "Composed '{}' into {} block(s) across {} day(s)",
        title,
        blocks.len(),
        itinerary.days.len()
    );
    Ok(blocks)
}
