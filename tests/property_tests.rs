mod common;

use common::fixtures::*;
use common::{TestResult, init_logging};
use tripsheet::{ColorMap, Event, Generator, Itinerary, RenderOptions, render};
use tripsheet_itinerary::RESERVED_KEYS;
use tripsheet_layout::Page;

const LABEL_GRAY: tripsheet::Color = tripsheet::Color::rgb(0x88, 0x88, 0x88);

/// Detail labels in paint order, without the trailing colon.
fn detail_labels(pages: &[Page]) -> Vec<String> {
    pages
        .iter()
        .flat_map(|p| p.elements.iter())
        .filter_map(|el| el.as_text())
        .filter(|t| t.color == LABEL_GRAY)
        .map(|t| t.content.trim_end_matches(':').to_string())
        .collect()
}

fn permutations(items: &[&'static str]) -> Vec<Vec<&'static str>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for (i, first) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, *first);
            out.push(tail);
        }
    }
    out
}

#[test]
fn test_row_count_matches_non_empty_fields() -> TestResult {
    init_logging();

    let cases = [
        Event::new("hotel").with_field("name", "Hotel Le Marais").with_field("notes", ""),
        Event::new("hotel").with_field("a", " ").with_field("b", "").with_field("c", "x"),
        Event::new("hotel").with_field("notes", " ").with_field("name", "X"),
        Event::new("other").with_field("tabs", "\t\t").with_field("blank", ""),
        Event::new("flight").at("10:30 AM"),
        Event::default().with_field("type", "flight").with_field("time", "noon").with_field("gate", "B12"),
        event_with_rows("activity", 7),
    ];
    let generator = Generator::new();
    for event in cases {
        let expected = event
            .fields
            .iter()
            .filter(|(key, value)| !RESERVED_KEYS.contains(&key.as_str()) && !value.is_empty())
            .count();
        let pages = generator.layout(&itinerary_with_event(event))?;
        assert_eq!(detail_labels(&pages).len(), expected);
    }
    Ok(())
}

#[test]
fn test_row_order_follows_insertion_for_every_permutation() -> TestResult {
    init_logging();

    let generator = Generator::new();
    for order in permutations(&["airline", "from", "to", "seat"]) {
        let event = order
            .iter()
            .fold(Event::new("flight"), |event, key| event.with_field(*key, "value"));
        let pages = generator.layout(&itinerary_with_event(event))?;
        let expected: Vec<String> = order.iter().map(|k| tripsheet::compose::humanize_label(k)).collect();
        assert_eq!(detail_labels(&pages), expected);
    }
    Ok(())
}

#[test]
fn test_color_lookup_is_case_insensitive_and_total() {
    let colors = ColorMap::default();
    for kind in ["flight", "FLIGHT", " Flight ", "fLiGhT"] {
        assert_eq!(colors.resolve(kind), colors.resolve("flight"));
    }
    for kind in ["", "   ", "car_rental", "\u{1f680}", "x".repeat(500).as_str()] {
        assert_eq!(colors.resolve(kind), colors.fallback());
    }
}

#[test]
fn test_rendering_twice_gives_identical_artifacts() -> TestResult {
    init_logging();

    let dir = tempfile::tempdir()?;
    let first = dir.path().join("first.pdf");
    let second = dir.path().join("second.pdf");
    let trip = long_trip(3, 4);

    render(&trip, &first, &ColorMap::default())?;
    render(&trip, &second, &ColorMap::default())?;
    assert_eq!(std::fs::read(&first)?, std::fs::read(&second)?);
    Ok(())
}

#[test]
fn test_timestamped_output_differs_only_in_metadata() -> TestResult {
    init_logging();

    let trip = weekend();
    let plain = Generator::new().render_to_bytes(&trip)?;
    let stamped = Generator::new()
        .with_options(RenderOptions::timestamped())
        .render_to_bytes(&trip)?;

    let plain = lopdf::Document::load_mem(&plain)?;
    let stamped = lopdf::Document::load_mem(&stamped)?;
    assert_eq!(plain.extract_text(&[1])?, stamped.extract_text(&[1])?);

    let info_id = stamped.trailer.get(b"Info")?.as_reference()?;
    assert!(stamped.get_dictionary(info_id)?.get(b"CreationDate").is_ok());
    let info_id = plain.trailer.get(b"Info")?.as_reference()?;
    assert!(plain.get_dictionary(info_id)?.get(b"CreationDate").is_err());
    Ok(())
}

#[test]
fn test_every_valid_itinerary_renders() -> TestResult {
    init_logging();

    let trips = [
        Itinerary::new("Only a title"),
        weekend(),
        long_trip(1, 1),
        tripsheet::sample_itinerary(),
    ];
    for trip in &trips {
        let bytes = Generator::new().render_to_bytes(trip)?;
        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"%PDF-"));
    }
    Ok(())
}
