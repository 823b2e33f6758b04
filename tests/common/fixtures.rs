use tripsheet::{Day, Event, Itinerary};

/// The one-flight weekend used by the scenario tests.
pub fn weekend() -> Itinerary {
    Itinerary::new("Weekend").with_day(
        Day::new(1).with_date("Fri").with_event(
            Event::new("flight")
                .at("8:00 AM")
                .with_field("airline", "UA1")
                .with_field("confirmation", "X1"),
        ),
    )
}

pub fn itinerary_with_event(event: Event) -> Itinerary {
    Itinerary::new("Trip").with_day(Day::new(1).with_event(event))
}

/// A card with `rows` detail rows.
pub fn event_with_rows(kind: &str, rows: usize) -> Event {
    (0..rows).fold(Event::new(kind).at("9:00 AM"), |event, i| {
        event.with_field(format!("field_{}", i), format!("value number {}", i))
    })
}

/// Enough days and events to run over several Letter pages.
pub fn long_trip(days: u32, events_per_day: usize) -> Itinerary {
    let kinds = ["flight", "hotel", "activity", "restaurant", "transport", "other"];
    (1..=days).fold(
        Itinerary::new("Grand Tour")
            .with_destination("Lisbon \u{2192} Porto")
            .with_dates("May 1-30"),
        |trip, n| {
            let day = (0..events_per_day).fold(Day::new(n).with_date(format!("May {}", n)), |day, i| {
                day.with_event(event_with_rows(kinds[i % kinds.len()], 3 + i % 4))
            });
            trip.with_day(day)
        },
    )
}
