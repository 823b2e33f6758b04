//! The demonstration trip shipped with the CLI.

use tripsheet_itinerary::{Day, Event, Itinerary};

/// A three-day European trip touching every built-in event kind.
pub fn sample_itinerary() -> Itinerary {
    Itinerary::new("European Adventure")
        .with_destination("Paris \u{2192} Rome \u{2192} Barcelona")
        .with_dates("June 15-25, 2024")
        .with_day(
            Day::new(1)
                .with_date("Saturday, June 15")
                .with_event(
                    Event::new("flight")
                        .at("10:30 AM")
                        .with_field("airline", "Air France AF 334")
                        .with_field("from", "New York JFK")
                        .with_field("to", "Paris CDG")
                        .with_field("confirmation", "ABC123XYZ"),
                )
                .with_event(
                    Event::new("transport")
                        .at("3:00 PM")
                        .with_field("details", "Airport shuttle to hotel")
                        .with_field("company", "Paris Shuttle Service"),
                )
                .with_event(
                    Event::new("hotel")
                        .at("4:30 PM")
                        .with_field("name", "Hotel Le Marais")
                        .with_field("address", "12 Rue des Archives, 75004 Paris")
                        .with_field("check_in", "June 15")
                        .with_field("check_out", "June 18")
                        .with_field("confirmation", "HTL456789"),
                ),
        )
        .with_day(
            Day::new(2)
                .with_date("Sunday, June 16")
                .with_event(
                    Event::new("activity")
                        .at("9:00 AM")
                        .with_field("name", "Eiffel Tower Visit")
                        .with_field("address", "Champ de Mars, 5 Avenue Anatole")
                        .with_field("notes", "Skip-the-line tickets already purchased"),
                )
                .with_event(
                    Event::new("restaurant")
                        .at("1:00 PM")
                        .with_field("name", "Le Petit Cler")
                        .with_field("address", "29 Rue Cler, 75007 Paris")
                        .with_field("reservation", "Confirmed for 2 people")
                        .with_field("notes", "Try the duck confit!"),
                )
                .with_event(
                    Event::new("activity")
                        .at("3:30 PM")
                        .with_field("name", "Louvre Museum")
                        .with_field("address", "Rue de Rivoli, 75001 Paris")
                        .with_field("notes", "Timed entry at 3:30 PM - Ticket #ML789456"),
                ),
        )
        .with_day(
            Day::new(3)
                .with_date("Monday, June 17")
                .with_event(
                    Event::new("activity")
                        .at("10:00 AM")
                        .with_field("name", "Montmartre Walking Tour")
                        .with_field("meeting_point", "Place du Tertre")
                        .with_field("guide", "Marie - +33 6 12 34 56 78"),
                )
                .with_event(
                    Event::new("restaurant")
                        .at("7:00 PM")
                        .with_field("name", "L'Ami Jean")
                        .with_field("address", "27 Rue Malar, 75007 Paris")
                        .with_field("reservation", "Confirmed - mention Booking.com"),
                )
                .with_event(Event::new("other").with_field("notes", "Pack for the train to Rome")),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_valid() {
        let trip = sample_itinerary();
        assert!(trip.validate().is_ok());
        assert_eq!(trip.days.len(), 3);
        assert_eq!(trip.days[0].events[2].detail_fields().count(), 5);
    }
}
