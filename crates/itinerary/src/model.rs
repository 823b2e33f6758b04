use crate::error::ModelError;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Keys that never become detail rows. `type` is the historical spelling of `kind`.
pub const RESERVED_KEYS: [&str; 3] = ["kind", "type", "time"];

/// Header label used when an event carries no kind.
pub const FALLBACK_KIND_LABEL: &str = "Event";

pub(crate) fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    pub days: Vec<Day>,
}

impl Itinerary {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            destination: None,
            dates: None,
            days: Vec::new(),
        }
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_dates(mut self, dates: impl Into<String>) -> Self {
        self.dates = Some(dates.into());
        self
    }

    pub fn with_day(mut self, day: Day) -> Self {
        self.days.push(day);
        self
    }

    /// Destination and dates that are present and not blank, in display order.
    pub fn subtitle_parts(&self) -> Vec<&str> {
        [self.destination.as_deref(), self.dates.as_deref()]
            .into_iter()
            .filter_map(non_blank)
            .collect()
    }

    /// Checks the invariants the composer relies on. Runs before any
    /// rendering work so that a rejected itinerary never produces output.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.title.trim().is_empty() {
            return Err(ModelError::EmptyTitle);
        }

        for day in &self.days {
            for (event_index, event) in day.events.iter().enumerate() {
                if let Some(key) = event.fields.keys().find(|k| k.trim().is_empty()) {
                    return Err(ModelError::InvalidEvent {
                        day_number: day.day_number,
                        event_index,
                        reason: format!("field name {:?} is blank", key),
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Day {
    pub day_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub events: Vec<Event>,
}

impl Day {
    pub fn new(day_number: u32) -> Self {
        Self {
            day_number,
            date: None,
            events: Vec::new(),
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// `"Day N"`, followed by `" • date"` when a date is present.
    pub fn heading(&self) -> String {
        match non_blank(self.date.as_deref()) {
            Some(date) => format!("Day {} \u{2022} {}", self.day_number, date.trim()),
            None => format!("Day {}", self.day_number),
        }
    }
}

/// One scheduled item. `fields` holds everything except the reserved keys,
/// in the order the caller supplied them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Event {
    pub kind: Option<String>,
    pub time: Option<String>,
    pub fields: IndexMap<String, String>,
}

impl Event {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn at(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Sets a field. Reserved keys update the kind or time instead.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_field(key, value);
        self
    }

    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "kind" | "type" => self.kind = Some(value),
            "time" => self.time = Some(value),
            _ => {
                self.fields.insert(key, value);
            }
        }
    }

    /// The kind as written by the caller, or `"Event"` when absent or blank.
    pub fn kind_label(&self) -> &str {
        non_blank(self.kind.as_deref())
            .map(str::trim)
            .unwrap_or(FALLBACK_KIND_LABEL)
    }

    pub fn display_time(&self) -> Option<&str> {
        non_blank(self.time.as_deref()).map(str::trim)
    }

    /// Fields that produce detail rows: non-reserved keys with non-empty
    /// values, in insertion order. A whitespace-only value still gets a row.
    pub fn detail_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter(|(key, value)| !is_reserved_key(key) && !value.is_empty())
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl Serialize for Event {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = self.fields.len() + self.kind.is_some() as usize + self.time.is_some() as usize;
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(kind) = &self.kind {
            map.serialize_entry("kind", kind)?;
        }
        if let Some(time) = &self.time {
            map.serialize_entry("time", time)?;
        }
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_keys_route_to_header() {
        let event = Event::default()
            .with_field("type", "flight")
            .with_field("time", "8:00 AM")
            .with_field("airline", "UA1");
        assert_eq!(event.kind.as_deref(), Some("flight"));
        assert_eq!(event.display_time(), Some("8:00 AM"));
        assert_eq!(event.fields.len(), 1);
    }

    #[test]
    fn detail_fields_skip_empty_values_and_keep_order() {
        let event = Event::new("hotel")
            .with_field("name", "Hotel Le Marais")
            .with_field("address", "")
            .with_field("check_in", "June 15")
            .with_field("notes", "   ")
            .with_field("confirmation", "HTL456789");
        let keys: Vec<_> = event.detail_fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "check_in", "notes", "confirmation"]);
    }

    #[test]
    fn directly_inserted_reserved_keys_are_not_details() {
        let mut event = Event::new("other");
        event.fields.insert("time".into(), "noon".into());
        event.fields.insert("name".into(), "Free Time".into());
        assert_eq!(event.detail_fields().count(), 1);
    }

    #[test]
    fn kind_label_falls_back() {
        assert_eq!(Event::default().kind_label(), "Event");
        assert_eq!(Event::new("  ").kind_label(), "Event");
        assert_eq!(Event::new("car_rental").kind_label(), "car_rental");
    }

    #[test]
    fn day_heading_includes_date_only_when_present() {
        assert_eq!(Day::new(1).with_date("Fri").heading(), "Day 1 \u{2022} Fri");
        assert_eq!(Day::new(3).heading(), "Day 3");
        assert_eq!(Day::new(2).with_date("").heading(), "Day 2");
    }

    #[test]
    fn subtitle_parts_skip_blank_values() {
        let trip = Itinerary::new("Weekend").with_destination("San Francisco").with_dates(" ");
        assert_eq!(trip.subtitle_parts(), vec!["San Francisco"]);
    }

    #[test]
    fn validate_rejects_blank_title() {
        assert!(matches!(
            Itinerary::new("   ").validate(),
            Err(ModelError::EmptyTitle)
        ));
    }

    #[test]
    fn validate_rejects_blank_field_name() {
        let trip = Itinerary::new("Trip")
            .with_day(Day::new(4).with_event(Event::new("other")).with_event(Event::new("flight").with_field(" ", "x")));
        match trip.validate() {
            Err(ModelError::InvalidEvent {
                day_number,
                event_index,
                ..
            }) => {
                assert_eq!(day_number, 4);
                assert_eq!(event_index, 1);
            }
            other => panic!("expected InvalidEvent, got {:?}", other),
        }
    }

    #[test]
    fn event_serializes_flat() {
        let event = Event::new("flight").at("8:00 AM").with_field("airline", "UA1");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"kind":"flight","time":"8:00 AM","airline":"UA1"}"#);
    }
}
