//! Intake of itineraries in the loosely-typed JSON shape produced by the
//! data-entry front end.
//!
//! Object key order is significant: it becomes the detail-row order.

use crate::error::ModelError;
use crate::model::{Day, Event, Itinerary};
use serde_json::{Map, Value};

/// Text-like scalar as a string. `null` means absent; containers are rejected.
fn scalar_text(value: &Value) -> Result<Option<String>, &'static str> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) => Err("an array"),
        Value::Object(_) => Err("an object"),
    }
}

impl Itinerary {
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(&value)
    }

    pub fn from_json_value(value: &Value) -> Result<Self, ModelError> {
        let root = value
            .as_object()
            .ok_or_else(|| ModelError::Malformed("itinerary must be a JSON object".into()))?;

        let title = match root.get("title") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
            _ => return Err(ModelError::EmptyTitle),
        };

        let optional = |key: &str| -> Result<Option<String>, ModelError> {
            root.get(key)
                .map(scalar_text)
                .transpose()
                .map(Option::flatten)
                .map_err(|found| ModelError::Malformed(format!("'{}' must be text, found {}", key, found)))
        };

        let days = match root.get("days") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(days)) => days
                .iter()
                .enumerate()
                .map(|(position, day)| parse_day(position, day))
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(ModelError::Malformed("'days' must be an array".into())),
        };

        log::debug!("Parsed itinerary '{}' with {} day(s)", title, days.len());

        Ok(Itinerary {
            title,
            destination: optional("destination")?,
            dates: optional("dates")?,
            days,
        })
    }
}

fn parse_day(position: usize, value: &Value) -> Result<Day, ModelError> {
    let invalid = |reason: String| ModelError::InvalidDay { position, reason };
    let day = value
        .as_object()
        .ok_or_else(|| invalid("day must be a JSON object".into()))?;

    let day_number = match day.get("day_number") {
        None | Some(Value::Null) => u32::try_from(position + 1)
            .map_err(|_| invalid("too many days".into()))?,
        Some(Value::Number(n)) => n
            .as_u64()
            .filter(|n| *n > 0)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| invalid(format!("day_number must be a positive integer, found {}", n)))?,
        Some(Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| invalid(format!("day_number must be a positive integer, found {:?}", s)))?,
        Some(other) => return Err(invalid(format!("day_number must be a positive integer, found {}", other))),
    };

    let date = match day.get("date") {
        Some(value) => scalar_text(value)
            .map_err(|found| invalid(format!("date must be text, found {}", found)))?,
        None => None,
    };

    let events = match day.get("events") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(events)) => events
            .iter()
            .enumerate()
            .map(|(event_index, event)| parse_event(day_number, event_index, event))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(invalid("events must be an array".into())),
    };

    Ok(Day {
        day_number,
        date,
        events,
    })
}

fn parse_event(day_number: u32, event_index: usize, value: &Value) -> Result<Event, ModelError> {
    let invalid = |reason: String| ModelError::InvalidEvent {
        day_number,
        event_index,
        reason,
    };
    let object: &Map<String, Value> = value
        .as_object()
        .ok_or_else(|| invalid("event must be a JSON object".into()))?;

    let mut event = Event::default();
    for (key, value) in object {
        match key.as_str() {
            "kind" | "type" => match value {
                Value::String(kind) => {
                    // An explicit `kind` wins over the legacy `type` key.
                    if key == "kind" || event.kind.is_none() {
                        event.kind = Some(kind.clone());
                    }
                }
                Value::Null => {}
                other => {
                    return Err(invalid(format!("{} must be a string, found {}", key, other)));
                }
            },
            "time" => {
                event.time = scalar_text(value)
                    .map_err(|found| invalid(format!("time must be text, found {}", found)))?;
            }
            _ => {
                let text = scalar_text(value)
                    .map_err(|found| invalid(format!("field '{}' must be text, found {}", key, found)))?;
                if let Some(text) = text {
                    event.fields.insert(key.clone(), text);
                }
            }
        }
    }
    Ok(event)
}
