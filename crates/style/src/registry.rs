//! The fixed set of named text styles used by itinerary documents.
//!
//! Styles are looked up by name at render time. The standard registry is
//! built once on first use and never changes afterwards, so it can be shared
//! freely across threads.

use crate::font::FontWeight;
use crate::text::TextAlign;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tripsheet_types::Color;

/// Raised when a style name is not part of the registry. This always
/// indicates a defect in the caller, never bad itinerary data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown style '{0}'")]
pub struct UnknownStyleError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleName {
    TripTitle,
    TripSubtitle,
    DayHeader,
    EventType,
    EventDetails,
    EventLabel,
}

impl StyleName {
    pub const ALL: [StyleName; 6] = [
        StyleName::TripTitle,
        StyleName::TripSubtitle,
        StyleName::DayHeader,
        StyleName::EventType,
        StyleName::EventDetails,
        StyleName::EventLabel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleName::TripTitle => "TripTitle",
            StyleName::TripSubtitle => "TripSubtitle",
            StyleName::DayHeader => "DayHeader",
            StyleName::EventType => "EventType",
            StyleName::EventDetails => "EventDetails",
            StyleName::EventLabel => "EventLabel",
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleName {
    type Err = UnknownStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownStyleError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleDefinition {
    pub name: StyleName,
    pub font_size: f32,
    /// Baseline-to-baseline distance for wrapped lines.
    pub line_height: f32,
    pub color: Color,
    pub weight: FontWeight,
    pub alignment: TextAlign,
    pub spacing_before: f32,
    pub spacing_after: f32,
}

impl StyleDefinition {
    fn new(name: StyleName, font_size: f32, color: Color) -> Self {
        Self {
            name,
            font_size,
            line_height: font_size * 1.2,
            color,
            weight: FontWeight::Regular,
            alignment: TextAlign::Left,
            spacing_before: 0.0,
            spacing_after: 0.0,
        }
    }

    fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    fn centered(mut self) -> Self {
        self.alignment = TextAlign::Center;
        self
    }

    fn leading(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    fn spacing(mut self, before: f32, after: f32) -> Self {
        self.spacing_before = before;
        self.spacing_after = after;
        self
    }
}

static STANDARD: Lazy<StyleRegistry> = Lazy::new(StyleRegistry::standard);

/// Lookup table from style name to definition.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: HashMap<StyleName, StyleDefinition>,
}

impl StyleRegistry {
    /// The process-wide standard registry.
    pub fn global() -> &'static StyleRegistry {
        &STANDARD
    }

    pub fn standard() -> Self {
        Self::default()
            .with_style(
                StyleDefinition::new(StyleName::TripTitle, 28.0, Color::rgb(0x1a, 0x1a, 0x1a))
                    .bold()
                    .centered()
                    .spacing(0.0, 6.0),
            )
            .with_style(
                StyleDefinition::new(StyleName::TripSubtitle, 12.0, Color::rgb(0x66, 0x66, 0x66))
                    .centered()
                    .spacing(0.0, 30.0),
            )
            .with_style(
                StyleDefinition::new(StyleName::DayHeader, 18.0, Color::rgb(0x2c, 0x3e, 0x50))
                    .bold()
                    .spacing(24.0, 12.0),
            )
            .with_style(StyleDefinition::new(StyleName::EventType, 11.0, Color::WHITE).bold())
            .with_style(StyleDefinition::new(StyleName::EventDetails, 10.0, Color::rgb(0x33, 0x33, 0x33)).leading(14.0))
            .with_style(
                StyleDefinition::new(StyleName::EventLabel, 9.0, Color::rgb(0x88, 0x88, 0x88))
                    .bold()
                    .leading(12.0),
            )
    }

    /// Adds or replaces the definition registered under `style.name`.
    pub fn with_style(mut self, style: StyleDefinition) -> Self {
        self.styles.insert(style.name, style);
        self
    }

    /// Looks a style up by its textual name.
    pub fn style(&self, name: &str) -> Result<&StyleDefinition, UnknownStyleError> {
        self.get(name.parse()?)
    }

    pub fn get(&self, name: StyleName) -> Result<&StyleDefinition, UnknownStyleError> {
        self.styles
            .get(&name)
            .ok_or_else(|| UnknownStyleError(name.as_str().to_string()))
    }
}
