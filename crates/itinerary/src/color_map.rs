use crate::error::ModelError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use tripsheet_types::Color;

/// Header colors for the built-in event kinds.
pub const DEFAULT_KIND_COLORS: [(&str, Color); 6] = [
    ("flight", Color::rgb(0x34, 0x98, 0xdb)),
    ("hotel", Color::rgb(0xe7, 0x4c, 0x3c)),
    ("activity", Color::rgb(0x2e, 0xcc, 0x71)),
    ("restaurant", Color::rgb(0xf3, 0x9c, 0x12)),
    ("transport", Color::rgb(0x9b, 0x59, 0xb6)),
    ("other", Color::rgb(0x95, 0xa5, 0xa6)),
];

const OTHER: Color = Color::rgb(0x95, 0xa5, 0xa6);

/// Key used in serialized maps for the fallback color.
const FALLBACK_KEY: &str = "default";

/// Maps event kinds to header colors.
///
/// Kinds are normalized (trimmed, lower-cased) both when entries are added
/// and when they are looked up, so `"Car_Rental"` and `"car_rental"` always
/// address the same entry. Lookups never fail: unknown kinds get the
/// fallback color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    entries: HashMap<String, Color>,
    fallback: Color,
}

impl Default for ColorMap {
    fn default() -> Self {
        let entries = DEFAULT_KIND_COLORS
            .iter()
            .map(|(kind, color)| (kind.to_string(), *color))
            .collect();
        Self {
            entries,
            fallback: OTHER,
        }
    }
}

impl ColorMap {
    /// A map with no kind entries at all; everything resolves to `fallback`.
    pub fn empty(fallback: Color) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    pub fn normalize_kind(kind: &str) -> String {
        kind.trim().to_lowercase()
    }

    pub fn insert(&mut self, kind: &str, color: Color) -> Option<Color> {
        self.entries.insert(Self::normalize_kind(kind), color)
    }

    pub fn with_kind(mut self, kind: &str, color: Color) -> Self {
        self.insert(kind, color);
        self
    }

    pub fn set_fallback(&mut self, color: Color) {
        self.fallback = color;
    }

    pub fn fallback(&self) -> Color {
        self.fallback
    }

    pub fn get(&self, kind: &str) -> Option<Color> {
        self.entries.get(&Self::normalize_kind(kind)).copied()
    }

    pub fn resolve(&self, kind: &str) -> Color {
        self.get(kind).unwrap_or(self.fallback)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies `kind -> "#hex"` overrides on top of this map. The key
    /// `"default"` replaces the fallback color.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Result<(), ModelError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (kind, hex) in overrides {
            let color = Color::from_hex(hex).map_err(|source| ModelError::InvalidColor {
                kind: kind.to_string(),
                source,
            })?;
            if Self::normalize_kind(kind) == FALLBACK_KEY {
                self.fallback = color;
            } else {
                self.insert(kind, color);
            }
        }
        Ok(())
    }

    /// Reads a JSON object of overrides and layers it over the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let overrides: BTreeMap<String, String> = serde_json::from_str(json)?;
        let mut map = Self::default();
        map.apply_overrides(overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
        log::debug!("Loaded {} color override(s)", overrides.len());
        Ok(map)
    }
}

/// Writes every entry plus the fallback under `"default"`, sorted by kind.
impl Serialize for ColorMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut sorted: BTreeMap<&str, &Color> =
            self.entries.iter().map(|(k, v)| (k.as_str(), v)).collect();
        sorted.insert(FALLBACK_KEY, &self.fallback);
        sorted.serialize(serializer)
    }
}

/// Reads an object of overrides and layers it over [`ColorMap::default`],
/// the same way [`ColorMap::from_json_str`] does. Built-in kinds missing
/// from the input keep their default colors, so a map built from
/// [`ColorMap::empty`] reads back with the built-in kinds added.
impl<'de> Deserialize<'de> for ColorMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let overrides = BTreeMap::<String, String>::deserialize(deserializer)?;
        let mut map = ColorMap::default();
        map.apply_overrides(overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .map_err(de::Error::custom)?;
        Ok(map)
    }
}
