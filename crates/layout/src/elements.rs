use crate::fonts::FontFace;
use tripsheet_types::{Color, OutlineEntry, Rect};

/// A drawable primitive with its box in top-left page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match &self.element {
            LayoutElement::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    /// One line of text. Its box is the line box; `x` is where the first
    /// glyph starts, alignment has already been applied.
    Text(TextElement),
    Rectangle(RectElement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: FontFace,
    pub font_size: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectElement {
    pub fill: Color,
}

/// A finished page: its drawing list in paint order and the outline
/// entries that point into it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub elements: Vec<PositionedElement>,
    pub outline: Vec<OutlineEntry>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements
            .iter()
            .filter_map(PositionedElement::as_text)
            .map(|t| t.content.as_str())
    }
}
