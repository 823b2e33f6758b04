//! The vertical block model handed to the paginator.

use tripsheet_style::StyleName;
use tripsheet_types::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Fixed vertical gap. Dropped when it falls at a page break.
    Spacer(f32),
    Paragraph(Paragraph),
    EventHeader(EventHeader),
    Details(DetailTable),
    /// Children that should land on the same page when they fit on one.
    KeepTogether(Vec<Block>),
}

impl Block {
    pub fn spacer(height: f32) -> Self {
        Block::Spacer(height)
    }

    pub fn paragraph(text: impl Into<String>, style: StyleName) -> Self {
        Block::Paragraph(Paragraph::new(text, style))
    }

    /// Number of detail rows contained in this block, including nested groups.
    pub fn detail_row_count(&self) -> usize {
        match self {
            Block::Details(table) => table.rows.len(),
            Block::KeepTogether(children) => children.iter().map(Block::detail_row_count).sum(),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub style: StyleName,
    /// Outline title registered at the position of the first line.
    pub anchor: Option<String>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, style: StyleName) -> Self {
        Self {
            text: text.into(),
            style,
            anchor: None,
        }
    }

    pub fn with_anchor(mut self, title: impl Into<String>) -> Self {
        self.anchor = Some(title.into());
        self
    }
}

/// Full-width colored bar with the event label on the left and the
/// optional time on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct EventHeader {
    pub label: String,
    pub time: Option<String>,
    pub background: Color,
}

/// Two-column label/value table drawn under an event header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailTable {
    pub rows: Vec<DetailRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
