//! Measures blocks into slices and flows the slices onto pages.
//!
//! A slice is the smallest unit the paginator moves: one line of a paragraph,
//! a whole event header, or one detail row. Slices never straddle a page
//! boundary. Detail rows taller than a page are cut into one slice per line.

use crate::LayoutError;
use crate::algorithms::pagination::{check_fit, fits_empty_page};
use crate::block::{Block, DetailTable, EventHeader, Paragraph};
use crate::config::LayoutConfig;
use crate::elements::{LayoutElement, Page, PositionedElement, TextElement};
use crate::fonts::FontFace;
use crate::painting::box_painter;
use crate::text::wrap_text;
use log::{debug, warn};
use tripsheet_style::{PageLayout, StyleDefinition, StyleName, StyleRegistry, TextAlign};
use tripsheet_types::{OutlineEntry, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SliceKind {
    /// Vertical whitespace; discarded at page breaks.
    Gap,
    Content,
}

/// Elements are positioned relative to the slice's top-left corner.
#[derive(Debug, Clone)]
struct Slice {
    kind: SliceKind,
    height: f32,
    elements: Vec<PositionedElement>,
    anchor: Option<String>,
}

impl Slice {
    fn gap(height: f32) -> Self {
        Self {
            kind: SliceKind::Gap,
            height,
            elements: Vec::new(),
            anchor: None,
        }
    }

    fn content(height: f32, elements: Vec<PositionedElement>) -> Self {
        Self {
            kind: SliceKind::Content,
            height,
            elements,
            anchor: None,
        }
    }
}

pub struct LayoutEngine<'a> {
    styles: &'a StyleRegistry,
    content: Rect,
    config: LayoutConfig,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(page: PageLayout, styles: &'a StyleRegistry) -> Result<Self, LayoutError> {
        let content = page.content_rect();
        if content.width <= 0.0 || content.height <= 0.0 {
            return Err(LayoutError::InvalidPage(format!(
                "margins leave a content area of {:.1}x{:.1}pt",
                content.width, content.height
            )));
        }
        Ok(Self {
            styles,
            content,
            config: LayoutConfig::default(),
        })
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// The area inside the margins that blocks flow into.
    pub fn content_area(&self) -> Rect {
        self.content
    }

    pub fn paginate(&self, blocks: &[Block]) -> Result<Vec<Page>, LayoutError> {
        let mut cursor = PageCursor::new(self.content);
        for block in blocks {
            let mut slices = Vec::new();
            self.measure(block, &mut slices)?;
            match block {
                Block::KeepTogether(_) => cursor.place_group(slices),
                _ => slices.into_iter().for_each(|slice| cursor.place(slice)),
            }
        }
        let pages = cursor.finish();
        debug!("Paginated {} block(s) onto {} page(s)", blocks.len(), pages.len());
        Ok(pages)
    }

    fn measure(&self, block: &Block, out: &mut Vec<Slice>) -> Result<(), LayoutError> {
        match block {
            Block::Spacer(height) => {
                if *height > 0.0 {
                    out.push(Slice::gap(*height));
                }
            }
            Block::Paragraph(paragraph) => self.measure_paragraph(paragraph, out)?,
            Block::EventHeader(header) => out.push(self.measure_header(header)?),
            Block::Details(table) => self.measure_details(table, out)?,
            // Nested groups merge into the enclosing one.
            Block::KeepTogether(children) => {
                for child in children {
                    self.measure(child, out)?;
                }
            }
        }
        Ok(())
    }

    fn measure_paragraph(&self, paragraph: &Paragraph, out: &mut Vec<Slice>) -> Result<(), LayoutError> {
        let style = self.styles.get(paragraph.style)?;
        let face = FontFace::for_weight(style.weight);
        let width = self.content.width;

        if style.spacing_before > 0.0 {
            out.push(Slice::gap(style.spacing_before));
        }

        let lines = wrap_text(&paragraph.text, face, style.font_size, width);
        for (i, line) in lines.into_iter().enumerate() {
            let element = text_line(line, style, 0.0, 0.0, width);
            let mut slice = Slice::content(style.line_height, vec![element]);
            if i == 0 {
                slice.anchor = paragraph.anchor.clone();
            }
            out.push(slice);
        }

        if style.spacing_after > 0.0 {
            out.push(Slice::gap(style.spacing_after));
        }
        Ok(())
    }

    fn measure_header(&self, header: &EventHeader) -> Result<Slice, LayoutError> {
        let style = self.styles.get(StyleName::EventType)?;
        let face = FontFace::for_weight(style.weight);
        let card = &self.config.card;
        let width = self.content.width;
        let inner = (width - 2.0 * card.header_padding_x).max(1.0);

        let time_lines = match header.time.as_deref() {
            Some(time) => wrap_text(time, face, style.font_size, inner / 2.0),
            None => Vec::new(),
        };
        let time_width = time_lines
            .iter()
            .map(|l| face.text_width(l, style.font_size))
            .fold(0.0, f32::max);
        let label_width = if time_lines.is_empty() {
            inner
        } else {
            (inner - time_width - card.header_padding_x).max(1.0)
        };
        let label_lines = wrap_text(&header.label, face, style.font_size, label_width);

        let rows = label_lines.len().max(time_lines.len()).max(1);
        let height = 2.0 * card.header_padding_y + rows as f32 * style.line_height;

        let mut elements = vec![box_painter::fill(Rect::new(0.0, 0.0, width, height), header.background)];
        for (i, line) in label_lines.into_iter().enumerate() {
            let y = card.header_padding_y + i as f32 * style.line_height;
            elements.push(text_line(line, style, card.header_padding_x, y, label_width));
        }
        let time_x = width - card.header_padding_x - time_width;
        for (i, line) in time_lines.into_iter().enumerate() {
            let y = card.header_padding_y + i as f32 * style.line_height;
            elements.push(aligned_text_line(line, style, time_x, y, time_width, TextAlign::Right));
        }

        Ok(Slice::content(height, elements))
    }

    fn measure_details(&self, table: &DetailTable, out: &mut Vec<Slice>) -> Result<(), LayoutError> {
        let label_style = self.styles.get(StyleName::EventLabel)?;
        let value_style = self.styles.get(StyleName::EventDetails)?;
        let label_face = FontFace::for_weight(label_style.weight);
        let value_face = FontFace::for_weight(value_style.weight);
        let card = &self.config.card;

        let width = self.content.width;
        let label_column = width * card.label_column_ratio;
        let label_text_width = (label_column - 2.0 * card.detail_padding_x).max(1.0);
        let value_x = label_column + card.detail_padding_x;
        let value_text_width = (width - label_column - 2.0 * card.detail_padding_x).max(1.0);

        let last_row = table.rows.len().saturating_sub(1);
        for (row_index, row) in table.rows.iter().enumerate() {
            let label = format!("{}{}", row.label, card.label_suffix);
            let label_lines = wrap_text(&label, label_face, label_style.font_size, label_text_width);
            let value_lines = wrap_text(&row.value, value_face, value_style.font_size, value_text_width);

            let content_height = (label_lines.len() as f32 * label_style.line_height)
                .max(value_lines.len() as f32 * value_style.line_height);
            let row_height = content_height + 2.0 * card.detail_padding_y;
            let ruled = row_index == last_row;

            if fits_empty_page(row_height, self.content) {
                let mut elements = vec![box_painter::fill(
                    Rect::new(0.0, 0.0, width, row_height),
                    card.details_background,
                )];
                for (i, line) in label_lines.into_iter().enumerate() {
                    let y = card.detail_padding_y + i as f32 * label_style.line_height;
                    elements.push(text_line(line, label_style, card.detail_padding_x, y, label_text_width));
                }
                for (i, line) in value_lines.into_iter().enumerate() {
                    let y = card.detail_padding_y + i as f32 * value_style.line_height;
                    elements.push(text_line(line, value_style, value_x, y, value_text_width));
                }
                if ruled {
                    elements.push(box_painter::rule_below(
                        Rect::new(0.0, 0.0, width, row_height),
                        card.rule_color,
                        card.rule_thickness,
                    ));
                }
                out.push(Slice::content(row_height, elements));
                continue;
            }

            warn!(
                "Detail row '{}' is {:.1}pt tall and exceeds the page; it will continue across pages",
                row.label, row_height
            );
            let line_count = label_lines.len().max(value_lines.len());
            let mut label_lines = label_lines.into_iter();
            let mut value_lines = value_lines.into_iter();
            for i in 0..line_count {
                let top = if i == 0 { card.detail_padding_y } else { 0.0 };
                let bottom = if i + 1 == line_count { card.detail_padding_y } else { 0.0 };
                let label_line = label_lines.next();
                let value_line = value_lines.next();
                let line_height = match (&label_line, &value_line) {
                    (Some(_), Some(_)) => label_style.line_height.max(value_style.line_height),
                    (Some(_), None) => label_style.line_height,
                    _ => value_style.line_height,
                };
                let height = top + line_height + bottom;
                let mut elements = vec![box_painter::fill(Rect::new(0.0, 0.0, width, height), card.details_background)];
                if let Some(line) = label_line {
                    elements.push(text_line(line, label_style, card.detail_padding_x, top, label_text_width));
                }
                if let Some(line) = value_line {
                    elements.push(text_line(line, value_style, value_x, top, value_text_width));
                }
                if ruled && bottom > 0.0 {
                    elements.push(box_painter::rule_below(
                        Rect::new(0.0, 0.0, width, height),
                        card.rule_color,
                        card.rule_thickness,
                    ));
                }
                out.push(Slice::content(height, elements));
            }
        }
        Ok(())
    }
}

fn text_line(content: String, style: &StyleDefinition, x: f32, y: f32, available: f32) -> PositionedElement {
    aligned_text_line(content, style, x, y, available, style.alignment)
}

/// One line of text positioned inside a box of width `available`
/// starting at `x`.
fn aligned_text_line(
    content: String,
    style: &StyleDefinition,
    x: f32,
    y: f32,
    available: f32,
    align: TextAlign,
) -> PositionedElement {
    let font = FontFace::for_weight(style.weight);
    let width = font.text_width(&content, style.font_size);
    let offset = match align {
        TextAlign::Left => 0.0,
        TextAlign::Center => ((available - width) / 2.0).max(0.0),
        TextAlign::Right => (available - width).max(0.0),
    };
    PositionedElement {
        x: x + offset,
        y,
        width,
        height: style.line_height,
        element: LayoutElement::Text(TextElement {
            content,
            font,
            font_size: style.font_size,
            color: style.color,
        }),
    }
}

/// Tracks the vertical position on the page being filled.
struct PageCursor {
    bounds: Rect,
    current_y: f32,
    current: Page,
    pages: Vec<Page>,
}

impl PageCursor {
    fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            current_y: 0.0,
            current: Page::default(),
            pages: Vec::new(),
        }
    }

    fn new_page(&mut self) {
        let finished = std::mem::take(&mut self.current);
        debug!(
            "Page {} complete with {} element(s)",
            self.pages.len() + 1,
            finished.elements.len()
        );
        self.pages.push(finished);
        self.current_y = 0.0;
    }

    fn place(&mut self, slice: Slice) {
        let fit = check_fit(self.current_y, slice.height, self.bounds);
        match slice.kind {
            SliceKind::Gap => {
                // Leading whitespace is dropped on continuation pages, and
                // whitespace that does not fit ends the page.
                if self.current.is_empty() && !self.pages.is_empty() {
                    return;
                }
                if fit.should_break {
                    if !self.current.is_empty() {
                        self.new_page();
                    }
                    return;
                }
                self.current_y += slice.height;
            }
            SliceKind::Content => {
                if fit.should_break && !self.current.is_empty() {
                    self.new_page();
                }
                if !fits_empty_page(slice.height, self.bounds) {
                    warn!(
                        "Element of {:.1}pt exceeds the page content height of {:.1}pt",
                        slice.height, self.bounds.height
                    );
                }
                self.commit(slice);
            }
        }
    }

    /// Places a keep-together group. Moves to a fresh page first when the
    /// group would not fit here but fits on an empty page; otherwise the
    /// slices flow normally and may split.
    fn place_group(&mut self, slices: Vec<Slice>) {
        let leading_gap: f32 = slices
            .iter()
            .take_while(|s| s.kind == SliceKind::Gap)
            .map(|s| s.height)
            .sum();
        let trailing_gap: f32 = slices
            .iter()
            .rev()
            .take_while(|s| s.kind == SliceKind::Gap)
            .map(|s| s.height)
            .sum();
        let total: f32 = slices.iter().map(|s| s.height).sum();
        let needed = (total - trailing_gap).max(0.0);

        if check_fit(self.current_y, needed, self.bounds).should_break && !self.current.is_empty() {
            if fits_empty_page(needed - leading_gap, self.bounds) {
                self.new_page();
            } else {
                warn!(
                    "Keep-together group of {:.1}pt is taller than the page ({:.1}pt); splitting it",
                    needed, self.bounds.height
                );
            }
        }

        for slice in slices {
            self.place(slice);
        }
    }

    fn commit(&mut self, slice: Slice) {
        let top = self.bounds.y + self.current_y;
        if let Some(title) = slice.anchor {
            self.current.outline.push(OutlineEntry {
                title,
                page_index: self.pages.len(),
                y: top,
            });
        }
        for mut element in slice.elements {
            element.x += self.bounds.x;
            element.y += top;
            self.current.elements.push(element);
        }
        self.current_y += slice.height;
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.is_empty() || self.pages.is_empty() {
            let last = std::mem::take(&mut self.current);
            self.pages.push(last);
        }
        self.pages
    }
}
