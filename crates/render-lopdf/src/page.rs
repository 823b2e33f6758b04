//! Per-page drawing context.

use log::warn;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use tripsheet_layout::{FontFace, LayoutElement, PositionedElement, RectElement, TextElement, encode_win_ansi};
use tripsheet_render_core::utils::{color_operands, flip_y};
use tripsheet_types::Color;

/// Resource name a face is registered under in the shared font dictionary.
pub(crate) fn font_resource(face: FontFace) -> &'static str {
    match face {
        FontFace::Helvetica => "F1",
        FontFace::HelveticaBold => "F2",
    }
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(FontFace, f32)>,
    fill_color: Option<Color>,
}

pub(crate) struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    pub(crate) fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    pub(crate) fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Rectangle(rect) => self.draw_rect(rect, el),
            LayoutElement::Text(text) => self.draw_text(text, el),
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color_operands(color);
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_font(&mut self, face: FontFace, size: f32) {
        if self.state.font != Some((face, size)) {
            self.push(
                "Tf",
                vec![Object::Name(font_resource(face).as_bytes().to_vec()), size.into()],
            );
            self.state.font = Some((face, size));
        }
    }

    fn draw_rect(&mut self, rect: &RectElement, el: &PositionedElement) {
        if el.width <= 0.0 || el.height <= 0.0 {
            return;
        }
        self.set_fill_color(rect.fill);
        let y = flip_y(el.y + el.height, self.page_height);
        self.push("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
        self.push("f", vec![]);
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        if text.content.trim().is_empty() {
            return;
        }
        let encoded = encode_win_ansi(&text.content);
        let replaced = encoded.iter().filter(|b| **b == b'?').count();
        if replaced > text.content.matches('?').count() {
            warn!("Text '{}' has characters outside WinAnsi; they print as '?'", text.content);
        }

        // Center the em box vertically in the line box.
        let baseline_y = el.y + (el.height - text.font_size) / 2.0 + text.font_size * 0.8;
        let pdf_y = flip_y(baseline_y, self.page_height);

        self.push("BT", vec![]);
        self.set_font(text.font, text.font_size);
        self.set_fill_color(text.color);
        self.push("Td", vec![el.x.into(), pdf_y.into()]);
        self.push("Tj", vec![Object::String(encoded, StringFormat::Literal)]);
        self.push("ET", vec![]);
    }
}
