use crate::error::RenderError;
use crate::info::DocumentInfo;
use std::io::Write;
use tripsheet_layout::Page;

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// Calls arrive in a fixed order: `begin_document` once, `render_page` for
/// every page in order, then `finish`.
pub trait DocumentRenderer {
    fn begin_document(&mut self, info: &DocumentInfo) -> Result<(), RenderError>;

    fn render_page(&mut self, page: &Page) -> Result<(), RenderError>;

    /// Serializes the finished document into `writer`.
    fn finish(self: Box<Self>, writer: &mut dyn Write) -> Result<(), RenderError>;
}
