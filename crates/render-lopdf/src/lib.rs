//! PDF painter using lopdf.
//!
//! Pages arrive fully laid out; this crate only turns positioned elements
//! into content streams and assembles the document object graph around
//! them: fonts, page tree, outline and document info.

mod outline;
mod page;
mod renderer;
mod strings;

pub use renderer::LopdfDocumentRenderer;
