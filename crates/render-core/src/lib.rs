//! Core rendering abstractions for PDF generation.
//!
//! This crate provides the fundamental traits and types used by PDF rendering backends:
//! - `DocumentRenderer` trait for abstracting page painting and output
//! - Error types for rendering operations
//! - Shared utility functions for coordinate and color conversion

mod error;
mod info;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use info::DocumentInfo;
pub use traits::DocumentRenderer;
