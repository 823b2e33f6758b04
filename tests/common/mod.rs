#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use tripsheet::{Generator, Itinerary, PipelineError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn text(&self) -> String {
        pdf_assertions::extract_text(&self.doc)
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Render an itinerary with the default generator
pub fn generate(itinerary: &Itinerary) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_with(&Generator::new(), itinerary)
}

pub fn generate_with(generator: &Generator, itinerary: &Itinerary) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = generator.render_to_bytes(itinerary)?;
    GeneratedPdf::from_bytes(bytes)
}

pub fn expect_pipeline_error(result: Result<GeneratedPdf, Box<dyn std::error::Error>>) -> PipelineError {
    match result {
        Ok(_) => panic!("expected a pipeline error"),
        Err(err) => match err.downcast::<PipelineError>() {
            Ok(err) => *err,
            Err(other) => panic!("expected a pipeline error, got {}", other),
        },
    }
}
