//! Composition, pagination, painting and the final atomic write.

use crate::compose::compose_itinerary;
use crate::error::PipelineError;
use chrono::Utc;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::Builder;
use tripsheet_itinerary::{ColorMap, Itinerary};
use tripsheet_layout::{LayoutEngine, Page};
use tripsheet_render_core::{DocumentInfo, DocumentRenderer};
use tripsheet_render_lopdf::LopdfDocumentRenderer;
use tripsheet_style::{PageLayout, StyleRegistry};

/// Controls output details that do not affect the visible document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Leave out the creation timestamp so the same input always produces
    /// the same bytes.
    pub deterministic: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::deterministic()
    }
}

impl RenderOptions {
    pub fn deterministic() -> Self {
        Self { deterministic: true }
    }

    pub fn timestamped() -> Self {
        Self { deterministic: false }
    }
}

/// Renders itineraries to PDF with a fixed color map and page geometry.
///
/// A generator holds no per-document state; one instance can render any
/// number of itineraries, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    colors: ColorMap,
    page: PageLayout,
    options: RenderOptions,
    styles: Option<StyleRegistry>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(mut self, colors: ColorMap) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_page_layout(mut self, page: PageLayout) -> Self {
        self.page = page;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the standard style registry.
    pub fn with_styles(mut self, styles: StyleRegistry) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    pub fn page_layout(&self) -> &PageLayout {
        &self.page
    }

    fn styles(&self) -> &StyleRegistry {
        self.styles.as_ref().unwrap_or_else(|| StyleRegistry::global())
    }

    /// Validates, composes and paginates without painting.
    pub fn layout(&self, itinerary: &Itinerary) -> Result<Vec<Page>, PipelineError> {
        itinerary.validate()?;
        let blocks = compose_itinerary(itinerary, &self.colors)?;
        let engine = LayoutEngine::new(self.page, self.styles())?;
        Ok(engine.paginate(&blocks)?)
    }

    /// Renders into `writer` and returns the number of pages written.
    pub fn render_to_writer(&self, itinerary: &Itinerary, writer: &mut dyn Write) -> Result<usize, PipelineError> {
        let pages = self.layout(itinerary)?;

        let mut doc_info = DocumentInfo::new(itinerary.title.trim())
            .with_producer(concat!("tripsheet ", env!("CARGO_PKG_VERSION")));
        if !self.options.deterministic {
            doc_info = doc_info.created_at(Utc::now());
        }

        let mut renderer: Box<dyn DocumentRenderer> = Box::new(LopdfDocumentRenderer::new(self.page));
        renderer.begin_document(&doc_info)?;
        for page in &pages {
            renderer.render_page(page)?;
        }
        renderer.finish(writer)?;
        Ok(pages.len())
    }

    pub fn render_to_bytes(&self, itinerary: &Itinerary) -> Result<Vec<u8>, PipelineError> {
        let mut bytes = Vec::new();
        let pages = self.render_to_writer(itinerary, &mut bytes)?;
        debug!("Rendered {} page(s) into {} bytes", pages, bytes.len());
        Ok(bytes)
    }

    /// Renders and atomically replaces `path`. Nothing is written unless the
    /// whole document was produced, and a failed write leaves no partial file.
    pub fn render_to_file(&self, itinerary: &Itinerary, path: impl AsRef<Path>) -> Result<(), PipelineError> {
        let path = path.as_ref();
        let bytes = self.render_to_bytes(itinerary)?;
        write_atomically(path, &bytes)?;
        info!(
            "Generated '{}' at {} ({} bytes)",
            itinerary.title.trim(),
            path.display(),
            bytes.len()
        );
        Ok(())
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), PipelineError> {
    let output_error = |source: io::Error| PipelineError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    // The temp file is removed on drop unless it is persisted.
    let mut file = temp_file_builder().tempfile_in(parent).map_err(output_error)?;
    file.write_all(bytes).map_err(output_error)?;
    file.flush().map_err(output_error)?;

    // A replaced file keeps its mode; a new one gets what a plain write would.
    if let Ok(existing) = fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(output_error)?;
    }

    file.as_file().sync_all().map_err(output_error)?;
    file.persist(path).map_err(|e| output_error(e.error))?;
    Ok(())
}

fn temp_file_builder() -> Builder<'static, 'static> {
    let mut builder = Builder::new();
    builder.prefix(".tripsheet");
    // tempfile defaults to owner-only; ask for 0o666 and let the umask narrow it.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
}

/// Renders `itinerary` to `destination` using `colors` and the default page.
pub fn render(itinerary: &Itinerary, destination: impl AsRef<Path>, colors: &ColorMap) -> Result<(), PipelineError> {
    Generator::new()
        .with_colors(colors.clone())
        .render_to_file(itinerary, destination)
}

/// Parses an itinerary from its JSON form and renders it.
pub fn render_json(json: &str, destination: impl AsRef<Path>, colors: &ColorMap) -> Result<(), PipelineError> {
    let itinerary = Itinerary::from_json_str(json)?;
    render(&itinerary, destination, colors)
}
