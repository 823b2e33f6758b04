use crate::outline::build_outline;
use crate::page::{PageContext, font_resource};
use crate::strings::text_string;
use log::debug;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::io::Write;
use tripsheet_layout::{FontFace, Page};
use tripsheet_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use tripsheet_style::PageLayout;
use tripsheet_types::OutlineEntry;

/// An in-memory PDF renderer using the `lopdf` library.
/// It builds the document's object graph and then writes it to the output stream.
pub struct LopdfDocumentRenderer {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    catalog_id: Option<ObjectId>,
    page_ids: Vec<ObjectId>,
    page_width: f32,
    page_height: f32,
    outline: Vec<OutlineEntry>,
    info: Option<DocumentInfo>,
}

impl LopdfDocumentRenderer {
    pub fn new(layout: PageLayout) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        let (page_width, page_height) = layout.size.dimensions_pt();

        Self {
            document,
            pages_id,
            resources_id,
            catalog_id: None,
            page_ids: Vec::new(),
            page_width,
            page_height,
            outline: Vec::new(),
            info: None,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn info_dictionary(info: &DocumentInfo) -> Dictionary {
        let mut dict = dictionary! {
            "Title" => text_string(&info.title),
            "Producer" => text_string(&info.producer),
        };
        if let Some(date) = info.pdf_creation_date() {
            dict.set("CreationDate", Object::string_literal(date));
        }
        dict
    }
}

impl DocumentRenderer for LopdfDocumentRenderer {
    fn begin_document(&mut self, info: &DocumentInfo) -> Result<(), RenderError> {
        let mut fonts = Dictionary::new();
        for face in [FontFace::Helvetica, FontFace::HelveticaBold] {
            let font_id = self.document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font_resource(face), font_id);
        }

        // This is the central resources dictionary for the entire document.
        self.document.objects.insert(
            self.resources_id,
            Object::Dictionary(dictionary! { "Font" => fonts }),
        );

        // Kids and Count are filled in once all pages are known.
        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![],
                "Count" => 0,
            }),
        );

        let catalog_id = self.document.new_object_id();
        self.document.trailer.set("Root", catalog_id);
        self.catalog_id = Some(catalog_id);
        self.info = Some(info.clone());
        Ok(())
    }

    fn render_page(&mut self, page: &Page) -> Result<(), RenderError> {
        if self.catalog_id.is_none() {
            return Err(RenderError::Other("Document not started".into()));
        }

        let mut page_ctx = PageContext::new(self.page_height);
        for element in &page.elements {
            page_ctx.draw_element(element);
        }
        let content = page_ctx.finish();

        let content_id = self
            .document
            .add_object(Stream::new(Dictionary::new(), content.encode()?));
        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), self.page_width.into(), self.page_height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        self.outline.extend(page.outline.iter().cloned());

        debug!(
            "Rendered page {} ({} elements)",
            self.page_ids.len(),
            page.elements.len()
        );
        Ok(())
    }

    fn finish(mut self: Box<Self>, mut writer: &mut dyn Write) -> Result<(), RenderError> {
        let catalog_id = self
            .catalog_id
            .ok_or_else(|| RenderError::Other("Document not started or already finished".into()))?;

        if let Some(Object::Dictionary(pages_dict)) = self.document.objects.get_mut(&self.pages_id) {
            let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
            pages_dict.set("Kids", kids);
            pages_dict.set("Count", self.page_ids.len() as i64);
        }

        let mut catalog = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        let outline = std::mem::take(&mut self.outline);
        if let Some(outline_id) = build_outline(&mut self.document, &outline, &self.page_ids, self.page_height) {
            catalog.set("Outlines", outline_id);
            catalog.set("PageMode", "UseOutlines");
        }
        self.document.objects.insert(catalog_id, Object::Dictionary(catalog));

        if let Some(info) = self.info.take() {
            let info_id = self.document.add_object(Self::info_dictionary(&info));
            self.document.trailer.set("Info", info_id);
        }

        self.document.save_to(&mut writer)?;
        writer.flush()?;
        debug!("Wrote PDF with {} page(s)", self.page_ids.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tripsheet_layout::{LayoutElement, PositionedElement, RectElement, TextElement};
    use tripsheet_types::Color;

    fn page(texts: &[&str], anchor: Option<&str>) -> Page {
        let mut elements = vec![PositionedElement {
            x: 54.0,
            y: 54.0,
            width: 504.0,
            height: 30.0,
            element: LayoutElement::Rectangle(RectElement {
                fill: Color::rgb(0x34, 0x98, 0xdb),
            }),
        }];
        for (i, text) in texts.iter().enumerate() {
            elements.push(PositionedElement {
                x: 54.0,
                y: 100.0 + i as f32 * 14.0,
                width: 200.0,
                height: 14.0,
                element: LayoutElement::Text(TextElement {
                    content: text.to_string(),
                    font: if i == 0 { FontFace::HelveticaBold } else { FontFace::Helvetica },
                    font_size: 10.0,
                    color: Color::BLACK,
                }),
            });
        }
        let outline = anchor
            .map(|title| {
                vec![OutlineEntry {
                    title: title.to_string(),
                    page_index: 0,
                    y: 100.0,
                }]
            })
            .unwrap_or_default();
        Page { elements, outline }
    }

    fn catalog(doc: &Document) -> &Dictionary {
        let root = doc.trailer.get(b"Root").unwrap().as_reference().unwrap();
        doc.get_dictionary(root).unwrap()
    }

    fn render(pages: &[Page], info: DocumentInfo) -> Vec<u8> {
        let mut renderer = Box::new(LopdfDocumentRenderer::new(PageLayout::default()));
        renderer.begin_document(&info).unwrap();
        for page in pages {
            renderer.render_page(page).unwrap();
        }
        let mut bytes = Vec::new();
        renderer.finish(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn writes_a_loadable_document_with_text() {
        let bytes = render(&[page(&["FLIGHT", "Air France"], None)], DocumentInfo::new("Trip"));
        assert!(bytes.starts_with(b"%PDF-1.7"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
        let text = doc.extract_text(&[1]).unwrap();
        assert!(text.contains("FLIGHT"));
        assert!(text.contains("Air France"));
    }

    #[test]
    fn page_tree_and_media_box_follow_the_layout() {
        let bytes = render(&[page(&["a"], None), page(&["b"], None)], DocumentInfo::new("Trip"));
        let doc = Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 2);
        let first = doc.get_dictionary(pages[&1]).unwrap();
        let media_box = first.get(b"MediaBox").unwrap().as_array().unwrap();
        assert_eq!(media_box[2].as_float().unwrap(), 612.0);
        assert_eq!(media_box[3].as_float().unwrap(), 792.0);
    }

    #[test]
    fn outline_has_one_item_per_entry() {
        let bytes = render(
            &[page(&["Day 1"], Some("Day 1")), page(&["Day 2"], Some("Day 2"))],
            DocumentInfo::new("Trip"),
        );
        let doc = Document::load_mem(&bytes).unwrap();
        let catalog = catalog(&doc);
        let outlines_id = catalog.get(b"Outlines").unwrap().as_reference().unwrap();
        let outlines = doc.get_dictionary(outlines_id).unwrap();
        assert_eq!(outlines.get(b"Count").unwrap().as_i64().unwrap(), 2);
    }

    #[test]
    fn no_outline_without_entries() {
        let bytes = render(&[page(&["x"], None)], DocumentInfo::new("Trip"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(catalog(&doc).get(b"Outlines").is_err());
    }

    #[test]
    fn info_carries_title_and_optional_date() {
        let bytes = render(&[page(&["x"], None)], DocumentInfo::new("Weekend"));
        let doc = Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Weekend");
        assert!(info.get(b"CreationDate").is_err());

        let dated = DocumentInfo::new("Weekend").created_at(chrono::Utc.with_ymd_and_hms(2024, 6, 15, 8, 0, 0).unwrap());
        let bytes = render(&[page(&["x"], None)], dated);
        let doc = Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert_eq!(info.get(b"CreationDate").unwrap().as_str().unwrap(), b"D:20240615080000Z");
    }

    #[test]
    fn identical_input_gives_identical_bytes() {
        let pages = [page(&["FLIGHT", "Air France"], Some("Day 1"))];
        assert_eq!(
            render(&pages, DocumentInfo::new("Trip")),
            render(&pages, DocumentInfo::new("Trip"))
        );
    }

    #[test]
    fn rendering_before_begin_is_an_error() {
        let mut renderer = LopdfDocumentRenderer::new(PageLayout::default());
        assert!(renderer.render_page(&Page::default()).is_err());
    }
}
