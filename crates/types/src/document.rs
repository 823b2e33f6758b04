/// A bookmark in the finished document, pointing at a position on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    /// The bookmark label shown by PDF viewers.
    pub title: String,
    /// Zero-based index of the page holding the target.
    pub page_index: usize,
    /// Distance of the target from the top edge of the page, in points.
    pub y: f32,
}
