use crate::strings::text_string;
use lopdf::{Document, Object, ObjectId, dictionary};
use tripsheet_render_core::utils::flip_y;
use tripsheet_types::OutlineEntry;

/// Creates a flat document outline (bookmarks), one item per entry.
///
/// Entries pointing past the last page are skipped.
///
/// # Returns
/// The `ObjectId` of the root `Outlines` dictionary if any items were created, otherwise `None`.
pub(crate) fn build_outline(
    document: &mut Document,
    entries: &[OutlineEntry],
    page_ids: &[ObjectId],
    page_height: f32,
) -> Option<ObjectId> {
    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        match page_ids.get(entry.page_index) {
            Some(page_id) => items.push((document.new_object_id(), entry, *page_id)),
            None => log::warn!(
                "Outline entry '{}' points at missing page {}",
                entry.title,
                entry.page_index + 1
            ),
        }
    }

    let (first_id, last_id) = match (items.first(), items.last()) {
        (Some(first), Some(last)) => (first.0, last.0),
        _ => return None,
    };

    let root_id = document.new_object_id();
    for (i, (id, entry, page_id)) in items.iter().enumerate() {
        let dest = vec![
            Object::Reference(*page_id),
            "FitH".into(),
            flip_y(entry.y, page_height).into(),
        ];
        let mut dict = dictionary! {
            "Title" => text_string(&entry.title),
            "Parent" => root_id,
            "Dest" => dest,
        };
        if i > 0 {
            dict.set("Prev", items[i - 1].0);
        }
        if i + 1 < items.len() {
            dict.set("Next", items[i + 1].0);
        }
        document.objects.insert(*id, Object::Dictionary(dict));
    }

    document.objects.insert(
        root_id,
        Object::Dictionary(dictionary! {
            "Type" => "Outlines",
            "First" => first_id,
            "Last" => last_id,
            "Count" => items.len() as i64,
        }),
    );
    Some(root_id)
}
