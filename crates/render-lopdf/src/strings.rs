use lopdf::{Object, StringFormat};

/// A PDF text string for metadata such as titles and bookmarks.
///
/// Plain ASCII is written as a literal; anything else is written as
/// UTF-16BE with a byte order mark so viewers show it unchanged.
pub(crate) fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::String(text.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_literal() {
        match text_string("Day 1") {
            Object::String(bytes, StringFormat::Literal) => assert_eq!(bytes, b"Day 1".to_vec()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn non_ascii_is_utf16_with_bom() {
        match text_string("\u{2022}") {
            Object::String(bytes, StringFormat::Hexadecimal) => assert_eq!(bytes, vec![0xFE, 0xFF, 0x20, 0x22]),
            other => panic!("unexpected {:?}", other),
        }
    }
}
