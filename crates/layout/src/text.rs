use crate::fonts::FontFace;

/// Greedy line breaking on whitespace.
///
/// Explicit newlines always start a new line, and a word wider than
/// `max_width` on its own is split between characters so that no line
/// overflows. Nothing is ever dropped: concatenating the words of the
/// result gives back the words of the input.
pub fn wrap_text(text: &str, face: FontFace, font_size: f32, max_width: f32) -> Vec<String> {
    let space = face.text_width(" ", font_size);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in paragraph.split_whitespace() {
            let word_width = face.text_width(word, font_size);

            if word_width > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let mut pieces = split_word(word, face, font_size, max_width);
                // The tail of a split word can share its line with what follows.
                if let Some(last) = pieces.pop() {
                    lines.extend(pieces);
                    current_width = face.text_width(&last, font_size);
                    current = last;
                }
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
                current_width = word_width;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

fn split_word(word: &str, face: FontFace, font_size: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for c in word.chars() {
        let mut candidate = piece.clone();
        candidate.push(c);
        if !piece.is_empty() && face.text_width(&candidate, font_size) > max_width {
            pieces.push(std::mem::take(&mut piece));
            piece.push(c);
        } else {
            piece = candidate;
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
