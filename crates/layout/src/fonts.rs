//! Metrics for the two base-14 faces documents are set in.
//!
//! Text is measured on its WinAnsi encoding, the same bytes the renderer
//! writes into content streams, so a measured line never disagrees with the
//! line that ends up on the page.

use tripsheet_style::FontWeight;

/// Advance widths in 1/1000 em for bytes 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Used for Latin-1 letters and anything else without a table entry.
const AVERAGE_WIDTH: u16 = 556;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

impl FontFace {
    pub fn for_weight(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Regular => FontFace::Helvetica,
            FontWeight::Bold => FontFace::HelveticaBold,
        }
    }

    /// The PostScript base font name written into the font dictionary.
    pub fn base_font(&self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Advance width of one WinAnsi byte, in 1/1000 em.
    fn byte_width(&self, byte: u8) -> u16 {
        let bold = *self == FontFace::HelveticaBold;
        match byte {
            0x20..=0x7E => {
                let table = if bold { &HELVETICA_BOLD_ASCII } else { &HELVETICA_ASCII };
                table[(byte - 0x20) as usize]
            }
            0x95 => 350,
            0x96 => 556,
            0x97 | 0x85 | 0x99 => 1000,
            0x91 | 0x92 => {
                if bold {
                    278
                } else {
                    222
                }
            }
            0x93 | 0x94 => {
                if bold {
                    500
                } else {
                    333
                }
            }
            0xA0 => 278,
            _ => AVERAGE_WIDTH,
        }
    }

    /// Width of `text` set at `font_size` points.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = encode_win_ansi(text)
            .into_iter()
            .map(|b| self.byte_width(b) as u32)
            .sum();
        units as f32 * font_size / 1000.0
    }
}

/// Encodes text for a simple font using WinAnsiEncoding.
///
/// Latin-1 passes through unchanged. Typographic punctuation that WinAnsi
/// places in 0x80..0x9F is remapped, arrows become `->`, and anything else
/// is replaced with `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{20AC}' => out.push(0x80),
            '\u{201A}' => out.push(0x82),
            '\u{201E}' => out.push(0x84),
            '\u{2026}' => out.push(0x85),
            '\u{2018}' => out.push(0x91),
            '\u{2019}' => out.push(0x92),
            '\u{201C}' => out.push(0x93),
            '\u{201D}' => out.push(0x94),
            '\u{2022}' => out.push(0x95),
            '\u{2013}' => out.push(0x96),
            '\u{2014}' => out.push(0x97),
            '\u{2122}' => out.push(0x99),
            '\u{2192}' => out.extend_from_slice(b"->"),
            '\t' => out.push(b' '),
            c if (c as u32) < 0x20 => {}
            c if (0x20..=0x7E).contains(&(c as u32)) || (0xA0..=0xFF).contains(&(c as u32)) => {
                out.push(c as u8)
            }
            _ => out.push(b'?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_widths_match_afm() {
        assert_eq!(FontFace::Helvetica.text_width("A", 1000.0), 667.0);
        assert_eq!(FontFace::HelveticaBold.text_width("A", 1000.0), 722.0);
        assert_eq!(FontFace::Helvetica.text_width("il", 1000.0), 444.0);
        assert_eq!(FontFace::Helvetica.text_width("~", 1000.0), 584.0);
    }

    #[test]
    fn width_scales_with_size() {
        let w10 = FontFace::Helvetica.text_width("Hotel Le Marais", 10.0);
        let w20 = FontFace::Helvetica.text_width("Hotel Le Marais", 20.0);
        assert!((w20 - 2.0 * w10).abs() < 0.001);
    }

    #[test]
    fn bold_is_wider() {
        let text = "Confirmation";
        assert!(FontFace::HelveticaBold.text_width(text, 9.0) > FontFace::Helvetica.text_width(text, 9.0));
    }

    #[test]
    fn typographic_punctuation_is_remapped() {
        assert_eq!(encode_win_ansi("Day 1 \u{2022} Fri"), b"Day 1 \x95 Fri".to_vec());
        assert_eq!(encode_win_ansi("\u{20AC}5 \u{2013} caf\u{e9}"), b"\x805 \x96 caf\xe9".to_vec());
        assert_eq!(encode_win_ansi("CDG \u{2192} LHR"), b"CDG -> LHR".to_vec());
        assert_eq!(encode_win_ansi("\u{65e5}"), b"?".to_vec());
    }
}
