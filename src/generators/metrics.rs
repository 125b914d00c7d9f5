//! Glyph metrics for the builtin Helvetica faces and greedy word wrapping.
//!
//! Widths are AFM advance widths in 1/1000 em for the printable ASCII range
//! (0x20..=0x7E). Anything outside that range is measured with the average
//! lowercase advance, which is close enough for wrapping decisions.

use super::canvas::FontWeight;

const FIRST_CHAR: u32 = 0x20;
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width of a single glyph in 1/1000 em.
pub fn glyph_width(ch: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Normal => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    (ch as u32)
        .checked_sub(FIRST_CHAR)
        .and_then(|index| table.get(index as usize))
        .copied()
        .unwrap_or(FALLBACK_WIDTH)
}

/// Width of `text` in points when set at `font_size`.
pub fn text_width_pt(text: &str, weight: FontWeight, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| glyph_width(ch, weight) as u32).sum();
    units as f32 * font_size / 1000.0
}

/// Greedy word wrap.
///
/// Newlines always start a new line. Within a paragraph lines break only at
/// spaces, and the breaking space is dropped. A word wider than `max_width`
/// is kept whole on its own line.
pub fn wrap_words<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let space = measure(" ");
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        let mut line = String::new();
        let mut line_width = 0.0;

        for (i, word) in paragraph.split(' ').enumerate() {
            let word_width = measure(word);
            if i == 0 {
                line.push_str(word);
                line_width = word_width;
                continue;
            }

            if !line.is_empty() && line_width + space + word_width > max_width {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_width = word_width;
            } else {
                line.push(' ');
                line.push_str(word);
                line_width += space + word_width;
            }
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_known_widths() {
        assert_eq!(glyph_width(' ', FontWeight::Normal), 278);
        assert_eq!(glyph_width('W', FontWeight::Normal), 944);
        assert_eq!(glyph_width('i', FontWeight::Normal), 222);
        assert_eq!(glyph_width('i', FontWeight::Bold), 278);
        assert_eq!(glyph_width('~', FontWeight::Bold), 584);
        assert_eq!(glyph_width('é', FontWeight::Normal), FALLBACK_WIDTH);
        assert_eq!(glyph_width('\t', FontWeight::Normal), FALLBACK_WIDTH);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let at_12 = text_width_pt("Hello", FontWeight::Normal, 12.0);
        let at_24 = text_width_pt("Hello", FontWeight::Normal, 24.0);
        assert!((at_24 - 2.0 * at_12).abs() < 1e-4);
        // H e l l o = 722 + 556 + 222 + 222 + 556
        assert!((at_12 - 2278.0 * 12.0 / 1000.0).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_breaks_at_spaces() {
        let lines = wrap_words("aaa bbb ccc", 50.0, fixed);
        assert_eq!(lines, vec!["aaa", "bbb", "ccc"]);

        let lines = wrap_words("aa bb cc dd", 50.0, fixed);
        assert_eq!(lines, vec!["aa bb", "cc dd"]);
    }

    #[test]
    fn test_wrap_keeps_long_words_whole() {
        let lines = wrap_words("a supercalifragilistic b", 50.0, fixed);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_respects_newlines() {
        let lines = wrap_words("first\r\n\nthird", 500.0, fixed);
        assert_eq!(lines, vec!["first", "", "third"]);
    }

    #[test]
    fn test_wrap_preserves_text_when_rejoined() {
        let text = "one two  three four five six seven";
        let lines = wrap_words(text, 60.0, fixed);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_words("", 150.0, fixed), vec![String::new()]);
    }
}
