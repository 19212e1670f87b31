/// Approximate text measurement for label layout.
///
/// Widths are estimated from a small per-character width-class table scaled
/// by font size. Querying installed fonts would tie the generated geometry to
/// the host machine and break byte-identical output, so the estimate stays
/// deliberately font-free; the classes track a typical UI sans face closely
/// enough for box sizing and label anchoring.

const DEFAULT_FACTOR: f32 = 0.56;
const NARROW_FACTOR: f32 = 0.32;
const WIDE_FACTOR: f32 = 0.88;
const UPPER_FACTOR: f32 = 0.68;
const DIGIT_FACTOR: f32 = 0.58;
const SPACE_FACTOR: f32 = 0.30;

fn char_factor(ch: char) -> f32 {
    match ch {
        ' ' => SPACE_FACTOR,
        'i' | 'j' | 'l' | 'f' | 't' | 'r' | 'I' | '.' | ',' | '\'' | ':' | ';' | '|' | '!'
        | '(' | ')' | '[' | ']' | '{' | '}' => NARROW_FACTOR,
        'm' | 'w' | 'M' | 'W' | '@' | '%' => WIDE_FACTOR,
        '0'..='9' => DIGIT_FACTOR,
        'A'..='Z' => UPPER_FACTOR,
        _ => DEFAULT_FACTOR,
    }
}

/// Estimated width of a single line of text.
pub fn line_width(text: &str, font_size: f32) -> f32 {
    if font_size <= 0.0 {
        return 0.0;
    }
    text.chars().map(|ch| char_factor(ch) * font_size).sum()
}

/// Estimated width of the widest line in a (possibly multi-line) block.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.lines()
        .map(|line| line_width(line, font_size))
        .fold(0.0, f32::max)
}

/// Estimated `(width, height)` of a text block at the given line height.
pub fn block_size(text: &str, font_size: f32, line_height: f32) -> (f32, f32) {
    let lines = text.lines().count().max(1);
    (text_width(text, font_size), lines as f32 * font_size * line_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_width() {
        assert_eq!(line_width("", 14.0), 0.0);
        assert_eq!(text_width("", 14.0), 0.0);
    }

    #[test]
    fn narrow_text_is_narrower() {
        assert!(line_width("ilil", 14.0) < line_width("wmwm", 14.0));
    }

    #[test]
    fn width_scales_with_font_size() {
        let small = line_width("FilterExec", 10.0);
        let large = line_width("FilterExec", 20.0);
        assert!((large - small * 2.0).abs() < 1e-3);
    }

    #[test]
    fn block_size_counts_lines() {
        let (w, h) = block_size("a\nbb\nccc", 10.0, 1.25);
        assert!(w > 0.0);
        assert!((h - 3.0 * 10.0 * 1.25).abs() < 1e-3);
    }
}
