use unicode_segmentation::UnicodeSegmentation;

/// Clamp `offset` into `0..=text.len()` and move it back onto the nearest
/// `char` boundary at or before it.
pub fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Start of the grapheme cluster before `offset`, or of the one containing
/// it when `offset` falls inside a cluster. `None` at the start of the text.
pub fn prev_grapheme_boundary(text: &str, offset: usize) -> Option<usize> {
    let offset = offset.min(text.len());
    text.grapheme_indices(true)
        .map(|(start, _)| start)
        .take_while(|&start| start < offset)
        .last()
}

/// End of the grapheme cluster after `offset`, or of the one containing it
/// when `offset` falls inside a cluster. `None` at the end of the text.
pub fn next_grapheme_boundary(text: &str, offset: usize) -> Option<usize> {
    text.grapheme_indices(true)
        .map(|(start, grapheme)| start + grapheme.len())
        .find(|&end| end > offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_steps_one_byte() {
        assert_eq!(prev_grapheme_boundary("abc", 2), Some(1));
        assert_eq!(next_grapheme_boundary("abc", 2), Some(3));
        assert_eq!(prev_grapheme_boundary("abc", 0), None);
        assert_eq!(next_grapheme_boundary("abc", 3), None);
        assert_eq!(next_grapheme_boundary("", 0), None);
    }

    #[test]
    fn combining_mark_stays_with_base() {
        let text = "a\u{0301}b"; // a + COMBINING ACUTE, then b
        assert_eq!(next_grapheme_boundary(text, 0), Some(3));
        assert_eq!(prev_grapheme_boundary(text, 3), Some(0));
        // From inside the cluster.
        assert_eq!(prev_grapheme_boundary(text, 1), Some(0));
        assert_eq!(next_grapheme_boundary(text, 1), Some(3));
    }

    #[test]
    fn emoji_zwj_sequence_is_one_step() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        assert_eq!(next_grapheme_boundary(family, 0), Some(family.len()));
        assert_eq!(prev_grapheme_boundary(family, family.len()), Some(0));
    }

    #[test]
    fn floor_char_boundary_steps_back_inside_multibyte_char() {
        let text = "a\u{00E9}b"; // e-acute is two bytes
        assert_eq!(floor_char_boundary(text, 2), 1);
        assert_eq!(floor_char_boundary(text, 3), 3);
        assert_eq!(floor_char_boundary(text, 99), text.len());
    }
}
