use core::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::unicode::floor_char_boundary;

/// Kind of word boundary at a given range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordBoundaryKind {
    /// A run of word characters.
    Word,
    /// Non-word run (whitespace, punctuation, etc.).
    NonWord,
}

/// A word or non-word segment in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBoundary {
    pub range: Range<usize>,
    pub kind: WordBoundaryKind,
}

/// Enumerate word and non-word segments for the given text.
///
/// This uses `unicode-segmentation`'s word boundary logic under the
/// hood, which follows Unicode Text Segmentation (roughly UAX-29).
pub fn compute_word_boundaries(text: &str) -> Vec<WordBoundary> {
    let mut result = Vec::new();
    let mut byte_offset = 0;

    for segment in text.split_word_bounds() {
        let start = byte_offset;
        let end = start + segment.len();

        let kind = if segment.chars().any(|c| c.is_alphanumeric()) {
            WordBoundaryKind::Word
        } else {
            WordBoundaryKind::NonWord
        };

        result.push(WordBoundary {
            range: start..end,
            kind,
        });

        byte_offset = end;
    }

    result
}

/// Range of the word a double tap at `offset` should select.
///
/// An offset sitting exactly between a word and the whitespace or
/// punctuation after it belongs to the word before it. Offsets inside a
/// non-word run select that run. Empty text yields `0..0`.
pub fn word_boundary_at(text: &str, offset: usize) -> Range<usize> {
    let offset = floor_char_boundary(text, offset);
    let segments = compute_word_boundaries(text);

    let Some(index) = segments
        .iter()
        .position(|s| s.range.start <= offset && offset < s.range.end)
    else {
        // End of text: stick to a trailing word if there is one.
        return match segments.last() {
            Some(last) if last.kind == WordBoundaryKind::Word => last.range.clone(),
            _ => offset..offset,
        };
    };

    let segment = &segments[index];
    if segment.kind == WordBoundaryKind::NonWord && offset == segment.range.start && index > 0 {
        let previous = &segments[index - 1];
        if previous.kind == WordBoundaryKind::Word {
            return previous.range.clone();
        }
    }
    segment.range.clone()
}

/// Whether `offset` falls strictly inside a word (not on either edge).
pub fn is_inside_word(text: &str, offset: usize) -> bool {
    compute_word_boundaries(text).iter().any(|s| {
        s.kind == WordBoundaryKind::Word && s.range.start < offset && offset < s.range.end
    })
}

/// Range of the paragraph (text between hard line breaks) containing
/// `offset`. The terminating newline is not included.
pub fn paragraph_boundary_at(text: &str, offset: usize) -> Range<usize> {
    let offset = floor_char_boundary(text, offset);
    let start = text[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end = text[offset..]
        .find('\n')
        .map(|i| offset + i)
        .unwrap_or(text.len());
    start..end
}
