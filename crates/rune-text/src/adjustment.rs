//! Selection adjustment: turning raw offsets under the pointer into the
//! range that actually gets selected.

use core::ops::Range;

use crate::layout::boundaries::{is_inside_word, paragraph_boundary_at, word_boundary_at};
use crate::layout::{LineLookup, TextRange};
use crate::unicode::{floor_char_boundary, next_grapheme_boundary, prev_grapheme_boundary};

/// How raw selection offsets are snapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAdjustment {
    /// Use the raw offsets as they are.
    None,
    /// Raw offsets, but never collapsed: at least one character stays selected.
    Character,
    /// Expand both ends to word boundaries.
    Word,
    /// Expand both ends to paragraph (hard line break) boundaries.
    Paragraph,
    /// Character granularity while shrinking or fine-tuning inside a word,
    /// word granularity while expanding from a word edge or onto a new line.
    CharacterWithWordAccelerate,
}

/// Snap `raw` according to `adjustment`.
///
/// - `previous_handle_offset`: raw offset of the moving handle on the last
///   update, `None` when the gesture just started.
/// - `previous_selection`: selection before this update, `None` when there
///   is no meaningful prior selection to continue from.
pub fn adjust_selection<L: LineLookup + ?Sized>(
    adjustment: SelectionAdjustment,
    text: &str,
    lines: &L,
    raw: TextRange,
    previous_handle_offset: Option<usize>,
    is_start_handle: bool,
    previous_selection: Option<TextRange>,
) -> TextRange {
    let raw = TextRange::new(
        floor_char_boundary(text, raw.start),
        floor_char_boundary(text, raw.end),
    );

    match adjustment {
        SelectionAdjustment::None => raw,
        SelectionAdjustment::Character => {
            if raw.collapsed() {
                let crossed = previous_selection.is_some_and(|s| s.reversed());
                ensure_at_least_one_char(text, raw.start, is_start_handle, crossed)
            } else {
                raw
            }
        }
        SelectionAdjustment::Word => adjust_by_boundary(text, raw, word_boundary_at),
        SelectionAdjustment::Paragraph => adjust_by_boundary(text, raw, paragraph_boundary_at),
        SelectionAdjustment::CharacterWithWordAccelerate => {
            let Some(previous) = previous_selection else {
                return adjust_by_boundary(text, raw, word_boundary_at);
            };
            if raw.collapsed() {
                return ensure_at_least_one_char(text, raw.start, is_start_handle, previous.reversed());
            }

            let accelerator = WordAccelerator {
                text,
                lines,
                is_reversed: raw.reversed(),
            };
            if is_start_handle {
                let start = accelerator.update_boundary(
                    raw.start,
                    previous_handle_offset,
                    previous.start,
                    raw.end,
                    true,
                );
                TextRange::new(start, raw.end)
            } else {
                let end = accelerator.update_boundary(
                    raw.end,
                    previous_handle_offset,
                    previous.end,
                    raw.start,
                    false,
                );
                TextRange::new(raw.start, end)
            }
        }
    }
}

fn adjust_by_boundary(
    text: &str,
    raw: TextRange,
    boundary_at: fn(&str, usize) -> Range<usize>,
) -> TextRange {
    if text.is_empty() {
        return TextRange::ZERO;
    }
    let start = boundary_at(text, raw.start);
    let end = boundary_at(text, raw.end);
    if raw.reversed() {
        TextRange::new(start.end, end.start)
    } else {
        TextRange::new(start.start, end.end)
    }
}

/// Select the grapheme next to `offset` so the range is not collapsed.
/// The moving handle keeps its side of the previous selection.
fn ensure_at_least_one_char(
    text: &str,
    offset: usize,
    is_start_handle: bool,
    previous_handles_crossed: bool,
) -> TextRange {
    if text.is_empty() {
        return TextRange::collapsed_at(offset);
    }
    let prev = prev_grapheme_boundary(text, offset);
    let next = next_grapheme_boundary(text, offset);

    match (prev, next) {
        (None, Some(next)) => {
            if is_start_handle {
                TextRange::new(next, offset)
            } else {
                TextRange::new(offset, next)
            }
        }
        (Some(prev), None) => {
            if is_start_handle {
                TextRange::new(prev, offset)
            } else {
                TextRange::new(offset, prev)
            }
        }
        (Some(prev), Some(next)) => match (is_start_handle, previous_handles_crossed) {
            (true, false) => TextRange::new(prev, offset),
            (true, true) => TextRange::new(next, offset),
            (false, false) => TextRange::new(offset, next),
            (false, true) => TextRange::new(offset, prev),
        },
        (None, None) => TextRange::collapsed_at(offset),
    }
}

struct WordAccelerator<'a, L: ?Sized> {
    text: &'a str,
    lines: &'a L,
    is_reversed: bool,
}

impl<L: LineLookup + ?Sized> WordAccelerator<'_, L> {
    fn update_boundary(
        &self,
        new_raw_offset: usize,
        previous_raw_offset: Option<usize>,
        previous_adjusted_offset: usize,
        other_boundary_offset: usize,
        is_start: bool,
    ) -> usize {
        if previous_raw_offset == Some(new_raw_offset) {
            return previous_adjusted_offset;
        }

        let current_line = self.lines.line_for_offset(new_raw_offset);
        let previous_line = self.lines.line_for_offset(previous_adjusted_offset);
        if current_line != previous_line {
            return self.snap_to_word(new_raw_offset, current_line, other_boundary_offset, is_start);
        }

        if !self.is_expanding(new_raw_offset, previous_raw_offset, is_start) {
            return new_raw_offset;
        }

        // Fine-tuning inside a word stays at character granularity.
        if is_inside_word(self.text, previous_adjusted_offset) {
            return new_raw_offset;
        }

        self.snap_to_word(new_raw_offset, current_line, other_boundary_offset, is_start)
    }

    fn is_expanding(&self, new_raw_offset: usize, previous_raw_offset: Option<usize>, is_start: bool) -> bool {
        let Some(previous) = previous_raw_offset else {
            return true;
        };
        if is_start ^ self.is_reversed {
            new_raw_offset < previous
        } else {
            new_raw_offset > previous
        }
    }

    fn snap_to_word(
        &self,
        new_raw_offset: usize,
        current_line: usize,
        other_boundary_offset: usize,
        is_start: bool,
    ) -> usize {
        let word = word_boundary_at(self.text, new_raw_offset);

        // Words broken across lines snap to the line edge instead.
        let start = if self.lines.line_for_offset(word.start) == current_line {
            word.start
        } else {
            self.lines.line_start(current_line)
        };
        let end = if self.lines.line_for_offset(word.end) == current_line {
            word.end
        } else {
            self.lines.line_end(current_line)
        };

        // Snapping onto the other handle would collapse the selection.
        if start == other_boundary_offset {
            return end;
        }
        if end == other_boundary_offset {
            return start;
        }

        let threshold = (start + end) / 2;
        if is_start ^ self.is_reversed {
            if new_raw_offset <= threshold { start } else { end }
        } else if new_raw_offset >= threshold {
            end
        } else {
            start
        }
    }
}
