use core::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use super::geometry::{Point, Rect, Size};
use super::oracle::{LayoutDirection, LineLookup, TextLayoutOracle};
use crate::bidi::{BaseDirection, ResolvedDirection, run_direction_at};
use crate::unicode::floor_char_boundary;

/// Fixed-advance layout: every grapheme cluster is `char_width` wide and
/// every hard line break starts a new `line_height` tall line. No wrapping.
///
/// Good enough to drive selection logic in tests and demos without a font
/// stack.
#[derive(Debug, Clone)]
pub struct MonospaceLayout {
    text: String,
    char_width: f32,
    line_height: f32,
    width: Option<f32>,
    direction: LayoutDirection,
    visible_bounds: Option<Rect>,
    /// Byte range of each line, excluding its `\n`.
    lines: Vec<Range<usize>>,
}

impl MonospaceLayout {
    pub fn new(text: impl Into<String>, char_width: f32, line_height: f32) -> Self {
        let text = text.into();
        let mut lines = Vec::new();
        let mut line_start = 0;
        for (idx, ch) in text.char_indices() {
            if ch == '\n' {
                lines.push(line_start..idx);
                line_start = idx + 1;
            }
        }
        lines.push(line_start..text.len());

        Self {
            text,
            char_width,
            line_height,
            width: None,
            direction: LayoutDirection::Ltr,
            visible_bounds: None,
            lines,
        }
    }

    /// Fix the content width instead of deriving it from the longest line.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Region used when a lookup asks for positions coerced into the
    /// visible part of the field.
    pub fn with_visible_bounds(mut self, bounds: Rect) -> Self {
        self.visible_bounds = Some(bounds);
        self
    }

    fn line_text(&self, line: usize) -> &str {
        &self.text[self.lines[line].clone()]
    }

    fn columns(&self, line: usize) -> usize {
        self.line_text(line).graphemes(true).count()
    }

    /// Byte offset of the `column`-th grapheme boundary on `line`.
    fn offset_at_column(&self, line: usize, column: usize) -> usize {
        let range = &self.lines[line];
        self.line_text(line)
            .grapheme_indices(true)
            .nth(column)
            .map(|(idx, _)| range.start + idx)
            .unwrap_or(range.end)
    }
}

impl LineLookup for MonospaceLayout {
    fn line_for_offset(&self, offset: usize) -> usize {
        let offset = offset.min(self.text.len());
        self.lines
            .iter()
            .rposition(|line| line.start <= offset)
            .unwrap_or(0)
    }

    fn line_start(&self, line: usize) -> usize {
        self.lines
            .get(line)
            .map(|r| r.start)
            .unwrap_or(self.text.len())
    }

    fn line_end(&self, line: usize) -> usize {
        self.lines.get(line).map(|r| r.end).unwrap_or(self.text.len())
    }
}

impl TextLayoutOracle for MonospaceLayout {
    fn text(&self) -> &str {
        &self.text
    }

    fn size(&self) -> Size {
        let widest = (0..self.lines.len())
            .map(|line| self.columns(line))
            .max()
            .unwrap_or(0);
        Size::new(
            self.width.unwrap_or(widest as f32 * self.char_width),
            self.lines.len() as f32 * self.line_height,
        )
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    fn cursor_rect(&self, offset: usize) -> Rect {
        let offset = floor_char_boundary(&self.text, offset);
        let line = self.line_for_offset(offset);
        let start = self.lines[line].start;
        let column = self.text[start..offset].graphemes(true).count();
        let x = column as f32 * self.char_width;
        let top = line as f32 * self.line_height;
        Rect::new(x, top, x, top + self.line_height)
    }

    fn offset_for_position(&self, position: Point, coerce_in_visible_bounds: bool) -> usize {
        let position = match self.visible_bounds {
            Some(bounds) if coerce_in_visible_bounds => position.coerce_in(bounds),
            _ => position,
        };
        let last_line = self.lines.len() - 1;
        let line = if position.y <= 0.0 {
            0
        } else {
            ((position.y / self.line_height) as usize).min(last_line)
        };
        let column = (position.x / self.char_width).round().max(0.0) as usize;
        let column = column.min(self.columns(line));
        self.offset_at_column(line, column)
    }

    fn bidi_run_direction(&self, offset: usize) -> ResolvedDirection {
        let base = match self.direction {
            LayoutDirection::Ltr => BaseDirection::Auto,
            LayoutDirection::Rtl => BaseDirection::Rtl,
        };
        run_direction_at(&self.text, offset, base)
    }

    fn is_position_on_text(&self, position: Point) -> bool {
        if position.y < 0.0 || position.x < 0.0 {
            return false;
        }
        let line = (position.y / self.line_height) as usize;
        if line >= self.lines.len() {
            return false;
        }
        position.x < self.columns(line) as f32 * self.char_width
    }
}
