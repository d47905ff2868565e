//! Contract between editing logic and whatever lays the text out.
//!
//! Editing code never measures glyphs itself. It asks the layout where an
//! offset is drawn and which offset sits under a point, and tolerates the
//! layout lagging one update behind the text it is editing.

use super::geometry::{Point, Rect, Size};
use crate::bidi::ResolvedDirection;

/// Paragraph-level direction the layout was produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Line structure of laid out text, used by adjustment policies that must
/// not snap across lines.
pub trait LineLookup {
    /// Index of the line that contains `offset`.
    fn line_for_offset(&self, offset: usize) -> usize;

    /// First offset of `line`.
    fn line_start(&self, line: usize) -> usize;

    /// Offset just past the last visible character of `line` (excludes the
    /// line terminator).
    fn line_end(&self, line: usize) -> usize;
}

/// Geometry oracle for one laid out text field.
///
/// Positions are in the coordinate space of the inner text field: the
/// origin is the top-left corner of the laid out content, not the visible
/// window onto it.
pub trait TextLayoutOracle: LineLookup + Send + Sync {
    /// The text this layout was produced from. May trail the live text by
    /// one update.
    fn text(&self) -> &str;

    /// Size of the laid out content.
    fn size(&self) -> Size;

    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::Ltr
    }

    /// Caret rectangle for `offset`. Zero-width rects are allowed.
    fn cursor_rect(&self, offset: usize) -> Rect;

    /// Nearest offset to `position`. With `coerce_in_visible_bounds` the
    /// position is first pulled into the part of the field that is shown.
    fn offset_for_position(&self, position: Point, coerce_in_visible_bounds: bool) -> usize;

    /// Direction of the bidi run containing the character at `offset`.
    fn bidi_run_direction(&self, offset: usize) -> ResolvedDirection;

    /// Whether `position` is over a glyph rather than the blank padding
    /// around or after the text.
    fn is_position_on_text(&self, position: Point) -> bool;

    /// Anchor point of a selection handle: horizontal position of `offset`
    /// on the bottom of its line.
    fn selection_handle_position(&self, offset: usize, is_start: bool, handles_crossed: bool) -> Point {
        let _ = (is_start, handles_crossed);
        let rect = self.cursor_rect(offset);
        Point::new(rect.left, rect.bottom)
    }
}
