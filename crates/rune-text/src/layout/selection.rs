use core::ops::Range;

/// A directional range of byte offsets denoting a selection or a cursor.
///
/// `start` is where the selection is anchored and `end` is where it was
/// extended to. Unlike a `Range<usize>`, `end` may come before `start`; such
/// a range is *reversed* and its handles are drawn crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    /// Cursor at the very beginning of the text.
    pub const ZERO: TextRange = TextRange { start: 0, end: 0 };

    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a collapsed range (cursor) at the given offset.
    pub const fn collapsed_at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Whether no text is covered (a cursor).
    pub const fn collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Whether the range runs backwards (`end < start`).
    pub const fn reversed(&self) -> bool {
        self.end < self.start
    }

    /// Smaller of the two offsets.
    pub fn min(&self) -> usize {
        self.start.min(self.end)
    }

    /// Larger of the two offsets.
    pub fn max(&self) -> usize {
        self.start.max(self.end)
    }

    /// Number of bytes covered.
    pub fn length(&self) -> usize {
        self.start.abs_diff(self.end)
    }

    /// The covered bytes in logical order (min..max).
    pub fn range(&self) -> Range<usize> {
        self.min()..self.max()
    }

    /// Swap start and end.
    pub const fn reverse(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// True when `other` covers the same bytes in the opposite direction.
    pub fn is_reverse_of(&self, other: &TextRange) -> bool {
        self.reversed() != other.reversed() && self.reverse() == *other
    }

    /// Check if the range covers `offset` (half-open, in logical order).
    pub fn contains(&self, offset: usize) -> bool {
        self.range().contains(&offset)
    }

    /// Clamp both ends into `0..=len`.
    pub fn coerce_in(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }

    /// Get the covered text, or an empty slice if the range does not fit
    /// `source` on char boundaries.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.range()).unwrap_or("")
    }
}

impl From<Range<usize>> for TextRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
