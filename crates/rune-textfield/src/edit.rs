//! Text field contents and the single place they change.

use core::ops::Range;

use rune_text::TextRange;
use rune_text::unicode::floor_char_boundary;

/// Immutable snapshot of a text field: its text plus selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFieldValue {
    text: String,
    selection: TextRange,
}

impl TextFieldValue {
    /// Create a snapshot. The selection is clamped into the text and onto
    /// `char` boundaries.
    pub fn new(text: impl Into<String>, selection: TextRange) -> Self {
        let text = text.into();
        let selection = clamp_range(&text, selection);
        Self { text, selection }
    }

    /// Snapshot with the cursor at the end of `text`.
    pub fn with_cursor_at_end(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self::new(text, TextRange::collapsed_at(end))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> TextRange {
        self.selection
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn selected_text(&self) -> &str {
        self.selection.text(&self.text)
    }

    /// Whether both snapshots hold the same text, ignoring selection.
    pub fn content_equals(&self, other: &TextFieldValue) -> bool {
        self.text == other.text
    }
}

/// Mutable working copy handed to edit blocks and filters.
#[derive(Debug, Clone)]
pub struct EditBuffer {
    original: TextFieldValue,
    text: String,
    selection: TextRange,
}

impl EditBuffer {
    fn new(original: TextFieldValue) -> Self {
        Self {
            text: original.text.clone(),
            selection: original.selection,
            original,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> TextRange {
        self.selection
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace `range` with `replacement`. The selection collapses to the
    /// end of the inserted text.
    pub fn replace(&mut self, range: Range<usize>, replacement: &str) {
        let start = floor_char_boundary(&self.text, range.start.min(range.end));
        let end = floor_char_boundary(&self.text, range.start.max(range.end));
        self.text.replace_range(start..end, replacement);
        self.selection = TextRange::collapsed_at(start + replacement.len());
    }

    pub fn select_chars_in(&mut self, range: TextRange) {
        self.selection = clamp_range(&self.text, range);
    }

    pub fn select_all(&mut self) {
        self.selection = TextRange::new(0, self.text.len());
    }

    /// Drop every change made to this buffer.
    pub fn revert(&mut self) {
        self.text.clone_from(&self.original.text);
        self.selection = self.original.selection;
    }

    fn into_value(self) -> TextFieldValue {
        TextFieldValue {
            text: self.text,
            selection: self.selection,
        }
    }
}

/// Hook that sees every proposed edit before it is published.
///
/// The filter may rewrite the buffer or veto the whole edit with
/// [`EditBuffer::revert`].
pub trait EditFilter: Send {
    fn filter(&self, original: &TextFieldValue, proposed: &mut EditBuffer);
}

impl<F> EditFilter for F
where
    F: Fn(&TextFieldValue, &mut EditBuffer) + Send,
{
    fn filter(&self, original: &TextFieldValue, proposed: &mut EditBuffer) {
        self(original, proposed)
    }
}

/// What a published edit changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditOutcome {
    pub content_changed: bool,
    pub selection_changed: bool,
}

impl EditOutcome {
    pub fn changed(&self) -> bool {
        self.content_changed || self.selection_changed
    }
}

/// Owner of the current [`TextFieldValue`].
#[derive(Debug, Clone, Default)]
pub struct TextFieldState {
    value: TextFieldValue,
}

impl TextFieldState {
    pub fn new(value: TextFieldValue) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &TextFieldValue {
        &self.value
    }

    /// Replace the snapshot wholesale, bypassing any filter.
    pub fn set_value(&mut self, value: TextFieldValue) -> EditOutcome {
        let outcome = compare(&self.value, &value);
        self.value = value;
        outcome
    }

    /// Run `block` against a buffer seeded from the current snapshot, let
    /// `filter` inspect the result and publish it as the new snapshot.
    pub fn edit_with_filter(
        &mut self,
        filter: Option<&dyn EditFilter>,
        block: impl FnOnce(&mut EditBuffer),
    ) -> EditOutcome {
        let original = self.value.clone();
        let mut buffer = EditBuffer::new(original.clone());
        block(&mut buffer);

        if let Some(filter) = filter {
            filter.filter(&original, &mut buffer);
        }

        let value = buffer.into_value();
        let outcome = compare(&original, &value);
        self.value = value;
        outcome
    }
}

fn compare(before: &TextFieldValue, after: &TextFieldValue) -> EditOutcome {
    EditOutcome {
        content_changed: !before.content_equals(after),
        selection_changed: before.selection != after.selection,
    }
}

fn clamp_range(text: &str, range: TextRange) -> TextRange {
    let range = range.coerce_in(text.len());
    TextRange::new(
        floor_char_boundary(text, range.start),
        floor_char_boundary(text, range.end),
    )
}
