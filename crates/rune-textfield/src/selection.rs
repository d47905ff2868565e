//! Selection, handle and toolbar state of one editable text field.
//!
//! [`TextFieldSelectionState`] owns the text snapshot and every transient
//! UI flag around it. Gesture detectors mutate it, the host reads derived
//! views (cursor rect, handle states, toolbar target) from it. Derived views
//! are recomputed lazily and cached per state revision; every mutation bumps
//! the revision and publishes it on a `watch` channel so observers know when
//! to re-evaluate.

use std::sync::Arc;

use rune_config::SelectionConfig;
use rune_text::layout::centered_cursor_rect;
use rune_text::unicode::floor_char_boundary;
use rune_text::{
    Point, Rect, ResolvedDirection, SelectionAdjustment, TextLayoutOracle, TextRange,
    adjust_selection,
};
use tokio::sync::watch;

use crate::edit::{EditBuffer, EditFilter, EditOutcome, TextFieldState, TextFieldValue};
use crate::handle::{Handle, HandleDrag, HandleState};
use crate::host::{
    Clipboard, FocusController, HapticFeedback, HapticFeedbackType, TextToolbar, Viewport,
};
use crate::memo::Memo;
use crate::toolbar::{ToolbarAction, ToolbarActions, ToolbarReactor, hide_toolbar};

/// Raw offsets and policy for one [`TextFieldSelectionState::update_selection`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionUpdate {
    pub start: usize,
    pub end: usize,
    pub is_start_handle: bool,
    pub adjustment: SelectionAdjustment,
    /// Raw offset of the moving handle on the previous update of the same
    /// gesture, `None` when the gesture just started.
    pub previous_handle_offset: Option<usize>,
    /// Pass a collapsed current selection to the adjustment as context.
    /// Normally a collapsed selection counts as "no previous selection".
    pub allow_previous_collapsed: bool,
}

impl SelectionUpdate {
    pub fn new(start: usize, end: usize, adjustment: SelectionAdjustment) -> Self {
        Self {
            start,
            end,
            is_start_handle: false,
            adjustment,
            previous_handle_offset: None,
            allow_previous_collapsed: false,
        }
    }

    pub fn start_handle(mut self, is_start_handle: bool) -> Self {
        self.is_start_handle = is_start_handle;
        self
    }

    pub fn previous_handle_offset(mut self, offset: Option<usize>) -> Self {
        self.previous_handle_offset = offset;
        self
    }

    pub fn allow_previous_collapsed(mut self, allow: bool) -> Self {
        self.allow_previous_collapsed = allow;
        self
    }
}

/// Coordinator for selection, handles and toolbar of one text field.
pub struct TextFieldSelectionState {
    state: TextFieldState,
    filter: Option<Box<dyn EditFilter>>,

    layout: Option<Arc<dyn TextLayoutOracle>>,
    viewport: Option<Arc<dyn Viewport>>,
    clipboard: Option<Arc<dyn Clipboard>>,
    toolbar: Option<Arc<dyn TextToolbar>>,
    haptics: Option<Arc<dyn HapticFeedback>>,
    focus: Option<Arc<dyn FocusController>>,

    editable: bool,
    focused: bool,
    touch_mode: bool,
    dragging: Option<HandleDrag>,
    /// Show the cursor handle under the caret while focused.
    show_cursor_handle: bool,
    /// Toolbar explicitly requested for the cursor handle. Not the final
    /// say: see [`Self::toolbar_target`].
    show_cursor_handle_toolbar: bool,

    cursor_width: f32,
    haptics_enabled: bool,

    revision: u64,
    revision_tx: watch::Sender<u64>,
    cursor_rect_memo: Memo<Rect>,
    cursor_handle_memo: Memo<HandleState>,
    start_handle_memo: Memo<HandleState>,
    end_handle_memo: Memo<HandleState>,
    toolbar_reactor: ToolbarReactor,
}

impl TextFieldSelectionState {
    pub fn new(value: TextFieldValue, config: &SelectionConfig) -> Self {
        let (revision_tx, _) = watch::channel(0);
        Self {
            state: TextFieldState::new(value),
            filter: None,
            layout: None,
            viewport: None,
            clipboard: None,
            toolbar: None,
            haptics: None,
            focus: None,
            editable: true,
            focused: false,
            touch_mode: true,
            dragging: None,
            show_cursor_handle: false,
            show_cursor_handle_toolbar: false,
            cursor_width: config.cursor_width_px(),
            haptics_enabled: config.haptics,
            revision: 0,
            revision_tx,
            cursor_rect_memo: Memo::new(),
            cursor_handle_memo: Memo::new(),
            start_handle_memo: Memo::new(),
            end_handle_memo: Memo::new(),
            toolbar_reactor: ToolbarReactor::default(),
        }
    }

    pub fn with_layout(mut self, layout: Arc<dyn TextLayoutOracle>) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_viewport(mut self, viewport: Arc<dyn Viewport>) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn with_toolbar(mut self, toolbar: Arc<dyn TextToolbar>) -> Self {
        self.toolbar = Some(toolbar);
        self
    }

    pub fn with_haptics(mut self, haptics: Arc<dyn HapticFeedback>) -> Self {
        self.haptics = Some(haptics);
        self
    }

    pub fn with_focus_controller(mut self, focus: Arc<dyn FocusController>) -> Self {
        self.focus = Some(focus);
        self
    }

    pub fn with_filter(mut self, filter: impl EditFilter + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    // ---- Inputs -------------------------------------------------------

    pub fn value(&self) -> &TextFieldValue {
        self.state.value()
    }

    pub fn selection(&self) -> TextRange {
        self.state.value().selection()
    }

    /// Replace the snapshot from outside the selection machinery, e.g. for
    /// keyboard input. Content changes hide the cursor handle and toolbar.
    pub fn set_value(&mut self, value: TextFieldValue) {
        let outcome = self.state.set_value(value);
        self.after_edit(outcome);
    }

    /// Run an edit through the installed filter and publish it.
    pub fn edit_with_filter(&mut self, block: impl FnOnce(&mut EditBuffer)) -> EditOutcome {
        let outcome = self.state.edit_with_filter(self.filter.as_deref(), block);
        self.after_edit(outcome);
        outcome
    }

    fn after_edit(&mut self, outcome: EditOutcome) {
        if outcome.content_changed {
            self.show_cursor_handle = false;
            self.show_cursor_handle_toolbar = false;
        }
        if outcome.changed() {
            self.mark_dirty();
        }
    }

    pub fn set_filter(&mut self, filter: Option<Box<dyn EditFilter>>) {
        self.filter = filter;
    }

    /// Install a new layout, or `None` while the field is not laid out.
    pub fn set_layout(&mut self, layout: Option<Arc<dyn TextLayoutOracle>>) {
        self.layout = layout;
        self.mark_dirty();
    }

    /// The current layout changed in place.
    pub fn notify_layout_changed(&mut self) {
        self.mark_dirty();
    }

    /// The viewport scrolled, resized or moved.
    pub fn notify_viewport_changed(&mut self) {
        self.mark_dirty();
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn set_editable(&mut self, editable: bool) {
        if self.editable != editable {
            self.editable = editable;
            self.mark_dirty();
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.mark_dirty();
        }
    }

    /// Whether the last pointer was imprecise (touch). Starts out `true`.
    pub fn is_touch_mode(&self) -> bool {
        self.touch_mode
    }

    pub fn set_touch_mode(&mut self, touch_mode: bool) {
        if self.touch_mode != touch_mode {
            self.touch_mode = touch_mode;
            self.mark_dirty();
        }
    }

    pub fn shows_cursor_handle(&self) -> bool {
        self.show_cursor_handle
    }

    pub(crate) fn set_show_cursor_handle(&mut self, show: bool) {
        if self.show_cursor_handle != show {
            self.show_cursor_handle = show;
            self.mark_dirty();
        }
    }

    pub fn shows_cursor_handle_toolbar(&self) -> bool {
        self.show_cursor_handle_toolbar
    }

    pub(crate) fn set_show_cursor_handle_toolbar(&mut self, show: bool) {
        if self.show_cursor_handle_toolbar != show {
            self.show_cursor_handle_toolbar = show;
            self.mark_dirty();
        }
    }

    // ---- Revisions ----------------------------------------------------

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Receiver that sees every new revision.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    fn mark_dirty(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.revision_tx.send_replace(self.revision);
    }

    // ---- Derived views ------------------------------------------------

    pub fn dragging_handle(&self) -> Option<Handle> {
        self.dragging.map(|drag| drag.handle)
    }

    /// Pointer position of the dragged handle, for a magnifier.
    pub fn handle_drag_position(&self) -> Option<Point> {
        self.dragging.map(|drag| drag.position)
    }

    /// Caret rectangle in inner text field coordinates.
    pub fn cursor_rect(&self) -> Rect {
        self.cursor_rect_memo
            .get_or_compute(self.revision, || self.compute_cursor_rect())
    }

    fn compute_cursor_rect(&self) -> Rect {
        let Some(layout) = &self.layout else {
            return Rect::ZERO;
        };
        // The layout may trail the text by one update.
        let offset = self.selection().start.min(layout.text().len());
        centered_cursor_rect(
            layout.cursor_rect(offset),
            self.cursor_width,
            layout.size().width,
            layout.layout_direction(),
        )
    }

    pub fn cursor_handle(&self) -> HandleState {
        self.cursor_handle_memo
            .get_or_compute(self.revision, || self.compute_cursor_handle())
    }

    fn compute_cursor_handle(&self) -> HandleState {
        let value = self.value();
        let position = self.cursor_rect().bottom_center();
        // A handle that is being dragged stays up even off screen, or the
        // drag gesture attached to it would end.
        let visible = self.show_cursor_handle
            && value.selection().collapsed()
            && !value.is_empty()
            && (self.dragging_handle() == Some(Handle::Cursor) || self.is_visible(position));
        if !visible {
            return HandleState::HIDDEN;
        }

        HandleState {
            visible: true,
            position: self.coerce_in_visible_bounds(position),
            direction: ResolvedDirection::Ltr,
            handles_crossed: false,
        }
    }

    pub fn start_selection_handle(&self) -> HandleState {
        self.start_handle_memo
            .get_or_compute(self.revision, || self.compute_selection_handle(true))
    }

    pub fn end_selection_handle(&self) -> HandleState {
        self.end_handle_memo
            .get_or_compute(self.revision, || self.compute_selection_handle(false))
    }

    fn compute_selection_handle(&self, is_start: bool) -> HandleState {
        let Some(layout) = &self.layout else {
            return HandleState::HIDDEN;
        };
        let selection = self.selection();
        if selection.collapsed() {
            return HandleState::HIDDEN;
        }

        let position = self.handle_position(is_start);
        let visible =
            self.dragging_handle() == Some(Handle::selection(is_start)) || self.is_visible(position);
        if !visible {
            return HandleState::HIDDEN;
        }

        let text = layout.text();
        let direction_offset = if is_start {
            selection.start.min(text.len())
        } else {
            // The character before the end offset.
            floor_char_boundary(text, selection.end.saturating_sub(1))
        };

        HandleState {
            visible: true,
            position: self.coerce_in_visible_bounds(position),
            direction: layout.bidi_run_direction(direction_offset),
            handles_crossed: selection.reversed(),
        }
    }

    /// Anchor of a selection handle in inner text field coordinates.
    pub(crate) fn handle_position(&self, is_start: bool) -> Point {
        let Some(layout) = &self.layout else {
            return Point::ZERO;
        };
        let selection = self.selection();
        let offset = if is_start { selection.start } else { selection.end };
        layout.selection_handle_position(
            offset.min(layout.text().len()),
            is_start,
            selection.reversed(),
        )
    }

    fn visible_bounds(&self) -> Option<Rect> {
        self.viewport.as_ref()?.visible_bounds()
    }

    pub(crate) fn visible_top_left(&self) -> Option<Point> {
        self.visible_bounds().map(|bounds| bounds.top_left())
    }

    fn is_visible(&self, position: Point) -> bool {
        self.visible_bounds()
            .is_some_and(|bounds| bounds.contains_inclusive(position))
    }

    fn coerce_in_visible_bounds(&self, position: Point) -> Point {
        match self.visible_bounds() {
            Some(bounds) => position.coerce_in(bounds),
            None => position,
        }
    }

    fn to_root(&self, point: Point) -> Point {
        self.viewport
            .as_ref()
            .map(|viewport| viewport.local_to_root(point))
            .unwrap_or(Point::ZERO)
    }

    /// Region covered by the selection, in root coordinates.
    ///
    /// A collapsed selection is the cursor rect. Otherwise the rect spans
    /// both handle anchors horizontally, from the top of the higher
    /// endpoint's line to the lower anchor.
    pub fn content_rect(&self) -> Rect {
        let selection = self.selection();
        if selection.collapsed() {
            let cursor = self.cursor_rect();
            return Rect::from_origin_size(self.to_root(cursor.top_left()), cursor.size());
        }

        let start = self.to_root(self.handle_position(true));
        let end = self.to_root(self.handle_position(false));
        let line_top = |offset: usize| {
            let top = self
                .layout
                .as_ref()
                .map(|layout| layout.cursor_rect(offset.min(layout.text().len())).top)
                .unwrap_or(0.0);
            self.to_root(Point::new(0.0, top)).y
        };
        let start_top = line_top(selection.start);
        let end_top = line_top(selection.end);

        Rect::new(
            start.x.min(end.x),
            start_top.min(end_top),
            start.x.max(end.x),
            start.y.max(end.y),
        )
    }

    /// Where the toolbar should be anchored right now, in root coordinates.
    /// `None` means it should be hidden.
    ///
    /// The toolbar is wanted while a selection exists or it was requested
    /// for the cursor handle, nothing is being dragged, and the last pointer
    /// was touch. The anchor is the visible part of the content rect; a
    /// selection scrolled fully out of view hides the toolbar.
    pub fn toolbar_target(&self) -> Option<Rect> {
        let wanted = (self.show_cursor_handle_toolbar || !self.selection().collapsed())
            && self.dragging.is_none()
            && self.touch_mode;
        if !wanted {
            return None;
        }

        let viewport = self.viewport.as_ref()?;
        let bounds = viewport.visible_bounds()?;
        let visible_in_root =
            Rect::from_origin_size(viewport.local_to_root(bounds.top_left()), bounds.size());

        let content = self.content_rect();
        visible_in_root
            .overlaps(&content)
            .then(|| content.intersect(&visible_in_root))
    }

    /// Actions the toolbar should offer for the current state.
    pub fn toolbar_actions(&self) -> ToolbarActions {
        let value = self.value();
        let selection = value.selection();
        ToolbarActions {
            paste: self.editable && self.clipboard.as_ref().is_some_and(|c| c.has_text()),
            copy: !selection.collapsed(),
            cut: !selection.collapsed() && self.editable,
            select_all: selection.length() != value.len(),
        }
    }

    /// Bring the toolbar in line with [`Self::toolbar_target`].
    pub fn sync_toolbar(&mut self) {
        let Some(toolbar) = self.toolbar.clone() else {
            return;
        };
        let target = self.toolbar_target();
        let mut reactor = std::mem::take(&mut self.toolbar_reactor);
        reactor.react(toolbar.as_ref(), target, || self.toolbar_actions());
        self.toolbar_reactor = reactor;
    }

    fn hide_toolbar(&self) {
        if let Some(toolbar) = &self.toolbar {
            hide_toolbar(toolbar.as_ref());
        }
    }

    // ---- Selection updates -------------------------------------------

    /// Compute the selection for `update`, using `current` as the previous
    /// selection. Does not publish anything.
    ///
    /// Emits one haptic pulse in touch mode when the result moves a
    /// boundary. A pure direction flip of the same endpoints is silent.
    pub fn update_selection(&self, current: TextRange, update: SelectionUpdate) -> TextRange {
        let previous = (update.allow_previous_collapsed || !current.collapsed()).then_some(current);

        let adjusted = match &self.layout {
            Some(layout) => {
                let text = layout.text();
                let raw = TextRange::new(update.start, update.end).coerce_in(text.len());
                adjust_selection(
                    update.adjustment,
                    text,
                    layout.as_ref(),
                    raw,
                    update.previous_handle_offset,
                    update.is_start_handle,
                    previous,
                )
            }
            None => TextRange::new(update.start, update.end),
        };
        let text = self.value().text();
        let adjusted = adjusted.coerce_in(text.len());
        let selection = TextRange::new(
            floor_char_boundary(text, adjusted.start),
            floor_char_boundary(text, adjusted.end),
        );

        if selection == current {
            return selection;
        }

        tracing::trace!(?current, ?selection, adjustment = ?update.adjustment, "selection updated");
        if self.touch_mode && !selection.is_reverse_of(&current) {
            self.perform_haptic();
        }
        selection
    }

    pub(crate) fn perform_haptic(&self) {
        if !self.haptics_enabled {
            return;
        }
        if let Some(haptics) = &self.haptics {
            haptics.perform(HapticFeedbackType::TextHandleMove);
        }
    }

    /// Offset of the character nearest to `position`, clamped to the
    /// current text. `None` without a layout.
    pub(crate) fn offset_for_position(&self, position: Point, coerce_in_visible_bounds: bool) -> Option<usize> {
        let layout = self.layout.as_ref()?;
        let offset = layout.offset_for_position(position, coerce_in_visible_bounds);
        Some(floor_char_boundary(self.value().text(), offset))
    }

    pub(crate) fn is_position_on_text(&self, position: Point) -> bool {
        self.layout
            .as_ref()
            .is_some_and(|layout| layout.is_position_on_text(position))
    }

    pub(crate) fn update_handle_dragging(&mut self, handle: Handle, position: Point) {
        let drag = Some(HandleDrag { handle, position });
        if self.dragging != drag {
            self.dragging = drag;
            self.mark_dirty();
        }
    }

    /// Returns whether a drag was cleared.
    pub(crate) fn clear_handle_dragging(&mut self) -> bool {
        if self.dragging.take().is_some() {
            self.mark_dirty();
            true
        } else {
            false
        }
    }

    /// Clear the drag only if `handle` is the one being dragged.
    pub(crate) fn clear_handle_dragging_if(&mut self, handle: Handle) -> bool {
        if self.dragging_handle() == Some(handle) {
            self.clear_handle_dragging()
        } else {
            false
        }
    }

    pub(crate) fn request_focus(&mut self) {
        if let Some(focus) = self.focus.clone() {
            if focus.request_focus() {
                self.set_focused(true);
            }
        }
    }

    pub(crate) fn show_keyboard(&self) {
        if let Some(focus) = &self.focus {
            focus.show_keyboard();
        }
    }

    // ---- Clipboard and toolbar actions --------------------------------

    /// Move the selected text to the clipboard and delete it.
    pub fn cut(&mut self) {
        let value = self.value();
        if value.selection().collapsed() {
            return;
        }
        tracing::debug!("cut");
        if let Some(clipboard) = &self.clipboard {
            clipboard.set_text(value.selected_text());
        }
        self.edit_with_filter(|buffer| {
            let selection = buffer.selection();
            buffer.replace(selection.min()..selection.max(), "");
            buffer.select_chars_in(TextRange::collapsed_at(selection.min()));
        });
    }

    /// Put the selected text on the clipboard. With `cancel_selection` the
    /// selection then collapses to its end.
    pub fn copy(&mut self, cancel_selection: bool) {
        let value = self.value();
        if value.selection().collapsed() {
            return;
        }
        tracing::debug!(cancel_selection, "copy");
        if let Some(clipboard) = &self.clipboard {
            clipboard.set_text(value.selected_text());
        }
        if !cancel_selection {
            return;
        }
        self.edit_with_filter(|buffer| {
            let end = buffer.selection().max();
            buffer.select_chars_in(TextRange::collapsed_at(end));
        });
    }

    /// Replace the selection with the clipboard text.
    pub fn paste(&mut self) {
        let Some(text) = self.clipboard.as_ref().and_then(|clipboard| clipboard.get_text()) else {
            return;
        };
        tracing::debug!(len = text.len(), "paste");
        self.edit_with_filter(|buffer| {
            let selection = buffer.selection();
            buffer.replace(selection.min()..selection.max(), &text);
            buffer.select_chars_in(TextRange::collapsed_at(selection.min() + text.len()));
        });
    }

    pub fn select_all(&mut self) {
        self.edit_with_filter(|buffer| buffer.select_all());
    }

    /// Collapse the selection to its end and drop handle and toolbar requests.
    pub fn deselect(&mut self) {
        let selection = self.selection();
        if !selection.collapsed() {
            self.edit_with_filter(|buffer| {
                buffer.select_chars_in(TextRange::collapsed_at(selection.end));
            });
        }
        self.set_show_cursor_handle(false);
        self.set_show_cursor_handle_toolbar(false);
    }

    /// Run an action picked from the toolbar. Actions not currently offered
    /// are ignored.
    pub fn on_toolbar_action(&mut self, action: ToolbarAction) {
        if !self.toolbar_actions().contains(action) {
            tracing::debug!(?action, "ignoring unavailable toolbar action");
            return;
        }
        match action {
            ToolbarAction::Copy => self.copy(true),
            ToolbarAction::Paste => self.paste(),
            ToolbarAction::Cut => self.cut(),
            ToolbarAction::SelectAll => self.select_all(),
        }
        self.set_show_cursor_handle_toolbar(false);
    }

    // ---- Lifecycle ----------------------------------------------------

    /// Observation stopped: drop the cursor handle and any toolbar shown
    /// for it.
    pub fn release_transient_ui(&mut self) {
        self.set_show_cursor_handle(false);
        if self.show_cursor_handle_toolbar {
            self.hide_toolbar();
        }
        self.toolbar_reactor.reset();
    }

    /// Hide the toolbar and let go of the toolbar, clipboard and haptics.
    pub fn dispose(&mut self) {
        self.hide_toolbar();
        self.toolbar = None;
        self.clipboard = None;
        self.haptics = None;
        self.toolbar_reactor.reset();
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rune_text::MonospaceLayout;

    fn state(text: &str, selection: TextRange) -> TextFieldSelectionState {
        TextFieldSelectionState::new(TextFieldValue::new(text, selection), &SelectionConfig::default())
            .with_layout(Arc::new(MonospaceLayout::new(text, 10.0, 20.0)))
    }

    #[test]
    fn cursor_rect_without_layout_is_zero() {
        let s = TextFieldSelectionState::new(
            TextFieldValue::with_cursor_at_end("abc"),
            &SelectionConfig::default(),
        );
        assert_eq!(s.cursor_rect(), Rect::ZERO);
        assert_eq!(s.start_selection_handle(), HandleState::HIDDEN);
    }

    #[test]
    fn cursor_rect_is_centered_stroke() {
        let s = state("hello", TextRange::collapsed_at(2));
        assert_eq!(s.cursor_rect(), Rect::new(20.0, 0.0, 22.0, 20.0));
    }

    #[test]
    fn cursor_rect_tracks_revisions() {
        let mut s = state("hello", TextRange::collapsed_at(2));
        assert_eq!(s.cursor_rect().left, 20.0);
        s.edit_with_filter(|buffer| buffer.select_chars_in(TextRange::collapsed_at(4)));
        assert_eq!(s.cursor_rect().left, 40.0);
    }

    #[test]
    fn content_change_resets_visibility_flags() {
        let mut s = state("hello", TextRange::collapsed_at(5));
        s.set_show_cursor_handle(true);
        s.set_show_cursor_handle_toolbar(true);

        s.edit_with_filter(|buffer| buffer.select_chars_in(TextRange::collapsed_at(1)));
        assert!(s.shows_cursor_handle());
        assert!(s.shows_cursor_handle_toolbar());

        s.set_value(TextFieldValue::with_cursor_at_end("hello!"));
        assert!(!s.shows_cursor_handle());
        assert!(!s.shows_cursor_handle_toolbar());
    }

    #[test]
    fn update_selection_does_not_publish() {
        let s = state("hello world", TextRange::collapsed_at(0));
        let range = s.update_selection(
            TextRange::ZERO,
            SelectionUpdate::new(7, 7, SelectionAdjustment::Word),
        );
        assert_eq!(range, TextRange::new(6, 11));
        assert_eq!(s.selection(), TextRange::collapsed_at(0));
    }

    #[test]
    fn mutations_bump_revision_and_notify() {
        let mut s = state("hello", TextRange::collapsed_at(0));
        let mut rx = s.subscribe();
        let before = s.revision();
        s.select_all();
        assert!(s.revision() > before);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), s.revision());

        // No-op updates leave the revision alone.
        let before = s.revision();
        s.set_touch_mode(true);
        s.select_all();
        assert_eq!(s.revision(), before);
    }
}
