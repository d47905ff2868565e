//! Gesture detectors: recognized gestures applied to the selection state.
//!
//! Each detector is an independent routine over one surface's event
//! stream. Drag detectors share one shape: `Idle -> Dragging -> Idle`, with
//! end and cancel taking the same cleanup path, plus [`GestureDetector::teardown`]
//! for when the surface goes away mid-gesture.

use rune_config::GestureConfig;
use rune_text::{Point, SelectionAdjustment, TextRange};

use super::pointer::PointerEvent;
use super::recognizer::{
    DragGesture, DragRecognizer, LongPressDragRecognizer, PressGesture, PressRecognizer,
    TapGesture, TapRecognizer,
};
use crate::handle::Handle;
use crate::selection::{SelectionUpdate, TextFieldSelectionState};

pub trait GestureDetector: Send {
    fn name(&self) -> &'static str;

    fn on_event(&mut self, state: &mut TextFieldSelectionState, event: &PointerEvent);

    /// Forced cleanup when the detector is dropped mid-gesture. Clears the
    /// dragging handle only if it is this detector's own. Returns whether
    /// anything was cleared, so running it twice is harmless.
    fn teardown(&mut self, state: &mut TextFieldSelectionState) -> bool {
        let _ = state;
        false
    }
}

/// Point one pixel above a handle anchor, so offset lookups land on the
/// line the handle belongs to rather than the one below it.
fn adjusted_coordinates(position: Point) -> Point {
    Point::new(position.x, position.y - 1.0)
}

/// Tracks whether the last pointer was touch or a precise device.
#[derive(Debug, Default)]
pub struct TouchModeDetector;

impl GestureDetector for TouchModeDetector {
    fn name(&self) -> &'static str {
        "touch-mode"
    }

    fn on_event(&mut self, state: &mut TextFieldSelectionState, event: &PointerEvent) {
        state.set_touch_mode(!event.device.is_precise());
    }
}

/// Tap places the cursor, double tap selects a word.
#[derive(Debug)]
pub struct FieldTapDetector {
    taps: TapRecognizer,
}

impl FieldTapDetector {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            taps: TapRecognizer::new(config),
        }
    }

    fn on_tap(state: &mut TextFieldSelectionState, position: Point) {
        tracing::debug!(?position, "tap on text field");
        state.request_focus();

        if !(state.is_editable() && state.is_focused()) {
            return;
        }
        state.show_keyboard();
        if !state.value().is_empty() {
            state.set_show_cursor_handle(true);
        }
        state.set_show_cursor_handle_toolbar(false);

        if let Some(offset) = state.offset_for_position(position, true) {
            state.edit_with_filter(|buffer| {
                buffer.select_chars_in(TextRange::collapsed_at(offset));
            });
        }
    }

    fn on_double_tap(state: &mut TextFieldSelectionState, position: Point) {
        tracing::debug!(?position, "double tap on text field");
        state.set_show_cursor_handle(false);
        state.set_show_cursor_handle_toolbar(false);

        let Some(offset) = state.offset_for_position(position, true) else {
            return;
        };
        // Start from a clean slate so a previous selection does not steer
        // the word snapping.
        let selection = state.update_selection(
            TextRange::ZERO,
            SelectionUpdate::new(offset, offset, SelectionAdjustment::Word),
        );
        state.edit_with_filter(|buffer| buffer.select_chars_in(selection));
    }
}

impl GestureDetector for FieldTapDetector {
    fn name(&self) -> &'static str {
        "field-tap"
    }

    fn on_event(&mut self, state: &mut TextFieldSelectionState, event: &PointerEvent) {
        match self.taps.on_event(event) {
            Some(TapGesture::Tap(position)) => Self::on_tap(state, position),
            Some(TapGesture::DoubleTap(position)) => Self::on_double_tap(state, position),
            None => {}
        }
    }
}

/// Tapping the cursor handle toggles its toolbar.
#[derive(Debug)]
pub struct CursorHandleTapDetector {
    taps: TapRecognizer,
}

impl CursorHandleTapDetector {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            taps: TapRecognizer::single(config),
        }
    }
}

impl GestureDetector for CursorHandleTapDetector {
    fn name(&self) -> &'static str {
        "cursor-handle-tap"
    }

    fn on_event(&mut self, state: &mut TextFieldSelectionState, event: &PointerEvent) {
        if let Some(TapGesture::Tap(_)) = self.taps.on_event(event) {
            let show = !state.shows_cursor_handle_toolbar();
            tracing::debug!(show, "tap on cursor handle");
            state.set_show_cursor_handle_toolbar(show);
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CursorDrag {
    start: Point,
    delta: Point,
    start_visible_offset: Point,
}

/// Dragging the cursor handle moves the collapsed selection.
#[derive(Debug)]
pub struct CursorHandleDragDetector {
    drags: DragRecognizer,
    drag: Option<CursorDrag>,
}

impl CursorHandleDragDetector {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            drags: DragRecognizer::new(config),
            drag: None,
        }
    }

    fn stop(&mut self, state: &mut TextFieldSelectionState) {
        self.drag = None;
        state.clear_handle_dragging();
    }
}

impl GestureDetector for CursorHandleDragDetector {
    fn name(&self) -> &'static str {
        "cursor-handle-drag"
    }

    fn on_event(&mut self, state: &mut TextFieldSelectionState, event: &PointerEvent) {
        for gesture in self.drags.on_event(event) {
            match gesture {
                DragGesture::Start(_) => {
                    let start = adjusted_coordinates(state.cursor_rect().bottom_center());
                    tracing::debug!(?start, "cursor handle drag start");
                    self.drag = Some(CursorDrag {
                        start,
                        delta: Point::ZERO,
                        start_visible_offset: state.visible_top_left().unwrap_or(Point::ZERO),
                    });
                    state.set_touch_mode(true);
                    state.update_handle_dragging(Handle::Cursor, start);
                }
                DragGesture::Drag(delta) => {
                    let Some(drag) = self.drag.as_mut() else {
                        continue;
                    };
                    drag.delta += delta;

                    // Auto-scroll moves the text under a resting finger, so
                    // the visible offset drift counts as movement too.
                    let visible_offset = state
                        .visible_top_left()
                        .unwrap_or(drag.start_visible_offset);
                    let position =
                        drag.start + drag.delta + (visible_offset - drag.start_visible_offset);
                    state.update_handle_dragging(Handle::Cursor, position);

                    let Some(offset) = state.offset_for_position(position, false) else {
                        continue;
                    };
                    let selection = TextRange::collapsed_at(offset);
                    if selection == state.selection() {
                        continue;
                    }
                    tracing::trace!(offset, "cursor handle moved");
                    state.perform_haptic();
                    state.edit_with_filter(|buffer| buffer.select_chars_in(selection));
                }
                DragGesture::End | DragGesture::Cancel => self.stop(state),
            }
        }
    }

    fn teardown(&mut self, state: &mut TextFieldSelectionState) -> bool {
        self.drag.take().is_some() && state.clear_handle_dragging_if(Handle::Cursor)
    }
}

#[derive(Debug, Clone, Copy)]
struct LongPressSession {
    begin_position: Point,
    total_distance: Point,
    /// Adjusted start of the first selection; `None` when the press began
    /// in blank space after the text.
    begin_offset: Option<usize>,
    previous_offset: Option<usize>,
    acting: Handle,
}

/// Long press selects a word (or places the cursor when pressed past the
/// end of a line); the drag that follows extends the selection by words.
#[derive(Debug)]
pub struct LongPressDragDetector {
    drags: LongPressDragRecognizer,
    session: Option<LongPressSession>,
}

impl LongPressDragDetector {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            drags: LongPressDragRecognizer::new(config),
            session: None,
        }
    }

    fn on_start(&mut self, state: &mut TextFieldSelectionState, position: Point) {
        tracing::debug!(?position, "long press drag start");
        state.request_focus();
        // Re-evaluated once the drag is over.
        state.set_show_cursor_handle_toolbar(false);
        state.update_handle_dragging(Handle::SelectionEnd, position);

        let mut session = LongPressSession {
            begin_position: position,
            total_distance: Point::ZERO,
            begin_offset: None,
            previous_offset: None,
            acting: Handle::SelectionEnd,
        };

        if !state.is_position_on_text(position) {
            // Pressed in blank space: the cursor goes to the nearest line end.
            if let Some(offset) = state.offset_for_position(position, true) {
                state.perform_haptic();
                state.edit_with_filter(|buffer| {
                    buffer.select_chars_in(TextRange::collapsed_at(offset));
                });
                state.set_show_cursor_handle(true);
                state.set_show_cursor_handle_toolbar(true);
                session.previous_offset = Some(offset);
            }
        } else if !state.value().is_empty() {
            if let Some(offset) = state.offset_for_position(position, true) {
                let selection = state.update_selection(
                    TextRange::ZERO,
                    SelectionUpdate::new(
                        offset,
                        offset,
                        SelectionAdjustment::CharacterWithWordAccelerate,
                    ),
                );
                state.edit_with_filter(|buffer| buffer.select_chars_in(selection));
                state.set_show_cursor_handle(false);
                session.begin_offset = Some(selection.start);
                session.previous_offset = Some(offset);
            }
        }

        self.session = Some(session);
    }

    fn on_drag(&mut self, state: &mut TextFieldSelectionState, delta: Point) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if state.value().is_empty() {
            return;
        }
        session.total_distance += delta;
        let position = session.begin_position + session.total_distance;

        let (start, end, adjustment) =
            if session.begin_offset.is_none() && !state.is_position_on_text(position) {
                // Began and still is in the blank space after the text.
                let begin = state.offset_for_position(session.begin_position, true);
                let current = state.offset_for_position(position, true);
                let (Some(start), Some(end)) = (begin, current) else {
                    return;
                };
                let adjustment = if start == end {
                    SelectionAdjustment::None
                } else {
                    SelectionAdjustment::Word
                };
                (start, end, adjustment)
            } else {
                let start = match session.begin_offset {
                    Some(offset) => Some(offset),
                    None => state.offset_for_position(session.begin_position, false),
                };
                let end = state.offset_for_position(position, false);
                let (Some(start), Some(end)) = (start, end) else {
                    return;
                };
                // Coming from blank space, wait until something is selected.
                if session.begin_offset.is_none() && start == end {
                    return;
                }
                (start, end, SelectionAdjustment::Word)
            };

        let previous = state.selection();
        let mut selection = state.update_selection(
            previous,
            SelectionUpdate::new(start, end, adjustment)
                .previous_handle_offset(session.previous_offset),
        );

        // Dragging back past the start turns the start into the moving end.
        let mut acting = Handle::SelectionEnd;
        if !previous.reversed() && selection.reversed() {
            selection = selection.reverse();
            acting = Handle::SelectionStart;
        }

        // May reverse, never collapse.
        if previous.collapsed() || !selection.collapsed() {
            state.edit_with_filter(|buffer| buffer.select_chars_in(selection));
        }
        tracing::trace!(?position, ?selection, "long press drag");

        session.previous_offset = Some(end);
        session.acting = acting;
        state.update_handle_dragging(acting, position);
    }
}

impl GestureDetector for LongPressDragDetector {
    fn name(&self) -> &'static str {
        "long-press-drag"
    }

    fn on_event(&mut self, state: &mut TextFieldSelectionState, event: &PointerEvent) {
        for gesture in self.drags.on_event(event) {
            match gesture {
                DragGesture::Start(position) => self.on_start(state, position),
                DragGesture::Drag(delta) => self.on_drag(state, delta),
                DragGesture::End | DragGesture::Cancel => {
                    tracing::debug!("long press drag end");
                    self.session = None;
                    state.clear_handle_dragging();
                }
            }
        }
    }

    fn teardown(&mut self, state: &mut TextFieldSelectionState) -> bool {
        match self.session.take() {
            Some(session) => state.clear_handle_dragging_if(session.acting),
            None => false,
        }
    }
}

/// Pressing a selection handle marks it as dragged before any movement,
/// so it shows up in the magnifier right away.
#[derive(Debug)]
pub struct SelectionHandlePressDetector {
    is_start: bool,
    presses: PressRecognizer,
    pressed: bool,
}

impl SelectionHandlePressDetector {
    pub fn new(is_start: bool) -> Self {
        Self {
            is_start,
            presses: PressRecognizer::new(),
            pressed: false,
        }
    }
}

impl GestureDetector for SelectionHandlePressDetector {
    fn name(&self) -> &'static str {
        "selection-handle-press"
    }

    fn on_event(&mut self, state: &mut TextFieldSelectionState, event: &PointerEvent) {
        match self.presses.on_event(event) {
            Some(PressGesture::Down(_)) => {
                self.pressed = true;
                let position = adjusted_coordinates(state.handle_position(self.is_start));
                state.update_handle_dragging(Handle::selection(self.is_start), position);
            }
            Some(PressGesture::Up) => {
                self.pressed = false;
                state.clear_handle_dragging();
            }
            None => {}
        }
    }

    fn teardown(&mut self, state: &mut TextFieldSelectionState) -> bool {
        std::mem::take(&mut self.pressed)
            && state.clear_handle_dragging_if(Handle::selection(self.is_start))
    }
}

#[derive(Debug, Clone, Copy)]
struct HandleDragSession {
    begin_position: Point,
    total_distance: Point,
    start_visible_offset: Point,
    previous_offset: Option<usize>,
}

/// Dragging a selection handle moves its endpoint; the other stays put.
#[derive(Debug)]
pub struct SelectionHandleDragDetector {
    is_start: bool,
    drags: DragRecognizer,
    drag: Option<HandleDragSession>,
}

impl SelectionHandleDragDetector {
    pub fn new(is_start: bool, config: &GestureConfig) -> Self {
        Self {
            is_start,
            drags: DragRecognizer::new(config),
            drag: None,
        }
    }

    fn handle(&self) -> Handle {
        Handle::selection(self.is_start)
    }

    fn on_drag(&mut self, state: &mut TextFieldSelectionState, delta: Point) {
        let is_start = self.is_start;
        let handle = self.handle();
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.total_distance += delta;

        let visible_offset = state
            .visible_top_left()
            .unwrap_or(drag.start_visible_offset);
        let position =
            drag.begin_position + drag.total_distance + (visible_offset - drag.start_visible_offset);
        state.update_handle_dragging(handle, position);

        let Some(offset) = state.offset_for_position(position, false) else {
            return;
        };
        let previous = state.selection();
        let (start, end) = if is_start {
            (offset, previous.end)
        } else {
            (previous.start, offset)
        };

        let selection = state.update_selection(
            previous,
            SelectionUpdate::new(start, end, SelectionAdjustment::CharacterWithWordAccelerate)
                .start_handle(is_start)
                .previous_handle_offset(drag.previous_offset),
        );
        // May reverse, never collapse.
        if previous.collapsed() || !selection.collapsed() {
            state.edit_with_filter(|buffer| buffer.select_chars_in(selection));
        }
        drag.previous_offset = Some(offset);
    }
}

impl GestureDetector for SelectionHandleDragDetector {
    fn name(&self) -> &'static str {
        "selection-handle-drag"
    }

    fn on_event(&mut self, state: &mut TextFieldSelectionState, event: &PointerEvent) {
        for gesture in self.drags.on_event(event) {
            match gesture {
                DragGesture::Start(_) => {
                    let begin_position = adjusted_coordinates(state.handle_position(self.is_start));
                    let selection = state.selection();
                    tracing::debug!(handle = ?self.handle(), "selection handle drag start");
                    self.drag = Some(HandleDragSession {
                        begin_position,
                        total_distance: Point::ZERO,
                        start_visible_offset: state.visible_top_left().unwrap_or(Point::ZERO),
                        previous_offset: Some(if self.is_start {
                            selection.start
                        } else {
                            selection.end
                        }),
                    });
                    state.update_handle_dragging(self.handle(), begin_position);
                }
                DragGesture::Drag(delta) => self.on_drag(state, delta),
                DragGesture::End | DragGesture::Cancel => {
                    self.drag = None;
                    state.clear_handle_dragging();
                }
            }
        }
    }

    fn teardown(&mut self, state: &mut TextFieldSelectionState) -> bool {
        if self.drag.take().is_none() {
            return false;
        }
        let handle = self.handle();
        tracing::debug!(?handle, dragging = ?state.dragging_handle(), "selection handle drag torn down");
        state.clear_handle_dragging_if(handle)
    }
}
