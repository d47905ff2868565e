mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use common::Fixture;
use rune_config::GestureConfig;
use rune_text::{Point, Rect, TextRange};
use rune_textfield::{
    EditBuffer, Handle, PointerDevice, PointerEvent, Surface, SurfaceDetectors,
    TextFieldSelectionState, TextFieldValue,
};

fn field() -> SurfaceDetectors {
    SurfaceDetectors::new(Surface::Field, &GestureConfig::default())
}

fn tap(detectors: &mut SurfaceDetectors, state: &mut TextFieldSelectionState, at: Point, t: u64) {
    detectors.on_event(state, &PointerEvent::down(at, t));
    detectors.on_event(state, &PointerEvent::up(at, t + 40));
}

#[test]
fn tap_places_cursor_and_shows_handle() {
    let fixture = Fixture::new();
    let mut state = fixture.state("hello world", TextRange::collapsed_at(11));
    let mut field = field();

    tap(&mut field, &mut state, Point::new(24.0, 5.0), 0);

    assert!(state.is_focused());
    assert_eq!(fixture.focus.keyboard_requests(), 1);
    assert_eq!(state.selection(), TextRange::collapsed_at(2));
    let handle = state.cursor_handle();
    assert!(handle.visible);
    assert_eq!(handle.position, Point::new(21.0, 20.0));
    assert_eq!(state.toolbar_target(), None);
}

#[test]
fn tap_on_read_only_field_only_focuses() {
    let fixture = Fixture::new();
    let mut state = fixture
        .state("hello world", TextRange::collapsed_at(11))
        .with_editable(false);
    let mut field = field();

    tap(&mut field, &mut state, Point::new(24.0, 5.0), 0);

    assert!(state.is_focused());
    assert_eq!(fixture.focus.keyboard_requests(), 0);
    assert_eq!(state.selection(), TextRange::collapsed_at(11));
    assert!(!state.shows_cursor_handle());
}

#[test]
fn double_tap_selects_the_word_regardless_of_prior_selection() {
    for initial in [
        TextRange::new(1, 3),
        TextRange::collapsed_at(5),
        TextRange::new(4, 0),
    ] {
        let fixture = Fixture::new();
        let mut state = fixture.state("hello", initial);
        let mut field = field();

        tap(&mut field, &mut state, Point::new(24.0, 5.0), 0);
        tap(&mut field, &mut state, Point::new(24.0, 5.0), 100);

        assert_eq!(state.selection(), TextRange::new(0, 5), "from {initial:?}");
        assert!(!state.shows_cursor_handle());
        assert!(!state.cursor_handle().visible);
    }
}

#[test]
fn mouse_input_leaves_touch_mode() {
    let fixture = Fixture::new();
    let mut state = fixture.state("hello world", TextRange::new(0, 5));
    let mut field = field();
    assert!(state.toolbar_target().is_some());

    let at = Point::new(200.0, 5.0);
    field.on_event(
        &mut state,
        &PointerEvent::moved(at, 0).with_device(PointerDevice::Mouse),
    );
    assert!(!state.is_touch_mode());
    assert_eq!(state.toolbar_target(), None);

    field.on_event(&mut state, &PointerEvent::moved(at, 10));
    assert!(state.is_touch_mode());
}

#[test]
fn cursor_handle_tap_toggles_its_toolbar() {
    let fixture = Fixture::new();
    let mut state = fixture.state("hello world", TextRange::collapsed_at(11));
    let mut field = field();
    let mut handle = SurfaceDetectors::new(Surface::CursorHandle, &GestureConfig::default());

    tap(&mut field, &mut state, Point::new(24.0, 5.0), 0);
    assert_eq!(state.toolbar_target(), None);

    tap(&mut handle, &mut state, Point::ZERO, 1000);
    assert!(state.shows_cursor_handle_toolbar());
    assert_eq!(
        state.toolbar_target(),
        Some(Rect::new(120.0, 50.0, 122.0, 70.0))
    );

    tap(&mut handle, &mut state, Point::ZERO, 2000);
    assert!(!state.shows_cursor_handle_toolbar());
    assert_eq!(state.toolbar_target(), None);
}

#[test]
fn cursor_drag_to_the_same_offset_is_not_an_edit() {
    let fixture = Fixture::new();
    let edits = Arc::new(AtomicUsize::new(0));
    let counter = edits.clone();
    let mut state = fixture
        .state("hello world", TextRange::collapsed_at(11))
        .with_filter(move |_: &TextFieldValue, _: &mut EditBuffer| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    let mut field = field();
    let mut handle = SurfaceDetectors::new(Surface::CursorHandle, &GestureConfig::default());

    tap(&mut field, &mut state, Point::new(24.0, 5.0), 0);
    assert_eq!(state.selection(), TextRange::collapsed_at(2));
    let edits_before = edits.load(Ordering::SeqCst);

    // Past the touch slop, but still nearest to offset 2.
    handle.on_event(&mut state, &PointerEvent::down(Point::ZERO, 1000));
    handle.on_event(&mut state, &PointerEvent::moved(Point::new(2.0, 9.0), 1010));
    assert_eq!(state.dragging_handle(), Some(Handle::Cursor));
    assert_eq!(state.selection(), TextRange::collapsed_at(2));
    assert_eq!(edits.load(Ordering::SeqCst), edits_before);
    assert_eq!(fixture.haptics.count(), 0);

    handle.on_event(&mut state, &PointerEvent::moved(Point::new(12.0, 9.0), 1020));
    assert_eq!(state.selection(), TextRange::collapsed_at(3));
    assert_eq!(edits.load(Ordering::SeqCst), edits_before + 1);
    assert_eq!(fixture.haptics.count(), 1);
    assert_eq!(state.handle_drag_position(), Some(Point::new(33.0, 28.0)));

    handle.on_event(&mut state, &PointerEvent::up(Point::new(12.0, 9.0), 1030));
    assert_eq!(state.dragging_handle(), None);
    assert!(state.cursor_handle().visible);
}

#[test]
fn long_press_selects_word_and_drag_extends_it() {
    let fixture = Fixture::new();
    let mut state = fixture.state("hello world foo", TextRange::collapsed_at(0));
    let mut field = field();

    field.on_event(&mut state, &PointerEvent::down(Point::new(24.0, 5.0), 0));
    field.on_event(&mut state, &PointerEvent::moved(Point::new(24.0, 5.0), 450));
    assert_eq!(state.selection(), TextRange::new(0, 5));
    assert_eq!(state.dragging_handle(), Some(Handle::SelectionEnd));
    assert_eq!(state.toolbar_target(), None);

    field.on_event(&mut state, &PointerEvent::moved(Point::new(84.0, 5.0), 470));
    assert_eq!(state.selection(), TextRange::new(0, 11));

    field.on_event(&mut state, &PointerEvent::up(Point::new(84.0, 5.0), 490));
    assert_eq!(state.dragging_handle(), None);
    assert!(state.toolbar_target().is_some());
}

#[test]
fn long_press_drag_never_collapses_a_selection() {
    let fixture = Fixture::new();
    let mut state = fixture.state("hello ", TextRange::collapsed_at(0));
    let mut field = field();

    // Pressed in the blank space after the text: cursor at the line end.
    let blank = Point::new(100.0, 5.0);
    field.on_event(&mut state, &PointerEvent::down(blank, 0));
    field.on_event(&mut state, &PointerEvent::moved(blank, 450));
    assert_eq!(state.selection(), TextRange::collapsed_at(6));
    assert!(state.shows_cursor_handle_toolbar());

    // Dragging onto the text selects back to the word start; the start
    // handle becomes the moving one.
    field.on_event(&mut state, &PointerEvent::moved(Point::new(24.0, 5.0), 460));
    assert_eq!(state.selection(), TextRange::new(0, 6));
    assert_eq!(state.dragging_handle(), Some(Handle::SelectionStart));

    // Back to where it began would collapse the selection; it is kept.
    field.on_event(&mut state, &PointerEvent::moved(blank, 470));
    assert_eq!(state.selection(), TextRange::new(0, 6));
    assert_eq!(state.dragging_handle(), Some(Handle::SelectionEnd));

    field.on_event(&mut state, &PointerEvent::up(blank, 480));
    assert_eq!(state.dragging_handle(), None);
}

#[test]
fn selection_handle_press_marks_the_handle_as_dragged() {
    let fixture = Fixture::new();
    let mut state = fixture.state("hello world", TextRange::new(0, 5));
    let mut end = SurfaceDetectors::new(Surface::SelectionEnd, &GestureConfig::default());

    end.on_event(&mut state, &PointerEvent::down(Point::ZERO, 0));
    assert_eq!(state.dragging_handle(), Some(Handle::SelectionEnd));
    assert_eq!(state.handle_drag_position(), Some(Point::new(50.0, 19.0)));
    assert_eq!(state.toolbar_target(), None);

    end.on_event(&mut state, &PointerEvent::up(Point::ZERO, 50));
    assert_eq!(state.dragging_handle(), None);
    assert_eq!(state.selection(), TextRange::new(0, 5));
}

#[test]
fn selection_end_handle_drag_moves_only_the_end() {
    let fixture = Fixture::new();
    let mut state = fixture.state("hello world", TextRange::new(0, 5));
    let mut end = SurfaceDetectors::new(Surface::SelectionEnd, &GestureConfig::default());

    end.on_event(&mut state, &PointerEvent::down(Point::ZERO, 0));
    end.on_event(&mut state, &PointerEvent::moved(Point::new(150.0, 0.0), 20));
    assert_eq!(state.selection(), TextRange::new(0, 11));
    assert_eq!(state.dragging_handle(), Some(Handle::SelectionEnd));
    assert_eq!(state.end_selection_handle().position, Point::new(110.0, 20.0));

    end.on_event(&mut state, &PointerEvent::up(Point::new(150.0, 0.0), 40));
    assert_eq!(state.dragging_handle(), None);
    assert_eq!(fixture.haptics.count(), 1);
}

#[test]
fn selection_start_handle_drag_reverses_but_never_collapses() {
    let fixture = Fixture::new();
    let mut state = fixture.state("hello world", TextRange::new(0, 5));
    let mut start = SurfaceDetectors::new(Surface::SelectionStart, &GestureConfig::default());

    start.on_event(&mut state, &PointerEvent::down(Point::ZERO, 0));
    let sweep = [
        (20.0, TextRange::new(2, 5)),
        (40.0, TextRange::new(4, 5)),
        // Onto the end handle: one character stays selected.
        (50.0, TextRange::new(4, 5)),
        // Across it: the handles swap sides.
        (60.0, TextRange::new(6, 5)),
        (80.0, TextRange::new(11, 5)),
        (50.0, TextRange::new(6, 5)),
        (10.0, TextRange::new(0, 5)),
    ];
    for (i, (x, expected)) in sweep.into_iter().enumerate() {
        let t = 10 * (i as u64 + 1);
        start.on_event(&mut state, &PointerEvent::moved(Point::new(x, 0.0), t));
        assert_eq!(state.selection(), expected, "x = {x}");
        assert!(!state.selection().collapsed(), "x = {x}");
        assert_eq!(state.dragging_handle(), Some(Handle::SelectionStart), "x = {x}");
    }

    start.on_event(&mut state, &PointerEvent::up(Point::new(10.0, 0.0), 100));
    assert_eq!(state.dragging_handle(), None);
}

#[test]
fn cursor_drag_follows_auto_scroll() {
    let fixture = Fixture::new();
    let mut state = fixture.state("hello world foo bar", TextRange::collapsed_at(2));
    let mut handle = SurfaceDetectors::new(Surface::CursorHandle, &GestureConfig::default());

    handle.on_event(&mut state, &PointerEvent::down(Point::ZERO, 0));
    handle.on_event(&mut state, &PointerEvent::moved(Point::new(10.0, 0.0), 10));
    assert_eq!(state.selection(), TextRange::collapsed_at(3));
    assert_eq!(state.handle_drag_position(), Some(Point::new(31.0, 19.0)));

    // The field scrolls 30px under the resting finger.
    fixture
        .viewport
        .set_bounds(Some(Rect::new(30.0, 0.0, 230.0, 100.0)));
    handle.on_event(&mut state, &PointerEvent::moved(Point::new(11.0, 0.0), 20));
    assert_eq!(state.selection(), TextRange::collapsed_at(6));
    assert_eq!(state.handle_drag_position(), Some(Point::new(62.0, 19.0)));
}

#[test]
fn selection_handle_drag_follows_auto_scroll() {
    let fixture = Fixture::new();
    let mut state = fixture.state("hello world foo bar", TextRange::new(0, 5));
    let mut end = SurfaceDetectors::new(Surface::SelectionEnd, &GestureConfig::default());

    end.on_event(&mut state, &PointerEvent::down(Point::ZERO, 0));
    end.on_event(&mut state, &PointerEvent::moved(Point::new(9.0, 0.0), 10));
    assert_eq!(state.selection(), TextRange::new(0, 6));
    assert_eq!(state.handle_drag_position(), Some(Point::new(59.0, 19.0)));

    // Without the scroll this last 1px would stay on offset 6.
    fixture
        .viewport
        .set_bounds(Some(Rect::new(30.0, 0.0, 230.0, 100.0)));
    end.on_event(&mut state, &PointerEvent::moved(Point::new(10.0, 0.0), 20));
    assert_eq!(state.selection(), TextRange::new(0, 11));
    assert_eq!(state.handle_drag_position(), Some(Point::new(90.0, 19.0)));
    assert_eq!(state.dragging_handle(), Some(Handle::SelectionEnd));
}

#[test]
fn idle_handle_drag_teardown_is_a_no_op() {
    let fixture = Fixture::new();
    let mut state = fixture.state("hello world", TextRange::new(0, 5));
    let mut end = SurfaceDetectors::new(Surface::SelectionEnd, &GestureConfig::default());

    let revision = state.revision();
    assert!(!end.teardown(&mut state));
    assert_eq!(state.revision(), revision);
}

#[test]
fn teardown_mid_drag_clears_exactly_once() {
    let fixture = Fixture::new();
    let mut state = fixture.state("hello world", TextRange::new(0, 5));
    let mut end = SurfaceDetectors::new(Surface::SelectionEnd, &GestureConfig::default());

    end.on_event(&mut state, &PointerEvent::down(Point::ZERO, 0));
    end.on_event(&mut state, &PointerEvent::moved(Point::new(20.0, 0.0), 10));
    assert_eq!(state.dragging_handle(), Some(Handle::SelectionEnd));
    assert_eq!(state.selection().start, 0);
    assert!(!state.selection().collapsed());

    let revision = state.revision();
    assert!(end.teardown(&mut state));
    assert_eq!(state.dragging_handle(), None);
    assert_eq!(state.revision(), revision + 1);

    assert!(!end.teardown(&mut state));
    assert_eq!(state.revision(), revision + 1);
}

#[test]
fn teardown_leaves_another_surfaces_drag_alone() {
    let fixture = Fixture::new();
    let mut state = fixture.state("hello world", TextRange::new(0, 5));
    let mut start = SurfaceDetectors::new(Surface::SelectionStart, &GestureConfig::default());
    let mut end = SurfaceDetectors::new(Surface::SelectionEnd, &GestureConfig::default());

    end.on_event(&mut state, &PointerEvent::down(Point::ZERO, 0));
    assert!(!start.teardown(&mut state));
    assert_eq!(state.dragging_handle(), Some(Handle::SelectionEnd));
}

#[test]
fn precise_pointers_select_without_haptics() {
    for (device, pulses) in [(PointerDevice::Touch, 1), (PointerDevice::Stylus, 0)] {
        let fixture = Fixture::new();
        let mut state = fixture.state("hello world", TextRange::collapsed_at(0));
        let mut field = field();
        let at = Point::new(24.0, 5.0);

        field.on_event(&mut state, &PointerEvent::down(at, 0).with_device(device));
        field.on_event(&mut state, &PointerEvent::moved(at, 450).with_device(device));

        assert_eq!(state.selection(), TextRange::new(0, 5));
        assert_eq!(fixture.haptics.count(), pulses, "{device:?}");
    }
}
