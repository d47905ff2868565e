//! Host fakes shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rune_config::SelectionConfig;
use rune_text::{MonospaceLayout, Point, Rect, TextRange};
use rune_textfield::{
    Clipboard, FocusController, HapticFeedback, HapticFeedbackType, TextFieldSelectionState,
    TextFieldValue, TextToolbar, ToolbarActions, ToolbarStatus, Viewport,
};

pub const CHAR_WIDTH: f32 = 10.0;
pub const LINE_HEIGHT: f32 = 20.0;

/// Scrollable window placed at `root_offset` in the root.
pub struct FakeViewport {
    bounds: Mutex<Option<Rect>>,
    root_offset: Point,
}

impl FakeViewport {
    pub fn new(bounds: Rect, root_offset: Point) -> Self {
        Self {
            bounds: Mutex::new(Some(bounds)),
            root_offset,
        }
    }

    pub fn set_bounds(&self, bounds: Option<Rect>) {
        *self.bounds.lock() = bounds;
    }
}

impl Viewport for FakeViewport {
    fn visible_bounds(&self) -> Option<Rect> {
        *self.bounds.lock()
    }

    fn local_to_root(&self, point: Point) -> Point {
        point + self.root_offset
    }
}

#[derive(Default)]
pub struct MemoryClipboard {
    text: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Mutex::new(Some(text.to_string())),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.text.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) {
        *self.text.lock() = Some(text.to_string());
    }

    fn get_text(&self) -> Option<String> {
        self.text.lock().clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarCall {
    Show(Rect, ToolbarActions),
    Hide,
}

#[derive(Default)]
pub struct RecordingToolbar {
    calls: Mutex<Vec<ToolbarCall>>,
    shown: Mutex<bool>,
}

impl RecordingToolbar {
    pub fn calls(&self) -> Vec<ToolbarCall> {
        self.calls.lock().clone()
    }

    pub fn last(&self) -> Option<ToolbarCall> {
        self.calls.lock().last().copied()
    }

    pub fn is_shown(&self) -> bool {
        *self.shown.lock()
    }
}

impl TextToolbar for RecordingToolbar {
    fn show_menu(&self, rect: Rect, actions: ToolbarActions) {
        self.calls.lock().push(ToolbarCall::Show(rect, actions));
        *self.shown.lock() = true;
    }

    fn hide(&self) {
        self.calls.lock().push(ToolbarCall::Hide);
        *self.shown.lock() = false;
    }

    fn status(&self) -> ToolbarStatus {
        if self.is_shown() {
            ToolbarStatus::Shown
        } else {
            ToolbarStatus::Hidden
        }
    }
}

#[derive(Default)]
pub struct CountingHaptics {
    count: AtomicUsize,
}

impl CountingHaptics {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl HapticFeedback for CountingHaptics {
    fn perform(&self, _kind: HapticFeedbackType) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Grants every focus request.
#[derive(Default)]
pub struct FakeFocus {
    keyboard_requests: AtomicUsize,
}

impl FakeFocus {
    pub fn keyboard_requests(&self) -> usize {
        self.keyboard_requests.load(Ordering::SeqCst)
    }
}

impl FocusController for FakeFocus {
    fn request_focus(&self) -> bool {
        true
    }

    fn show_keyboard(&self) {
        self.keyboard_requests.fetch_add(1, Ordering::SeqCst);
    }
}

/// A coordinator wired to fakes, with handles to inspect them.
pub struct Fixture {
    pub viewport: Arc<FakeViewport>,
    pub clipboard: Arc<MemoryClipboard>,
    pub toolbar: Arc<RecordingToolbar>,
    pub haptics: Arc<CountingHaptics>,
    pub focus: Arc<FakeFocus>,
}

impl Fixture {
    /// Viewport showing `(0, 0)..(200, 100)` of the field, placed at
    /// `(100, 50)` in the root.
    pub fn new() -> Self {
        Self {
            viewport: Arc::new(FakeViewport::new(
                Rect::new(0.0, 0.0, 200.0, 100.0),
                Point::new(100.0, 50.0),
            )),
            clipboard: Arc::new(MemoryClipboard::default()),
            toolbar: Arc::new(RecordingToolbar::default()),
            haptics: Arc::new(CountingHaptics::default()),
            focus: Arc::new(FakeFocus::default()),
        }
    }

    pub fn with_clipboard_text(mut self, text: &str) -> Self {
        self.clipboard = Arc::new(MemoryClipboard::with_text(text));
        self
    }

    pub fn state(&self, text: &str, selection: TextRange) -> TextFieldSelectionState {
        TextFieldSelectionState::new(
            TextFieldValue::new(text, selection),
            &SelectionConfig::default(),
        )
        .with_layout(Arc::new(MonospaceLayout::new(text, CHAR_WIDTH, LINE_HEIGHT)))
        .with_viewport(self.viewport.clone())
        .with_clipboard(self.clipboard.clone())
        .with_toolbar(self.toolbar.clone())
        .with_haptics(self.haptics.clone())
        .with_focus_controller(self.focus.clone())
    }
}
