//! Pointer input for the text field and its handles.
//!
//! - `pointer`: raw pointer events
//! - `recognizer`: taps, drags, long-press drags and presses from events
//! - `detector`: recognized gestures applied to [`TextFieldSelectionState`]

pub mod detector;
pub mod pointer;
pub mod recognizer;

use rune_config::GestureConfig;

pub use detector::{
    CursorHandleDragDetector, CursorHandleTapDetector, FieldTapDetector, GestureDetector,
    LongPressDragDetector, SelectionHandleDragDetector, SelectionHandlePressDetector,
    TouchModeDetector,
};
pub use pointer::{PointerDevice, PointerEvent, PointerEventKind};
pub use recognizer::{
    DragGesture, DragRecognizer, LongPressDragRecognizer, PressGesture, PressRecognizer,
    TapGesture, TapRecognizer,
};

use crate::selection::TextFieldSelectionState;

/// Element receiving pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The text field body.
    Field,
    CursorHandle,
    SelectionStart,
    SelectionEnd,
}

impl Surface {
    pub const ALL: [Surface; 4] = [
        Surface::Field,
        Surface::CursorHandle,
        Surface::SelectionStart,
        Surface::SelectionEnd,
    ];
}

/// Fresh detectors for `surface`, in the order events reach them.
pub fn detectors_for(surface: Surface, config: &GestureConfig) -> Vec<Box<dyn GestureDetector>> {
    match surface {
        Surface::Field => vec![
            Box::new(TouchModeDetector),
            Box::new(FieldTapDetector::new(config)),
            Box::new(LongPressDragDetector::new(config)),
        ],
        Surface::CursorHandle => vec![
            Box::new(TouchModeDetector),
            Box::new(CursorHandleDragDetector::new(config)),
            Box::new(CursorHandleTapDetector::new(config)),
        ],
        Surface::SelectionStart | Surface::SelectionEnd => {
            let is_start = surface == Surface::SelectionStart;
            vec![
                Box::new(TouchModeDetector),
                Box::new(SelectionHandlePressDetector::new(is_start)),
                Box::new(SelectionHandleDragDetector::new(is_start, config)),
            ]
        }
    }
}

/// All detectors of one surface, driven synchronously.
///
/// For hosts that run their own event loop; [`crate::TextFieldSession`]
/// runs the same detectors as tasks.
pub struct SurfaceDetectors {
    surface: Surface,
    detectors: Vec<Box<dyn GestureDetector>>,
}

impl SurfaceDetectors {
    pub fn new(surface: Surface, config: &GestureConfig) -> Self {
        Self {
            surface,
            detectors: detectors_for(surface, config),
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn on_event(&mut self, state: &mut TextFieldSelectionState, event: &PointerEvent) {
        for detector in &mut self.detectors {
            detector.on_event(state, event);
        }
    }

    /// Tear every detector down. Returns whether any state was cleared.
    pub fn teardown(&mut self, state: &mut TextFieldSelectionState) -> bool {
        self.detectors
            .iter_mut()
            .fold(false, |cleared, detector| detector.teardown(state) || cleared)
    }
}
