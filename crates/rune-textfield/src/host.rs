//! Services the selection coordinator borrows from its host.
//!
//! Every collaborator is optional. A coordinator without a toolbar simply
//! never shows one, one without a viewport treats every handle as off
//! screen unless it is being dragged.

use rune_text::{Point, Rect};

use crate::toolbar::ToolbarActions;

/// The visible window onto the inner text field.
pub trait Viewport: Send + Sync {
    /// Part of the inner text field currently shown, in inner text field
    /// coordinates. `None` while the field is not attached.
    fn visible_bounds(&self) -> Option<Rect>;

    /// Convert a point from inner text field coordinates to root coordinates.
    fn local_to_root(&self, point: Point) -> Point;
}

pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str);

    fn get_text(&self) -> Option<String>;

    fn has_text(&self) -> bool {
        self.get_text().is_some_and(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarStatus {
    Shown,
    Hidden,
}

/// Floating menu offering clipboard actions for the selection.
pub trait TextToolbar: Send + Sync {
    /// Show (or move) the menu anchored to `rect` in root coordinates.
    /// The host reports a picked action back through
    /// [`TextFieldSelectionState::on_toolbar_action`](crate::TextFieldSelectionState::on_toolbar_action).
    fn show_menu(&self, rect: Rect, actions: ToolbarActions);

    fn hide(&self);

    fn status(&self) -> ToolbarStatus;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticFeedbackType {
    /// A handle or the selection moved to a new offset.
    TextHandleMove,
}

pub trait HapticFeedback: Send + Sync {
    fn perform(&self, kind: HapticFeedbackType);
}

/// Focus and soft keyboard control of the hosting field.
pub trait FocusController: Send + Sync {
    /// Ask for input focus. Returns whether the field is focused afterwards.
    fn request_focus(&self) -> bool;

    fn show_keyboard(&self);
}
