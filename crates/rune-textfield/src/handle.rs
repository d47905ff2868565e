use rune_text::{Point, ResolvedDirection};

/// A draggable affordance attached to the text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Cursor,
    SelectionStart,
    SelectionEnd,
}

impl Handle {
    pub fn selection(is_start: bool) -> Self {
        if is_start {
            Handle::SelectionStart
        } else {
            Handle::SelectionEnd
        }
    }
}

/// Visibility and placement of one handle, in inner text field coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleState {
    pub visible: bool,
    pub position: Point,
    pub direction: ResolvedDirection,
    pub handles_crossed: bool,
}

impl HandleState {
    pub const HIDDEN: HandleState = HandleState {
        visible: false,
        position: Point::ZERO,
        direction: ResolvedDirection::Ltr,
        handles_crossed: false,
    };
}

impl Default for HandleState {
    fn default() -> Self {
        Self::HIDDEN
    }
}

/// The handle currently under the pointer and where the pointer is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleDrag {
    pub handle: Handle,
    pub position: Point,
}
