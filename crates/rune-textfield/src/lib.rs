//! rune-textfield: selection, handle and toolbar coordination for editable
//! text fields.
//!
//! - `selection`: [`TextFieldSelectionState`], the coordinator owning the
//!   text snapshot, handle drags and visibility flags, with derived cursor,
//!   handle and toolbar views
//! - `edit`: text snapshots and the filtered edit choke point
//! - `gestures`: pointer events, recognizers and the per-surface detectors
//! - `session`: async driver running each detector as a tokio task
//! - `host`: collaborator traits (viewport, clipboard, toolbar, haptics,
//!   focus) implemented by the embedding UI

#[cfg(feature = "system-clipboard")]
pub mod clipboard;
pub mod edit;
pub mod error;
pub mod gestures;
pub mod handle;
pub mod host;
mod memo;
pub mod selection;
pub mod session;
pub mod toolbar;

#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
pub use edit::{EditBuffer, EditFilter, EditOutcome, TextFieldState, TextFieldValue};
pub use error::SessionError;
pub use gestures::{PointerDevice, PointerEvent, PointerEventKind, Surface, SurfaceDetectors};
pub use handle::{Handle, HandleDrag, HandleState};
pub use host::{
    Clipboard, FocusController, HapticFeedback, HapticFeedbackType, TextToolbar, ToolbarStatus,
    Viewport,
};
pub use selection::{SelectionUpdate, TextFieldSelectionState};
pub use session::{SharedSelectionState, TextFieldSession};
pub use toolbar::{ToolbarAction, ToolbarActions};
