//! Error types for text field sessions.

use thiserror::Error;

use crate::gestures::Surface;

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors returned when feeding input into a session.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The session has been shut down.
    #[error("text field session has been shut down")]
    Closed,

    /// No gesture detectors are attached to the surface.
    #[error("no gesture detectors attached to {0:?}")]
    Detached(Surface),
}
