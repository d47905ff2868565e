pub mod boundaries;
pub mod cursor;
pub mod geometry;
pub mod monospace;
pub mod oracle;
pub mod selection;

pub use boundaries::{
    WordBoundary, WordBoundaryKind, compute_word_boundaries, paragraph_boundary_at,
    word_boundary_at,
};
pub use cursor::centered_cursor_rect;
pub use geometry::{Point, Rect, Size};
pub use monospace::MonospaceLayout;
pub use oracle::{LayoutDirection, LineLookup, TextLayoutOracle};
pub use selection::TextRange;
