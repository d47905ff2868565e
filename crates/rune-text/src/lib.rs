//! rune-text: text primitives for editable text fields.
//!
//! - `layout`: ranges, geometry, the text layout oracle contract and a
//!   monospace reference layout
//! - `adjustment`: snapping raw selection offsets to character, word or
//!   paragraph boundaries
//! - `unicode`: grapheme cluster and char boundary helpers
//! - `bidi`: paragraph levels and run direction lookups
//!
//! Offsets are UTF-8 byte offsets into the source text and are always kept
//! on `char` boundaries.

pub mod adjustment;
pub mod bidi;
pub mod layout;
pub mod unicode;

pub use adjustment::{SelectionAdjustment, adjust_selection};
pub use bidi::ResolvedDirection;

pub use layout::{
    LayoutDirection, LineLookup, MonospaceLayout, Point, Rect, Size, TextLayoutOracle, TextRange,
    WordBoundary, WordBoundaryKind,
};
