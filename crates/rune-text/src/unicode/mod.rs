//! Unicode helpers: grapheme cluster steps for "one character" moves and
//! char boundary clamping, so offsets coming from layout or gestures can be
//! used to slice the text safely.

pub mod graphemes;

pub use graphemes::{floor_char_boundary, next_grapheme_boundary, prev_grapheme_boundary};
