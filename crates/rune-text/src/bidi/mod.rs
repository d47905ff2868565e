//! Bidirectional text support built on `unicode-bidi`: the run direction
//! lookups used to orient selection handles.

pub mod levels;

pub use levels::{BaseDirection, ResolvedDirection, run_direction_at};
