//! # Snapshot Testing Support
//!
//! Utilities for testing the segmenter via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts segments to a stable `Snap` whose `Display`
//!   form is one line per segment, for inline `insta` snapshots
//! - **`invariants`**: Runtime checks for segmenter correctness (contiguous,
//!   non-empty, lossless)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize, render};
