//! # Docstring Parsing
//!
//! Two line scanners over a docstring, both fed by the same line classifier.
//!
//! - **`title`**: splits a document into heading paragraph and body
//! - **`segment`**: splits a body into prose and example blocks
//!
//! Neither scanner backtracks: each line is classified once and drives a
//! small explicit state machine.

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod snapshot;
pub mod text;
pub mod title;

#[cfg(test)]
mod tests;

pub use classify::{DoctestLineClassifier, LineClass, LineKind};
pub use segment::{Segment, SegmentKind, Segments, segment};
pub use title::{TitleBody, split_title_body};
