pub mod format;
pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use format::{DocSource, Format, FormatOptions, body, title, to_markdown, to_rest};
pub use parsing::{Segment, SegmentKind, Segments, TitleBody, segment, split_title_body};
