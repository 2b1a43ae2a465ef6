pub mod lines;
pub mod normalize;
pub mod span;

pub use lines::{LineRef, Lines, lines_with_spans};
pub use normalize::{collapse_lines, dedent, expand_tabs, is_blank};
pub use span::Span;
