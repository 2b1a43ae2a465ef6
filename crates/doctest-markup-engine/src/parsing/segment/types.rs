use crate::parsing::text::Span;

/// The kind of a body segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Plain text between example blocks.
    Prose,
    /// One or more chained interactive examples.
    Example,
}

/// A tagged span of a body, as emitted by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSpan {
    pub kind: SegmentKind,
    pub span: Span,
}

/// A tagged, borrowed slice of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    /// Byte span of `text` within the body.
    pub span: Span,
    pub text: &'a str,
}

impl Segment<'_> {
    pub fn is_example(&self) -> bool {
        self.kind == SegmentKind::Example
    }
}
