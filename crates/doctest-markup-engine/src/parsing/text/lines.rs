use std::str::SplitInclusive;

use super::span::Span;

/// A reference to a single line of text with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line (includes newline if present).
    pub span: Span,
    /// The line text, newline included.
    pub text: &'a str,
}

/// Iterator returned by [`lines_with_spans`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    inner: SplitInclusive<'a, char>,
    offset: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = LineRef<'a>;

    fn next(&mut self) -> Option<LineRef<'a>> {
        let line = self.inner.next()?;
        let start = self.offset;
        self.offset += line.len();
        Some(LineRef {
            span: Span {
                start,
                end: self.offset,
            },
            text: line,
        })
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Newline characters are kept on each line so spans tile the input with no
/// gaps. A final line without a newline is still yielded.
pub fn lines_with_spans(text: &str) -> Lines<'_> {
    Lines {
        inner: text.split_inclusive('\n'),
        offset: 0,
    }
}
