use crate::parsing::{classify::LineClass, text::Span};

use super::types::{SegmentKind, SegmentSpan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Prose {
        start: usize,
    },
    InBlock {
        start: usize,
    },
    /// Blank lines after a block; they join it only if a prompt follows.
    BlankInBlock {
        start: usize,
        block_end: usize,
    },
}

/// Line-at-a-time state machine splitting a body into prose and examples.
///
/// Every `push` emits at most one finished segment; `finish` flushes what
/// is still open. Empty prose is never emitted.
pub struct SegmentBuilder {
    state: ScanState,
}

impl SegmentBuilder {
    pub fn new() -> Self {
        Self {
            state: ScanState::Prose { start: 0 },
        }
    }

    pub fn push(&mut self, c: &LineClass) -> Option<SegmentSpan> {
        match self.state {
            ScanState::Prose { start } => {
                if !c.is_prompt() {
                    return None;
                }
                self.state = ScanState::InBlock {
                    start: c.line.start,
                };
                prose(start, c.line.start)
            }
            ScanState::InBlock { start } => {
                if c.is_blank() {
                    self.state = ScanState::BlankInBlock {
                        start,
                        block_end: c.line.start,
                    };
                }
                None
            }
            ScanState::BlankInBlock { start, block_end } => {
                if c.is_blank() {
                    None
                } else if c.is_prompt() {
                    self.state = ScanState::InBlock { start };
                    None
                } else {
                    self.state = ScanState::Prose { start: block_end };
                    Some(example(start, block_end))
                }
            }
        }
    }

    /// Flushes the open state at end of input `end`.
    ///
    /// An unterminated block ends at `end`; a trailing blank run after a
    /// block is prose.
    pub fn finish(self, end: usize) -> Vec<SegmentSpan> {
        match self.state {
            ScanState::Prose { start } => prose(start, end).into_iter().collect(),
            ScanState::InBlock { start } => vec![example(start, end)],
            ScanState::BlankInBlock { start, block_end } => {
                std::iter::once(example(start, block_end))
                    .chain(prose(block_end, end))
                    .collect()
            }
        }
    }
}

impl Default for SegmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn prose(start: usize, end: usize) -> Option<SegmentSpan> {
    (start < end).then_some(SegmentSpan {
        kind: SegmentKind::Prose,
        span: Span { start, end },
    })
}

fn example(start: usize, end: usize) -> SegmentSpan {
    SegmentSpan {
        kind: SegmentKind::Example,
        span: Span { start, end },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::classify::LineKind;

    fn line(start: usize, end: usize, kind: LineKind) -> LineClass {
        LineClass {
            line: Span { start, end },
            kind,
        }
    }

    #[test]
    fn prompt_closes_leading_prose() {
        let mut b = SegmentBuilder::new();
        assert_eq!(b.push(&line(0, 6, LineKind::Text)), None);
        assert_eq!(
            b.push(&line(6, 15, LineKind::Prompt)),
            Some(SegmentSpan {
                kind: SegmentKind::Prose,
                span: Span::new(0, 6)
            })
        );
        assert_eq!(
            b.finish(15),
            vec![SegmentSpan {
                kind: SegmentKind::Example,
                span: Span::new(6, 15)
            }]
        );
    }

    #[test]
    fn prompt_at_start_emits_no_empty_prose() {
        let mut b = SegmentBuilder::new();
        assert_eq!(b.push(&line(0, 9, LineKind::Prompt)), None);
    }

    #[test]
    fn blank_then_prompt_stays_in_block() {
        let mut b = SegmentBuilder::new();
        b.push(&line(0, 9, LineKind::Prompt));
        assert_eq!(b.push(&line(9, 10, LineKind::Blank)), None);
        assert_eq!(b.push(&line(10, 11, LineKind::Blank)), None);
        assert_eq!(b.push(&line(11, 20, LineKind::Prompt)), None);
        assert_eq!(
            b.finish(20),
            vec![SegmentSpan {
                kind: SegmentKind::Example,
                span: Span::new(0, 20)
            }]
        );
    }

    #[test]
    fn blank_then_text_closes_block_before_blanks() {
        let mut b = SegmentBuilder::new();
        b.push(&line(0, 9, LineKind::Prompt));
        b.push(&line(9, 10, LineKind::Blank));
        assert_eq!(
            b.push(&line(10, 16, LineKind::Text)),
            Some(SegmentSpan {
                kind: SegmentKind::Example,
                span: Span::new(0, 9)
            })
        );
        assert_eq!(
            b.finish(16),
            vec![SegmentSpan {
                kind: SegmentKind::Prose,
                span: Span::new(9, 16)
            }]
        );
    }

    #[test]
    fn trailing_blank_run_is_prose() {
        let mut b = SegmentBuilder::new();
        b.push(&line(0, 9, LineKind::Prompt));
        b.push(&line(9, 10, LineKind::Blank));
        b.push(&line(10, 12, LineKind::Blank));
        assert_eq!(
            b.finish(12),
            vec![
                SegmentSpan {
                    kind: SegmentKind::Example,
                    span: Span::new(0, 9)
                },
                SegmentSpan {
                    kind: SegmentKind::Prose,
                    span: Span::new(9, 12)
                },
            ]
        );
    }

    #[test]
    fn empty_input_finishes_with_nothing() {
        assert!(SegmentBuilder::new().finish(0).is_empty());
    }
}
