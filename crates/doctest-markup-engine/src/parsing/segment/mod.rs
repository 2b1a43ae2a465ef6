//! # Example Block Segmentation
//!
//! Splits a body into [`Segment`]s tagged `Prose` or `Example`.
//!
//! ## Phases
//!
//! 1. **Line classification** (`classify`): each line is `Blank`, `Prompt`
//!    or `Text`
//! 2. **Segment construction** (`builder`): a [`SegmentBuilder`] walks the
//!    classes with three states (`Prose`, `InBlock`, `BlankInBlock`) and emits
//!    spans as they close
//!
//! ## Key Invariants
//!
//! - Segments are contiguous and in order; concatenated they reproduce the
//!   body byte for byte
//! - A blank run joins a block only when a prompt line follows it
//! - No block is left open: end of input closes it

pub mod builder;
pub mod types;

pub use builder::SegmentBuilder;
pub use types::{Segment, SegmentKind, SegmentSpan};

use std::{iter::FusedIterator, vec};

use super::{
    classify::DoctestLineClassifier,
    text::{Lines, lines_with_spans},
};

/// Lazily segments `body`.
///
/// Each call returns a fresh single-pass iterator; nothing is shared between
/// iterators over the same body.
pub fn segment(body: &str) -> Segments<'_> {
    Segments {
        body,
        lines: lines_with_spans(body),
        builder: Some(SegmentBuilder::new()),
        tail: Vec::new().into_iter(),
        cursor: 0,
    }
}

/// Iterator returned by [`segment`].
pub struct Segments<'a> {
    body: &'a str,
    lines: Lines<'a>,
    builder: Option<SegmentBuilder>,
    /// Segments flushed at end of input.
    tail: vec::IntoIter<SegmentSpan>,
    /// End of the last emitted segment.
    cursor: usize,
}

impl<'a> Segments<'a> {
    fn emit(&mut self, sp: SegmentSpan) -> Segment<'a> {
        debug_assert_eq!(sp.span.start, self.cursor, "segments must be contiguous");
        self.cursor = sp.span.end;
        log::trace!("segment {:?} {}..{}", sp.kind, sp.span.start, sp.span.end);
        Segment {
            kind: sp.kind,
            span: sp.span,
            text: sp.span.slice(self.body),
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        loop {
            if let Some(sp) = self.tail.next() {
                return Some(self.emit(sp));
            }

            let Some(builder) = self.builder.as_mut() else {
                debug_assert_eq!(self.cursor, self.body.len(), "segments must cover the body");
                return None;
            };
            if let Some(lr) = self.lines.next() {
                let lc = DoctestLineClassifier.classify(&lr);
                if let Some(sp) = builder.push(&lc) {
                    return Some(self.emit(sp));
                }
                continue;
            }

            // EOF flush
            if let Some(builder) = self.builder.take() {
                self.tail = builder.finish(self.body.len()).into_iter();
            }
        }
    }
}

impl FusedIterator for Segments<'_> {}
