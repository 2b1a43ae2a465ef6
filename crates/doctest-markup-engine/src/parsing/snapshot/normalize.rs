use std::fmt;

use crate::parsing::segment::{SegmentKind, segment};

/// Snapshot of a segmented body for testing with `insta`.
pub struct Snap {
    pub segments: Vec<SegmentSnap>,
}

/// Snapshot of a single segment.
pub struct SegmentSnap {
    pub kind: SegmentKind,
    /// Byte span as (start, end) tuple.
    pub span: (usize, usize),
    pub text: String,
}

/// Segments `body` into a stable snapshot.
pub fn normalize(body: &str) -> Snap {
    let segments = segment(body)
        .map(|s| SegmentSnap {
            kind: s.kind,
            span: (s.span.start, s.span.end),
            text: s.text.to_string(),
        })
        .collect();

    Snap { segments }
}

/// One line per segment: `Kind start..end "escaped text"`.
pub fn render(body: &str) -> String {
    normalize(body).to_string()
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.segments.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:?} {}..{} {:?}", s.kind, s.span.0, s.span.1, s.text)?;
        }
        Ok(())
    }
}
