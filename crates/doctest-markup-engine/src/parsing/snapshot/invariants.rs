use crate::parsing::segment::Segment;

/// Validates segmenter output invariants.
///
/// Asserts that:
/// - Segments are contiguous, start at 0 and end at `body.len()`
/// - Each segment's text is the body sliced with its span
/// - No segment is empty
/// - Concatenating segment texts reproduces `body`
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check<'a>(body: &str, segments: impl IntoIterator<Item = Segment<'a>>) {
    let mut cursor = 0usize;
    let mut rebuilt = String::with_capacity(body.len());
    for s in segments {
        assert_eq!(
            s.span.start, cursor,
            "segment does not start where the previous one ended: {:?}",
            s.span
        );
        assert!(
            s.span.start < s.span.end && s.span.end <= body.len(),
            "segment span empty or out of bounds: {:?} (body len: {})",
            s.span,
            body.len()
        );
        assert_eq!(s.text, s.span.slice(body), "segment text differs from its span");
        rebuilt.push_str(s.text);
        cursor = s.span.end;
    }
    assert_eq!(cursor, body.len(), "segments do not cover the body");
    assert_eq!(rebuilt, body, "segments do not reproduce the body");
}
