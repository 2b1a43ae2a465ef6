//! Integration tests for the parsing module.
//!
//! Runs the splitter and segmenter together and checks the segment
//! invariants on every body they produce.

use rstest::rstest;

use crate::parsing::{SegmentKind, segment, snapshot, split_title_body};

#[rstest]
#[case(">>> None\n")]
#[case("Text.\n")]
#[case("\n\n\n")]
#[case(">>> a\n\n\n>>> b\n\n\nc\n\n")]
#[case("  >>> indented\n  out\n\nprose\n  >>> again")]
#[case(">>>\n>>>\n\n>>>\n")]
#[case("héllo\n>>> 'ünïcode'\n'ünïcode'\n\nbye ✓\n")]
#[case("crlf\r\n>>> 1\r\n1\r\n\r\ntext\r\n")]
fn segmentation_is_lossless(#[case] body: &str) {
    snapshot::invariants(body, segment(body));
}

#[test]
fn crlf_blank_lines_are_blank() {
    let body = ">>> 1\r\n\r\n>>> 2\r\n";
    let segments: Vec<_> = segment(body).collect();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].kind, SegmentKind::Example);
}

#[test]
fn split_body_segments_cleanly() {
    let doc = "Title\n\nParagraph.\n\n>>> X * 100\n'yzyz...'\n\nAnother paragraph.\n\n>>> None\n>>> True\nTrue\n";
    let tb = split_title_body(doc, true);
    assert_eq!(tb.title.as_deref(), Some("Title"));

    let body = tb.body.unwrap();
    snapshot::invariants(&body, segment(&body));
    let kinds: Vec<_> = segment(&body).map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SegmentKind::Prose,
            SegmentKind::Example,
            SegmentKind::Prose,
            SegmentKind::Example,
        ]
    );
}

#[test]
fn blank_run_at_end_of_document_never_joins_block() {
    // Bodies from the splitter end in one newline; raw input may not.
    for body in [">>> 1\n\n", ">>> 1\n   \n  \n", ">>> 1\n\n "] {
        let segments: Vec<_> = segment(body).collect();
        assert_eq!(segments.len(), 2, "body: {body:?}");
        assert_eq!(segments[0].text, ">>> 1\n");
        assert_eq!(segments[1].kind, SegmentKind::Prose);
    }
}

#[test]
fn blank_run_between_block_and_prose_is_prose() {
    let body = ">>> 1\n1\n\n\nText.\n";
    let segments: Vec<_> = segment(body).collect();
    assert_eq!(segments[0].text, ">>> 1\n1\n");
    assert_eq!(segments[1].text, "\n\nText.\n");
}
