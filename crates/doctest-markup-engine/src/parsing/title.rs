use super::{
    classify::DoctestLineClassifier,
    text::{collapse_lines, expand_tabs, lines_with_spans},
};

/// A document split into its heading paragraph and the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleBody {
    /// First paragraph joined into one line.
    pub title: Option<String>,
    /// Remainder, trimmed, tabs expanded, ending in exactly one `\n`.
    pub body: Option<String>,
}

impl TitleBody {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitState {
    Title,
    Separator,
}

/// Splits `text` into title and body.
///
/// With `want_title` unset the whole trimmed text is body. Otherwise the title
/// is the leading run of non-blank lines, unless the text opens with a
/// prompt line, in which case there is no title. Blank lines after the title
/// are dropped; whatever follows is body.
pub fn split_title_body(text: &str, want_title: bool) -> TitleBody {
    let doc = text.trim();
    if doc.is_empty() {
        return TitleBody::default();
    }
    if !want_title {
        return TitleBody {
            title: None,
            body: normalize_body(doc),
        };
    }

    let mut lines = lines_with_spans(doc).map(|lr| DoctestLineClassifier.classify(&lr));
    let Some(first) = lines.next() else {
        return TitleBody::default();
    };
    if first.is_prompt() {
        return TitleBody {
            title: None,
            body: normalize_body(doc),
        };
    }

    let mut state = SplitState::Title;
    let mut title_end = first.line.end;
    let mut body_start = None;
    for lc in lines {
        match state {
            SplitState::Title if lc.is_blank() => state = SplitState::Separator,
            SplitState::Title => title_end = lc.line.end,
            SplitState::Separator if lc.is_blank() => {}
            SplitState::Separator => {
                body_start = Some(lc.line.start);
                break;
            }
        }
    }

    TitleBody {
        title: Some(collapse_lines(&doc[..title_end])),
        body: body_start.and_then(|start| normalize_body(&doc[start..])),
    }
}

fn normalize_body(text: &str) -> Option<String> {
    let mut body = expand_tabs(text.trim());
    if body.is_empty() {
        return None;
    }
    body.push('\n');
    Some(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn split(text: &str) -> (Option<String>, Option<String>) {
        let tb = split_title_body(text, true);
        (tb.title, tb.body)
    }

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\n \t\n")]
    fn blank_input_is_absent(#[case] text: &str) {
        assert!(split_title_body(text, true).is_empty());
        assert!(split_title_body(text, false).is_empty());
    }

    #[rstest]
    #[case("Title")]
    #[case("\nTitle")]
    #[case("Title\n")]
    #[case("\nTitle\n\n\n")]
    #[case("  Title  \n  \n")]
    fn title_only(#[case] text: &str) {
        assert_eq!(split(text), (some("Title"), None));
    }

    #[test]
    fn multiline_title_is_collapsed() {
        assert_eq!(split("\nMultiline\nTitle\n"), (some("Multiline Title"), None));
    }

    #[test]
    fn single_char_title_is_not_padded() {
        assert_eq!(split("\nT\n"), (some("T"), None));
    }

    #[rstest]
    #[case("Title\n\nText.")]
    #[case("Title\n\nText.\n\n")]
    #[case("Title\n\n\n\nText.")]
    #[case("Title\n   \n\t\nText.")]
    fn separators_collapse(#[case] text: &str) {
        assert_eq!(split(text), (some("Title"), some("Text.\n")));
    }

    #[test]
    fn body_keeps_inner_blank_lines() {
        assert_eq!(
            split("Title\n\nOne.\n\n\nTwo.\n"),
            (some("Title"), some("One.\n\n\nTwo.\n"))
        );
    }

    #[test]
    fn leading_prompt_means_no_title() {
        assert_eq!(
            split(">>> None\n\nText.\n"),
            (None, some(">>> None\n\nText.\n"))
        );
    }

    #[test]
    fn prompt_inside_title_run_stays_in_title() {
        assert_eq!(split("Title\n>>> 1\n"), (some("Title >>> 1"), None));
    }

    #[test]
    fn body_tabs_are_expanded() {
        assert_eq!(
            split("Title\n\n>>> if x:\n...\tpass"),
            (some("Title"), some(">>> if x:\n...     pass\n"))
        );
    }

    #[test]
    fn without_title_everything_is_body() {
        let tb = split_title_body("Title\n\nText.", false);
        assert_eq!(tb.title, None);
        assert_eq!(tb.body, some("Title\n\nText.\n"));
    }
}
