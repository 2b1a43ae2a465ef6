use super::{DocSource, FormatOptions, split_doc};

/// Shortest title underline emitted.
pub const MIN_UNDERLINE_WIDTH: usize = 3;

/// Renders `item` as reStructuredText.
///
/// The title is underlined with `options.title_char`. The body is emitted
/// verbatim: `>>>` blocks are already doctest blocks in reST. Absent or
/// blank input renders as `""`.
pub fn to_rest<D: DocSource + ?Sized>(item: &D, options: FormatOptions) -> String {
    let tb = split_doc(item, options.title_char.is_some(), options.dedent);
    if tb.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    if let (Some(ch), Some(title)) = (options.title_char, &tb.title) {
        let width = title.chars().count().max(MIN_UNDERLINE_WIDTH);
        out.push_str(title);
        out.push('\n');
        out.extend(std::iter::repeat_n(ch, width));
        out.push('\n');
    }

    if let Some(body) = &tb.body {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(body);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn rst(doc: &str, ch: Option<char>) -> String {
        to_rest(doc, FormatOptions::default().with_title_char(ch))
    }

    #[rstest]
    #[case('=')]
    #[case('-')]
    #[case('^')]
    #[case('"')]
    fn title_char(#[case] ch: char) {
        let expected = format!("Title\n{}\n", ch.to_string().repeat(5));
        assert_eq!(rst("\n    Title\n    ", Some(ch)), expected);
    }

    #[test]
    fn short_title_gets_minimum_underline() {
        assert_eq!(rst("\nT\n", Some('-')), "T\n---\n");
    }

    #[test]
    fn underline_counts_chars_not_bytes() {
        assert_eq!(rst("Ünï\n", Some('~')), "Ünï\n~~~\n");
        assert_eq!(rst("Café!\n", Some('=')), "Café!\n=====\n");
    }

    #[test]
    fn body_is_verbatim() {
        let doc = "Title\n\n>>> None\n\nText.\n\n>>> None\n";
        assert_eq!(
            rst(doc, Some('-')),
            "Title\n-----\n\n>>> None\n\nText.\n\n>>> None\n"
        );
    }

    #[test]
    fn no_title_mode_renders_body_only() {
        assert_eq!(rst("Title", None), "Title\n");
    }
}
