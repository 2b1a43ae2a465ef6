use crate::parsing::segment;

use super::{DocSource, FormatOptions, split_doc};

/// Info string on fences around interactive examples.
pub const EXAMPLE_LANGUAGE: &str = "pycon";

/// Renders `item` as Markdown.
///
/// The title becomes an ATX heading of level `options.title_depth`; every
/// example block in the body is wrapped in a fenced code block. Absent or
/// blank input renders as `""`.
pub fn to_markdown<D: DocSource + ?Sized>(item: &D, options: FormatOptions) -> String {
    let tb = split_doc(item, options.title_depth.is_some(), options.dedent);
    if tb.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    if let (Some(depth), Some(title)) = (options.title_depth, &tb.title) {
        out.push_str(&"#".repeat(usize::from(depth)));
        out.push(' ');
        out.push_str(title);
        out.push('\n');
    }

    if let Some(body) = &tb.body {
        if !out.is_empty() {
            out.push('\n');
        }
        for s in segment(body) {
            if s.is_example() {
                out.push_str("```");
                out.push_str(EXAMPLE_LANGUAGE);
                out.push('\n');
                out.push_str(s.text);
                out.push_str("```\n");
            } else {
                out.push_str(s.text);
            }
        }
    }

    out
}
