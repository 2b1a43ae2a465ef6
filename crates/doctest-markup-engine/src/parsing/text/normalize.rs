/// Tab stops used when expanding tabs in a body.
pub const TAB_SIZE: usize = 8;

/// Returns true if the line holds nothing but whitespace (newline included).
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Joins the lines of a paragraph into one line, trimming each.
pub fn collapse_lines(paragraph: &str) -> String {
    paragraph
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces every tab with spaces up to the next multiple of [`TAB_SIZE`].
///
/// The column counts chars and resets after `\n` or `\r`.
pub fn expand_tabs(text: &str) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + TAB_SIZE);
    let mut column = 0usize;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.push_str(&" ".repeat(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}

/// Removes the common leading-whitespace margin from every line.
///
/// Lines made only of spaces and tabs are emptied and do not take part in
/// computing the margin. Tabs and spaces are never treated as equal.
pub fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.split('\n') {
        let Some(indent) = indent_of(line) else {
            continue;
        };
        margin = Some(match margin {
            None => indent,
            Some(m) => common_prefix(m, indent),
        });
    }
    let margin = margin.unwrap_or("");

    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if indent_of(line).is_some() {
            out.push_str(line.strip_prefix(margin).unwrap_or(line));
        }
    }
    out
}

/// Leading spaces and tabs of a line that has other content.
fn indent_of(line: &str) -> Option<&str> {
    let content = line.trim_start_matches([' ', '\t']);
    if content.is_empty() {
        None
    } else {
        Some(&line[..line.len() - content.len()])
    }
}

// Margins only hold ASCII spaces and tabs, so byte offsets are char boundaries.
fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let n = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..n]
}
