use super::{
    kinds::Prompt,
    text::{LineRef, Span, is_blank},
};

/// What a single line looks like, judged without context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only.
    Blank,
    /// Opens an interactive example (`>>> ...`).
    Prompt,
    /// Anything else: prose, expected output, `...` continuations.
    Text,
}

/// Classification of a single line containing only local facts.
///
/// Both scanners consume these one at a time; neither looks at raw text.
#[derive(Debug, Clone, Copy)]
pub struct LineClass {
    /// Full byte span of this line, newline included.
    pub line: Span,
    pub kind: LineKind,
}

impl LineClass {
    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Blank
    }

    pub fn is_prompt(&self) -> bool {
        self.kind == LineKind::Prompt
    }
}

/// Classifies individual lines of a docstring.
pub struct DoctestLineClassifier;

impl DoctestLineClassifier {
    pub fn classify(&self, lr: &LineRef<'_>) -> LineClass {
        let kind = if is_blank(lr.text) {
            LineKind::Blank
        } else if Prompt::is_prompt(lr.text) {
            LineKind::Prompt
        } else {
            LineKind::Text
        };

        LineClass {
            line: lr.span,
            kind,
        }
    }
}
