use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE_DEPTH: u8 = 2;
pub const DEFAULT_TITLE_CHAR: char = '-';

/// Rendering options shared by both output formats.
///
/// Markdown reads `title_depth`, reST reads `title_char`; `None` in either
/// means "do not parse a title", so the whole document becomes body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Markdown heading level for the title.
    pub title_depth: Option<u8>,
    /// reST underline character for the title.
    pub title_char: Option<char>,
    /// Strip the common indentation margin before splitting.
    pub dedent: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            title_depth: Some(DEFAULT_TITLE_DEPTH),
            title_char: Some(DEFAULT_TITLE_CHAR),
            dedent: true,
        }
    }
}

impl FormatOptions {
    #[must_use]
    pub fn with_title_depth(self, title_depth: Option<u8>) -> Self {
        Self {
            title_depth,
            ..self
        }
    }

    #[must_use]
    pub fn with_title_char(self, title_char: Option<char>) -> Self {
        Self { title_char, ..self }
    }

    #[must_use]
    pub fn with_dedent(self, dedent: bool) -> Self {
        Self { dedent, ..self }
    }

    /// Disables title parsing for both formats.
    #[must_use]
    pub fn without_title(self) -> Self {
        Self {
            title_depth: None,
            title_char: None,
            ..self
        }
    }
}
