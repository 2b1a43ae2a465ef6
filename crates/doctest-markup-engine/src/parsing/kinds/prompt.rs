use std::sync::OnceLock;

use regex::Regex;

/// Interactive-session prompts recognised in a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSig {
    /// `>>>`, the primary prompt that opens an example.
    Primary,
}

pub struct Prompt;

impl Prompt {
    pub const PS1: &'static str = ">>>";

    /// Returns the prompt signature if `line` is a prompt line.
    ///
    /// A prompt line is optional leading spaces, `>>>`, then a space or the
    /// end of the line. `line` may carry its `\n` or `\r\n`.
    pub fn sig(line: &str) -> Option<PromptSig> {
        static PS1_LINE: OnceLock<Regex> = OnceLock::new();
        let rx = PS1_LINE
            .get_or_init(|| Regex::new(r"^ *>>>(?: |\r?\n?$)").expect("Invalid prompt regex"));
        rx.is_match(line).then_some(PromptSig::Primary)
    }

    pub fn is_prompt(line: &str) -> bool {
        Self::sig(line).is_some()
    }
}
