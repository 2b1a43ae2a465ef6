//! # Output Formats
//!
//! Renders a docstring as Markdown or reStructuredText.
//!
//! Both formats share the same front half: take the docstring from a
//! [`DocSource`], optionally dedent it, then split title from body. They only
//! differ in how the title is marked up and whether example blocks get
//! fenced.

pub mod markdown;
pub mod options;
pub mod rest;
pub mod source;

pub use markdown::to_markdown;
pub use options::FormatOptions;
pub use rest::to_rest;
pub use source::DocSource;

use serde::{Deserialize, Serialize};

use crate::parsing::{TitleBody, split_title_body, text::dedent};

/// Target markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Markdown,
    Rest,
}

impl Format {
    pub fn render<D: DocSource + ?Sized>(self, item: &D, options: FormatOptions) -> String {
        match self {
            Format::Markdown => to_markdown(item, options),
            Format::Rest => to_rest(item, options),
        }
    }
}

/// The title of `item`, or `None` if it has none.
///
/// Only `options.dedent` is consulted; the title is always looked for.
pub fn title<D: DocSource + ?Sized>(item: &D, options: FormatOptions) -> Option<String> {
    split_doc(item, true, options.dedent).title
}

/// The body of `item` after its title, or `None` if there is nothing left.
pub fn body<D: DocSource + ?Sized>(item: &D, options: FormatOptions) -> Option<String> {
    split_doc(item, true, options.dedent).body
}

pub(crate) fn split_doc<D: DocSource + ?Sized>(
    item: &D,
    want_title: bool,
    dedent_first: bool,
) -> TitleBody {
    let Some(doc) = item.doc() else {
        return TitleBody::default();
    };
    if dedent_first {
        split_title_body(&dedent(doc), want_title)
    } else {
        split_title_body(doc, want_title)
    }
}
