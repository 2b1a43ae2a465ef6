use clap::{ArgAction, Parser, ValueEnum};
use doctest_markup_config::Config;
use doctest_markup_engine::{Format, FormatOptions};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Markdown,
    Rest,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => Format::Markdown,
            FormatArg::Rest => Format::Rest,
        }
    }
}

/// Render docstrings carrying `>>>` examples as Markdown or reStructuredText.
#[derive(Debug, Parser)]
#[command(name = "doctest-markup", version)]
pub struct Cli {
    /// Docstring files to render; `-` or nothing reads stdin
    pub files: Vec<PathBuf>,

    /// Output markup [default: markdown, or the config file's choice]
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Markdown heading level for the title
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..))]
    pub title_depth: Option<u8>,

    /// reST underline character for the title
    #[arg(long, value_name = "CHAR")]
    pub title_char: Option<char>,

    /// Treat the whole docstring as body
    #[arg(long)]
    pub no_title: bool,

    /// Keep indentation as written
    #[arg(long)]
    pub no_dedent: bool,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file [default: ~/.config/doctest-markup/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    pub fn resolve(&self, config: &Config) -> (Format, FormatOptions) {
        let format = self.format.map(Format::from).unwrap_or(config.format);

        let mut options = config.format_options();
        if let Some(depth) = self.title_depth {
            options = options.with_title_depth(Some(depth));
        }
        if let Some(ch) = self.title_char {
            options = options.with_title_char(Some(ch));
        }
        if self.no_title {
            options = options.without_title();
        }
        if self.no_dedent {
            options = options.with_dedent(false);
        }

        (format, options)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
