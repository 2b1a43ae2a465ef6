use anyhow::{Context, Result, bail};
use clap::Parser;
use doctest_markup_config::Config;
use doctest_markup_engine::io;
use std::path::Path;
use std::process;

mod args;

use args::Cli;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let (format, options) = cli.resolve(&config);
    log::debug!("Rendering as {format:?} with {options:?}");

    let mut rendered = Vec::new();
    if cli.files.is_empty() {
        rendered.push(format.render(&read_input(Path::new("-"))?, options));
    }
    for path in &cli.files {
        let doc = read_input(path)?;
        let out = format.render(&doc, options);
        if out.is_empty() {
            log::warn!("{} has no docstring content", path.display());
        }
        rendered.push(out);
    }

    let output = join_outputs(rendered);
    match &cli.output {
        Some(path) => {
            io::write_output(path, &output)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{output}"),
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.clone());
            log::info!("Config path: {}", path.display());
            match Config::load_from_path(&path)? {
                Some(config) => Ok(config),
                None => bail!("config file not found: {}", path.display()),
            }
        }
        None => {
            let loaded = Config::load()?;
            if loaded.is_none() {
                log::debug!("No config file at {}", Config::config_path().display());
            }
            Ok(loaded.unwrap_or_default())
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return io::read_doc_from(std::io::stdin().lock()).context("reading stdin");
    }
    io::read_doc(path).with_context(|| format!("reading {}", path.display()))
}

/// Joins rendered documents with a blank line, skipping empty ones.
fn join_outputs(rendered: Vec<String>) -> String {
    rendered
        .into_iter()
        .filter(|r| !r.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
