//! notetree - parse and inspect indented outline notes

pub mod cli;
pub mod domain;
pub mod graph;
pub mod infra;
pub mod wiki;

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_check, handle_completions, handle_stats, handle_tree},
};
use domain::PropertySchema;
use wiki::WikiParser;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let parser = WikiParser::new(PropertySchema::standard())
        .with_tab_width(config.tab_width(cli.tab_width));

    match &cli.command {
        Command::Check(args) => handle_check(args, &parser, &config.extensions()),
        Command::Tree(args) => handle_tree(args, &parser),
        Command::Stats(args) => handle_stats(args, &parser),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the `-v` count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
