//! Actionable CLI - pull action items out of free-form notes.

use actionable_cli::commands;
use actionable_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout carries only results
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> actionable_cli::Result<()> {
    let config_path = match cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::default_path()?,
    };
    let config = Config::load_from(&config_path)?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let output = match cli.command {
        Command::Extract(args) => {
            let stdin = std::io::stdin();
            commands::execute_extract(args, &config, &formatter, stdin.lock())?
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?
        }
    };

    println!("{}", output);
    Ok(())
}
