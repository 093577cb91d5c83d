//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<String> {
    match args.action {
        ConfigAction::Show => config.to_toml(),
        ConfigAction::Path => Ok(path.display().to_string()),
        ConfigAction::Init { force } => init_config(path, force, formatter),
    }
}

/// Write the default configuration file.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<String> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    Ok(formatter.success(&format!("Wrote default configuration to {}", path.display())))
}
