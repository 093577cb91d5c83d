//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Actionable - extract action items from free-form notes.
#[derive(Debug, Parser)]
#[command(name = "actionable")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ACTIONABLE_CONFIG")]
    pub config: Option<String>,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON array of strings
    Json,
    /// One item per line
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract action items from notes
    Extract(ExtractArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Notes text
    pub text: Option<String>,

    /// Read notes from a file
    #[arg(short = 'i', long = "file")]
    pub file: Option<String>,

    /// Read notes from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Remove `todo:`-style keyword prefixes from items
    #[arg(long)]
    pub strip_keywords: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the configuration file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_with_inline_text() {
        let cli = Cli::parse_from(["actionable", "extract", "- [ ] Buy milk"]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.text.as_deref(), Some("- [ ] Buy milk"));
                assert!(!args.stdin);
                assert!(!args.strip_keywords);
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "actionable",
            "extract",
            "--stdin",
            "--strip-keywords",
            "--format",
            "json",
            "--no-color",
        ]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.no_color);
        match cli.command {
            Command::Extract(args) => {
                assert!(args.stdin);
                assert!(args.strip_keywords);
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["actionable", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["actionable"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert!(matches!(format, crate::config::OutputFormat::Quiet));
    }
}
