//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use actionable_extractor::ActionItemExtractor;
use std::fs;
use std::io::Read;
use tracing::debug;

/// Execute the extract command.
pub fn execute_extract<R: Read>(
    args: ExtractArgs,
    config: &Config,
    formatter: &Formatter,
    stdin: R,
) -> Result<String> {
    let notes = read_notes(&args, stdin)?;

    let mut extractor_config = config.extractor.clone();
    if args.strip_keywords {
        extractor_config.strip_keyword_prefixes = true;
    }
    let extractor = ActionItemExtractor::new(extractor_config)?;

    debug!("Extracting from {} bytes of notes", notes.len());
    let items = extractor.extract(&notes);

    formatter.format_items(&items)
}

/// Read notes from exactly one of: inline text, `--file`, `--stdin`.
fn read_notes<R: Read>(args: &ExtractArgs, mut stdin: R) -> Result<String> {
    let sources = [args.text.is_some(), args.file.is_some(), args.stdin]
        .iter()
        .filter(|&&given| given)
        .count();
    if sources != 1 {
        return Err(CliError::InvalidInput(
            "Specify exactly one of TEXT, --file or --stdin".to_string(),
        ));
    }

    if let Some(text) = &args.text {
        Ok(text.clone())
    } else if let Some(path) = &args.file {
        Ok(fs::read_to_string(path)?)
    } else {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}
