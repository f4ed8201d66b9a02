use std::io::{self, Read};
use std::path::{Path, PathBuf};

use listwise_lexicon::Lexicon;
use listwise_recon::{load_snapshot, ListSnapshot};

use crate::exit_codes::{EXIT_LEXICON_INVALID, EXIT_SNAPSHOT_INVALID};
use crate::{CliError, Context};

/// Lines of `input`, or of stdin when no file is given.
pub fn read_lines(input: Option<&Path>) -> Result<Vec<String>, CliError> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CliError::io(format!("cannot read stdin: {e}")))?;
            buf
        }
    };
    Ok(text.lines().map(str::to_string).collect())
}

/// Lexicon selected by `--lexicon`, then settings, then the built-in table.
pub fn load_lexicon(ctx: &Context) -> Result<Lexicon, CliError> {
    let path: Option<&PathBuf> = ctx
        .lexicon_override
        .as_ref()
        .or(ctx.settings.lexicon_path.as_ref());
    match path {
        Some(path) => Lexicon::load(path).map_err(|e| {
            CliError::new(EXIT_LEXICON_INVALID, e.to_string())
                .with_hint("check the file with: lw lexicon check <FILE>")
        }),
        None => Ok(Lexicon::builtin().clone()),
    }
}

/// Read and validate a snapshot file.
///
/// `Ok(None)` means the file could not be read at all; the caller decides
/// whether that is fatal.
pub fn read_snapshot(path: &Path) -> Result<Option<ListSnapshot>, CliError> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("cannot read snapshot {}: {e}", path.display());
            return Ok(None);
        }
    };
    load_snapshot(&json)
        .map(Some)
        .map_err(|e| CliError::new(EXIT_SNAPSHOT_INVALID, format!("{}: {e}", path.display())))
}

/// Pretty JSON to stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::internal(format!("JSON serialization error: {e}")))?;
    println!("{json}");
    Ok(())
}
