//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract - scripts rely on them.
//!
//! | Code | Meaning                                            |
//! |------|----------------------------------------------------|
//! | 0    | Success                                            |
//! | 1    | General error (unspecified)                        |
//! | 2    | Usage error (bad args, bad item id)                |
//! | 3    | Reconciliation left conflicts awaiting a decision  |
//! | 4    | Lexicon file invalid                               |
//! | 5    | List snapshot invalid                              |
//! | 6    | IO error (read/write input, output, snapshot)      |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, malformed `--exclude` id.
pub const EXIT_USAGE: u8 = 2;

/// `recon` with `--on-conflict ask` found same-name items under another unit.
/// Output is still written; the caller must decide and re-run.
pub const EXIT_RECON_CONFLICTS: u8 = 3;

/// Lexicon TOML failed to parse or validate.
pub const EXIT_LEXICON_INVALID: u8 = 4;

/// Snapshot JSON failed to parse or breaks an item invariant.
pub const EXIT_SNAPSHOT_INVALID: u8 = 5;

/// Reading input or writing output failed.
pub const EXIT_IO: u8 = 6;
