// listwise CLI - parse dictated or scanned shopping lines, reconcile them with a list

mod exit_codes;
mod lexicon;
mod parse;
mod recon;
mod session;
mod util;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use listwise_config::Settings;

use exit_codes::{EXIT_ERROR, EXIT_IO, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "lw")]
#[command(about = "Turn free-form shopping lines into list items")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    /// Lexicon TOML to use instead of the configured or built-in vocabulary
    #[arg(long, global = true, env = "LISTWISE_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Settings file (default: <config dir>/listwise/settings.json)
    #[arg(long, global = true, env = "LISTWISE_SETTINGS")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse shopping lines (one item per line) into structured items
    #[command(after_help = "\
Examples:
  echo '2 kg de arroz' | lw parse
  lw parse scanned.txt --json
  lw parse --explain <<< 'Filtro de Café número 100'")]
    Parse {
        /// Text file with one line per item (omit to read from stdin)
        input: Option<PathBuf>,

        /// Output JSON to stdout instead of a table
        #[arg(long)]
        json: bool,

        /// Show how every token was classified
        #[arg(long)]
        explain: bool,
    },

    /// Reconcile parsed lines against a list snapshot
    #[command(after_help = "\
Examples:
  lw recon list.json scanned.txt
  lw recon list.json scanned.txt --on-conflict insert --json
  echo 'arroz' | lw recon list.json --exclude 0b7f6a0e-2a43-4c8e-8d0c-3b1f0f7f2c01")]
    Recon(recon::ReconArgs),

    /// Show a list snapshot grouped by store section
    #[command(after_help = "\
Examples:
  lw session list.json
  lw session list.json --json")]
    Session {
        /// List snapshot JSON
        snapshot: PathBuf,

        /// Output JSON to stdout instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Inspect or validate vocabulary tables
    Lexicon {
        #[command(subcommand)]
        command: lexicon::LexiconCommands,
    },
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("GIT_COMMIT_HASH"), ")",
        "\nparser:  listwise-parser ", env!("CARGO_PKG_VERSION"),
        "\nrecon:   listwise-recon ", env!("CARGO_PKG_VERSION"),
    )
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let ctx = Context {
        settings: match &cli.settings {
            Some(path) => Settings::load_from(path),
            None => Settings::load(),
        },
        lexicon_override: cli.lexicon,
    };

    let result = match cli.command {
        None => {
            // No subcommand = show help
            eprintln!("Usage: lw <command> [options]");
            eprintln!("       lw --help for more information");
            Ok(())
        }
        Some(Commands::Parse { input, json, explain }) => parse::cmd_parse(&ctx, input, json, explain),
        Some(Commands::Recon(args)) => recon::cmd_recon(&ctx, args),
        Some(Commands::Session { snapshot, json }) => session::cmd_session(&ctx, snapshot, json),
        Some(Commands::Lexicon { command }) => lexicon::cmd_lexicon(&ctx, command),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

/// Settings plus command-line overrides, shared by every command.
pub struct Context {
    pub settings: Settings,
    pub lexicon_override: Option<PathBuf>,
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, msg: impl Into<String>) -> Self {
        Self { code, message: msg.into(), hint: None }
    }

    pub fn args(msg: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, msg)
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::new(EXIT_IO, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(EXIT_ERROR, msg)
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
