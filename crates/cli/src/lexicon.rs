//! `lw lexicon`: inspect and validate vocabulary tables.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Subcommand;
use listwise_lexicon::Lexicon;
use serde::Serialize;

use crate::exit_codes::EXIT_LEXICON_INVALID;
use crate::util::{load_lexicon, print_json};
use crate::{CliError, Context};

#[derive(Subcommand)]
pub enum LexiconCommands {
    /// Validate a lexicon TOML file without using it
    #[command(after_help = "\
Examples:
  lw lexicon check en-US.toml")]
    Check {
        /// Path to the lexicon TOML file
        file: PathBuf,
    },

    /// Print the active vocabulary
    #[command(after_help = "\
Examples:
  lw lexicon show
  lw lexicon show --json
  lw --lexicon en-US.toml lexicon show")]
    Show {
        /// Output JSON to stdout instead of a listing
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct LexiconView<'a> {
    locale: &'a str,
    default_unit: &'a str,
    decimal_separator: char,
    /// Canonical label -> accepted forms, both sorted.
    units: BTreeMap<&'a str, Vec<&'a str>>,
    numbers: BTreeMap<&'a str, String>,
}

impl<'a> LexiconView<'a> {
    fn of(lexicon: &'a Lexicon) -> Self {
        let mut units: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (form, label) in lexicon.unit_forms() {
            units.entry(label).or_default().push(form);
        }
        for forms in units.values_mut() {
            forms.sort_unstable();
        }
        let numbers = lexicon
            .number_words()
            .map(|(word, value)| (word, value.normalize().to_string()))
            .collect();
        Self {
            locale: lexicon.locale(),
            default_unit: lexicon.default_unit(),
            decimal_separator: lexicon.decimal_separator(),
            units,
            numbers,
        }
    }
}

pub fn cmd_lexicon(ctx: &Context, cmd: LexiconCommands) -> Result<(), CliError> {
    match cmd {
        LexiconCommands::Check { file } => cmd_lexicon_check(file),
        LexiconCommands::Show { json } => cmd_lexicon_show(ctx, json),
    }
}

fn cmd_lexicon_check(file: PathBuf) -> Result<(), CliError> {
    let lexicon = Lexicon::load(&file).map_err(|e| {
        CliError::new(EXIT_LEXICON_INVALID, format!("{}: {e}", file.display()))
    })?;
    let view = LexiconView::of(&lexicon);
    eprintln!(
        "ok: {} ({}), {} unit label(s), {} number word(s)",
        file.display(),
        view.locale,
        view.units.len(),
        view.numbers.len(),
    );
    Ok(())
}

fn cmd_lexicon_show(ctx: &Context, json: bool) -> Result<(), CliError> {
    let lexicon = load_lexicon(ctx)?;
    let view = LexiconView::of(&lexicon);
    if json {
        return print_json(&view);
    }

    println!("locale:            {}", view.locale);
    println!("default unit:      {}", view.default_unit);
    println!("decimal separator: {}", view.decimal_separator);
    println!();
    println!("units:");
    for (label, forms) in &view.units {
        println!("  {:<14} {}", label, forms.join(", "));
    }
    println!();
    println!("numbers:");
    for (word, value) in &view.numbers {
        println!("  {:<14} {}", word, value);
    }
    Ok(())
}
