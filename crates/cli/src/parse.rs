//! `lw parse`: free-form lines to structured items.

use std::path::PathBuf;

use listwise_core::{format_quantity, CandidateItem};
use listwise_parser::{ClassifiedToken, Parser, Rejection, TokenClass};
use serde::Serialize;

use crate::util::{load_lexicon, print_json, read_lines};
use crate::{CliError, Context};

/// One input line with the trail that produced (or failed to produce) an item.
#[derive(Serialize)]
struct ExplainedLine<'a> {
    line: usize,
    text: &'a str,
    tokens: Vec<ClassifiedToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<CandidateItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<String>,
}

pub fn cmd_parse(ctx: &Context, input: Option<PathBuf>, json: bool, explain: bool) -> Result<(), CliError> {
    let lexicon = load_lexicon(ctx)?;
    let parser = Parser::new(&lexicon);
    let lines = read_lines(input.as_deref())?;

    if explain {
        let explained: Vec<ExplainedLine> = lines
            .iter()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(i, text)| {
                let outcome = parser.explain(text);
                let (item, rejection) = match outcome.result {
                    Ok(item) => (Some(item), None),
                    Err(r) => (None, Some(r.to_string())),
                };
                ExplainedLine { line: i + 1, text, tokens: outcome.tokens, item, rejection }
            })
            .collect();
        if json {
            return print_json(&explained);
        }
        for entry in &explained {
            println!("{}: {}", entry.line, entry.text);
            for token in &entry.tokens {
                println!("    {:<16} {}", token.text, describe(token));
            }
            match (&entry.item, &entry.rejection) {
                (Some(item), _) => println!("  => {}", render(item)),
                (None, Some(reason)) => println!("  => skipped ({reason})"),
                (None, None) => {}
            }
        }
        return Ok(());
    }

    let items = parse_lines(&parser, &lines);
    if json {
        print_json(&items)?;
    } else {
        for item in &items {
            println!("{}", render(item));
        }
    }
    eprintln!("parsed {} item(s) from {} line(s)", items.len(), lines.len());
    Ok(())
}

/// Parse every line, noting skipped ones on stderr. Blank lines are silent.
pub fn parse_lines(parser: &Parser<'_>, lines: &[String]) -> Vec<CandidateItem> {
    let mut items = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        match parser.explain(line).result {
            Ok(item) => items.push(item),
            Err(Rejection::EmptyInput) => {}
            Err(reason) => eprintln!("note: line {} skipped: {reason}: {:?}", i + 1, line),
        }
    }
    items
}

pub fn render(item: &CandidateItem) -> String {
    format!("{:>6} {:<12} {}", format_quantity(item.quantity), item.unit, item.name)
}

fn describe(token: &ClassifiedToken) -> String {
    match &token.class {
        TokenClass::LeadingQuantity { value } => format!("quantity {value}"),
        TokenClass::Unit { label } => format!("unit {label}"),
        TokenClass::NumberIndicator => "number indicator".into(),
        TokenClass::IndicatorNumber => "indicator number".into(),
        TokenClass::Name => "name".into(),
        TokenClass::Discard => "discarded".into(),
    }
}
