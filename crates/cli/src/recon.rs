//! `lw recon`: reconcile parsed lines against an existing list.

use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, ValueEnum};
use listwise_config::ConflictPolicy;
use listwise_core::{format_quantity, ExistingItem, ItemId};
use listwise_parser::Parser;
use listwise_recon::{
    compute_summary, reconcile, CommitPlan, ReconSummary, ReconciliationOutcome, Resolution,
};
use serde::Serialize;

use crate::exit_codes::EXIT_RECON_CONFLICTS;
use crate::parse::{parse_lines, render};
use crate::util::{load_lexicon, print_json, read_lines, read_snapshot};
use crate::{CliError, Context};

#[derive(Args)]
pub struct ReconArgs {
    /// List snapshot JSON ({"list_id": ..., "items": [...]})
    snapshot: PathBuf,

    /// Text file with one line per item (omit to read from stdin)
    input: Option<PathBuf>,

    /// Item id to ignore when matching (the item being edited)
    #[arg(long, value_name = "ID")]
    exclude: Option<String>,

    /// What to do with same-name, different-unit items (default from settings)
    #[arg(long, value_enum)]
    on_conflict: Option<OnConflict>,

    /// Output JSON to stdout instead of a listing
    #[arg(long)]
    json: bool,

    /// Write JSON output to file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Fail instead of treating every line as new when the snapshot is unreadable
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OnConflict {
    Ask,
    Insert,
    Discard,
}

impl From<OnConflict> for ConflictPolicy {
    fn from(arg: OnConflict) -> Self {
        match arg {
            OnConflict::Ask => ConflictPolicy::Ask,
            OnConflict::Insert => ConflictPolicy::Insert,
            OnConflict::Discard => ConflictPolicy::Discard,
        }
    }
}

#[derive(Serialize)]
struct ReconReport {
    policy: ConflictPolicy,
    summary: ReconSummary,
    /// Present when conflicts are left to the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<ReconciliationOutcome>,
    /// Present when a conflict policy was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<CommitPlan>,
    /// Existing items as they read after the merges in `plan`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    merged: Vec<ExistingItem>,
}

pub fn cmd_recon(ctx: &Context, args: ReconArgs) -> Result<(), CliError> {
    let exclude = args
        .exclude
        .as_deref()
        .map(|s| {
            s.parse::<ItemId>()
                .map_err(|e| CliError::args(format!("invalid --exclude id '{s}': {e}")))
        })
        .transpose()?;
    let policy = args.on_conflict.map(ConflictPolicy::from).unwrap_or(ctx.settings.on_conflict);

    let lexicon = load_lexicon(ctx)?;
    let parser = Parser::new(&lexicon);
    let lines = read_lines(args.input.as_deref())?;
    let candidates = parse_lines(&parser, &lines);

    let outcome = match read_snapshot(&args.snapshot)? {
        Some(snapshot) => reconcile(&candidates, &snapshot, exclude),
        None if args.strict => {
            return Err(CliError::io(format!("cannot read snapshot {}", args.snapshot.display())));
        }
        None => {
            eprintln!(
                "warning: cannot read {}; treating every item as new",
                args.snapshot.display()
            );
            ReconciliationOutcome::all_new(&candidates)
        }
    };
    let summary = compute_summary(&outcome);

    let report = match policy {
        ConflictPolicy::Ask => ReconReport {
            policy,
            summary,
            outcome: Some(outcome),
            plan: None,
            merged: Vec::new(),
        },
        ConflictPolicy::Insert | ConflictPolicy::Discard => {
            let resolution = if policy == ConflictPolicy::Insert {
                Resolution::InsertAnyway
            } else {
                Resolution::Discard
            };
            let plan = outcome.resolve_all(resolution);
            let now = Utc::now();
            let merged = plan.merges.iter().map(|m| m.merged(now)).collect();
            ReconReport { policy, summary, outcome: None, plan: Some(plan), merged }
        }
    };

    if let Some(ref path) = args.output {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::internal(format!("JSON serialization error: {e}")))?;
        std::fs::write(path, json)
            .map_err(|e| CliError::io(format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if args.json {
        print_json(&report)?;
    } else {
        print_listing(&report);
    }

    let s = &report.summary;
    eprintln!(
        "recon: {} item(s), {} new, {} merged, {} conflict(s)",
        s.total_candidates, s.inserts, s.merges, s.conflicts,
    );

    if policy == ConflictPolicy::Ask && s.conflicts > 0 {
        return Err(CliError::new(
            EXIT_RECON_CONFLICTS,
            format!("{} item(s) need a decision: {}", s.conflicts, s.conflict_names.join(", ")),
        )
        .with_hint("rerun with --on-conflict insert or --on-conflict discard"));
    }
    Ok(())
}

fn print_listing(report: &ReconReport) {
    if let Some(ref outcome) = report.outcome {
        for item in &outcome.to_insert {
            println!("new       {}", render(item));
        }
        for m in &outcome.to_merge {
            println!("merge     {}  (now {})", render(&m.candidate), format_quantity(m.merged(Utc::now()).quantity));
        }
        for c in &outcome.conflicts {
            println!(
                "conflict  {}  (list has {} {})",
                render(&c.candidate),
                format_quantity(c.existing.quantity),
                c.existing.unit,
            );
        }
    }
    if let Some(ref plan) = report.plan {
        for item in &plan.inserts {
            println!("new       {}", render(item));
        }
        for item in &report.merged {
            println!("merge     {:>6} {:<12} {}", format_quantity(item.quantity), item.unit, item.name);
        }
        for item in &plan.discarded {
            println!("discard   {}", render(item));
        }
    }
}
