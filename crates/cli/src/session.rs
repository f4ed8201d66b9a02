//! `lw session`: a list snapshot walked section by section.

use std::path::PathBuf;

use listwise_core::{format_quantity, group_by_section};

use crate::util::{print_json, read_snapshot};
use crate::{CliError, Context};

pub fn cmd_session(ctx: &Context, snapshot: PathBuf, json: bool) -> Result<(), CliError> {
    let snapshot = read_snapshot(&snapshot)?
        .ok_or_else(|| CliError::io(format!("cannot read snapshot {}", snapshot.display())))?;
    let groups = group_by_section(&snapshot.items, &ctx.settings.fallback_section);

    if json {
        return print_json(&groups);
    }

    for group in &groups {
        println!("{}", group.section);
        for item in &group.items {
            let mark = if item.picked { "x" } else { " " };
            println!("  [{mark}] {:>6} {:<12} {}", format_quantity(item.quantity), item.unit, item.name);
        }
    }
    let picked = snapshot.items.iter().filter(|i| i.picked).count();
    eprintln!("{} of {} item(s) picked, {} section(s)", picked, snapshot.items.len(), groups.len());
    Ok(())
}
