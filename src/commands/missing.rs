use anyhow::Result;
use colored::Colorize;
use librarian::query::find_missing_evaluations;

use super::{load_plan, print_json};

pub fn missing_evaluations_command(directory: Option<&str>, all: bool, json: bool) -> Result<()> {
    let (plan, settings) = load_plan(directory)?;
    let limit = if all { None } else { Some(settings.missing_limit) };
    let missing = find_missing_evaluations(&plan, limit);

    if json {
        return print_json(&missing);
    }

    if missing.is_empty() {
        println!("{}", "Every DSU entry has an evaluation.".green());
        return Ok(());
    }

    println!("DSU entries without an evaluation:");
    for entry in &missing {
        println!("  {}  {}", entry.id.cyan(), entry.datetime_raw);
    }
    if let Some(limit) = limit
        && missing.len() == limit
    {
        println!("\nShowing the latest {limit}; pass --all to list every entry.");
    }
    Ok(())
}
