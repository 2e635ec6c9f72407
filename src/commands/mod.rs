mod dimensions;
mod get;
mod latest;
mod missing;
mod validate;

pub use dimensions::dimensions_command;
pub use get::get_dsu_command;
pub use latest::get_latest_command;
pub use missing::missing_evaluations_command;
pub use validate::validate_command;

use anyhow::{Context, Result};
use colored::Colorize;
use librarian::config::Settings;
use librarian::protocol::DsuEntry;
use librarian::tree::load_tree_with_config;
use librarian::{ValidationPlan, build_plan};
use std::path::PathBuf;

/// Resolve the directory to walk: the flag or env value, else the working directory
fn resolve_root(directory: Option<&str>) -> Result<PathBuf> {
    match directory {
        Some(dir) => {
            let trimmed = match dir.strip_suffix('/') {
                Some(rest) if !rest.is_empty() => rest,
                _ => dir,
            };
            Ok(PathBuf::from(trimmed))
        }
        None => std::env::current_dir().context("failed to determine the current directory"),
    }
}

/// Load settings and the tree below `directory`, then build its plan
fn load_plan(directory: Option<&str>) -> Result<(ValidationPlan, Settings)> {
    let root = resolve_root(directory)?;
    let settings = Settings::load(&root)?;
    let tree = load_tree_with_config(&root, &settings.loader)?;
    Ok((build_plan(tree), settings))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_entry(entry: &DsuEntry) {
    println!("{} {}", "DSU".bold(), entry.id.cyan());
    println!("  Date:           {}", entry.datetime_raw);
    println!("  Done yesterday: {}", entry.done_yesterday.trim());
    println!("  Doing today:    {}", entry.doing_today.trim());
    if !entry.blockers.trim().is_empty() {
        println!("  Blockers:       {}", entry.blockers.trim());
    }
    if !entry.remarks.trim().is_empty() {
        println!("  Remarks:        {}", entry.remarks.trim());
    }
}
