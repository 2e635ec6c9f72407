use anyhow::Result;
use colored::Colorize;
use librarian::query::dimensions;

use super::{load_plan, print_json};

pub fn dimensions_command(directory: Option<&str>, json: bool) -> Result<()> {
    let (plan, _settings) = load_plan(directory)?;
    let found = dimensions(&plan);

    if json {
        let list: Vec<_> = found.values().collect();
        return print_json(&list);
    }

    if found.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    println!("Dimensions:");
    for (alias, dimension) in &found {
        println!(
            "  {:<16} {:<24} {}",
            alias.cyan(),
            dimension.label(),
            dimension.definition
        );
    }
    Ok(())
}
