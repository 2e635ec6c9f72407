use anyhow::Result;
use librarian::query::latest_dsu;

use super::{load_plan, print_entry, print_json};

pub fn get_latest_command(directory: Option<&str>, json: bool) -> Result<()> {
    let (plan, _settings) = load_plan(directory)?;
    let entry = latest_dsu(&plan)?;

    if json {
        return print_json(&entry);
    }
    print_entry(&entry);
    Ok(())
}
