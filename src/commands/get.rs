use anyhow::Result;
use librarian::query::dsu_by_id;

use super::{load_plan, print_entry, print_json};

pub fn get_dsu_command(directory: Option<&str>, id: &str, json: bool) -> Result<()> {
    let (plan, _settings) = load_plan(directory)?;
    let entry = dsu_by_id(&plan, id)?;

    if json {
        return print_json(&entry);
    }
    print_entry(&entry);
    Ok(())
}
