use anyhow::Result;
use colored::Colorize;
use librarian::validation::Registry;
use std::process::ExitCode;

use super::load_plan;

pub fn validate_command(directory: Option<&str>) -> Result<ExitCode> {
    let (mut plan, _settings) = load_plan(directory)?;
    println!("Validating directory: {}", plan.tree().directory(plan.tree().root()).path());

    let outcome = Registry::standard().run(&mut plan);

    println!();
    print!("{}", plan.tree().status_report());
    println!();

    for warning in &outcome.warnings {
        println!("{} {warning}", "warning:".yellow().bold());
    }

    let Some(first) = outcome.errors.first() else {
        println!("{}", "✅ All validations passed!".green());
        return Ok(ExitCode::SUCCESS);
    };

    eprintln!("{:?}", miette::Report::new(first.error.clone()));
    eprintln!(
        "{}",
        format!(
            "❌ Validation failed with {} error(s), first in {}",
            outcome.errors.len(),
            first.path
        )
        .red()
    );
    Ok(ExitCode::FAILURE)
}
