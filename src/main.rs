use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod commands;

use commands::{
    dimensions_command, get_dsu_command, get_latest_command, missing_evaluations_command,
    validate_command,
};

#[derive(Parser)]
#[command(
    name = "tome",
    about = "Validates and queries Tome.gg training and evaluation documents",
    version,
    author,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Repository directory to walk (defaults to the current directory)
    #[arg(short, long, env = "TOME_DIRECTORY", global = true)]
    directory: Option<String>,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every training and evaluation document
    Validate,

    /// List DSU entries that no evaluation references
    #[command(visible_alias = "missing")]
    MissingEvaluations {
        /// List every entry instead of only the latest few
        #[arg(long)]
        all: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one DSU entry
    #[command(visible_alias = "get")]
    GetDsu {
        /// Id of the DSU entry
        #[arg(short = 'u', long = "uuid")]
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Show the most recently dated DSU entry
    #[command(visible_alias = "latest")]
    GetLatest {
        #[arg(long)]
        json: bool,
    },

    /// List every declared evaluation dimension
    Dimensions {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let directory = cli.directory.as_deref();
    match cli.command {
        Commands::Validate => return validate_command(directory),
        Commands::MissingEvaluations { all, json } => {
            missing_evaluations_command(directory, all, json)?;
        }
        Commands::GetDsu { id, json } => get_dsu_command(directory, &id, json)?,
        Commands::GetLatest { json } => get_latest_command(directory, json)?,
        Commands::Dimensions { json } => dimensions_command(directory, json)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("librarian=warn"),
        1 => EnvFilter::new("librarian=info"),
        _ => EnvFilter::new("librarian=debug"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
