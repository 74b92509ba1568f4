//! JobNest CLI
//!
//! Track job applications from the terminal. Data lives in a local SQLite
//! key-value store under the data directory.

mod commands;
mod config;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::add::AddArgs;
use commands::edit::EditArgs;
use commands::list::ListArgs;
use config::Paths;
use jobnest_core::db::open_db;
use jobnest_core::{
    default_log_level, init_logging, ApplicationService, KvApplicationRepository,
    SqliteKeyValueStore,
};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobnest")]
#[command(author, version, about = "JobNest - track your job applications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the database and logs
    #[arg(long, global = true, env = "JOBNEST_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level written to <data-dir>/logs (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "JOBNEST_LOG_LEVEL")]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new job application
    Add(AddArgs),

    /// List applications with optional filters
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show every field of one application
    Show {
        /// Application id or unique id prefix
        id: String,
    },

    /// Edit fields of one application
    Edit(EditArgs),

    /// Delete one application
    #[command(alias = "rm")]
    Delete {
        /// Application id or unique id prefix
        id: String,
    },

    /// Headline counters and the five most recent applications
    Dashboard,

    /// Breakdown by status and by month
    Summary,

    /// Conversion rates and daily trend
    Stats,

    /// Write the collection as a JSON array
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the collection with a JSON array from a file
    Import {
        /// JSON file in the exported shape
        file: PathBuf,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn log_level(explicit: Option<&str>) -> &str {
    explicit.unwrap_or(default_log_level())
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = Paths::resolve(cli.data_dir.as_deref())?;
    paths.ensure_data_dir()?;

    let level = log_level(cli.log_level.as_deref());
    init_logging(level, paths.log_dir()).context("Failed to initialize logging")?;

    let conn = open_db(paths.db_path())
        .with_context(|| format!("Failed to open database {}", paths.db_path().display()))?;
    let store = SqliteKeyValueStore::try_new(&conn)?;
    let service = ApplicationService::new(KvApplicationRepository::new(store));
    info!("event=cli_command module=cli status=start");

    match cli.command {
        Commands::Add(args) => commands::add::execute(&service, args),
        Commands::List(args) => commands::list::execute(&service, args),
        Commands::Show { id } => commands::show::execute(&service, &id),
        Commands::Edit(args) => commands::edit::execute(&service, args),
        Commands::Delete { id } => commands::delete::execute(&service, &id),
        Commands::Dashboard => commands::dashboard::execute(&service),
        Commands::Summary => commands::summary::execute(&service),
        Commands::Stats => commands::stats::execute(&service),
        Commands::Export { output } => commands::transfer::export(&service, output.as_deref()),
        Commands::Import { file } => commands::transfer::import(&service, &file),
    }
}

#[cfg(test)]
mod tests {
    use super::{log_level, Cli};
    use clap::CommandFactory;
    use jobnest_core::default_log_level;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_level_prefers_explicit_value() {
        let owned = String::from("warn");
        assert_eq!(log_level(Some(owned.as_str())), "warn");
        assert_eq!(log_level(None), default_log_level());
    }
}
