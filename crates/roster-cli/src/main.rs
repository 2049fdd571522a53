mod config;
mod demo;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::{LogFormat, LoggingConfig, RosterConfig, SystemName};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roster")]
#[command(version, about = "In-memory entity catalogs for five small management systems", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the scripted walkthrough of one system, or all of them
    Demo {
        /// System to replay; defaults to the `[demo] systems` configuration
        #[arg(value_enum)]
        system: Option<SystemName>,
    },
    /// Print the seeded catalogs of a system as pretty JSON
    Show {
        #[arg(value_enum)]
        system: SystemName,
    },
    /// Explain how the catalogs are organised
    Explain,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = RosterConfig::load()?.apply_env_overrides()?;
    init_tracing(&config.logging)?;
    roster_core::init()?;

    match &config.source {
        Some(path) => info!(path = %path.display(), "configuration loaded"),
        None => warn!(
            "Configuration file not found (set {}). Using default configuration.",
            config::CONFIG_PATH_VAR
        ),
    }
    info!(version = env!("CARGO_PKG_VERSION"), "Starting roster");

    match cli.command {
        Commands::Demo { system: Some(system) } => demo::run(system)?,
        Commands::Demo { system: None } => {
            for system in config.demo_systems() {
                demo::run(system)?;
            }
        }
        Commands::Show { system } => {
            let snapshot = demo::snapshot(system)?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Commands::Explain => explain_command(),
    }

    Ok(())
}

/// Install the global fmt subscriber; logs go to stderr so `show` output stays clean
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&logging.filter)
        .with_context(|| format!("invalid log filter '{}'", logging.filter))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|err| anyhow::anyhow!(err))
}

fn explain_command() {
    println!("Roster - Explain Mode");
    println!("Each system keeps its records in entity catalogs.");
    println!("\nA catalog holds:");
    println!("  - the records in insertion order, for positional lookups and scans");
    println!("  - a key index for constant-time lookups");
    println!("  - optionally a group index (employees by department)");
    println!("  - named tag sets (skills, specialties, genres, cuisines, ...)");
    println!("\nTag sets only grow when records are added; removing a record keeps its tags.");
    println!("Systems: employee, hospital, inventory, library, restaurant");
}
