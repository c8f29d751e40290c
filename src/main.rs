mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::list::ListArgs;
use days_core::{DateValue, store};

#[derive(Parser)]
#[command(name = "days")]
#[command(about = "Keep a log of dated, categorized events and list them relative to today")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, optionally filtered
    List(ListArgs),
    /// Add an event dated today, or on --date
    Add {
        /// Event date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Event category (may be empty)
        #[arg(long)]
        category: Option<String>,

        /// Event description
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete every event whose stored line contains the given date
    Delete {
        /// Date text to match (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Show what would be deleted without changing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Show resolved paths and settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let cfg = config::load_config()?;
    let home = config::home_dir()?;
    let dir_override = std::env::var(config::DAYS_DIR_ENV).ok();
    let paths = config::Paths::resolve(&cfg, &home, dir_override.as_deref());
    log::debug!("events file: {}", paths.events_path.display());

    if let Commands::Config = cli.command {
        return commands::config::run(&cfg, &paths);
    }

    prepare_storage(&cfg, &paths)?;

    let today = DateValue::today();

    match cli.command {
        Commands::List(args) => commands::list::run(&paths.events_path, &args, &today),
        Commands::Add {
            date,
            category,
            description,
        } => commands::add::run(&paths.events_path, &today, date, category, description),
        Commands::Delete { date, dry_run } => {
            commands::delete::run(&paths.events_path, date, dry_run)
        }
        Commands::Config => Ok(()),
    }
}

/// Make sure the events file exists, creating it when the config allows.
fn prepare_storage(cfg: &config::Config, paths: &config::Paths) -> Result<()> {
    if paths.events_path.exists() {
        return Ok(());
    }

    if !cfg.create_missing {
        let missing = if paths.data_dir.exists() {
            &paths.events_path
        } else {
            &paths.data_dir
        };
        anyhow::bail!("{} does not exist, please create it", missing.display());
    }

    store::ensure_events_file(&paths.events_path)?;
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()))
        .init();
}
