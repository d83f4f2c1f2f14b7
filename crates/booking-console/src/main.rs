//! Cinema booking console.

use std::path::PathBuf;

use anyhow::{Context, Result};
use booking_console::config::ConsoleConfig;
use booking_console::replay::replay;
use booking_console::{spawn_engine, Console};
use booking_core::BookingEngine;
use clap::{Parser, Subcommand};
use tokio::fs::File;
use tokio::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "cinema-booking")]
#[clap(about = "Book seats for a single-screen cinema from the console")]
struct Cli {
    /// TOML configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging (overrides RUST_LOG)
    #[clap(short, long)]
    debug: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive menu on stdin/stdout (default)
    Interactive,

    /// Feed a line-codec script through the engine and print the replies
    Replay {
        /// Script file, one command per line
        script: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = ConsoleConfig::load(cli.config.as_deref())?;
    info!(brand = %config.brand, booking_prefix = %config.booking_prefix, "starting console");

    let (engine, engine_task) = spawn_engine(BookingEngine::with_prefix(config.booking_prefix.clone()));

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = BufReader::new(io::stdin());
            let mut console = Console::new(stdin, io::stdout(), engine, config);
            console.run().await?;
        }
        Command::Replay { script } => {
            let file = File::open(&script)
                .await
                .with_context(|| format!("opening script {}", script.display()))?;
            let mut stdout = io::stdout();
            let processed = replay(BufReader::new(file), &mut stdout, engine).await?;
            info!(processed, "replay finished");
        }
    }

    engine_task.await.context("engine task failed")?;
    Ok(())
}

/// Logs go to stderr so they never mix with the console transcript.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
