use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use reelscout::config::{Config, ConfigStore};
use reelscout::favorites::FavoritesStore;
use reelscout::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "reelscout", version, about = "Look up movies and keep a favorites list, in the terminal")]
struct Args {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// OMDb API key; overrides the config file.
    #[arg(long, env = "OMDB_API_KEY")]
    api_key: Option<String>,

    /// Path of the favorites file; overrides the config file.
    #[arg(long)]
    favorites_file: Option<PathBuf>,

    /// Write logs to this file instead of discarding them.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    // Stderr is the terminal UI, so logs only go somewhere when a file
    // is given.
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .init();

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_ref())?;

    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)?;

    if let Some(api_key) = args.api_key {
        config.catalog.api_key = api_key;
    }
    if let Some(path) = args.favorites_file {
        config.storage.favorites_path = Some(path);
    }

    if config.catalog.api_key.trim().is_empty() {
        bail!(
            "No OMDb API key configured. Set catalog.api_key in '{}', \
             pass --api-key, or set OMDB_API_KEY.",
            config_path.display()
        );
    }

    let store = match &config.storage.favorites_path {
        Some(path) => FavoritesStore::new(path.clone()),
        None => FavoritesStore::open_default(),
    };

    let config_store = ConfigStore::new(config);
    runtime::run(config_store, store).context("Terminal UI failed")?;

    Ok(())
}
