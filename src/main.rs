mod app;
mod config;
mod models;
mod mvu;
mod services;
mod ui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, Cli};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli)?;

    app::run(config)
        .map_err(|err| anyhow::anyhow!("{err}"))
        .context("Failed to run the contacts UI")
}
