//! Skirmish sandbox - headless host loop for the combat core
//!
//! Usage: `skirmish-sandbox [CONFIG.toml] [--write-config]`
//!
//! Plays one scripted encounter and prints the session report as JSON.
//! Set `RUST_LOG=debug` to see every activation and hit.

mod sandbox;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use settings::SandboxSettings;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let mut config_path: Option<PathBuf> = None;
    let mut write_config = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--write-config" => write_config = true,
            _ => config_path = Some(PathBuf::from(arg)),
        }
    }

    if write_config {
        let path = SandboxSettings::default()
            .save()
            .context("Failed to write default settings")?;
        info!("Wrote default settings to {:?}", path);
        return Ok(());
    }

    let settings = SandboxSettings::load(config_path.as_deref());
    let report = sandbox::run(&settings)?;

    info!(
        survived = report.player_survived,
        defeated = report.enemies_defeated,
        elapsed_ms = report.elapsed_ms,
        "session finished"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
