use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use directory::{default_seed, load_seed, DirectoryController};
use eframe::egui;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::load_settings;
use crate::ui::{DirectoryApp, PersistedUiSettings, SETTINGS_STORAGE_KEY};

/// eframe storage namespace; independent of the configurable window title.
const APP_ID: &str = "employee-directory";

#[derive(Parser, Debug)]
#[command(name = "employee-directory", about = "In-memory employee directory")]
struct Args {
    /// Path to a directory.toml; defaults to ./directory.toml, then the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON file with the initial employees (read once, never written).
    #[arg(long)]
    seed: Option<PathBuf>,
    #[arg(long)]
    title: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let loaded = load_settings(args.config.as_deref());
    let mut settings = loaded.settings;
    if let Some(seed) = args.seed {
        settings.seed_path = Some(seed);
    }
    if let Some(title) = args.title.filter(|title| !title.trim().is_empty()) {
        settings.window_title = title;
    }

    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &loaded.source {
        Some(path) => info!(path = %path.display(), "loaded settings"),
        None => info!("no settings file found; using defaults"),
    }
    for warning in &loaded.warnings {
        warn!("{warning}");
    }

    let employees = match &settings.seed_path {
        Some(path) => load_seed(path)
            .with_context(|| format!("failed to load employee seed '{}'", path.display()))?,
        None => default_seed(),
    };
    info!(count = employees.len(), "starting employee directory");
    let controller = DirectoryController::new(employees);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_ID,
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedUiSettings>(&text).ok())
            });
            Ok(Box::new(DirectoryApp::new(controller, settings, persisted)))
        }),
    )
    .map_err(|err| anyhow!("desktop UI exited with error: {err}"))
}
