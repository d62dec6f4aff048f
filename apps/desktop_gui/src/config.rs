use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::format::{is_renderable_date_format, DEFAULT_CURRENCY_SYMBOL, DEFAULT_DATE_FORMAT};

pub const CONFIG_FILE_NAME: &str = "directory.toml";
const CONFIG_DIR_NAME: &str = "employee-directory";

const DEFAULT_TOAST_SECONDS: f32 = 4.0;
const MIN_TOAST_SECONDS: f32 = 1.0;
const MAX_TOAST_SECONDS: f32 = 30.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub seed_path: Option<PathBuf>,
    pub currency_symbol: String,
    pub date_format: String,
    pub toast_seconds: f32,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Employee Directory".into(),
            seed_path: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.into(),
            date_format: DEFAULT_DATE_FORMAT.into(),
            toast_seconds: DEFAULT_TOAST_SECONDS,
            log_filter: "info".into(),
        }
    }
}

/// Settings plus what happened while resolving them. Warnings are collected
/// rather than logged because the subscriber is configured from these settings.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

pub fn load_settings(explicit_path: Option<&Path>) -> LoadedSettings {
    let mut warnings = Vec::new();
    let mut settings = Settings::default();

    let source = resolve_config_path(explicit_path, &mut warnings);
    if let Some(path) = &source {
        match read_settings_file(path) {
            Ok(file_settings) => settings = file_settings,
            Err(err) => warnings.push(format!("{err:#}; using defaults")),
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok(), &mut warnings);
    sanitize(&mut settings, &mut warnings);

    LoadedSettings {
        settings,
        source,
        warnings,
    }
}

fn resolve_config_path(explicit_path: Option<&Path>, warnings: &mut Vec<String>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        warnings.push(format!(
            "config file '{}' not found; using defaults",
            path.display()
        ));
        return None;
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

pub fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    parse_settings(&raw).with_context(|| format!("failed to parse config file '{}'", path.display()))
}

fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    Ok(toml::from_str::<Settings>(raw)?)
}

/// Later names win; blank values are skipped.
pub fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
    warnings: &mut Vec<String>,
) {
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = read("APP__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = read("APP__SEED_PATH") {
        settings.seed_path = Some(PathBuf::from(v));
    }
    if let Some(v) = read("APP__CURRENCY_SYMBOL") {
        settings.currency_symbol = v;
    }
    if let Some(v) = read("APP__DATE_FORMAT") {
        settings.date_format = v;
    }
    if let Some(v) = read("APP__TOAST_SECONDS") {
        match v.trim().parse::<f32>() {
            Ok(parsed) => settings.toast_seconds = parsed,
            Err(_) => warnings.push(format!("APP__TOAST_SECONDS '{v}' is not a number; ignored")),
        }
    }

    if let Some(v) = read("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = read("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

fn sanitize(settings: &mut Settings, warnings: &mut Vec<String>) {
    if !settings.toast_seconds.is_finite() {
        warnings.push("toast_seconds is not finite; using default".to_string());
        settings.toast_seconds = DEFAULT_TOAST_SECONDS;
    }
    settings.toast_seconds = settings
        .toast_seconds
        .clamp(MIN_TOAST_SECONDS, MAX_TOAST_SECONDS);

    if !is_renderable_date_format(&settings.date_format) {
        warnings.push(format!(
            "date_format '{}' cannot be rendered; using '{DEFAULT_DATE_FORMAT}'",
            settings.date_format
        ));
        settings.date_format = DEFAULT_DATE_FORMAT.into();
    }

    if settings.window_title.trim().is_empty() {
        settings.window_title = Settings::default().window_title;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
