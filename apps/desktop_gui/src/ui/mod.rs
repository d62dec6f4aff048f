//! UI layer for the desktop directory: app shell, views, and theme.

pub mod app;
pub mod theme;

pub use app::{DirectoryApp, PersistedUiSettings, SETTINGS_STORAGE_KEY};
