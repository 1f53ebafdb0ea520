pub mod capture;
pub mod config;
pub mod ocr;

use std::path::Path;

use anyhow::{Context, Result};
use glyphshot_core::config::AppConfig;

pub(crate) fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    AppConfig::load(path).context("Failed to load config")
}
