use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Overrides the default `~/.extracto` state directory.
pub const HOME_ENV: &str = "EXTRACTO_HOME";

pub fn extracto_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".extracto"))
}

pub fn ensure_extracto_home() -> Result<PathBuf> {
    let dir = extracto_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
