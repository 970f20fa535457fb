use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$INTAKE_HOME`, or `~/.intake`. `None` when neither variable is usable.
pub fn intake_home() -> Option<PathBuf> {
    resolve_home(std::env::var("INTAKE_HOME").ok(), std::env::var("HOME").ok())
}

fn resolve_home(intake_home: Option<String>, home: Option<String>) -> Option<PathBuf> {
    let non_blank = |s: String| (!s.trim().is_empty()).then_some(s);
    if let Some(dir) = intake_home.and_then(non_blank) {
        return Some(PathBuf::from(dir));
    }
    home.and_then(non_blank).map(|h| PathBuf::from(h).join(".intake"))
}

/// Create the state directory. Only commands that write state call this.
pub fn ensure_intake_home() -> Result<PathBuf> {
    let dir = intake_home().context("neither INTAKE_HOME nor HOME is set")?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
