use anyhow::{Context, Result};
use intake_core::DEFAULT_HEIGHT_CM;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_intake_home, intake_home};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub body: BodySection,
    pub catalog: CatalogSection,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodySection {
    /// Used by the BMR formula when --height is not given
    pub height_cm: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// CSV catalogs merged over the builtin foods, in order
    pub extra_files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Decimal places for printed numbers
    pub precision: usize,
}

impl Default for BodySection {
    fn default() -> Self {
        Self {
            height_cm: DEFAULT_HEIGHT_CM,
        }
    }
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

const CONFIG_FILE: &str = "config.toml";

/// Read the config from the state directory without creating it. With no
/// usable home directory the defaults apply.
pub fn load_config() -> Result<Config> {
    match intake_home() {
        Some(home) => load_config_in(&home),
        None => {
            tracing::debug!("no INTAKE_HOME or HOME, using default config");
            Ok(Config::default())
        }
    }
}

pub fn load_config_in(home: &Path) -> Result<Config> {
    load_config_from(&home.join(CONFIG_FILE))
}

/// Missing file means defaults.
pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config_to(p: &Path, cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = ensure_intake_home()?.join(CONFIG_FILE);
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&p, &Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let (cfg, p) = match intake_home() {
        Some(home) => {
            let p = home.join(CONFIG_FILE);
            (load_config_from(&p)?, Some(p))
        }
        None => (Config::default(), None),
    };
    match &p {
        Some(p) if !p.exists() => println!("# {} not found, showing defaults", p.display()),
        None => println!("# no INTAKE_HOME or HOME, showing defaults"),
        _ => {}
    }
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}
