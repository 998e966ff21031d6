use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Presentation settings. Category rules are fixed and not configurable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
    /// Print each category's rows under its total
    pub show_items: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Used when RUST_LOG is unset
    pub level: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_items: false,
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// `~/.kakeibo/config.toml`, or `None` when there is no home directory.
/// Only computes the path; nothing is created.
pub fn config_file() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(".kakeibo").join("config.toml"))
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

/// Settings from `path`, or defaults when there is no path or no file.
pub fn read_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path.filter(|p| p.is_file()) else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_config(&text).with_context(|| format!("in {}", path.display()))
}

/// Settings for this run. Classifying a statement never writes to disk, so a
/// missing home directory just means defaults.
pub fn load_config() -> Result<Config> {
    read_config(config_file().as_deref())
}

/// Write `cfg` to `path`, creating its directory.
pub fn write_config(path: &Path, cfg: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let text = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, text).with_context(|| format!("write {}", path.display()))
}

/// Write defaults unless a file is already there. Returns whether it wrote.
pub fn write_default_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    write_config(path, &Config::default())?;
    Ok(true)
}

pub fn init_config() -> Result<()> {
    let path = config_file().context("HOME is not set; no place for ~/.kakeibo/config.toml")?;
    if write_default_config(&path)? {
        println!("Wrote {}", path.display());
    } else {
        println!("Config already exists: {}", path.display());
    }
    Ok(())
}

pub fn show_config() -> Result<()> {
    let cfg = load_config()?;
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}
