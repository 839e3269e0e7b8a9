//! Configuration for the iotnet CLI.
//!
//! A single TOML file in the platform config directory, merged over
//! built-in defaults and under `IOTNET_*` environment variables. Nested
//! keys use a double underscore, e.g. `IOTNET_DEFAULTS__PROMPT`.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Overrides the config file location when set.
pub const CONFIG_PATH_ENV: &str = "IOTNET_CONFIG";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Topology file loaded before running a command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topology: Option<PathBuf>,

    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    /// `table`, `json`, `json-compact`, `yaml` or `plain`.
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Filter directive used when neither `RUST_LOG` nor `-v` is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Shell prompt, printed before each line is read.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Write the topology back when an interactive session ends.
    #[serde(default)]
    pub autosave: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            log_level: default_log_level(),
            prompt: default_prompt(),
            autosave: false,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_log_level() -> String {
    "warn".into()
}
fn default_prompt() -> String {
    "iotnet#".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path: `IOTNET_CONFIG`, then platform conventions.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    ProjectDirs::from("com", "iotnet", "iotnet").map_or_else(
        || dirs_fallback().join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("iotnet");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the config from the canonical path and the environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the config from `path` and the environment. A missing file is
/// not an error; defaults fill the gaps.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("IOTNET_").split("__"));

    Ok(figment.extract()?)
}

/// Load config, returning a default if it is missing or unreadable.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Write a default config file at `path`, refusing to overwrite unless `force`.
pub fn init_config_at(path: &Path, force: bool) -> Result<Config, ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    let cfg = Config::default();
    save_config_to(&cfg, path)?;
    Ok(cfg)
}
