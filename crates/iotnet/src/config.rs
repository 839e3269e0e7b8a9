//! Resolved runtime settings: config file values overridden by CLI flags.

use std::path::PathBuf;

use clap::ValueEnum;
use iotnet_config::Config;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Everything a command handler needs to know about the session.
#[derive(Debug, Clone)]
pub struct Settings {
    pub topology: Option<PathBuf>,
    pub output: OutputFormat,
    pub color: ColorMode,
    pub prompt: String,
    pub autosave: bool,
    pub quiet: bool,
}

impl Settings {
    /// Merge flags over the loaded config. Flags win; config strings are
    /// parsed with the same value names the flags accept.
    pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Result<Self, CliError> {
        let output = match global.output {
            Some(output) => output,
            None => parse_value("defaults.output", &cfg.defaults.output)?,
        };
        let color = match global.color {
            Some(color) => color,
            None => parse_value("defaults.color", &cfg.defaults.color)?,
        };

        Ok(Self {
            topology: global.topology.clone().or_else(|| cfg.topology.clone()),
            output,
            color,
            prompt: cfg.defaults.prompt.clone(),
            autosave: cfg.defaults.autosave,
            quiet: global.quiet,
        })
    }

    /// The topology path, or an error explaining how to configure one.
    pub fn require_topology(&self) -> Result<&PathBuf, CliError> {
        self.topology.as_ref().ok_or_else(|| CliError::NoTopology {
            config_path: iotnet_config::config_path().display().to_string(),
        })
    }
}

fn parse_value<T: ValueEnum>(field: &str, value: &str) -> Result<T, CliError> {
    T::from_str(value, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}
