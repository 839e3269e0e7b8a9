//! Config subcommand handlers.

use iotnet_config::Config;

use crate::cli::{ConfigArgs, ConfigCommand};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&iotnet_config::config_path().display().to_string(), settings.quiet);
        }

        ConfigCommand::Show => {
            let cfg = iotnet_config::load_config()?;
            let out = output::render_single(settings.output, &cfg, render_toml);
            output::print_output(&out, settings.quiet);
        }

        ConfigCommand::Init { force } => {
            let path = iotnet_config::config_path();
            iotnet_config::init_config_at(&path, force)?;
            tracing::info!(path = %path.display(), "config file written");
            if !settings.quiet {
                eprintln!("Config written to {}", path.display());
            }
        }
    }
    Ok(())
}

fn render_toml(cfg: &Config) -> String {
    toml::to_string_pretty(cfg)
        .unwrap_or_else(|e| format!("# config could not be rendered: {e}"))
        .trim_end()
        .to_owned()
}
