mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    let cfg = iotnet_config::load_config_or_default();

    init_tracing(cli.global.verbose, &cfg.defaults.log_level);

    if let Err(err) = run(cli, &cfg) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

/// `RUST_LOG` wins; otherwise `-v` flags pick the level, falling back to
/// the configured `log_level`. Events go to stderr.
fn init_tracing(verbosity: u8, configured: &str) {
    let filter = match verbosity {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(filter))
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, cfg: &iotnet_config::Config) -> Result<(), CliError> {
    let settings = Settings::resolve(&cli.global, cfg)?;

    match cli.command {
        Command::Config(args) => commands::config_cmd::handle(&args, &settings),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "iotnet", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            tracing::debug!(command = ?cmd, topology = ?settings.topology, "dispatching command");
            commands::dispatch(cmd, &settings)
        }
    }
}
