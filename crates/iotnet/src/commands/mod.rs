//! Command dispatch: bridges CLI args -> registry operations -> output formatting.

pub mod config_cmd;
pub mod devices;
pub mod exec;
pub mod links;
pub mod shell;
pub mod util;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a topology-bound command to the appropriate handler.
pub fn dispatch(cmd: Command, settings: &Settings) -> Result<(), CliError> {
    match cmd {
        Command::Shell(args) => shell::handle(&args, settings),
        Command::Exec(args) => exec::handle(&args, settings),
        Command::Devices => devices::handle(settings),
        Command::Links => links::handle(settings),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
