//! One-shot command execution against the topology file.

use crate::cli::ExecArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

pub fn handle(args: &ExecArgs, settings: &Settings) -> Result<(), CliError> {
    if args.save {
        settings.require_topology()?;
    }
    let network = util::open_topology(settings)?;

    let line = args.words.join(" ");
    tracing::debug!(%line, "executing");
    let reply = network.run(&line)?;

    if let Some(reply) = reply {
        output::print_output(&reply.to_string(), settings.quiet);
    }
    if args.save {
        util::save_topology(&network, settings)?;
    }
    Ok(())
}
