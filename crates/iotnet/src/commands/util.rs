//! Shared helpers for command handlers.

use std::path::Path;

use iotnet_core::{Network, SharedNetwork};

use crate::config::Settings;
use crate::error::CliError;

/// Open the configured topology. A path that does not exist yet starts an
/// empty registry, so a later save creates the file.
pub fn open_topology(settings: &Settings) -> Result<SharedNetwork, CliError> {
    let Some(path) = settings.topology.as_deref() else {
        tracing::debug!("no topology file configured, starting empty");
        return Ok(SharedNetwork::default());
    };
    load_or_empty(path)
}

fn load_or_empty(path: &Path) -> Result<SharedNetwork, CliError> {
    let mut network = Network::new();
    if path.exists() {
        network.load_from_file(path)?;
    } else {
        tracing::info!(path = %path.display(), "topology file does not exist yet, starting empty");
    }
    Ok(SharedNetwork::new(network))
}

/// Write the registry back to the configured topology path.
pub fn save_topology(network: &SharedNetwork, settings: &Settings) -> Result<(), CliError> {
    let path = settings.require_topology()?;
    network.save_to_file(path)?;
    Ok(())
}
