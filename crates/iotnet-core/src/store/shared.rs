// ── Shared registry handle ──
//
// One lock guards the device map, the link list and the IP counter
// together, so every operation sees and leaves a consistent registry.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::network::Network;
use crate::command::{CommandError, Interpreter, Reply};
use crate::error::CoreError;
use crate::model::{Device, Link};

/// Cloneable, thread-safe handle to a single [`Network`].
#[derive(Debug, Clone, Default)]
pub struct SharedNetwork {
    inner: Arc<Mutex<Network>>,
}

impl SharedNetwork {
    pub fn new(network: Network) -> Self {
        Self {
            inner: Arc::new(Mutex::new(network)),
        }
    }

    /// Run `f` with read access to the registry.
    pub fn with<R>(&self, f: impl FnOnce(&Network) -> R) -> R {
        f(&self.lock())
    }

    /// Run `f` with write access to the registry.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Network) -> R) -> R {
        f(&mut self.lock())
    }

    /// Execute one command line and return the response text.
    pub fn parse_command(&self, line: &str) -> String {
        self.with_mut(|network| Interpreter::new(network).parse_command(line))
    }

    /// Execute one command line, keeping the typed outcome.
    pub fn run(&self, line: &str) -> Result<Option<Reply>, CommandError> {
        self.with_mut(|network| Interpreter::new(network).run(line))
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn devices_snapshot(&self) -> Vec<Device> {
        self.with(|network| network.list_devices().into_iter().cloned().collect())
    }

    pub fn links_snapshot(&self) -> Vec<Link> {
        self.with(|network| network.list_links().to_vec())
    }

    // ── Front-end entry points ───────────────────────────────────────

    pub fn set_position(&self, id: &str, x: f64, y: f64) -> Result<(), CoreError> {
        self.with_mut(|network| network.set_position(id, x, y))
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), CoreError> {
        self.with(|network| network.save_to_file(path))
    }

    pub fn load_from_file(&self, path: &Path) -> Result<(), CoreError> {
        self.with_mut(|network| network.load_from_file(path))
    }

    /// Every registry operation completes or fails without partial
    /// writes, so a panic in another holder cannot leave torn state.
    fn lock(&self) -> MutexGuard<'_, Network> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Network> for SharedNetwork {
    fn from(network: Network) -> Self {
        Self::new(network)
    }
}
