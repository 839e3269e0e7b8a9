// ── Link domain types ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bandwidth applied when a link is created without one, in Kbps.
pub const DEFAULT_BANDWIDTH_KBPS: u32 = 1000;

/// Delay applied when a link is created without one, in milliseconds.
pub const DEFAULT_DELAY_MS: u32 = 10;

/// An undirected logical connection between two devices.
///
/// `src` and `dst` keep the order the link was created with, but every
/// lookup treats the pair as unordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub src: String,
    pub dst: String,
    pub bandwidth_kbps: u32,
    pub delay_ms: u32,
}

impl Link {
    /// Whether this link joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.src == a && self.dst == b) || (self.src == b && self.dst == a)
    }

    /// Whether `id` is one of the endpoints.
    pub fn touches(&self, id: &str) -> bool {
        self.src == id || self.dst == id
    }

    /// Tooltip text for front-ends.
    pub fn summary(&self) -> String {
        format!("BW: {}Kbps, Delay: {}ms", self.bandwidth_kbps, self.delay_ms)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}↔{} ({})", self.src, self.dst, self.summary())
    }
}
