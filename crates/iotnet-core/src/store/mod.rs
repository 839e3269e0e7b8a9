// ── Registry storage ──
//
// `Network` owns the state, `document` maps it to and from JSON, and
// `SharedNetwork` puts it behind a lock for callers on several threads.

pub mod document;
pub mod network;
pub mod shared;

pub use document::{DeviceRecord, LinkRecord, TopologyDocument};
pub use network::{IP_POOL_PREFIX, Network};
pub use shared::SharedNetwork;
