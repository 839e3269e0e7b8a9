// ── Domain model ──
//
// Devices and links as the registry owns them. Persistence has its own
// record types in `store::document`; these stay free of file-format concerns.

pub mod device;
pub mod link;

pub use device::{Device, DeviceStatus, Position};
pub use link::{DEFAULT_BANDWIDTH_KBPS, DEFAULT_DELAY_MS, Link};
