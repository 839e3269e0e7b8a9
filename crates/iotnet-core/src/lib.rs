//! Core of the iotnet topology manager.
//!
//! The crate holds three layers:
//!
//! - **[`model`]**: devices, links and their display coordinates.
//! - **[`store`]**: the [`Network`] registry that owns them, its JSON
//!   document form, and the lock-guarded [`SharedNetwork`] handle.
//! - **[`command`]**: the IOS-style command language: [`Command::parse`]
//!   turns a line into a typed command and [`Interpreter`] applies it,
//!   producing a [`Reply`] or a [`CommandError`].
//!
//! ```
//! use iotnet_core::Network;
//! use iotnet_core::command::Interpreter;
//!
//! let mut network = Network::new();
//! let mut cli = Interpreter::new(&mut network);
//! assert_eq!(cli.parse_command("add sensor"), "% Device sensor_1 added with IP 192.168.1.1");
//! assert_eq!(cli.parse_command("add lamp"), "% Device lamp_1 added with IP 192.168.1.2");
//! assert_eq!(
//!     cli.parse_command("link sensor_1 lamp_1 bw 500 delay 5"),
//!     "% Link sensor_1↔lamp_1 established (BW=500Kbps, delay=5ms)"
//! );
//! assert_eq!(cli.parse_command("ping lamp_1 sensor_1"), "Ping lamp_1 → sensor_1: OK");
//! ```

pub mod command;
pub mod error;
pub mod model;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::{AddDeviceRequest, AddLinkRequest, Command, CommandError, Interpreter, Reply};
pub use error::{CoreError, ErrorKind};
pub use model::{Device, DeviceStatus, Link, Position};
pub use store::{Network, SharedNetwork, TopologyDocument};
