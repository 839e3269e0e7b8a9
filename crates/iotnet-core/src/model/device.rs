// ── Device domain types ──

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp layout used for every event log entry.
const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Administrative state of a device.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DeviceStatus {
    #[default]
    Enabled,
    Disabled,
}

impl DeviceStatus {
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Display coordinates. Only front-ends care about these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A simulated network endpoint.
///
/// Only the registry creates devices and changes their status, which keeps
/// the "one log entry per transition" rule in one place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    pub id: String,
    pub device_type: String,
    pub ip: String,
    pub status: DeviceStatus,
    pub position: Position,
    pub(crate) log: Vec<String>,
}

impl Device {
    pub(crate) fn new(id: String, device_type: String, ip: String, position: Position) -> Self {
        Self {
            id,
            device_type,
            ip,
            status: DeviceStatus::Enabled,
            position,
            log: Vec::new(),
        }
    }

    /// Rebuild a device exactly as it was persisted, log included.
    pub(crate) fn restored(
        id: String,
        device_type: String,
        ip: String,
        status: DeviceStatus,
        position: Position,
        log: Vec<String>,
    ) -> Self {
        Self {
            id,
            device_type,
            ip,
            status,
            position,
            log,
        }
    }

    pub(crate) fn enable(&mut self) {
        self.status = DeviceStatus::Enabled;
        self.record("Enabled", Local::now());
    }

    pub(crate) fn disable(&mut self) {
        self.status = DeviceStatus::Disabled;
        self.record("Disabled", Local::now());
    }

    fn record(&mut self, message: &str, at: DateTime<Local>) {
        self.log
            .push(format!("[{}] {message}", at.format(LOG_TIMESTAMP_FORMAT)));
    }

    pub fn is_enabled(&self) -> bool {
        self.status.is_enabled()
    }

    /// Event log entries, oldest first.
    pub fn log(&self) -> &[String] {
        &self.log
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (IP: {}, Status: {})",
            self.id, self.device_type, self.ip, self.status
        )
    }
}
