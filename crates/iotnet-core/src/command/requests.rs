// ── Registry request types ──
//
// Typed inputs for the registry's create operations. Optional fields are
// filled in by the registry (generated id, next pooled IP, default link
// attributes).

use crate::model::{DEFAULT_BANDWIDTH_KBPS, DEFAULT_DELAY_MS, Position};

/// Input for [`Network::add_device`](crate::Network::add_device).
#[derive(Debug, Clone, PartialEq)]
pub struct AddDeviceRequest {
    pub device_type: String,
    pub id: Option<String>,
    pub ip: Option<String>,
    pub position: Position,
}

impl AddDeviceRequest {
    pub fn new(device_type: impl Into<String>) -> Self {
        Self {
            device_type: device_type.into(),
            id: None,
            ip: None,
            position: Position::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }
}

/// Input for [`Network::add_link`](crate::Network::add_link).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLinkRequest {
    pub src: String,
    pub dst: String,
    pub bandwidth_kbps: u32,
    pub delay_ms: u32,
}

impl AddLinkRequest {
    pub fn new(src: impl Into<String>, dst: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            bandwidth_kbps: DEFAULT_BANDWIDTH_KBPS,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }

    pub fn bandwidth(mut self, kbps: u32) -> Self {
        self.bandwidth_kbps = kbps;
        self
    }

    pub fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }
}
