// ── Topology document ──
//
// JSON form of the registry. Field names match the files written by the
// earlier tooling, so existing topology files keep loading.

use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::network::Network;
use crate::command::requests::AddLinkRequest;
use crate::error::CoreError;
use crate::model::{DEFAULT_BANDWIDTH_KBPS, DEFAULT_DELAY_MS, Device, DeviceStatus, Position};

/// Full snapshot of a registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyDocument {
    #[serde(default = "default_ip_counter")]
    pub ip_counter: u32,
    #[serde(default)]
    pub devices: Vec<DeviceRecord>,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub device_id: String,
    pub device_type: String,
    pub ip_address: String,
    #[serde(default)]
    pub status: DeviceStatus,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub log: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub src: String,
    pub dst: String,
    #[serde(default = "default_bandwidth")]
    pub bandwidth: u32,
    #[serde(default = "default_delay")]
    pub delay: u32,
}

fn default_ip_counter() -> u32 {
    1
}
fn default_bandwidth() -> u32 {
    DEFAULT_BANDWIDTH_KBPS
}
fn default_delay() -> u32 {
    DEFAULT_DELAY_MS
}

impl Default for TopologyDocument {
    fn default() -> Self {
        Self {
            ip_counter: default_ip_counter(),
            devices: Vec::new(),
            links: Vec::new(),
        }
    }
}

impl From<&Device> for DeviceRecord {
    fn from(d: &Device) -> Self {
        Self {
            device_id: d.id.clone(),
            device_type: d.device_type.clone(),
            ip_address: d.ip.clone(),
            status: d.status,
            x: d.position.x,
            y: d.position.y,
            log: d.log.clone(),
        }
    }
}

impl From<DeviceRecord> for Device {
    fn from(r: DeviceRecord) -> Self {
        Device::restored(
            r.device_id,
            r.device_type,
            r.ip_address,
            r.status,
            Position::new(r.x, r.y),
            r.log,
        )
    }
}

impl TopologyDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Network {
    // ── Snapshot / restore ───────────────────────────────────────────

    pub fn to_document(&self) -> TopologyDocument {
        TopologyDocument {
            ip_counter: self.ip_counter,
            devices: self.devices.values().map(DeviceRecord::from).collect(),
            links: self
                .links
                .iter()
                .map(|l| LinkRecord {
                    src: l.src.clone(),
                    dst: l.dst.clone(),
                    bandwidth: l.bandwidth_kbps,
                    delay: l.delay_ms,
                })
                .collect(),
        }
    }

    /// Build a registry from a document.
    ///
    /// Devices keep their status and log exactly as stored. Links go
    /// through [`Network::add_link`], so entries with a missing endpoint,
    /// a self-loop, a zero attribute or a duplicate pair are dropped.
    pub fn from_document(doc: TopologyDocument) -> Self {
        let mut devices = IndexMap::with_capacity(doc.devices.len());
        for record in doc.devices {
            if devices.contains_key(&record.device_id) {
                tracing::warn!(id = %record.device_id, "skipping duplicate device record");
                continue;
            }
            devices.insert(record.device_id.clone(), Device::from(record));
        }

        let mut network = Self {
            devices,
            links: Vec::with_capacity(doc.links.len()),
            ip_counter: doc.ip_counter,
        };

        for record in doc.links {
            let request = AddLinkRequest::new(record.src, record.dst)
                .bandwidth(record.bandwidth)
                .delay(record.delay);
            if let Err(err) = network.add_link(request) {
                tracing::warn!(error = %err, "skipping link record");
            }
        }

        network
    }

    /// Replace the whole registry state with the document's contents.
    pub fn restore(&mut self, doc: TopologyDocument) {
        *self = Self::from_document(doc);
    }

    // ── Files ────────────────────────────────────────────────────────

    /// Write the registry to `path` as pretty JSON.
    pub fn save_to_file(&self, path: &Path) -> Result<(), CoreError> {
        let json = self.to_document().to_json()?;
        fs::write(path, json).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), devices = self.devices.len(), "topology saved");
        Ok(())
    }

    /// Replace the registry with the topology stored at `path`.
    ///
    /// Nothing changes unless the file exists, is readable and parses.
    pub fn load_from_file(&mut self, path: &Path) -> Result<(), CoreError> {
        if !path.is_file() {
            return Err(CoreError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => CoreError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => CoreError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let doc = TopologyDocument::from_json(&text)?;
        self.restore(doc);
        tracing::info!(path = %path.display(), devices = self.devices.len(), "topology loaded");
        Ok(())
    }
}
