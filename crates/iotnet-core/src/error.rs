// ── Core error types ──
//
// Failures raised by the registry and the topology persistence layer.
// The command interpreter turns these into `%`-prefixed response text;
// the binary maps them onto diagnostics and exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Coarse error taxonomy shared by every error type in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// An identifier did not resolve to a device.
    NotFound,
    /// A token or value was malformed.
    InvalidArgument,
    /// The operation would break a registry invariant.
    Conflict,
    /// Reading or writing a topology file failed.
    Io,
    /// The command line could not be recognized.
    Unrecognized,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Registry errors ──────────────────────────────────────────────
    #[error("device not found: {id}")]
    DeviceNotFound { id: String },

    #[error("device already exists: {id}")]
    DeviceExists { id: String },

    #[error("link endpoint does not exist: {id}")]
    EndpointMissing { id: String },

    #[error("cannot link device {id} to itself")]
    SelfLink { id: String },

    #[error("devices {src} and {dst} are already linked")]
    DuplicateLink { src: String, dst: String },

    #[error("invalid {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    // ── Persistence errors ───────────────────────────────────────────
    #[error("topology file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot access topology file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed topology document: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DeviceNotFound { .. } => ErrorKind::NotFound,
            Self::DeviceExists { .. }
            | Self::EndpointMissing { .. }
            | Self::SelfLink { .. }
            | Self::DuplicateLink { .. } => ErrorKind::Conflict,
            Self::InvalidParameter { .. } => ErrorKind::InvalidArgument,
            Self::FileNotFound { .. } | Self::Io { .. } | Self::Json(_) => ErrorKind::Io,
        }
    }
}
