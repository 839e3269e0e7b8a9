// ── Command errors ──
//
// Every variant's `Display` is the exact response line the interpreter
// prints, so callers can show the error as-is.

use thiserror::Error;

use crate::error::{CoreError, ErrorKind};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("% Unknown command")]
    Unknown,

    #[error("% Invalid parameters for link")]
    InvalidLinkParameters,

    #[error("% Device {id} not found")]
    DeviceNotFound { id: String },

    #[error("% Device {id} already exists")]
    DeviceExists { id: String },

    #[error("% Failed to link {src} and {dst}")]
    LinkFailed {
        src: String,
        dst: String,
        #[source]
        source: CoreError,
    },

    #[error("% File {path} not found")]
    FileNotFound { path: String },

    #[error("% Save error")]
    Save(#[source] CoreError),

    #[error("% Load error")]
    Load(#[source] CoreError),

    /// Registry failure with no dedicated response line.
    #[error("% {0}")]
    Registry(#[source] CoreError),
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DeviceNotFound { id } => Self::DeviceNotFound { id },
            CoreError::DeviceExists { id } => Self::DeviceExists { id },
            CoreError::FileNotFound { path } => Self::FileNotFound {
                path: path.display().to_string(),
            },
            other => Self::Registry(other),
        }
    }
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unknown => ErrorKind::Unrecognized,
            Self::InvalidLinkParameters => ErrorKind::InvalidArgument,
            Self::DeviceNotFound { .. } => ErrorKind::NotFound,
            Self::DeviceExists { .. } => ErrorKind::Conflict,
            Self::LinkFailed { source, .. } => source.kind(),
            Self::FileNotFound { .. } | Self::Save(_) | Self::Load(_) => ErrorKind::Io,
            Self::Registry(source) => source.kind(),
        }
    }
}
