//! CLI error types with miette diagnostics.
//!
//! Maps core and config failures into user-facing errors with help text
//! and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use iotnet_config::ConfigError;
use iotnet_core::{CommandError, CoreError, ErrorKind};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const IO: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Command responses ────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(iotnet::command),
        help("Run `iotnet shell` and type `help` for the command reference.")
    )]
    Command(#[from] CommandError),

    // ── Registry ─────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(iotnet::not_found),
        help("Run: iotnet {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("{message}")]
    #[diagnostic(code(iotnet::conflict))]
    Conflict { message: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(iotnet::validation))]
    Validation { field: String, reason: String },

    // ── Topology files ───────────────────────────────────────────────
    #[error("No topology file configured")]
    #[diagnostic(
        code(iotnet::no_topology),
        help(
            "Pass --topology <file>, set IOTNET_TOPOLOGY, or add\n\
             `topology = \"<file>\"` to {config_path}"
        )
    )]
    NoTopology { config_path: String },

    #[error("Could not use topology file")]
    #[diagnostic(
        code(iotnet::topology),
        help("Check that the file exists, is readable, and holds a topology document.")
    )]
    Topology(#[source] CoreError),

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(iotnet::config),
        help("Inspect the file with: iotnet config show\nRecreate it with: iotnet config init --force")
    )]
    Config(#[from] ConfigError),

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Command(err) => kind_exit_code(err.kind()),
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::Validation { .. } | Self::NoTopology { .. } => exit_code::USAGE,
            Self::Topology(_) | Self::Io(_) => exit_code::IO,
            Self::Config(_) => exit_code::GENERAL,
        }
    }
}

fn kind_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::NotFound => exit_code::NOT_FOUND,
        ErrorKind::Conflict => exit_code::CONFLICT,
        ErrorKind::InvalidArgument | ErrorKind::Unrecognized => exit_code::USAGE,
        ErrorKind::Io => exit_code::IO,
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DeviceNotFound { id } | CoreError::EndpointMissing { id } => {
                CliError::NotFound {
                    resource_type: "device".into(),
                    identifier: id,
                    list_command: "devices".into(),
                }
            }
            err @ (CoreError::DeviceExists { .. }
            | CoreError::SelfLink { .. }
            | CoreError::DuplicateLink { .. }) => CliError::Conflict {
                message: err.to_string(),
            },
            CoreError::InvalidParameter { field, reason } => CliError::Validation {
                field: field.into(),
                reason,
            },
            err @ (CoreError::FileNotFound { .. } | CoreError::Io { .. } | CoreError::Json(_)) => {
                CliError::Topology(err)
            }
        }
    }
}
