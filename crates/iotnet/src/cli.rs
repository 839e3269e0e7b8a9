//! Clap derive structures for the `iotnet` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// iotnet -- IOS-style shell for simulated IoT topologies
#[derive(Debug, Parser)]
#[command(
    name = "iotnet",
    version,
    about = "Build and inspect simulated IoT network topologies",
    long_about = "Keeps a registry of simulated devices and the links between them,\n\
        driven by a small Cisco-IOS-flavored command language and saved as JSON.\n\n\
        Start an interactive session with `iotnet shell`, or run single\n\
        commands against a topology file with `iotnet exec`.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Topology file to load before running the command
    #[arg(long, short = 't', env = "IOTNET_TOPOLOGY", global = true)]
    pub topology: Option<PathBuf>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "IOTNET_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive command shell
    #[command(alias = "sh")]
    Shell(ShellArgs),

    /// Run a single command line against the topology
    #[command(alias = "x")]
    Exec(ExecArgs),

    /// List devices in the topology
    #[command(alias = "dev", alias = "d")]
    Devices,

    /// List links in the topology
    #[command(alias = "l")]
    Links,

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shell ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ShellArgs {
    /// Seed the registry with a sensor and a lamp
    #[arg(long)]
    pub demo: bool,

    /// Write the topology file back when the session ends
    #[arg(long)]
    pub autosave: bool,
}

// ── Exec ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ExecArgs {
    /// Write the topology file back after a successful command
    #[arg(long)]
    pub save: bool,

    /// Command words, e.g. `link sensor_1 lamp_1 bw 500`
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub words: Vec<String>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display current resolved configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
