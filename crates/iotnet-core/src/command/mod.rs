// ── Command API ──
//
// A command line goes through two separate steps: `Command::parse` turns
// text into a typed `Command` (validating arity, literals and option
// values), then `Interpreter::execute` applies it to the registry and
// returns a `Reply`. Both `Reply` and `CommandError` render to the
// response text shown to the user.

pub mod error;
pub mod interpreter;
pub mod parse;
pub mod reply;
pub mod requests;

pub use error::CommandError;
pub use interpreter::Interpreter;
pub use reply::Reply;
pub use requests::{AddDeviceRequest, AddLinkRequest};

/// Every operation the command language can express.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // ── Inspection ───────────────────────────────────────────────────
    /// `show ip interface brief`
    ShowInterfaces,
    /// `show links`
    ShowLinks,
    /// `show log <id>`
    ShowLog { id: String },
    /// `ping <a> <b>`
    Ping { a: String, b: String },

    // ── Device state ─────────────────────────────────────────────────
    /// `shutdown <id>`
    Shutdown { id: String },
    /// `no shutdown <id>`
    NoShutdown { id: String },

    // ── Topology edits ───────────────────────────────────────────────
    /// `link <src> <dst> [bw N] [delay N]`
    Link(AddLinkRequest),
    /// `add <type> [<id>]`
    Add {
        device_type: String,
        id: Option<String>,
    },
    /// `remove <id>`
    Remove { id: String },

    // ── Persistence ──────────────────────────────────────────────────
    /// `save <file>`; the path already carries its `.json` extension.
    Save { path: String },
    /// `load <file>`
    Load { path: String },
}
