// ── Successful command results ──

use std::fmt;

use crate::model::{Device, Link};

/// The outcome of a command that succeeded. `Display` renders the
/// response text; multi-line replies are joined with `\n` and carry no
/// trailing newline.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Interfaces(Vec<Device>),
    Links(Vec<Link>),
    Log { id: String, entries: Vec<String> },
    Ping { a: String, b: String, reachable: bool },
    Shutdown { id: String },
    Enabled { id: String },
    Linked(Link),
    Added { id: String, ip: String },
    Removed { id: String },
    Saved { path: String },
    Loaded { path: String },
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interfaces(devices) if devices.is_empty() => f.write_str("% No devices"),
            Self::Interfaces(devices) => {
                f.write_str("Device ID    Type     IP Address        Status")?;
                for d in devices {
                    write!(
                        f,
                        "\n{:<12}{:<8}{:<16}{}",
                        d.id, d.device_type, d.ip, d.status
                    )?;
                }
                Ok(())
            }
            Self::Links(links) if links.is_empty() => f.write_str("% No links"),
            Self::Links(links) => {
                f.write_str("Source      Target      BW(Kbps)  Delay(ms)")?;
                for l in links {
                    write!(
                        f,
                        "\n{:<12}{:<12}{:<10}{}",
                        l.src, l.dst, l.bandwidth_kbps, l.delay_ms
                    )?;
                }
                Ok(())
            }
            Self::Log { id, entries } if entries.is_empty() => {
                write!(f, "% No log entries for {id}")
            }
            Self::Log { entries, .. } => f.write_str(&entries.join("\n")),
            Self::Ping { a, b, reachable } => {
                let outcome = if *reachable { "OK" } else { "Timeout" };
                write!(f, "Ping {a} → {b}: {outcome}")
            }
            Self::Shutdown { id } => write!(f, "% Device {id} has been shutdown"),
            Self::Enabled { id } => write!(f, "% Device {id} has been enabled"),
            Self::Linked(link) => write!(
                f,
                "% Link {}↔{} established (BW={}Kbps, delay={}ms)",
                link.src, link.dst, link.bandwidth_kbps, link.delay_ms
            ),
            Self::Added { id, ip } => write!(f, "% Device {id} added with IP {ip}"),
            Self::Removed { id } => write!(f, "% Device {id} removed"),
            Self::Saved { path } => write!(f, "% Configuration saved to {path}"),
            Self::Loaded { path } => write!(f, "% Configuration loaded from {path}"),
        }
    }
}
