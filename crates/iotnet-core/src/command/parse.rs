// ── Command-line parser ──
//
// Whitespace tokenization, no quoting. The first token picks the command
// family case-insensitively; arity is exact for every family except
// `link`, whose trailing tokens are read as key/value option pairs.

use super::error::CommandError;
use super::requests::AddLinkRequest;
use super::Command;

impl Command {
    /// Parse one command line. A blank line yields `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = parts.first() else {
            return Ok(None);
        };

        let family = first.to_ascii_lowercase();
        let command = match (family.as_str(), parts.as_slice()) {
            ("show", [_, ip, interface, brief])
                if keyword(ip, "ip") && keyword(interface, "interface") && keyword(brief, "brief") =>
            {
                Self::ShowInterfaces
            }
            ("show", [_, links]) if keyword(links, "links") => Self::ShowLinks,
            ("show", [_, log, id]) if keyword(log, "log") => Self::ShowLog { id: (*id).into() },
            ("ping", [_, a, b]) => Self::Ping {
                a: (*a).into(),
                b: (*b).into(),
            },
            ("shutdown", [_, id]) => Self::Shutdown { id: (*id).into() },
            ("no", [_, shutdown, id]) if keyword(shutdown, "shutdown") => {
                Self::NoShutdown { id: (*id).into() }
            }
            ("link", [_, src, dst, options @ ..]) => Self::Link(link_request(src, dst, options)?),
            ("add", [_, device_type]) => Self::Add {
                device_type: (*device_type).into(),
                id: None,
            },
            ("add", [_, device_type, id]) => Self::Add {
                device_type: (*device_type).into(),
                id: Some((*id).into()),
            },
            ("remove", [_, id]) => Self::Remove { id: (*id).into() },
            ("save", [_, file]) => Self::Save {
                path: with_json_extension(file),
            },
            ("load", [_, file]) => Self::Load {
                path: (*file).into(),
            },
            _ => return Err(CommandError::Unknown),
        };

        Ok(Some(command))
    }
}

fn keyword(token: &str, expected: &str) -> bool {
    token.eq_ignore_ascii_case(expected)
}

/// Read `bw`/`delay` pairs. Unknown keys are skipped along with their
/// value; a trailing key without a value is ignored.
fn link_request(src: &str, dst: &str, options: &[&str]) -> Result<AddLinkRequest, CommandError> {
    let mut request = AddLinkRequest::new(src, dst);
    for pair in options.chunks(2) {
        let [key, value] = pair else {
            continue;
        };
        if keyword(key, "bw") {
            request.bandwidth_kbps = positive(value)?;
        } else if keyword(key, "delay") {
            request.delay_ms = positive(value)?;
        }
    }
    Ok(request)
}

fn positive(value: &str) -> Result<u32, CommandError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or(CommandError::InvalidLinkParameters)
}

fn with_json_extension(file: &str) -> String {
    if file.to_ascii_lowercase().ends_with(".json") {
        file.to_owned()
    } else {
        format!("{file}.json")
    }
}
