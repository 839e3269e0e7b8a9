//! Interactive shell: one command per line from stdin.

use std::io::{self, BufRead, IsTerminal, Write};

use iotnet_core::SharedNetwork;

use crate::cli::ShellArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

const HELP: &str = "\
Commands:
  show ip interface brief            list devices
  show links                         list links
  show log <id>                      state changes of a device
  ping <id1> <id2>                   check for a direct link
  shutdown <id>                      disable a device
  no shutdown <id>                   enable a device
  link <src> <dst> [bw N] [delay N]  connect two devices
  add <type> [<id>]                  create a device
  remove <id>                        delete a device and its links
  save <file>                        write the topology as JSON
  load <file>                        replace the topology from JSON
  help                               show this text
  exit | quit                        leave the shell";

/// Words handled by the shell itself rather than the interpreter.
enum ShellWord {
    Exit,
    Help,
}

fn shell_word(line: &str) -> Option<ShellWord> {
    match line.trim().to_ascii_lowercase().as_str() {
        "exit" | "quit" => Some(ShellWord::Exit),
        "help" | "?" => Some(ShellWord::Help),
        _ => None,
    }
}

pub fn handle(args: &ShellArgs, settings: &Settings) -> Result<(), CliError> {
    let network = util::open_topology(settings)?;
    if args.demo {
        seed_demo(&network);
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let color = output::should_color(settings.color);
    run_session(&network, stdin.lock(), interactive, color, settings)?;

    match autosave_action(args.autosave, settings) {
        Autosave::Write => {
            util::save_topology(&network, settings)?;
            tracing::info!("topology written back on exit");
        }
        Autosave::SkipNoTopology => {
            tracing::warn!("autosave is enabled in the config but no topology file is set; skipping");
        }
        Autosave::Off => {}
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Autosave {
    Write,
    SkipNoTopology,
    Off,
}

/// `--autosave` insists on a topology file; the config default only
/// applies when one is configured.
fn autosave_action(flag: bool, settings: &Settings) -> Autosave {
    if flag {
        Autosave::Write
    } else if !settings.autosave {
        Autosave::Off
    } else if settings.topology.is_some() {
        Autosave::Write
    } else {
        Autosave::SkipNoTopology
    }
}

fn seed_demo(network: &SharedNetwork) {
    for line in ["add sensor", "add lamp"] {
        tracing::debug!(response = %network.parse_command(line), "demo seed");
    }
}

fn run_session(
    network: &SharedNetwork,
    mut input: impl BufRead,
    interactive: bool,
    color: bool,
    settings: &Settings,
) -> Result<(), CliError> {
    let prompt = format!("{} ", output::paint_prompt(&settings.prompt, color));
    let mut buf = Vec::new();
    loop {
        if interactive {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{prompt}")?;
            stdout.flush()?;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD and fall through to `% Unknown command`.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        match shell_word(line) {
            Some(ShellWord::Exit) => break,
            Some(ShellWord::Help) => output::print_output(HELP, settings.quiet),
            None => {
                let (text, failed) = match network.run(line) {
                    Ok(Some(reply)) => (reply.to_string(), false),
                    Ok(None) => continue,
                    Err(err) => (err.to_string(), true),
                };
                output::print_output(&output::paint_response(&text, failed, color), settings.quiet);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn shell_words_are_case_insensitive() {
        assert!(matches!(shell_word(" EXIT "), Some(ShellWord::Exit)));
        assert!(matches!(shell_word("quit"), Some(ShellWord::Exit)));
        assert!(matches!(shell_word("Help"), Some(ShellWord::Help)));
        assert!(shell_word("show links").is_none());
    }

    #[test]
    fn demo_seeds_two_devices() {
        let network = SharedNetwork::default();
        seed_demo(&network);
        let ids: Vec<_> = network
            .devices_snapshot()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, ["sensor_1", "lamp_1"]);
    }

    fn settings() -> Settings {
        Settings {
            topology: None,
            output: crate::cli::OutputFormat::Table,
            color: crate::cli::ColorMode::Never,
            prompt: "iotnet#".into(),
            autosave: false,
            quiet: true,
        }
    }

    #[test]
    fn session_stops_at_exit() {
        let network = SharedNetwork::default();
        let input = "add sensor\n\nexit\nadd lamp\n".as_bytes();
        run_session(&network, input, false, false, &settings()).unwrap();
        assert_eq!(network.devices_snapshot().len(), 1);
    }

    #[test]
    fn session_survives_invalid_utf8() {
        let network = SharedNetwork::default();
        let input: &[u8] = b"add sensor\n\xff\xfe\r\nadd lamp\n";
        run_session(&network, input, false, false, &settings()).unwrap();
        let ids: Vec<_> = network
            .devices_snapshot()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, ["sensor_1", "lamp_1"]);
    }

    #[test]
    fn config_autosave_needs_a_topology() {
        let mut settings = settings();
        assert_eq!(autosave_action(false, &settings), Autosave::Off);
        assert_eq!(autosave_action(true, &settings), Autosave::Write);

        settings.autosave = true;
        assert_eq!(autosave_action(false, &settings), Autosave::SkipNoTopology);

        settings.topology = Some("lab.json".into());
        assert_eq!(autosave_action(false, &settings), Autosave::Write);
    }
}
