// ── Command interpreter ──

use std::path::Path;

use super::error::CommandError;
use super::reply::Reply;
use super::requests::AddDeviceRequest;
use super::Command;
use crate::error::CoreError;
use crate::store::Network;

/// Applies parsed commands to a borrowed [`Network`].
pub struct Interpreter<'n> {
    network: &'n mut Network,
}

impl<'n> Interpreter<'n> {
    pub fn new(network: &'n mut Network) -> Self {
        Self { network }
    }

    /// Parse and execute one line, returning the response text. Errors
    /// are folded into their `%`-prefixed message; a blank line gives an
    /// empty response.
    pub fn parse_command(&mut self, line: &str) -> String {
        match self.run(line) {
            Ok(Some(reply)) => reply.to_string(),
            Ok(None) => String::new(),
            Err(err) => err.to_string(),
        }
    }

    /// Like [`parse_command`](Self::parse_command) but keeps the typed
    /// outcome, for callers that branch on failure.
    pub fn run(&mut self, line: &str) -> Result<Option<Reply>, CommandError> {
        match Command::parse(line)? {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply, CommandError> {
        tracing::trace!(?command, "executing");
        match command {
            Command::ShowInterfaces => Ok(Reply::Interfaces(
                self.network.list_devices().into_iter().cloned().collect(),
            )),
            Command::ShowLinks => Ok(Reply::Links(self.network.list_links().to_vec())),
            Command::ShowLog { id } => {
                let device = self
                    .network
                    .get_device(&id)
                    .ok_or_else(|| CommandError::DeviceNotFound { id: id.clone() })?;
                let entries = device.log().to_vec();
                Ok(Reply::Log { id, entries })
            }
            Command::Ping { a, b } => {
                let reachable = self.network.are_linked(&a, &b);
                Ok(Reply::Ping { a, b, reachable })
            }
            Command::Shutdown { id } => {
                self.network.disable_device(&id)?;
                Ok(Reply::Shutdown { id })
            }
            Command::NoShutdown { id } => {
                self.network.enable_device(&id)?;
                Ok(Reply::Enabled { id })
            }
            Command::Link(request) => {
                let (src, dst) = (request.src.clone(), request.dst.clone());
                match self.network.add_link(request) {
                    Ok(link) => Ok(Reply::Linked(link.clone())),
                    Err(source) => Err(CommandError::LinkFailed { src, dst, source }),
                }
            }
            Command::Add { device_type, id } => {
                let mut request = AddDeviceRequest::new(device_type);
                request.id = id;
                let device = self.network.add_device(request)?;
                Ok(Reply::Added {
                    id: device.id.clone(),
                    ip: device.ip.clone(),
                })
            }
            Command::Remove { id } => {
                self.network.remove_device(&id)?;
                Ok(Reply::Removed { id })
            }
            Command::Save { path } => {
                self.network
                    .save_to_file(Path::new(&path))
                    .map_err(CommandError::Save)?;
                Ok(Reply::Saved { path })
            }
            Command::Load { path } => {
                self.network
                    .load_from_file(Path::new(&path))
                    .map_err(|err| match err {
                        missing @ CoreError::FileNotFound { .. } => CommandError::from(missing),
                        other => CommandError::Load(other),
                    })?;
                Ok(Reply::Loaded { path })
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ErrorKind;
    use crate::model::DeviceStatus;

    fn exec(net: &mut Network, line: &str) -> String {
        Interpreter::new(net).parse_command(line)
    }

    fn lab() -> Network {
        let mut net = Network::new();
        exec(&mut net, "add sensor");
        exec(&mut net, "add lamp");
        net
    }

    #[test]
    fn blank_line_is_silent() {
        let mut net = Network::new();
        assert_eq!(exec(&mut net, ""), "");
        assert_eq!(exec(&mut net, "   "), "");
    }

    #[test]
    fn add_reports_generated_id_and_ip() {
        let mut net = Network::new();
        assert_eq!(
            exec(&mut net, "add sensor"),
            "% Device sensor_1 added with IP 192.168.1.1"
        );
        assert_eq!(
            exec(&mut net, "add lamp"),
            "% Device lamp_1 added with IP 192.168.1.2"
        );
        assert_eq!(
            exec(&mut net, "add lamp hall"),
            "% Device hall added with IP 192.168.1.3"
        );
    }

    #[test]
    fn add_duplicate_id_is_rejected() {
        let mut net = lab();
        assert_eq!(
            exec(&mut net, "add camera lamp_1"),
            "% Device lamp_1 already exists"
        );
        assert_eq!(net.get_device("lamp_1").unwrap().device_type, "lamp");
        assert_eq!(net.ip_counter(), 3);
    }

    #[test]
    fn show_interfaces_table() {
        let mut net = Network::new();
        assert_eq!(exec(&mut net, "show ip interface brief"), "% No devices");

        let mut net = lab();
        exec(&mut net, "shutdown lamp_1");
        assert_eq!(
            exec(&mut net, "show ip interface brief"),
            "Device ID    Type     IP Address        Status\n\
             sensor_1    sensor  192.168.1.1     enabled\n\
             lamp_1      lamp    192.168.1.2     disabled"
        );
    }

    #[test]
    fn show_links_table() {
        let mut net = lab();
        assert_eq!(exec(&mut net, "show links"), "% No links");
        exec(&mut net, "link sensor_1 lamp_1 bw 500 delay 5");
        assert_eq!(
            exec(&mut net, "show links"),
            "Source      Target      BW(Kbps)  Delay(ms)\n\
             sensor_1    lamp_1      500       5"
        );
    }

    #[test]
    fn show_log_lists_transitions() {
        let mut net = lab();
        assert_eq!(exec(&mut net, "show log lamp_1"), "% No log entries for lamp_1");
        assert_eq!(exec(&mut net, "show log ghost"), "% Device ghost not found");

        exec(&mut net, "shutdown lamp_1");
        exec(&mut net, "no shutdown lamp_1");
        let out = exec(&mut net, "show log lamp_1");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] Disabled"));
        assert!(lines[1].ends_with("] Enabled"));
    }

    #[test]
    fn ping_checks_links_only() {
        let mut net = lab();
        assert_eq!(
            exec(&mut net, "ping sensor_1 lamp_1"),
            "Ping sensor_1 → lamp_1: Timeout"
        );
        exec(&mut net, "link sensor_1 lamp_1");
        assert_eq!(
            exec(&mut net, "ping lamp_1 sensor_1"),
            "Ping lamp_1 → sensor_1: OK"
        );
        exec(&mut net, "shutdown lamp_1");
        assert_eq!(
            exec(&mut net, "ping sensor_1 lamp_1"),
            "Ping sensor_1 → lamp_1: OK"
        );
        assert_eq!(exec(&mut net, "ping ghost nobody"), "Ping ghost → nobody: Timeout");
    }

    #[test]
    fn shutdown_and_enable() {
        let mut net = lab();
        assert_eq!(
            exec(&mut net, "shutdown sensor_1"),
            "% Device sensor_1 has been shutdown"
        );
        assert_eq!(
            net.get_device("sensor_1").unwrap().status,
            DeviceStatus::Disabled
        );
        assert_eq!(
            exec(&mut net, "no shutdown sensor_1"),
            "% Device sensor_1 has been enabled"
        );
        assert!(net.get_device("sensor_1").unwrap().is_enabled());
        assert_eq!(exec(&mut net, "shutdown ghost"), "% Device ghost not found");
        assert_eq!(exec(&mut net, "no shutdown ghost"), "% Device ghost not found");
    }

    #[test]
    fn link_success_and_failures() {
        let mut net = lab();
        assert_eq!(
            exec(&mut net, "link sensor_1 lamp_1 bw 500 delay 5"),
            "% Link sensor_1↔lamp_1 established (BW=500Kbps, delay=5ms)"
        );
        assert_eq!(
            exec(&mut net, "link lamp_1 sensor_1"),
            "% Failed to link lamp_1 and sensor_1"
        );
        assert_eq!(
            exec(&mut net, "link sensor_1 ghost"),
            "% Failed to link sensor_1 and ghost"
        );
        assert_eq!(
            exec(&mut net, "link sensor_1 sensor_1"),
            "% Failed to link sensor_1 and sensor_1"
        );
        assert_eq!(
            exec(&mut net, "link sensor_1 lamp_1 bw lots"),
            "% Invalid parameters for link"
        );
        assert_eq!(net.list_links().len(), 1);
    }

    #[test]
    fn link_defaults() {
        let mut net = lab();
        assert_eq!(
            exec(&mut net, "link sensor_1 lamp_1"),
            "% Link sensor_1↔lamp_1 established (BW=1000Kbps, delay=10ms)"
        );
    }

    #[test]
    fn remove_cascades_links() {
        let mut net = lab();
        exec(&mut net, "link sensor_1 lamp_1");
        assert_eq!(exec(&mut net, "remove lamp_1"), "% Device lamp_1 removed");
        assert!(net.list_links().is_empty());
        assert_eq!(exec(&mut net, "remove lamp_1"), "% Device lamp_1 not found");
    }

    #[test]
    fn unknown_command() {
        let mut net = Network::new();
        assert_eq!(exec(&mut net, "reboot"), "% Unknown command");
        assert_eq!(exec(&mut net, "show ip"), "% Unknown command");
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("lab");
        let base = base.to_str().unwrap();

        let mut net = lab();
        exec(&mut net, "link sensor_1 lamp_1 bw 500 delay 5");
        assert_eq!(
            exec(&mut net, &format!("save {base}")),
            format!("% Configuration saved to {base}.json")
        );

        let mut fresh = Network::new();
        assert_eq!(
            exec(&mut fresh, &format!("load {base}.json")),
            format!("% Configuration loaded from {base}.json")
        );
        assert_eq!(fresh.to_document(), net.to_document());
    }

    #[test]
    fn load_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let missing = missing.to_str().unwrap();

        let mut net = lab();
        assert_eq!(
            exec(&mut net, &format!("load {missing}")),
            format!("% File {missing} not found")
        );

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert_eq!(
            exec(&mut net, &format!("load {}", broken.to_str().unwrap())),
            "% Load error"
        );
        assert_eq!(net.device_count(), 2);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no").join("such").join("lab");
        let mut net = lab();
        assert_eq!(
            exec(&mut net, &format!("save {}", target.to_str().unwrap())),
            "% Save error"
        );
    }

    #[test]
    fn run_exposes_error_kinds() {
        let mut net = lab();
        let mut interp = Interpreter::new(&mut net);
        assert_eq!(
            interp.run("remove ghost").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            interp.run("add lamp lamp_1").unwrap_err().kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            interp.run("link sensor_1 ghost").unwrap_err().kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            interp.run("link sensor_1 lamp_1 delay 0").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(interp.run("bogus").unwrap_err().kind(), ErrorKind::Unrecognized);
        assert!(interp.run("").unwrap().is_none());
    }
}
