//! Device listing.

use iotnet_core::Device;
use tabled::Tabled;

use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    device_type: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Events")]
    events: usize,
}

impl From<&Device> for DeviceRow {
    fn from(d: &Device) -> Self {
        Self {
            id: d.id.clone(),
            device_type: d.device_type.clone(),
            ip: d.ip.clone(),
            status: d.status.to_string(),
            position: format!("{:.0},{:.0}", d.position.x, d.position.y),
            events: d.log().len(),
        }
    }
}

pub fn handle(settings: &Settings) -> Result<(), CliError> {
    let devices = util::open_topology(settings)?.devices_snapshot();
    let out = output::render_list(settings.output, &devices, |d| DeviceRow::from(d), |d| d.id.clone());
    output::print_output(&out, settings.quiet);
    Ok(())
}
