//! Link listing.

use iotnet_core::Link;
use tabled::Tabled;

use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct LinkRow {
    #[tabled(rename = "Source")]
    src: String,
    #[tabled(rename = "Target")]
    dst: String,
    #[tabled(rename = "Bandwidth (Kbps)")]
    bandwidth: u32,
    #[tabled(rename = "Delay (ms)")]
    delay: u32,
}

impl From<&Link> for LinkRow {
    fn from(l: &Link) -> Self {
        Self {
            src: l.src.clone(),
            dst: l.dst.clone(),
            bandwidth: l.bandwidth_kbps,
            delay: l.delay_ms,
        }
    }
}

pub fn handle(settings: &Settings) -> Result<(), CliError> {
    let links = util::open_topology(settings)?.links_snapshot();
    let out = output::render_list(settings.output, &links, |l| LinkRow::from(l), |l| {
        format!("{} {}", l.src, l.dst)
    });
    output::print_output(&out, settings.quiet);
    Ok(())
}
