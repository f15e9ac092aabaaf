use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use panelstat_transport::PanelDevice;

use crate::exit::{transport_error, CliResult};
use crate::output::OutputFormat;

pub mod clock;
pub mod doctor;
pub mod orientation;
pub mod run;
pub mod splash;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the dashboard loop.
    Run(RunArgs),
    /// Send a single frame: solid color with optional centered text.
    Splash(SplashArgs),
    /// Set the panel orientation.
    Orientation(OrientationArgs),
    /// Sync the device clock to local time.
    Clock(ClockArgs),
    /// Run local environment health checks.
    Doctor(DoctorArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Run(args) => run::run(args, format),
        Command::Splash(args) => splash::run(args, format),
        Command::Orientation(args) => orientation::run(args, format),
        Command::Clock(args) => clock::run(args, format),
        Command::Doctor(args) => doctor::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// How the panel is physically mounted. The wire codes are this device's
/// values; the protocol layer treats them as opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    pub fn mode(self) -> u8 {
        match self {
            Orientation::Landscape => 0x01,
            Orientation::Portrait => 0x02,
        }
    }
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Device node; discovered by USB ID when omitted.
    #[arg(long, value_name = "PATH")]
    pub device: Option<PathBuf>,
    /// Redraw interval in seconds.
    #[arg(long, default_value_t = 1, value_name = "SECONDS")]
    pub interval: u64,
    /// Panel mounting orientation.
    #[arg(long, value_enum, default_value_t = Orientation::Landscape)]
    pub orientation: Orientation,
    /// Filesystem whose usage is shown on the disk row.
    #[arg(long, default_value = "/", value_name = "PATH")]
    pub disk: PathBuf,
    /// Stop after sending N frames.
    #[arg(long, value_name = "N")]
    pub frames: Option<u64>,
}

#[derive(Args, Debug)]
pub struct SplashArgs {
    /// Device node; discovered by USB ID when omitted.
    #[arg(long, value_name = "PATH")]
    pub device: Option<PathBuf>,
    /// Fill color as RRGGBB hex.
    #[arg(long, default_value = "000000", value_name = "HEX")]
    pub color: String,
    /// Text to center on the panel.
    #[arg(long)]
    pub text: Option<String>,
    /// Text scale factor.
    #[arg(long, default_value_t = 2)]
    pub scale: i32,
    /// Write the encoded packet stream to a file instead of a device.
    #[arg(long, value_name = "PATH", conflicts_with = "device")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct OrientationArgs {
    /// Device node; discovered by USB ID when omitted.
    #[arg(long, value_name = "PATH")]
    pub device: Option<PathBuf>,
    /// Orientation to set.
    #[arg(value_enum)]
    pub orientation: Orientation,
}

#[derive(Args, Debug)]
pub struct ClockArgs {
    /// Device node; discovered by USB ID when omitted.
    #[arg(long, value_name = "PATH")]
    pub device: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct DoctorArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Open the given device node, or discover the panel when none was given.
pub(crate) fn resolve_device(device: &Option<PathBuf>) -> CliResult<PanelDevice> {
    let path = match device {
        Some(path) => path.clone(),
        None => panelstat_transport::find_panel()
            .map_err(|err| transport_error("device discovery failed", err))?,
    };
    PanelDevice::open(&path).map_err(|err| transport_error("failed to open device", err))
}

/// Local wall-clock time of day for the clock and heartbeat packets.
pub(crate) fn local_hms() -> (u8, u8, u8) {
    use chrono::Timelike;
    let now = chrono::Local::now();
    (now.hour() as u8, now.minute() as u8, now.second() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_wire_codes() {
        assert_eq!(Orientation::Landscape.mode(), 0x01);
        assert_eq!(Orientation::Portrait.mode(), 0x02);
    }

    #[test]
    fn local_hms_is_in_range() {
        let (h, m, s) = local_hms();
        assert!(h < 24);
        assert!(m < 60);
        assert!(s < 61); // leap second
    }
}
