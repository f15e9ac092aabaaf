use panelstat_proto::PacketWriter;
use tracing::info;

use crate::cmd::{resolve_device, OrientationArgs};
use crate::exit::{protocol_error, CliResult, SUCCESS};
use crate::output::OutputFormat;

pub fn run(args: OrientationArgs, _format: OutputFormat) -> CliResult<i32> {
    let device = resolve_device(&args.device)?;
    let mut writer = PacketWriter::new(device);
    writer
        .set_orientation(args.orientation.mode())
        .map_err(|err| protocol_error("set orientation failed", err))?;
    info!(orientation = ?args.orientation, "orientation set");
    Ok(SUCCESS)
}
