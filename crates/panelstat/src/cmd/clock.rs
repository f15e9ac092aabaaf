use panelstat_proto::PacketWriter;
use tracing::info;

use crate::cmd::{local_hms, resolve_device, ClockArgs};
use crate::exit::{protocol_error, CliResult, SUCCESS};
use crate::output::OutputFormat;

pub fn run(args: ClockArgs, _format: OutputFormat) -> CliResult<i32> {
    let device = resolve_device(&args.device)?;
    let mut writer = PacketWriter::new(device);
    let (hour, minute, second) = local_hms();
    writer
        .set_clock(hour, minute, second)
        .map_err(|err| protocol_error("clock sync failed", err))?;
    info!(hour, minute, second, "device clock set");
    Ok(SUCCESS)
}
