use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use panelstat_metrics::CpuSampler;
use panelstat_proto::{HeartbeatOrder, PacketWriter, DEFAULT_HEARTBEAT_INTERVAL};
use panelstat_render::{rotate_90cw, PixelBuffer};
use panelstat_transport::PanelDevice;
use tracing::{info, warn};

use crate::cmd::{local_hms, resolve_device, Orientation, RunArgs};
use crate::exit::{protocol_error, CliError, CliResult, INTERNAL, SUCCESS};
use crate::output::OutputFormat;
use crate::screen::{draw_dashboard, DashboardData, PANEL_HEIGHT, PANEL_WIDTH};

pub fn run(args: RunArgs, _format: OutputFormat) -> CliResult<i32> {
    let device = resolve_device(&args.device)?;
    let mut writer = PacketWriter::new(device);

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    // Startup sequence: orientation, clock sync, one heartbeat before the
    // first frame.
    let (hour, minute, second) = local_hms();
    writer
        .set_orientation(args.orientation.mode())
        .map_err(|err| protocol_error("set orientation failed", err))?;
    writer
        .set_clock(hour, minute, second)
        .map_err(|err| protocol_error("clock sync failed", err))?;
    writer
        .heartbeat(hour, minute, second)
        .map_err(|err| protocol_error("initial heartbeat failed", err))?;

    let interval = Duration::from_secs(args.interval.max(1));
    let heartbeat_order = writer.config().heartbeat_order;
    let mut cpu = CpuSampler::new();
    let mut last_heartbeat = Instant::now();
    let mut frames_sent = 0u64;

    info!(
        device = %writer.get_ref().path().display(),
        interval_s = interval.as_secs(),
        "dashboard loop started"
    );

    while running.load(Ordering::SeqCst) {
        let data = sample(&mut cpu, &args.disk);
        let frame = compose_frame(&data, args.orientation);

        let beat_due = last_heartbeat.elapsed() >= DEFAULT_HEARTBEAT_INTERVAL;
        if beat_due {
            send_heartbeat(&mut writer);
        }

        // A failed frame is superseded by the next cycle, not retried.
        if let Err(err) = writer.send_frame(&frame) {
            warn!(
                error = %err,
                packet = ?err.failed_packet(),
                "frame send failed; retrying next cycle"
            );
        } else {
            frames_sent += 1;
        }

        if beat_due {
            if heartbeat_order == HeartbeatOrder::BeforeAndAfter {
                send_heartbeat(&mut writer);
            }
            last_heartbeat = Instant::now();
        }

        if let Some(limit) = args.frames {
            if frames_sent >= limit {
                break;
            }
        }

        sleep_unless_stopped(&running, interval);
    }

    info!(frames_sent, "dashboard loop stopped");
    Ok(SUCCESS)
}

fn sample(cpu: &mut CpuSampler, disk_path: &Path) -> DashboardData {
    let cpu_percent = match cpu.sample() {
        Ok(pct) => Some(pct),
        Err(err) => {
            warn!(error = %err, "cpu sample failed");
            None
        }
    };
    let mem = match panelstat_metrics::mem::read() {
        Ok(info) => Some(info),
        Err(err) => {
            warn!(error = %err, "memory sample failed");
            None
        }
    };
    let disk = match panelstat_metrics::disk::usage(disk_path) {
        Ok(usage) => Some(usage),
        Err(err) => {
            warn!(error = %err, path = %disk_path.display(), "disk sample failed");
            None
        }
    };
    DashboardData {
        cpu_percent,
        mem,
        disk,
        temp_c: panelstat_metrics::cpu_temp_c(),
    }
}

fn compose_frame(data: &DashboardData, orientation: Orientation) -> Bytes {
    let mut fb = PixelBuffer::new(PANEL_WIDTH, PANEL_HEIGHT);
    draw_dashboard(&mut fb, data);
    match orientation {
        Orientation::Landscape => fb.to_wire_bytes(),
        Orientation::Portrait => {
            // Mounted vertically the panel scans out transposed frames.
            let mut turned = PixelBuffer::new(PANEL_HEIGHT, PANEL_WIDTH);
            rotate_90cw(&fb, &mut turned);
            turned.to_wire_bytes()
        }
    }
}

fn send_heartbeat(writer: &mut PacketWriter<PanelDevice>) {
    let (hour, minute, second) = local_hms();
    if let Err(err) = writer.heartbeat(hour, minute, second) {
        warn!(error = %err, "heartbeat failed");
    }
}

fn sleep_unless_stopped(running: &AtomicBool, total: Duration) {
    let slice = Duration::from_millis(100);
    let deadline = Instant::now() + total;
    while running.load(Ordering::SeqCst) {
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        std::thread::sleep(slice.min(deadline - now));
    }
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(
            INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}
