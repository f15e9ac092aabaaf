//! Dashboard composition for the 320×170 panel.
//!
//! Layout and palette follow the gauge-per-row scheme the panel shipped
//! with: title, CPU row, memory block, disk block, temperature line. Any
//! metric can be absent for a cycle; its row then shows N/A and an empty
//! gauge rather than stale data.

use panelstat_metrics::{human_bytes, DiskUsage, MemInfo};
use panelstat_render::{PixelBuffer, Rgb565};

/// Panel width in landscape orientation.
pub const PANEL_WIDTH: usize = 320;

/// Panel height in landscape orientation.
pub const PANEL_HEIGHT: usize = 170;

const BACKGROUND: Rgb565 = Rgb565::BLACK;
const TITLE: Rgb565 = Rgb565::from_rgb888(255, 255, 255);
const TEXT: Rgb565 = Rgb565::from_rgb888(220, 220, 220);

const CPU_LABEL: Rgb565 = Rgb565::from_rgb888(180, 220, 255);
const CPU_FILL: Rgb565 = Rgb565::from_rgb888(80, 200, 255);
const CPU_TRACK: Rgb565 = Rgb565::from_rgb888(20, 40, 60);
const CPU_FRAME: Rgb565 = Rgb565::from_rgb888(120, 160, 200);

const MEM_LABEL: Rgb565 = Rgb565::from_rgb888(180, 255, 180);
const MEM_FILL: Rgb565 = Rgb565::from_rgb888(120, 255, 120);
const MEM_TRACK: Rgb565 = Rgb565::from_rgb888(16, 40, 16);
const MEM_FRAME: Rgb565 = Rgb565::from_rgb888(80, 140, 80);
const MEM_DIM: Rgb565 = Rgb565::from_rgb888(170, 200, 170);

const DISK_LABEL: Rgb565 = Rgb565::from_rgb888(255, 220, 180);
const DISK_FILL: Rgb565 = Rgb565::from_rgb888(255, 200, 120);
const DISK_TRACK: Rgb565 = Rgb565::from_rgb888(40, 28, 16);
const DISK_FRAME: Rgb565 = Rgb565::from_rgb888(180, 140, 90);
const DISK_DIM: Rgb565 = Rgb565::from_rgb888(200, 180, 150);

const TEMP_LABEL: Rgb565 = Rgb565::from_rgb888(255, 180, 180);
const TEMP_TEXT: Rgb565 = Rgb565::from_rgb888(255, 200, 200);

const BAR_X: i32 = 60;
const BAR_W: i32 = 240;
const BAR_H: i32 = 10;

/// One sampling cycle's inputs, each absent when its reader failed.
#[derive(Clone, Copy, Debug, Default)]
pub struct DashboardData {
    pub cpu_percent: Option<f64>,
    pub mem: Option<MemInfo>,
    pub disk: Option<DiskUsage>,
    pub temp_c: Option<f64>,
}

/// Paint the full dashboard into `fb` (landscape panel dimensions).
pub fn draw_dashboard(fb: &mut PixelBuffer, data: &DashboardData) {
    fb.clear(BACKGROUND);
    fb.draw_text(8, 8, "PANEL STATS", 1, TITLE, BACKGROUND);

    // CPU
    let cpu_pct = data.cpu_percent.map(|p| (p + 0.5) as u32);
    fb.draw_text(8, 28, "CPU", 1, CPU_LABEL, BACKGROUND);
    fb.draw_bar(
        BAR_X,
        28,
        BAR_W,
        BAR_H,
        cpu_pct.unwrap_or(0),
        CPU_FILL,
        CPU_TRACK,
        CPU_FRAME,
    );
    let cpu_line = match cpu_pct {
        Some(pct) => format!("CPU {pct:>3}%"),
        None => "CPU N/A".to_string(),
    };
    fb.draw_text(8, 42, &cpu_line, 1, TEXT, BACKGROUND);

    // Memory
    fb.draw_text(8, 60, "RAM", 1, MEM_LABEL, BACKGROUND);
    fb.draw_bar(
        BAR_X,
        60,
        BAR_W,
        BAR_H,
        data.mem.map(|m| m.used_percent()).unwrap_or(0),
        MEM_FILL,
        MEM_TRACK,
        MEM_FRAME,
    );
    match &data.mem {
        Some(mem) => {
            let used = format!(
                "{} USED / {}",
                human_bytes(mem.used),
                human_bytes(mem.total)
            );
            fb.draw_text(8, 74, &used, 1, TEXT, BACKGROUND);
            let avail = format!("{} AVAIL", human_bytes(mem.available));
            fb.draw_text(8, 86, &avail, 1, MEM_DIM, BACKGROUND);
        }
        None => {
            fb.draw_text(8, 74, "N/A", 1, TEXT, BACKGROUND);
        }
    }

    // Disk
    fb.draw_text(8, 104, "DISK", 1, DISK_LABEL, BACKGROUND);
    fb.draw_bar(
        BAR_X,
        104,
        BAR_W,
        BAR_H,
        data.disk.map(|d| d.used_percent()).unwrap_or(0),
        DISK_FILL,
        DISK_TRACK,
        DISK_FRAME,
    );
    match &data.disk {
        Some(disk) => {
            let used = format!(
                "{} USED / {}",
                human_bytes(disk.used),
                human_bytes(disk.total)
            );
            fb.draw_text(8, 118, &used, 1, TEXT, BACKGROUND);
            let free = format!("{} FREE", human_bytes(disk.available));
            fb.draw_text(8, 130, &free, 1, DISK_DIM, BACKGROUND);
        }
        None => {
            fb.draw_text(8, 118, "N/A", 1, TEXT, BACKGROUND);
        }
    }

    // Temperature
    fb.draw_text(8, 148, "TEMP", 1, TEMP_LABEL, BACKGROUND);
    let temp_line = match data.temp_c {
        Some(celsius) => format!("CPU {celsius:.1} C"),
        None => "CPU N/A".to_string(),
    };
    fb.draw_text(60, 148, &temp_line, 1, TEMP_TEXT, BACKGROUND);
}
