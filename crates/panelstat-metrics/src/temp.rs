//! Best-effort CPU temperature from sysfs.
//!
//! Thermal zones are tried first, then hwmon. Temperature is genuinely
//! optional hardware — virtual machines and some boards expose nothing —
//! so absence is `None`, not an error.

use std::path::Path;

use tracing::debug;

const THERMAL_CLASS: &str = "/sys/class/thermal";
const HWMON_CLASS: &str = "/sys/class/hwmon";

/// Read a CPU temperature in °C, or `None` when no sensor is readable.
pub fn cpu_temp_c() -> Option<f64> {
    read_first(Path::new(THERMAL_CLASS), "thermal_zone", "temp")
        .or_else(|| read_first(Path::new(HWMON_CLASS), "hwmon", "temp1_input"))
}

/// Scan `class_dir` for entries named `prefix*` and return the first
/// readable `file` value, in millidegrees.
fn read_first(class_dir: &Path, prefix: &str, file: &str) -> Option<f64> {
    let entries = std::fs::read_dir(class_dir).ok()?;
    for entry in entries.flatten() {
        if !entry.file_name().to_string_lossy().starts_with(prefix) {
            continue;
        }
        let sensor = entry.path().join(file);
        let Ok(content) = std::fs::read_to_string(&sensor) else {
            continue;
        };
        if let Some(celsius) = parse_millidegrees(&content) {
            debug!(sensor = %sensor.display(), celsius, "read temperature");
            return Some(celsius);
        }
    }
    None
}

fn parse_millidegrees(content: &str) -> Option<f64> {
    let milli: i64 = content.trim().parse().ok()?;
    Some(milli as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_millidegree_values() {
        assert_eq!(parse_millidegrees("45000\n"), Some(45.0));
        assert_eq!(parse_millidegrees("-5500"), Some(-5.5));
        assert_eq!(parse_millidegrees("garbage"), None);
        assert_eq!(parse_millidegrees(""), None);
    }

    fn fake_class(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "panelstat-temp-{tag}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn reads_the_first_matching_sensor() {
        let dir = fake_class("first");
        let zone = dir.join("thermal_zone0");
        std::fs::create_dir_all(&zone).unwrap();
        std::fs::write(zone.join("temp"), "52000\n").unwrap();

        assert_eq!(read_first(&dir, "thermal_zone", "temp"), Some(52.0));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn skips_unreadable_and_foreign_entries() {
        let dir = fake_class("skip");
        std::fs::create_dir_all(dir.join("cooling_device0")).unwrap();
        std::fs::create_dir_all(dir.join("thermal_zone0")).unwrap(); // no temp file

        assert_eq!(read_first(&dir, "thermal_zone", "temp"), None);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn live_read_does_not_panic() {
        let _ = cpu_temp_c();
    }
}
