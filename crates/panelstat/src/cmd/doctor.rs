use std::path::Path;

use panelstat_metrics::{cpu_temp_c, human_bytes};
use panelstat_transport::{find_panel, PanelDevice, TransportError, PRODUCT_ID, VENDOR_ID};

use crate::cmd::DoctorArgs;
use crate::exit::{CliResult, HEALTH_CHECK_FAILED, SUCCESS};
use crate::output::{print_report, CheckResult, CheckStatus, OutputFormat, Report};

pub fn run(_args: DoctorArgs, format: OutputFormat) -> CliResult<i32> {
    let mut checks = vec![hidraw_class_check(), procfs_check(), thermal_check()];
    checks.extend(panel_checks());

    let report = Report::new(checks);
    print_report(&report, format);

    if report.failed() {
        Ok(HEALTH_CHECK_FAILED)
    } else {
        Ok(SUCCESS)
    }
}

fn hidraw_class_check() -> CheckResult {
    if Path::new("/sys/class/hidraw").is_dir() {
        CheckResult::new("hidraw_class", CheckStatus::Pass, "/sys/class/hidraw present")
    } else {
        CheckResult::new(
            "hidraw_class",
            CheckStatus::Fail,
            "/sys/class/hidraw missing (kernel without CONFIG_HIDRAW?)",
        )
    }
}

fn procfs_check() -> CheckResult {
    match panelstat_metrics::mem::read() {
        Ok(info) => CheckResult::new(
            "procfs_metrics",
            CheckStatus::Pass,
            format!("{} memory total", human_bytes(info.total)),
        ),
        Err(err) => CheckResult::new("procfs_metrics", CheckStatus::Fail, err.to_string()),
    }
}

fn thermal_check() -> CheckResult {
    match cpu_temp_c() {
        Some(celsius) => CheckResult::new(
            "temperature_sensor",
            CheckStatus::Pass,
            format!("{celsius:.1} C"),
        ),
        None => CheckResult::new(
            "temperature_sensor",
            CheckStatus::Warn,
            "no readable sensor; dashboard will show N/A",
        ),
    }
}

fn panel_checks() -> Vec<CheckResult> {
    match find_panel() {
        Ok(path) => {
            let detected = CheckResult::new(
                "panel_detected",
                CheckStatus::Pass,
                format!("{} ({VENDOR_ID:04X}:{PRODUCT_ID:04X})", path.display()),
            );
            let writable = match PanelDevice::open(&path) {
                Ok(_) => CheckResult::new(
                    "device_writable",
                    CheckStatus::Pass,
                    "open for writing succeeded",
                ),
                Err(TransportError::Open { source, .. })
                    if source.kind() == std::io::ErrorKind::PermissionDenied =>
                {
                    CheckResult::new(
                        "device_writable",
                        CheckStatus::Fail,
                        "permission denied (add a udev rule or run as root)",
                    )
                }
                Err(err) => {
                    CheckResult::new("device_writable", CheckStatus::Fail, err.to_string())
                }
            };
            vec![detected, writable]
        }
        Err(err) => vec![
            CheckResult::new("panel_detected", CheckStatus::Fail, err.to_string()),
            CheckResult::new("device_writable", CheckStatus::Skip, "no device to open"),
        ],
    }
}
