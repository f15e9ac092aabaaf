//! Memory usage from `/proc/meminfo`.

use std::path::Path;

use crate::error::{MetricsError, Result};
use crate::units::percent_of;

const PROC_MEMINFO: &str = "/proc/meminfo";

/// Memory totals in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemInfo {
    pub total: u64,
    pub used: u64,
    pub available: u64,
}

impl MemInfo {
    /// Used share as a rounded percentage.
    pub fn used_percent(&self) -> u32 {
        percent_of(self.used, self.total)
    }
}

/// Read current memory totals.
pub fn read() -> Result<MemInfo> {
    let content =
        std::fs::read_to_string(PROC_MEMINFO).map_err(|source| MetricsError::Read {
            path: PROC_MEMINFO.into(),
            source,
        })?;
    parse_meminfo(&content)
}

fn parse_meminfo(content: &str) -> Result<MemInfo> {
    let total = field_bytes(content, "MemTotal:")?;
    let available = field_bytes(content, "MemAvailable:")?;
    Ok(MemInfo {
        total,
        used: total.saturating_sub(available),
        available,
    })
}

/// Extract a `Label:    12345 kB` field as bytes.
fn field_bytes(content: &str, label: &str) -> Result<u64> {
    let parse_err = |detail: String| MetricsError::Parse {
        path: Path::new(PROC_MEMINFO).to_path_buf(),
        detail,
    };

    let line = content
        .lines()
        .find(|line| line.starts_with(label))
        .ok_or_else(|| parse_err(format!("missing {label} line")))?;
    let kib: u64 = line
        .split_whitespace()
        .nth(1)
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| parse_err(format!("malformed {label} line")))?;
    Ok(kib * 1024)
}
