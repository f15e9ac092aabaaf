//! CPU utilization from `/proc/stat`.

use std::path::Path;

use crate::error::{MetricsError, Result};

const PROC_STAT: &str = "/proc/stat";

/// Aggregate jiffy counters from the `cpu` summary line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CpuTimes {
    busy: u64,
    idle: u64,
}

impl CpuTimes {
    fn total(self) -> u64 {
        self.busy + self.idle
    }
}

/// Interval CPU sampler.
///
/// Utilization is the busy share of the jiffies elapsed between two
/// consecutive samples, so the first call has nothing to compare against
/// and returns 0.0. The previous sample is held here, owned by the
/// caller's loop.
#[derive(Debug, Default)]
pub struct CpuSampler {
    prev: Option<CpuTimes>,
}

impl CpuSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample `/proc/stat` and return utilization in percent (0.0–100.0).
    pub fn sample(&mut self) -> Result<f64> {
        let content =
            std::fs::read_to_string(PROC_STAT).map_err(|source| MetricsError::Read {
                path: PROC_STAT.into(),
                source,
            })?;
        let now = parse_cpu_line(&content)?;
        let percent = match self.prev {
            Some(prev) => percent_between(prev, now),
            None => 0.0,
        };
        self.prev = Some(now);
        Ok(percent)
    }
}

fn parse_cpu_line(content: &str) -> Result<CpuTimes> {
    let parse_err = |detail: &str| MetricsError::Parse {
        path: Path::new(PROC_STAT).to_path_buf(),
        detail: detail.to_string(),
    };

    // "cpu  user nice system idle iowait irq softirq steal ..."
    let line = content
        .lines()
        .find(|line| line.starts_with("cpu "))
        .ok_or_else(|| parse_err("no aggregate cpu line"))?;

    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map(|f| f.parse::<u64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| parse_err("non-numeric cpu field"))?;
    if fields.len() < 5 {
        return Err(parse_err("fewer than five cpu fields"));
    }

    // idle + iowait count as idle; everything else is busy.
    let idle = fields[3] + fields[4];
    let busy = fields.iter().sum::<u64>() - idle;
    Ok(CpuTimes { busy, idle })
}

fn percent_between(prev: CpuTimes, now: CpuTimes) -> f64 {
    let busy = now.busy.saturating_sub(prev.busy);
    let total = now.total().saturating_sub(prev.total());
    if total == 0 {
        return 0.0;
    }
    100.0 * busy as f64 / total as f64
}
