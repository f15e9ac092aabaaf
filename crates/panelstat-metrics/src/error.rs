use std::path::PathBuf;

/// Errors that can occur while sampling system metrics.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to read a procfs/sysfs file.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A procfs/sysfs file did not have the expected shape.
    #[error("failed to parse {path}: {detail}")]
    Parse { path: PathBuf, detail: String },

    /// A system call failed.
    #[error("{call} failed: {source}")]
    Sys {
        call: &'static str,
        source: std::io::Error,
    },

    /// The path cannot be passed to the OS (interior NUL byte).
    #[error("invalid path: {path}")]
    InvalidPath { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, MetricsError>;
