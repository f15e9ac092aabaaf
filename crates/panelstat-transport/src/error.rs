use std::path::PathBuf;

/// Errors that can occur opening or locating the panel device.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to open the device node.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The path exists but is not a character device.
    #[error("{path} is not a character device")]
    NotACharDevice { path: PathBuf },

    /// Failed to enumerate the hidraw class directory.
    #[error("failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No attached HID device matches the panel's USB IDs.
    #[error("no hidraw device with ID {vendor:04X}:{product:04X} found")]
    NoDevice { vendor: u16, product: u16 },

    /// An I/O error occurred on the device handle.
    #[error("device I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;
