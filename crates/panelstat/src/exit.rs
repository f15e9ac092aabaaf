use std::fmt;
use std::io;

use panelstat_proto::ProtocolError;
use panelstat_transport::TransportError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const HEALTH_CHECK_FAILED: i32 = 30;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    CliError::new(io_code(&err), format!("{context}: {err}"))
}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    let code = match &err {
        TransportError::Open { source, .. } => io_code(source),
        TransportError::NotACharDevice { .. } => USAGE,
        TransportError::NoDevice { .. } => FAILURE,
        TransportError::Scan { .. } | TransportError::Io(_) => TRANSPORT_ERROR,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn protocol_error(context: &str, err: ProtocolError) -> CliError {
    let code = match &err {
        ProtocolError::EmptyFrame
        | ProtocolError::InvalidChunkSize { .. }
        | ProtocolError::TooManyChunks { .. } => DATA_INVALID,
        ProtocolError::DeviceClosed { .. } => FAILURE,
        ProtocolError::Io { source, .. } => io_code(source),
    };
    CliError::new(code, format!("{context}: {err}"))
}

fn io_code(err: &io::Error) -> i32 {
    match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => TRANSPORT_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_maps_to_its_own_code() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(io_error("open", err).code, PERMISSION_DENIED);
    }

    #[test]
    fn frame_geometry_errors_are_data_invalid() {
        let err = protocol_error("send", ProtocolError::EmptyFrame);
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.contains("send"));
    }

    #[test]
    fn missing_device_is_a_plain_failure() {
        let err = transport_error(
            "discover",
            TransportError::NoDevice {
                vendor: 0x04D9,
                product: 0xFD01,
            },
        );
        assert_eq!(err.code, FAILURE);
        assert!(err.message.contains("04D9"));
    }

    #[test]
    fn open_permission_carries_through_transport_mapping() {
        let err = transport_error(
            "open",
            TransportError::Open {
                path: "/dev/hidraw0".into(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            },
        );
        assert_eq!(err.code, PERMISSION_DENIED);
    }
}
