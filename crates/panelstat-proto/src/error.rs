/// Errors that can occur while planning or sending packets.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The frame has no bytes to send.
    #[error("frame is empty")]
    EmptyFrame,

    /// The configured chunk size does not fit the packet data region.
    #[error("invalid chunk size ({size} bytes, must be 1..={max})")]
    InvalidChunkSize { size: usize, max: usize },

    /// The frame needs more chunks than the one-byte sequence field can
    /// number.
    #[error("frame spans {chunks} chunks, sequence field allows at most {max}")]
    TooManyChunks { chunks: usize, max: usize },

    /// The sink stopped accepting bytes mid-send.
    #[error("device closed while sending packet {packet}")]
    DeviceClosed { packet: usize },

    /// An I/O error occurred while sending a packet.
    #[error("I/O error sending packet {packet}: {source}")]
    Io {
        packet: usize,
        source: std::io::Error,
    },
}

impl ProtocolError {
    /// Index of the packet a failed send died on, if the error came from
    /// the sink.
    pub fn failed_packet(&self) -> Option<usize> {
        match self {
            ProtocolError::DeviceClosed { packet } | ProtocolError::Io { packet, .. } => {
                Some(*packet)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
