//! Wire protocol encoder for the front-panel LCD.
//!
//! Every packet on the wire is exactly 8 header bytes plus a 4096-byte data
//! region, zero-padded. Control packets (orientation, clock, heartbeat)
//! carry their arguments in the header; a full-frame redraw is split into a
//! sequence of chunk packets described by a [`TransferPlan`].
//!
//! The protocol is write-only: the device never answers, so there is no
//! reader half. [`PacketWriter`] sends packets to any `std::io::Write` sink
//! and reports the index of the packet a failed send died on.

pub mod config;
pub mod error;
pub mod packet;
pub mod plan;
pub mod writer;

pub use config::{HeartbeatOrder, ProtocolConfig, SingleChunkCommand, DEFAULT_HEARTBEAT_INTERVAL};
pub use error::{ProtocolError, Result};
pub use packet::{
    ChunkCommand, CLASS_CONTROL, CLASS_REDRAW, HEADER_SIZE, PACKET_DATA_SIZE, PACKET_SIZE,
    SIGNATURE,
};
pub use plan::{ChunkSpec, TransferPlan};
pub use writer::PacketWriter;
