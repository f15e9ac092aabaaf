//! Packet layout and encoding.
//!
//! Wire format, every packet:
//!
//! ```text
//! ┌───────────┬──────────┬──────────┬──────────────────────────────┐
//! │ Signature │ Class    │ Command  │ Command-specific (5 bytes)   │
//! │ 0x55      │ A1 / A3  │          │                              │
//! ├───────────┴──────────┴──────────┴──────────────────────────────┤
//! │ Data region: 4096 bytes, zero-padded                           │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Control packets (class 0xA1) put their arguments in the header and carry
//! an all-zero data region. Redraw chunks (class 0xA3) put sequence, offset
//! and length in the header and the frame slice in the data region.

use bytes::{BufMut, BytesMut};

/// Signature byte opening every packet.
pub const SIGNATURE: u8 = 0x55;

/// Header size in bytes.
pub const HEADER_SIZE: usize = 8;

/// Fixed size of the packet data region.
pub const PACKET_DATA_SIZE: usize = 4096;

/// Total wire size of one packet.
pub const PACKET_SIZE: usize = HEADER_SIZE + PACKET_DATA_SIZE;

/// Command class: control (orientation, clock, heartbeat).
pub const CLASS_CONTROL: u8 = 0xA1;

/// Command class: full-frame redraw.
pub const CLASS_REDRAW: u8 = 0xA3;

/// Control command: set panel orientation.
pub const CTRL_ORIENTATION: u8 = 0xF1;

/// Control command: liveness heartbeat (carries the current time).
pub const CTRL_HEARTBEAT: u8 = 0xF2;

/// Control command: set the device clock.
pub const CTRL_SET_CLOCK: u8 = 0xF3;

/// Position of a redraw chunk within its frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkCommand {
    /// First chunk of a frame.
    Start,
    /// Interior chunk.
    Continue,
    /// Final chunk of a frame.
    End,
}

impl ChunkCommand {
    /// The command byte carried in the header.
    pub fn code(self) -> u8 {
        match self {
            ChunkCommand::Start => 0xF0,
            ChunkCommand::Continue => 0xF1,
            ChunkCommand::End => 0xF2,
        }
    }
}

/// Returns a human-readable name for a command class byte.
pub fn class_name(class: u8) -> &'static str {
    match class {
        CLASS_CONTROL => "CONTROL",
        CLASS_REDRAW => "REDRAW",
        _ => "UNKNOWN",
    }
}

/// Encode a set-orientation packet.
///
/// `mode` is an opaque device-specific orientation code; this panel uses
/// 0x01 for landscape and 0x02 for portrait.
pub fn encode_orientation(mode: u8, dst: &mut BytesMut) {
    dst.reserve(PACKET_SIZE);
    dst.put_slice(&[SIGNATURE, CLASS_CONTROL, CTRL_ORIENTATION, mode, 0, 0, 0, 0]);
    dst.put_bytes(0, PACKET_DATA_SIZE);
}

/// Encode a set-clock packet carrying the wall-clock time of day.
pub fn encode_clock(hour: u8, minute: u8, second: u8, dst: &mut BytesMut) {
    encode_timed_control(CTRL_SET_CLOCK, hour, minute, second, dst);
}

/// Encode a heartbeat packet.
///
/// The heartbeat is a hard protocol requirement, not an optimization: the
/// device reverts to its default banner when it stops arriving.
pub fn encode_heartbeat(hour: u8, minute: u8, second: u8, dst: &mut BytesMut) {
    encode_timed_control(CTRL_HEARTBEAT, hour, minute, second, dst);
}

fn encode_timed_control(command: u8, hour: u8, minute: u8, second: u8, dst: &mut BytesMut) {
    dst.reserve(PACKET_SIZE);
    dst.put_slice(&[
        SIGNATURE,
        CLASS_CONTROL,
        command,
        hour,
        minute,
        second,
        0,
        0,
    ]);
    dst.put_bytes(0, PACKET_DATA_SIZE);
}

/// Encode one redraw chunk.
///
/// `sequence` is the 1-based chunk number, `offset` the chunk's byte offset
/// within the frame, and `payload` the frame slice it carries
/// (at most [`PACKET_DATA_SIZE`] bytes; the rest of the data region is
/// zero-filled).
///
/// The header's offset and length fields are the byte offset and payload
/// length in units of 256 bytes, little-endian — 0x0010 for a full
/// 4096-byte chunk, 0x0009 for the 2304-byte tail of a 320×170 frame. The
/// firmware interprets only the command and sequence, but these values stay
/// deterministic so encoded streams compare equal against captures.
pub fn encode_chunk(
    sequence: u8,
    command: ChunkCommand,
    offset: usize,
    payload: &[u8],
    dst: &mut BytesMut,
) {
    debug_assert!(payload.len() <= PACKET_DATA_SIZE);
    dst.reserve(PACKET_SIZE);
    dst.put_slice(&[SIGNATURE, CLASS_REDRAW, command.code(), sequence]);
    dst.put_u16_le((offset >> 8) as u16);
    dst.put_u16_le((payload.len() >> 8) as u16);
    dst.put_slice(payload);
    dst.put_bytes(0, PACKET_DATA_SIZE - payload.len());
}
