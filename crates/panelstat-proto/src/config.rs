use std::time::Duration;

use crate::packet::PACKET_DATA_SIZE;

/// How often the liveness heartbeat should be sent. The device reverts to
/// its default banner when it goes roughly a second without one.
pub const DEFAULT_HEARTBEAT_INTERVAL: Duration = Duration::from_millis(1000);

/// Command code carried by a frame that fits in a single chunk.
///
/// Captured traffic never exercises this case — every observed frame spans
/// multiple chunks — so the resolution is explicit configuration rather
/// than inferred intent. The default lets END take precedence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SingleChunkCommand {
    /// The sole packet is marked END.
    #[default]
    End,
    /// The sole packet is marked START.
    Start,
}

/// When the heartbeat is sent relative to a due redraw.
///
/// Device firmware revisions differ; both observed orderings are covered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeartbeatOrder {
    /// Heartbeat before the redraw only.
    #[default]
    Before,
    /// Heartbeat both before and after the redraw.
    BeforeAndAfter,
}

/// Protocol variance collapsed into configuration.
///
/// The captured device variants differ in chunk size accounting, heartbeat
/// ordering, and single-chunk command resolution; everything else is fixed
/// by the wire format.
#[derive(Clone, Debug)]
pub struct ProtocolConfig {
    /// Frame bytes carried per redraw packet. At most the packet data
    /// region (4096 bytes), which is also the default.
    pub chunk_size: usize,
    /// Command code for single-chunk frames.
    pub single_chunk: SingleChunkCommand,
    /// Heartbeat placement relative to a redraw.
    pub heartbeat_order: HeartbeatOrder,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            chunk_size: PACKET_DATA_SIZE,
            single_chunk: SingleChunkCommand::default(),
            heartbeat_order: HeartbeatOrder::default(),
        }
    }
}
