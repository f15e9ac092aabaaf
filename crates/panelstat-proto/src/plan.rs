//! Frame-to-packet transfer planning.

use crate::config::{ProtocolConfig, SingleChunkCommand};
use crate::error::{ProtocolError, Result};
use crate::packet::{ChunkCommand, PACKET_DATA_SIZE};

/// One planned redraw packet: which frame slice it carries and how it is
/// labeled on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkSpec {
    /// Byte offset of the payload within the frame.
    pub offset: usize,
    /// Payload length; always in `1..=chunk_size`.
    pub len: usize,
    /// START / CONTINUE / END command.
    pub command: ChunkCommand,
    /// 1-based sequence number.
    pub sequence: u8,
}

/// The ordered packet sequence covering one whole frame.
///
/// Invariant: payload lengths sum to the frame length exactly; the final
/// chunk carries the remainder when the frame is not a multiple of the
/// chunk size. Invalid geometries are rejected here, before any packet is
/// built.
#[derive(Clone, Debug)]
pub struct TransferPlan {
    chunks: Vec<ChunkSpec>,
    frame_len: usize,
}

impl TransferPlan {
    /// Upper bound on chunks per frame: the sequence field is one byte and
    /// 1-based.
    pub const MAX_CHUNKS: usize = u8::MAX as usize;

    /// Plan the transfer of a `frame_len`-byte frame.
    pub fn new(frame_len: usize, config: &ProtocolConfig) -> Result<Self> {
        let chunk_size = config.chunk_size;
        if chunk_size == 0 || chunk_size > PACKET_DATA_SIZE {
            return Err(ProtocolError::InvalidChunkSize {
                size: chunk_size,
                max: PACKET_DATA_SIZE,
            });
        }
        if frame_len == 0 {
            return Err(ProtocolError::EmptyFrame);
        }
        let count = frame_len.div_ceil(chunk_size);
        if count > Self::MAX_CHUNKS {
            return Err(ProtocolError::TooManyChunks {
                chunks: count,
                max: Self::MAX_CHUNKS,
            });
        }

        let chunks = (0..count)
            .map(|i| {
                let offset = i * chunk_size;
                let len = if i + 1 < count {
                    chunk_size
                } else {
                    frame_len - offset
                };
                let command = if count == 1 {
                    match config.single_chunk {
                        SingleChunkCommand::End => ChunkCommand::End,
                        SingleChunkCommand::Start => ChunkCommand::Start,
                    }
                } else if i == 0 {
                    ChunkCommand::Start
                } else if i + 1 == count {
                    ChunkCommand::End
                } else {
                    ChunkCommand::Continue
                };
                ChunkSpec {
                    offset,
                    len,
                    command,
                    sequence: (i + 1) as u8,
                }
            })
            .collect();

        Ok(Self { chunks, frame_len })
    }

    /// Number of packets in the plan.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// The frame length this plan covers.
    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    /// Iterate the planned chunks in send order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChunkSpec> {
        self.chunks.iter()
    }
}

impl<'a> IntoIterator for &'a TransferPlan {
    type Item = &'a ChunkSpec;
    type IntoIter = std::slice::Iter<'a, ChunkSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
