use std::io::{ErrorKind, Write};

use bytes::BytesMut;
use tracing::{debug, trace};

use crate::config::ProtocolConfig;
use crate::error::{ProtocolError, Result};
use crate::packet::{
    encode_chunk, encode_clock, encode_heartbeat, encode_orientation, PACKET_SIZE,
};
use crate::plan::TransferPlan;

/// Sends packets to any `Write` sink.
///
/// Each packet goes out whole: short writes are continued, `Interrupted`
/// and `WouldBlock` are retried, and a sink that stops accepting bytes
/// surfaces as [`ProtocolError::DeviceClosed`]. There are no frame-level
/// retries — a failed frame send reports which packet it died on and the
/// caller's next cycle supersedes it.
pub struct PacketWriter<T> {
    inner: T,
    buf: BytesMut,
    config: ProtocolConfig,
}

impl<T: Write> PacketWriter<T> {
    /// Create a packet writer with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, ProtocolConfig::default())
    }

    /// Create a packet writer with explicit configuration.
    pub fn with_config(inner: T, config: ProtocolConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(PACKET_SIZE),
            config,
        }
    }

    /// Send a set-orientation packet. `mode` is the device's opaque
    /// orientation code.
    pub fn set_orientation(&mut self, mode: u8) -> Result<()> {
        self.buf.clear();
        encode_orientation(mode, &mut self.buf);
        debug!(mode, "setting orientation");
        self.write_packet(0)
    }

    /// Send a set-clock packet with the given time of day.
    pub fn set_clock(&mut self, hour: u8, minute: u8, second: u8) -> Result<()> {
        self.buf.clear();
        encode_clock(hour, minute, second, &mut self.buf);
        debug!(hour, minute, second, "setting device clock");
        self.write_packet(0)
    }

    /// Send a liveness heartbeat with the given time of day.
    pub fn heartbeat(&mut self, hour: u8, minute: u8, second: u8) -> Result<()> {
        self.buf.clear();
        encode_heartbeat(hour, minute, second, &mut self.buf);
        trace!("heartbeat");
        self.write_packet(0)
    }

    /// Send a complete frame as a planned packet sequence.
    ///
    /// `frame` is the raw wire-format pixel data. The frame geometry is
    /// validated before the first packet is built; on sink failure the
    /// error names the packet index the send died on.
    pub fn send_frame(&mut self, frame: &[u8]) -> Result<()> {
        let plan = TransferPlan::new(frame.len(), &self.config)?;
        debug!(
            frame_len = frame.len(),
            packets = plan.chunk_count(),
            "sending frame"
        );
        for (index, chunk) in plan.iter().enumerate() {
            self.buf.clear();
            encode_chunk(
                chunk.sequence,
                chunk.command,
                chunk.offset,
                &frame[chunk.offset..chunk.offset + chunk.len],
                &mut self.buf,
            );
            trace!(
                sequence = chunk.sequence,
                command = ?chunk.command,
                len = chunk.len,
                "sending chunk"
            );
            self.write_packet(index)?;
        }
        Ok(())
    }

    /// Protocol configuration in effect.
    pub fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying sink.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the writer and return the inner sink.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Write the staged packet fully, then flush.
    fn write_packet(&mut self, packet: usize) -> Result<()> {
        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(ProtocolError::DeviceClosed { packet }),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(source) => return Err(ProtocolError::Io { packet, source }),
            }
        }
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(source) => return Err(ProtocolError::Io { packet, source }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::config::SingleChunkCommand;
    use crate::packet::PACKET_DATA_SIZE;

    fn small_chunks() -> ProtocolConfig {
        ProtocolConfig {
            chunk_size: 16,
            ..ProtocolConfig::default()
        }
    }

    #[test]
    fn orientation_bytes_on_the_wire() {
        let mut writer = PacketWriter::new(Cursor::new(Vec::new()));
        writer.set_orientation(0x01).unwrap();

        let wire = writer.into_inner().into_inner();
        assert_eq!(wire.len(), PACKET_SIZE);
        assert_eq!(&wire[..8], &[0x55, 0xA1, 0xF1, 0x01, 0, 0, 0, 0]);
        assert!(wire[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn clock_and_heartbeat_headers() {
        let mut writer = PacketWriter::new(Cursor::new(Vec::new()));
        writer.set_clock(23, 59, 1).unwrap();
        writer.heartbeat(0, 0, 30).unwrap();

        let wire = writer.into_inner().into_inner();
        assert_eq!(wire.len(), 2 * PACKET_SIZE);
        assert_eq!(&wire[..8], &[0x55, 0xA1, 0xF3, 23, 59, 1, 0, 0]);
        assert_eq!(
            &wire[PACKET_SIZE..PACKET_SIZE + 8],
            &[0x55, 0xA1, 0xF2, 0, 0, 30, 0, 0]
        );
    }

    #[test]
    fn frame_send_emits_every_packet_in_order() {
        let frame: Vec<u8> = (0..40u8).collect();
        let mut writer = PacketWriter::with_config(Cursor::new(Vec::new()), small_chunks());
        writer.send_frame(&frame).unwrap();

        let wire = writer.into_inner().into_inner();
        assert_eq!(wire.len(), 3 * PACKET_SIZE);

        let packets: Vec<&[u8]> = wire.chunks(PACKET_SIZE).collect();
        assert_eq!(&packets[0][..4], &[0x55, 0xA3, 0xF0, 1]);
        assert_eq!(&packets[1][..4], &[0x55, 0xA3, 0xF1, 2]);
        assert_eq!(&packets[2][..4], &[0x55, 0xA3, 0xF2, 3]);

        // Concatenated payloads reproduce the frame; the tail is padded.
        assert_eq!(&packets[0][8..8 + 16], &frame[0..16]);
        assert_eq!(&packets[1][8..8 + 16], &frame[16..32]);
        assert_eq!(&packets[2][8..8 + 8], &frame[32..40]);
        assert!(packets[2][8 + 8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn full_panel_frame_takes_27_packets() {
        let frame = vec![0x5A; 108_800];
        let mut writer = PacketWriter::new(Cursor::new(Vec::new()));
        writer.send_frame(&frame).unwrap();

        let wire = writer.into_inner().into_inner();
        assert_eq!(wire.len(), 27 * PACKET_SIZE);
        let last = &wire[26 * PACKET_SIZE..];
        assert_eq!(&last[..8], &[0x55, 0xA3, 0xF2, 27, 0xA0, 0x01, 0x09, 0x00]);
        assert!(last[8..8 + 2304].iter().all(|&b| b == 0x5A));
        assert!(last[8 + 2304..].iter().all(|&b| b == 0));
    }

    #[test]
    fn single_chunk_frame_is_marked_end() {
        let mut writer = PacketWriter::new(Cursor::new(Vec::new()));
        writer.send_frame(&[1u8; 64]).unwrap();
        let wire = writer.into_inner().into_inner();
        assert_eq!(wire[2], 0xF2);

        let config = ProtocolConfig {
            single_chunk: SingleChunkCommand::Start,
            ..ProtocolConfig::default()
        };
        let mut writer = PacketWriter::with_config(Cursor::new(Vec::new()), config);
        writer.send_frame(&[1u8; 64]).unwrap();
        let wire = writer.into_inner().into_inner();
        assert_eq!(wire[2], 0xF0);
    }

    #[test]
    fn empty_frame_rejected_before_any_write() {
        let mut writer = PacketWriter::new(Cursor::new(Vec::new()));
        let err = writer.send_frame(&[]).unwrap_err();
        assert!(matches!(err, ProtocolError::EmptyFrame));
        assert!(writer.into_inner().into_inner().is_empty());
    }

    #[test]
    fn failure_reports_the_failing_packet_index() {
        // Accepts two whole packets, then fails.
        let sink = FailAfter {
            limit: 2 * PACKET_SIZE,
            written: 0,
        };
        let frame = vec![0u8; 64]; // 4 chunks of 16
        let mut writer = PacketWriter::with_config(sink, small_chunks());

        let err = writer.send_frame(&frame).unwrap_err();
        assert_eq!(err.failed_packet(), Some(2));
        assert!(matches!(err, ProtocolError::Io { packet: 2, .. }));
    }

    #[test]
    fn zero_write_maps_to_device_closed() {
        let mut writer = PacketWriter::new(ZeroWriter);
        let err = writer.set_orientation(0x01).unwrap_err();
        assert!(matches!(err, ProtocolError::DeviceClosed { packet: 0 }));
    }

    #[test]
    fn interrupted_and_would_block_are_retried() {
        let sink = FlakyWriter {
            hiccups: vec![ErrorKind::Interrupted, ErrorKind::WouldBlock],
            data: Vec::new(),
        };
        let mut writer = PacketWriter::new(sink);
        writer.set_orientation(0x02).unwrap();

        let sink = writer.into_inner();
        assert_eq!(sink.data.len(), PACKET_SIZE);
        assert_eq!(sink.data[3], 0x02);
    }

    #[test]
    fn short_writes_are_continued() {
        let sink = TrickleWriter { data: Vec::new() };
        let frame = vec![0x77; PACKET_DATA_SIZE];
        let mut writer = PacketWriter::new(sink);
        writer.send_frame(&frame).unwrap();

        let sink = writer.into_inner();
        assert_eq!(sink.data.len(), PACKET_SIZE);
        assert_eq!(&sink.data[8..], &frame[..]);
    }

    struct FailAfter {
        limit: usize,
        written: usize,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.written >= self.limit {
                return Err(std::io::Error::from(ErrorKind::BrokenPipe));
            }
            let n = buf.len().min(self.limit - self.written);
            self.written += n;
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct ZeroWriter;

    impl Write for ZeroWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct FlakyWriter {
        hiccups: Vec<ErrorKind>,
        data: Vec<u8>,
    }

    impl Write for FlakyWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if let Some(kind) = self.hiccups.pop() {
                return Err(std::io::Error::from(kind));
            }
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Accepts at most 100 bytes per call.
    struct TrickleWriter {
        data: Vec<u8>,
    }

    impl Write for TrickleWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let n = buf.len().min(100);
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
