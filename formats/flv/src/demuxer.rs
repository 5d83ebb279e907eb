use tokio_util::{bytes::BytesMut, codec::Decoder};
use tracing::debug;

use crate::{
    errors::FLVError,
    framed::{FLVPacket, FLVStreamFramed},
    header::FLVHeader,
    tag::FLVTag,
};

#[derive(Debug)]
pub enum FLVEvent {
    Header(FLVHeader),
    Tag(FLVTag),
    /// Input ended on a unit boundary.
    End,
    /// Decoding stopped, nothing else is emitted.
    Error(FLVError),
}

impl From<FLVPacket> for FLVEvent {
    fn from(value: FLVPacket) -> Self {
        match value {
            FLVPacket::Header(header) => Self::Header(header),
            FLVPacket::Tag(tag) => Self::Tag(tag),
        }
    }
}

/// Push side of [`FLVStreamFramed`]: callers hand over chunks of any size as
/// they arrive and get back every unit the chunk completes.
#[derive(Debug, Default)]
pub struct FLVDemuxer {
    framed: FLVStreamFramed,
    buffer: BytesMut,
    closed: bool,
    tags_emitted: u64,
}

impl FLVDemuxer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn bytes_consumed(&self) -> u64 {
        self.framed.bytes_consumed()
    }

    #[inline]
    pub fn tags_emitted(&self) -> u64 {
        self.tags_emitted
    }

    /// Bytes received but not yet part of an emitted unit.
    #[inline]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    fn emit(&mut self, packet: FLVPacket) -> FLVEvent {
        if let FLVPacket::Tag(_) = packet {
            self.tags_emitted += 1;
        }
        packet.into()
    }

    fn close(&mut self, event: FLVEvent) -> FLVEvent {
        self.closed = true;
        self.buffer.clear();
        debug!(
            "flv demuxer closed, {} bytes consumed, {} tags emitted",
            self.bytes_consumed(),
            self.tags_emitted
        );
        event
    }

    pub fn feed(&mut self, chunk: &[u8]) -> Vec<FLVEvent> {
        let mut events = Vec::new();
        if self.closed {
            return events;
        }
        self.buffer.extend_from_slice(chunk);
        loop {
            match self.framed.decode(&mut self.buffer) {
                Ok(Some(packet)) => {
                    let event = self.emit(packet);
                    events.push(event);
                }
                Ok(None) => break,
                Err(err) => {
                    events.push(self.close(FLVEvent::Error(err)));
                    break;
                }
            }
        }
        events
    }

    /// Signals that no more input will arrive.
    /// Ends with `End` when the input stopped between units, `Error` otherwise.
    pub fn finish(&mut self) -> Vec<FLVEvent> {
        let mut events = Vec::new();
        if self.closed {
            return events;
        }
        loop {
            match self.framed.decode_eof(&mut self.buffer) {
                Ok(Some(packet)) => {
                    let event = self.emit(packet);
                    events.push(event);
                }
                Ok(None) => {
                    events.push(self.close(FLVEvent::End));
                    break;
                }
                Err(err) => {
                    events.push(self.close(FLVEvent::Error(err)));
                    break;
                }
            }
        }
        events
    }
}
