use std::io::Cursor;

use tokio_util::{
    bytes::{Buf, BufMut, BytesMut},
    codec::{Decoder, Encoder},
};
use tracing::{debug, trace, warn};
use utils::traits::{fixed_packet::FixedPacket, reader::TryReadFrom, writer::WriteTo};

use crate::{
    errors::{FLVError, FLVResult},
    header::{FLV_HEADER_SIZE, FLV_SIGNATURE, FLVHeader},
    tag::{FLVTag, flv_tag_header::FLVTagHeader},
};

const PREVIOUS_TAG_SIZE_BYTES: usize = 4;

/// A structural unit of the stream, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum FLVPacket {
    Header(FLVHeader),
    Tag(FLVTag),
}

/// What the decoder waits for next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramedState {
    Header,
    /// Bytes declared by `header_size` beyond the fixed 9, discarded as they arrive.
    HeaderExtension { remaining: usize },
    /// `expected` is what the trailer should hold: 0 after the header,
    /// `11 + data_size` after a tag.
    PreviousTagSize { expected: u32 },
    TagHeader,
    TagBody(FLVTagHeader),
    Closed,
}

impl FramedState {
    fn stage(&self) -> &'static str {
        match self {
            Self::Header => "file header",
            Self::HeaderExtension { .. } => "file header extension",
            Self::PreviousTagSize { .. } => "previous tag size",
            Self::TagHeader => "tag header",
            Self::TagBody(_) => "tag payload",
            Self::Closed => "closed stream",
        }
    }

    fn bytes_needed(&self) -> usize {
        match self {
            Self::Header => FLVHeader::bytes_count(),
            Self::HeaderExtension { remaining } => *remaining,
            Self::PreviousTagSize { .. } => PREVIOUS_TAG_SIZE_BYTES,
            Self::TagHeader => FLVTagHeader::bytes_count(),
            Self::TagBody(header) => header.data_size as usize,
            Self::Closed => 0,
        }
    }
}

/// Incremental FLV stream codec.
///
/// Decoding never assumes the buffer ends on a field boundary: each call takes
/// exactly what the current state needs and leaves the rest in `src`.
/// Encoding writes a header or tag together with its previous-tag-size field,
/// so decoded packets fed back through it rebuild the original stream.
#[derive(Debug)]
pub struct FLVStreamFramed {
    state: FramedState,
    bytes_consumed: u64,
}

impl Default for FLVStreamFramed {
    fn default() -> Self {
        Self::new()
    }
}

impl FLVStreamFramed {
    pub fn new() -> Self {
        Self {
            state: FramedState::Header,
            bytes_consumed: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> FramedState {
        self.state
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state == FramedState::Closed
    }

    /// Bytes taken out of the source buffer so far.
    #[inline]
    pub fn bytes_consumed(&self) -> u64 {
        self.bytes_consumed
    }

    fn transition(&mut self, next: FramedState) {
        trace!("flv stream state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn consume(&mut self, src: &mut BytesMut, count: usize) {
        src.advance(count);
        self.bytes_consumed += count as u64;
    }

    fn fail(&mut self, err: FLVError) -> FLVError {
        debug!("flv stream closed at {}: {}", self.state.stage(), err);
        self.transition(FramedState::Closed);
        err
    }

    fn decode_header(&mut self, src: &mut BytesMut) -> FLVResult<Option<FLVHeader>> {
        if src.len() >= FLV_SIGNATURE.len() && src[..FLV_SIGNATURE.len()] != FLV_SIGNATURE {
            let mut signature = [0; 3];
            signature.copy_from_slice(&src[..FLV_SIGNATURE.len()]);
            return Err(FLVError::UnknownSignature(signature));
        }
        let header = {
            let mut cursor = Cursor::new(&src[..]);
            FLVHeader::try_read_from(&mut cursor)?
        };
        let Some(header) = header else {
            return Ok(None);
        };
        self.consume(src, FLVHeader::bytes_count());

        debug!(
            "flv header, version: {}, has audio: {}, has video: {}, header size: {}",
            header.version,
            header.has_audio(),
            header.has_video(),
            header.header_size
        );
        if header.header_size < FLV_HEADER_SIZE {
            warn!(
                "flv header declares {} bytes, less than the fixed {}",
                header.header_size, FLV_HEADER_SIZE
            );
        }

        match header.extension_size() {
            0 => self.transition(FramedState::PreviousTagSize { expected: 0 }),
            remaining => self.transition(FramedState::HeaderExtension { remaining }),
        }
        Ok(Some(header))
    }

    fn decode_tag_header(&mut self, src: &mut BytesMut) -> FLVResult<Option<FLVTagHeader>> {
        let tag_header = {
            let mut cursor = Cursor::new(&src[..]);
            FLVTagHeader::try_read_from(&mut cursor)?
        };
        let Some(tag_header) = tag_header else {
            return Ok(None);
        };
        self.consume(src, FLVTagHeader::bytes_count());
        Ok(Some(tag_header))
    }

    fn decode_next(&mut self, src: &mut BytesMut) -> FLVResult<Option<FLVPacket>> {
        loop {
            match self.state {
                FramedState::Closed => return Ok(None),
                FramedState::Header => {
                    return Ok(self.decode_header(src)?.map(FLVPacket::Header));
                }
                FramedState::HeaderExtension { remaining } => {
                    if src.is_empty() {
                        return Ok(None);
                    }
                    let skipped = remaining.min(src.len());
                    self.consume(src, skipped);
                    if skipped == remaining {
                        self.transition(FramedState::PreviousTagSize { expected: 0 });
                    } else {
                        self.state = FramedState::HeaderExtension {
                            remaining: remaining - skipped,
                        };
                    }
                }
                FramedState::PreviousTagSize { expected } => {
                    if src.len() < PREVIOUS_TAG_SIZE_BYTES {
                        return Ok(None);
                    }
                    let previous_tag_size = src.get_u32();
                    self.bytes_consumed += PREVIOUS_TAG_SIZE_BYTES as u64;
                    if previous_tag_size != expected {
                        warn!(
                            "previous tag size mismatch, expect {}, got {}",
                            expected, previous_tag_size
                        );
                    }
                    self.transition(FramedState::TagHeader);
                }
                FramedState::TagHeader => {
                    let Some(tag_header) = self.decode_tag_header(src)? else {
                        return Ok(None);
                    };
                    src.reserve(tag_header.data_size as usize);
                    self.transition(FramedState::TagBody(tag_header));
                }
                FramedState::TagBody(tag_header) => {
                    let data_size = tag_header.data_size as usize;
                    if src.len() < data_size {
                        return Ok(None);
                    }
                    let payload = src.split_to(data_size).freeze();
                    self.bytes_consumed += data_size as u64;

                    let tag = FLVTag::new(tag_header, payload);
                    trace!(
                        "flv tag, type: {:?}, timestamp: {}, data size: {}",
                        tag.header.tag_type,
                        tag.timestamp(),
                        data_size
                    );
                    self.transition(FramedState::PreviousTagSize {
                        expected: tag.size() as u32,
                    });
                    return Ok(Some(FLVPacket::Tag(tag)));
                }
            }
        }
    }
}

impl Decoder for FLVStreamFramed {
    type Error = FLVError;
    type Item = FLVPacket;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        self.decode_next(src).map_err(|err| self.fail(err))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(packet) = self.decode(buf)? {
            return Ok(Some(packet));
        }
        match self.state {
            FramedState::Header | FramedState::TagHeader if buf.is_empty() => {
                debug!("flv stream ended after {} bytes", self.bytes_consumed);
                self.transition(FramedState::Closed);
                Ok(None)
            }
            FramedState::Closed => Ok(None),
            state => {
                let err = FLVError::TruncatedInput {
                    stage: state.stage(),
                    needed: state.bytes_needed(),
                    available: buf.len(),
                };
                Err(self.fail(err))
            }
        }
    }
}

impl Encoder<FLVPacket> for FLVStreamFramed {
    type Error = FLVError;

    fn encode(&mut self, item: FLVPacket, dst: &mut BytesMut) -> Result<(), Self::Error> {
        match item {
            FLVPacket::Header(header) => {
                dst.reserve(header.header_size.max(FLV_HEADER_SIZE) as usize + 4);
                header.write_to(&mut dst.writer())
            }
            FLVPacket::Tag(tag) => {
                dst.reserve(tag.size() + 4);
                tag.write_to(&mut dst.writer())
            }
        }
    }
}

impl From<FLVHeader> for FLVPacket {
    fn from(value: FLVHeader) -> Self {
        Self::Header(value)
    }
}

impl From<FLVTag> for FLVPacket {
    fn from(value: FLVTag) -> Self {
        Self::Tag(value)
    }
}
