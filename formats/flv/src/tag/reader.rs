use std::io::{self, Cursor};

use tokio_util::bytes::{Buf, Bytes};
use utils::traits::{
    fixed_packet::FixedPacket,
    reader::{ReadFrom, ReadRemainingFrom, TryReadFrom},
};

use crate::errors::FLVError;

use super::{FLVTag, flv_tag_header::FLVTagHeader};

impl<R: io::Read> ReadRemainingFrom<FLVTagHeader, R> for FLVTag {
    type Error = FLVError;
    fn read_remaining_from(header: FLVTagHeader, reader: &mut R) -> Result<Self, Self::Error> {
        let mut payload = vec![0_u8; header.data_size as usize];
        reader.read_exact(&mut payload)?;
        Ok(FLVTag::new(header, Bytes::from(payload)))
    }
}

/// Reads the tag header and payload. The previous-tag-size field after the tag is not consumed.
impl<R: io::Read> ReadFrom<R> for FLVTag {
    type Error = FLVError;
    fn read_from(reader: &mut R) -> Result<Self, Self::Error> {
        let header = FLVTagHeader::read_from(reader)?;
        Self::read_remaining_from(header, reader)
    }
}

impl<R: AsRef<[u8]>> TryReadFrom<R> for FLVTag {
    type Error = FLVError;
    fn try_read_from(reader: &mut Cursor<R>) -> Result<Option<Self>, Self::Error> {
        if reader.remaining() < FLVTagHeader::bytes_count() {
            return Ok(None);
        }
        let header = FLVTagHeader::read_from(reader)?;
        if reader.remaining() < header.data_size as usize {
            return Ok(None);
        }
        Ok(Some(Self::read_remaining_from(header, reader)?))
    }
}
