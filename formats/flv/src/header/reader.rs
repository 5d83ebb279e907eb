use std::io::{self, Cursor};

use byteorder::{BigEndian, ReadBytesExt};
use tokio_util::bytes::Buf;
use utils::traits::{
    fixed_packet::FixedPacket,
    reader::{ReadFrom, TryReadFrom},
};

use crate::errors::FLVError;

use super::{FLV_SIGNATURE, FLVHeader};

impl<R: io::Read> ReadFrom<R> for FLVHeader {
    type Error = FLVError;
    fn read_from(reader: &mut R) -> Result<Self, Self::Error> {
        let mut signature = [0; 3];
        reader.read_exact(&mut signature)?;
        if signature != FLV_SIGNATURE {
            return Err(FLVError::UnknownSignature(signature));
        }

        let version = reader.read_u8()?;
        let flags = reader.read_u8()?;
        let header_size = reader.read_u32::<BigEndian>()?;

        Ok(FLVHeader {
            signature,
            version,
            flags,
            header_size,
        })
    }
}

impl<R: AsRef<[u8]>> TryReadFrom<R> for FLVHeader {
    type Error = FLVError;
    fn try_read_from(reader: &mut Cursor<R>) -> Result<Option<Self>, Self::Error> {
        if reader.remaining() < FLVHeader::bytes_count() {
            return Ok(None);
        }
        Ok(Some(Self::read_from(reader)?))
    }
}
