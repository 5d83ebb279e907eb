use std::io;

use crate::errors::FLVError;
use byteorder::{BigEndian, ReadBytesExt};
use tokio_util::bytes::Buf;
use utils::traits::{
    fixed_packet::FixedPacket,
    reader::{ReadFrom, TryReadFrom},
};

use super::{FLVTagHeader, FLVTagType};

impl<R: io::Read> ReadFrom<R> for FLVTagHeader {
    type Error = FLVError;
    fn read_from(reader: &mut R) -> Result<Self, Self::Error> {
        let tag_type: FLVTagType = reader.read_u8()?.into();
        let data_size = reader.read_u24::<BigEndian>()?;
        let timestamp_lower = reader.read_u24::<BigEndian>()?;
        let timestamp_upper = reader.read_u8()?;
        let stream_id = reader.read_u24::<BigEndian>()?;

        Ok(FLVTagHeader {
            tag_type,
            data_size,
            timestamp_lower,
            timestamp_upper,
            stream_id,
        })
    }
}

impl<R: AsRef<[u8]>> TryReadFrom<R> for FLVTagHeader {
    type Error = FLVError;
    fn try_read_from(reader: &mut io::Cursor<R>) -> Result<Option<Self>, Self::Error> {
        if reader.remaining() < FLVTagHeader::bytes_count() {
            return Ok(None);
        }
        Ok(Some(Self::read_from(reader)?))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use utils::traits::reader::{ReadFrom, TryReadFrom};

    use crate::tag::flv_tag_header::{FLVTagHeader, FLVTagType};

    #[test]
    fn audio_tag_header() {
        let bytes = [0x08, 0x00, 0x00, 0x02, 0x00, 0x03, 0xE8, 0x01, 0x00, 0x00, 0x00];
        let header = FLVTagHeader::read_from(&mut &bytes[..]).unwrap();
        assert_eq!(header.tag_type, FLVTagType::Audio);
        assert_eq!(header.data_size, 2);
        assert_eq!(header.timestamp_lower, 1000);
        assert_eq!(header.timestamp_upper, 1);
        assert_eq!(header.timestamp(), 0x0100_03E8);
        assert_eq!(header.stream_id, 0);
    }

    #[test]
    fn unknown_type_is_not_an_error() {
        let bytes = [0x0F, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07];
        let header = FLVTagHeader::read_from(&mut &bytes[..]).unwrap();
        assert_eq!(header.tag_type, FLVTagType::Unknown(0x0F));
        assert_eq!(header.data_size, 16);
        assert_eq!(header.stream_id, 7);
    }

    #[test]
    fn short_buffer() {
        let bytes = [0x09, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let mut cursor = Cursor::new(&bytes[..]);
        assert!(FLVTagHeader::try_read_from(&mut cursor).unwrap().is_none());
    }
}
