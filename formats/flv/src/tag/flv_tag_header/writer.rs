use std::io;

use byteorder::{BigEndian, WriteBytesExt};
use utils::traits::writer::WriteTo;

use crate::errors::FLVError;

use super::FLVTagHeader;

impl<W: io::Write> WriteTo<W> for FLVTagHeader {
    type Error = FLVError;
    fn write_to(&self, writer: &mut W) -> Result<(), Self::Error> {
        if self.data_size > 0x00FF_FFFF {
            return Err(FLVError::InconsistentHeader(format!(
                "tag data size {} does not fit in 24 bits",
                self.data_size
            )));
        }
        writer.write_u8(self.tag_type.into())?;
        writer.write_u24::<BigEndian>(self.data_size)?;
        writer.write_u24::<BigEndian>(self.timestamp_lower & 0x00FF_FFFF)?;
        writer.write_u8(self.timestamp_upper)?;
        writer.write_u24::<BigEndian>(self.stream_id & 0x00FF_FFFF)?;
        Ok(())
    }
}
