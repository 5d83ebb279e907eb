use std::io;

use byteorder::{BigEndian, WriteBytesExt};
use utils::traits::writer::WriteTo;

use crate::errors::FLVError;

use super::FLVTag;

/// Writes the tag header, the payload, and the previous-tag-size field for this tag.
impl<W: io::Write> WriteTo<W> for FLVTag {
    type Error = FLVError;
    fn write_to(&self, writer: &mut W) -> Result<(), Self::Error> {
        if self.header.data_size as usize != self.payload.len() {
            return Err(FLVError::InconsistentHeader(format!(
                "tag data size is {} but payload holds {} bytes",
                self.header.data_size,
                self.payload.len()
            )));
        }
        self.header.write_to(writer)?;
        writer.write_all(&self.payload)?;
        writer.write_u32::<BigEndian>(self.size() as u32)?;
        Ok(())
    }
}
