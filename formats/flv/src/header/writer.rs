use std::io;

use byteorder::{BigEndian, WriteBytesExt};
use utils::traits::writer::WriteTo;

use crate::errors::FLVError;

use super::FLVHeader;

/// Writes the header as it appears at the start of a file: the fixed fields,
/// zero padding up to `header_size`, then the zero previous-tag-size field.
impl<W: io::Write> WriteTo<W> for FLVHeader {
    type Error = FLVError;
    fn write_to(&self, writer: &mut W) -> Result<(), Self::Error> {
        writer.write_all(&self.signature)?;
        writer.write_u8(self.version)?;
        writer.write_u8(self.flags)?;
        writer.write_u32::<BigEndian>(self.header_size)?;
        writer.write_all(&vec![0_u8; self.extension_size()])?;
        writer.write_u32::<BigEndian>(0)?;
        Ok(())
    }
}
