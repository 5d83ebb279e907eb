use std::io::{self, Cursor};

pub trait ReadFrom<R: io::Read>: Sized {
    type Error;
    fn read_from(reader: &mut R) -> Result<Self, Self::Error>;
}

/// Reads a packet from a cursor over buffered bytes that may not hold the whole packet yet.
/// `Ok(None)` means more bytes are needed, and the cursor position must then be ignored.
pub trait TryReadFrom<R: AsRef<[u8]>>: Sized {
    type Error;
    fn try_read_from(reader: &mut Cursor<R>) -> Result<Option<Self>, Self::Error>;
}

/// Reads the part of a packet that follows an already decoded header.
pub trait ReadRemainingFrom<Header, R: io::Read>: Sized {
    type Error;
    fn read_remaining_from(header: Header, reader: &mut R) -> Result<Self, Self::Error>;
}
