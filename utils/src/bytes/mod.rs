use crate::traits::writer::WriteTo;
use std::fmt::Write;

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // writing into a String never fails
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

pub fn writable_to_bytes<E, T: WriteTo<Vec<u8>, Error = E>>(writable: &T) -> Result<Vec<u8>, E> {
    let mut bytes = vec![];
    writable.write_to(&mut bytes)?;
    Ok(bytes)
}
