use std::io;

use utils::{bytes::writable_to_bytes, traits::writer::WriteTo};

use crate::{
    errors::{FLVError, FLVResult},
    header::FLVHeader,
    tag::FLVTag,
};

/// Serializes a header and a tag sequence back into a complete stream.
///
/// Each tag is followed by a previous-tag-size field computed from its own
/// payload. Payload content is written as is.
#[derive(Debug, Clone)]
pub struct FLVBuilder {
    header: FLVHeader,
    tags: Vec<FLVTag>,
}

impl FLVBuilder {
    pub fn new(header: FLVHeader) -> Self {
        Self {
            header,
            tags: Vec::new(),
        }
    }

    pub fn tag(mut self, tag: FLVTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn tags<I: IntoIterator<Item = FLVTag>>(mut self, tags: I) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn build(&self) -> FLVResult<Vec<u8>> {
        writable_to_bytes(self)
    }
}

impl<W: io::Write> WriteTo<W> for FLVBuilder {
    type Error = FLVError;
    fn write_to(&self, writer: &mut W) -> Result<(), Self::Error> {
        self.header.write_to(writer)?;
        for tag in &self.tags {
            tag.write_to(writer)?;
        }
        Ok(())
    }
}

/// Header bytes including the zero previous-tag-size field.
pub fn encode_header(header: &FLVHeader) -> FLVResult<Vec<u8>> {
    writable_to_bytes(header)
}

/// Tag header, payload and the previous-tag-size field of this tag.
pub fn encode_tag(tag: &FLVTag) -> FLVResult<Vec<u8>> {
    writable_to_bytes(tag)
}
