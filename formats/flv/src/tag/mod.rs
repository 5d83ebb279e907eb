use flv_tag_body::FLVTagBody;
use flv_tag_header::{FLVTagHeader, FLVTagType};
use tokio_util::bytes::Bytes;
use utils::traits::{dynamic_sized_packet::DynamicSizedPacket, fixed_packet::FixedPacket};

use crate::errors::{PayloadField, TagBodyError, TagBodyResult};

pub mod audio_tag_header;
pub mod flv_tag_body;
pub mod flv_tag_header;
pub mod reader;
pub mod script_data;
pub mod video_tag_header;
pub mod writer;

pub(crate) fn ensure_remaining(
    payload: &[u8],
    needed: usize,
    field: PayloadField,
) -> TagBodyResult<()> {
    if payload.len() < needed {
        return Err(TagBodyError::Truncated {
            field,
            needed,
            available: payload.len(),
        });
    }
    Ok(())
}

/// One tag as it appeared on the wire.
///
/// `payload` holds every byte after the tag header so the tag can be written
/// back unchanged. `body` is the typed decode of that payload; when the payload
/// does not decode the error is kept here and the tag is still usable.
#[derive(Debug, Clone, PartialEq)]
pub struct FLVTag {
    pub header: FLVTagHeader,
    pub payload: Bytes,
    pub body: Result<FLVTagBody, TagBodyError>,
}

impl FLVTag {
    pub fn new(header: FLVTagHeader, payload: Bytes) -> Self {
        let body = FLVTagBody::read_from(header.tag_type, &payload);
        Self {
            header,
            payload,
            body,
        }
    }

    /// Builds a tag whose header declares exactly the payload length.
    pub fn with_payload(tag_type: FLVTagType, timestamp: u32, payload: Bytes) -> Self {
        let header = FLVTagHeader::new(tag_type, payload.len() as u32, timestamp);
        Self::new(header, payload)
    }

    #[inline]
    pub fn is_audio(&self) -> bool {
        self.header.tag_type == FLVTagType::Audio
    }

    #[inline]
    pub fn is_video(&self) -> bool {
        self.header.tag_type == FLVTagType::Video
    }

    #[inline]
    pub fn is_script(&self) -> bool {
        self.header.tag_type == FLVTagType::Script
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self.header.tag_type, FLVTagType::Unknown(_))
    }

    #[inline]
    pub fn timestamp(&self) -> u32 {
        self.header.timestamp()
    }

    /// Tag header plus payload, the value of the previous-tag-size field that follows the tag.
    #[inline]
    pub fn size(&self) -> usize {
        FLVTagHeader::bytes_count() + self.payload.len()
    }
}

impl DynamicSizedPacket for FLVTag {
    fn get_packet_bytes_count(&self) -> usize {
        // trailing previous tag size
        self.size() + 4
    }
}

#[cfg(test)]
mod tests {
    use tokio_util::bytes::Bytes;
    use utils::traits::dynamic_sized_packet::DynamicSizedPacket;

    use super::{FLVTag, flv_tag_body::FLVTagBody, flv_tag_header::FLVTagType};

    #[test]
    fn accessors() {
        let tag = FLVTag::with_payload(
            FLVTagType::Audio,
            0x0100_0010,
            Bytes::from_static(&[0xAF, 0x01, 0x21]),
        );
        assert!(tag.is_audio());
        assert!(!tag.is_video() && !tag.is_script() && !tag.is_unknown());
        assert_eq!(tag.header.data_size, 3);
        assert_eq!(tag.header.timestamp_lower, 0x10);
        assert_eq!(tag.header.timestamp_upper, 0x01);
        assert_eq!(tag.timestamp(), 0x0100_0010);
        assert_eq!(tag.size(), 14);
        assert_eq!(tag.get_packet_bytes_count(), 18);
        assert!(matches!(tag.body, Ok(FLVTagBody::Audio(_))));
    }

    #[test]
    fn payload_error_stays_on_tag() {
        let tag = FLVTag::with_payload(FLVTagType::Video, 0, Bytes::from_static(&[0x08]));
        assert!(tag.is_video());
        assert!(tag.body.is_err());
        assert_eq!(tag.payload.as_ref(), &[0x08]);
    }

    #[test]
    fn unknown_tag_type() {
        let tag = FLVTag::with_payload(FLVTagType::Unknown(7), 40, Bytes::from_static(b"abc"));
        assert!(tag.is_unknown());
        assert_eq!(tag.body, Ok(FLVTagBody::Unknown(7)));
    }
}
