use utils::{
    bits::{bool_from_bit, bool_to_bit},
    traits::fixed_packet::FixedPacket,
};

pub mod reader;
pub mod writer;

pub const FLV_SIGNATURE: [u8; 3] = [b'F', b'L', b'V'];

/// Bytes a header normally declares through `data_offset`.
pub const FLV_HEADER_SIZE: u32 = 9;

///
/// 0                   1                   2                   3
/// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |       F       |       L       |       V       |    Version    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// | Reserved|a|r|v|                  data_offset                  |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |               |
/// +-+-+-+-+-+-+-+-+
///
/// The flags byte is kept as read so that reserved bits survive a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FLVHeader {
    pub signature: [u8; 3], // always FLV once decoded
    pub version: u8,
    pub flags: u8,
    pub header_size: u32, // the data_offset field
}

impl FLVHeader {
    pub fn new(version: u8, has_audio: bool, has_video: bool) -> Self {
        Self {
            signature: FLV_SIGNATURE,
            version,
            flags: (bool_to_bit(has_audio) << 2) | bool_to_bit(has_video),
            header_size: FLV_HEADER_SIZE,
        }
    }

    #[inline]
    pub fn has_audio(&self) -> bool {
        bool_from_bit(self.flags >> 2)
    }

    #[inline]
    pub fn has_video(&self) -> bool {
        bool_from_bit(self.flags)
    }

    /// Bytes between the end of the fixed header and the first previous-tag-size field.
    #[inline]
    pub fn extension_size(&self) -> usize {
        self.header_size.saturating_sub(FLV_HEADER_SIZE) as usize
    }
}

impl FixedPacket for FLVHeader {
    fn bytes_count() -> usize {
        FLV_HEADER_SIZE as usize
    }
}
