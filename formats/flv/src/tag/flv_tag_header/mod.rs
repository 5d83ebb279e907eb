use utils::traits::fixed_packet::FixedPacket;

pub mod reader;
pub mod writer;

/// Tag type byte. Unrecognized values are carried through as `Unknown`
/// so that newer streams still decode and rebuild byte for byte.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FLVTagType {
    Audio,
    Video,
    Script,
    Unknown(u8),
}

impl From<FLVTagType> for u8 {
    fn from(value: FLVTagType) -> Self {
        match value {
            FLVTagType::Audio => 8,
            FLVTagType::Video => 9,
            FLVTagType::Script => 18,
            FLVTagType::Unknown(raw) => raw,
        }
    }
}

impl From<u8> for FLVTagType {
    fn from(value: u8) -> Self {
        match value {
            8 => FLVTagType::Audio,
            9 => FLVTagType::Video,
            18 => FLVTagType::Script,
            _ => FLVTagType::Unknown(value),
        }
    }
}

///
/// 0                   1                   2                   3
/// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   tag type    |                   data size                   |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                   timestamp                   | timestamp ext |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                   stream id                   |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FLVTagHeader {
    pub tag_type: FLVTagType,
    pub data_size: u32,       // 24 bits, payload length
    pub timestamp_lower: u32, // 24 bits
    pub timestamp_upper: u8,  // bits 24..32 of the timestamp
    pub stream_id: u32,       // 24 bits, always 0 in practice
}

impl FLVTagHeader {
    pub fn new(tag_type: FLVTagType, data_size: u32, timestamp: u32) -> Self {
        Self {
            tag_type,
            data_size,
            timestamp_lower: timestamp & 0x00FF_FFFF,
            timestamp_upper: (timestamp >> 24) as u8,
            stream_id: 0,
        }
    }

    #[inline]
    pub fn timestamp(&self) -> u32 {
        ((self.timestamp_upper as u32) << 24) | (self.timestamp_lower & 0x00FF_FFFF)
    }
}

impl FixedPacket for FLVTagHeader {
    fn bytes_count() -> usize {
        11
    }
}
