pub mod reader;

use crate::errors::{PayloadField, TagBodyError};

///
/// Type of video frame.
/// The following values are defined:
/// 1 = key frame (for AVC, a seekable frame)
/// 2 = inter frame (for AVC, a non-seekable frame)
/// 3 = disposable inter frame (H.263 only)
/// 4 = generated key frame (reserved for server use only)
/// 5 = video info/command frame
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FrameType {
    KeyFrame = 1,
    InterFrame = 2,
    DisposableInterFrame = 3,
    GeneratedKeyFrame = 4,
    CommandFrame = 5,
}

impl From<FrameType> for u8 {
    fn from(value: FrameType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for FrameType {
    type Error = TagBodyError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::KeyFrame),
            2 => Ok(Self::InterFrame),
            3 => Ok(Self::DisposableInterFrame),
            4 => Ok(Self::GeneratedKeyFrame),
            5 => Ok(Self::CommandFrame),
            _ => Err(TagBodyError::UnknownEncoding {
                field: PayloadField::FrameType,
                value,
            }),
        }
    }
}

///
/// Codec Identifier.
/// The following values are defined:
/// 1 = JPEG (currently unused)
/// 2 = Sorenson H.263
/// 3 = Screen video
/// 4 = On2 VP6
/// 5 = On2 VP6 with alpha channel
/// 6 = Screen video version 2
/// 7 = AVC
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CodecID {
    JPEG = 1,
    SorensonH263 = 2,
    ScreenVideo = 3,
    On2VP6 = 4,
    On2VP6WithAlpha = 5,
    ScreenVideoV2 = 6,
    AVC = 7,
    // not standard, but used a lot in china, @see: https://github.com/CDN-Union/H265
    HEVC = 12,
    // not standard, but used a lot in china, @see: https://mp.weixin.qq.com/s/H3qI7zsON5sdf4oDJ9qlkg
    AV1 = 13,
}

impl CodecID {
    /// Codecs whose payload carries a packet type and a composition time after byte 0.
    #[inline]
    pub fn has_packet_type(&self) -> bool {
        matches!(self, Self::AVC | Self::HEVC | Self::AV1)
    }
}

impl From<CodecID> for u8 {
    fn from(value: CodecID) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for CodecID {
    type Error = TagBodyError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::JPEG),
            2 => Ok(Self::SorensonH263),
            3 => Ok(Self::ScreenVideo),
            4 => Ok(Self::On2VP6),
            5 => Ok(Self::On2VP6WithAlpha),
            6 => Ok(Self::ScreenVideoV2),
            7 => Ok(Self::AVC),
            12 => Ok(Self::HEVC),
            13 => Ok(Self::AV1),
            _ => Err(TagBodyError::UnknownEncoding {
                field: PayloadField::CodecID,
                value,
            }),
        }
    }
}

///
/// IF CodecID == 7
/// The following values are defined:
/// 0 = AVC sequence header
/// 1 = AVC NALU
/// 2 = AVC end of sequence (lower level NALU sequence ender is not required or supported)
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AVCPacketType {
    SequenceHeader = 0,
    NALU = 1,
    SequenceEnd = 2,
}

impl From<AVCPacketType> for u8 {
    fn from(value: AVCPacketType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for AVCPacketType {
    type Error = TagBodyError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::SequenceHeader),
            1 => Ok(Self::NALU),
            2 => Ok(Self::SequenceEnd),
            _ => Err(TagBodyError::UnknownEncoding {
                field: PayloadField::AVCPacketType,
                value,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoTagHeader {
    pub frame_type: FrameType,
    pub codec_id: CodecID,
    pub avc_packet_type: Option<AVCPacketType>,
    /// Composition time offset in milliseconds.
    pub composition_time: Option<i32>,
}

impl VideoTagHeader {
    #[inline]
    pub fn is_key_frame(&self) -> bool {
        self.frame_type == FrameType::KeyFrame
    }

    #[inline]
    pub fn is_sequence_header(&self) -> bool {
        self.avc_packet_type == Some(AVCPacketType::SequenceHeader)
    }
}
