pub mod reader;

use crate::errors::{PayloadField, TagBodyError};

///
/// Format of SoundData, the following values are defined
/// 0 = Linear PCM, platform endian
/// 1 = ADPCM
/// 2 = MP3
/// 3 = Linear PCM, little endian
/// 4 = Nellymoser 16 kHz mono
/// 5 = Nellymoser 8 kHz mono
/// 6 = Nellymoser
/// 7 = G.711 A-Law logarithmic PCM
/// 8 = G.711 mu-Law logarithmic PCM
/// 9 = reserved
/// 10 = AAC
/// 11 = Speex
/// 14 = MP3 8 kHz
/// 15 = Device-specific sound
/// Codes 7, 8, 14 and 15 decode to their own variants like any other defined code.
/// Only 9, 12 and 13 are rejected.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SoundFormat {
    LinearPCM = 0,
    ADPCM = 1,
    MP3 = 2,
    LinearPCMLittleEndian = 3,
    NellyMoser16KHZ = 4,
    NellyMoser8KHZ = 5,
    NellyMoser = 6,
    G711ALawLogarithmicPCM = 7,
    G711MULawLogarithmicPCM = 8,
    AAC = 10,
    Speex = 11,
    MP38KHZ = 14,
    DeviceSpecific = 15,
}

impl From<SoundFormat> for u8 {
    fn from(value: SoundFormat) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for SoundFormat {
    type Error = TagBodyError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::LinearPCM),
            1 => Ok(Self::ADPCM),
            2 => Ok(Self::MP3),
            3 => Ok(Self::LinearPCMLittleEndian),
            4 => Ok(Self::NellyMoser16KHZ),
            5 => Ok(Self::NellyMoser8KHZ),
            6 => Ok(Self::NellyMoser),
            7 => Ok(Self::G711ALawLogarithmicPCM),
            8 => Ok(Self::G711MULawLogarithmicPCM),
            10 => Ok(Self::AAC),
            11 => Ok(Self::Speex),
            14 => Ok(Self::MP38KHZ),
            15 => Ok(Self::DeviceSpecific),
            _ => Err(TagBodyError::UnknownEncoding {
                field: PayloadField::SoundFormat,
                value,
            }),
        }
    }
}

///
/// Sampling rate. The following values are defined:
/// 0 = 5.5 kHz
/// 1 = 11 kHz
/// 2 = 22 kHz
/// 3 = 44 kHz
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SoundRate {
    KHZ5D5 = 0,
    KHZ11 = 1,
    KHZ22 = 2,
    KHZ44 = 3,
}

impl SoundRate {
    pub fn hz(&self) -> u32 {
        match self {
            Self::KHZ5D5 => 5512,
            Self::KHZ11 => 11025,
            Self::KHZ22 => 22050,
            Self::KHZ44 => 44100,
        }
    }
}

impl From<SoundRate> for u8 {
    fn from(value: SoundRate) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for SoundRate {
    type Error = TagBodyError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::KHZ5D5),
            1 => Ok(Self::KHZ11),
            2 => Ok(Self::KHZ22),
            3 => Ok(Self::KHZ44),
            _ => Err(TagBodyError::UnknownEncoding {
                field: PayloadField::SoundRate,
                value,
            }),
        }
    }
}

///
/// Size of each audio sample.
/// This parameter only pertains to uncompressed formats.
/// Compressed formats always decode to 16 bits internally.
/// 0 = 8-bit samples
/// 1 = 16-bit samples
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SoundSize {
    Bit8 = 0,
    Bit16 = 1,
}

impl SoundSize {
    pub fn bits(&self) -> u8 {
        match self {
            Self::Bit8 => 8,
            Self::Bit16 => 16,
        }
    }
}

impl From<SoundSize> for u8 {
    fn from(value: SoundSize) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for SoundSize {
    type Error = TagBodyError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Bit8),
            1 => Ok(Self::Bit16),
            _ => Err(TagBodyError::UnknownEncoding {
                field: PayloadField::SoundSize,
                value,
            }),
        }
    }
}

///
/// Mono or stereo sound
/// 0 = Mono sound
/// 1 = Stereo sound
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SoundType {
    Mono = 0,
    Stereo = 1,
}

impl SoundType {
    pub fn channels(&self) -> u8 {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
        }
    }
}

impl From<SoundType> for u8 {
    fn from(value: SoundType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for SoundType {
    type Error = TagBodyError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Mono),
            1 => Ok(Self::Stereo),
            _ => Err(TagBodyError::UnknownEncoding {
                field: PayloadField::SoundType,
                value,
            }),
        }
    }
}

///
/// IF SoundFormat == 10
/// The following values are defined:
/// 0 = AAC sequence header
/// 1 = AAC raw
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AACPacketType {
    AACSequenceHeader = 0,
    AACRaw = 1,
}

impl From<AACPacketType> for u8 {
    fn from(value: AACPacketType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for AACPacketType {
    type Error = TagBodyError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::AACSequenceHeader),
            1 => Ok(Self::AACRaw),
            _ => Err(TagBodyError::UnknownEncoding {
                field: PayloadField::AACPacketType,
                value,
            }),
        }
    }
}

/// First byte of an audio tag payload, plus the AAC packet type byte when there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioTagHeader {
    pub sound_format: SoundFormat,
    pub sound_rate: SoundRate,
    pub sound_size: SoundSize,
    pub sound_type: SoundType,
    pub aac_packet_type: Option<AACPacketType>,
}

impl AudioTagHeader {
    #[inline]
    pub fn is_aac(&self) -> bool {
        self.sound_format == SoundFormat::AAC
    }

    #[inline]
    pub fn is_sequence_header(&self) -> bool {
        self.aac_packet_type == Some(AACPacketType::AACSequenceHeader)
    }
}
