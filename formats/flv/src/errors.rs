use std::{fmt, io};

use thiserror::Error;

/// Errors that end the stream: once one is returned no further units are decoded.
#[derive(Debug, Error)]
pub enum FLVError {
    #[error("Io error: {0}")]
    Io(#[from] io::Error),
    #[error("unknown signature: {0:?}")]
    UnknownSignature([u8; 3]),
    #[error("input truncated while reading {stage}: need {needed} bytes, {available} available")]
    TruncatedInput {
        stage: &'static str,
        needed: usize,
        available: usize,
    },
    #[error("inconsistent header: {0}")]
    InconsistentHeader(String),
}

pub type FLVResult<T> = Result<T, FLVError>;

/// The bit field or byte of a typed tag payload an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadField {
    SoundFormat,
    SoundRate,
    SoundSize,
    SoundType,
    AACPacketType,
    FrameType,
    CodecID,
    AVCPacketType,
    CompositionTime,
    ScriptName,
    ScriptContainer,
    ScriptKey,
    ScriptValue,
}

impl fmt::Display for PayloadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SoundFormat => "sound format",
            Self::SoundRate => "sound rate",
            Self::SoundSize => "sound size",
            Self::SoundType => "sound type",
            Self::AACPacketType => "aac packet type",
            Self::FrameType => "video frame type",
            Self::CodecID => "video codec id",
            Self::AVCPacketType => "avc packet type",
            Self::CompositionTime => "composition time",
            Self::ScriptName => "script data name",
            Self::ScriptContainer => "script data container",
            Self::ScriptKey => "script data key",
            Self::ScriptValue => "script data value",
        };
        f.write_str(name)
    }
}

/// Errors scoped to the typed payload of a single tag.
/// The tag itself is still emitted and the stream keeps going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagBodyError {
    #[error("unknown {field}: {value}")]
    UnknownEncoding { field: PayloadField, value: u8 },
    #[error("unknown metadata format marker: {0}")]
    UnknownMetadataFormat(u8),
    #[error("unknown metadata type: {0}")]
    UnknownMetadataType(u8),
    #[error("unknown metadata value type: {0}")]
    UnknownValueType(u8),
    #[error("payload truncated while reading {field}: need {needed} bytes, {available} available")]
    Truncated {
        field: PayloadField,
        needed: usize,
        available: usize,
    },
}

pub type TagBodyResult<T> = Result<T, TagBodyError>;
