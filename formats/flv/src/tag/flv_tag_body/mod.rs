use super::{
    audio_tag_header::AudioTagHeader, script_data::ScriptData, video_tag_header::VideoTagHeader,
};

pub mod reader;

/// Typed view of a tag payload. The media bytes after the decoded
/// fields are not interpreted; they stay in `FLVTag::payload`.
#[derive(Debug, Clone, PartialEq)]
pub enum FLVTagBody {
    Audio(AudioTagHeader),
    Video(VideoTagHeader),
    Script(ScriptData),
    /// Raw tag type byte of a tag this crate has no decoder for.
    Unknown(u8),
}
