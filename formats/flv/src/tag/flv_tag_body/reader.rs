use crate::{
    errors::TagBodyResult,
    tag::{
        audio_tag_header::AudioTagHeader, flv_tag_header::FLVTagType, script_data::ScriptData,
        video_tag_header::VideoTagHeader,
    },
};

use super::FLVTagBody;

impl FLVTagBody {
    pub fn read_from(tag_type: FLVTagType, payload: &[u8]) -> TagBodyResult<Self> {
        let body = match tag_type {
            FLVTagType::Audio => FLVTagBody::Audio(AudioTagHeader::read_from(payload)?),
            FLVTagType::Video => FLVTagBody::Video(VideoTagHeader::read_from(payload)?),
            FLVTagType::Script => FLVTagBody::Script(ScriptData::read_from(payload)?),
            FLVTagType::Unknown(raw) => FLVTagBody::Unknown(raw),
        };
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::{PayloadField, TagBodyError},
        tag::{
            audio_tag_header::SoundFormat, flv_tag_body::FLVTagBody, flv_tag_header::FLVTagType,
            video_tag_header::CodecID,
        },
    };

    #[test]
    fn dispatch_by_tag_type() {
        match FLVTagBody::read_from(FLVTagType::Audio, &[0xAF, 0x01]).unwrap() {
            FLVTagBody::Audio(header) => assert_eq!(header.sound_format, SoundFormat::AAC),
            body => panic!("expect audio body, got {:?}", body),
        }
        match FLVTagBody::read_from(FLVTagType::Video, &[0x17]).unwrap() {
            FLVTagBody::Video(header) => assert_eq!(header.codec_id, CodecID::AVC),
            body => panic!("expect video body, got {:?}", body),
        }
        assert_eq!(
            FLVTagBody::read_from(FLVTagType::Unknown(15), &[]).unwrap(),
            FLVTagBody::Unknown(15)
        );
    }

    #[test]
    fn empty_script_payload() {
        assert!(matches!(
            FLVTagBody::read_from(FLVTagType::Script, &[]),
            Err(TagBodyError::Truncated {
                field: PayloadField::ScriptName,
                ..
            })
        ));
    }
}
