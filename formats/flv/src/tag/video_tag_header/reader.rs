use tokio_util::bytes::Buf;

use crate::{
    errors::{PayloadField, TagBodyResult},
    tag::ensure_remaining,
};

use super::{AVCPacketType, CodecID, FrameType, VideoTagHeader};

impl VideoTagHeader {
    /// Byte 0 is `frame type (4) | codec id (4)`.
    /// AVC, HEVC and AV1 payloads follow it with a packet type byte and a
    /// signed 24-bit composition time, read only when all 4 bytes are present.
    pub fn read_from(mut payload: &[u8]) -> TagBodyResult<Self> {
        ensure_remaining(payload, 1, PayloadField::FrameType)?;
        let first_byte = payload.get_u8();
        let frame_type: FrameType = ((first_byte >> 4) & 0b1111).try_into()?;
        let codec_id: CodecID = (first_byte & 0b1111).try_into()?;

        let mut avc_packet_type: Option<AVCPacketType> = None;
        let mut composition_time: Option<i32> = None;
        if codec_id.has_packet_type() && payload.remaining() >= 4 {
            avc_packet_type = AVCPacketType::try_from(payload.get_u8()).ok();
            let raw = payload.get_uint(3) as u32;
            // sign extend from 24 bits
            composition_time = Some(((raw << 8) as i32) >> 8);
        }

        Ok(VideoTagHeader {
            frame_type,
            codec_id,
            avc_packet_type,
            composition_time,
        })
    }
}
