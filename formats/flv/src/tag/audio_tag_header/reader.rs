use tokio_util::bytes::Buf;

use crate::{
    errors::{PayloadField, TagBodyResult},
    tag::ensure_remaining,
};

use super::{AACPacketType, AudioTagHeader, SoundFormat, SoundRate, SoundSize, SoundType};

impl AudioTagHeader {
    /// Decodes the bit fields of the first payload byte, most significant bits first:
    /// sound format (4), sound rate (2), sound size (1), sound type (1).
    pub fn read_from(mut payload: &[u8]) -> TagBodyResult<Self> {
        ensure_remaining(payload, 1, PayloadField::SoundFormat)?;
        let first_byte = payload.get_u8();
        let sound_format: SoundFormat = ((first_byte >> 4) & 0b1111).try_into()?;
        let sound_rate: SoundRate = ((first_byte >> 2) & 0b11).try_into()?;
        let sound_size: SoundSize = ((first_byte >> 1) & 0b1).try_into()?;
        let sound_type: SoundType = (first_byte & 0b1).try_into()?;

        let mut aac_packet_type: Option<AACPacketType> = None;
        if sound_format == SoundFormat::AAC && payload.has_remaining() {
            // an undefined packet type leaves the byte 0 fields usable
            aac_packet_type = AACPacketType::try_from(payload.get_u8()).ok();
        }

        Ok(AudioTagHeader {
            sound_format,
            sound_rate,
            sound_size,
            sound_type,
            aac_packet_type,
        })
    }
}
