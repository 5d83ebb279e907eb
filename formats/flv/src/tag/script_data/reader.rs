use tokio_util::bytes::Buf;

use crate::{
    errors::{PayloadField, TagBodyError, TagBodyResult},
    tag::ensure_remaining,
};

use super::{
    BOOLEAN_VALUE, ECMA_ARRAY_MARKER, NUMBER_VALUE, OBJECT_MARKER, STRING_MARKER, STRING_VALUE,
    ScriptData, ScriptValue,
};

fn read_string(payload: &mut &[u8], len: usize, field: PayloadField) -> TagBodyResult<String> {
    ensure_remaining(*payload, len, field)?;
    let value = String::from_utf8_lossy(&payload[..len]).into_owned();
    payload.advance(len);
    Ok(value)
}

impl ScriptData {
    /// Decodes a script tag payload.
    ///
    /// ```text
    /// 0x02 | name len (u16) | name
    /// 0x03 | structural byte (1)           object
    /// 0x08 | count (u32)                   ecma array
    /// repeat while more than 2 bytes remain:
    ///   key len (u8) | key | value type (u8) | value
    /// ```
    /// The 2-byte tail is left unread. A payload that stops inside the bytes
    /// following the container marker yields an empty mapping.
    pub fn read_from(mut payload: &[u8]) -> TagBodyResult<Self> {
        ensure_remaining(payload, 1, PayloadField::ScriptName)?;
        let marker = payload.get_u8();
        if marker != STRING_MARKER {
            return Err(TagBodyError::UnknownMetadataFormat(marker));
        }
        ensure_remaining(payload, 2, PayloadField::ScriptName)?;
        let name_len = payload.get_u16() as usize;
        let name = read_string(&mut payload, name_len, PayloadField::ScriptName)?;

        ensure_remaining(payload, 1, PayloadField::ScriptContainer)?;
        let container = payload.get_u8();
        let mut data = ScriptData::new(name);
        match container {
            OBJECT_MARKER => {
                if !payload.has_remaining() {
                    return Ok(data);
                }
                payload.advance(1);
            }
            ECMA_ARRAY_MARKER => {
                if payload.remaining() < 4 {
                    return Ok(data);
                }
                data.count = Some(payload.get_u32());
            }
            _ => return Err(TagBodyError::UnknownMetadataType(container)),
        }

        while payload.remaining() > 2 {
            let key_len = payload.get_u8() as usize;
            let key = read_string(&mut payload, key_len, PayloadField::ScriptKey)?;

            ensure_remaining(payload, 1, PayloadField::ScriptValue)?;
            let value = match payload.get_u8() {
                NUMBER_VALUE => {
                    ensure_remaining(payload, 8, PayloadField::ScriptValue)?;
                    ScriptValue::Number(payload.get_f64())
                }
                BOOLEAN_VALUE => {
                    ensure_remaining(payload, 1, PayloadField::ScriptValue)?;
                    ScriptValue::Boolean(payload.get_u8() != 0)
                }
                STRING_VALUE => {
                    ensure_remaining(payload, 2, PayloadField::ScriptValue)?;
                    let len = payload.get_u16() as usize;
                    ScriptValue::String(read_string(&mut payload, len, PayloadField::ScriptValue)?)
                }
                value_type => return Err(TagBodyError::UnknownValueType(value_type)),
            };
            data.insert(key, value);
        }

        Ok(data)
    }
}
