#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use tokio_util::{
        bytes::{Bytes, BytesMut},
        codec::{Encoder, FramedRead},
    };

    use crate::{
        builder::FLVBuilder,
        demuxer::{FLVDemuxer, FLVEvent},
        errors::{FLVError, PayloadField, TagBodyError},
        framed::{FLVPacket, FLVStreamFramed},
        header::FLVHeader,
        tag::{
            FLVTag, audio_tag_header::SoundFormat, flv_tag_body::FLVTagBody,
            flv_tag_header::FLVTagType, video_tag_header::CodecID,
        },
    };

    /// header, an AAC audio tag at 0 ms, an AVC key frame at 40 ms
    #[rustfmt::skip]
    const STREAM: [u8; 50] = [
        0x46, 0x4C, 0x56, 0x01, 0x05, 0x00, 0x00, 0x00, 0x09,
        0x00, 0x00, 0x00, 0x00,
        0x08, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0xAF, 0x01,
        0x00, 0x00, 0x00, 0x0D,
        0x09, 0x00, 0x00, 0x05, 0x00, 0x00, 0x28, 0x00, 0x00, 0x00, 0x00,
        0x17, 0x01, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x10,
    ];

    fn feed_in_chunks(bytes: &[u8], chunk_size: usize) -> Vec<FLVEvent> {
        let mut demuxer = FLVDemuxer::new();
        let mut events = Vec::new();
        for chunk in bytes.chunks(chunk_size) {
            events.extend(demuxer.feed(chunk));
        }
        events.extend(demuxer.finish());
        assert!(demuxer.is_closed());
        events
    }

    fn packets(events: &[FLVEvent]) -> Vec<FLVPacket> {
        events
            .iter()
            .filter_map(|event| match event {
                FLVEvent::Header(header) => Some(FLVPacket::Header(*header)),
                FLVEvent::Tag(tag) => Some(FLVPacket::Tag(tag.clone())),
                _ => None,
            })
            .collect()
    }

    fn tags(events: &[FLVEvent]) -> Vec<FLVTag> {
        events
            .iter()
            .filter_map(|event| match event {
                FLVEvent::Tag(tag) => Some(tag.clone()),
                _ => None,
            })
            .collect()
    }

    fn rebuild(events: &[FLVEvent]) -> Vec<u8> {
        let header = events
            .iter()
            .find_map(|event| match event {
                FLVEvent::Header(header) => Some(*header),
                _ => None,
            })
            .unwrap();
        FLVBuilder::new(header).tags(tags(events)).build().unwrap()
    }

    #[test]
    fn decode_whole_stream() {
        let events = feed_in_chunks(&STREAM, STREAM.len());
        assert_eq!(events.len(), 4);

        match &events[0] {
            FLVEvent::Header(header) => {
                assert_eq!(header.signature, *b"FLV");
                assert_eq!(header.version, 1);
                assert_eq!(header.flags, 5);
                assert_eq!(header.header_size, 9);
                assert!(header.has_audio() && header.has_video());
            }
            event => panic!("expect header, got {:?}", event),
        }
        match &events[1] {
            FLVEvent::Tag(tag) => {
                assert!(tag.is_audio());
                assert_eq!(tag.payload.as_ref(), &[0xAF, 0x01]);
                match &tag.body {
                    Ok(FLVTagBody::Audio(header)) => {
                        assert_eq!(header.sound_format, SoundFormat::AAC)
                    }
                    body => panic!("expect audio body, got {:?}", body),
                }
            }
            event => panic!("expect audio tag, got {:?}", event),
        }
        match &events[2] {
            FLVEvent::Tag(tag) => {
                assert!(tag.is_video());
                assert_eq!(tag.timestamp(), 40);
                match &tag.body {
                    Ok(FLVTagBody::Video(header)) => {
                        assert_eq!(header.codec_id, CodecID::AVC);
                        assert!(header.is_key_frame());
                    }
                    body => panic!("expect video body, got {:?}", body),
                }
            }
            event => panic!("expect video tag, got {:?}", event),
        }
        assert!(matches!(events[3], FLVEvent::End));
    }

    #[test]
    fn chunking_does_not_change_events() {
        let expected = packets(&feed_in_chunks(&STREAM, STREAM.len()));
        for chunk_size in 1..STREAM.len() {
            let events = feed_in_chunks(&STREAM, chunk_size);
            assert_eq!(packets(&events), expected, "chunk size {}", chunk_size);
            assert!(matches!(events.last(), Some(FLVEvent::End)));
        }
    }

    #[test]
    fn uneven_chunks() {
        let mut demuxer = FLVDemuxer::new();
        let mut events = Vec::new();
        for range in [0..3, 3..4, 4..20, 20..21, 21..49, 49..50] {
            events.extend(demuxer.feed(&STREAM[range]));
        }
        assert_eq!(demuxer.buffered(), 0);
        events.extend(demuxer.finish());
        assert_eq!(packets(&events), packets(&feed_in_chunks(&STREAM, 50)));
        assert_eq!(demuxer.bytes_consumed(), 50);
        assert_eq!(demuxer.tags_emitted(), 2);
    }

    #[test]
    fn rebuild_is_byte_identical() {
        let events = feed_in_chunks(&STREAM, 7);
        assert_eq!(rebuild(&events), STREAM.to_vec());
    }

    #[test]
    fn empty_input_ends_cleanly() {
        let events = feed_in_chunks(&[], 1);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], FLVEvent::End));
    }

    #[test]
    fn ends_between_tags() {
        let events = feed_in_chunks(&STREAM[..30], 4);
        assert_eq!(packets(&events).len(), 2);
        assert!(matches!(events.last(), Some(FLVEvent::End)));

        let events = feed_in_chunks(&STREAM[..13], 4);
        assert_eq!(packets(&events).len(), 1);
        assert!(matches!(events.last(), Some(FLVEvent::End)));
    }

    #[test]
    fn truncated_inputs() {
        let cases: [(usize, &str, usize, usize, usize); 5] = [
            (2, "file header", 9, 2, 0),
            (9, "previous tag size", 4, 0, 1),
            (35, "tag header", 11, 5, 2),
            (43, "tag payload", 5, 2, 2),
            (46, "previous tag size", 4, 0, 3),
        ];
        for (len, stage, needed, available, units) in cases {
            let events = feed_in_chunks(&STREAM[..len], 3);
            assert_eq!(packets(&events).len(), units, "cut at {}", len);
            match events.last() {
                Some(FLVEvent::Error(FLVError::TruncatedInput {
                    stage: s,
                    needed: n,
                    available: a,
                })) => {
                    assert_eq!((*s, *n, *a), (stage, needed, available), "cut at {}", len)
                }
                event => panic!("expect truncated input at {}, got {:?}", len, event),
            }
        }
    }

    #[test]
    fn bad_signature_is_fatal() {
        let mut bytes = STREAM;
        bytes[2] = b'X';
        let mut demuxer = FLVDemuxer::new();
        assert!(demuxer.feed(&bytes[..2]).is_empty());
        let events = demuxer.feed(&bytes[2..]);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            FLVEvent::Error(FLVError::UnknownSignature([b'F', b'L', b'X']))
        ));
        assert!(demuxer.is_closed());
        assert!(demuxer.feed(&STREAM).is_empty());
        assert!(demuxer.finish().is_empty());
    }

    #[test]
    fn header_extension_is_skipped() {
        let mut bytes = STREAM[..9].to_vec();
        bytes[8] = 13;
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        bytes.extend_from_slice(&STREAM[9..]);

        for chunk_size in [1, 2, 5, bytes.len()] {
            let events = feed_in_chunks(&bytes, chunk_size);
            let packets = packets(&events);
            assert_eq!(packets.len(), 3);
            assert!(matches!(
                packets[0],
                FLVPacket::Header(FLVHeader {
                    header_size: 13,
                    ..
                })
            ));
            assert!(matches!(events.last(), Some(FLVEvent::End)));
            assert_eq!(rebuild(&events), bytes);
        }
    }

    #[test]
    fn short_declared_header_size() {
        let mut bytes = STREAM;
        bytes[8] = 5;
        let events = feed_in_chunks(&bytes, 4);
        assert_eq!(tags(&events).len(), 2);
        assert_eq!(rebuild(&events), bytes.to_vec());
    }

    #[test]
    fn unknown_tag_type_passes_through() {
        let mut bytes = STREAM;
        bytes[13] = 0x0F;
        let events = feed_in_chunks(&bytes, 1);
        let tags = tags(&events);
        assert_eq!(tags.len(), 2);
        assert!(tags[0].is_unknown());
        assert_eq!(tags[0].header.tag_type, FLVTagType::Unknown(0x0F));
        assert_eq!(tags[0].body, Ok(FLVTagBody::Unknown(0x0F)));
        assert!(tags[1].is_video());
        assert_eq!(rebuild(&events), bytes.to_vec());
    }

    #[test]
    fn payload_error_keeps_stream_going() {
        let mut bytes = STREAM;
        // sound format 9 is undefined
        bytes[24] = 0x9F;
        let events = feed_in_chunks(&bytes, 3);
        let tags = tags(&events);
        assert_eq!(tags.len(), 2);
        assert_eq!(
            tags[0].body,
            Err(TagBodyError::UnknownEncoding {
                field: PayloadField::SoundFormat,
                value: 9
            })
        );
        assert!(tags[1].body.is_ok());
        assert!(matches!(events.last(), Some(FLVEvent::End)));
        assert_eq!(rebuild(&events), bytes.to_vec());
    }

    #[test]
    fn empty_payload_tag() {
        let tag = FLVTag::with_payload(FLVTagType::Audio, 0, Bytes::new());
        let bytes = FLVBuilder::new(FLVHeader::new(1, true, false))
            .tag(tag)
            .build()
            .unwrap();
        let events = feed_in_chunks(&bytes, 2);
        let tags = tags(&events);
        assert_eq!(tags.len(), 1);
        assert!(matches!(
            tags[0].body,
            Err(TagBodyError::Truncated {
                field: PayloadField::SoundFormat,
                ..
            })
        ));
        assert!(matches!(events.last(), Some(FLVEvent::End)));
    }

    #[test]
    fn previous_tag_size_mismatch_is_tolerated() {
        let mut bytes = STREAM;
        bytes[29] = 0x0E;
        bytes[12] = 0x01;
        let events = feed_in_chunks(&bytes, 5);
        assert_eq!(tags(&events).len(), 2);
        assert!(matches!(events.last(), Some(FLVEvent::End)));
        // the builder writes the sizes the tags really have
        assert_eq!(rebuild(&events), STREAM.to_vec());
    }

    #[test]
    fn metadata_tag() {
        let mut payload = vec![0x02, 0x00, 0x0A];
        payload.extend_from_slice(b"onMetaData");
        payload.extend_from_slice(&[0x08, 0x00, 0x00, 0x00, 0x01, 0x08]);
        payload.extend_from_slice(b"duration");
        payload.push(0x00);
        payload.extend_from_slice(&12.5_f64.to_be_bytes());
        payload.extend_from_slice(&[0x00, 0x09]);

        let tag = FLVTag::with_payload(FLVTagType::Script, 0, Bytes::from(payload));
        let bytes = FLVBuilder::new(FLVHeader::new(1, true, true))
            .tag(tag)
            .build()
            .unwrap();
        assert_eq!(bytes.len(), 13 + 11 + 38 + 4);
        assert_eq!(&bytes[62..66], &[0, 0, 0, 49]);

        let events = feed_in_chunks(&bytes, 6);
        let tags = tags(&events);
        assert!(tags[0].is_script());
        match &tags[0].body {
            Ok(FLVTagBody::Script(data)) => {
                assert_eq!(data.name, "onMetaData");
                assert_eq!(data.len(), 1);
                assert_eq!(data.get_number("duration"), Some(12.5));
            }
            body => panic!("expect script body, got {:?}", body),
        }
    }

    #[test]
    fn extended_timestamp() {
        let mut bytes = STREAM;
        bytes[37] = 0x01;
        let tags = tags(&feed_in_chunks(&bytes, 50));
        assert_eq!(tags[1].header.timestamp_upper, 1);
        assert_eq!(tags[1].timestamp(), 0x0100_0028);
        assert_eq!(rebuild(&feed_in_chunks(&bytes, 50)), bytes.to_vec());
    }

    #[test]
    fn payload_outlives_demuxer() {
        let payload = {
            let mut demuxer = FLVDemuxer::new();
            let events = demuxer.feed(&STREAM);
            match events.into_iter().nth(2) {
                Some(FLVEvent::Tag(tag)) => tag.payload,
                event => panic!("expect video tag, got {:?}", event),
            }
        };
        assert_eq!(payload.as_ref(), &[0x17, 0x01, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn encoder_remuxes_packets() {
        let mut framed = FLVStreamFramed::new();
        let mut dst = BytesMut::new();
        for packet in packets(&feed_in_chunks(&STREAM, 11)) {
            framed.encode(packet, &mut dst).unwrap();
        }
        assert_eq!(&dst[..], &STREAM[..]);
    }

    #[tokio::test]
    async fn framed_read() {
        let mut framed = FramedRead::new(&STREAM[..], FLVStreamFramed::new());
        let mut packets = Vec::new();
        while let Some(packet) = framed.next().await {
            packets.push(packet.unwrap());
        }
        assert_eq!(packets.len(), 3);
        assert!(matches!(packets[0], FLVPacket::Header(_)));
        assert!(framed.decoder().is_closed());
        assert_eq!(framed.decoder().bytes_consumed(), 50);

        let mut framed = FramedRead::new(&STREAM[..43], FLVStreamFramed::new());
        assert!(matches!(framed.next().await, Some(Ok(FLVPacket::Header(_)))));
        assert!(matches!(framed.next().await, Some(Ok(FLVPacket::Tag(_)))));
        assert!(matches!(
            framed.next().await,
            Some(Err(FLVError::TruncatedInput { .. }))
        ));
    }
}
