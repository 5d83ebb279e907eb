use std::path::Path;

use flv_formats::{
    builder::FLVBuilder,
    demuxer::{FLVDemuxer, FLVEvent},
    header::FLVHeader,
    tag::{FLVTag, flv_tag_body::FLVTagBody},
};
use tokio::{fs::File, io::AsyncReadExt};
use utils::bytes::bytes_to_hex;

use crate::{
    config::Probe,
    errors::{AppError, AppResult},
    util::first_difference,
};

#[derive(Debug, Default)]
pub(crate) struct ProbeReport {
    pub(crate) header: Option<FLVHeader>,
    pub(crate) audio_tags: u64,
    pub(crate) video_tags: u64,
    pub(crate) script_tags: u64,
    pub(crate) unknown_tags: u64,
    pub(crate) payload_errors: u64,
    pub(crate) bytes_consumed: u64,
    /// `None` when verification is disabled or there was nothing to rebuild.
    pub(crate) verified: Option<bool>,
}

impl ProbeReport {
    pub(crate) fn tags(&self) -> u64 {
        self.audio_tags + self.video_tags + self.script_tags + self.unknown_tags
    }

    fn count(&mut self, tag: &FLVTag) {
        if tag.is_audio() {
            self.audio_tags += 1;
        } else if tag.is_video() {
            self.video_tags += 1;
        } else if tag.is_script() {
            self.script_tags += 1;
        } else {
            self.unknown_tags += 1;
        }
        if tag.body.is_err() {
            self.payload_errors += 1;
        }
    }
}

fn describe_body(tag: &FLVTag) -> String {
    match &tag.body {
        Ok(FLVTagBody::Audio(header)) => format!(
            "{:?} {} Hz {} bit {} channel(s), aac packet: {:?}",
            header.sound_format,
            header.sound_rate.hz(),
            header.sound_size.bits(),
            header.sound_type.channels(),
            header.aac_packet_type
        ),
        Ok(FLVTagBody::Video(header)) => format!(
            "{:?} {:?}, avc packet: {:?}, composition time: {:?}",
            header.frame_type, header.codec_id, header.avc_packet_type, header.composition_time
        ),
        Ok(FLVTagBody::Script(data)) => format!("{} with {} entries", data.name, data.len()),
        Ok(FLVTagBody::Unknown(tag_type)) => format!("unknown tag type {}", tag_type),
        Err(err) => format!("payload error: {}", err),
    }
}

fn log_tag(index: u64, tag: &FLVTag, dump_metadata: bool) {
    tracing::info!(
        "tag #{} {:?} timestamp: {} size: {} {}",
        index,
        tag.header.tag_type,
        tag.timestamp(),
        tag.size(),
        describe_body(tag)
    );
    if !dump_metadata {
        return;
    }
    if let Ok(FLVTagBody::Script(data)) = &tag.body {
        for (key, value) in data.iter() {
            tracing::info!("  {}: {}", key, value);
        }
    }
}

/// Streams the file through a demuxer in `chunk_size` pieces.
/// A stream-fatal error or a failed rebuild comparison is returned as an error.
pub(crate) async fn run(path: &Path, config: &Probe) -> AppResult<ProbeReport> {
    let mut file = File::open(path).await?;
    let mut demuxer = FLVDemuxer::new();
    let mut report = ProbeReport::default();

    let mut chunk = vec![0_u8; config.chunk_size];
    let mut input = Vec::new();
    let mut tags = Vec::new();

    while !demuxer.is_closed() {
        let len = file.read(&mut chunk).await?;
        let events = if len == 0 {
            demuxer.finish()
        } else {
            if config.verify_round_trip {
                input.extend_from_slice(&chunk[..len]);
            }
            demuxer.feed(&chunk[..len])
        };

        for event in events {
            match event {
                FLVEvent::Header(header) => {
                    tracing::info!(
                        "header version: {}, flags: {:#04x}, audio: {}, video: {}, header size: {}",
                        header.version,
                        header.flags,
                        header.has_audio(),
                        header.has_video(),
                        header.header_size
                    );
                    report.header = Some(header);
                }
                FLVEvent::Tag(tag) => {
                    report.count(&tag);
                    log_tag(report.tags(), &tag, config.dump_metadata);
                    if config.verify_round_trip {
                        tags.push(tag);
                    }
                }
                FLVEvent::End => {
                    tracing::info!(
                        "end of stream, {} tags, {} bytes",
                        report.tags(),
                        demuxer.bytes_consumed()
                    );
                }
                FLVEvent::Error(err) => {
                    tracing::error!(
                        "stream stopped after {} tags, {} bytes: {}",
                        report.tags(),
                        demuxer.bytes_consumed(),
                        err
                    );
                    return Err(err.into());
                }
            }
        }
    }
    report.bytes_consumed = demuxer.bytes_consumed();

    if !config.verify_round_trip {
        return Ok(report);
    }
    let Some(header) = report.header else {
        tracing::warn!("empty input, nothing to rebuild");
        return Ok(report);
    };
    let rebuilt = FLVBuilder::new(header).tags(tags).build()?;
    if let Some(offset) = first_difference(&input, &rebuilt) {
        let window = offset.saturating_sub(8)..offset + 8;
        tracing::warn!(
            "input around byte {}: {}, rebuilt: {}",
            offset,
            bytes_to_hex(&input[window.start..window.end.min(input.len())]),
            bytes_to_hex(&rebuilt[window.start.min(rebuilt.len())..window.end.min(rebuilt.len())])
        );
        return Err(AppError::RoundTripMismatch {
            offset,
            input_len: input.len(),
            rebuilt_len: rebuilt.len(),
        });
    }
    tracing::info!("rebuilt stream is identical to the input, {} bytes", rebuilt.len());
    report.verified = Some(true);
    Ok(report)
}
