//! Audio decoding using symphonia.

use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Decoded audio data.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Audio samples as mono f32 in range [-1.0, 1.0].
    pub samples: Vec<f32>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Duration of the decoded audio in seconds.
    pub fn duration_secs(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let secs = self.samples.len() as f32 / self.sample_rate as f32;
        secs
    }
}

/// Decode an audio file to mono f32 samples.
///
/// Supports WAV, FLAC, and MP3. Multi-channel audio is mixed down to mono
/// by averaging channels.
pub fn decode_audio_file(path: &Path) -> Result<DecodedAudio> {
    let file = File::open(path).map_err(|e| Error::AudioOpen {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| Error::AudioOpen {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::NoAudioTracks {
            path: path.to_path_buf(),
        })?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| Error::AudioDecode {
            path: path.to_path_buf(),
            source: "missing sample rate".into(),
        })?;
    let channels = track
        .codec_params
        .channels
        .map_or(1, symphonia::core::audio::Channels::count);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut samples = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(Error::AudioDecode {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoder.decode(&packet).map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        mix_into_mono(&decoded, channels, &mut samples).map_err(|format| {
            Error::AudioDecode {
                path: path.to_path_buf(),
                source: format!("unsupported sample format: {format}").into(),
            }
        })?;
    }

    Ok(DecodedAudio {
        samples,
        sample_rate,
    })
}

/// Append one decoded buffer to `output`, converting to mono f32.
///
/// Every sample format the PCM/WAV codecs can produce is converted here;
/// an unhandled format is an error, never dropped audio.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn mix_into_mono(
    buffer: &AudioBufferRef,
    channels: usize,
    output: &mut Vec<f32>,
) -> std::result::Result<(), &'static str> {
    const I8_NORM: f32 = 128.0;
    const I16_NORM: f32 = 32_768.0;
    const I24_NORM: f32 = 8_388_608.0;
    const I32_NORM: f64 = 2_147_483_648.0;

    match buffer {
        AudioBufferRef::U8(buf) => {
            mix_planes(buf.frames(), channels, output, |ch, i| {
                (f32::from(buf.chan(ch)[i]) - I8_NORM) / I8_NORM
            });
        }
        AudioBufferRef::S8(buf) => {
            mix_planes(buf.frames(), channels, output, |ch, i| {
                f32::from(buf.chan(ch)[i]) / I8_NORM
            });
        }
        AudioBufferRef::U16(buf) => {
            mix_planes(buf.frames(), channels, output, |ch, i| {
                (f32::from(buf.chan(ch)[i]) - I16_NORM) / I16_NORM
            });
        }
        AudioBufferRef::S16(buf) => {
            mix_planes(buf.frames(), channels, output, |ch, i| {
                f32::from(buf.chan(ch)[i]) / I16_NORM
            });
        }
        AudioBufferRef::U24(buf) => {
            mix_planes(buf.frames(), channels, output, |ch, i| {
                (buf.chan(ch)[i].inner() as f32 - I24_NORM) / I24_NORM
            });
        }
        AudioBufferRef::S24(buf) => {
            mix_planes(buf.frames(), channels, output, |ch, i| {
                buf.chan(ch)[i].inner() as f32 / I24_NORM
            });
        }
        AudioBufferRef::U32(buf) => {
            mix_planes(buf.frames(), channels, output, |ch, i| {
                ((f64::from(buf.chan(ch)[i]) - I32_NORM) / I32_NORM) as f32
            });
        }
        AudioBufferRef::S32(buf) => {
            mix_planes(buf.frames(), channels, output, |ch, i| {
                (f64::from(buf.chan(ch)[i]) / I32_NORM) as f32
            });
        }
        AudioBufferRef::F32(buf) => {
            mix_planes(buf.frames(), channels, output, |ch, i| buf.chan(ch)[i]);
        }
        AudioBufferRef::F64(buf) => {
            mix_planes(buf.frames(), channels, output, |ch, i| {
                buf.chan(ch)[i] as f32
            });
        }
        #[allow(unreachable_patterns)]
        _ => return Err("unknown"),
    }

    Ok(())
}

/// Average `channels` sample planes into mono, frame by frame.
fn mix_planes<F>(frames: usize, channels: usize, output: &mut Vec<f32>, sample_at: F)
where
    F: Fn(usize, usize) -> f32,
{
    output.reserve(frames);
    if channels == 1 {
        output.extend((0..frames).map(|i| sample_at(0, i)));
        return;
    }

    #[allow(clippy::cast_precision_loss)]
    let norm = channels as f32;
    for i in 0..frames {
        let sum: f32 = (0..channels).map(|ch| sample_at(ch, i)).sum();
        output.push(sum / norm);
    }
}
