//! Audio decoding using Symphonia
//!
//! Any container/codec Symphonia supports (wav, mp3, flac, ogg/vorbis,
//! m4a/aac) is decoded to planar `f32` PCM at its native sample rate.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::VoiceError;

/// Decoded audio at its native sample rate, one `Vec` per channel
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Planar samples (`channels[c][frame]`)
    pub channels: Vec<Vec<f32>>,
    /// Native sample rate in Hz
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Number of channels in the source
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.channels.first().map(Vec::len).unwrap_or(0)
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f32 / self.sample_rate as f32
    }
}

/// Decode audio file to planar PCM samples
///
/// # Arguments
///
/// * `path` - Path to audio file
///
/// # Errors
///
/// `VoiceError::Io` if the file cannot be opened, `VoiceError::DecodingError`
/// if no decodable audio track is found.
pub fn decode_audio(path: impl AsRef<Path>) -> Result<DecodedAudio, VoiceError> {
    let path = path.as_ref();
    log::debug!("Decoding audio file: {}", path.display());

    let src = File::open(path)
        .map_err(|e| VoiceError::Io(format!("{}: {}", path.display(), e)))?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let meta_opts: MetadataOptions = Default::default();
    let fmt_opts: FormatOptions = Default::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(|e| VoiceError::DecodingError(format!("{}: {}", path.display(), e)))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| {
            VoiceError::DecodingError(format!("{}: no supported audio track", path.display()))
        })?;

    let track_id = track.id;
    let mut sample_rate = track.codec_params.sample_rate.unwrap_or(0);
    let mut channel_count = track.codec_params.channels.map(|c| c.count()).unwrap_or(0);
    let mut decoder =
        symphonia::default::get_codecs().make(&track.codec_params, &DecoderOptions::default())?;

    let mut interleaved: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                sample_rate = spec.rate;
                channel_count = spec.channels.count();

                let buf = sample_buf.get_or_insert_with(|| {
                    SampleBuffer::<f32>::new(decoded.capacity() as u64, spec)
                });
                if buf.capacity() < decoded.capacity() * channel_count {
                    *buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                }
                buf.copy_interleaved_ref(decoded);
                interleaved.extend_from_slice(buf.samples());
            }
            Err(SymphoniaError::DecodeError(msg)) => {
                // Corrupted packet, keep going
                log::warn!("Skipping undecodable packet in {}: {}", path.display(), msg);
                continue;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if channel_count == 0 || sample_rate == 0 {
        return Err(VoiceError::DecodingError(format!(
            "{}: missing channel layout or sample rate",
            path.display()
        )));
    }

    let channels = deinterleave(&interleaved, channel_count);
    log::debug!(
        "Decoded {} frames x {} channels at {} Hz from {}",
        channels.first().map(Vec::len).unwrap_or(0),
        channel_count,
        sample_rate,
        path.display()
    );

    Ok(DecodedAudio {
        channels,
        sample_rate,
    })
}

/// Split interleaved samples into one `Vec` per channel
///
/// A trailing partial frame is dropped.
pub fn deinterleave(interleaved: &[f32], channel_count: usize) -> Vec<Vec<f32>> {
    if channel_count == 0 {
        return Vec::new();
    }
    let frames = interleaved.len() / channel_count;
    let mut channels = vec![Vec::with_capacity(frames); channel_count];
    for frame in interleaved.chunks_exact(channel_count) {
        for (channel, &sample) in channels.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }
    channels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deinterleave_stereo() {
        let interleaved = [0.1, -0.1, 0.2, -0.2, 0.3];
        let channels = deinterleave(&interleaved, 2);
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0], vec![0.1, 0.2]);
        assert_eq!(channels[1], vec![-0.1, -0.2]);
    }

    #[test]
    fn test_decode_missing_file() {
        let result = decode_audio("definitely/not/here.wav");
        assert!(matches!(result, Err(VoiceError::Io(_))));
    }

    #[test]
    fn test_decode_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.wav");
        std::fs::write(&path, b"this is not a riff header").unwrap();

        let result = decode_audio(&path);
        assert!(result.is_err(), "garbage should not decode");
    }
}
