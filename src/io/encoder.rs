//! WAV encoding using hound
//!
//! Voice files are written as mono 16-bit PCM, the layout the demo loads.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use super::sample_buffer::AudioBuffer;
use crate::error::VoiceError;

/// Write a mono buffer to a 16-bit PCM WAV file, overwriting any existing file
///
/// Samples are clamped to [-1.0, 1.0] before quantization.
///
/// # Errors
///
/// Returns `VoiceError::InvalidInput` for a zero sample rate, and
/// `VoiceError::Io`/`VoiceError::EncodingError` if the file cannot be written.
pub fn write_wav(path: impl AsRef<Path>, audio: &AudioBuffer) -> Result<(), VoiceError> {
    let path = path.as_ref();
    if audio.sample_rate == 0 {
        return Err(VoiceError::InvalidInput("Invalid sample rate".to_string()));
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in &audio.samples {
        let clamped = sample.clamp(-1.0, 1.0);
        writer.write_sample((clamped * i16::MAX as f32).round() as i16)?;
    }
    writer.finalize()?;

    log::debug!(
        "Wrote {} samples at {} Hz to {}",
        audio.len(),
        audio.sample_rate,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_wav_spec() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let audio = AudioBuffer::new(vec![0.0, 0.5, -0.5, 1.5], 24000);

        write_wav(&path, &audio).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 24000);
        assert_eq!(spec.bits_per_sample, 16);

        let samples: Vec<i16> = reader.into_samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples.len(), 4);
        // Out-of-range input is clamped rather than wrapped
        assert_eq!(samples[3], i16::MAX);
    }

    #[test]
    fn test_write_wav_zero_rate() {
        let dir = tempfile::tempdir().unwrap();
        let audio = AudioBuffer::new(vec![0.1], 0);
        assert!(write_wav(dir.path().join("bad.wav"), &audio).is_err());
    }
}
