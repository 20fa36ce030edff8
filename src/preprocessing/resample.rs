//! Sample-rate conversion using rubato
//!
//! Band-limited sinc interpolation over the whole buffer. The resampler's
//! filter delay is removed, so the output is aligned with the input and has
//! `ceil(len * to / from)` samples.

use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

use crate::error::VoiceError;
use crate::io::AudioBuffer;

/// Sinc filter length in taps
const SINC_LEN: usize = 256;

/// Resample a mono buffer to `target_rate`
///
/// Returns the input unchanged when the rates already match.
///
/// # Errors
///
/// Returns `VoiceError::InvalidInput` for a zero rate and
/// `VoiceError::ProcessingError` if rubato rejects the conversion.
pub fn resample(audio: AudioBuffer, target_rate: u32) -> Result<AudioBuffer, VoiceError> {
    if audio.sample_rate == 0 || target_rate == 0 {
        return Err(VoiceError::InvalidInput("Invalid sample rate".to_string()));
    }
    if audio.sample_rate == target_rate || audio.is_empty() {
        return Ok(AudioBuffer::new(audio.samples, target_rate));
    }

    let input_len = audio.len();
    let ratio = target_rate as f64 / audio.sample_rate as f64;
    let expected_len =
        (input_len as u64 * target_rate as u64).div_ceil(audio.sample_rate as u64) as usize;

    log::debug!(
        "Resampling {} samples from {} Hz to {} Hz",
        input_len,
        audio.sample_rate,
        target_rate
    );

    let params = SincInterpolationParameters {
        sinc_len: SINC_LEN,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    // Zero padding lets the filter delay run out within a single chunk
    let mut input = audio.samples;
    input.resize(input_len + 2 * SINC_LEN, 0.0);

    let mut resampler = SincFixedIn::<f32>::new(ratio, 1.0, params, input.len(), 1)
        .map_err(|e| VoiceError::ProcessingError(format!("Failed to create resampler: {}", e)))?;
    let delay = resampler.output_delay();

    let output = resampler
        .process(&[input], None)
        .map_err(|e| VoiceError::ProcessingError(format!("Resampling failed: {}", e)))?
        .swap_remove(0);

    let mut samples: Vec<f32> = output.into_iter().skip(delay).take(expected_len).collect();
    samples.resize(expected_len, 0.0);

    Ok(AudioBuffer::new(samples, target_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn sine(freq: f32, sample_rate: u32, secs: f32) -> Vec<f32> {
        let n = (sample_rate as f32 * secs) as usize;
        (0..n)
            .map(|i| 0.5 * (2.0 * PI * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    #[test]
    fn test_same_rate_passthrough() {
        let audio = AudioBuffer::new(vec![0.1, 0.2, 0.3], 24000);
        let out = resample(audio.clone(), 24000).unwrap();
        assert_eq!(out, audio);
    }

    #[test]
    fn test_downsample_length_and_rate() {
        let audio = AudioBuffer::new(sine(440.0, 44100, 1.0), 44100);
        let out = resample(audio, 24000).unwrap();
        assert_eq!(out.sample_rate, 24000);
        assert_eq!(out.len(), 24000);
    }

    #[test]
    fn test_output_length_is_exact_ceiling() {
        // 44100 * (24000 / 44100) is not exactly 24000 in floating point
        for (len, from, to, want) in [
            (44100, 44100, 24000, 24000),
            (441, 44100, 24000, 240),
            (3, 48000, 24000, 2),
            (1, 22050, 24000, 2),
        ] {
            let audio = AudioBuffer::new(vec![0.25; len], from);
            let out = resample(audio, to).unwrap();
            assert_eq!(out.len(), want, "{} samples {} Hz -> {} Hz", len, from, to);
        }
    }

    #[test]
    fn test_upsample_preserves_amplitude() {
        let audio = AudioBuffer::new(sine(220.0, 16000, 0.5), 16000);
        let out = resample(audio, 24000).unwrap();
        assert_eq!(out.len(), 12000);

        // Ignore the edges, where the filter sees the zero padding
        let middle = &out.samples[2000..10000];
        let peak = middle.iter().map(|x| x.abs()).fold(0.0f32, f32::max);
        assert!((peak - 0.5).abs() < 0.02, "peak after resampling: {}", peak);
        assert!(out.samples.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_zero_rate_rejected() {
        let audio = AudioBuffer::new(vec![0.0; 10], 0);
        assert!(resample(audio, 24000).is_err());
    }
}
