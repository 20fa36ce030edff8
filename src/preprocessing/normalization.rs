//! Peak normalization
//!
//! Scales a buffer so its maximum absolute sample equals a target level.
//! Silent input is rejected with `VoiceError::SilentAudio` instead of dividing
//! by a zero peak.
//!
//! # Example
//!
//! ```no_run
//! use vibevoice_voices::preprocessing::normalization::normalize_peak;
//!
//! let mut samples = vec![0.5f32, -0.25, 0.1];
//! let metadata = normalize_peak(&mut samples, 0.95)?;
//! println!("Applied gain: {:.2} dB", metadata.gain_db);
//! # Ok::<(), vibevoice_voices::VoiceError>(())
//! ```

use crate::error::VoiceError;

/// Level information returned from normalization
#[derive(Debug, Clone, PartialEq)]
pub struct PeakMetadata {
    /// Peak level in dB (before normalization)
    pub peak_db: f32,
    /// Gain applied in dB
    pub gain_db: f32,
}

/// Normalize samples in place so the peak magnitude equals `target_peak`
///
/// # Arguments
///
/// * `samples` - Audio samples to normalize (modified in-place)
/// * `target_peak` - Linear peak level, in (0.0, 1.0]
///
/// # Errors
///
/// * `VoiceError::InvalidInput` - empty buffer, non-finite samples, or a
///   target outside (0.0, 1.0]
/// * `VoiceError::SilentAudio` - the buffer's peak is zero
pub fn normalize_peak(samples: &mut [f32], target_peak: f32) -> Result<PeakMetadata, VoiceError> {
    if samples.is_empty() {
        return Err(VoiceError::SilentAudio(
            "Empty audio samples, nothing to normalize".to_string(),
        ));
    }

    if !(target_peak > 0.0 && target_peak <= 1.0) {
        return Err(VoiceError::InvalidInput(format!(
            "Target peak must be in (0, 1], got {}",
            target_peak
        )));
    }

    if samples.iter().any(|x| !x.is_finite()) {
        return Err(VoiceError::InvalidInput(
            "Audio contains NaN or infinite samples".to_string(),
        ));
    }

    let peak = samples.iter().map(|&x| x.abs()).fold(0.0f32, f32::max);
    if peak == 0.0 {
        log::warn!("Audio is silent, cannot normalize");
        return Err(VoiceError::SilentAudio(
            "Peak amplitude is zero, cannot normalize".to_string(),
        ));
    }

    let gain_linear = target_peak / peak;
    for sample in samples.iter_mut() {
        *sample *= gain_linear;
    }

    let metadata = PeakMetadata {
        peak_db: 20.0 * peak.log10(),
        gain_db: 20.0 * gain_linear.log10(),
    };

    log::debug!(
        "Peak normalization: peak={:.2} dB, gain={:.2} dB",
        metadata.peak_db,
        metadata.gain_db
    );

    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generate a test signal: sine wave at 440 Hz
    fn generate_test_signal(length: usize, amplitude: f32, sample_rate: f32) -> Vec<f32> {
        let freq = 440.0;
        (0..length)
            .map(|i| {
                let t = i as f32 / sample_rate;
                amplitude * (2.0 * std::f32::consts::PI * freq * t).sin()
            })
            .collect()
    }

    fn peak(samples: &[f32]) -> f32 {
        samples.iter().map(|&x| x.abs()).fold(0.0f32, f32::max)
    }

    #[test]
    fn test_peak_normalization_quiet_signal() {
        let mut samples = generate_test_signal(24000, 0.2, 24000.0);
        let metadata = normalize_peak(&mut samples, 0.95).unwrap();

        assert!(
            (peak(&samples) - 0.95).abs() < 1e-5,
            "Peak normalization failed: expected 0.95, got {:.5}",
            peak(&samples)
        );
        assert!(metadata.gain_db > 0.0, "Quiet signal should be boosted");
    }

    #[test]
    fn test_peak_normalization_attenuates_hot_signal() {
        // Mixes can exceed full scale before renormalization
        let mut samples = vec![1.6f32, -0.8, 0.4];
        let metadata = normalize_peak(&mut samples, 0.95).unwrap();
        assert!((peak(&samples) - 0.95).abs() < 1e-6);
        assert!(metadata.gain_db < 0.0);
        assert!((samples[1] + 0.475).abs() < 1e-6);
    }

    #[test]
    fn test_silent_audio() {
        let mut samples = vec![0.0f32; 24000];
        let result = normalize_peak(&mut samples, 0.95);
        assert!(matches!(result, Err(VoiceError::SilentAudio(_))));
        assert!(samples.iter().all(|&x| x == 0.0), "Samples must stay untouched");
    }

    #[test]
    fn test_empty_samples() {
        let mut samples: Vec<f32> = vec![];
        assert!(normalize_peak(&mut samples, 0.95).is_err());
    }

    #[test]
    fn test_non_finite_samples() {
        let mut samples = vec![0.5, f32::NAN, 0.1];
        let result = normalize_peak(&mut samples, 0.95);
        assert!(matches!(result, Err(VoiceError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_target() {
        let mut samples = vec![0.5f32];
        assert!(normalize_peak(&mut samples, 0.0).is_err());
        assert!(normalize_peak(&mut samples, 1.5).is_err());
    }
}
