//! Silence detection and trimming utilities
//!
//! Leading and trailing silence is found on non-overlapping RMS frames. A
//! frame is silent when its RMS is more than `threshold_db` below the loudest
//! frame. Because frames are anchored at the buffer start and the kept range
//! always begins on a frame boundary, trimming an already-trimmed buffer is a
//! no-op.

use crate::error::VoiceError;

/// Silence detection configuration
#[derive(Debug, Clone)]
pub struct SilenceDetector {
    /// Threshold in dB below the loudest frame (default: 20.0)
    pub threshold_db: f32,

    /// Frame size for analysis in samples (default: 512)
    pub frame_size: usize,
}

impl Default for SilenceDetector {
    fn default() -> Self {
        Self {
            threshold_db: 20.0,
            frame_size: 512,
        }
    }
}

/// Per-frame RMS over non-overlapping frames; the last frame may be partial
fn frame_rms(samples: &[f32], frame_size: usize) -> Vec<f32> {
    samples
        .chunks(frame_size)
        .map(|frame| (frame.iter().map(|&x| x * x).sum::<f32>() / frame.len() as f32).sqrt())
        .collect()
}

/// Find the non-silent sample range
///
/// # Returns
///
/// `Some((start, end))` (end exclusive), or `None` when every frame is silent
/// (including an all-zero or empty buffer).
pub fn non_silent_range(
    samples: &[f32],
    detector: &SilenceDetector,
) -> Result<Option<(usize, usize)>, VoiceError> {
    if detector.frame_size == 0 {
        return Err(VoiceError::InvalidInput(
            "Frame size must be > 0".to_string(),
        ));
    }
    if detector.threshold_db.is_nan() || detector.threshold_db < 0.0 {
        return Err(VoiceError::InvalidInput(format!(
            "Silence threshold must be a non-negative dB value, got {}",
            detector.threshold_db
        )));
    }

    let rms = frame_rms(samples, detector.frame_size);
    let reference = rms.iter().copied().fold(0.0f32, f32::max);
    if reference <= 0.0 {
        return Ok(None);
    }

    // threshold_db below the loudest frame, compared in the linear domain
    let threshold = reference * 10.0_f32.powf(-detector.threshold_db / 20.0);
    let first = rms.iter().position(|&r| r > threshold);
    let last = rms.iter().rposition(|&r| r > threshold);

    Ok(match (first, last) {
        (Some(first), Some(last)) => {
            let start = first * detector.frame_size;
            let end = ((last + 1) * detector.frame_size).min(samples.len());
            Some((start, end))
        }
        _ => None,
    })
}

/// Trim leading and trailing silence
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `detector` - Silence detection configuration
///
/// # Returns
///
/// The trimmed samples; empty if the whole buffer is silent.
pub fn trim_silence(samples: &[f32], detector: &SilenceDetector) -> Result<Vec<f32>, VoiceError> {
    log::debug!("Detecting silence in {} samples", samples.len());

    match non_silent_range(samples, detector)? {
        Some((start, end)) => {
            log::debug!(
                "Trimmed {} leading and {} trailing samples",
                start,
                samples.len() - end
            );
            Ok(samples[start..end].to_vec())
        }
        None => {
            log::warn!("Audio is entirely silent, nothing left after trimming");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `pad` zeros, `len` samples of a 0.5 amplitude square-ish tone, `pad` zeros
    fn padded_tone(pad: usize, len: usize) -> Vec<f32> {
        let mut samples = vec![0.0f32; pad];
        samples.extend((0..len).map(|i| if (i / 20) % 2 == 0 { 0.5 } else { -0.5 }));
        samples.extend(vec![0.0f32; pad]);
        samples
    }

    #[test]
    fn test_trim_removes_padding() {
        let samples = padded_tone(2048, 4096);
        let trimmed = trim_silence(&samples, &SilenceDetector::default()).unwrap();
        assert_eq!(trimmed.len(), 4096);
        assert!(trimmed[0].abs() > 0.0);
    }

    #[test]
    fn test_trim_keeps_quiet_content_above_threshold() {
        // -12 dB relative to the loud part is above a 20 dB threshold
        let mut samples = padded_tone(1024, 2048);
        samples.extend(vec![0.125f32; 1024]);
        let trimmed = trim_silence(&samples, &SilenceDetector::default()).unwrap();
        assert_eq!(trimmed.len(), 2048 + 1024 + 1024);
    }

    #[test]
    fn test_trim_drops_noise_below_threshold() {
        // -40 dB noise floor around the tone is treated as silence
        let mut samples = vec![0.005f32; 1024];
        samples.extend(padded_tone(0, 2048));
        samples.extend(vec![-0.005f32; 1024]);
        let trimmed = trim_silence(&samples, &SilenceDetector::default()).unwrap();
        assert_eq!(trimmed.len(), 2048);
    }

    #[test]
    fn test_trim_is_idempotent() {
        let detector = SilenceDetector::default();
        // Uneven lengths so the kept range does not align with the end
        let mut samples = vec![0.0f32; 700];
        samples.extend((0..3333).map(|i| ((i as f32) * 0.05).sin() * (i as f32 / 3333.0)));
        samples.extend(vec![0.001f32; 900]);

        let once = trim_silence(&samples, &detector).unwrap();
        let twice = trim_silence(&once, &detector).unwrap();
        assert!(!once.is_empty());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_trim_silent_buffer() {
        let samples = vec![0.0f32; 10_000];
        let trimmed = trim_silence(&samples, &SilenceDetector::default()).unwrap();
        assert!(trimmed.is_empty());

        let trimmed = trim_silence(&[], &SilenceDetector::default()).unwrap();
        assert!(trimmed.is_empty());
    }

    #[test]
    fn test_invalid_detector() {
        let detector = SilenceDetector {
            threshold_db: 20.0,
            frame_size: 0,
        };
        assert!(trim_silence(&[0.1, 0.2], &detector).is_err());
    }
}
