//! In-memory mono audio buffer

/// Mono audio samples at a known sample rate
///
/// Samples are `f32` in [-1.0, 1.0] once normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Mono samples
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Create a new audio buffer
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum absolute sample value (0.0 for an empty buffer)
    pub fn peak(&self) -> f32 {
        self.samples.iter().map(|&x| x.abs()).fold(0.0f32, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let buffer = AudioBuffer::new(vec![0.0; 48000], 24000);
        assert!((buffer.duration_secs() - 2.0).abs() < 1e-6);
        assert_eq!(buffer.len(), 48000);
    }

    #[test]
    fn test_peak() {
        let buffer = AudioBuffer::new(vec![0.1, -0.7, 0.3], 24000);
        assert!((buffer.peak() - 0.7).abs() < 1e-6);

        let empty = AudioBuffer::new(vec![], 24000);
        assert!(empty.is_empty());
        assert_eq!(empty.peak(), 0.0);
    }
}
