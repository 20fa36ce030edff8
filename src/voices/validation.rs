//! Voice sample validation
//!
//! Reports duration, sample rate and channel layout at the file's native
//! rate, with advisory warnings. Decode failures become
//! [`ValidationOutcome::Invalid`]; nothing is propagated.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::VoiceConfig;
use crate::io::decode_audio;

/// Advisory (non-fatal) finding about a voice sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationWarning {
    /// Shorter than the recommended minimum
    TooShort {
        /// Duration in seconds
        duration_secs: f32,
        /// Recommended minimum in seconds
        min_secs: f32,
    },
    /// Longer than the recommended maximum
    TooLong {
        /// Duration in seconds
        duration_secs: f32,
        /// Recommended maximum in seconds
        max_secs: f32,
    },
    /// Will be resampled when registered
    SampleRateMismatch {
        /// Native sample rate in Hz
        found: u32,
        /// Rate the voice will be converted to
        expected: u32,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::TooShort { min_secs, .. } => write!(
                f,
                "Warning: Very short audio (< {}s). Consider longer sample.",
                min_secs
            ),
            ValidationWarning::TooLong { max_secs, .. } => write!(
                f,
                "Warning: Very long audio (> {}s). Consider shorter sample.",
                max_secs
            ),
            ValidationWarning::SampleRateMismatch { found, expected } => {
                write!(f, "Will be resampled from {}Hz to {}Hz", found, expected)
            }
        }
    }
}

/// Metadata of a decodable voice sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceReport {
    /// Inspected file
    pub path: PathBuf,
    /// Duration in seconds
    pub duration_secs: f32,
    /// Native sample rate in Hz
    pub sample_rate: u32,
    /// Channel count of the source
    pub channels: usize,
    /// Advisory warnings, empty when the sample looks good
    pub warnings: Vec<ValidationWarning>,
}

impl VoiceReport {
    /// Human-readable channel layout
    pub fn channel_layout(&self) -> &'static str {
        if self.channels == 1 {
            "Mono"
        } else {
            "Stereo"
        }
    }

    fn has_duration_warning(&self) -> bool {
        self.warnings.iter().any(|w| {
            matches!(
                w,
                ValidationWarning::TooShort { .. } | ValidationWarning::TooLong { .. }
            )
        })
    }

    fn has_rate_warning(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, ValidationWarning::SampleRateMismatch { .. }))
    }
}

impl fmt::Display for VoiceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Voice file validation: {}", self.path.display())?;
        writeln!(f, "  Duration: {:.2} seconds", self.duration_secs)?;
        writeln!(f, "  Sample rate: {} Hz", self.sample_rate)?;
        writeln!(f, "  Channels: {}", self.channel_layout())?;
        for warning in &self.warnings {
            writeln!(f, "  {}", warning)?;
        }
        if !self.has_duration_warning() {
            writeln!(f, "  Duration looks good")?;
        }
        if !self.has_rate_warning() {
            writeln!(f, "  Sample rate is optimal")?;
        }
        Ok(())
    }
}

/// Result of inspecting a voice sample
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// File decoded; warnings (if any) are advisory
    Valid(VoiceReport),
    /// File could not be decoded
    Invalid {
        /// Inspected file
        path: PathBuf,
        /// Decoder or I/O error message
        reason: String,
    },
}

impl ValidationOutcome {
    /// True if the file could be decoded
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    /// The report, if the file decoded
    pub fn report(&self) -> Option<&VoiceReport> {
        match self {
            ValidationOutcome::Valid(report) => Some(report),
            ValidationOutcome::Invalid { .. } => None,
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationOutcome::Valid(report) => write!(f, "{}", report),
            ValidationOutcome::Invalid { path, reason } => {
                writeln!(f, "Voice file validation: {}", path.display())?;
                writeln!(f, "  Error: {}", reason)
            }
        }
    }
}

/// Advisory warnings for a sample of the given duration and rate
pub fn check_sample(
    duration_secs: f32,
    sample_rate: u32,
    config: &VoiceConfig,
) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    if duration_secs < config.min_duration_secs {
        warnings.push(ValidationWarning::TooShort {
            duration_secs,
            min_secs: config.min_duration_secs,
        });
    } else if duration_secs > config.max_duration_secs {
        warnings.push(ValidationWarning::TooLong {
            duration_secs,
            max_secs: config.max_duration_secs,
        });
    }
    if sample_rate != config.target_sample_rate {
        warnings.push(ValidationWarning::SampleRateMismatch {
            found: sample_rate,
            expected: config.target_sample_rate,
        });
    }
    warnings
}

/// Inspect a voice sample at its native sample rate
pub fn inspect_voice_file(path: impl AsRef<Path>, config: &VoiceConfig) -> ValidationOutcome {
    let path = path.as_ref().to_path_buf();
    match decode_audio(&path) {
        Ok(decoded) => {
            let duration_secs = decoded.duration_secs();
            let warnings = check_sample(duration_secs, decoded.sample_rate, config);
            ValidationOutcome::Valid(VoiceReport {
                path,
                duration_secs,
                sample_rate: decoded.sample_rate,
                channels: decoded.channel_count(),
                warnings,
            })
        }
        Err(e) => {
            log::debug!("Validation of {} failed: {}", path.display(), e);
            ValidationOutcome::Invalid {
                path,
                reason: e.to_string(),
            }
        }
    }
}

/// Validate a voice sample with the default thresholds and print the report
///
/// Returns `false` only when the file cannot be decoded.
pub fn validate_voice_file(path: impl AsRef<Path>) -> bool {
    let outcome = inspect_voice_file(path, &VoiceConfig::default());
    println!("\n{}", outcome);
    outcome.is_valid()
}
