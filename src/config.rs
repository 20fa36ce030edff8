//! Configuration parameters for voice processing

use std::path::{Path, PathBuf};

/// Sample rate expected by the VibeVoice demo (Hz)
pub const TARGET_SAMPLE_RATE: u32 = 24_000;

/// Peak level of every written voice file (linear, full scale = 1.0)
pub const TARGET_PEAK: f32 = 0.95;

/// Default voices directory, relative to the working directory
pub const DEFAULT_VOICES_DIR: &str = "demo/voices";

/// Voice processing configuration
#[derive(Debug, Clone)]
pub struct VoiceConfig {
    /// Directory where voice files are written and listed (default: `demo/voices`)
    pub voices_dir: PathBuf,

    /// Output sample rate in Hz (default: 24000)
    pub target_sample_rate: u32,

    // Preprocessing
    /// Silence threshold in dB below the loudest frame (default: 20.0)
    /// Leading/trailing frames quieter than this are trimmed
    pub trim_top_db: f32,

    /// Frame size for silence detection in samples (default: 512)
    pub trim_frame_size: usize,

    /// Peak amplitude after normalization (default: 0.95)
    pub target_peak: f32,

    // Naming
    /// Language code used when none is given (default: "en")
    pub default_language: String,

    /// Gender/descriptor tag used when none is given (default: "neutral")
    pub default_gender: String,

    // Background music
    /// Music gain applied before mixing (default: 0.1)
    pub music_volume: f32,

    // Validation
    /// Shorter samples get a warning (default: 2.0 s)
    pub min_duration_secs: f32,

    /// Longer samples get a warning (default: 30.0 s)
    pub max_duration_secs: f32,
}

impl VoiceConfig {
    /// Same configuration writing to another voices directory
    pub fn with_voices_dir(mut self, voices_dir: impl AsRef<Path>) -> Self {
        self.voices_dir = voices_dir.as_ref().to_path_buf();
        self
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            voices_dir: PathBuf::from(DEFAULT_VOICES_DIR),
            target_sample_rate: TARGET_SAMPLE_RATE,
            trim_top_db: 20.0,
            trim_frame_size: 512,
            target_peak: TARGET_PEAK,
            default_language: "en".to_string(),
            default_gender: "neutral".to_string(),
            music_volume: 0.1,
            min_duration_secs: 2.0,
            max_duration_secs: 30.0,
        }
    }
}
