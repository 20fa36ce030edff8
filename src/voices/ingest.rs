//! Register a voice sample: resample, downmix, trim, normalize, write

use std::fs;
use std::path::{Path, PathBuf};

use super::naming::VoiceName;
use crate::config::VoiceConfig;
use crate::error::VoiceError;
use crate::io::{write_wav, AudioBuffer};
use crate::preprocessing::load_mono;
use crate::preprocessing::normalization::normalize_peak;
use crate::preprocessing::silence::{trim_silence, SilenceDetector};

/// Extension of every file written to the voices directory
pub const OUTPUT_EXTENSION: &str = "wav";

/// Run the ingest pipeline on a mono buffer already at the target rate
///
/// Trims leading/trailing silence and peak-normalizes to `config.target_peak`.
///
/// # Errors
///
/// Returns `VoiceError::SilentAudio` if nothing audible remains.
pub fn prepare_voice(audio: AudioBuffer, config: &VoiceConfig) -> Result<AudioBuffer, VoiceError> {
    let detector = SilenceDetector {
        threshold_db: config.trim_top_db,
        frame_size: config.trim_frame_size,
    };
    let mut samples = trim_silence(&audio.samples, &detector)?;
    if samples.is_empty() {
        return Err(VoiceError::SilentAudio(
            "Audio is entirely silent after trimming".to_string(),
        ));
    }

    normalize_peak(&mut samples, config.target_peak)?;
    Ok(AudioBuffer::new(samples, audio.sample_rate))
}

/// Add a voice sample to the voices directory
///
/// Loads `source`, converts it to mono at `config.target_sample_rate`, trims
/// silence, normalizes the peak to `config.target_peak` and writes
/// `<voices_dir>/<language>-<speaker>_<tag>.wav`. The directory is created if
/// needed; an existing file with the same name is overwritten.
///
/// # Returns
///
/// Path of the written file
///
/// # Errors
///
/// * `VoiceError::Io` / `VoiceError::DecodingError` - source unreadable
/// * `VoiceError::SilentAudio` - source has no audible content
pub fn add_voice(
    source: impl AsRef<Path>,
    name: &VoiceName,
    config: &VoiceConfig,
) -> Result<PathBuf, VoiceError> {
    let source = source.as_ref();
    log::info!("Processing audio: {}", source.display());

    let audio = load_mono(source, config.target_sample_rate)?;
    let audio = prepare_voice(audio, config)?;

    fs::create_dir_all(&config.voices_dir)?;
    let target = config.voices_dir.join(name.file_name(OUTPUT_EXTENSION));
    write_wav(&target, &audio)?;

    log::info!(
        "Voice added: {} ({:.2}s); speaker name for scripts: '{}'",
        target.display(),
        audio.duration_secs(),
        name.speaker
    );
    Ok(target)
}
