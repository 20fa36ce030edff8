//! Background-music variants of registered voices

use std::fs;
use std::path::{Path, PathBuf};

use super::ingest::OUTPUT_EXTENSION;
use super::naming::VoiceName;
use crate::config::VoiceConfig;
use crate::error::VoiceError;
use crate::io::{write_wav, AudioBuffer};
use crate::preprocessing::load_mono;
use crate::preprocessing::mixing::mix_with_music;
use crate::preprocessing::normalization::normalize_peak;

/// Mix a voice with background music and write the `_bgm` variant
///
/// Both files are loaded as mono at `config.target_sample_rate`. The music is
/// looped or cut to the voice length, scaled by `music_volume` (expected in
/// [0.0, 1.0], not enforced), added to the voice and peak-normalized to
/// `config.target_peak`. The result goes to
/// `<voices_dir>/<language>-<speaker>_bgm.wav`.
///
/// # Returns
///
/// Path of the written file
///
/// # Errors
///
/// * `VoiceError::Io` / `VoiceError::DecodingError` - either input unreadable
/// * `VoiceError::InvalidInput` - voice or music decodes to no samples
/// * `VoiceError::SilentAudio` - the mix has zero peak
pub fn mix_background_voice(
    voice_path: impl AsRef<Path>,
    music_path: impl AsRef<Path>,
    name: &VoiceName,
    music_volume: f32,
    config: &VoiceConfig,
) -> Result<PathBuf, VoiceError> {
    let voice_path = voice_path.as_ref();
    let music_path = music_path.as_ref();
    log::info!(
        "Mixing {} with background music {}",
        voice_path.display(),
        music_path.display()
    );

    let voice = load_mono(voice_path, config.target_sample_rate)?;
    let music = load_mono(music_path, config.target_sample_rate)?;

    let mut mixed = mix_with_music(&voice.samples, &music.samples, music_volume)?;
    normalize_peak(&mut mixed, config.target_peak)?;

    fs::create_dir_all(&config.voices_dir)?;
    let target = config
        .voices_dir
        .join(name.bgm_variant().file_name(OUTPUT_EXTENSION));
    write_wav(&target, &AudioBuffer::new(mixed, config.target_sample_rate))?;

    log::info!("Voice with BGM created: {}", target.display());
    Ok(target)
}
