//! # VibeVoice voices
//!
//! Helpers for managing the voice samples the VibeVoice demo picks speakers
//! from. Voice files live in a flat directory (default `demo/voices`) and are
//! named `<language>-<speaker>_<tag>.<ext>`.
//!
//! ## Features
//!
//! - **Ingest**: decode any common format, downmix to mono, resample to
//!   24 kHz, trim silence, peak-normalize to 0.95 and write a WAV
//! - **Background music**: loop music under a voice at a chosen volume
//! - **Listing**: table of registered voices with derived speaker names
//! - **Validation**: duration / sample-rate / channel checks with advice
//!
//! ## Quick Start
//!
//! ```no_run
//! use vibevoice_voices::{add_voice_to_vibevoice, list_available_voices};
//!
//! let path = add_voice_to_vibevoice("clip.mp3", "Emma", "en", "female", "demo/voices")?;
//! println!("Registered {}", path.display());
//!
//! for voice in list_available_voices("demo/voices")? {
//!     println!("{:?} -> {}", voice.speaker, voice.file);
//! }
//! # Ok::<(), vibevoice_voices::VoiceError>(())
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! File → Decode → Downmix → Resample (24 kHz) → Trim → Normalize (0.95) → WAV
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod preprocessing;
pub mod voices;

use std::path::{Path, PathBuf};

// Re-export main types
pub use config::VoiceConfig;
pub use error::VoiceError;
pub use io::AudioBuffer;
pub use voices::{
    add_voice, inspect_voice_file, list_available_voices, mix_background_voice,
    validate_voice_file, ValidationOutcome, VoiceName, VoiceRecord, VoiceReport,
};

/// Add a voice sample to a voices directory
///
/// Convenience wrapper over [`add_voice`] using the default processing
/// parameters. The file is written as `<voices_dir>/<language>-<speaker>_<gender>.wav`.
///
/// # Arguments
///
/// * `source_audio_path` - Any audio file Symphonia can decode
/// * `speaker_name` - Name used in scripts (no `-`, `_`, `/` or `\`)
/// * `language_code` - e.g. `"en"`, `"zh-CN"`
/// * `gender` - e.g. `"female"`, `"male"`, `"neutral"`
/// * `voices_dir` - Target directory, created if missing
///
/// # Errors
///
/// Returns `VoiceError` if the name is invalid, the source cannot be decoded,
/// or the audio is silent.
pub fn add_voice_to_vibevoice(
    source_audio_path: impl AsRef<Path>,
    speaker_name: &str,
    language_code: &str,
    gender: &str,
    voices_dir: impl AsRef<Path>,
) -> Result<PathBuf, VoiceError> {
    let name = VoiceName::new(language_code, speaker_name, gender)?;
    let config = VoiceConfig::default().with_voices_dir(voices_dir);
    add_voice(source_audio_path, &name, &config)
}

/// Mix a registered voice with background music
///
/// Convenience wrapper over [`mix_background_voice`] using the default
/// processing parameters. Writes `<voices_dir>/<language>-<speaker>_bgm.wav`.
///
/// # Errors
///
/// Returns `VoiceError` if the name is invalid, an input cannot be decoded,
/// or the mix is silent.
pub fn create_voice_with_background_music(
    voice_path: impl AsRef<Path>,
    music_path: impl AsRef<Path>,
    speaker_name: &str,
    language_code: &str,
    voices_dir: impl AsRef<Path>,
    music_volume: f32,
) -> Result<PathBuf, VoiceError> {
    let name = VoiceName::new(language_code, speaker_name, voices::naming::BGM_TAG)?;
    let config = VoiceConfig::default().with_voices_dir(voices_dir);
    mix_background_voice(voice_path, music_path, &name, music_volume, &config)
}
