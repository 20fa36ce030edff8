//! Audio preprocessing modules
//!
//! This module contains the signal steps applied before a voice is written:
//! - Channel mixing (multi-channel to mono)
//! - Sample-rate conversion
//! - Silence detection and trimming
//! - Peak normalization
//! - Background music tiling and mixing

pub mod channel_mixer;
pub mod mixing;
pub mod normalization;
pub mod resample;
pub mod silence;

use crate::error::VoiceError;
use crate::io::{decode_audio, AudioBuffer};
use std::path::Path;

/// Decode a file, downmix it to mono and resample it to `target_rate`
///
/// Shared loading step of the ingest and background-mix operations.
pub fn load_mono(path: impl AsRef<Path>, target_rate: u32) -> Result<AudioBuffer, VoiceError> {
    let decoded = decode_audio(path)?;
    let mono = channel_mixer::downmix_to_mono(&decoded.channels)?;
    resample::resample(AudioBuffer::new(mono, decoded.sample_rate), target_rate)
}
