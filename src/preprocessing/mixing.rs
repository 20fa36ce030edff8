//! Background music tiling and mixing

use crate::error::VoiceError;

/// Repeat `music` cyclically and cut it to exactly `len` samples
///
/// # Errors
///
/// Returns `VoiceError::InvalidInput` if `music` is empty and `len > 0`.
pub fn tile_to_length(music: &[f32], len: usize) -> Result<Vec<f32>, VoiceError> {
    if len == 0 {
        return Ok(Vec::new());
    }
    if music.is_empty() {
        return Err(VoiceError::InvalidInput(
            "Background music has no samples".to_string(),
        ));
    }
    Ok(music.iter().copied().cycle().take(len).collect())
}

/// Sum `voice` with `music` tiled to the voice length and scaled by `music_volume`
///
/// The result is not normalized and may exceed full scale.
pub fn mix_with_music(
    voice: &[f32],
    music: &[f32],
    music_volume: f32,
) -> Result<Vec<f32>, VoiceError> {
    if voice.is_empty() {
        return Err(VoiceError::InvalidInput(
            "Voice has no samples to mix".to_string(),
        ));
    }
    if !music_volume.is_finite() {
        return Err(VoiceError::InvalidInput(format!(
            "Music volume must be finite, got {}",
            music_volume
        )));
    }
    if !(0.0..=1.0).contains(&music_volume) {
        log::warn!("Music volume {} is outside the usual [0.0, 1.0] range", music_volume);
    }

    let music = tile_to_length(music, voice.len())?;
    log::debug!(
        "Mixing {} voice samples with music at volume {:.2}",
        voice.len(),
        music_volume
    );

    Ok(voice
        .iter()
        .zip(&music)
        .map(|(&v, &m)| v + m * music_volume)
        .collect())
}
