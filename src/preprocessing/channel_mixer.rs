//! Channel mixing utilities (multi-channel to mono conversion)

use crate::error::VoiceError;

/// Downmix planar channels to mono by averaging
///
/// # Arguments
///
/// * `channels` - Planar samples, one slice per channel, equal lengths
///
/// # Returns
///
/// Mono samples: `(c0 + c1 + ... + cN) / N` per frame
///
/// # Errors
///
/// Returns `VoiceError::InvalidInput` if there are no channels or the channel
/// lengths differ.
pub fn downmix_to_mono<C: AsRef<[f32]>>(channels: &[C]) -> Result<Vec<f32>, VoiceError> {
    let first = channels
        .first()
        .ok_or_else(|| VoiceError::InvalidInput("No channels to downmix".to_string()))?
        .as_ref();

    if channels.len() == 1 {
        return Ok(first.to_vec());
    }

    let len = first.len();
    if channels.iter().any(|c| c.as_ref().len() != len) {
        return Err(VoiceError::InvalidInput(
            "Channel length mismatch in downmix".to_string(),
        ));
    }

    log::debug!("Downmixing {} channels to mono", channels.len());

    let mut mixed = vec![0.0f32; len];
    for channel in channels {
        for (acc, &sample) in mixed.iter_mut().zip(channel.as_ref()) {
            *acc += sample;
        }
    }
    let scale = 1.0 / channels.len() as f32;
    for value in &mut mixed {
        *value *= scale;
    }
    Ok(mixed)
}
