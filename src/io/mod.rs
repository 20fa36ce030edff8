//! Audio I/O modules
//!
//! Audio decoding using Symphonia, WAV output using hound.

pub mod decoder;
pub mod encoder;
pub mod sample_buffer;

pub use decoder::{decode_audio, DecodedAudio};
pub use encoder::write_wav;
pub use sample_buffer::AudioBuffer;
