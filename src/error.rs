//! Error types for voice registration

use std::fmt;

/// Errors that can occur while processing or registering voice files
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Filesystem error (unreadable source, unwritable voices directory, ...)
    Io(String),

    /// Audio decoding error
    DecodingError(String),

    /// WAV encoding error
    EncodingError(String),

    /// Processing error (resampling, mixing)
    ProcessingError(String),

    /// Audio has zero peak, so it cannot be peak-normalized
    SilentAudio(String),
}

impl fmt::Display for VoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoiceError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            VoiceError::Io(msg) => write!(f, "I/O error: {}", msg),
            VoiceError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            VoiceError::EncodingError(msg) => write!(f, "Encoding error: {}", msg),
            VoiceError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
            VoiceError::SilentAudio(msg) => write!(f, "Silent audio: {}", msg),
        }
    }
}

impl std::error::Error for VoiceError {}

impl From<std::io::Error> for VoiceError {
    fn from(err: std::io::Error) -> Self {
        VoiceError::Io(err.to_string())
    }
}

impl From<symphonia::core::errors::Error> for VoiceError {
    fn from(err: symphonia::core::errors::Error) -> Self {
        match err {
            symphonia::core::errors::Error::IoError(e) => VoiceError::Io(e.to_string()),
            other => VoiceError::DecodingError(other.to_string()),
        }
    }
}

impl From<crate::voices::naming::NameError> for VoiceError {
    fn from(err: crate::voices::naming::NameError) -> Self {
        VoiceError::InvalidInput(format!("Invalid voice name: {}", err))
    }
}

impl From<hound::Error> for VoiceError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) => VoiceError::Io(e.to_string()),
            other => VoiceError::EncodingError(other.to_string()),
        }
    }
}
