//! Voice directory operations
//!
//! - Ingest: register a normalized voice sample
//! - Background: write a voice mixed with background music
//! - Listing: enumerate voice files and derive speaker names
//! - Validation: inspect a candidate sample

pub mod background;
pub mod ingest;
pub mod listing;
pub mod naming;
pub mod validation;

pub use background::mix_background_voice;
pub use ingest::add_voice;
pub use listing::{list_available_voices, VoiceRecord};
pub use naming::{NameError, VoiceName};
pub use validation::{inspect_voice_file, validate_voice_file, ValidationOutcome, VoiceReport};
