//! Voice file naming convention: `<language>-<speaker>_<tag>.<ext>`
//!
//! The demo derives the speaker shown in its selector from the file stem:
//! everything before the first `_`, then everything after the last `-`.
//! [`VoiceName::parse`] follows the same rule but reports names that would
//! produce an empty speaker instead of returning a degenerate label.

use std::fmt;

use serde::Serialize;

/// Tag marking a background-music variant
pub const BGM_TAG: &str = "bgm";

/// Structured voice file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceName {
    /// Language prefix (`en`, `zh`, ...), if present
    pub language: Option<String>,
    /// Speaker name used in scripts
    pub speaker: String,
    /// Gender/descriptor tag, or `bgm`
    pub tag: Option<String>,
}

/// Why a file stem could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The stem yields an empty speaker name
    Unparseable(String),
    /// A component is empty or contains a character reserved at its position
    InvalidComponent {
        /// The offending component
        part: String,
        /// Characters that component may not contain
        reserved: &'static [char],
    },
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::Unparseable(stem) => write!(f, "no speaker name in '{}'", stem),
            NameError::InvalidComponent { part, reserved } => {
                let list: Vec<String> = reserved.iter().map(|c| format!("{:?}", c)).collect();
                write!(f, "'{}' is empty or contains one of {}", part, list.join(", "))
            }
        }
    }
}

impl std::error::Error for NameError {}

/// The speaker sits between the last `-` and the first `_` of the stem
const SPEAKER_RESERVED: &[char] = &['-', '_', '/', '\\'];
/// A `-` in the language still leaves the speaker after the last `-`
const LANGUAGE_RESERVED: &[char] = &['_', '/', '\\'];
/// Everything after the first `_` is the tag; a `.` would move the extension
const TAG_RESERVED: &[char] = &['.', '/', '\\'];

fn check_component(part: &str, reserved: &'static [char]) -> Result<(), NameError> {
    if part.is_empty() || part.contains(reserved) {
        return Err(NameError::InvalidComponent {
            part: part.to_string(),
            reserved,
        });
    }
    Ok(())
}

impl VoiceName {
    /// Build a name for a new voice file
    ///
    /// # Errors
    ///
    /// Returns `NameError::InvalidComponent` if any part is empty or contains
    /// a character that would make the demo derive a different speaker (or
    /// leave the voices directory).
    pub fn new(language: &str, speaker: &str, tag: &str) -> Result<Self, NameError> {
        check_component(language, LANGUAGE_RESERVED)?;
        check_component(speaker, SPEAKER_RESERVED)?;
        check_component(tag, TAG_RESERVED)?;
        Ok(Self {
            language: Some(language.to_string()),
            speaker: speaker.to_string(),
            tag: Some(tag.to_string()),
        })
    }

    /// Name of the background-music variant of this voice
    pub fn bgm_variant(&self) -> Self {
        Self {
            language: self.language.clone(),
            speaker: self.speaker.clone(),
            tag: Some(BGM_TAG.to_string()),
        }
    }

    /// Parse a file stem (file name without extension)
    ///
    /// # Example
    ///
    /// ```
    /// use vibevoice_voices::voices::naming::VoiceName;
    ///
    /// let name = VoiceName::parse("en-Emma_female").unwrap();
    /// assert_eq!(name.language.as_deref(), Some("en"));
    /// assert_eq!(name.speaker, "Emma");
    /// assert_eq!(name.tag.as_deref(), Some("female"));
    /// ```
    pub fn parse(stem: &str) -> Result<Self, NameError> {
        let (head, tag) = match stem.split_once('_') {
            Some((head, tag)) => (head, Some(tag)),
            None => (stem, None),
        };
        let (language, speaker) = match head.rsplit_once('-') {
            Some((language, speaker)) => (Some(language), speaker),
            None => (None, head),
        };

        if speaker.trim().is_empty() {
            return Err(NameError::Unparseable(stem.to_string()));
        }

        Ok(Self {
            language: language.filter(|l| !l.is_empty()).map(str::to_string),
            speaker: speaker.to_string(),
            tag: tag.filter(|t| !t.is_empty()).map(str::to_string),
        })
    }

    /// File name with the given extension (without the dot)
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self, extension)
    }

    /// True when this is a background-music variant
    pub fn is_bgm(&self) -> bool {
        self.tag
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(BGM_TAG))
    }
}

impl fmt::Display for VoiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(language) = &self.language {
            write!(f, "{}-", language)?;
        }
        write!(f, "{}", self.speaker)?;
        if let Some(tag) = &self.tag {
            write!(f, "_{}", tag)?;
        }
        Ok(())
    }
}

/// Background-music flag used by the lister: `bgm` anywhere in the name,
/// case-insensitive
pub fn has_bgm_marker(name: &str) -> bool {
    name.to_ascii_lowercase().contains(BGM_TAG)
}
