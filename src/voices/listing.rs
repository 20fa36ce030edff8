//! Voices directory listing

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use super::naming::{has_bgm_marker, VoiceName};
use crate::error::VoiceError;

/// File extensions recognised as voice samples (compared case-insensitively)
pub const AUDIO_EXTENSIONS: [&str; 6] = ["wav", "mp3", "flac", "ogg", "m4a", "aac"];

/// One voice file found in the voices directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceRecord {
    /// File name including extension
    pub file: String,
    /// Speaker label derived from the file name; `None` if the name has none
    pub speaker: Option<String>,
    /// Language prefix, if the name has one
    pub language: Option<String>,
    /// `bgm` appears in the file name (any case)
    pub is_bgm: bool,
    /// File size in whole kilobytes
    pub size_kb: u64,
}

impl VoiceRecord {
    /// Build a record from a file name and its size in bytes
    pub fn from_file_name(file: &str, size_bytes: u64) -> Self {
        let stem = Path::new(file)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file);

        let parsed = match VoiceName::parse(stem) {
            Ok(name) => Some(name),
            Err(e) => {
                log::warn!("Cannot derive speaker from '{}': {}", file, e);
                None
            }
        };

        Self {
            file: file.to_string(),
            speaker: parsed.as_ref().map(|n| n.speaker.clone()),
            language: parsed.and_then(|n| n.language),
            is_bgm: has_bgm_marker(stem),
            size_kb: size_bytes / 1024,
        }
    }
}

/// Printable table of voice records
pub struct VoiceTable<'a>(pub &'a [VoiceRecord]);

impl fmt::Display for VoiceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available voices ({} total):", self.0.len())?;
        writeln!(f, "{}", "-".repeat(50))?;
        for record in self.0 {
            writeln!(
                f,
                "  {:<15} | {:<25} | {:>6} KB{}",
                record.speaker.as_deref().unwrap_or("?"),
                record.file,
                record.size_kb,
                if record.is_bgm { " [BGM]" } else { "" }
            )?;
        }
        Ok(())
    }
}

/// True if the path has one of [`AUDIO_EXTENSIONS`]
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Collect voice records from a directory, sorted by file name
///
/// Returns `Ok(None)` if the directory does not exist.
pub fn scan_voices(voices_dir: impl AsRef<Path>) -> Result<Option<Vec<VoiceRecord>>, VoiceError> {
    let voices_dir = voices_dir.as_ref();
    if !voices_dir.is_dir() {
        return Ok(None);
    }

    let mut records = Vec::new();
    for entry in fs::read_dir(voices_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !is_audio_file(&path) {
            continue;
        }
        let file = entry.file_name().to_string_lossy().into_owned();
        // Follows symlinks, so a linked voice reports the target's size
        let size = fs::metadata(&path)?.len();
        records.push(VoiceRecord::from_file_name(&file, size));
    }

    records.sort_by(|a, b| a.file.cmp(&b.file));
    log::debug!("Found {} voices in {}", records.len(), voices_dir.display());
    Ok(Some(records))
}

/// List the voices in a directory and print them as a table
///
/// A missing directory prints a notice and yields an empty list.
pub fn list_available_voices(voices_dir: impl AsRef<Path>) -> Result<Vec<VoiceRecord>, VoiceError> {
    let voices_dir = voices_dir.as_ref();
    match scan_voices(voices_dir)? {
        Some(records) => {
            println!("\n{}", VoiceTable(&records));
            Ok(records)
        }
        None => {
            println!("Voices directory not found: {}", voices_dir.display());
            Ok(Vec::new())
        }
    }
}
