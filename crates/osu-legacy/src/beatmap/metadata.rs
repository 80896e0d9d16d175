use serde::{Deserialize, Serialize};

/// Song and chart metadata, including the audio pointers written to
/// the `[General]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub title_unicode: String,
    pub artist: String,
    pub artist_unicode: String,
    /// Chart author, written on the `Creator:` line.
    pub creator: String,
    /// Difficulty name, written on the `Version:` line.
    pub version: String,
    pub source: String,
    pub tags: String,
    /// Online id; absent renders as 0.
    pub beatmap_id: Option<i32>,
    pub beatmap_set_id: Option<i32>,
    /// Audio file path; only the bare file name is written out.
    pub audio_file: String,
    /// Preview point in milliseconds, -1 when unset.
    pub preview_time: i32,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_unicode: String::new(),
            artist: String::new(),
            artist_unicode: String::new(),
            creator: String::new(),
            version: String::new(),
            source: String::new(),
            tags: String::new(),
            beatmap_id: None,
            beatmap_set_id: None,
            audio_file: String::new(),
            preview_time: -1,
        }
    }
}
