use serde::{Deserialize, Serialize};

/// Playback and presentation switches from the `[General]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Silence prepended before the audio, in milliseconds.
    pub audio_lead_in: i32,
    pub countdown: bool,
    pub stack_leniency: f32,
    pub letterbox_in_breaks: bool,
    /// Mania-only; written only when the target ruleset is mania.
    pub special_style: bool,
    pub widescreen_storyboard: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            audio_lead_in: 0,
            countdown: false,
            stack_leniency: 0.7,
            letterbox_in_breaks: false,
            special_style: false,
            widescreen_storyboard: false,
        }
    }
}

/// Editor state from the `[Editor]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Bookmark times in milliseconds; the line is omitted when empty.
    pub bookmarks: Vec<i32>,
    pub distance_spacing: f64,
    pub beat_divisor: i32,
    pub grid_size: i32,
    pub timeline_zoom: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            bookmarks: Vec::new(),
            distance_spacing: 1.0,
            beat_divisor: 4,
            grid_size: 4,
            timeline_zoom: 1.0,
        }
    }
}
