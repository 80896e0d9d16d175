//! Read-only beatmap model consumed by the encoder.
//!
//! This module holds the snapshot types the encoder projects into the
//! legacy text format:
//! - `Ruleset` - the four legacy ruleset identifiers
//! - `Metadata`, `GeneralSettings`, `EditorSettings`,
//!   `DifficultySettings` - direct section inputs
//! - `ControlPointInfo` - the timing/difficulty/sample/effect
//!   timeline, grouped by timestamp
//! - `HitObject` - circles, sliders, and spinners
//!
//! The encoder never mutates any of these.

mod control_points;
mod difficulty;
mod hit_object;
mod metadata;
mod ruleset;
mod sample;
mod settings;

pub use control_points::*;
pub use difficulty::*;
pub use hit_object::*;
pub use metadata::*;
pub use ruleset::*;
pub use sample::*;
pub use settings::*;

use serde::{Deserialize, Serialize};

/// A complete beatmap snapshot.
///
/// Hit objects are expected to be ordered ascending by start time;
/// the encoder does not re-sort them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Beatmap {
    pub metadata: Metadata,
    pub general: GeneralSettings,
    pub editor: EditorSettings,
    pub difficulty: DifficultySettings,
    pub control_points: ControlPointInfo,
    pub hit_objects: Vec<HitObject>,
}
