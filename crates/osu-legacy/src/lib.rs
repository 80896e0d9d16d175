//! Encoder for the legacy `.osu` beatmap interchange format.
//!
//! Takes a read-only [`Beatmap`] snapshot and writes the versioned,
//! line-oriented text format used for interchange with the wider
//! chart ecosystem, reproducing section order, numeric tokens,
//! bitflag packing, sample bank inheritance, and slider path strings
//! exactly as independent readers of the format expect.
//!
//! ```
//! use osu_legacy::{Beatmap, LegacyEncoder};
//!
//! let beatmap = Beatmap::default();
//! let encoder = LegacyEncoder::new(&beatmap, 0)?;
//! let text = encoder.encode_to_string()?;
//! assert!(text.starts_with("osu file format v"));
//! # Ok::<(), osu_legacy::Error>(())
//! ```

pub mod beatmap;
pub mod encode;
pub mod error;

pub use beatmap::{
    Beatmap, ControlPoint, ControlPointGroup, ControlPointInfo, DifficultyPoint,
    DifficultySettings, EditorSettings, EffectPoint, GeneralSettings, HitObject, HitObjectKind,
    HitSample, Metadata, PathControlPoint, PathType, Pos2, Ruleset, SamplePoint, SliderPath,
    TimingPoint,
};
pub use encode::{HitObjectEncoder, LATEST_VERSION, LegacyEncoder, OsuHitObjectEncoder, SampleBank};
pub use error::{Error, Result};
