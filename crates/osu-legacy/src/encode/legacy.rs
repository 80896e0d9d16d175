//! Legacy enumerations and bitflag values.

use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

/// Legacy sample bank enumeration.
///
/// Written by name in `[General]` (`SampleSet: Soft`) and by value in
/// timing lines and sample descriptors.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum SampleBank {
    #[default]
    None = 0,
    Normal = 1,
    Soft = 2,
    Drum = 3,
}

impl SampleBank {
    /// Resolve a symbolic bank name, case-insensitively. Unknown or
    /// empty names map to `None`.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("normal") {
            Self::Normal
        } else if name.eq_ignore_ascii_case("soft") {
            Self::Soft
        } else if name.eq_ignore_ascii_case("drum") {
            Self::Drum
        } else {
            Self::None
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for SampleBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Hit-sound bitflags packed into hit object lines.
pub mod hit_sound {
    use crate::beatmap::HitSample;

    pub const NONE: u32 = 0;
    pub const NORMAL: u32 = 1;
    pub const WHISTLE: u32 = 1 << 1;
    pub const FINISH: u32 = 1 << 2;
    pub const CLAP: u32 = 1 << 3;

    /// Flag bit for a symbolic hit-sound name; unrecognized names
    /// contribute nothing.
    pub fn bit(name: &str) -> u32 {
        match name {
            HitSample::NORMAL => NORMAL,
            HitSample::WHISTLE => WHISTLE,
            HitSample::FINISH => FINISH,
            HitSample::CLAP => CLAP,
            _ => NONE,
        }
    }
}

/// Hit object type bits. The combo colour offset is packed above the
/// shape and new-combo flags, shifted by [`object_type::COMBO_OFFSET_SHIFT`].
pub mod object_type {
    pub const CIRCLE: u32 = 1;
    pub const SLIDER: u32 = 1 << 1;
    pub const SPINNER: u32 = 1 << 3;
    pub const NEW_COMBO: u32 = 1 << 4;
    pub const COMBO_OFFSET_SHIFT: u32 = 4;
}

/// Effect bitflags on a timing line.
pub mod effect {
    pub const NONE: u32 = 0;
    pub const KIAI: u32 = 1;
    pub const OMIT_FIRST_BAR_LINE: u32 = 1 << 3;
}
