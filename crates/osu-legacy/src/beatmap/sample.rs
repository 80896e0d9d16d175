use serde::{Deserialize, Serialize};

/// A single hit sample attached to a hit object or slider node.
///
/// `name` is a symbolic hit-sound name ([`HitSample::NORMAL`] and
/// friends); an empty name marks a file-referenced sample played from
/// `filename` directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitSample {
    pub name: String,
    /// Symbolic bank name ("normal", "soft", "drum"); empty means
    /// unset.
    pub bank: String,
    /// Custom sample bank suffix; empty renders as the literal `0`.
    pub suffix: String,
    pub volume: i32,
    /// File name for file-referenced samples.
    pub filename: String,
}

impl HitSample {
    pub const NORMAL: &'static str = "normal";
    pub const WHISTLE: &'static str = "whistle";
    pub const FINISH: &'static str = "finish";
    pub const CLAP: &'static str = "clap";

    /// Blank descriptor, the target of [`SamplePoint::apply_to`].
    ///
    /// [`SamplePoint::apply_to`]: crate::beatmap::SamplePoint::apply_to
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_file_sample(&self) -> bool {
        self.name.is_empty()
    }
}
