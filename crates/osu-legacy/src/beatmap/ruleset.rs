use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

/// The four rulesets the legacy format can carry, keyed by the raw
/// `Mode` identifier.
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
pub enum Ruleset {
    #[default]
    #[strum(serialize = "osu")]
    Osu = 0,
    #[strum(serialize = "taiko")]
    Taiko = 1,
    #[strum(serialize = "catch")]
    Catch = 2,
    #[strum(serialize = "mania")]
    Mania = 3,
}

impl Ruleset {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Ruleset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruleset_from_u8() {
        assert_eq!(Ruleset::from_u8(0), Some(Ruleset::Osu));
        assert_eq!(Ruleset::from_u8(1), Some(Ruleset::Taiko));
        assert_eq!(Ruleset::from_u8(2), Some(Ruleset::Catch));
        assert_eq!(Ruleset::from_u8(3), Some(Ruleset::Mania));
        assert_eq!(Ruleset::from_u8(4), None);
        assert_eq!(Ruleset::from_u8(255), None);
    }

    #[test]
    fn test_ruleset_short_name() {
        assert_eq!(Ruleset::Osu.short_name(), "osu");
        assert_eq!(Ruleset::Mania.to_string(), "mania");
    }
}
