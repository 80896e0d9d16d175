use thiserror::Error;

use crate::beatmap::Ruleset;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Invalid ruleset id {0}: only the osu, taiko, catch, and mania rulesets (0-3) can be encoded"
    )]
    InvalidRuleset(u8),

    #[error("Hit object encoding for the {0} ruleset is not implemented")]
    UnsupportedRuleset(Ruleset),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
