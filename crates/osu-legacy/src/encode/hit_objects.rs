//! Per-ruleset hit object line grammars.

use std::fmt::Write as _;

use crate::beatmap::{HitObject, HitObjectKind, HitSample, Ruleset};
use crate::encode::format;
use crate::encode::legacy::{self, SampleBank};
use crate::error::{Error, Result};

/// Line grammar for one ruleset's hit objects.
///
/// Each ruleset owns its own field layout. Only the osu! grammar is
/// realized here; dispatching to any other ruleset fails instead of
/// producing empty lines that downstream readers would misparse.
pub trait HitObjectEncoder {
    /// Render one hit object as a complete line, without the newline.
    fn encode_object(&self, object: &HitObject) -> String;
}

/// Select the encoder strategy for `ruleset`.
pub fn encoder_for(ruleset: Ruleset) -> Result<&'static dyn HitObjectEncoder> {
    match ruleset {
        Ruleset::Osu => Ok(&OsuHitObjectEncoder),
        _ => Err(Error::UnsupportedRuleset(ruleset)),
    }
}

/// Encoder for ruleset 0 (osu!standard).
pub struct OsuHitObjectEncoder;

impl HitObjectEncoder for OsuHitObjectEncoder {
    fn encode_object(&self, object: &HitObject) -> String {
        let mut line = String::new();

        let _ = write!(
            line,
            "{},{},{},{},{},",
            object.position.x,
            object.position.y,
            object.start_time,
            object_type(object),
            hit_sound_type(object),
        );

        match &object.kind {
            HitObjectKind::Slider {
                path,
                repeat_count,
                node_samples,
            } => {
                for (i, point) in path.control_points.iter().enumerate() {
                    if let Some(path_type) = point.path_type {
                        let _ = write!(line, "{}|", path_type.letter());
                    }
                    let position = object.position + point.position;
                    let _ = write!(line, "{}:{}", position.x, position.y);
                    line.push(if i + 1 < path.control_points.len() {
                        '|'
                    } else {
                        ','
                    });
                }

                let _ = write!(
                    line,
                    "{},{},",
                    repeat_count.saturating_sub(1),
                    path.expected_distance,
                );

                for (i, samples) in node_samples.iter().enumerate() {
                    let bits = samples
                        .iter()
                        .fold(legacy::hit_sound::NONE, |bits, sample| {
                            bits | legacy::hit_sound::bit(&sample.name)
                        });
                    let _ = write!(line, "{}", bits);
                    line.push(if i + 1 < node_samples.len() { '|' } else { ',' });
                }

                for (i, samples) in node_samples.iter().enumerate() {
                    line.push_str(&sample_bank_descriptor(samples, true));
                    line.push(if i + 1 < node_samples.len() { '|' } else { ',' });
                }
            }
            HitObjectKind::Spinner { end_time } => {
                let _ = write!(line, "{},", end_time);
            }
            HitObjectKind::Circle => {}
        }

        line.push_str(&sample_bank_descriptor(&object.samples, false));
        line
    }
}

/// Type bitmask: shape and new-combo flags in the low bits, combo
/// colour offset packed above them.
fn object_type(object: &HitObject) -> u32 {
    use legacy::object_type::{CIRCLE, COMBO_OFFSET_SHIFT, NEW_COMBO, SLIDER, SPINNER};

    let mut bits = match object.kind {
        HitObjectKind::Slider { .. } => SLIDER,
        HitObjectKind::Spinner { .. } => SPINNER,
        HitObjectKind::Circle => CIRCLE,
    };
    if object.new_combo {
        bits |= NEW_COMBO;
    }
    bits + (object.combo_offset << COMBO_OFFSET_SHIFT)
}

/// Hit-sound bitmask: normal always sounds; every attached addition
/// sample contributes its bit.
fn hit_sound_type(object: &HitObject) -> u32 {
    object
        .samples
        .iter()
        .filter(|sample| sample.name != HitSample::NORMAL)
        .fold(legacy::hit_sound::NORMAL, |bits, sample| {
            bits | legacy::hit_sound::bit(&sample.name)
        })
}

/// Render the `normal:add[:suffix:volume:filename]` sample bank
/// descriptor for a sample list.
///
/// The normal bank comes from the first sample named "normal", the
/// addition bank from the first sample with any other non-empty name,
/// falling back to the normal bank when no addition exists.
pub(crate) fn sample_bank_descriptor(samples: &[HitSample], banks_only: bool) -> String {
    let normal_bank = samples
        .iter()
        .find(|sample| sample.name == HitSample::NORMAL)
        .map(|sample| SampleBank::from_name(&sample.bank))
        .unwrap_or(SampleBank::None);
    let mut add_bank = samples
        .iter()
        .find(|sample| !sample.name.is_empty() && sample.name != HitSample::NORMAL)
        .map(|sample| SampleBank::from_name(&sample.bank))
        .unwrap_or(SampleBank::None);

    if add_bank == SampleBank::None {
        add_bank = normal_bank;
    }

    let mut descriptor = format!("{}:{}", normal_bank as u8, add_bank as u8);

    if !banks_only {
        let suffix = samples.first().map(|s| s.suffix.as_str()).unwrap_or("");
        let volume = samples.first().map(|s| s.volume).unwrap_or(0);
        let filename = samples
            .iter()
            .find(|sample| sample.is_file_sample())
            .map(|sample| sample.filename.as_str())
            .unwrap_or("");
        let _ = write!(
            descriptor,
            ":{}:{}:{}",
            format::suffix_token(suffix),
            volume,
            filename,
        );
    }

    descriptor
}
