//! Legacy `.osu` text encoding.
//!
//! [`LegacyEncoder`] serializes a beatmap snapshot into the
//! line-oriented legacy format: a version header followed by the
//! General, Editor, Metadata, Difficulty, Events, TimingPoints, and
//! HitObjects sections, always in that order, one blank line before
//! each. The encoding is a literal projection of the model's current
//! values; no data is validated or normalized beyond the ruleset
//! check at construction time.

mod format;
mod hit_objects;
mod legacy;

pub use hit_objects::{HitObjectEncoder, OsuHitObjectEncoder, encoder_for};
pub use legacy::{SampleBank, effect, hit_sound, object_type};

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::beatmap::{Beatmap, ControlPointGroup, HitSample, Ruleset};
use crate::error::{Error, Result};

/// Format version written on the header line.
pub const LATEST_VERSION: i32 = 14234;

/// Serializer for the legacy beatmap text format.
///
/// Borrows the beatmap for the encoder's lifetime and never mutates
/// it. Construction validates the target ruleset; a full encode is a
/// single synchronous pass with the output sink as the only blocking
/// point.
pub struct LegacyEncoder<'a> {
    beatmap: &'a Beatmap,
    ruleset: Ruleset,
}

impl<'a> LegacyEncoder<'a> {
    /// Fails with [`Error::InvalidRuleset`] when `ruleset_id` is not
    /// one of the four legacy identifiers (0-3).
    pub fn new(beatmap: &'a Beatmap, ruleset_id: u8) -> Result<Self> {
        let ruleset = Ruleset::from_u8(ruleset_id).ok_or(Error::InvalidRuleset(ruleset_id))?;
        Ok(Self { beatmap, ruleset })
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Write the complete document to `writer`.
    ///
    /// Sink failures propagate as [`Error::Io`]; nothing is retried
    /// and a failed call may leave a partial document behind.
    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        debug!(
            "Encoding {} beatmap: {} control point groups, {} hit objects",
            self.ruleset,
            self.beatmap.control_points.groups().len(),
            self.beatmap.hit_objects.len()
        );

        writeln!(writer, "osu file format v{}", LATEST_VERSION)?;

        writeln!(writer)?;
        self.write_general(writer)?;

        writeln!(writer)?;
        self.write_editor(writer)?;

        writeln!(writer)?;
        self.write_metadata(writer)?;

        writeln!(writer)?;
        self.write_difficulty(writer)?;

        writeln!(writer)?;
        self.write_events(writer)?;

        writeln!(writer)?;
        self.write_timing_points(writer)?;

        writeln!(writer)?;
        self.write_hit_objects(writer)?;

        Ok(())
    }

    /// Encode into an owned string.
    pub fn encode_to_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.encode(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn write_general<W: Write>(&self, writer: &mut W) -> Result<()> {
        let metadata = &self.beatmap.metadata;
        let general = &self.beatmap.general;

        writeln!(writer, "[General]")?;

        let audio_filename = Path::new(&metadata.audio_file)
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        writeln!(writer, "AudioFilename: {}", audio_filename)?;
        writeln!(writer, "AudioLeadIn: {}", general.audio_lead_in)?;
        writeln!(writer, "PreviewTime: {}", metadata.preview_time)?;
        writeln!(writer, "Countdown: {}", format::bool_flag(general.countdown))?;

        // SampleSet reflects the first sample point on the timeline,
        // not any hit object.
        let first_sample = self
            .beatmap
            .control_points
            .first_sample_point()
            .cloned()
            .unwrap_or_default();
        let bank = SampleBank::from_name(first_sample.bank.as_deref().unwrap_or(""));
        writeln!(writer, "SampleSet: {}", bank)?;

        writeln!(writer, "StackLeniency: {}", general.stack_leniency)?;
        writeln!(writer, "Mode: {}", self.ruleset as u8)?;
        writeln!(
            writer,
            "LetterboxInBreaks: {}",
            format::bool_flag(general.letterbox_in_breaks)
        )?;
        if self.ruleset == Ruleset::Mania {
            writeln!(
                writer,
                "SpecialStyle: {}",
                format::bool_flag(general.special_style)
            )?;
        }
        writeln!(
            writer,
            "WidescreenStoryboard: {}",
            format::bool_flag(general.widescreen_storyboard)
        )?;

        Ok(())
    }

    fn write_editor<W: Write>(&self, writer: &mut W) -> Result<()> {
        let editor = &self.beatmap.editor;

        writeln!(writer, "[Editor]")?;

        if !editor.bookmarks.is_empty() {
            writeln!(writer, "Bookmarks: {}", format::join_csv(&editor.bookmarks))?;
        }
        writeln!(writer, "DistanceSpacing: {}", editor.distance_spacing)?;
        writeln!(writer, "BeatDivisor: {}", editor.beat_divisor)?;
        writeln!(writer, "GridSize: {}", editor.grid_size)?;
        writeln!(writer, "TimelineZoom: {}", editor.timeline_zoom)?;

        Ok(())
    }

    fn write_metadata<W: Write>(&self, writer: &mut W) -> Result<()> {
        let metadata = &self.beatmap.metadata;

        writeln!(writer, "[Metadata]")?;

        writeln!(writer, "Title: {}", metadata.title)?;
        writeln!(writer, "TitleUnicode: {}", metadata.title_unicode)?;
        writeln!(writer, "Artist: {}", metadata.artist)?;
        writeln!(writer, "ArtistUnicode: {}", metadata.artist_unicode)?;
        writeln!(writer, "Creator: {}", metadata.creator)?;
        writeln!(writer, "Version: {}", metadata.version)?;
        writeln!(writer, "Source: {}", metadata.source)?;
        writeln!(writer, "Tags: {}", metadata.tags)?;
        writeln!(writer, "BeatmapID: {}", metadata.beatmap_id.unwrap_or(0))?;
        writeln!(
            writer,
            "BeatmapSetID: {}",
            metadata.beatmap_set_id.unwrap_or(0)
        )?;

        Ok(())
    }

    fn write_difficulty<W: Write>(&self, writer: &mut W) -> Result<()> {
        let difficulty = &self.beatmap.difficulty;

        writeln!(writer, "[Difficulty]")?;

        writeln!(writer, "HPDrainRate: {}", difficulty.drain_rate)?;
        writeln!(writer, "CircleSize: {}", difficulty.circle_size)?;
        writeln!(writer, "OverallDifficulty: {}", difficulty.overall_difficulty)?;
        writeln!(writer, "ApproachRate: {}", difficulty.approach_rate)?;
        writeln!(writer, "SliderMultiplier: {}", difficulty.slider_multiplier)?;
        writeln!(writer, "SliderTickRate: {}", difficulty.slider_tick_rate)?;

        Ok(())
    }

    // Storyboard encoding is out of scope for this core; the Events
    // section writes nothing at all, not even a header.
    fn write_events<W: Write>(&self, _writer: &mut W) -> Result<()> {
        Ok(())
    }

    fn write_timing_points<W: Write>(&self, writer: &mut W) -> Result<()> {
        let control_points = &self.beatmap.control_points;
        if control_points.is_empty() {
            return Ok(());
        }

        writeln!(writer, "[TimingPoints]")?;

        for group in control_points.groups() {
            self.write_timing_group(writer, group)?;
        }

        Ok(())
    }

    fn write_timing_group<W: Write>(
        &self,
        writer: &mut W,
        group: &ControlPointGroup,
    ) -> Result<()> {
        let control_points = &self.beatmap.control_points;
        let difficulty = control_points.difficulty_point_at(group.time);
        let sample = control_points.sample_point_at(group.time);
        let effect_point = control_points.effect_point_at(group.time);

        // A group without its own tempo point encodes as inherited: a
        // negative beat length derived from the active speed
        // multiplier.
        let beat_length = match &group.timing {
            Some(timing) => timing.beat_length,
            None => -100.0 / difficulty.speed_multiplier,
        };

        // Apply the active sample point onto a blank descriptor to
        // surface the inherited bank, suffix, and volume.
        let applied = sample.apply_to(&HitSample::blank());

        let mut effect_flags = effect::NONE;
        if effect_point.kiai {
            effect_flags |= effect::KIAI;
        }
        if effect_point.omit_first_bar_line {
            effect_flags |= effect::OMIT_FIRST_BAR_LINE;
        }

        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            group.time,
            beat_length,
            control_points.timing_point_at(group.time).time_signature,
            SampleBank::from_name(&applied.bank) as u8,
            format::suffix_token(&applied.suffix),
            applied.volume,
            format::bool_flag(group.timing.is_some()),
            effect_flags,
        )?;

        Ok(())
    }

    fn write_hit_objects<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.beatmap.hit_objects.is_empty() {
            return Ok(());
        }

        let encoder = encoder_for(self.ruleset)?;

        writeln!(writer, "[HitObjects]")?;

        for object in &self.beatmap.hit_objects {
            writeln!(writer, "{}", encoder.encode_object(object))?;
        }

        Ok(())
    }
}
