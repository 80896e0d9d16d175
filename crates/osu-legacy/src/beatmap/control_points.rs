use serde::{Deserialize, Serialize};

use crate::beatmap::sample::HitSample;

/// Tempo-defining point: beat length in milliseconds plus the meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingPoint {
    pub beat_length: f64,
    /// Time signature numerator (beats per bar).
    pub time_signature: u32,
}

impl Default for TimingPoint {
    fn default() -> Self {
        // 60 BPM, 4/4
        Self {
            beat_length: 1000.0,
            time_signature: 4,
        }
    }
}

/// Slider velocity multiplier applied from this point on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyPoint {
    pub speed_multiplier: f64,
}

impl Default for DifficultyPoint {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.0,
        }
    }
}

/// Sample bank state inherited by hit objects and timing lines.
///
/// Each field is optional: an unset field leaves the target of
/// [`SamplePoint::apply_to`] untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub bank: Option<String>,
    pub suffix: Option<String>,
    pub volume: Option<i32>,
}

impl Default for SamplePoint {
    fn default() -> Self {
        Self {
            bank: Some(HitSample::NORMAL.to_owned()),
            suffix: None,
            volume: Some(100),
        }
    }
}

impl SamplePoint {
    /// Configuration merge: fields this point defines override the
    /// target's values, everything else is kept as-is.
    pub fn apply_to(&self, sample: &HitSample) -> HitSample {
        let mut applied = sample.clone();
        if let Some(bank) = &self.bank {
            applied.bank = bank.clone();
        }
        if let Some(suffix) = &self.suffix {
            applied.suffix = suffix.clone();
        }
        if let Some(volume) = self.volume {
            applied.volume = volume;
        }
        applied
    }
}

/// Effect toggles active from this point on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectPoint {
    pub kiai: bool,
    pub omit_first_bar_line: bool,
}

/// One control point of a specific kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlPoint {
    Timing(TimingPoint),
    Difficulty(DifficultyPoint),
    Sample(SamplePoint),
    Effect(EffectPoint),
}

/// Control points of different kinds sharing one timestamp; the unit
/// of emission for the `[TimingPoints]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPointGroup {
    pub time: f64,
    pub timing: Option<TimingPoint>,
    pub difficulty: Option<DifficultyPoint>,
    pub sample: Option<SamplePoint>,
    pub effect: Option<EffectPoint>,
}

impl ControlPointGroup {
    pub fn new(time: f64) -> Self {
        Self {
            time,
            timing: None,
            difficulty: None,
            sample: None,
            effect: None,
        }
    }
}

/// The full control point timeline.
///
/// Groups are unique and ascending per timestamp. Each point kind
/// additionally keeps its own time-ordered index so that "latest
/// state at or before T" lookups are a binary search, independent of
/// which group a point physically belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlPointInfo {
    groups: Vec<ControlPointGroup>,
    timing_points: Vec<(f64, TimingPoint)>,
    difficulty_points: Vec<(f64, DifficultyPoint)>,
    sample_points: Vec<(f64, SamplePoint)>,
    effect_points: Vec<(f64, EffectPoint)>,
}

impl ControlPointInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[ControlPointGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Insert a point at `time`, creating the group when the
    /// timestamp is new. A point of the same kind at the same time is
    /// replaced, keeping groups unique and ascending.
    pub fn add(&mut self, time: f64, point: ControlPoint) {
        let index = self.groups.partition_point(|g| g.time < time);
        let exists = self.groups.get(index).is_some_and(|g| g.time == time);
        if !exists {
            self.groups.insert(index, ControlPointGroup::new(time));
        }
        let group = &mut self.groups[index];

        match point {
            ControlPoint::Timing(p) => {
                insert_point(&mut self.timing_points, time, p.clone());
                group.timing = Some(p);
            }
            ControlPoint::Difficulty(p) => {
                insert_point(&mut self.difficulty_points, time, p.clone());
                group.difficulty = Some(p);
            }
            ControlPoint::Sample(p) => {
                insert_point(&mut self.sample_points, time, p.clone());
                group.sample = Some(p);
            }
            ControlPoint::Effect(p) => {
                insert_point(&mut self.effect_points, time, p.clone());
                group.effect = Some(p);
            }
        }
    }

    /// Tempo state governing `time`; defaults when no point is at or
    /// before it.
    pub fn timing_point_at(&self, time: f64) -> TimingPoint {
        point_at(&self.timing_points, time).cloned().unwrap_or_default()
    }

    pub fn difficulty_point_at(&self, time: f64) -> DifficultyPoint {
        point_at(&self.difficulty_points, time)
            .cloned()
            .unwrap_or_default()
    }

    pub fn sample_point_at(&self, time: f64) -> SamplePoint {
        point_at(&self.sample_points, time).cloned().unwrap_or_default()
    }

    pub fn effect_point_at(&self, time: f64) -> EffectPoint {
        point_at(&self.effect_points, time).cloned().unwrap_or_default()
    }

    /// First sample point anywhere on the timeline, if any.
    pub fn first_sample_point(&self) -> Option<&SamplePoint> {
        self.sample_points.first().map(|(_, point)| point)
    }
}

fn insert_point<P>(points: &mut Vec<(f64, P)>, time: f64, point: P) {
    let index = points.partition_point(|(t, _)| *t < time);
    match points.get_mut(index) {
        Some((t, existing)) if *t == time => *existing = point,
        _ => points.insert(index, (time, point)),
    }
}

fn point_at<P>(points: &[(f64, P)], time: f64) -> Option<&P> {
    let index = points.partition_point(|(t, _)| *t <= time);
    index.checked_sub(1).map(|i| &points[i].1)
}
