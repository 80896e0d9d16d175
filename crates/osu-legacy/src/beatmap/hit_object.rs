use serde::{Deserialize, Serialize};

use crate::beatmap::sample::HitSample;

/// 2D playfield position in osu! pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pos2 {
    pub x: f32,
    pub y: f32,
}

impl Pos2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Pos2 {
    type Output = Pos2;

    fn add(self, rhs: Pos2) -> Pos2 {
        Pos2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Curve interpolation kind for a slider path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathType {
    Bezier,
    Catmull,
    PerfectCurve,
    Linear,
}

impl PathType {
    /// Single-letter tag used in the legacy path string.
    pub fn letter(&self) -> char {
        match self {
            Self::Bezier => 'B',
            Self::Catmull => 'C',
            Self::PerfectCurve => 'P',
            Self::Linear => 'L',
        }
    }
}

/// One slider path control point, stored relative to the object
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathControlPoint {
    pub position: Pos2,
    /// Set on points that start a new segment.
    pub path_type: Option<PathType>,
}

impl PathControlPoint {
    pub fn new(position: Pos2) -> Self {
        Self {
            position,
            path_type: None,
        }
    }

    pub fn segment_start(position: Pos2, path_type: PathType) -> Self {
        Self {
            position,
            path_type: Some(path_type),
        }
    }
}

/// Slider curve geometry. Holds at least one control point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderPath {
    pub control_points: Vec<PathControlPoint>,
    /// Stored path length in osu! pixels; written verbatim, never
    /// recomputed.
    pub expected_distance: f64,
}

/// Shape-specific payload. Exactly one classification applies, with
/// curve taking precedence over end time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HitObjectKind {
    Circle,
    Slider {
        path: SliderPath,
        /// Total traversals of the path; 1 means a single pass.
        repeat_count: u32,
        /// Per-node sample lists: head, each repeat, tail.
        node_samples: Vec<Vec<HitSample>>,
    },
    Spinner {
        end_time: f64,
    },
}

/// A single interactive chart element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitObject {
    pub position: Pos2,
    pub start_time: f64,
    pub new_combo: bool,
    /// Combo colour skip count, packed into the type bitmask.
    pub combo_offset: u32,
    pub samples: Vec<HitSample>,
    pub kind: HitObjectKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos2_add() {
        let anchor = Pos2::new(50.0, 50.0);
        let offset = Pos2::new(100.0, -20.0);
        let sum = anchor + offset;
        assert_eq!(sum.x, 150.0);
        assert_eq!(sum.y, 30.0);
    }

    #[test]
    fn test_path_type_letters() {
        assert_eq!(PathType::Bezier.letter(), 'B');
        assert_eq!(PathType::Catmull.letter(), 'C');
        assert_eq!(PathType::PerfectCurve.letter(), 'P');
        assert_eq!(PathType::Linear.letter(), 'L');
    }
}
