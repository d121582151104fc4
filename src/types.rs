//! Event records shared by every stage of the pipeline.
//!
//! Fixations and saccades arrive already parsed from the device log. The
//! `line` and `region_id` fields start out empty and are filled by the line
//! classifiers and the region assigner.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recorded eye.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Eye {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

impl fmt::Display for Eye {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eye::Left => f.write_str("L"),
            Eye::Right => f.write_str("R"),
        }
    }
}

/// Which eyes a trial recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EyeMode {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "LR")]
    Both,
}

impl EyeMode {
    /// Eyes in processing order (left first).
    pub fn eyes(self) -> &'static [Eye] {
        match self {
            EyeMode::Left => &[Eye::Left],
            EyeMode::Right => &[Eye::Right],
            EyeMode::Both => &[Eye::Left, Eye::Right],
        }
    }

    pub fn records(self, eye: Eye) -> bool {
        self.eyes().contains(&eye)
    }
}

/// A period of stable gaze.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixationEvent {
    pub eye: Eye,
    pub start: f64,
    pub end: f64,
    pub duration: f64,
    pub x: f64,
    pub y: f64,
    pub pupil_size: f64,
    #[serde(default = "default_valid")]
    pub valid: bool,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub region_id: Option<u32>,
}

fn default_valid() -> bool {
    true
}

impl FixationEvent {
    /// Build a fixation from its time span; `duration` is derived.
    pub fn new(eye: Eye, start: f64, end: f64, x: f64, y: f64, pupil_size: f64) -> Self {
        Self {
            eye,
            start,
            end,
            duration: end - start,
            x,
            y,
            pupil_size,
            valid: true,
            line: None,
            region_id: None,
        }
    }

    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

/// Line tag attached to a saccade.
///
/// Serialized as the line number, or as `"<start>_<end>"` for saccades that
/// cross a line boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaccadeLine {
    Single(u32),
    Crossing { start: u32, end: u32 },
}

impl SaccadeLine {
    pub fn start_line(self) -> u32 {
        match self {
            SaccadeLine::Single(line) => line,
            SaccadeLine::Crossing { start, .. } => start,
        }
    }

    pub fn end_line(self) -> u32 {
        match self {
            SaccadeLine::Single(line) => line,
            SaccadeLine::Crossing { end, .. } => end,
        }
    }

    /// True when the saccade lands on an earlier line than it left.
    pub fn is_regressive(self) -> bool {
        self.end_line() < self.start_line()
    }
}

impl fmt::Display for SaccadeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaccadeLine::Single(line) => write!(f, "{line}"),
            SaccadeLine::Crossing { start, end } => write!(f, "{start}_{end}"),
        }
    }
}

impl Serialize for SaccadeLine {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SaccadeLine::Single(line) => serializer.serialize_u32(*line),
            SaccadeLine::Crossing { .. } => serializer.collect_str(self),
        }
    }
}

/// A fast movement between two fixations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaccadeEvent {
    pub eye: Eye,
    pub start: f64,
    pub end: f64,
    pub duration: f64,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub amplitude: f64,
    pub peak_velocity: f64,
    #[serde(default, skip_deserializing)]
    pub line: Option<SaccadeLine>,
}

impl SaccadeEvent {
    pub fn new(
        eye: Eye,
        start: f64,
        end: f64,
        from: (f64, f64),
        to: (f64, f64),
        amplitude: f64,
        peak_velocity: f64,
    ) -> Self {
        Self {
            eye,
            start,
            end,
            duration: end - start,
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            amplitude,
            peak_velocity,
            line: None,
        }
    }

    pub fn from_point(&self) -> Point2<f64> {
        Point2::new(self.x1, self.y1)
    }

    pub fn to_point(&self) -> Point2<f64> {
        Point2::new(self.x2, self.y2)
    }
}

/// Blink interval; only counted, never classified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlinkEvent {
    pub eye: Eye,
    pub start: f64,
    pub end: f64,
}

/// Parsed events of one trial, as handed over by the log parser.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrialRecord {
    pub id: String,
    /// Key of the stimulus layout this trial displayed.
    #[serde(default)]
    pub stimulus: String,
    pub eye_mode: EyeMode,
    /// Samples per second.
    pub sampling_frequency: f64,
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub fixations: Vec<FixationEvent>,
    #[serde(default)]
    pub saccades: Vec<SaccadeEvent>,
    #[serde(default)]
    pub blinks: Vec<BlinkEvent>,
}

impl TrialRecord {
    /// Duration of one sample in milliseconds.
    pub fn sample_period_ms(&self) -> f64 {
        1000.0 / self.sampling_frequency
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn fixations_for(&self, eye: Eye) -> Vec<FixationEvent> {
        self.fixations.iter().filter(|f| f.eye == eye).cloned().collect()
    }

    pub fn saccades_for(&self, eye: Eye) -> Vec<SaccadeEvent> {
        self.saccades.iter().filter(|s| s.eye == eye).cloned().collect()
    }

    pub fn blink_count(&self, eye: Eye) -> usize {
        self.blinks.iter().filter(|b| b.eye == eye).count()
    }
}
