//! Error taxonomy.
//!
//! Structural problems and lumping contract violations abort the current
//! trial/eye. Classification ambiguities are not errors; they travel as
//! `question` flags, `None` region ids and report warnings.

use crate::types::Eye;
use thiserror::Error;

/// Malformed input that makes a trial unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StructuralError {
    #[error("region map is empty")]
    EmptyRegionMap,
    #[error("region map has no line increments; crossline anchors need at least two lines")]
    NoLineBreaks,
    #[error("region {id} has line {line} after a region on line {previous}")]
    NonMonotonicLines { id: u32, line: u32, previous: u32 },
    #[error("region {id} is malformed: {reason}")]
    InvalidRegion { id: u32, reason: String },
    #[error("region id {0} appears more than once")]
    DuplicateRegionId(u32),
    #[error("trial bounds are invalid: start={start} end={end}")]
    InvalidTrialBounds { start: f64, end: f64 },
    #[error("sampling frequency must be positive, got {0}")]
    InvalidSamplingFrequency(f64),
    #[error("{kind} #{index} [{start}, {end}] lies outside the trial window")]
    EventOutsideTrial {
        kind: &'static str,
        index: usize,
        start: f64,
        end: f64,
    },
    #[error("{kind} #{index} belongs to eye {eye}, which the trial did not record")]
    EyeNotRecorded {
        kind: &'static str,
        index: usize,
        eye: Eye,
    },
    #[error("{kind} #{index} starts before the previous one ended")]
    UnorderedEvents { kind: &'static str, index: usize },
}

/// Contract violation inside the fixation lumper.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LumpError {
    #[error("cannot merge fixation #{later} (start {later_start}) before #{earlier} (start {earlier_start})")]
    OutOfOrder {
        earlier: usize,
        later: usize,
        earlier_start: f64,
        later_start: f64,
    },
}

/// Failure of one trial/eye pipeline run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("trial {trial}: {source}")]
    Structural {
        trial: String,
        #[source]
        source: StructuralError,
    },
    #[error("trial {trial}, eye {eye}: {source}")]
    Lumping {
        trial: String,
        eye: Eye,
        #[source]
        source: LumpError,
    },
}

impl PipelineError {
    pub fn trial(&self) -> &str {
        match self {
            PipelineError::Structural { trial, .. } | PipelineError::Lumping { trial, .. } => trial,
        }
    }
}
