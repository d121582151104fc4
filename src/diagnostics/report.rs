use super::stages::{AssignmentStage, LineStage, LumpingStage};
use super::timing::TimingBreakdown;
use crate::lines::CrosslineEvent;
use crate::measures::{RegionMeasure, TrialMeasures};
use crate::types::{Eye, FixationEvent, SaccadeEvent};
use serde::Serialize;

/// Result of [`TrialAnalyzer::analyze`](crate::TrialAnalyzer::analyze).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialReport {
    pub trial_id: String,
    pub stimulus: String,
    /// One entry per recorded eye, left first.
    pub eyes: Vec<EyeReport>,
    pub total_ms: f64,
}

impl TrialReport {
    pub fn eye(&self, eye: Eye) -> Option<&EyeReport> {
        self.eyes.iter().find(|r| r.eye == eye)
    }

    /// Classified fixations of all eyes, concatenated in eye order.
    pub fn fixations(&self) -> impl Iterator<Item = &FixationEvent> {
        self.eyes.iter().flat_map(|r| r.fixations.iter())
    }

    pub fn saccades(&self) -> impl Iterator<Item = &SaccadeEvent> {
        self.eyes.iter().flat_map(|r| r.saccades.iter())
    }

    /// True if any eye needs manual review.
    pub fn question(&self) -> bool {
        self.eyes.iter().any(EyeReport::question)
    }
}

/// Classified streams and measures of one eye.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EyeReport {
    pub eye: Eye,
    pub fixations: Vec<FixationEvent>,
    pub saccades: Vec<SaccadeEvent>,
    pub fixation_crossings: Vec<CrosslineEvent>,
    pub saccade_crossings: Vec<CrosslineEvent>,
    pub regions: Vec<RegionMeasure>,
    pub trial: TrialMeasures,
    /// Ambiguities worth a researcher's look; never fatal.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub trace: PipelineTrace,
}

impl EyeReport {
    pub fn question(&self) -> bool {
        let flagged = |stage: &Option<LineStage>| stage.as_ref().is_some_and(|s| s.question);
        flagged(&self.trace.fixation_lines) || flagged(&self.trace.saccade_lines)
    }
}

/// Stage-by-stage trace of one eye's pipeline run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub lumping: LumpingStage,
    /// `None` for single-line stimuli, where no classification runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixation_lines: Option<LineStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saccade_lines: Option<LineStage>,
    pub assignment: AssignmentStage,
    pub timings: TimingBreakdown,
}
