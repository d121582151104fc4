use crate::lines::LineClassification;
use crate::lumping::LumpOutcome;
use crate::region::AssignmentCounts;
use serde::Serialize;

/// Summary of the lumping stage.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LumpingStage {
    pub input: usize,
    pub output: usize,
    pub merges: usize,
    /// Fixations marked invalid for being too short after lumping.
    pub invalidated: usize,
    /// The trial's final fixation was marked invalid by policy.
    pub last_fixation_excluded: bool,
}

impl LumpingStage {
    pub fn from_outcome(input: usize, outcome: &LumpOutcome) -> Self {
        Self {
            input,
            output: outcome.fixations.len(),
            merges: outcome.merges,
            invalidated: outcome.invalidated,
            last_fixation_excluded: false,
        }
    }
}

/// Summary of one line classification run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStage {
    pub events: usize,
    pub runs: usize,
    pub forward_crossings: usize,
    pub backward_crossings: usize,
    /// Crossings failed the start/end check; review manually.
    pub question: bool,
}

impl LineStage {
    pub fn from_classification(events: usize, result: &LineClassification) -> Self {
        let forward = result
            .crossings
            .iter()
            .filter(|c| c.direction.sign() > 0)
            .count();
        Self {
            events,
            runs: result.runs,
            forward_crossings: forward,
            backward_crossings: result.crossings.len() - forward,
            question: result.question,
        }
    }
}

/// Summary of region assignment.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentStage {
    pub assigned: usize,
    pub unmatched: usize,
    pub ambiguous: usize,
}

impl From<AssignmentCounts> for AssignmentStage {
    fn from(counts: AssignmentCounts) -> Self {
        Self {
            assigned: counts.assigned,
            unmatched: counts.unmatched,
            ambiguous: counts.ambiguous,
        }
    }
}
