use super::region::RegionMeasure;
use crate::types::{FixationEvent, SaccadeEvent};
use serde::Serialize;

/// Whole-trial measures of one eye.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrialMeasures {
    /// Trial duration (ms).
    pub tdur: f64,
    pub blinks: usize,
    /// Sum of first-fixation character offsets over all fixated regions.
    pub tffixos: u32,
    /// Sum of first-pass reading times over all regions.
    pub ttfixurt: f64,
    /// Number of valid fixations.
    pub tfixcnt: usize,
    /// Number of saccades landing on an earlier line than they left.
    pub tregrcnt: usize,
}

impl TrialMeasures {
    pub fn compute(
        regions: &[RegionMeasure],
        fixations: &[FixationEvent],
        saccades: &[SaccadeEvent],
        tdur: f64,
        blinks: usize,
    ) -> Self {
        Self {
            tdur,
            blinks,
            tffixos: regions.iter().filter_map(|r| r.ffos).sum(),
            ttfixurt: regions.iter().filter_map(|r| r.fpurt).sum(),
            tfixcnt: fixations.iter().filter(|f| f.valid).count(),
            tregrcnt: saccades
                .iter()
                .filter(|s| s.line.is_some_and(|line| line.is_regressive()))
                .count(),
        }
    }
}
