use super::pipeline::TrialAnalyzer;
use crate::diagnostics::TrialReport;
use crate::error::PipelineError;
use crate::region::RegionMap;
use crate::types::TrialRecord;
use log::{info, warn};
use rayon::prelude::*;

/// One unit of batch work: a trial and the layout of its stimulus.
#[derive(Clone, Copy, Debug)]
pub struct TrialJob<'a> {
    pub trial: &'a TrialRecord,
    pub regions: &'a RegionMap,
}

impl TrialAnalyzer {
    /// Analyze independent trials in parallel.
    ///
    /// Results come back in job order, one per job; a failing trial only
    /// produces its own `Err`.
    pub fn analyze_batch(&self, jobs: &[TrialJob<'_>]) -> Vec<Result<TrialReport, PipelineError>> {
        info!("TrialAnalyzer::analyze_batch trials={}", jobs.len());
        let results: Vec<_> = jobs
            .par_iter()
            .map(|job| self.analyze(job.trial, job.regions))
            .collect();
        let failed = results.iter().filter(|r| r.is_err()).count();
        for err in results.iter().filter_map(|r| r.as_ref().err()) {
            warn!("TrialAnalyzer: skipped {err}");
        }
        info!(
            "TrialAnalyzer::analyze_batch done ok={} failed={}",
            results.len() - failed,
            failed
        );
        results
    }
}
