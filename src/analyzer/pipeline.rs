//! Trial analyzer driving one trial end-to-end.
//!
//! [`TrialAnalyzer`] takes a parsed [`TrialRecord`] and the [`RegionMap`] of
//! the stimulus it displayed, and returns a [`TrialReport`] with one
//! [`EyeReport`] per recorded eye. Each eye runs the same chain on its own
//! event streams:
//!
//! lumping → last-fixation policy → line classification → region assignment
//! → reading measures.
//!
//! ```no_run
//! use reading_measures::{AnalysisParams, TrialAnalyzer};
//! use reading_measures::region::RegionMap;
//! use reading_measures::types::TrialRecord;
//!
//! # fn example(trial: TrialRecord, map: RegionMap) {
//! let analyzer = TrialAnalyzer::new(AnalysisParams::default());
//! match analyzer.analyze(&trial, &map) {
//!     Ok(report) => println!("question: {}", report.question()),
//!     Err(err) => eprintln!("skipped: {err}"),
//! }
//! # }
//! ```
use super::params::AnalysisParams;
use super::validate::validate_trial;
use crate::diagnostics::{
    AssignmentStage, EyeReport, LineStage, LumpingStage, PipelineTrace, TimingBreakdown,
    TrialReport,
};
use crate::error::{LumpError, PipelineError, StructuralError};
use crate::lines::{
    assign_single_line, FixationLineClassifier, LineClassification, SaccadeLineClassifier,
};
use crate::lumping::FixationLumper;
use crate::measures::{ReadingMeasureCalculator, TrialMeasures};
use crate::region::{assign_regions, extract_anchors, CrosslineAnchor, RegionMap};
use crate::types::{Eye, TrialRecord};
use log::{debug, warn};
use std::time::Instant;

/// Reading-measure analyzer for single trials.
#[derive(Clone, Debug, Default)]
pub struct TrialAnalyzer {
    params: AnalysisParams,
}

impl TrialAnalyzer {
    pub fn new(params: AnalysisParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Analyze every recorded eye of `trial` against `map`.
    ///
    /// Structural problems and lumping contract violations abort the trial;
    /// classification ambiguities only show up as warnings on the report.
    pub fn analyze(&self, trial: &TrialRecord, map: &RegionMap) -> Result<TrialReport, PipelineError> {
        debug!(
            "TrialAnalyzer::analyze start trial={} eyes={:?} fixations={} saccades={}",
            trial.id,
            trial.eye_mode,
            trial.fixations.len(),
            trial.saccades.len()
        );
        let total_start = Instant::now();
        let structural = |source: StructuralError| PipelineError::Structural {
            trial: trial.id.clone(),
            source,
        };

        validate_trial(trial).map_err(structural)?;
        // Single-line stimuli have no line breaks and skip classification.
        let anchors = if map.line_count() > 1 {
            extract_anchors(map).map_err(structural)?
        } else {
            Vec::new()
        };

        let mut eyes = Vec::with_capacity(trial.eye_mode.eyes().len());
        for &eye in trial.eye_mode.eyes() {
            let report = self
                .analyze_eye(trial, map, &anchors, eye)
                .map_err(|source| PipelineError::Lumping {
                    trial: trial.id.clone(),
                    eye,
                    source,
                })?;
            eyes.push(report);
        }

        let report = TrialReport {
            trial_id: trial.id.clone(),
            stimulus: trial.stimulus.clone(),
            eyes,
            total_ms: total_start.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            "TrialAnalyzer::analyze done trial={} question={} total_ms={:.3}",
            report.trial_id,
            report.question(),
            report.total_ms
        );
        Ok(report)
    }

    fn analyze_eye(
        &self,
        trial: &TrialRecord,
        map: &RegionMap,
        anchors: &[CrosslineAnchor],
        eye: Eye,
    ) -> Result<EyeReport, LumpError> {
        let eye_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let mut warnings = Vec::new();

        let raw = trial.fixations_for(eye);
        let input = raw.len();
        let lumper = FixationLumper::new(self.params.lumping, trial.sample_period_ms());
        let outcome = timings.time("lumping", || lumper.lump(raw))?;
        let mut lumping = LumpingStage::from_outcome(input, &outcome);
        let mut fixations = outcome.fixations;

        if !self.params.include_last_fixation {
            if let Some(last) = fixations.last_mut() {
                last.valid = false;
                lumping.last_fixation_excluded = true;
            }
        }

        let mut saccades = trial.saccades_for(eye);
        let (fixation_lines, saccade_lines, fixation_crossings, saccade_crossings) =
            if anchors.is_empty() {
                timings.time("lines", || {
                    assign_single_line(&mut fixations, &mut saccades, map.first_line())
                });
                (None, None, Vec::new(), Vec::new())
            } else {
                let fix_result = timings.time("fixationLines", || {
                    FixationLineClassifier::new(anchors, self.params.lines).classify(&mut fixations)
                });
                let sac_result = timings.time("saccadeLines", || {
                    SaccadeLineClassifier::new(anchors, self.params.lines).classify(&mut saccades)
                });
                collect_warnings(&mut warnings, "fixations", &fix_result);
                collect_warnings(&mut warnings, "saccades", &sac_result);
                (
                    Some(LineStage::from_classification(fixations.len(), &fix_result)),
                    Some(LineStage::from_classification(saccades.len(), &sac_result)),
                    fix_result.crossings,
                    sac_result.crossings,
                )
            };

        let counts = timings.time("assignment", || assign_regions(map, &mut fixations));
        if counts.ambiguous > 0 {
            let message = format!(
                "{} fixation(s) fall inside more than one region and were left unassigned",
                counts.ambiguous
            );
            warn!("TrialAnalyzer: trial={} eye={eye}: {message}", trial.id);
            warnings.push(message);
        }

        let (regions, trial_measures) = timings.time("measures", || {
            let regions = ReadingMeasureCalculator::new(map).region_measures(&fixations);
            let totals = TrialMeasures::compute(
                &regions,
                &fixations,
                &saccades,
                trial.duration(),
                trial.blink_count(eye),
            );
            (regions, totals)
        });
        timings.total_ms = eye_start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "TrialAnalyzer: trial={} eye={eye} fixations {}->{} crossings fix={} sac={} warnings={}",
            trial.id,
            input,
            fixations.len(),
            fixation_crossings.len(),
            saccade_crossings.len(),
            warnings.len()
        );

        Ok(EyeReport {
            eye,
            fixations,
            saccades,
            fixation_crossings,
            saccade_crossings,
            regions,
            trial: trial_measures,
            warnings,
            trace: PipelineTrace {
                lumping,
                fixation_lines,
                saccade_lines,
                assignment: AssignmentStage::from(counts),
                timings,
            },
        })
    }
}

fn collect_warnings(out: &mut Vec<String>, stream: &str, result: &LineClassification) {
    out.extend(result.warnings.iter().map(|w| format!("{stream}: {w}")));
}
