use super::crossline::{check_crossings, lines_from_crossings, CrosslineEvent};
use super::options::LineOptions;
use super::runs::fixation_steps;
use super::walker::CrosslineWalker;
use super::LineClassification;
use crate::region::CrosslineAnchor;
use crate::types::FixationEvent;
use log::warn;

/// Assigns a text line to every fixation of one eye.
pub struct FixationLineClassifier<'a> {
    walker: CrosslineWalker<'a>,
}

impl<'a> FixationLineClassifier<'a> {
    pub fn new(anchors: &'a [CrosslineAnchor], options: LineOptions) -> Self {
        Self {
            walker: CrosslineWalker::new(anchors, options),
        }
    }

    /// Fill `line` on every fixation and report the crossline fixations.
    pub fn classify(&self, fixations: &mut [FixationEvent]) -> LineClassification {
        let Some(first_line) = self.walker.first_line() else {
            return LineClassification::default();
        };
        let steps = fixation_steps(fixations);
        let (runs, step_crossings) = self.walker.walk(&steps);
        // Step k ends on fixation k + 1.
        let crossings: Vec<CrosslineEvent> = step_crossings
            .into_iter()
            .map(|c| c.into_event(c.step + 1))
            .collect();

        let lines = lines_from_crossings(fixations.len(), first_line, &crossings);
        for (fixation, line) in fixations.iter_mut().zip(lines) {
            fixation.line = Some(line);
        }

        let warnings = if fixations.is_empty() {
            Vec::new()
        } else {
            check_crossings(&crossings, self.walker.anchors())
        };
        for w in &warnings {
            warn!("FixationLineClassifier: {w}");
        }
        LineClassification {
            runs: runs.len(),
            question: !warnings.is_empty(),
            crossings,
            warnings,
        }
    }
}
