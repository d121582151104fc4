use super::crossline::{check_crossings, CrosslineEvent};
use super::options::LineOptions;
use super::runs::saccade_steps;
use super::walker::CrosslineWalker;
use super::LineClassification;
use crate::region::CrosslineAnchor;
use crate::types::{SaccadeEvent, SaccadeLine};
use log::warn;

/// Assigns a text line to every saccade of one eye.
///
/// The saccade that makes a jump carries a [`SaccadeLine::Crossing`] tag;
/// every other saccade gets the single line it happens on.
pub struct SaccadeLineClassifier<'a> {
    walker: CrosslineWalker<'a>,
}

impl<'a> SaccadeLineClassifier<'a> {
    pub fn new(anchors: &'a [CrosslineAnchor], options: LineOptions) -> Self {
        Self {
            walker: CrosslineWalker::new(anchors, options),
        }
    }

    pub fn classify(&self, saccades: &mut [SaccadeEvent]) -> LineClassification {
        let Some(first_line) = self.walker.first_line() else {
            return LineClassification::default();
        };
        let steps = saccade_steps(saccades);
        let (runs, step_crossings) = self.walker.walk(&steps);
        let crossings: Vec<CrosslineEvent> = step_crossings
            .into_iter()
            .map(|c| c.into_event(c.step))
            .collect();

        let mut pending = crossings.iter().peekable();
        let mut line = first_line;
        for (idx, saccade) in saccades.iter_mut().enumerate() {
            saccade.line = match pending.next_if(|c| c.event_index == idx) {
                Some(c) => {
                    line = c.end_line;
                    Some(SaccadeLine::Crossing {
                        start: c.start_line,
                        end: c.end_line,
                    })
                }
                None => Some(SaccadeLine::Single(line)),
            };
        }

        let warnings = if saccades.is_empty() {
            Vec::new()
        } else {
            check_crossings(&crossings, self.walker.anchors())
        };
        for w in &warnings {
            warn!("SaccadeLineClassifier: {w}");
        }
        LineClassification {
            runs: runs.len(),
            question: !warnings.is_empty(),
            crossings,
            warnings,
        }
    }
}
