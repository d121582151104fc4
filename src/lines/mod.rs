//! Line-of-text assignment for fixations and saccades.
//!
//! Overview
//! - [`runs`] reduces an event stream to horizontal steps and collapses
//!   them into directional runs: every rightward step is its own run, a
//!   leftward sweep becomes one run.
//! - A shared walker moves a cursor over the line-break anchors. A leftward
//!   run whose net displacement exceeds `diff_ratio` of the break's span is a
//!   forward crossing; a large rightward run starting near the line start is
//!   a backward crossing (the reader went back to the previous line).
//! - [`FixationLineClassifier`] and [`SaccadeLineClassifier`] turn the
//!   crossings into per-event lines and [`CrosslineEvent`] lists, then check
//!   that the crossings start and end forward and finish on the last line.
//!   Failing that check sets `question` on the result; nothing is corrected.
//!
//! The two eyes of a binocular recording are classified independently.

mod crossline;
mod fixations;
mod options;
pub mod runs;
mod saccades;
mod walker;

pub use crossline::{check_crossings, lines_from_crossings, CrossDirection, CrosslineEvent};
pub use fixations::FixationLineClassifier;
pub use options::LineOptions;
pub use runs::{merge_runs, Run, RunDirection, Step};
pub use saccades::SaccadeLineClassifier;

use crate::types::{FixationEvent, SaccadeEvent, SaccadeLine};
use serde::Serialize;

/// Result of classifying one event stream.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LineClassification {
    pub runs: usize,
    pub crossings: Vec<CrosslineEvent>,
    /// Set when the crossings fail the start/end consistency check.
    pub question: bool,
    pub warnings: Vec<String>,
}

/// Put every event on `line`; used for single-line stimuli.
pub fn assign_single_line(fixations: &mut [FixationEvent], saccades: &mut [SaccadeEvent], line: u32) {
    for fixation in fixations.iter_mut() {
        fixation.line = Some(line);
    }
    for saccade in saccades.iter_mut() {
        saccade.line = Some(SaccadeLine::Single(line));
    }
}

#[cfg(test)]
mod tests;
