//! Directional runs along the reading axis.
//!
//! Events are first reduced to [`Step`]s (a fixation stream yields one step
//! per consecutive pair, a saccade stream one step per saccade). Rightward
//! steps each form their own run; consecutive leftward steps collapse into a
//! single run spanning the whole leftward sweep, which is how a return sweep
//! to the next line usually shows up.

use crate::types::{FixationEvent, SaccadeEvent};
use nalgebra::Point2;
use serde::Serialize;

/// Movement of gaze from one position to the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub from: Point2<f64>,
    pub to: Point2<f64>,
}

impl Step {
    pub fn dx(&self) -> f64 {
        self.to.x - self.from.x
    }

    /// Positive when gaze moves down the screen.
    pub fn dy(&self) -> f64 {
        self.to.y - self.from.y
    }
}

/// Steps between consecutive fixations; step `k` lands on fixation `k + 1`.
pub fn fixation_steps(fixations: &[FixationEvent]) -> Vec<Step> {
    fixations
        .windows(2)
        .map(|pair| Step {
            from: pair[0].position(),
            to: pair[1].position(),
        })
        .collect()
}

/// One step per saccade; step `k` is saccade `k`.
pub fn saccade_steps(saccades: &[SaccadeEvent]) -> Vec<Step> {
    saccades
        .iter()
        .map(|s| Step {
            from: s.from_point(),
            to: s.to_point(),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RunDirection {
    Rightward = 0,
    Leftward = 1,
}

/// Maximal directional run over steps `first..=last`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Run {
    pub first: usize,
    pub last: usize,
    /// Net horizontal displacement from the start of `first` to the end of `last`.
    pub displacement: f64,
    pub direction: RunDirection,
}

impl Run {
    pub fn start(&self, steps: &[Step]) -> Point2<f64> {
        steps[self.first].from
    }

    pub fn end(&self, steps: &[Step]) -> Point2<f64> {
        steps[self.last].to
    }
}

/// Collapse steps into directional runs.
pub fn merge_runs(steps: &[Step]) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut idx = 0;
    while idx < steps.len() {
        if steps[idx].dx() > 0.0 {
            runs.push(Run {
                first: idx,
                last: idx,
                displacement: steps[idx].dx(),
                direction: RunDirection::Rightward,
            });
            idx += 1;
            continue;
        }
        let first = idx;
        while idx + 1 < steps.len() && steps[idx + 1].dx() <= 0.0 {
            idx += 1;
        }
        runs.push(Run {
            first,
            last: idx,
            displacement: steps[idx].to.x - steps[first].from.x,
            direction: RunDirection::Leftward,
        });
        idx += 1;
    }
    runs
}
