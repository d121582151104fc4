use super::crossline::{CrossDirection, CrosslineEvent};
use super::options::LineOptions;
use super::runs::{merge_runs, Run, RunDirection, Step};
use crate::region::CrosslineAnchor;
use log::debug;

/// A line change located on the step sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct StepCrossing {
    pub direction: CrossDirection,
    pub start_line: u32,
    pub end_line: u32,
    pub step: usize,
}

impl StepCrossing {
    pub fn into_event(self, event_index: usize) -> CrosslineEvent {
        CrosslineEvent {
            direction: self.direction,
            start_line: self.start_line,
            end_line: self.end_line,
            event_index,
        }
    }
}

/// Walks directional runs against the line-break anchors.
///
/// The anchor cursor points at the next line break to cross: it moves
/// forward by one on every forward crossing and back by one on every
/// backward crossing. Once every break has been crossed the walker only
/// watches for returns to the previous line.
pub(crate) struct CrosslineWalker<'a> {
    anchors: &'a [CrosslineAnchor],
    options: LineOptions,
}

impl<'a> CrosslineWalker<'a> {
    pub fn new(anchors: &'a [CrosslineAnchor], options: LineOptions) -> Self {
        Self { anchors, options }
    }

    pub fn first_line(&self) -> Option<u32> {
        self.anchors.first().map(|a| a.prev_line)
    }

    pub fn anchors(&self) -> &'a [CrosslineAnchor] {
        self.anchors
    }

    /// Return the runs and the crossings found over `steps`.
    pub fn walk(&self, steps: &[Step]) -> (Vec<Run>, Vec<StepCrossing>) {
        let runs = merge_runs(steps);
        let mut crossings = Vec::new();
        if self.anchors.is_empty() {
            return (runs, crossings);
        }

        let mut cursor = 0usize;
        for run in &runs {
            let past_last_break = cursor == self.anchors.len();

            let backward = match run.direction {
                RunDirection::Rightward => {
                    if cursor == 0 {
                        continue;
                    }
                    // Going back means undoing the break crossed last.
                    let crossed = &self.anchors[cursor - 1];
                    let span = crossed.span();
                    let start = run.start(steps);
                    let near_line_start =
                        (start.x - crossed.next_x()).abs() <= self.options.frontrange_ratio * span;
                    (run.displacement > self.options.diff_ratio * span && near_line_start)
                        || (past_last_break && self.rises_past_y_range(steps, run))
                }
                // Nothing is left to cross forward; only a climb can still go back.
                RunDirection::Leftward if past_last_break => self.rises_past_y_range(steps, run),
                RunDirection::Leftward => {
                    let anchor = &self.anchors[cursor];
                    let threshold = self.options.diff_ratio * anchor.span();
                    if run.displacement < -threshold {
                        crossings.push(StepCrossing {
                            direction: CrossDirection::Forward,
                            start_line: anchor.prev_line,
                            end_line: anchor.next_line,
                            step: self.locate_forward_step(steps, run, anchor, threshold),
                        });
                        cursor += 1;
                    }
                    false
                }
            };

            if backward {
                cursor -= 1;
                let target = &self.anchors[cursor];
                crossings.push(StepCrossing {
                    direction: CrossDirection::Backward,
                    start_line: target.next_line,
                    end_line: target.prev_line,
                    step: run.first,
                });
            }
        }

        debug!(
            "CrosslineWalker: steps={} runs={} crossings={} final_cursor={}",
            steps.len(),
            runs.len(),
            crossings.len(),
            cursor
        );
        (runs, crossings)
    }

    /// Upward travel of `run` beyond `y_range`, in screen coordinates.
    fn rises_past_y_range(&self, steps: &[Step], run: &Run) -> bool {
        run.start(steps).y - run.end(steps).y > self.options.y_range
    }

    /// Step inside a leftward run where the line actually changes.
    ///
    /// Prefers the first single step that by itself clears the threshold.
    /// Otherwise compares the step with the largest leftward move against the
    /// step with the largest downward move, each relative to the anchor's
    /// span and line spacing; the horizontal candidate wins ties.
    fn locate_forward_step(
        &self,
        steps: &[Step],
        run: &Run,
        anchor: &CrosslineAnchor,
        threshold: f64,
    ) -> usize {
        let range = run.first..=run.last;
        if let Some(big_jump) = range.clone().find(|&k| steps[k].dx() < -threshold) {
            return big_jump;
        }

        let mut horizontal = run.first;
        let mut vertical = run.first;
        for k in range {
            if steps[k].dx() < steps[horizontal].dx() {
                horizontal = k;
            }
            if steps[k].dy() > steps[vertical].dy() {
                vertical = k;
            }
        }
        if horizontal == vertical {
            return horizontal;
        }

        let span = anchor.span();
        let spacing = anchor.line_spacing();
        if span <= 0.0 || spacing <= 0.0 {
            return horizontal;
        }
        let horizontal_score = -steps[horizontal].dx() / span;
        let vertical_score = steps[vertical].dy() / spacing;
        if vertical_score > horizontal_score {
            vertical
        } else {
            horizontal
        }
    }
}
