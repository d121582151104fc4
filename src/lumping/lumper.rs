use super::options::LumpOptions;
use crate::error::LumpError;
use crate::types::FixationEvent;
use log::debug;
use nalgebra::{distance, Vector3};

/// Running sums of the raw fixations folded into one slot.
#[derive(Clone, Copy, Debug)]
struct Accumulator {
    /// (x, y, pupil size)
    sum: Vector3<f64>,
    count: usize,
}

impl Accumulator {
    fn of(fix: &FixationEvent) -> Self {
        Self {
            sum: Vector3::new(fix.x, fix.y, fix.pupil_size),
            count: 1,
        }
    }

    fn absorb(&mut self, other: Accumulator) {
        self.sum += other.sum;
        self.count += other.count;
    }

    fn mean(&self) -> Vector3<f64> {
        self.sum / self.count as f64
    }
}

/// Arena entry: one fixation of the stream plus its merge state.
struct Slot {
    fix: FixationEvent,
    acc: Accumulator,
    /// End time of the last raw fixation folded in, before timing correction.
    raw_end: f64,
    alive: bool,
}

/// Result of one lumping pass.
#[derive(Clone, Debug)]
pub struct LumpOutcome {
    pub fixations: Vec<FixationEvent>,
    /// Number of pairwise merges performed.
    pub merges: usize,
    /// Fixations newly marked invalid for being too short.
    pub invalidated: usize,
}

/// Merges short fixations of a single eye into their neighbours.
pub struct FixationLumper {
    options: LumpOptions,
    /// Added once to the end of every lumped fixation (one sample, in ms).
    correction: f64,
}

impl FixationLumper {
    pub fn new(options: LumpOptions, sample_period_ms: f64) -> Self {
        Self {
            options,
            correction: sample_period_ms,
        }
    }

    /// Lump a time-ordered fixation stream of one eye.
    ///
    /// Candidates are processed left to right. A candidate first swallows the
    /// run of short fixations that immediately follows it. If it swallowed at
    /// least one and is still short, it merges with the closer qualifying
    /// neighbour, then re-checks the other side. A lone candidate only tries
    /// the following fixation, or the preceding one when it ends the stream.
    pub fn lump(&self, fixations: Vec<FixationEvent>) -> Result<LumpOutcome, LumpError> {
        let input_len = fixations.len();
        let mut slots: Vec<Slot> = fixations
            .into_iter()
            .map(|fix| Slot {
                acc: Accumulator::of(&fix),
                raw_end: fix.end,
                fix,
                alive: true,
            })
            .collect();

        let candidates: Vec<usize> = slots
            .iter()
            .enumerate()
            .filter(|(_, s)| self.is_short(&s.fix))
            .map(|(i, _)| i)
            .collect();

        let mut merges = 0usize;
        for &idx in &candidates {
            if !slots[idx].alive || !self.is_short(&slots[idx].fix) {
                continue;
            }

            let mut swallowed_run = false;
            while let Some(next) = next_alive(&slots, idx) {
                if !self.is_short(&slots[next].fix) || !self.within_reach(&slots, idx, next) {
                    break;
                }
                self.merge(&mut slots, idx, next)?;
                merges += 1;
                swallowed_run = true;
            }

            if swallowed_run {
                if self.is_short(&slots[idx].fix) {
                    merges += self.merge_with_neighbours(&mut slots, idx)?;
                }
            } else {
                let target = match (prev_alive(&slots, idx), next_alive(&slots, idx)) {
                    (Some(prev), None) => Some((prev, idx)),
                    (_, Some(next)) => Some((idx, next)),
                    (None, None) => None,
                };
                if let Some((earlier, later)) = target {
                    if self.within_reach(&slots, earlier, later) {
                        self.merge(&mut slots, earlier, later)?;
                        merges += 1;
                    }
                }
            }
        }

        let mut invalidated = 0usize;
        let fixations: Vec<FixationEvent> = slots
            .into_iter()
            .filter(|s| s.alive)
            .map(|s| {
                let mut fix = s.fix;
                if fix.valid && fix.duration < self.options.min_valid_duration {
                    fix.valid = false;
                    invalidated += 1;
                }
                fix
            })
            .collect();

        debug!(
            "FixationLumper: input={} output={} merges={} invalidated={}",
            input_len,
            fixations.len(),
            merges,
            invalidated
        );
        Ok(LumpOutcome {
            fixations,
            merges,
            invalidated,
        })
    }

    fn is_short(&self, fix: &FixationEvent) -> bool {
        fix.valid && fix.duration <= self.options.lump_duration_threshold
    }

    fn within_reach(&self, slots: &[Slot], a: usize, b: usize) -> bool {
        self.gap(slots, a, b) <= self.options.lump_distance_threshold
    }

    fn gap(&self, slots: &[Slot], a: usize, b: usize) -> f64 {
        distance(&slots[a].fix.position(), &slots[b].fix.position())
    }

    /// Merge a still-short representative with the closer qualifying
    /// neighbour, then give the other side one more chance.
    fn merge_with_neighbours(&self, slots: &mut [Slot], idx: usize) -> Result<usize, LumpError> {
        let reach = self.options.lump_distance_threshold;
        let prev = prev_alive(slots, idx).filter(|&p| self.gap(slots, p, idx) <= reach);
        let next = next_alive(slots, idx).filter(|&n| self.gap(slots, idx, n) <= reach);

        let rep = match (prev, next) {
            (None, None) => return Ok(0),
            (Some(p), Some(n)) if self.gap(slots, p, idx) < self.gap(slots, idx, n) => {
                self.merge(slots, p, idx)?;
                p
            }
            (Some(p), None) => {
                self.merge(slots, p, idx)?;
                p
            }
            (_, Some(n)) => {
                self.merge(slots, idx, n)?;
                idx
            }
        };

        // The side left out gets one more chance while the result is short.
        let other_side = match (prev, next) {
            (Some(p), _) if rep == idx => Some((p, idx)),
            (_, Some(n)) if rep != idx => Some((rep, n)),
            _ => None,
        };
        if let Some((earlier, later)) = other_side {
            if self.is_short(&slots[rep].fix) && self.within_reach(slots, earlier, later) {
                self.merge(slots, earlier, later)?;
                return Ok(2);
            }
        }
        Ok(1)
    }

    /// Fold `later` into `earlier`; `earlier` survives.
    fn merge(&self, slots: &mut [Slot], earlier: usize, later: usize) -> Result<(), LumpError> {
        let (earlier_start, later_start) = (slots[earlier].fix.start, slots[later].fix.start);
        if later <= earlier || later_start < earlier_start {
            return Err(LumpError::OutOfOrder {
                earlier,
                later,
                earlier_start,
                later_start,
            });
        }
        let absorbed_acc = slots[later].acc;
        let absorbed_end = slots[later].raw_end;
        slots[later].alive = false;

        let keep = &mut slots[earlier];
        keep.acc.absorb(absorbed_acc);
        keep.raw_end = keep.raw_end.max(absorbed_end);
        let mean = keep.acc.mean();
        keep.fix.x = mean.x;
        keep.fix.y = mean.y;
        keep.fix.pupil_size = mean.z;
        keep.fix.end = keep.raw_end + self.correction;
        keep.fix.duration = keep.fix.end - keep.fix.start;
        Ok(())
    }
}

fn next_alive(slots: &[Slot], idx: usize) -> Option<usize> {
    (idx + 1..slots.len()).find(|&i| slots[i].alive)
}

fn prev_alive(slots: &[Slot], idx: usize) -> Option<usize> {
    (0..idx).rev().find(|&i| slots[i].alive)
}
