use crate::region::{RegionMap, WordRegion, NO_REGION};
use crate::types::FixationEvent;
use serde::Serialize;

/// Reading measures of one word region.
///
/// `None` means "no such event" and serializes as `null`; it is never
/// folded into `0`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionMeasure {
    pub region_id: u32,
    pub text: String,
    pub line: u32,
    /// First-pass reading time.
    pub fpurt: Option<f64>,
    pub fpcount: Option<u32>,
    /// 1 if first pass ended with a regression, 0 otherwise.
    pub fpregres: Option<u8>,
    /// Region the first-pass regression landed in (0 when there was none).
    pub fpregreg: Option<u32>,
    /// Text character the first-pass regression landed on (text length when there was none).
    pub fpregchr: Option<u32>,
    /// Character offset of the first fixation inside the word.
    pub ffos: Option<u32>,
    pub ffixurt: Option<f64>,
    /// Duration of the fixation right after first pass.
    pub spilover: Option<f64>,
    /// Regression-path reading time (includes first pass).
    pub rpurt: Option<f64>,
    pub rpcount: Option<u32>,
    /// Left-most region reached on the regression path.
    pub rpregreg: Option<u32>,
    pub rpregchr: Option<u32>,
    /// Second-pass reading time.
    pub spurt: Option<f64>,
    pub spcount: Option<u32>,
}

impl RegionMeasure {
    fn unvisited(region: &WordRegion) -> Self {
        Self {
            region_id: region.id,
            text: region.text.clone(),
            line: region.line,
            fpurt: None,
            fpcount: None,
            fpregres: None,
            fpregreg: None,
            fpregchr: None,
            ffos: None,
            ffixurt: None,
            spilover: None,
            rpurt: None,
            rpcount: None,
            rpregreg: None,
            rpregchr: None,
            spurt: None,
            spcount: None,
        }
    }
}

fn nonzero_f64(v: f64) -> Option<f64> {
    (v != 0.0).then_some(v)
}

fn nonzero_u32(v: u32) -> Option<u32> {
    (v != 0).then_some(v)
}

/// Computes per-region reading measures for one eye's classified stream.
pub struct ReadingMeasureCalculator<'a> {
    map: &'a RegionMap,
}

impl<'a> ReadingMeasureCalculator<'a> {
    pub fn new(map: &'a RegionMap) -> Self {
        Self { map }
    }

    /// One record per region, in reading order.
    pub fn region_measures(&self, fixations: &[FixationEvent]) -> Vec<RegionMeasure> {
        self.map
            .regions()
            .iter()
            .enumerate()
            .map(|(idx, region)| self.measure_region(idx, region, fixations))
            .collect()
    }

    fn measure_region(&self, idx: usize, region: &WordRegion, fixations: &[FixationEvent]) -> RegionMeasure {
        let in_region = |f: &FixationEvent| f.region_id == Some(region.id);
        let Some(first) = fixations.iter().position(|f| f.valid && in_region(f)) else {
            return RegionMeasure::unvisited(region);
        };

        let mut fpurt = 0.0;
        let mut fpcount = 0u32;
        let mut exit = first;
        while exit < fixations.len() && in_region(&fixations[exit]) {
            if fixations[exit].valid {
                fpurt += fixations[exit].duration;
                fpcount += 1;
            }
            exit += 1;
        }

        let mut measure = RegionMeasure::unvisited(region);
        measure.fpurt = nonzero_f64(fpurt);
        measure.fpcount = nonzero_u32(fpcount);
        measure.ffixurt = nonzero_f64(fixations[first].duration);
        measure.ffos = Some(region.char_index(fixations[first].x));

        let after = fixations.get(exit).filter(|f| f.valid);
        measure.spilover = after.and_then(|f| nonzero_f64(f.duration));

        match after.filter(|f| lands_before(f, region)) {
            Some(back) => {
                measure.fpregres = Some(1);
                measure.fpregreg = back.region_id;
                measure.fpregchr = back.region_id.and_then(|id| self.map.char_offset(id, back.x));

                let last_region = idx + 1 == self.map.len();
                let mut rp_duration = 0.0;
                let mut rp_count = 0u32;
                let mut leftmost: Option<(u32, u32)> = None;
                for f in &fixations[exit..] {
                    if !last_region && self.reaches_beyond(f, idx, region) {
                        break;
                    }
                    if !f.valid {
                        continue;
                    }
                    rp_duration += f.duration;
                    rp_count += 1;
                    if let Some(id) = f.region_id {
                        if let Some(offset) = self.map.char_offset(id, f.x) {
                            if leftmost.map_or(true, |(best, _)| offset < best) {
                                leftmost = Some((offset, id));
                            }
                        }
                    }
                }
                measure.rpurt = nonzero_f64(fpurt + rp_duration);
                measure.rpcount = Some(rp_count);
                measure.rpregreg = leftmost.map(|(_, id)| id);
                measure.rpregchr = leftmost.map(|(offset, _)| offset);
            }
            None => {
                measure.fpregres = Some(0);
                measure.fpregreg = Some(NO_REGION);
                measure.fpregchr = Some(self.map.text_length());
                measure.rpurt = measure.fpurt;
                measure.rpcount = Some(0);
                measure.rpregreg = Some(NO_REGION);
                measure.rpregchr = Some(self.map.text_length());
            }
        }

        let (spurt, spcount) = fixations[exit..]
            .iter()
            .filter(|f| f.valid && in_region(f))
            .fold((0.0, 0u32), |(d, c), f| (d + f.duration, c + 1));
        measure.spurt = nonzero_f64(spurt);
        measure.spcount = nonzero_u32(spcount);
        measure
    }

    /// True once gaze has moved past `region` in reading order.
    fn reaches_beyond(&self, f: &FixationEvent, idx: usize, region: &WordRegion) -> bool {
        if let Some(pos) = f.region_id.and_then(|id| self.map.index_of(id)) {
            return pos > idx;
        }
        match f.line {
            Some(line) => line > region.line || (line == region.line && f.x > region.expanded_x2),
            None => false,
        }
    }
}

/// Earlier line, or same line left of the word start.
fn lands_before(f: &FixationEvent, region: &WordRegion) -> bool {
    match f.line {
        Some(line) => line < region.line || (line == region.line && f.x < region.x1),
        None => false,
    }
}
