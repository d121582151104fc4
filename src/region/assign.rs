use super::map::RegionMap;
use crate::types::FixationEvent;
use log::debug;

/// Outcome of looking up the word under a fixation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionMatch {
    Unique(u32),
    /// Fixation has no line yet, or no region on its line contains it.
    None,
    /// More than one region contains it (shared word boundary).
    Ambiguous,
}

/// Find the region on `line` whose expanded horizontal extent contains `x`.
pub fn match_region(map: &RegionMap, line: u32, x: f64) -> RegionMatch {
    let mut found = None;
    for region in map.on_line(line) {
        if region.contains_x(x) {
            if found.is_some() {
                return RegionMatch::Ambiguous;
            }
            found = Some(region.id);
        }
    }
    found.map_or(RegionMatch::None, RegionMatch::Unique)
}

/// Counts from one assignment pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssignmentCounts {
    pub assigned: usize,
    pub unmatched: usize,
    pub ambiguous: usize,
}

/// Fill `region_id` on every fixation with a resolved line.
///
/// Ambiguous or out-of-bounds fixations keep `None`; nothing is guessed.
pub fn assign_regions(map: &RegionMap, fixations: &mut [FixationEvent]) -> AssignmentCounts {
    let mut counts = AssignmentCounts::default();
    for fixation in fixations.iter_mut() {
        let found = match fixation.line {
            Some(line) => match_region(map, line, fixation.x),
            None => RegionMatch::None,
        };
        fixation.region_id = match found {
            RegionMatch::Unique(id) => {
                counts.assigned += 1;
                Some(id)
            }
            RegionMatch::None => {
                counts.unmatched += 1;
                None
            }
            RegionMatch::Ambiguous => {
                counts.ambiguous += 1;
                None
            }
        };
    }
    debug!(
        "RegionAssigner: assigned={} unmatched={} ambiguous={}",
        counts.assigned, counts.unmatched, counts.ambiguous
    );
    counts
}
