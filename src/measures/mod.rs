//! Reading measures per word region and per trial.
//!
//! For each region the calculator finds the first valid fixation on it and
//! derives:
//! - first pass: time/count of the uninterrupted visit, first-fixation
//!   duration and character offset, spill-over onto the next fixation;
//! - first-pass regression: whether first pass was left towards earlier
//!   text, and where it landed;
//! - regression path: everything from first-pass exit until gaze moves past
//!   the region (to the end of the stream for the last region);
//! - second pass: later returns to the region.
//!
//! Missing values stay `None`. The "no regression" case uses explicit
//! sentinels instead: region `0` and a character offset equal to the text
//! length.

mod region;
mod trial;

pub use region::{ReadingMeasureCalculator, RegionMeasure};
pub use trial::TrialMeasures;

#[cfg(test)]
mod tests;
