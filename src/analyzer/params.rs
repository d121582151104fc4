//! Parameters of the trial analyzer.
//!
//! One struct per stage, gathered in [`AnalysisParams`]. Defaults follow the
//! usual reading-research settings: 50 ms / 50 px lumping, a 0.6 span ratio
//! for line changes and the trial's final fixation excluded from measures.

use crate::lines::LineOptions;
use crate::lumping::LumpOptions;
use crate::region::RegionOptions;
use serde::{Deserialize, Serialize};

/// Analyzer-wide parameters controlling every stage.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// Short-fixation merging.
    pub lumping: LumpOptions,
    /// Crossline detection for fixations and saccades.
    pub lines: LineOptions,
    /// Word region construction from layout boxes.
    pub regions: RegionOptions,
    /// Keep the final fixation of each eye valid. It usually overlaps the
    /// button press that ends the trial, so it is dropped by default.
    pub include_last_fixation: bool,
}
