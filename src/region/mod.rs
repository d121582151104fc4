//! Word regions of the stimulus text.
//!
//! - [`RegionMap`]: ordered, validated word regions with line numbers and
//!   bounding boxes. Built once per stimulus, read-only afterwards.
//! - [`extract_anchors`]: one [`CrosslineAnchor`] per line break.
//! - [`assign_regions`]: attach the enclosing word to each line-resolved
//!   fixation.

mod anchors;
mod assign;
mod map;
mod options;
mod word;

pub use anchors::{extract_anchors, CrosslineAnchor};
pub use assign::{assign_regions, match_region, AssignmentCounts, RegionMatch};
pub use map::RegionMap;
pub use options::RegionOptions;
pub use word::{WordBox, WordRegion, NO_REGION};
