//! Fixation lumping.
//!
//! Very short fixations are usually tracker artefacts or fragments of one
//! physical fixation split by a micro-saccade. The lumper merges them with
//! nearby neighbours, producing one fixation whose span covers the merged
//! pieces (plus one sample of timing correction) and whose position and pupil
//! size are the means of the pieces. Whatever is still too short afterwards is
//! kept in the stream but marked invalid.
//!
//! Each eye is lumped on its own; the stream order never changes, merged-away
//! entries are simply dropped.

mod lumper;
mod options;

pub use lumper::{FixationLumper, LumpOutcome};
pub use options::LumpOptions;
