use serde::{Deserialize, Serialize};

/// Thresholds of the fixation lumper.
///
/// - `lump_duration_threshold`: fixations no longer than this (ms) are merge
///   candidates.
/// - `lump_distance_threshold`: maximum Euclidean distance (px) between two
///   fixations that may be merged.
/// - `min_valid_duration`: fixations still shorter than this after lumping are
///   marked invalid.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LumpOptions {
    pub lump_duration_threshold: f64,
    pub lump_distance_threshold: f64,
    pub min_valid_duration: f64,
}

impl Default for LumpOptions {
    fn default() -> Self {
        Self {
            lump_duration_threshold: 50.0,
            lump_distance_threshold: 50.0,
            min_valid_duration: 50.0,
        }
    }
}
