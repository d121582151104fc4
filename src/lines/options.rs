use serde::{Deserialize, Serialize};

/// Ratios and gates of the crossline detectors.
///
/// Both ratios are relative to the horizontal span of the current line
/// break, i.e. the distance from the centre of the last word of a line back
/// to the centre of the first word of the next one.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    /// Fraction of the span a run must cover to count as a line change.
    pub diff_ratio: f64,
    /// Fraction of the span around the line start where a backward jump may begin.
    pub frontrange_ratio: f64,
    /// Upward movement (px) that marks a return to the previous line once the
    /// last line has been reached.
    pub y_range: f64,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            diff_ratio: 0.6,
            frontrange_ratio: 0.2,
            y_range: 60.0,
        }
    }
}
