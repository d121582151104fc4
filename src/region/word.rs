use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Sentinel region id meaning "no region".
pub const NO_REGION: u32 = 0;

/// Layout box of one word as produced by the stimulus renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordBox {
    pub text: String,
    pub line: u32,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// One word of the stimulus with its on-screen footprint.
///
/// `expanded_x1`/`expanded_x2` equal `x1`/`x2` except on the first and last
/// word of a line, where they reach out by a few character widths so that
/// overshooting fixations still land in a word.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordRegion {
    pub id: u32,
    pub text: String,
    pub line: u32,
    pub length: u32,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub expanded_x1: f64,
    pub expanded_x2: f64,
}

impl WordRegion {
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn expanded_width(&self) -> f64 {
        self.expanded_x2 - self.expanded_x1
    }

    /// Average character width of the rendered word.
    pub fn char_width(&self) -> f64 {
        if self.length == 0 {
            return self.width();
        }
        self.width() / self.length as f64
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(0.5 * (self.x1 + self.x2), 0.5 * (self.y1 + self.y2))
    }

    pub fn contains_x(&self, x: f64) -> bool {
        self.expanded_x1 <= x && x <= self.expanded_x2
    }

    /// Zero-based character index of `x` inside this word, clamped to the word.
    pub fn char_index(&self, x: f64) -> u32 {
        let width = self.expanded_width();
        if self.length == 0 || width <= 0.0 {
            return 0;
        }
        let raw = ((x - self.expanded_x1) / width * self.length as f64).ceil() as i64 - 1;
        raw.clamp(0, self.length as i64 - 1) as u32
    }
}
