//! Line-boundary anchors derived from the region map.
//!
//! For every pair of consecutive regions whose line numbers step up by one,
//! the centre of the last word of the earlier line and the centre of the first
//! word of the later line form an anchor. Anchors come out in line order and
//! the line classifiers walk them with a cursor.

use super::map::RegionMap;
use crate::error::StructuralError;
use nalgebra::Point2;
use serde::Serialize;

/// Geometry of one line break of the stimulus.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CrosslineAnchor {
    pub prev_line: u32,
    pub prev: Point2<f64>,
    pub next_line: u32,
    pub next: Point2<f64>,
}

impl CrosslineAnchor {
    pub fn prev_x(&self) -> f64 {
        self.prev.x
    }

    pub fn prev_y(&self) -> f64 {
        self.prev.y
    }

    pub fn next_x(&self) -> f64 {
        self.next.x
    }

    /// Horizontal distance from the end of the earlier line back to the
    /// start of the later one.
    pub fn span(&self) -> f64 {
        self.prev.x - self.next.x
    }

    /// Vertical distance between the two lines.
    pub fn line_spacing(&self) -> f64 {
        self.next.y - self.prev.y
    }
}

/// Collect the anchors of every line break, in line order.
pub fn extract_anchors(map: &RegionMap) -> Result<Vec<CrosslineAnchor>, StructuralError> {
    if map.is_empty() {
        return Err(StructuralError::EmptyRegionMap);
    }
    let anchors: Vec<CrosslineAnchor> = map
        .regions()
        .windows(2)
        .filter(|pair| pair[1].line == pair[0].line + 1)
        .map(|pair| CrosslineAnchor {
            prev_line: pair[0].line,
            prev: pair[0].center(),
            next_line: pair[1].line,
            next: pair[1].center(),
        })
        .collect();
    if anchors.is_empty() {
        return Err(StructuralError::NoLineBreaks);
    }
    Ok(anchors)
}
