use super::options::RegionOptions;
use super::word::{WordBox, WordRegion, NO_REGION};
use crate::error::StructuralError;
use serde::Serialize;
use std::collections::HashMap;

/// Ordered, validated collection of the word regions of one stimulus.
///
/// Immutable once built; every trial showing the stimulus reads the same map.
#[derive(Clone, Debug, Serialize)]
pub struct RegionMap {
    regions: Vec<WordRegion>,
    #[serde(skip)]
    index_by_id: HashMap<u32, usize>,
    /// Character offset of each region's first character within the text.
    #[serde(skip)]
    char_starts: Vec<u32>,
    text_length: u32,
}

impl RegionMap {
    /// Validate already-built regions.
    pub fn new(regions: Vec<WordRegion>) -> Result<Self, StructuralError> {
        if regions.is_empty() {
            return Err(StructuralError::EmptyRegionMap);
        }
        let mut index_by_id = HashMap::with_capacity(regions.len());
        let mut char_starts = Vec::with_capacity(regions.len());
        let mut text_length = 0u32;
        let mut previous_line: Option<u32> = None;
        for (idx, region) in regions.iter().enumerate() {
            validate_region(region)?;
            if let Some(previous) = previous_line {
                if region.line < previous {
                    return Err(StructuralError::NonMonotonicLines {
                        id: region.id,
                        line: region.line,
                        previous,
                    });
                }
            }
            previous_line = Some(region.line);
            if index_by_id.insert(region.id, idx).is_some() {
                return Err(StructuralError::DuplicateRegionId(region.id));
            }
            char_starts.push(text_length);
            text_length += region.length;
        }
        Ok(Self {
            regions,
            index_by_id,
            char_starts,
            text_length,
        })
    }

    /// Build regions from renderer boxes: ids are assigned from 1 in reading
    /// order and the line-edge words get their expanded margins.
    pub fn from_boxes(boxes: Vec<WordBox>, options: &RegionOptions) -> Result<Self, StructuralError> {
        let count = boxes.len();
        let lines: Vec<u32> = boxes.iter().map(|b| b.line).collect();
        let mut regions = Vec::with_capacity(count);
        for (idx, word) in boxes.into_iter().enumerate() {
            let length = word.text.chars().count() as u32;
            let first_on_line = idx == 0 || lines[idx - 1] != word.line;
            let last_on_line = idx + 1 == count || lines[idx + 1] != word.line;
            let char_width = if length > 0 {
                (word.x2 - word.x1) / length as f64
            } else {
                0.0
            };
            let margin = char_width * options.expand_chars as f64;
            regions.push(WordRegion {
                id: idx as u32 + 1,
                text: word.text,
                line: word.line,
                length,
                x1: word.x1,
                y1: word.y1,
                x2: word.x2,
                y2: word.y2,
                expanded_x1: if first_on_line { word.x1 - margin } else { word.x1 },
                expanded_x2: if last_on_line { word.x2 + margin } else { word.x2 },
            });
        }
        Self::new(regions)
    }

    pub fn regions(&self) -> &[WordRegion] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&WordRegion> {
        self.index_of(id).map(|idx| &self.regions[idx])
    }

    /// Reading-order position of a region.
    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    pub fn first_line(&self) -> u32 {
        self.regions[0].line
    }

    pub fn last_line(&self) -> u32 {
        self.regions[self.regions.len() - 1].line
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        let mut count = 1;
        for pair in self.regions.windows(2) {
            if pair[1].line != pair[0].line {
                count += 1;
            }
        }
        count
    }

    pub fn on_line(&self, line: u32) -> impl Iterator<Item = &WordRegion> + '_ {
        self.regions.iter().filter(move |r| r.line == line)
    }

    /// Total character count of the text; used as the "no regression" sentinel.
    pub fn text_length(&self) -> u32 {
        self.text_length
    }

    /// Offset of horizontal position `x` within the whole text, given the
    /// region it falls in.
    pub fn char_offset(&self, id: u32, x: f64) -> Option<u32> {
        let idx = self.index_of(id)?;
        Some(self.char_starts[idx] + self.regions[idx].char_index(x))
    }
}

fn validate_region(region: &WordRegion) -> Result<(), StructuralError> {
    let invalid = |reason: &str| StructuralError::InvalidRegion {
        id: region.id,
        reason: reason.to_string(),
    };
    if region.id == NO_REGION {
        return Err(invalid("id 0 is reserved"));
    }
    if region.length == 0 {
        return Err(invalid("zero character length"));
    }
    let coords = [
        region.x1,
        region.y1,
        region.x2,
        region.y2,
        region.expanded_x1,
        region.expanded_x2,
    ];
    if coords.iter().any(|v| !v.is_finite()) {
        return Err(invalid("non-finite coordinate"));
    }
    if region.x2 <= region.x1 || region.y2 < region.y1 {
        return Err(invalid("empty bounding box"));
    }
    if region.expanded_x1 > region.x1 || region.expanded_x2 < region.x2 {
        return Err(invalid("expanded bounds shrink the box"));
    }
    Ok(())
}
