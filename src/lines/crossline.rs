use crate::region::CrosslineAnchor;
use serde::Serialize;

/// Direction of a line change: `+1` onto the next line, `-1` back to the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "i8")]
pub enum CrossDirection {
    Forward,
    Backward,
}

impl CrossDirection {
    pub fn sign(self) -> i8 {
        match self {
            CrossDirection::Forward => 1,
            CrossDirection::Backward => -1,
        }
    }
}

impl From<CrossDirection> for i8 {
    fn from(direction: CrossDirection) -> Self {
        direction.sign()
    }
}

/// A fixation or saccade at which gaze changes lines.
///
/// For fixation streams `event_index` is the first fixation on the new line;
/// for saccade streams it is the saccade that makes the jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CrosslineEvent {
    pub direction: CrossDirection,
    pub start_line: u32,
    pub end_line: u32,
    pub event_index: usize,
}

/// Line of every fixation given the crossings found in its stream.
///
/// Fixations before the first crossing sit on `first_line`; each crossing
/// moves the current line to its `end_line` from `event_index` on.
pub fn lines_from_crossings(len: usize, first_line: u32, crossings: &[CrosslineEvent]) -> Vec<u32> {
    let mut lines = Vec::with_capacity(len);
    let mut pending = crossings.iter().peekable();
    let mut line = first_line;
    for idx in 0..len {
        while let Some(c) = pending.next_if(|c| c.event_index <= idx) {
            line = c.end_line;
        }
        lines.push(line);
    }
    lines
}

/// Consistency checks on a stream's crossings; one message per problem.
///
/// A complete reading starts and ends with forward crossings and finishes on
/// the last line of the text. Anything else is left for manual review.
pub fn check_crossings(crossings: &[CrosslineEvent], anchors: &[CrosslineAnchor]) -> Vec<String> {
    let mut problems = Vec::new();
    let (Some(first), Some(last)) = (crossings.first(), crossings.last()) else {
        problems.push("no crossline events found".to_string());
        return problems;
    };
    if first.direction == CrossDirection::Backward {
        problems.push(format!(
            "first crossline event (#{}) is backward {}->{}",
            first.event_index, first.start_line, first.end_line
        ));
    }
    if last.direction == CrossDirection::Backward {
        problems.push(format!(
            "last crossline event (#{}) is backward {}->{}",
            last.event_index, last.start_line, last.end_line
        ));
    }
    if let Some(final_anchor) = anchors.last() {
        if last.end_line != final_anchor.next_line {
            problems.push(format!(
                "reading ends on line {} instead of line {}",
                last.end_line, final_anchor.next_line
            ));
        }
    }
    problems
}
