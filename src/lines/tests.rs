use super::*;
use crate::region::CrosslineAnchor;
use crate::types::{Eye, FixationEvent, SaccadeEvent, SaccadeLine};
use nalgebra::Point2;

/// Line 1 at y=115, line 2 at y=180; text from x~86 to ~300.
/// span = 170, threshold = 102, front range = 34.
fn two_line_anchors() -> Vec<CrosslineAnchor> {
    vec![CrosslineAnchor {
        prev_line: 1,
        prev: Point2::new(280.0, 115.0),
        next_line: 2,
        next: Point2::new(110.0, 180.0),
    }]
}

fn fixations(points: &[(f64, f64)]) -> Vec<FixationEvent> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let start = i as f64 * 250.0;
            FixationEvent::new(Eye::Right, start, start + 200.0, x, y, 800.0)
        })
        .collect()
}

fn saccades(moves: &[((f64, f64), (f64, f64))]) -> Vec<SaccadeEvent> {
    moves
        .iter()
        .enumerate()
        .map(|(i, &(from, to))| {
            let start = i as f64 * 250.0 + 200.0;
            SaccadeEvent::new(Eye::Right, start, start + 40.0, from, to, 2.0, 150.0)
        })
        .collect()
}

fn step(x0: f64, x1: f64) -> Step {
    Step {
        from: Point2::new(x0, 0.0),
        to: Point2::new(x1, 0.0),
    }
}

#[test]
fn runs_collapse_leftward_sweeps_only() {
    let steps = vec![
        step(100.0, 110.0),
        step(110.0, 130.0),
        step(130.0, 125.0),
        step(125.0, 95.0),
        step(95.0, 110.0),
        step(110.0, 10.0),
    ];
    let runs = merge_runs(&steps);
    let summary: Vec<(usize, usize, RunDirection)> =
        runs.iter().map(|r| (r.first, r.last, r.direction)).collect();
    assert_eq!(
        summary,
        vec![
            (0, 0, RunDirection::Rightward),
            (1, 1, RunDirection::Rightward),
            (2, 3, RunDirection::Leftward),
            (4, 4, RunDirection::Rightward),
            (5, 5, RunDirection::Leftward),
        ]
    );
    assert_eq!(runs[2].displacement, 95.0 - 130.0);
}

#[test]
fn stationary_step_joins_a_leftward_run() {
    let runs = merge_runs(&[step(100.0, 100.0), step(100.0, 80.0)]);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].direction, RunDirection::Leftward);
}

#[test]
fn return_sweep_is_a_forward_crossing() {
    let anchors = two_line_anchors();
    let mut fix = fixations(&[
        (100.0, 115.0),
        (150.0, 115.0),
        (200.0, 115.0),
        (250.0, 115.0),
        (290.0, 115.0),
        (90.0, 180.0),
        (140.0, 180.0),
        (200.0, 180.0),
    ]);
    let result = FixationLineClassifier::new(&anchors, LineOptions::default()).classify(&mut fix);
    assert_eq!(
        result.crossings,
        vec![CrosslineEvent {
            direction: CrossDirection::Forward,
            start_line: 1,
            end_line: 2,
            event_index: 5,
        }]
    );
    let lines: Vec<Option<u32>> = fix.iter().map(|f| f.line).collect();
    assert_eq!(
        lines,
        vec![Some(1), Some(1), Some(1), Some(1), Some(1), Some(2), Some(2), Some(2)]
    );
    assert!(!result.question, "warnings: {:?}", result.warnings);
}

#[test]
fn jump_back_from_line_start_is_a_backward_crossing() {
    let anchors = two_line_anchors();
    let mut fix = fixations(&[
        (100.0, 115.0),
        (160.0, 115.0),
        (220.0, 115.0),
        (280.0, 115.0),
        (95.0, 180.0),
        (270.0, 115.0),
        (110.0, 180.0),
        (170.0, 180.0),
        (230.0, 180.0),
    ]);
    let result = FixationLineClassifier::new(&anchors, LineOptions::default()).classify(&mut fix);
    let kinds: Vec<(i8, u32, u32, usize)> = result
        .crossings
        .iter()
        .map(|c| (c.direction.sign(), c.start_line, c.end_line, c.event_index))
        .collect();
    assert_eq!(kinds, vec![(1, 1, 2, 4), (-1, 2, 1, 5), (1, 1, 2, 6)]);
    let lines: Vec<u32> = fix.iter().map(|f| f.line.unwrap()).collect();
    assert_eq!(lines, vec![1, 1, 1, 1, 2, 1, 2, 2, 2]);
    assert_eq!(lines, lines_from_crossings(fix.len(), 1, &result.crossings));
    assert!(!result.question);
}

#[test]
fn rising_back_after_the_last_break_uses_the_vertical_gate() {
    let anchors = two_line_anchors();
    let mut fix = fixations(&[
        (100.0, 115.0),
        (200.0, 115.0),
        (290.0, 115.0),
        (95.0, 180.0),
        (150.0, 180.0),
        (200.0, 180.0),
        (250.0, 115.0),
    ]);
    let result = FixationLineClassifier::new(&anchors, LineOptions::default()).classify(&mut fix);
    assert_eq!(result.crossings.len(), 2);
    assert_eq!(result.crossings[1].direction, CrossDirection::Backward);
    assert_eq!(result.crossings[1].event_index, 6);
    assert_eq!(fix[6].line, Some(1));
    // Ends backward and on line 1: flagged for review, not corrected.
    assert!(result.question);
    assert_eq!(result.warnings.len(), 2, "warnings: {:?}", result.warnings);
}

#[test]
fn leftward_climb_after_the_last_break_is_backward() {
    let anchors = two_line_anchors();
    let mut fix = fixations(&[
        (100.0, 115.0),
        (200.0, 115.0),
        (290.0, 115.0),
        (95.0, 180.0),
        (150.0, 180.0),
        (200.0, 180.0),
        (120.0, 115.0),
        (160.0, 115.0),
    ]);
    let result = FixationLineClassifier::new(&anchors, LineOptions::default()).classify(&mut fix);
    let summary: Vec<_> = result
        .crossings
        .iter()
        .map(|c| (c.direction, c.start_line, c.end_line, c.event_index))
        .collect();
    assert_eq!(
        summary,
        vec![
            (CrossDirection::Forward, 1, 2, 3),
            (CrossDirection::Backward, 2, 1, 6),
        ]
    );
    let lines: Vec<_> = fix.iter().map(|f| f.line.unwrap()).collect();
    assert_eq!(lines, vec![1, 1, 1, 2, 2, 2, 1, 1]);
    assert!(result.question);

    // A leftward regression that stays on the line is not a crossing.
    let mut level = fixations(&[
        (100.0, 115.0),
        (200.0, 115.0),
        (290.0, 115.0),
        (95.0, 180.0),
        (150.0, 180.0),
        (200.0, 180.0),
        (120.0, 175.0),
    ]);
    let result = FixationLineClassifier::new(&anchors, LineOptions::default()).classify(&mut level);
    assert_eq!(result.crossings.len(), 1);
    assert_eq!(level[6].line, Some(2));
    assert!(!result.question, "warnings: {:?}", result.warnings);
}

#[test]
fn reading_that_never_leaves_line_one_is_questioned() {
    let anchors = two_line_anchors();
    let mut fix = fixations(&[(100.0, 115.0), (160.0, 115.0), (220.0, 115.0)]);
    let result = FixationLineClassifier::new(&anchors, LineOptions::default()).classify(&mut fix);
    assert!(result.crossings.is_empty());
    assert!(result.question);
    assert!(fix.iter().all(|f| f.line == Some(1)));
}

#[test]
fn saccade_crossing_prefers_relative_vertical_move_over_horizontal() {
    let anchors = two_line_anchors();
    let mut sac = saccades(&[
        ((100.0, 115.0), (200.0, 115.0)),
        ((200.0, 115.0), (130.0, 115.0)),
        ((130.0, 115.0), (90.0, 180.0)),
        ((90.0, 180.0), (150.0, 180.0)),
    ]);
    let result = SaccadeLineClassifier::new(&anchors, LineOptions::default()).classify(&mut sac);
    assert_eq!(result.crossings.len(), 1);
    assert_eq!(result.crossings[0].event_index, 2);
    let tags: Vec<String> = sac.iter().map(|s| s.line.unwrap().to_string()).collect();
    assert_eq!(tags, vec!["1", "1", "1_2", "2"]);
    assert!(!result.question);
}

#[test]
fn saccade_crossing_prefers_a_single_big_jump() {
    let anchors = two_line_anchors();
    let mut sac = saccades(&[
        ((280.0, 115.0), (260.0, 180.0)),
        ((260.0, 180.0), (110.0, 180.0)),
        ((110.0, 180.0), (170.0, 180.0)),
    ]);
    let result = SaccadeLineClassifier::new(&anchors, LineOptions::default()).classify(&mut sac);
    assert_eq!(result.crossings.len(), 1);
    assert_eq!(result.crossings[0].event_index, 1);
    assert_eq!(sac[0].line, Some(SaccadeLine::Single(1)));
    assert_eq!(sac[1].line, Some(SaccadeLine::Crossing { start: 1, end: 2 }));
    assert!(!sac[1].line.unwrap().is_regressive());
    assert_eq!(sac[2].line, Some(SaccadeLine::Single(2)));
}

#[test]
fn crossing_tags_serialize_as_composite_strings() {
    let single = serde_json::to_string(&SaccadeLine::Single(3)).unwrap();
    let crossing = serde_json::to_string(&SaccadeLine::Crossing { start: 2, end: 1 }).unwrap();
    assert_eq!(single, "3");
    assert_eq!(crossing, "\"2_1\"");
    let event = CrosslineEvent {
        direction: CrossDirection::Backward,
        start_line: 2,
        end_line: 1,
        event_index: 4,
    };
    let json = serde_json::to_value(event).unwrap();
    assert_eq!(json["direction"], -1);
}
