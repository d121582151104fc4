use super::*;
use crate::region::{RegionMap, RegionOptions, WordBox};
use crate::types::{Eye, FixationEvent, SaccadeEvent, SaccadeLine};

/// "The cat sat down" / "on the mat." at 12px per character.
fn two_line_map() -> RegionMap {
    let mut boxes = Vec::new();
    for (line, y, words) in [
        (1, 100.0, vec!["The", "cat", "sat", "down"]),
        (2, 165.0, vec!["on", "the", "mat."]),
    ] {
        let mut x = 86.0;
        for w in words {
            let width = 12.0 * w.len() as f64;
            boxes.push(WordBox {
                text: w.to_string(),
                line,
                x1: x,
                y1: y,
                x2: x + width,
                y2: y + 30.0,
            });
            x += width + 12.0;
        }
    }
    RegionMap::from_boxes(boxes, &RegionOptions::default()).unwrap()
}

/// Fixations placed back to back, each already classified.
fn stream(plan: &[(f64, u32, Option<u32>, f64)]) -> Vec<FixationEvent> {
    let mut t = 0.0;
    plan.iter()
        .map(|&(x, line, region, duration)| {
            let y = if line == 1 { 115.0 } else { 180.0 };
            let mut f = FixationEvent::new(Eye::Left, t, t + duration, x, y, 700.0);
            f.line = Some(line);
            f.region_id = region;
            t += duration + 30.0;
            f
        })
        .collect()
}

fn measure(measures: &[RegionMeasure], id: u32) -> &RegionMeasure {
    measures.iter().find(|m| m.region_id == id).unwrap()
}

#[test]
fn single_first_pass_fixation_without_followers() {
    let map = two_line_map();
    let fixations = stream(&[(150.0, 1, Some(2), 200.0)]);
    let measures = ReadingMeasureCalculator::new(&map).region_measures(&fixations);
    assert_eq!(measures.len(), map.len());

    let cat = measure(&measures, 2);
    assert_eq!(cat.fpurt, Some(200.0));
    assert_eq!(cat.fpcount, Some(1));
    assert_eq!(cat.ffixurt, Some(200.0));
    assert_eq!(cat.ffos, Some(1));
    assert_eq!(cat.fpregres, Some(0));
    assert_eq!(cat.fpregreg, Some(0));
    assert_eq!(cat.fpregchr, Some(map.text_length()));
    assert_eq!(cat.rpurt, Some(200.0));
    assert_eq!(cat.rpcount, Some(0));
    assert_eq!(cat.spilover, None);
    assert_eq!(cat.spurt, None);
    assert_eq!(cat.spcount, None);

    let unread = measure(&measures, 5);
    assert_eq!(unread.fpurt, None);
    assert_eq!(unread.fpregres, None);
}

#[test]
fn regression_path_and_second_pass() {
    let map = two_line_map();
    let fixations = stream(&[
        (100.0, 1, Some(1), 200.0),
        (150.0, 1, Some(2), 180.0),
        (200.0, 1, Some(3), 220.0),
        (140.0, 1, Some(2), 150.0),
        (95.0, 1, Some(1), 120.0),
        (195.0, 1, Some(3), 210.0),
        (250.0, 1, Some(4), 230.0),
    ]);
    let measures = ReadingMeasureCalculator::new(&map).region_measures(&fixations);

    let sat = measure(&measures, 3);
    assert_eq!(sat.fpurt, Some(220.0));
    assert_eq!(sat.fpregres, Some(1));
    assert_eq!(sat.fpregreg, Some(2));
    assert_eq!(sat.fpregchr, Some(3));
    assert_eq!(sat.spilover, Some(150.0));
    assert_eq!(sat.rpurt, Some(220.0 + 150.0 + 120.0 + 210.0));
    assert_eq!(sat.rpcount, Some(3));
    assert_eq!(sat.rpregreg, Some(1));
    assert_eq!(sat.rpregchr, Some(1));
    assert_eq!(sat.spurt, Some(210.0));
    assert_eq!(sat.spcount, Some(1));

    let cat = measure(&measures, 2);
    assert_eq!(cat.fpregres, Some(0));
    assert_eq!(cat.spilover, Some(220.0));
    assert_eq!(cat.rpurt, cat.fpurt);
    assert_eq!(cat.spurt, Some(150.0));

    let down = measure(&measures, 4);
    assert_eq!(down.fpurt, Some(230.0));
    assert_eq!(down.spilover, None);
}

#[test]
fn invalid_exit_fixation_never_counts_as_regression() {
    let map = two_line_map();
    let mut fixations = stream(&[(150.0, 1, Some(2), 200.0), (100.0, 1, Some(1), 180.0)]);
    fixations[1].valid = false;
    let measures = ReadingMeasureCalculator::new(&map).region_measures(&fixations);
    let cat = measure(&measures, 2);
    assert_eq!(cat.fpregres, Some(0));
    assert_eq!(cat.spilover, None);
    // The invalid fixation is not a first fixation either.
    assert_eq!(measure(&measures, 1).fpurt, None);
}

#[test]
fn earlier_line_counts_as_regression() {
    let map = two_line_map();
    let fixations = stream(&[
        (100.0, 2, Some(5), 200.0),
        (260.0, 1, Some(4), 180.0),
        (140.0, 2, Some(6), 190.0),
    ]);
    let measures = ReadingMeasureCalculator::new(&map).region_measures(&fixations);
    let on = measure(&measures, 5);
    assert_eq!(on.fpregres, Some(1));
    assert_eq!(on.fpregreg, Some(4));
    assert_eq!(on.rpcount, Some(1));
    assert_eq!(on.rpurt, Some(380.0));
}

#[test]
fn last_region_regression_path_runs_to_the_end() {
    let map = two_line_map();
    let fixations = stream(&[
        (200.0, 2, Some(7), 200.0),
        (95.0, 2, Some(5), 150.0),
        (205.0, 2, Some(7), 160.0),
        (140.0, 2, Some(6), 170.0),
    ]);
    let measures = ReadingMeasureCalculator::new(&map).region_measures(&fixations);
    let mat = measure(&measures, 7);
    assert_eq!(mat.fpregres, Some(1));
    assert_eq!(mat.rpcount, Some(3));
    assert_eq!(mat.rpurt, Some(200.0 + 150.0 + 160.0 + 170.0));
    assert_eq!(mat.rpregreg, Some(5));
    assert_eq!(mat.spcount, Some(1));
}

#[test]
fn consecutive_first_pass_fixations_accumulate() {
    let map = two_line_map();
    let fixations = stream(&[(140.0, 1, Some(2), 150.0), (160.0, 1, Some(2), 100.0)]);
    let measures = ReadingMeasureCalculator::new(&map).region_measures(&fixations);
    let cat = measure(&measures, 2);
    assert_eq!(cat.fpcount, Some(2));
    assert_eq!(cat.fpurt, Some(250.0));
    assert_eq!(cat.ffixurt, Some(150.0));
}

#[test]
fn trial_totals() {
    let map = two_line_map();
    let fixations = stream(&[
        (100.0, 1, Some(1), 200.0),
        (150.0, 1, Some(2), 180.0),
        (95.0, 2, Some(5), 210.0),
    ]);
    let measures = ReadingMeasureCalculator::new(&map).region_measures(&fixations);
    let mut saccades = vec![
        SaccadeEvent::new(Eye::Left, 200.0, 230.0, (100.0, 115.0), (150.0, 115.0), 1.0, 100.0),
        SaccadeEvent::new(Eye::Left, 410.0, 440.0, (150.0, 115.0), (95.0, 180.0), 3.0, 300.0),
        SaccadeEvent::new(Eye::Left, 650.0, 680.0, (95.0, 180.0), (150.0, 115.0), 3.0, 300.0),
    ];
    saccades[0].line = Some(SaccadeLine::Single(1));
    saccades[1].line = Some(SaccadeLine::Crossing { start: 1, end: 2 });
    saccades[2].line = Some(SaccadeLine::Crossing { start: 2, end: 1 });

    let totals = TrialMeasures::compute(&measures, &fixations, &saccades, 5000.0, 2);
    assert_eq!(totals.tfixcnt, 3);
    assert_eq!(totals.tregrcnt, 1);
    assert_eq!(totals.ttfixurt, 200.0 + 180.0 + 210.0);
    let ffos_sum: u32 = measures.iter().filter_map(|m| m.ffos).sum();
    assert_eq!(totals.tffixos, ffos_sum);
    assert_eq!(totals.blinks, 2);
    assert_eq!(totals.tdur, 5000.0);
}

#[test]
fn missing_measures_serialize_as_null() {
    let map = two_line_map();
    let measures = ReadingMeasureCalculator::new(&map).region_measures(&[]);
    let json = serde_json::to_value(&measures[0]).unwrap();
    assert!(json["fpurt"].is_null());
    assert!(json["spcount"].is_null());
}
