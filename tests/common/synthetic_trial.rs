use reading_measures::region::{RegionMap, RegionOptions, WordBox};
use reading_measures::types::{Eye, EyeMode, FixationEvent, SaccadeEvent, TrialRecord};

pub const CHAR_WIDTH: f64 = 10.0;
pub const LEFT_MARGIN: f64 = 86.0;
pub const LINE_PITCH: f64 = 65.0;

/// Two lines spanning x in [86, 286], the second 65 px below the first.
pub const TWO_LINES: [&[&str]; 2] = [&["Reading", "is", "fun", "today"], &["we", "read", "a", "story"]];

pub const THREE_LINES: [&[&str]; 3] = [
    &["Reading", "is", "fun", "today"],
    &["we", "read", "a", "story"],
    &["about", "the", "sea"],
];

/// Vertical centre of `line` (1-based).
pub fn line_y(line: u32) -> f64 {
    115.0 + LINE_PITCH * (line - 1) as f64
}

/// Word boxes laid out left to right with one character of spacing.
pub fn layout(lines: &[&[&str]]) -> Vec<WordBox> {
    let mut boxes = Vec::new();
    for (i, words) in lines.iter().enumerate() {
        let y = line_y(i as u32 + 1) - 15.0;
        let mut x = LEFT_MARGIN;
        for word in words.iter() {
            let width = CHAR_WIDTH * word.chars().count() as f64;
            boxes.push(WordBox {
                text: word.to_string(),
                line: i as u32 + 1,
                x1: x,
                y1: y,
                x2: x + width,
                y2: y + 30.0,
            });
            x += width + CHAR_WIDTH;
        }
    }
    boxes
}

pub fn region_map(lines: &[&[&str]]) -> RegionMap {
    RegionMap::from_boxes(layout(lines), &RegionOptions::default())
        .expect("synthetic layout is valid")
}

/// Fixations of `duration` ms every `duration + 50` ms starting at `t0`,
/// joined by saccades that fill the gaps.
pub fn reading_stream(
    eye: Eye,
    points: &[(f64, f64)],
    t0: f64,
    duration: f64,
) -> (Vec<FixationEvent>, Vec<SaccadeEvent>) {
    let pitch = duration + 50.0;
    let fixations = points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let start = t0 + pitch * i as f64;
            FixationEvent::new(eye, start, start + duration, x, y, 850.0)
        })
        .collect();
    let saccades = points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let start = t0 + pitch * i as f64 + duration;
            let dx = pair[1].0 - pair[0].0;
            let dy = pair[1].1 - pair[0].1;
            let amplitude = (dx * dx + dy * dy).sqrt() / 40.0;
            SaccadeEvent::new(eye, start, start + 50.0, pair[0], pair[1], amplitude, 120.0 * amplitude)
        })
        .collect();
    (fixations, saccades)
}

pub fn trial_record(
    id: &str,
    stimulus: &str,
    eye_mode: EyeMode,
    streams: Vec<(Vec<FixationEvent>, Vec<SaccadeEvent>)>,
    end: f64,
) -> TrialRecord {
    let mut fixations = Vec::new();
    let mut saccades = Vec::new();
    for (f, s) in streams {
        fixations.extend(f);
        saccades.extend(s);
    }
    TrialRecord {
        id: id.to_string(),
        stimulus: stimulus.to_string(),
        eye_mode,
        sampling_frequency: 1000.0,
        start: 0.0,
        end,
        fixations,
        saccades,
        blinks: Vec::new(),
    }
}

pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
