use crate::error::StructuralError;
use crate::types::{Eye, TrialRecord};

/// Reject trials whose structure the pipeline cannot trust.
///
/// Checks the sampling frequency and trial bounds, then every fixation,
/// saccade and blink: inside the trial window, recorded by the trial's eye
/// mode, and time-ordered without overlap per eye.
pub fn validate_trial(trial: &TrialRecord) -> Result<(), StructuralError> {
    if !(trial.sampling_frequency.is_finite() && trial.sampling_frequency > 0.0) {
        return Err(StructuralError::InvalidSamplingFrequency(trial.sampling_frequency));
    }
    if !(trial.start.is_finite() && trial.end.is_finite()) || trial.start > trial.end {
        return Err(StructuralError::InvalidTrialBounds {
            start: trial.start,
            end: trial.end,
        });
    }

    let fixations = trial.fixations.iter().map(|f| (f.eye, f.start, f.end));
    check_events(trial, "fixation", fixations)?;
    let saccades = trial.saccades.iter().map(|s| (s.eye, s.start, s.end));
    check_events(trial, "saccade", saccades)?;
    let blinks = trial.blinks.iter().map(|b| (b.eye, b.start, b.end));
    check_events(trial, "blink", blinks)
}

fn check_events(
    trial: &TrialRecord,
    kind: &'static str,
    events: impl Iterator<Item = (Eye, f64, f64)>,
) -> Result<(), StructuralError> {
    // Last end seen per eye: [left, right].
    let mut last_end: [Option<f64>; 2] = [None, None];
    for (index, (eye, start, end)) in events.enumerate() {
        if !trial.eye_mode.records(eye) {
            return Err(StructuralError::EyeNotRecorded { kind, index, eye });
        }
        if !(start <= end && start >= trial.start && end <= trial.end) {
            return Err(StructuralError::EventOutsideTrial {
                kind,
                index,
                start,
                end,
            });
        }
        let slot = &mut last_end[eye as usize];
        if slot.is_some_and(|previous| start < previous) {
            return Err(StructuralError::UnorderedEvents { kind, index });
        }
        *slot = Some(end);
    }
    Ok(())
}
