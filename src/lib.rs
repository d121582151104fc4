#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod diagnostics;
pub mod error;
pub mod measures;
pub mod region;
pub mod types;

// Stage modules – public for tools and tests that drive a single stage.
pub mod lines;
pub mod lumping;

// Tooling used by the binary.
pub mod config;
pub mod io;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + parameters.
pub use crate::analyzer::{AnalysisParams, TrialAnalyzer, TrialJob};
pub use crate::error::{LumpError, PipelineError, StructuralError};

// Reports returned by the analyzer.
pub use crate::diagnostics::{EyeReport, PipelineTrace, TrialReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use reading_measures::prelude::*;
///
/// # fn main() {
/// let boxes = vec![
///     WordBox { text: "Hello".into(), line: 1, x1: 86.0, y1: 100.0, x2: 146.0, y2: 130.0 },
///     WordBox { text: "world".into(), line: 2, x1: 86.0, y1: 165.0, x2: 146.0, y2: 195.0 },
/// ];
/// let map = RegionMap::from_boxes(boxes, &RegionOptions::default()).unwrap();
/// let trial = TrialRecord {
///     id: "demo".into(),
///     stimulus: "hello".into(),
///     eye_mode: EyeMode::Left,
///     sampling_frequency: 1000.0,
///     start: 0.0,
///     end: 1000.0,
///     fixations: vec![
///         FixationEvent::new(Eye::Left, 0.0, 200.0, 110.0, 115.0, 900.0),
///         FixationEvent::new(Eye::Left, 250.0, 450.0, 100.0, 180.0, 900.0),
///     ],
///     saccades: Vec::new(),
///     blinks: Vec::new(),
/// };
///
/// let report = TrialAnalyzer::new(AnalysisParams::default()).analyze(&trial, &map).unwrap();
/// println!("question={} regions={}", report.question(), report.eyes[0].regions.len());
/// # }
/// ```
pub mod prelude {
    pub use crate::region::{RegionMap, RegionOptions, WordBox};
    pub use crate::types::{Eye, EyeMode, FixationEvent, SaccadeEvent, TrialRecord};
    pub use crate::{AnalysisParams, TrialAnalyzer, TrialReport};
}
