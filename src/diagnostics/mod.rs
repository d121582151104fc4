//! Serializable reports produced by the analyzer.
//!
//! [`TrialReport`] is the main entry point: it holds one [`EyeReport`] per
//! recorded eye with the classified streams, crossline events, measures and a
//! [`PipelineTrace`] describing what every stage did.

pub mod report;
pub mod stages;
pub mod timing;

pub use report::{EyeReport, PipelineTrace, TrialReport};
pub use stages::{AssignmentStage, LineStage, LumpingStage};
pub use timing::{StageTiming, TimingBreakdown};
