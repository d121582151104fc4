//! Per-trial analysis pipeline.
//!
//! Overview
//! - [`validate_trial`] rejects trials with broken bounds, events outside the
//!   trial window, events of an unrecorded eye, or overlapping events.
//! - [`TrialAnalyzer`] runs lumping, line classification, region assignment
//!   and reading measures for every recorded eye independently and collects
//!   the results into a [`TrialReport`](crate::diagnostics::TrialReport).
//! - [`TrialAnalyzer::analyze_batch`] fans independent trials out over a
//!   rayon pool. The region maps are shared read-only; every trial writes
//!   only its own report.
//!
//! Modules
//! - [`params`] – configuration types used by the analyzer and CLI.
//! - `pipeline` – the [`TrialAnalyzer`] implementation.
//! - `batch` – parallel driver over [`TrialJob`]s.

mod batch;
pub mod params;
mod pipeline;
mod validate;

pub use batch::TrialJob;
pub use params::AnalysisParams;
pub use pipeline::TrialAnalyzer;
pub use validate::validate_trial;
