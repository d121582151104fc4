//! JSON configuration for the command-line tool.

pub mod analysis;

pub use analysis::{load_config, AnalysisConfig, OutputConfig, OutputFormat};
