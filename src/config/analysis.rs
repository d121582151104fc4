use crate::analyzer::AnalysisParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `reading-measures` command-line tool.
#[derive(Debug, Deserialize)]
pub struct AnalysisConfig {
    /// Trial set JSON (stimulus layouts plus parsed trials).
    pub input: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: AnalysisParams,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the JSON report; required for `json` and `both`.
    pub json_out: Option<PathBuf>,
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn wants_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn wants_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

pub fn load_config(path: &Path) -> Result<AnalysisConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: AnalysisConfig = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    if config.output.format.wants_json() && config.output.json_out.is_none() {
        return Err(format!(
            "Config {} asks for JSON output but has no output.json_out",
            path.display()
        ));
    }
    Ok(config)
}
