//! JSON I/O for trial sets and reports.
//!
//! - `load_trial_set`: read stimulus layouts and parsed trials, building one
//!   [`RegionMap`] per stimulus.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::analyzer::TrialJob;
use crate::region::{RegionMap, RegionOptions, WordBox};
use crate::types::TrialRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// On-disk form of a trial set.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TrialSet {
    /// Word boxes of every stimulus, keyed by stimulus name.
    #[serde(default)]
    pub stimuli: BTreeMap<String, Vec<WordBox>>,
    #[serde(default)]
    pub trials: Vec<TrialRecord>,
}

/// Trial set with its layouts turned into region maps.
#[derive(Debug)]
pub struct LoadedTrialSet {
    pub stimuli: BTreeMap<String, RegionMap>,
    pub trials: Vec<TrialRecord>,
}

impl LoadedTrialSet {
    /// Build region maps for every stimulus of `set`.
    pub fn from_set(set: TrialSet, options: &RegionOptions) -> Result<Self, String> {
        let mut stimuli = BTreeMap::new();
        for (name, boxes) in set.stimuli {
            let map = RegionMap::from_boxes(boxes, options)
                .map_err(|e| format!("Invalid layout for stimulus {name}: {e}"))?;
            stimuli.insert(name, map);
        }
        Ok(Self {
            stimuli,
            trials: set.trials,
        })
    }

    /// Pair every trial with its stimulus map.
    ///
    /// Trials naming an unknown stimulus come back in the second list.
    pub fn jobs(&self) -> (Vec<TrialJob<'_>>, Vec<&TrialRecord>) {
        let mut jobs = Vec::with_capacity(self.trials.len());
        let mut orphans = Vec::new();
        for trial in &self.trials {
            match self.stimuli.get(&trial.stimulus) {
                Some(regions) => jobs.push(TrialJob { trial, regions }),
                None => orphans.push(trial),
            }
        }
        (jobs, orphans)
    }
}

/// Read a trial set JSON and build its region maps.
pub fn load_trial_set(path: &Path, options: &RegionOptions) -> Result<LoadedTrialSet, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read trial set {}: {e}", path.display()))?;
    let set: TrialSet = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse trial set {}: {e}", path.display()))?;
    LoadedTrialSet::from_set(set, options)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
