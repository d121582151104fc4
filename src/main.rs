use reading_measures::config::{load_config, OutputFormat};
use reading_measures::io::{load_trial_set, write_json_file};
use reading_measures::{TrialAnalyzer, TrialReport};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let set = load_trial_set(&config.input, &config.params.regions)?;
    let (jobs, orphans) = set.jobs();
    let mut skipped: Vec<SkippedTrial> = orphans
        .iter()
        .map(|trial| SkippedTrial {
            trial_id: trial.id.clone(),
            reason: format!("unknown stimulus '{}'", trial.stimulus),
        })
        .collect();

    let analyzer = TrialAnalyzer::new(config.params);
    let mut trials = Vec::with_capacity(jobs.len());
    for result in analyzer.analyze_batch(&jobs) {
        match result {
            Ok(report) => trials.push(report),
            Err(err) => skipped.push(SkippedTrial {
                trial_id: err.trial().to_string(),
                reason: err.to_string(),
            }),
        }
    }

    if config.output.format.wants_text() {
        print_summary(&trials, &skipped);
    }
    if config.output.format.wants_json() {
        let path = config
            .output
            .json_out
            .as_deref()
            .ok_or("JSON output requested without output.json_out")?;
        let report = AnalysisReport {
            trials: &trials,
            skipped: &skipped,
        };
        write_json_file(path, &report)?;
        if config.output.format == OutputFormat::Both {
            println!("Saved report for {} trial(s) to {}", trials.len(), path.display());
        }
    }

    Ok(())
}

fn print_summary(trials: &[TrialReport], skipped: &[SkippedTrial]) {
    for report in trials {
        for eye in &report.eyes {
            let valid = eye.fixations.iter().filter(|f| f.valid).count();
            println!(
                "{} [{}] eye={} fixations={} valid={} crossings fix={} sac={} regressions={}{}",
                report.trial_id,
                report.stimulus,
                eye.eye,
                eye.fixations.len(),
                valid,
                eye.fixation_crossings.len(),
                eye.saccade_crossings.len(),
                eye.trial.tregrcnt,
                if eye.question() { " QUESTION" } else { "" }
            );
            for warning in &eye.warnings {
                println!("    warning: {warning}");
            }
        }
    }
    for skip in skipped {
        println!("{} skipped: {}", skip.trial_id, skip.reason);
    }
    println!(
        "Analyzed {} trial(s), skipped {}",
        trials.len(),
        skipped.len()
    );
}

fn usage() -> String {
    "Usage: reading-measures <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SkippedTrial {
    trial_id: String,
    reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisReport<'a> {
    trials: &'a [TrialReport],
    skipped: &'a [SkippedTrial],
}
