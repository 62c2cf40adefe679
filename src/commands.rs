//! Command runners: read facts, score, print.

use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::Path;

use ppa_scorecard::facts::Facts;
use ppa_scorecard::score::diff::compute_diff;
use ppa_scorecard::score::{diff_report, report, score_all, summary};
use tracing::info;

use crate::config::ReportConfig;
use crate::error::CliError;

fn read_source(path: &Path) -> Result<(String, String), CliError> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| CliError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
        return Ok(("<stdin>".to_string(), text));
    }
    let label = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: label.clone(),
        source,
    })?;
    Ok((label, text))
}

/// Load a facts bundle from a JSON file, or stdin for `-`.
pub fn read_facts(path: &Path) -> Result<Facts, CliError> {
    let (label, text) = read_source(path)?;
    let facts = Facts::from_json(&text).map_err(|source| CliError::Json {
        path: label.clone(),
        source,
    })?;
    info!(source = %label, "facts loaded");
    Ok(facts)
}

pub fn score(
    path: &Path,
    json: bool,
    top: Option<usize>,
    hide_flags: bool,
    report_config: &ReportConfig,
) -> Result<(), Box<dyn Error>> {
    let facts = read_facts(path)?;
    let result = score_all(&facts);
    let summary = summary::summarize(&result, top.unwrap_or(report_config.top));

    if json {
        report::print_json(&result, &summary)?;
    } else {
        report::print_report(&result, &summary, report_config.show_flags && !hide_flags);
    }
    Ok(())
}

pub fn diff(before: &Path, after: &Path, json: bool, all: bool) -> Result<(), Box<dyn Error>> {
    let before = score_all(&read_facts(before)?);
    let after = score_all(&read_facts(after)?);
    let result_diff = compute_diff(&before, &after);

    if json {
        diff_report::print_json(&result_diff, all)?;
    } else {
        diff_report::print_report(&result_diff, all);
    }
    Ok(())
}

pub fn terms(json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        report::print_catalog_json()?;
    } else {
        report::print_catalog();
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
