//! Report formatters for the scorecard diff.
//!
//! Table (ANSI-colored) and JSON output for `ResultDiff`. Lower scores are
//! better for the buyer: green for a drop, red for a rise, yellow for no change.

use serde::Serialize;

use super::diff::{ResultDiff, ScoreDelta, TermDelta};
use super::interactions::InteractionFlag;
use super::summary::Verdict;
use crate::report_helpers;

// ANSI color codes.
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Format a signed delta with color and sign prefix.
fn colored_delta(delta: f64) -> String {
    if delta < -0.05 {
        format!("{GREEN}{delta:.1}{RESET}")
    } else if delta > 0.05 {
        format!("{RED}+{delta:.1}{RESET}")
    } else {
        format!("{YELLOW} 0.0{RESET}")
    }
}

fn terms_label(flag: &InteractionFlag) -> String {
    let ids: Vec<&str> = flag.terms.iter().map(|t| t.as_str()).collect();
    ids.join(", ")
}

/// Print the diff as a formatted table. Only terms that moved are listed
/// unless `all` is set.
pub fn print_report(diff: &ResultDiff, all: bool) {
    let separator = report_helpers::separator(78);

    println!("{BOLD}Scorecard Diff{RESET}");
    println!("{separator}");

    let verdict_change = if diff.before_verdict == diff.after_verdict {
        diff.after_verdict.as_str().to_string()
    } else {
        format!(
            "{} \u{2192} {}",
            diff.before_verdict.as_str(),
            diff.after_verdict.as_str()
        )
    };
    println!(
        " Overall: {:.1} \u{2192} {:.1}  ({})  Verdict: {verdict_change}",
        diff.overall.before,
        diff.overall.after,
        colored_delta(diff.overall.delta),
    );

    let rows: Vec<&TermDelta> = diff.terms.iter().filter(|t| all || t.changed()).collect();
    println!("{separator}");
    if rows.is_empty() {
        println!(" No term scores changed.");
    } else {
        let name_width = report_helpers::max_width(rows.iter().map(|t| t.name), 4);
        println!(
            " {:<width$}  {:>22}   {:>22}   {:>7}",
            "Term",
            "Before",
            "After",
            "Delta",
            width = name_width
        );
        println!("{separator}");
        for t in rows {
            println!(
                " {:<width$}  {:>5.0} {:<16}   {:>5.0} {:<16}   {}",
                t.name,
                t.before_score,
                t.before_zone.as_str(),
                t.after_score,
                t.after_zone.as_str(),
                colored_delta(t.delta),
                width = name_width
            );
        }
    }
    println!("{separator}");

    for flag in &diff.resolved {
        println!(" {GREEN}resolved{RESET}   [{}] {}", terms_label(flag), flag.message);
    }
    for flag in &diff.introduced {
        println!(" {RED}introduced{RESET} [{}] {}", terms_label(flag), flag.message);
    }
}

// --- JSON output ---

#[derive(Serialize)]
struct JsonResultDiff<'a> {
    before_verdict: Verdict,
    after_verdict: Verdict,
    overall: &'a ScoreDelta,
    changed: usize,
    terms: Vec<&'a TermDelta>,
    resolved: &'a [InteractionFlag],
    introduced: &'a [InteractionFlag],
}

/// Serialize the diff as pretty-printed JSON to stdout.
pub fn print_json(diff: &ResultDiff, all: bool) -> Result<(), Box<dyn std::error::Error>> {
    let terms: Vec<&TermDelta> = diff.terms.iter().filter(|t| all || t.changed()).collect();
    let json = JsonResultDiff {
        before_verdict: diff.before_verdict,
        after_verdict: diff.after_verdict,
        overall: &diff.overall,
        changed: diff.terms.iter().filter(|t| t.changed()).count(),
        terms,
        resolved: &diff.resolved,
        introduced: &diff.introduced,
    };
    report_helpers::print_json_stdout(&json)
}

#[cfg(test)]
#[path = "diff_report_test.rs"]
mod tests;
