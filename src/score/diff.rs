//! Compare two scoring results, typically a first draft and a redline.
//!
//! Scores run toward 100 as terms get worse for the buyer, so a negative
//! delta is an improvement.

use serde::Serialize;

use super::ScoringResult;
use super::interactions::InteractionFlag;
use super::summary::{Summary, Verdict, Zone, summarize};
use crate::terms::{TermId, TermStatus};

/// Numeric delta: before, after, and signed difference.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreDelta {
    pub before: f64,
    pub after: f64,
    pub delta: f64,
}

impl ScoreDelta {
    fn new(before: f64, after: f64) -> Self {
        Self {
            before,
            after,
            delta: after - before,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TermDelta {
    pub id: TermId,
    pub name: &'static str,
    pub before_score: f64,
    pub before_zone: Zone,
    pub before_status: TermStatus,
    pub after_score: f64,
    pub after_zone: Zone,
    pub after_status: TermStatus,
    pub delta: f64,
}

impl TermDelta {
    pub fn changed(&self) -> bool {
        self.delta.abs() > 0.05 || self.before_status != self.after_status
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultDiff {
    pub overall: ScoreDelta,
    pub before_verdict: Verdict,
    pub after_verdict: Verdict,
    pub terms: Vec<TermDelta>,
    /// Interactions present before and gone after.
    pub resolved: Vec<InteractionFlag>,
    /// Interactions that only appear after.
    pub introduced: Vec<InteractionFlag>,
}

/// Compare two results term by term, in catalog order.
pub fn compute_diff(before: &ScoringResult, after: &ScoringResult) -> ResultDiff {
    let before_summary: Summary = summarize(before, 0);
    let after_summary: Summary = summarize(after, 0);

    let terms = TermId::ALL
        .into_iter()
        .map(|id| {
            let b = before.score(id);
            let a = after.score(id);
            TermDelta {
                id,
                name: id.name(),
                before_score: b,
                before_zone: Zone::of(b),
                before_status: before.status(id),
                after_score: a,
                after_zone: Zone::of(a),
                after_status: after.status(id),
                delta: a - b,
            }
        })
        .collect();

    let only_in = |left: &ScoringResult, right: &ScoringResult| -> Vec<InteractionFlag> {
        left.interactions
            .iter()
            .filter(|flag| !right.interactions.contains(flag))
            .cloned()
            .collect()
    };

    ResultDiff {
        overall: ScoreDelta::new(before_summary.score, after_summary.score),
        before_verdict: before_summary.verdict,
        after_verdict: after_summary.verdict,
        terms,
        resolved: only_in(before, after),
        introduced: only_in(after, before),
    }
}

#[cfg(test)]
#[path = "diff_test.rs"]
mod tests;
