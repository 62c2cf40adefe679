//! Scoring pass: run every term scorer against one facts bundle, then the
//! cross-term checks.

pub mod diff;
pub mod diff_report;
pub mod interactions;
pub mod report;
pub mod summary;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::context::DealContext;
use crate::facts::Facts;
use crate::terms::{NEUTRAL_SCORE, TermId, TermStatus, score_term};

pub use interactions::{InteractionFlag, check_interactions};

/// Everything one scoring pass produces. `scores` and `statuses` always
/// hold every term; `term_flags` only the terms that raised something.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    pub scores: BTreeMap<TermId, f64>,
    pub statuses: BTreeMap<TermId, TermStatus>,
    pub term_flags: BTreeMap<TermId, Vec<String>>,
    pub interactions: Vec<InteractionFlag>,
    pub context: DealContext,
}

impl ScoringResult {
    pub fn score(&self, id: TermId) -> f64 {
        self.scores.get(&id).copied().unwrap_or(NEUTRAL_SCORE)
    }

    pub fn status(&self, id: TermId) -> TermStatus {
        self.statuses.get(&id).copied().unwrap_or(TermStatus::Scored)
    }

    pub fn flags(&self, id: TermId) -> &[String] {
        self.term_flags.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Terms whose primary fact was not found.
    pub fn missing_terms(&self) -> impl Iterator<Item = TermId> + '_ {
        self.statuses
            .iter()
            .filter(|(_, status)| **status == TermStatus::Missing)
            .map(|(id, _)| *id)
    }
}

/// Score all 35 terms. Never fails: absent sub-records score as their
/// conservative defaults and are flagged.
pub fn score_all(facts: &Facts) -> ScoringResult {
    let context = DealContext::resolve(&facts.deal);

    let mut scores = BTreeMap::new();
    let mut statuses = BTreeMap::new();
    let mut term_flags = BTreeMap::new();

    for id in TermId::ALL {
        let result = score_term(id, facts, &context);
        debug!(
            term = id.as_str(),
            score = result.score,
            status = result.status.as_str(),
            flags = result.flags.len(),
            "scored term"
        );
        scores.insert(id, result.score);
        statuses.insert(id, result.status);
        if !result.flags.is_empty() {
            term_flags.insert(id, result.flags);
        }
    }

    let interactions = check_interactions(&scores, facts);

    let result = ScoringResult {
        scores,
        statuses,
        term_flags,
        interactions,
        context,
    };
    info!(
        market = result.context.market.as_str(),
        technology = result.context.technology.as_str(),
        missing = result.missing_terms().count(),
        flagged = result.term_flags.len(),
        interactions = result.interactions.len(),
        "scoring complete"
    );
    result
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
