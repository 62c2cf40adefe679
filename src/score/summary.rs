use std::fmt;

use serde::Serialize;

use super::ScoringResult;
use crate::terms::{Flexibility, NEUTRAL_SCORE, TermGroup, TermId, TermStatus};

/// Where a 0-100 score sits relative to market standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Zone {
    #[serde(rename = "BUYER-FAVORABLE")]
    BuyerFavorable,
    #[serde(rename = "AT MARKET")]
    AtMarket,
    #[serde(rename = "SELLER-FAVORABLE")]
    SellerFavorable,
    #[serde(rename = "RED FLAG")]
    RedFlag,
}

impl Zone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BuyerFavorable => "BUYER-FAVORABLE",
            Self::AtMarket => "AT MARKET",
            Self::SellerFavorable => "SELLER-FAVORABLE",
            Self::RedFlag => "RED FLAG",
        }
    }

    /// [0,25) buyer-favorable, [25,50) at market, [50,75) seller-favorable,
    /// 75 and above red flag.
    pub fn of(score: f64) -> Zone {
        if score < 25.0 {
            Zone::BuyerFavorable
        } else if score < 50.0 {
            Zone::AtMarket
        } else if score < 75.0 {
            Zone::SellerFavorable
        } else {
            Zone::RedFlag
        }
    }

    /// Seller-favorable or worse.
    pub fn needs_attention(self) -> bool {
        self >= Zone::SellerFavorable
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall recommendation for the term sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "READY TO SIGN")]
    ReadyToSign,
    #[serde(rename = "MINOR REVISIONS")]
    MinorRevisions,
    #[serde(rename = "DO NOT SIGN")]
    DoNotSign,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadyToSign => "READY TO SIGN",
            Self::MinorRevisions => "MINOR REVISIONS",
            Self::DoNotSign => "DO NOT SIGN",
        }
    }

    pub fn from_counts(zones: &ZoneCounts) -> Verdict {
        if zones.red_flag > 0 {
            Verdict::DoNotSign
        } else if zones.seller_favorable > 0 {
            Verdict::MinorRevisions
        } else {
            Verdict::ReadyToSign
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ZoneCounts {
    pub buyer_favorable: usize,
    pub at_market: usize,
    pub seller_favorable: usize,
    pub red_flag: usize,
}

impl ZoneCounts {
    fn add(&mut self, zone: Zone) {
        match zone {
            Zone::BuyerFavorable => self.buyer_favorable += 1,
            Zone::AtMarket => self.at_market += 1,
            Zone::SellerFavorable => self.seller_favorable += 1,
            Zone::RedFlag => self.red_flag += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupScore {
    pub group: TermGroup,
    pub title: &'static str,
    pub score: f64,
    pub zone: Zone,
    pub terms: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TermScore {
    pub id: TermId,
    pub name: &'static str,
    pub score: f64,
    pub zone: Zone,
    pub status: TermStatus,
    pub flexibility: Flexibility,
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub score: f64,
    pub zone: Zone,
    pub verdict: Verdict,
    pub zones: ZoneCounts,
    pub groups: Vec<GroupScore>,
    /// Seller-favorable or worse terms that are usually negotiable.
    pub flexible_issues: usize,
    /// Seller-favorable or worse terms the market rarely moves on.
    pub inflexible_issues: usize,
    pub missing: usize,
    pub unsupported: usize,
    pub needs_attention: Vec<TermScore>,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return NEUTRAL_SCORE;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn term_score(result: &ScoringResult, id: TermId) -> TermScore {
    let score = result.score(id);
    TermScore {
        id,
        name: id.name(),
        score,
        zone: Zone::of(score),
        status: result.status(id),
        flexibility: id.flexibility(),
        flags: result.flags(id).to_vec(),
    }
}

/// Roll a scoring result up into zones, group means and a verdict.
///
/// Unsupported terms carry a placeholder score, so they are left out of
/// every aggregate and only counted. `top` caps the needs-attention list,
/// which is ordered worst first.
pub fn summarize(result: &ScoringResult, top: usize) -> Summary {
    let rated: Vec<TermScore> = TermId::ALL
        .into_iter()
        .filter(|&id| result.status(id) != TermStatus::Unsupported)
        .map(|id| term_score(result, id))
        .collect();

    let mut zones = ZoneCounts::default();
    for t in &rated {
        zones.add(t.zone);
    }

    let groups = TermGroup::ALL
        .into_iter()
        .map(|group| {
            let scores: Vec<f64> = rated
                .iter()
                .filter(|t| t.id.group() == group)
                .map(|t| t.score)
                .collect();
            let score = mean(&scores);
            GroupScore {
                group,
                title: group.title(),
                score,
                zone: Zone::of(score),
                terms: scores.len(),
            }
        })
        .collect();

    let issues = || rated.iter().filter(|t| t.zone.needs_attention());
    let flexible_issues = issues()
        .filter(|t| t.flexibility == Flexibility::Flexible)
        .count();
    let inflexible_issues = issues().count() - flexible_issues;

    let mut needs_attention: Vec<TermScore> = issues().cloned().collect();
    needs_attention.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.id.cmp(&b.id)));
    needs_attention.truncate(top);

    let all: Vec<f64> = rated.iter().map(|t| t.score).collect();
    let score = mean(&all);

    Summary {
        score,
        zone: Zone::of(score),
        verdict: Verdict::from_counts(&zones),
        zones,
        groups,
        flexible_issues,
        inflexible_issues,
        missing: result.missing_terms().count(),
        unsupported: TermId::ALL.len() - rated.len(),
        needs_attention,
    }
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
