//! Cross-term interaction checks.
//!
//! Some risks only show up in combination: strong default triggers are worth
//! little if the termination payment is weak, and three separately tolerable
//! curtailment allocations can add up to a large volume exposure. Each rule
//! looks at the finished score map (and occasionally a raw fact) and fires
//! at most once. Rules are independent; every rule runs on every pass.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::facts::{Facts, SettlementType, StrikeFixed, YesNo};
use crate::terms::TermId;

/// A finding that spans more than one term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionFlag {
    pub terms: Vec<TermId>,
    pub message: String,
}

/// Final score per term.
pub type Scores = BTreeMap<TermId, f64>;

struct Rule {
    terms: &'static [TermId],
    message: &'static str,
    fires: fn(&Scores, &Facts) -> bool,
}

fn s(scores: &Scores, id: TermId) -> f64 {
    scores.get(&id).copied().unwrap_or(crate::terms::NEUTRAL_SCORE)
}

const RULES: &[Rule] = &[
    Rule {
        terms: &[TermId::BuyerPa, TermId::SellerPa],
        message: "Significant asymmetry between buyer and seller credit support.",
        fires: |sc, _| (s(sc, TermId::BuyerPa) - s(sc, TermId::SellerPa)).abs() > 30.0,
    },
    Rule {
        terms: &[TermId::Eod, TermId::ETerm],
        message: "Strong default triggers but weak termination payment mechanics.",
        fires: |sc, _| s(sc, TermId::Eod) < 25.0 && s(sc, TermId::ETerm) > 50.0,
    },
    Rule {
        terms: &[TermId::Eod, TermId::ETerm],
        message: "Strong termination mechanics but weak default triggers.",
        fires: |sc, _| s(sc, TermId::Eod) > 50.0 && s(sc, TermId::ETerm) < 25.0,
    },
    Rule {
        terms: &[TermId::Fm, TermId::Delay],
        message: "Broad FM combined with weak delay provisions; seller can excuse delays liberally.",
        fires: |sc, _| s(sc, TermId::Fm) > 50.0 && s(sc, TermId::Delay) > 50.0,
    },
    Rule {
        terms: &[TermId::Curtailment, TermId::NonEcoCurtail, TermId::BasisCurtail],
        message: "Buyer bears majority of curtailment risk across all three categories; \
                  cumulative volume loss exposure is significant.",
        fires: |sc, _| {
            [TermId::Curtailment, TermId::NonEcoCurtail, TermId::BasisCurtail]
                .iter()
                .all(|&id| s(sc, id) > 50.0)
        },
    },
    Rule {
        terms: &[TermId::AvailMech, TermId::AvailGuaranteed],
        message: "Both mechanical availability and production guarantee needed; one without \
                  the other is incomplete protection.",
        fires: |sc, _| (s(sc, TermId::AvailMech) < 50.0) != (s(sc, TermId::AvailGuaranteed) < 50.0),
    },
    Rule {
        terms: &[TermId::Product, TermId::Recs],
        message: "Complete product definition but weak REC delivery mechanics.",
        fires: |sc, _| s(sc, TermId::Product) < 25.0 && s(sc, TermId::Recs) > 50.0,
    },
    Rule {
        terms: &[TermId::NegPrice, TermId::MarketDisrupt],
        message: "Combined lack of negative price protection and market disruption provisions; \
                  unlimited bilateral exposure.",
        fires: |sc, _| s(sc, TermId::NegPrice) > 60.0 && s(sc, TermId::MarketDisrupt) > 60.0,
    },
    Rule {
        terms: &[TermId::Floating, TermId::Basis],
        message: "Nodal settlement with buyer bearing basis risk; double exposure.",
        fires: |sc, f| {
            s(sc, TermId::Floating) > 55.0
                && f.floating.settlement_type == Some(SettlementType::Nodal)
                && s(sc, TermId::Basis) > 55.0
        },
    },
    Rule {
        terms: &[TermId::ChangeInLaw, TermId::Strike],
        message: "Strike score is a starting point only; change-in-law provisions allow price \
                  adjustment.",
        fires: |_, f| f.changeinlaw.strike_fixed == Some(StrikeFixed::StrikeAdjusts),
    },
    Rule {
        terms: &[TermId::SellerPa, TermId::Eod],
        message: "Credit failure EOD exists but seller credit support is weak; trigger may be \
                  meaningless.",
        fires: |sc, f| {
            s(sc, TermId::SellerPa) > 60.0 && f.eod.credit_failure_as_eod == Some(YesNo::Yes)
        },
    },
];

/// Run every rule against the score map and collect the ones that fire,
/// in rule order.
pub fn check_interactions(scores: &Scores, facts: &Facts) -> Vec<InteractionFlag> {
    RULES
        .iter()
        .filter(|rule| (rule.fires)(scores, facts))
        .map(|rule| InteractionFlag {
            terms: rule.terms.to_vec(),
            message: rule.message.to_string(),
        })
        .collect()
}

#[cfg(test)]
#[path = "interactions_test.rs"]
mod tests;
