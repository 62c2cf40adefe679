//! Per-term scorers and the term catalog.
//!
//! Each of the 35 terms maps its facts to a `TermResult`. Categorical
//! scorers look up a base score from a small matrix, add independent
//! modifiers, and clamp once at the end. Scores run 0 (buyer-favorable) to
//! 100 (red flag).

pub mod contract;
pub mod credit;
pub mod curtailment;
pub mod development;
pub mod environmental;
pub mod legal;
pub mod pricing;

use std::fmt;

use serde::Serialize;

use crate::context::DealContext;
use crate::facts::{Facts, YesNo};
use crate::numeric::clamp;

/// Score given to terms that could not be scored (unsupported combination
/// or no price to place on a ladder).
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Display grouping, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TermGroup {
    Pricing,
    Shape,
    Dev,
    Credit,
    Contract,
    Recs,
    Legal,
}

impl TermGroup {
    pub const ALL: [TermGroup; 7] = [
        TermGroup::Pricing,
        TermGroup::Shape,
        TermGroup::Dev,
        TermGroup::Credit,
        TermGroup::Contract,
        TermGroup::Recs,
        TermGroup::Legal,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TermGroup::Pricing => "Pricing & Settlement",
            TermGroup::Shape => "Shape & Curtailment",
            TermGroup::Dev => "Project Development",
            TermGroup::Credit => "Credit & Collateral",
            TermGroup::Contract => "Contract Terms",
            TermGroup::Recs => "RECs & Facility Attributes",
            TermGroup::Legal => "Legal & Administrative",
        }
    }

    pub fn terms(self) -> impl Iterator<Item = TermId> {
        TermId::ALL.into_iter().filter(move |t| t.group() == self)
    }
}

/// How much room there usually is to negotiate a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flexibility {
    Flexible,
    Inflexible,
}

/// Stable identifier of a scored term. Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TermId {
    Strike,
    Floating,
    Interval,
    NegPrice,
    Invoice,
    Basis,
    MarketDisrupt,
    Scheduling,
    Curtailment,
    NonEcoCurtail,
    BasisCurtail,
    Ia,
    Cp,
    Delay,
    AvailMech,
    AvailGuaranteed,
    Permit,
    Cod,
    BuyerPa,
    SellerPa,
    Assign,
    Fm,
    Eod,
    ETerm,
    ChangeInLaw,
    Reputation,
    Product,
    Recs,
    Incentives,
    GovLaw,
    Conf,
    Excl,
    Expenses,
    Acct,
    Publicity,
}

impl TermId {
    pub const ALL: [TermId; 35] = [
        TermId::Strike,
        TermId::Floating,
        TermId::Interval,
        TermId::NegPrice,
        TermId::Invoice,
        TermId::Basis,
        TermId::MarketDisrupt,
        TermId::Scheduling,
        TermId::Curtailment,
        TermId::NonEcoCurtail,
        TermId::BasisCurtail,
        TermId::Ia,
        TermId::Cp,
        TermId::Delay,
        TermId::AvailMech,
        TermId::AvailGuaranteed,
        TermId::Permit,
        TermId::Cod,
        TermId::BuyerPa,
        TermId::SellerPa,
        TermId::Assign,
        TermId::Fm,
        TermId::Eod,
        TermId::ETerm,
        TermId::ChangeInLaw,
        TermId::Reputation,
        TermId::Product,
        TermId::Recs,
        TermId::Incentives,
        TermId::GovLaw,
        TermId::Conf,
        TermId::Excl,
        TermId::Expenses,
        TermId::Acct,
        TermId::Publicity,
    ];

    /// Wire id, also the key in the facts JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            TermId::Strike => "strike",
            TermId::Floating => "floating",
            TermId::Interval => "interval",
            TermId::NegPrice => "negprice",
            TermId::Invoice => "invoice",
            TermId::Basis => "basis",
            TermId::MarketDisrupt => "marketdisrupt",
            TermId::Scheduling => "scheduling",
            TermId::Curtailment => "curtailment",
            TermId::NonEcoCurtail => "nonecocurtail",
            TermId::BasisCurtail => "basiscurtail",
            TermId::Ia => "ia",
            TermId::Cp => "cp",
            TermId::Delay => "delay",
            TermId::AvailMech => "availmech",
            TermId::AvailGuaranteed => "availguaranteed",
            TermId::Permit => "permit",
            TermId::Cod => "cod",
            TermId::BuyerPa => "buyerpa",
            TermId::SellerPa => "sellerpa",
            TermId::Assign => "assign",
            TermId::Fm => "fm",
            TermId::Eod => "eod",
            TermId::ETerm => "eterm",
            TermId::ChangeInLaw => "changeinlaw",
            TermId::Reputation => "reputation",
            TermId::Product => "product",
            TermId::Recs => "recs",
            TermId::Incentives => "incentives",
            TermId::GovLaw => "govlaw",
            TermId::Conf => "conf",
            TermId::Excl => "excl",
            TermId::Expenses => "expenses",
            TermId::Acct => "acct",
            TermId::Publicity => "publicity",
        }
    }

    pub fn parse(id: &str) -> Option<TermId> {
        TermId::ALL.into_iter().find(|t| t.as_str() == id)
    }

    /// Human-readable term name.
    pub fn name(self) -> &'static str {
        match self {
            TermId::Strike => "Strike Price",
            TermId::Floating => "Floating Price & Settlement Formula",
            TermId::Interval => "Calculation Interval",
            TermId::NegPrice => "Negative Price Protection",
            TermId::Invoice => "Invoicing & Payment Terms",
            TermId::Basis => "Basis Risk & Settlement Point",
            TermId::MarketDisrupt => "Market Disruption",
            TermId::Scheduling => "Scheduling & Third-Party Charges",
            TermId::Curtailment => "Economic Curtailment",
            TermId::NonEcoCurtail => "Non-Economic Curtailment",
            TermId::BasisCurtail => "Basis Curtailment",
            TermId::Ia => "Interconnection Status",
            TermId::Cp => "Seller Conditions Precedent",
            TermId::Delay => "Delay & Shortfall Damages",
            TermId::AvailMech => "Mechanical Availability Guarantee",
            TermId::AvailGuaranteed => "Guaranteed Annual Production",
            TermId::Permit => "New Permitting Requirements",
            TermId::Cod => "Commercial Operation Date",
            TermId::BuyerPa => "Buyer Performance Assurance",
            TermId::SellerPa => "Seller Performance Assurance",
            TermId::Assign => "Seller Assignment",
            TermId::Fm => "Force Majeure",
            TermId::Eod => "Events of Default",
            TermId::ETerm => "Early Termination Rights",
            TermId::ChangeInLaw => "Change in Law",
            TermId::Reputation => "Reputational Disclosures",
            TermId::Product => "Product & Facility Attributes",
            TermId::Recs => "REC Delivery & Arbitrage",
            TermId::Incentives => "Incentives & Facility Attributes",
            TermId::GovLaw => "Governing Law",
            TermId::Conf => "Confidentiality",
            TermId::Excl => "Exclusivity",
            TermId::Expenses => "Expenses & Cost Allocation",
            TermId::Acct => "Accounting Treatment",
            TermId::Publicity => "Publicity Rights",
        }
    }

    pub fn group(self) -> TermGroup {
        use TermId::*;
        match self {
            Strike | Floating | Interval | NegPrice | Invoice | Basis | MarketDisrupt
            | Scheduling => TermGroup::Pricing,
            Curtailment | NonEcoCurtail | BasisCurtail => TermGroup::Shape,
            Ia | Cp | Delay | AvailMech | AvailGuaranteed | Permit | Cod => TermGroup::Dev,
            BuyerPa | SellerPa => TermGroup::Credit,
            Assign | Fm | Eod | ETerm | ChangeInLaw | Reputation => TermGroup::Contract,
            Product | Recs | Incentives => TermGroup::Recs,
            GovLaw | Conf | Excl | Expenses | Acct | Publicity => TermGroup::Legal,
        }
    }

    pub fn flexibility(self) -> Flexibility {
        use TermId::*;
        match self {
            Basis | Scheduling | BasisCurtail | Delay | Permit | Cod | BuyerPa | Eod
            | ChangeInLaw | Reputation | Recs | Conf | Publicity => Flexibility::Inflexible,
            _ => Flexibility::Flexible,
        }
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a term's score reflects real data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TermStatus {
    /// Scored from facts (possibly with some modifiers defaulted).
    Scored,
    /// The primary fact was absent; the score is a conservative default.
    Missing,
    /// No reference data for this market and technology; neutral score.
    Unsupported,
}

impl TermStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TermStatus::Scored => "scored",
            TermStatus::Missing => "missing",
            TermStatus::Unsupported => "unsupported",
        }
    }
}

/// Outcome of one scorer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermResult {
    pub score: f64,
    pub status: TermStatus,
    pub flags: Vec<String>,
}

impl TermResult {
    /// Clamp an accumulated total into a scored result.
    pub fn scored(total: f64) -> Self {
        Self {
            score: clamp(total),
            status: TermStatus::Scored,
            flags: Vec::new(),
        }
    }

    /// Neutral placeholder for a term that could not be placed on a scale.
    pub fn neutral(status: TermStatus) -> Self {
        Self {
            score: NEUTRAL_SCORE,
            status,
            flags: Vec::new(),
        }
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.push(flag.into());
        self
    }

    pub fn flag_if(self, condition: bool, flag: impl Into<String>) -> Self {
        if condition { self.with_flag(flag) } else { self }
    }

    /// Mark the result missing and flag it when the primary fact is absent.
    pub fn missing_if(mut self, absent: bool, flag: impl Into<String>) -> Self {
        if absent {
            self.status = TermStatus::Missing;
            self.flags.push(flag.into());
        }
        self
    }
}

/// Delta for a yes/no modifier.
pub(crate) fn yes_no(value: Option<YesNo>, yes: f64, no: f64, unspecified: f64) -> f64 {
    match value.unwrap_or_default() {
        YesNo::Yes => yes,
        YesNo::No => no,
        YesNo::NotSpecified => unspecified,
    }
}

/// Run the scorer for `id`.
pub fn score_term(id: TermId, facts: &Facts, ctx: &DealContext) -> TermResult {
    match id {
        TermId::Strike => pricing::strike(&facts.strike.or_deal(&facts.deal), ctx),
        TermId::Floating => pricing::floating(&facts.floating),
        TermId::Interval => pricing::interval(&facts.interval),
        TermId::NegPrice => pricing::negprice(&facts.negprice),
        TermId::Invoice => pricing::invoice(&facts.invoice),
        TermId::Basis => pricing::basis(&facts.basis),
        TermId::MarketDisrupt => pricing::marketdisrupt(&facts.marketdisrupt),
        TermId::Scheduling => pricing::scheduling(&facts.scheduling),
        TermId::Curtailment => curtailment::economic(&facts.curtailment),
        TermId::NonEcoCurtail => curtailment::non_economic(&facts.nonecocurtail),
        TermId::BasisCurtail => curtailment::basis(&facts.basiscurtail),
        TermId::Ia => development::interconnection(&facts.ia),
        TermId::Cp => development::conditions_precedent(&facts.cp),
        TermId::Delay => development::delay(&facts.delay, ctx),
        TermId::AvailMech => development::availability(&facts.availmech, ctx),
        TermId::AvailGuaranteed => development::production(&facts.availguaranteed, ctx),
        TermId::Permit => development::permit(&facts.permit),
        TermId::Cod => development::cod(&facts.cod),
        TermId::BuyerPa => credit::buyer_assurance(&facts.buyerpa, ctx),
        TermId::SellerPa => credit::seller_assurance(&facts.sellerpa, ctx),
        TermId::Assign => contract::assignment(&facts.assign),
        TermId::Fm => contract::force_majeure(&facts.fm),
        TermId::Eod => contract::events_of_default(&facts.eod),
        TermId::ETerm => contract::early_termination(&facts.eterm),
        TermId::ChangeInLaw => contract::change_in_law(&facts.changeinlaw),
        TermId::Reputation => contract::reputation(&facts.reputation),
        TermId::Product => environmental::product(&facts.product),
        TermId::Recs => environmental::recs(&facts.recs),
        TermId::Incentives => environmental::incentives(&facts.incentives),
        TermId::GovLaw => legal::governing_law(&facts.govlaw),
        TermId::Conf => legal::confidentiality(&facts.conf),
        TermId::Excl => legal::exclusivity(&facts.excl),
        TermId::Expenses => legal::expenses(&facts.expenses),
        TermId::Acct => legal::accounting(&facts.acct),
        TermId::Publicity => legal::publicity(&facts.publicity),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
