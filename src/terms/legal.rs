//! Legal and administrative scorers. These are single-base-plus-modifier
//! tables with no cross-field dependencies.

use crate::facts::{
    AccountingChangeRelief, AccountingFacts, AccountingReps, ApprovalProcess, AttributeExclusivity,
    BuyerExclusivity, BuyerPublicityRight, ConfScope, ConfidentialityFacts, CostBearer,
    DisputeForum, EsgCarveout, ExclusivityFacts, ExpenseFacts, ExpertDetermination, FeePayer,
    GoverningLaw, GoverningLawFacts, HedgeLanguage, JointAnnouncement, LegalFees, LogoRestriction,
    MutualObligation, NegotiationExclusivity, OutputExclusivity, Permission, PublicityFacts,
    SellerUseOfName, SurvivalPeriod, TaxIndemnity, Venue,
};
use crate::terms::{TermResult, yes_no};

pub fn governing_law(f: &GoverningLawFacts) -> TermResult {
    let mut s = match f.governing_law.unwrap_or_default() {
        GoverningLaw::NewYork => 15.0,
        GoverningLaw::Delaware => 18.0,
        GoverningLaw::BuyerHomeState => 10.0,
        GoverningLaw::ProjectState => 30.0,
        GoverningLaw::Other => 40.0,
        GoverningLaw::NotSpecified => 50.0,
    };
    s += match f.dispute_resolution.unwrap_or_default() {
        DisputeForum::Arbitration => -3.0,
        DisputeForum::MediationThenArbitration => -5.0,
        DisputeForum::Litigation => 0.0,
        DisputeForum::MediationThenLitigation => -2.0,
        DisputeForum::NotSpecified => 5.0,
    };
    s += match f.venue.unwrap_or_default() {
        Venue::BuyerFavorable => -5.0,
        Venue::Neutral => 0.0,
        Venue::SellerFavorable => 5.0,
        Venue::NotSpecified => 3.0,
    };
    s += yes_no(f.jury_waiver, -3.0, 3.0, 2.0);
    s += match f.expert_determination.unwrap_or_default() {
        ExpertDetermination::YesForTechnical => -5.0,
        ExpertDetermination::No => 3.0,
        ExpertDetermination::NotSpecified => 2.0,
    };

    TermResult::scored(s).missing_if(
        f.governing_law.is_none(),
        "Governing law not defined; creates procedural uncertainty.",
    )
}

pub fn confidentiality(f: &ConfidentialityFacts) -> TermResult {
    let mut s = match f.conf_scope.unwrap_or_default() {
        ConfScope::NarrowPricingOnly => 15.0,
        ConfScope::StandardAllTerms => 30.0,
        ConfScope::BroadExistenceIncluded => 55.0,
        ConfScope::NotSpecified => 45.0,
    };
    s += match f.esg_reporting_carveout.unwrap_or_default() {
        EsgCarveout::Explicit => -5.0,
        EsgCarveout::Implied => -2.0,
        EsgCarveout::None => 8.0,
        EsgCarveout::NotSpecified => 5.0,
    };
    s += yes_no(f.regulatory_filing_carveout, -3.0, 5.0, 3.0);
    s += match f.affiliate_disclosure.unwrap_or_default() {
        Permission::Permitted => -3.0,
        Permission::NotPermitted => 3.0,
        Permission::NotSpecified => 2.0,
    };
    s += match f.survival_period.unwrap_or_default() {
        SurvivalPeriod::TwoYearsOrLess => -3.0,
        SurvivalPeriod::ThreeToFiveYears => 0.0,
        SurvivalPeriod::Indefinite => 5.0,
        SurvivalPeriod::NotSpecified => 3.0,
    };
    s += match f.mutual_obligation.unwrap_or_default() {
        MutualObligation::Mutual => -2.0,
        MutualObligation::BuyerOnly => 5.0,
        MutualObligation::NotSpecified => 3.0,
    };

    TermResult::scored(s).missing_if(
        f.conf_scope.is_none(),
        "Confidentiality not defined; clarify ESG reporting carveouts.",
    )
}

pub fn exclusivity(f: &ExclusivityFacts) -> TermResult {
    let mut s = match f.seller_output_exclusivity.unwrap_or_default() {
        OutputExclusivity::FullProjectCommitted => 10.0,
        OutputExclusivity::PartialProject => 40.0,
        OutputExclusivity::NotSpecified => 55.0,
    };
    s += match f.buyer_exclusivity.unwrap_or_default() {
        BuyerExclusivity::None => -5.0,
        BuyerExclusivity::LimitedSameIso => 3.0,
        BuyerExclusivity::Broad => 10.0,
        BuyerExclusivity::NotSpecified => 3.0,
    };
    s += match f.attribute_exclusivity.unwrap_or_default() {
        AttributeExclusivity::AllToBuyer => -3.0,
        AttributeExclusivity::SomeRetained => 5.0,
        AttributeExclusivity::NotSpecified => 3.0,
    };
    s += match f.negotiation_exclusivity.unwrap_or_default() {
        NegotiationExclusivity::None => 0.0,
        NegotiationExclusivity::TimeLimited => 2.0,
        NegotiationExclusivity::OpenEnded => 7.0,
        NegotiationExclusivity::NotSpecified => 2.0,
    };

    TermResult::scored(s).missing_if(
        f.seller_output_exclusivity.is_none(),
        "Exclusivity not defined.",
    )
}

fn cost_delta(bearer: Option<CostBearer>) -> f64 {
    match bearer.unwrap_or_default() {
        CostBearer::SellerBears => -5.0,
        CostBearer::Shared => 0.0,
        CostBearer::BuyerBears => 5.0,
        CostBearer::NotSpecified => 3.0,
    }
}

pub fn expenses(f: &ExpenseFacts) -> TermResult {
    let mut s = match f.legal_fees.unwrap_or_default() {
        LegalFees::EachOwn => 20.0,
        LegalFees::Shared => 30.0,
        LegalFees::BuyerBears => 60.0,
        LegalFees::NotSpecified => 35.0,
    };
    s += cost_delta(f.ongoing_admin_costs);
    s += match f.registry_fees.unwrap_or_default() {
        FeePayer::SellerPays => -3.0,
        FeePayer::Shared => 0.0,
        FeePayer::BuyerPays => 3.0,
        FeePayer::NotSpecified => 2.0,
    };
    s += cost_delta(f.ie_and_study_costs);

    TermResult::scored(s).missing_if(
        f.legal_fees.is_none(),
        "Expense allocation not defined; market standard is each party bears its own.",
    )
}

pub fn accounting(f: &AccountingFacts) -> TermResult {
    let mut s = match f.accounting_representations.unwrap_or_default() {
        AccountingReps::BothParties => 15.0,
        AccountingReps::BuyerOnly => 30.0,
        AccountingReps::None => 50.0,
        AccountingReps::NotSpecified => 45.0,
    };
    s += match f.hedge_accounting_language.unwrap_or_default() {
        HedgeLanguage::SupportiveStructure => -5.0,
        HedgeLanguage::Neutral => 0.0,
        HedgeLanguage::ProblematicFeatures => 10.0,
        HedgeLanguage::NotSpecified => 3.0,
    };
    s += match f.tax_indemnity.unwrap_or_default() {
        TaxIndemnity::Mutual => -3.0,
        TaxIndemnity::OneWayBuyer => 5.0,
        TaxIndemnity::None => 3.0,
        TaxIndemnity::NotSpecified => 2.0,
    };
    s += match f.change_in_accounting_treatment.unwrap_or_default() {
        AccountingChangeRelief::NoRelief => 0.0,
        AccountingChangeRelief::Reopener => -3.0,
        AccountingChangeRelief::TerminationRight => -5.0,
        AccountingChangeRelief::NotSpecified => 3.0,
    };

    TermResult::scored(s).missing_if(
        f.accounting_representations.is_none(),
        "Accounting and tax not addressed; consult advisors for hedge accounting eligibility.",
    )
}

pub fn publicity(f: &PublicityFacts) -> TermResult {
    let mut s = match f.joint_announcement_required.unwrap_or_default() {
        JointAnnouncement::YesMutualApproval => 15.0,
        JointAnnouncement::NotificationOnly => 35.0,
        JointAnnouncement::NoRestriction => 55.0,
        JointAnnouncement::NotSpecified => 45.0,
    };
    s += match f.buyer_publicity_right.unwrap_or_default() {
        BuyerPublicityRight::BroadEsgMarketing => -5.0,
        BuyerPublicityRight::LimitedWithApproval => 0.0,
        BuyerPublicityRight::Restricted => 8.0,
        BuyerPublicityRight::NotSpecified => 3.0,
    };
    s += match f.seller_use_of_buyer_name.unwrap_or_default() {
        SellerUseOfName::ProhibitedWithoutConsent => -5.0,
        SellerUseOfName::PermittedWithNotice => 2.0,
        SellerUseOfName::Unrestricted => 8.0,
        SellerUseOfName::NotSpecified => 5.0,
    };
    s += match f.logo_trademark_restriction.unwrap_or_default() {
        LogoRestriction::PriorWrittenConsent => -3.0,
        LogoRestriction::Permitted | LogoRestriction::NotAddressed => 5.0,
        LogoRestriction::NotSpecified => 3.0,
    };
    s += match f.approval_process.unwrap_or_default() {
        ApprovalProcess::PriorWrittenConsent => -3.0,
        ApprovalProcess::ReasonableAdvanceNotice => 0.0,
        ApprovalProcess::NoProcess => 5.0,
        ApprovalProcess::NotSpecified => 3.0,
    };

    TermResult::scored(s).missing_if(
        f.joint_announcement_required.is_none(),
        "Publicity not defined; clarify buyer ESG marketing rights and seller brand use \
         restrictions.",
    )
}

#[cfg(test)]
#[path = "legal_test.rs"]
mod tests;
