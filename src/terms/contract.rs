//! Contract-terms scorers. Force majeure, early termination and change in
//! law can raise several flags at once; the first one is the headline.

use crate::facts::{
    AbandonmentTrigger, AssignRight, AssigneeCreditRequirement, AssignmentFacts, ChangeInLawFacts,
    CodExtension, CommunityOpposition, ComplianceReps, Consistency, CrossDefault, CureExtension,
    DefaultFacts, DiscountRate, DowngradeAsEod, EconomicImpactStandard, EodTriggerStandard,
    FinancingRelief, FmNotification, FmScope, ForceMajeureFacts, GenerationAssumptions,
    LenderAssignment, PandemicTreatment, PaymentObligations, Permission, PostCodProtection,
    PreCodProtection, PreCodSellerPayment, ReopenerMechanism, ReputationEventDefinition,
    ReputationFacts, ReputationTerminationRight, SellerAssignmentApproval, SellerPaymentCap,
    StrikeFixed, TariffTreatment, TaxCreditTreatment, TerminationFacts, TerminationRight,
    TerminationStructure, ValuationDispute, ValuationMethod, YesNo,
};
use crate::numeric::{Step, step_at_most};
use crate::terms::{TermResult, yes_no};

pub fn assignment(f: &AssignmentFacts) -> TermResult {
    // Buyer freedom to assign is good for the buyer; seller freedom is not.
    let mut s = match f.buyer_assign_right.unwrap_or_default() {
        AssignRight::Free => 0.0,
        AssignRight::ConsentNotUnreasonablyWithheld => 8.0,
        AssignRight::ConsentRequired => 18.0,
        AssignRight::NoAssignment => 30.0,
        AssignRight::NotSpecified => 25.0,
    };
    s += match f.seller_assign_right.unwrap_or_default() {
        AssignRight::NoAssignment => 0.0,
        AssignRight::ConsentRequired => 8.0,
        AssignRight::ConsentNotUnreasonablyWithheld => 18.0,
        AssignRight::Free => 35.0,
        AssignRight::NotSpecified => 20.0,
    };
    s += match f.buyer_affiliate_transfer.unwrap_or_default() {
        Permission::Permitted => -3.0,
        Permission::NotPermitted => 3.0,
        Permission::NotSpecified => 2.0,
    };
    s += match f.seller_affiliate_transfer.unwrap_or_default() {
        Permission::Permitted => 3.0,
        Permission::NotPermitted => -3.0,
        Permission::NotSpecified => 2.0,
    };
    s += match f.lender_assignment.unwrap_or_default() {
        LenderAssignment::Permitted => 0.0,
        LenderAssignment::ConsentRequired => 3.0,
        LenderAssignment::NotAddressed => 5.0,
        LenderAssignment::NotSpecified => 3.0,
    };
    s += match f.assignee_credit_requirement.unwrap_or_default() {
        AssigneeCreditRequirement::MustMeetOriginalStandards => -5.0,
        AssigneeCreditRequirement::NoRequirement => 5.0,
        AssigneeCreditRequirement::NotSpecified => 3.0,
    };

    TermResult::scored(s).missing_if(
        f.buyer_assign_right.is_none(),
        "Assignment provisions not defined.",
    )
}

const FM_DURATION: &[Step] = &[
    Step::new(12.0, -5.0),
    Step::new(18.0, -2.0),
    Step::new(24.0, 0.0),
];

pub fn force_majeure(f: &ForceMajeureFacts) -> TermResult {
    use PaymentObligations::{Continue, Excused};
    let mut s = match (
        f.fm_definition_scope.unwrap_or_default(),
        f.payment_obligations.unwrap_or_default(),
    ) {
        (FmScope::NarrowObjective, Continue) => 5.0,
        (FmScope::NarrowObjective, Excused) => 25.0,
        (FmScope::NarrowObjective, _) => 15.0,
        (FmScope::Moderate, Continue) => 20.0,
        (FmScope::Moderate, Excused) => 40.0,
        (FmScope::Moderate, _) => 32.0,
        (FmScope::BroadSubjective, Continue) => 40.0,
        (FmScope::BroadSubjective, Excused) => 65.0,
        (FmScope::BroadSubjective, _) => 55.0,
        (FmScope::NotSpecified, _) => 60.0,
    };

    s += yes_no(f.supply_chain_excluded, -5.0, 7.0, 4.0);
    s += yes_no(f.economic_hardship_excluded, -3.0, 8.0, 4.0);
    s += yes_no(f.equipment_failure_excluded, -3.0, 5.0, 3.0);
    s += yes_no(f.transmission_congestion_excluded, -2.0, 5.0, 3.0);
    s += match f.pandemic_treatment.unwrap_or_default() {
        PandemicTreatment::Excluded => -3.0,
        PandemicTreatment::PerformanceBasedOnly => 0.0,
        PandemicTreatment::BroadInclusion => 5.0,
        PandemicTreatment::NotSpecified => 3.0,
    };
    s += match f.termination_right.unwrap_or_default() {
        TerminationRight::Buyer => -5.0,
        TerminationRight::Mutual => -2.0,
        TerminationRight::Seller => 5.0,
        TerminationRight::None => 8.0,
        TerminationRight::NotSpecified => 5.0,
    };
    s += match f.notification_requirement.unwrap_or_default() {
        FmNotification::PromptWithMitigation => -3.0,
        FmNotification::NoticeOnly => 0.0,
        FmNotification::None => 5.0,
        FmNotification::NotSpecified => 3.0,
    };
    s += match f.cod_extension_for_fm.unwrap_or_default() {
        CodExtension::No => -5.0,
        CodExtension::Limited => 0.0,
        CodExtension::Automatic => 7.0,
        CodExtension::NotSpecified => 4.0,
    };
    s += step_at_most(f.fm_duration_months, FM_DURATION, 5.0, 8.0);

    let open_ended = f.fm_duration_months.is_none_or(|d| d > 24.0);
    TermResult::scored(s)
        .missing_if(
            f.fm_definition_scope.is_none(),
            "Force majeure not defined; broad FM weakens delay, availability, production \
             guarantee and curtailment provisions at once.",
        )
        .flag_if(
            f.economic_hardship_excluded == Some(YesNo::No),
            "Commercial impracticability included as FM.",
        )
        .flag_if(
            f.equipment_failure_excluded == Some(YesNo::No),
            "Equipment failure included as standalone FM.",
        )
        .flag_if(
            f.transmission_congestion_excluded == Some(YesNo::No),
            "Transmission congestion included as FM.",
        )
        .flag_if(
            f.cod_extension_for_fm == Some(CodExtension::Automatic),
            "Automatic COD extension for any FM event.",
        )
        .flag_if(
            f.termination_right == Some(TerminationRight::None) && open_ended,
            "Open-ended FM with no termination right.",
        )
}

const PAYMENT_CURE: &[Step] = &[Step::new(2.0, -3.0), Step::new(5.0, 0.0), Step::new(10.0, 3.0)];
const CREDIT_CURE: &[Step] = &[Step::new(2.0, -3.0), Step::new(5.0, -1.0), Step::new(10.0, 0.0)];
const BREACH_CURE: &[Step] = &[Step::new(30.0, -3.0), Step::new(60.0, 0.0), Step::new(90.0, 3.0)];

pub fn events_of_default(f: &DefaultFacts) -> TermResult {
    use AbandonmentTrigger::{ObjectiveTest, Subjective};
    let mut s = match (
        f.longstop_cod_default.unwrap_or_default(),
        f.abandonment_trigger.unwrap_or_default(),
    ) {
        (YesNo::Yes, ObjectiveTest) => 5.0,
        (YesNo::Yes, Subjective) => 18.0,
        (YesNo::Yes, AbandonmentTrigger::None) => 30.0,
        (YesNo::Yes, AbandonmentTrigger::NotSpecified) => 25.0,
        (YesNo::No, ObjectiveTest) => 30.0,
        (YesNo::No, Subjective) => 42.0,
        (YesNo::No, AbandonmentTrigger::None) => 65.0,
        (YesNo::No, AbandonmentTrigger::NotSpecified) => 55.0,
        (YesNo::NotSpecified, _) => 60.0,
    };

    s += step_at_most(f.payment_cure_days, PAYMENT_CURE, 5.0, 3.0);
    s += step_at_most(f.credit_support_cure_days, CREDIT_CURE, 5.0, 3.0);
    s += step_at_most(f.material_breach_cure_days, BREACH_CURE, 7.0, 3.0);
    s += match f.cure_extension_right.unwrap_or_default() {
        CureExtension::None => -3.0,
        CureExtension::Limited => 0.0,
        CureExtension::UnlimitedDiligentPursuit => 7.0,
        CureExtension::NotSpecified => 3.0,
    };
    s += match f.cross_default.unwrap_or_default() {
        CrossDefault::Broad => -5.0,
        CrossDefault::Limited => -2.0,
        CrossDefault::None => 5.0,
        CrossDefault::NotSpecified => 3.0,
    };
    s += match f.downgrade_as_eod.unwrap_or_default() {
        DowngradeAsEod::NoCollateralPosting => -3.0,
        DowngradeAsEod::YesEod => 5.0,
        DowngradeAsEod::NotSpecified => 2.0,
    };
    s += yes_no(f.credit_failure_as_eod, -3.0, 5.0, 3.0);
    s += match f.eod_trigger_standard.unwrap_or_default() {
        EodTriggerStandard::Objective => -5.0,
        EodTriggerStandard::Mixed => 0.0,
        EodTriggerStandard::SubjectiveMae => 7.0,
        EodTriggerStandard::NotSpecified => 4.0,
    };

    TermResult::scored(s).missing_if(
        f.longstop_cod_default.is_none(),
        "Events of default not defined; buyer has no trigger to exit a non-performing deal.",
    )
}

pub fn early_termination(f: &TerminationFacts) -> TermResult {
    use PreCodSellerPayment::{FullReplacementValue, ReturnOfSecurityOnly};
    let structure = f.termination_structure.unwrap_or_default();
    let mut s = match (structure, f.pre_cod_seller_payment.unwrap_or_default()) {
        (TerminationStructure::TwoWayMtm, FullReplacementValue) => 5.0,
        (TerminationStructure::TwoWayMtm, ReturnOfSecurityOnly) => 35.0,
        (TerminationStructure::TwoWayMtm, PreCodSellerPayment::None) => 55.0,
        (TerminationStructure::TwoWayMtm, PreCodSellerPayment::NotSpecified) => 30.0,
        (TerminationStructure::TwoWayFormula, FullReplacementValue) => 12.0,
        (TerminationStructure::TwoWayFormula, ReturnOfSecurityOnly) => 38.0,
        (TerminationStructure::TwoWayFormula, PreCodSellerPayment::None) => 58.0,
        (TerminationStructure::TwoWayFormula, PreCodSellerPayment::NotSpecified) => 35.0,
        (TerminationStructure::OneWayBuyerPays, _) => 75.0,
        (TerminationStructure::WalkAway, _) => 80.0,
        (TerminationStructure::NotSpecified, _) => 65.0,
    };

    s += match f.seller_payment_cap.unwrap_or_default() {
        SellerPaymentCap::Uncapped => -5.0,
        SellerPaymentCap::FixedCap => 3.0,
        SellerPaymentCap::CappedAtCreditSupport => 10.0,
        SellerPaymentCap::NotSpecified => 5.0,
    };
    s += match f.valuation_method.unwrap_or_default() {
        ValuationMethod::DealerQuotes => -5.0,
        ValuationMethod::ObjectiveForwardCurve => -3.0,
        ValuationMethod::IndependentExpert => -2.0,
        ValuationMethod::SoleDiscretion => 10.0,
        ValuationMethod::NotSpecified => 5.0,
    };
    s += match f.dispute_resolution.unwrap_or_default() {
        ValuationDispute::IndependentExpert => -3.0,
        ValuationDispute::Arbitration => -1.0,
        ValuationDispute::None => 5.0,
        ValuationDispute::NotSpecified => 3.0,
    };
    s += match f.discount_rate.unwrap_or_default() {
        DiscountRate::MarketConsistent => -3.0,
        DiscountRate::ContractuallyDefinedReasonable => 0.0,
        DiscountRate::HighOrSellerDetermined => 5.0,
        DiscountRate::NotSpecified => 3.0,
    };
    s += match f.generation_assumptions.unwrap_or_default() {
        GenerationAssumptions::ObjectiveCapacityFactor => -3.0,
        GenerationAssumptions::HistoricalActual => -1.0,
        GenerationAssumptions::SellerDetermined => 5.0,
        GenerationAssumptions::NotSpecified => 3.0,
    };
    s += match f.pre_post_cod_consistency.unwrap_or_default() {
        Consistency::SameStructure => -2.0,
        Consistency::Different => 3.0,
        Consistency::NotSpecified => 2.0,
    };

    TermResult::scored(s)
        .missing_if(
            f.termination_structure.is_none(),
            "Termination payment not defined; this is the single biggest economic protection \
             term.",
        )
        .flag_if(
            structure == TerminationStructure::WalkAway,
            "Walk-away termination: buyer has no recovery on early exit.",
        )
        .flag_if(
            structure == TerminationStructure::OneWayBuyerPays,
            "One-way termination: buyer pays seller but not vice versa.",
        )
}

fn change_in_law_base(fixed: StrikeFixed, tax: TaxCreditTreatment) -> f64 {
    use TaxCreditTreatment::{ReliefOnlyDiscriminatory, SellerAbsorbs, StrikeReprices};
    match (fixed, tax) {
        (StrikeFixed::YesRegardless, SellerAbsorbs) => 5.0,
        (StrikeFixed::YesRegardless, ReliefOnlyDiscriminatory) => 15.0,
        (StrikeFixed::YesRegardless, _) => 12.0,
        (StrikeFixed::ReliefForIllegalityOnly, SellerAbsorbs) => 10.0,
        (StrikeFixed::ReliefForIllegalityOnly, ReliefOnlyDiscriminatory) => 22.0,
        (StrikeFixed::ReliefForIllegalityOnly, _) => 20.0,
        (StrikeFixed::ReopenerDefinedEvents, SellerAbsorbs) => 25.0,
        (StrikeFixed::ReopenerDefinedEvents, ReliefOnlyDiscriminatory) => 35.0,
        (StrikeFixed::ReopenerDefinedEvents, StrikeReprices) => 50.0,
        (StrikeFixed::ReopenerDefinedEvents, TaxCreditTreatment::NotSpecified) => 40.0,
        (StrikeFixed::StrikeAdjusts, SellerAbsorbs) => 40.0,
        (StrikeFixed::StrikeAdjusts, ReliefOnlyDiscriminatory) => 50.0,
        (StrikeFixed::StrikeAdjusts, StrikeReprices) => 68.0,
        (StrikeFixed::StrikeAdjusts, TaxCreditTreatment::NotSpecified) => 58.0,
        (StrikeFixed::NotSpecified, _) => 60.0,
    }
}

pub fn change_in_law(f: &ChangeInLawFacts) -> TermResult {
    let mut s = change_in_law_base(
        f.strike_fixed.unwrap_or_default(),
        f.tax_credit_treatment.unwrap_or_default(),
    );

    s += match f.tariff_treatment.unwrap_or_default() {
        TariffTreatment::SellerAbsorbs | TariffTreatment::NotChangeInLaw => -3.0,
        TariffTreatment::ChangeInLawRelief => 7.0,
        TariffTreatment::NotSpecified => 4.0,
    };
    s += match f.economic_impact_standard.unwrap_or_default() {
        EconomicImpactStandard::IllegalityImpossibility => -5.0,
        EconomicImpactStandard::DiscriminatoryProjectSpecific => -2.0,
        EconomicImpactStandard::BroadMaterialAdverse => 8.0,
        EconomicImpactStandard::NotSpecified => 4.0,
    };
    s += match f.reopener_mechanism.unwrap_or_default() {
        ReopenerMechanism::None => -5.0,
        ReopenerMechanism::NegotiateThenTerminate => 0.0,
        ReopenerMechanism::AutomaticAdjustment => 8.0,
        ReopenerMechanism::NotSpecified => 4.0,
    };
    s += match f.pre_cod_protection.unwrap_or_default() {
        PreCodProtection::SellerObligated => -5.0,
        PreCodProtection::TerminationIfIllegal => 0.0,
        PreCodProtection::BroadRelief => 7.0,
        PreCodProtection::NotSpecified => 4.0,
    };
    s += match f.post_cod_protection.unwrap_or_default() {
        PostCodProtection::IllegalityOnly => -3.0,
        PostCodProtection::TargetedRelief => 0.0,
        PostCodProtection::BroadRelief => 5.0,
        PostCodProtection::NotSpecified => 3.0,
    };
    s += match f.financing_terms_as_relief.unwrap_or_default() {
        FinancingRelief::Excluded => -3.0,
        FinancingRelief::Included => 7.0,
        FinancingRelief::NotSpecified => 4.0,
    };

    TermResult::scored(s)
        .missing_if(
            f.strike_fixed.is_none(),
            "Change in law not defined; critical gap in current IRA and tariff environment.",
        )
        .flag_if(
            f.tax_credit_treatment == Some(TaxCreditTreatment::StrikeReprices),
            "Strike score should be read as a starting point: the strike reprices automatically \
             for tax credit changes.",
        )
        .flag_if(
            f.tariff_treatment == Some(TariffTreatment::ChangeInLawRelief),
            "Tariffs included as change-in-law relief; seller can reprice for tariff cost \
             increases.",
        )
}

pub fn reputation(f: &ReputationFacts) -> TermResult {
    let mut s = match f.reputation_termination_right.unwrap_or_default() {
        ReputationTerminationRight::BuyerRight => 10.0,
        ReputationTerminationRight::Mutual => 25.0,
        ReputationTerminationRight::None => 55.0,
        ReputationTerminationRight::NotSpecified => 50.0,
    };
    s += match f.seller_compliance_reps.unwrap_or_default() {
        ComplianceReps::Comprehensive => -5.0,
        ComplianceReps::Standard => 0.0,
        ComplianceReps::Minimal => 3.0,
        ComplianceReps::None => 8.0,
        ComplianceReps::NotSpecified => 5.0,
    };
    s += match f.reputation_event_definition.unwrap_or_default() {
        ReputationEventDefinition::ObjectiveDefined => -3.0,
        ReputationEventDefinition::SubjectiveBuyerDiscretion => -5.0,
        ReputationEventDefinition::NotDefined => 5.0,
        ReputationEventDefinition::NotSpecified => 3.0,
    };
    s += match f.seller_assignment_approval.unwrap_or_default() {
        SellerAssignmentApproval::BuyerApprovalIncludesReputation => -3.0,
        SellerAssignmentApproval::CreditworthinessOnly => 2.0,
        SellerAssignmentApproval::NoApproval => 5.0,
        SellerAssignmentApproval::NotSpecified => 3.0,
    };
    s += match f.community_opposition_provision.unwrap_or_default() {
        CommunityOpposition::Addressed => -3.0,
        CommunityOpposition::NotAddressed => 3.0,
        CommunityOpposition::NotSpecified => 2.0,
    };

    TermResult::scored(s).missing_if(
        f.reputation_termination_right.is_none(),
        "No reputational provisions; buyer has no exit right for ESG violations or community \
         opposition.",
    )
}

#[cfg(test)]
#[path = "contract_test.rs"]
mod tests;
