//! Contract-terms facts: assignment, force majeure, default, early
//! termination, change in law, reputation.

use serde::{Deserialize, Serialize};

use super::{Permission, TerminationRight, YesNo};

fact_enum! {
    AssignRight {
        Free => "free",
        ConsentNotUnreasonablyWithheld => "consent_not_unreasonably_withheld",
        ConsentRequired => "consent_required",
        NoAssignment => "no_assignment",
    }
}

fact_enum! {
    LenderAssignment {
        Permitted => "permitted",
        ConsentRequired => "consent_required",
        NotAddressed => "not_addressed",
    }
}

fact_enum! {
    AssigneeCreditRequirement {
        MustMeetOriginalStandards => "must_meet_original_standards",
        NoRequirement => "no_requirement",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssignmentFacts {
    pub buyer_assign_right: Option<AssignRight>,
    pub buyer_affiliate_transfer: Option<Permission>,
    pub seller_assign_right: Option<AssignRight>,
    pub seller_affiliate_transfer: Option<Permission>,
    pub lender_assignment: Option<LenderAssignment>,
    pub assignee_credit_requirement: Option<AssigneeCreditRequirement>,
}

fact_enum! {
    FmScope {
        NarrowObjective => "narrow_objective",
        Moderate => "moderate",
        BroadSubjective => "broad_subjective",
    }
}

fact_enum! {
    PaymentObligations { Continue => "continue", Excused => "excused" }
}

fact_enum! {
    PandemicTreatment {
        Excluded => "excluded",
        PerformanceBasedOnly => "performance_based_only",
        BroadInclusion => "broad_inclusion",
    }
}

fact_enum! {
    FmNotification {
        PromptWithMitigation => "prompt_with_mitigation",
        NoticeOnly => "notice_only",
        None => "none",
    }
}

fact_enum! {
    CodExtension { No => "no", Limited => "limited", Automatic => "automatic" }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForceMajeureFacts {
    pub fm_definition_scope: Option<FmScope>,
    pub payment_obligations: Option<PaymentObligations>,
    pub supply_chain_excluded: Option<YesNo>,
    pub economic_hardship_excluded: Option<YesNo>,
    pub equipment_failure_excluded: Option<YesNo>,
    pub transmission_congestion_excluded: Option<YesNo>,
    pub pandemic_treatment: Option<PandemicTreatment>,
    pub fm_duration_months: Option<f64>,
    pub termination_right: Option<TerminationRight>,
    pub notification_requirement: Option<FmNotification>,
    #[serde(rename = "codExtensionForFM")]
    pub cod_extension_for_fm: Option<CodExtension>,
}

fact_enum! {
    AbandonmentTrigger {
        ObjectiveTest => "objective_test",
        Subjective => "subjective",
        None => "none",
    }
}

fact_enum! {
    CureExtension {
        None => "none",
        Limited => "limited",
        UnlimitedDiligentPursuit => "unlimited_diligent_pursuit",
    }
}

fact_enum! {
    CrossDefault { Broad => "broad", Limited => "limited", None => "none" }
}

fact_enum! {
    DowngradeAsEod {
        NoCollateralPosting => "no_collateral_posting",
        YesEod => "yes_eod",
    }
}

fact_enum! {
    EodTriggerStandard {
        Objective => "objective",
        Mixed => "mixed",
        SubjectiveMae => "subjective_mae",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DefaultFacts {
    #[serde(rename = "longstopCODDefault")]
    pub longstop_cod_default: Option<YesNo>,
    pub abandonment_trigger: Option<AbandonmentTrigger>,
    pub payment_cure_days: Option<f64>,
    pub credit_support_cure_days: Option<f64>,
    pub material_breach_cure_days: Option<f64>,
    pub cure_extension_right: Option<CureExtension>,
    pub cross_default: Option<CrossDefault>,
    #[serde(rename = "downgradeAsEOD")]
    pub downgrade_as_eod: Option<DowngradeAsEod>,
    #[serde(rename = "creditFailureAsEOD")]
    pub credit_failure_as_eod: Option<YesNo>,
    pub eod_trigger_standard: Option<EodTriggerStandard>,
}

fact_enum! {
    TerminationStructure {
        TwoWayMtm => "two_way_mtm",
        TwoWayFormula => "two_way_formula",
        OneWayBuyerPays => "one_way_buyer_pays",
        WalkAway => "walk_away",
    }
}

fact_enum! {
    PreCodSellerPayment {
        FullReplacementValue => "full_replacement_value",
        ReturnOfSecurityOnly => "return_of_security_only",
        None => "none",
    }
}

fact_enum! {
    SellerPaymentCap {
        Uncapped => "uncapped",
        FixedCap => "fixed_cap",
        CappedAtCreditSupport => "capped_at_credit_support",
    }
}

fact_enum! {
    ValuationMethod {
        DealerQuotes => "dealer_quotes",
        ObjectiveForwardCurve => "objective_forward_curve",
        IndependentExpert => "independent_expert",
        SoleDiscretion => "sole_discretion",
    }
}

fact_enum! {
    ValuationDispute {
        IndependentExpert => "independent_expert",
        Arbitration => "arbitration",
        None => "none",
    }
}

fact_enum! {
    DiscountRate {
        MarketConsistent => "market_consistent",
        ContractuallyDefinedReasonable => "contractually_defined_reasonable",
        HighOrSellerDetermined => "high_or_seller_determined",
    }
}

fact_enum! {
    GenerationAssumptions {
        ObjectiveCapacityFactor => "objective_capacity_factor",
        HistoricalActual => "historical_actual",
        SellerDetermined => "seller_determined",
    }
}

fact_enum! {
    Consistency { SameStructure => "same_structure", Different => "different" }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TerminationFacts {
    pub termination_structure: Option<TerminationStructure>,
    #[serde(rename = "preCODSellerPayment")]
    pub pre_cod_seller_payment: Option<PreCodSellerPayment>,
    pub seller_payment_cap: Option<SellerPaymentCap>,
    pub valuation_method: Option<ValuationMethod>,
    pub dispute_resolution: Option<ValuationDispute>,
    pub discount_rate: Option<DiscountRate>,
    pub generation_assumptions: Option<GenerationAssumptions>,
    #[serde(rename = "preCODPostCODConsistency")]
    pub pre_post_cod_consistency: Option<Consistency>,
}

fact_enum! {
    StrikeFixed {
        YesRegardless => "yes_regardless",
        ReliefForIllegalityOnly => "relief_for_illegality_only",
        ReopenerDefinedEvents => "reopener_defined_events",
        StrikeAdjusts => "strike_adjusts",
    }
}

fact_enum! {
    TaxCreditTreatment {
        SellerAbsorbs => "seller_absorbs",
        ReliefOnlyDiscriminatory => "relief_only_discriminatory",
        StrikeReprices => "strike_reprices",
    }
}

fact_enum! {
    TariffTreatment {
        SellerAbsorbs => "seller_absorbs",
        NotChangeInLaw => "not_change_in_law",
        ChangeInLawRelief => "change_in_law_relief",
    }
}

fact_enum! {
    EconomicImpactStandard {
        IllegalityImpossibility => "illegality_impossibility",
        DiscriminatoryProjectSpecific => "discriminatory_project_specific",
        BroadMaterialAdverse => "broad_material_adverse",
    }
}

fact_enum! {
    ReopenerMechanism {
        None => "none",
        NegotiateThenTerminate => "negotiate_then_terminate",
        AutomaticAdjustment => "automatic_adjustment",
    }
}

fact_enum! {
    PreCodProtection {
        SellerObligated => "seller_obligated",
        TerminationIfIllegal => "termination_if_illegal",
        BroadRelief => "broad_relief",
    }
}

fact_enum! {
    PostCodProtection {
        IllegalityOnly => "illegality_only",
        TargetedRelief => "targeted_relief",
        BroadRelief => "broad_relief",
    }
}

fact_enum! {
    FinancingRelief { Excluded => "excluded", Included => "included" }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangeInLawFacts {
    pub strike_fixed: Option<StrikeFixed>,
    pub tax_credit_treatment: Option<TaxCreditTreatment>,
    pub tariff_treatment: Option<TariffTreatment>,
    pub economic_impact_standard: Option<EconomicImpactStandard>,
    pub reopener_mechanism: Option<ReopenerMechanism>,
    #[serde(rename = "preCODProtection")]
    pub pre_cod_protection: Option<PreCodProtection>,
    #[serde(rename = "postCODProtection")]
    pub post_cod_protection: Option<PostCodProtection>,
    pub financing_terms_as_relief: Option<FinancingRelief>,
}

fact_enum! {
    ReputationTerminationRight { BuyerRight => "buyer_right", Mutual => "mutual", None => "none" }
}

fact_enum! {
    ComplianceReps {
        Comprehensive => "comprehensive",
        Standard => "standard",
        Minimal => "minimal",
        None => "none",
    }
}

fact_enum! {
    ReputationEventDefinition {
        ObjectiveDefined => "objective_defined",
        SubjectiveBuyerDiscretion => "subjective_buyer_discretion",
        NotDefined => "not_defined",
    }
}

fact_enum! {
    SellerAssignmentApproval {
        BuyerApprovalIncludesReputation => "buyer_approval_includes_reputation",
        CreditworthinessOnly => "creditworthiness_only",
        NoApproval => "no_approval",
    }
}

fact_enum! {
    CommunityOpposition { Addressed => "addressed", NotAddressed => "not_addressed" }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReputationFacts {
    pub reputation_termination_right: Option<ReputationTerminationRight>,
    pub seller_compliance_reps: Option<ComplianceReps>,
    pub reputation_event_definition: Option<ReputationEventDefinition>,
    pub seller_assignment_approval: Option<SellerAssignmentApproval>,
    pub community_opposition_provision: Option<CommunityOpposition>,
}
