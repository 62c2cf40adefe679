use super::*;
use crate::terms::TermStatus;

fn assert_score(r: &TermResult, expected: f64) {
    assert!(
        (r.score - expected).abs() < 0.01,
        "expected {expected}, got {} ({:?})",
        r.score,
        r.flags
    );
}

// ── assign ──

#[test]
fn assignment_buyer_friendly_floors() {
    let f = AssignmentFacts {
        buyer_assign_right: Some(AssignRight::Free),
        buyer_affiliate_transfer: Some(Permission::Permitted),
        seller_assign_right: Some(AssignRight::NoAssignment),
        seller_affiliate_transfer: Some(Permission::NotPermitted),
        lender_assignment: Some(LenderAssignment::Permitted),
        assignee_credit_requirement: Some(AssigneeCreditRequirement::MustMeetOriginalStandards),
    };
    assert_score(&assignment(&f), 0.0);
}

#[test]
fn assignment_sides_are_scored_in_opposite_directions() {
    let f = AssignmentFacts {
        buyer_assign_right: Some(AssignRight::ConsentRequired),
        seller_assign_right: Some(AssignRight::Free),
        ..Default::default()
    };
    assert_score(&assignment(&f), 63.0);
}

#[test]
fn assignment_absent_is_missing() {
    let r = assignment(&AssignmentFacts::default());
    assert_score(&r, 55.0);
    assert_eq!(r.status, TermStatus::Missing);
}

// ── fm ──

#[test]
fn force_majeure_tight_clause() {
    let f = ForceMajeureFacts {
        fm_definition_scope: Some(FmScope::NarrowObjective),
        payment_obligations: Some(PaymentObligations::Continue),
        supply_chain_excluded: Some(YesNo::Yes),
        economic_hardship_excluded: Some(YesNo::Yes),
        equipment_failure_excluded: Some(YesNo::Yes),
        transmission_congestion_excluded: Some(YesNo::Yes),
        pandemic_treatment: Some(PandemicTreatment::Excluded),
        fm_duration_months: Some(12.0),
        termination_right: Some(TerminationRight::Buyer),
        notification_requirement: Some(FmNotification::PromptWithMitigation),
        cod_extension_for_fm: Some(CodExtension::No),
    };
    let r = force_majeure(&f);
    assert_score(&r, 0.0);
    assert!(r.flags.is_empty());
}

#[test]
fn force_majeure_broad_clause_raises_every_flag() {
    let f = ForceMajeureFacts {
        fm_definition_scope: Some(FmScope::BroadSubjective),
        payment_obligations: Some(PaymentObligations::Excused),
        economic_hardship_excluded: Some(YesNo::No),
        equipment_failure_excluded: Some(YesNo::No),
        transmission_congestion_excluded: Some(YesNo::No),
        termination_right: Some(TerminationRight::None),
        cod_extension_for_fm: Some(CodExtension::Automatic),
        ..Default::default()
    };
    let r = force_majeure(&f);
    assert_score(&r, 100.0);
    assert_eq!(r.status, TermStatus::Scored);
    assert_eq!(r.flags.len(), 5);
    assert_eq!(r.flags[0], "Commercial impracticability included as FM.");
    assert_eq!(r.flags[4], "Open-ended FM with no termination right.");
}

#[test]
fn force_majeure_bounded_duration_is_not_open_ended() {
    let f = ForceMajeureFacts {
        fm_definition_scope: Some(FmScope::Moderate),
        termination_right: Some(TerminationRight::None),
        fm_duration_months: Some(18.0),
        ..Default::default()
    };
    assert!(force_majeure(&f).flags.is_empty());
}

#[test]
fn force_majeure_absent_is_missing() {
    let r = force_majeure(&ForceMajeureFacts::default());
    assert_score(&r, 97.0);
    assert_eq!(r.status, TermStatus::Missing);
    assert_eq!(r.flags.len(), 1);
}

// ── eod ──

#[test]
fn default_cure_periods() {
    let f = DefaultFacts {
        longstop_cod_default: Some(YesNo::Yes),
        abandonment_trigger: Some(AbandonmentTrigger::Subjective),
        payment_cure_days: Some(7.0),
        credit_support_cure_days: Some(4.0),
        material_breach_cure_days: Some(120.0),
        ..Default::default()
    };
    assert_score(&events_of_default(&f), 42.0);
}

#[test]
fn default_without_longstop() {
    let f = DefaultFacts {
        longstop_cod_default: Some(YesNo::No),
        abandonment_trigger: Some(AbandonmentTrigger::None),
        ..Default::default()
    };
    assert_score(&events_of_default(&f), 89.0);
}

#[test]
fn default_absent_is_missing() {
    let r = events_of_default(&DefaultFacts::default());
    assert_score(&r, 84.0);
    assert_eq!(r.status, TermStatus::Missing);
}

// ── eterm ──

#[test]
fn termination_two_way_market_value() {
    let f = TerminationFacts {
        termination_structure: Some(TerminationStructure::TwoWayMtm),
        pre_cod_seller_payment: Some(PreCodSellerPayment::FullReplacementValue),
        seller_payment_cap: Some(SellerPaymentCap::Uncapped),
        valuation_method: Some(ValuationMethod::DealerQuotes),
        dispute_resolution: Some(ValuationDispute::IndependentExpert),
        discount_rate: Some(DiscountRate::MarketConsistent),
        generation_assumptions: Some(GenerationAssumptions::ObjectiveCapacityFactor),
        pre_post_cod_consistency: Some(Consistency::SameStructure),
    };
    let r = early_termination(&f);
    assert_score(&r, 0.0);
    assert!(r.flags.is_empty());
}

#[test]
fn termination_one_sided_structures_are_flagged() {
    let walk = TerminationFacts {
        termination_structure: Some(TerminationStructure::WalkAway),
        pre_cod_seller_payment: Some(PreCodSellerPayment::FullReplacementValue),
        ..Default::default()
    };
    let r = early_termination(&walk);
    assert_score(&r, 100.0);
    assert!(r.flags[0].starts_with("Walk-away termination"));

    let one_way = TerminationFacts {
        termination_structure: Some(TerminationStructure::OneWayBuyerPays),
        ..Default::default()
    };
    let r = early_termination(&one_way);
    assert_score(&r, 96.0);
    assert!(r.flags[0].starts_with("One-way termination"));
}

#[test]
fn termination_formula_defaults_payment() {
    let f = TerminationFacts {
        termination_structure: Some(TerminationStructure::TwoWayFormula),
        ..Default::default()
    };
    assert_score(&early_termination(&f), 56.0);
}

#[test]
fn termination_absent_is_missing() {
    let r = early_termination(&TerminationFacts::default());
    assert_score(&r, 86.0);
    assert_eq!(r.status, TermStatus::Missing);
}

// ── changeinlaw ──

#[test]
fn change_in_law_repricing_falls_to_row_default() {
    let f = ChangeInLawFacts {
        strike_fixed: Some(StrikeFixed::YesRegardless),
        tax_credit_treatment: Some(TaxCreditTreatment::StrikeReprices),
        ..Default::default()
    };
    let r = change_in_law(&f);
    assert_score(&r, 35.0);
    assert_eq!(r.flags.len(), 1);
}

#[test]
fn change_in_law_adjusting_strike() {
    let f = ChangeInLawFacts {
        strike_fixed: Some(StrikeFixed::StrikeAdjusts),
        tax_credit_treatment: Some(TaxCreditTreatment::StrikeReprices),
        ..Default::default()
    };
    assert_score(&change_in_law(&f), 91.0);
}

#[test]
fn change_in_law_tariff_relief_is_flagged() {
    let f = ChangeInLawFacts {
        strike_fixed: Some(StrikeFixed::YesRegardless),
        tax_credit_treatment: Some(TaxCreditTreatment::SellerAbsorbs),
        tariff_treatment: Some(TariffTreatment::ChangeInLawRelief),
        ..Default::default()
    };
    let r = change_in_law(&f);
    assert_score(&r, 31.0);
    assert!(r.flags[0].starts_with("Tariffs included"));
}

#[test]
fn change_in_law_absent_is_missing() {
    let r = change_in_law(&ChangeInLawFacts::default());
    assert_score(&r, 83.0);
    assert_eq!(r.status, TermStatus::Missing);
}

// ── reputation ──

#[test]
fn reputation_scores() {
    let f = ReputationFacts {
        reputation_termination_right: Some(ReputationTerminationRight::BuyerRight),
        seller_compliance_reps: Some(ComplianceReps::Comprehensive),
        reputation_event_definition: Some(ReputationEventDefinition::SubjectiveBuyerDiscretion),
        seller_assignment_approval: Some(
            SellerAssignmentApproval::BuyerApprovalIncludesReputation,
        ),
        community_opposition_provision: Some(CommunityOpposition::Addressed),
    };
    assert_score(&reputation(&f), 0.0);

    let r = reputation(&ReputationFacts::default());
    assert_score(&r, 63.0);
    assert_eq!(r.status, TermStatus::Missing);
}
