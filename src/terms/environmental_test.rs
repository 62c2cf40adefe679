use super::*;
use crate::terms::TermStatus;

fn assert_score(r: &TermResult, expected: f64) {
    assert!(
        (r.score - expected).abs() < 0.01,
        "expected {expected}, got {}",
        r.score
    );
}

#[test]
fn product_fully_conveyed() {
    let f = ProductFacts {
        environmental_attributes: Some(EnvironmentalAttributes::AllConveyed),
        future_attributes: Some(FutureAttributes::Included),
        bundled_structure: Some(BundledStructure::Bundled),
        project_specific: Some(ProjectSpecific::Yes),
        capacity_ancillary_treatment: Some(CapacityAncillaryTreatment::BuyerShares),
        storage_hybrid_addressed: Some(StorageHybrid::NotApplicable),
        additionality_claim: Some(AdditionalityClaim::NewBuild),
        settlement_definition_clarity: Some(SettlementDefinitionClarity::ClearHubNode),
    };
    assert_score(&product(&f), 0.0);
}

#[test]
fn product_matrix_rows() {
    let partial = ProductFacts {
        environmental_attributes: Some(EnvironmentalAttributes::PartialCarveouts),
        bundled_structure: Some(BundledStructure::Unbundled),
        ..Default::default()
    };
    assert_score(&product(&partial), 71.0);

    let undefined = ProductFacts {
        environmental_attributes: Some(EnvironmentalAttributes::NotDefined),
        ..Default::default()
    };
    assert_score(&product(&undefined), 86.0);
}

#[test]
fn product_absent_is_missing() {
    let r = product(&ProductFacts::default());
    assert_score(&r, 81.0);
    assert_eq!(r.status, TermStatus::Missing);
}

#[test]
fn recs_strong_mechanics() {
    let f = RecFacts {
        delivery_timing: Some(DeliveryTiming::Monthly),
        replacement_obligation: Some(ReplacementObligation::Yes),
        replacement_quality: Some(ReplacementQuality::SameTechSameRegion),
        vintage_matching: Some(VintageMatching::StrictMatch),
        registry_explicit: Some(RegistryExplicit::YesSellerTransfers),
        shortfall_damages: Some(RecShortfallDamages::FullReplacementCost),
        transfer_fees: Some(FeePayer::SellerPays),
    };
    assert_score(&recs(&f), 0.0);
}

#[test]
fn recs_cash_only_ignores_quality() {
    let f = RecFacts {
        replacement_obligation: Some(ReplacementObligation::CashOnly),
        replacement_quality: Some(ReplacementQuality::SameTechSameRegion),
        ..Default::default()
    };
    assert_score(&recs(&f), 57.0);
}

#[test]
fn recs_shared_fees_score_as_unspecified() {
    let f = RecFacts {
        replacement_obligation: Some(ReplacementObligation::Yes),
        replacement_quality: Some(ReplacementQuality::AnyNationalRec),
        transfer_fees: Some(FeePayer::Shared),
        ..Default::default()
    };
    assert_score(&recs(&f), 52.0);
}

#[test]
fn recs_absent_and_none() {
    let r = recs(&RecFacts::default());
    assert_score(&r, 82.0);
    assert_eq!(r.status, TermStatus::Missing);

    let none = RecFacts {
        replacement_obligation: Some(ReplacementObligation::None),
        ..Default::default()
    };
    assert_score(&recs(&none), 89.0);
}

#[test]
fn incentives_shared_upside() {
    let f = IncentiveFacts {
        tax_credit_allocation: Some(TaxCreditAllocation::BuyerSharesUpside),
        bonus_credit_allocation: Some(IncentiveShare::ReflectedInStrike),
        transferability_value_sharing: Some(TransferabilityShare::BuyerBenefits),
        incremental_incentives: Some(IncrementalIncentives::BuyerShares),
        state_local_incentives: Some(IncentiveShare::ReflectedInStrike),
        incentive_transparency: Some(IncentiveTransparency::SellerDiscloses),
    };
    assert_score(&incentives(&f), 0.0);
}

#[test]
fn incentives_seller_keeps_everything() {
    let f = IncentiveFacts {
        tax_credit_allocation: Some(TaxCreditAllocation::SellerRetainsNoTransparency),
        bonus_credit_allocation: Some(IncentiveShare::SellerRetains),
        transferability_value_sharing: Some(TransferabilityShare::SellerRetains),
        incremental_incentives: Some(IncrementalIncentives::SellerRetains),
        state_local_incentives: Some(IncentiveShare::SellerRetains),
        incentive_transparency: Some(IncentiveTransparency::NoDisclosure),
    };
    assert_score(&incentives(&f), 66.0);
}

#[test]
fn incentives_absent_is_missing() {
    let r = incentives(&IncentiveFacts::default());
    assert_score(&r, 73.0);
    assert_eq!(r.status, TermStatus::Missing);
    assert!(r.flags[0].starts_with("Incentive allocation not defined"));
}
