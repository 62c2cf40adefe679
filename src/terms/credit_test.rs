use super::*;
use crate::tables::{AssetType, Market, Technology};
use crate::terms::TermStatus;

fn ctx(technology: Technology) -> DealContext {
    DealContext {
        market: Market::Ercot,
        technology,
        asset_type: AssetType::NewBuild,
        notes: Vec::new(),
    }
}

fn assert_score(r: &TermResult, expected: f64) {
    assert!(
        (r.score - expected).abs() < 0.01,
        "expected {expected}, got {} ({:?})",
        r.score,
        r.flags
    );
}

fn ig_lc(amount: f64, coverage: CoverageBasis) -> BuyerAssuranceFacts {
    BuyerAssuranceFacts {
        buyer_credit_rating: Some(CreditRating::Ig),
        collateral_type: Some(CollateralType::Lc),
        coverage_basis: Some(coverage),
        fixed_amount_per_mw: Some(amount),
        downgrade_trigger: Some(DowngradeTrigger::None),
        downgrade_cure_period: Some(30.0),
        downgrade_substitution: Some(DowngradeSubstitution::GuarantyAllowed),
        threshold_structure: Some(ThresholdStructure::Threshold),
    }
}

// ── buyerpa ──

#[test]
fn buyer_lean_collateral() {
    let r = buyer_assurance(&ig_lc(20_000.0, CoverageBasis::SixMonths), &ctx(Technology::Solar));
    assert_score(&r, 9.0);
    assert!(r.flags.is_empty());
}

#[test]
fn buyer_sizing_depends_on_coverage_and_technology() {
    let solar = ctx(Technology::Solar);
    assert_score(
        &buyer_assurance(&ig_lc(40_000.0, CoverageBasis::SixMonths), &solar),
        19.0,
    );
    assert_score(
        &buyer_assurance(&ig_lc(40_000.0, CoverageBasis::TwelveMonths), &solar),
        9.0,
    );
    assert_score(
        &buyer_assurance(&ig_lc(40_000.0, CoverageBasis::SixMonths), &ctx(Technology::Wind)),
        14.0,
    );
}

#[test]
fn buyer_unrated_row_ignores_collateral() {
    let f = BuyerAssuranceFacts {
        collateral_type: Some(CollateralType::Unsecured),
        ..Default::default()
    };
    assert_score(&buyer_assurance(&f, &ctx(Technology::Solar)), 75.0);
}

#[test]
fn buyer_absent_is_missing() {
    let r = buyer_assurance(&BuyerAssuranceFacts::default(), &ctx(Technology::Solar));
    assert_score(&r, 75.0);
    assert_eq!(r.status, TermStatus::Missing);
    assert_eq!(r.flags, vec!["Buyer credit support not defined.".to_string()]);
}

#[test]
fn buyer_not_specified_collateral_is_not_flagged() {
    let f = BuyerAssuranceFacts {
        buyer_credit_rating: Some(CreditRating::NonIg),
        collateral_type: Some(CollateralType::NotSpecified),
        ..Default::default()
    };
    let r = buyer_assurance(&f, &ctx(Technology::Solar));
    assert_score(&r, 65.0);
    assert_eq!(r.status, TermStatus::Scored);
}

// ── sellerpa ──

fn backed_seller() -> SellerAssuranceFacts {
    SellerAssuranceFacts {
        pre_cod_credit_type: Some(SellerCreditType::Lc),
        pre_cod_sizing_per_mw: Some(60_000.0),
        completion_guaranty: Some(YesNo::Yes),
        credit_survives_financing: Some(YesNo::Yes),
        post_cod_credit_type: Some(PostCodCreditType::Lc),
        post_cod_sizing_per_mw: Some(50_000.0),
        step_down_timing: Some(StepDownTiming::AtCod),
        downgrade_trigger: Some(YesNo::Yes),
    }
}

#[test]
fn seller_sizing_depends_on_technology() {
    assert_score(&seller_assurance(&backed_seller(), &ctx(Technology::Solar)), 2.0);
    assert_score(&seller_assurance(&backed_seller(), &ctx(Technology::Wind)), 8.0);
}

#[test]
fn seller_unspecified_completion_guaranty() {
    let f = SellerAssuranceFacts {
        pre_cod_credit_type: Some(SellerCreditType::Lc),
        completion_guaranty: Some(YesNo::NotSpecified),
        ..Default::default()
    };
    let r = seller_assurance(&f, &ctx(Technology::Solar));
    assert_score(&r, 95.0);
    assert_eq!(r.status, TermStatus::Scored);
}

#[test]
fn seller_thin_spv_support_caps_at_red_flag() {
    let f = SellerAssuranceFacts {
        pre_cod_credit_type: Some(SellerCreditType::SpvOnly),
        completion_guaranty: Some(YesNo::No),
        pre_cod_sizing_per_mw: Some(5_000.0),
        post_cod_sizing_per_mw: Some(1_000.0),
        ..Default::default()
    };
    assert_score(&seller_assurance(&f, &ctx(Technology::Solar)), 100.0);
}

#[test]
fn seller_absent_is_missing() {
    let r = seller_assurance(&SellerAssuranceFacts::default(), &ctx(Technology::Solar));
    assert_score(&r, 95.0);
    assert_eq!(r.status, TermStatus::Missing);
}
