//! Credit and collateral scorers. Collateral sizing bands are per MW and
//! depend on the deal technology.

use crate::context::DealContext;
use crate::facts::{
    BuyerAssuranceFacts, CollateralType, CoverageBasis, CreditRating, DowngradeSubstitution,
    DowngradeTrigger, PostCodCreditType, SellerAssuranceFacts, SellerCreditType, StepDownTiming,
    ThresholdStructure, YesNo,
};
use crate::numeric::{Step, step_at_least, step_at_most};
use crate::tables::{buyer_collateral_bounds, seller_post_cod_tiers, seller_pre_cod_tiers};
use crate::terms::TermResult;

fn buyer_base(rating: CreditRating, collateral: CollateralType) -> f64 {
    use CollateralType::*;
    match (rating, collateral) {
        (CreditRating::NotSpecified, _) => 60.0,
        (CreditRating::Ig, Unsecured) => 5.0,
        (CreditRating::Ig, ParentGuaranty) => 15.0,
        (CreditRating::Ig, Lc) => 30.0,
        (CreditRating::Ig, Cash) => 45.0,
        (CreditRating::Ig, NotSpecified) => 40.0,
        (CreditRating::NonIg, Unsecured) => 20.0,
        (CreditRating::NonIg, ParentGuaranty) => 25.0,
        (CreditRating::NonIg, Lc) => 35.0,
        (CreditRating::NonIg, Cash) => 50.0,
        (CreditRating::NonIg, NotSpecified) => 50.0,
        (_, LcPlusMtm) => 55.0,
        (_, CashPlusMtm) => 70.0,
    }
}

const CURE_DAYS: &[Step] = &[Step::new(30.0, -3.0), Step::new(15.0, 0.0), Step::new(10.0, 2.0)];

pub fn buyer_assurance(f: &BuyerAssuranceFacts, ctx: &DealContext) -> TermResult {
    let mut s = buyer_base(
        f.buyer_credit_rating.unwrap_or_default(),
        f.collateral_type.unwrap_or_default(),
    );

    // Anything but an explicit six-month basis is sized as twelve months.
    let six_months = f.coverage_basis == Some(CoverageBasis::SixMonths);
    let [lean, typical, heavy] = buyer_collateral_bounds(ctx.technology, six_months);
    let sizing = [
        Step::new(lean, -5.0),
        Step::new(typical, 0.0),
        Step::new(heavy, 5.0),
    ];
    s += step_at_most(f.fixed_amount_per_mw, &sizing, 10.0, 3.0);

    s += match f.downgrade_trigger.unwrap_or_default() {
        DowngradeTrigger::SubIgOnly => -3.0,
        DowngradeTrigger::MultipleTiers => 5.0,
        DowngradeTrigger::None => -5.0,
        DowngradeTrigger::NotSpecified => 3.0,
    };
    s += step_at_least(f.downgrade_cure_period, CURE_DAYS, 5.0, 3.0);
    s += match f.downgrade_substitution.unwrap_or_default() {
        DowngradeSubstitution::GuarantyAllowed => -3.0,
        DowngradeSubstitution::LcOnly => 0.0,
        DowngradeSubstitution::CashOnly => 5.0,
        DowngradeSubstitution::NotSpecified => 3.0,
    };
    s += match f.threshold_structure.unwrap_or_default() {
        ThresholdStructure::Threshold => -5.0,
        ThresholdStructure::IndependentAmount => 5.0,
        ThresholdStructure::NotSpecified => 3.0,
    };

    TermResult::scored(s).missing_if(
        f.collateral_type.is_none(),
        "Buyer credit support not defined.",
    )
}

fn seller_base(credit: SellerCreditType, completion: YesNo) -> f64 {
    use SellerCreditType::*;
    match (credit, completion) {
        (IgSponsorGuaranty, YesNo::Yes) => 5.0,
        (IgSponsorGuaranty, YesNo::No) => 15.0,
        (SponsorGuaranty, YesNo::Yes) => 12.0,
        (SponsorGuaranty, YesNo::No) => 28.0,
        (Lc, YesNo::Yes) => 18.0,
        (Lc, YesNo::No) => 35.0,
        (Cash, YesNo::Yes) => 15.0,
        (Cash, YesNo::No) => 32.0,
        (SpvOnly, YesNo::Yes) => 55.0,
        (SpvOnly, YesNo::No) => 78.0,
        (NotSpecified, _) | (_, YesNo::NotSpecified) => 72.0,
    }
}

pub fn seller_assurance(f: &SellerAssuranceFacts, ctx: &DealContext) -> TermResult {
    let mut s = seller_base(
        f.pre_cod_credit_type.unwrap_or_default(),
        f.completion_guaranty.unwrap_or_default(),
    );

    let pre = seller_pre_cod_tiers(ctx.technology);
    s += step_at_least(f.pre_cod_sizing_per_mw, pre.steps, pre.below, 5.0);
    let post = seller_post_cod_tiers(ctx.technology);
    s += step_at_least(f.post_cod_sizing_per_mw, post.steps, post.below, 3.0);

    s += match f.credit_survives_financing.unwrap_or_default() {
        YesNo::Yes => -5.0,
        YesNo::No => 8.0,
        YesNo::NotSpecified => 5.0,
    };
    s += match f.post_cod_credit_type.unwrap_or_default() {
        PostCodCreditType::IgSponsorGuaranty => -5.0,
        PostCodCreditType::SponsorGuaranty => -3.0,
        PostCodCreditType::Lc => -2.0,
        PostCodCreditType::SpvOnly | PostCodCreditType::NotSpecified => 3.0,
        PostCodCreditType::None => 5.0,
    };
    s += match f.step_down_timing.unwrap_or_default() {
        StepDownTiming::AfterAllCodTests => -3.0,
        StepDownTiming::AtCod => 0.0,
        StepDownTiming::AtMechanicalCompletion => 5.0,
        StepDownTiming::AtFinancialClose => 10.0,
        StepDownTiming::NotSpecified => 5.0,
    };
    s += match f.downgrade_trigger.unwrap_or_default() {
        YesNo::Yes => -3.0,
        YesNo::No => 3.0,
        YesNo::NotSpecified => 2.0,
    };

    TermResult::scored(s).missing_if(
        f.pre_cod_credit_type.is_none(),
        "Seller credit support not defined; buyer has no visibility into credit backing the \
         project.",
    )
}

#[cfg(test)]
#[path = "credit_test.rs"]
mod tests;
