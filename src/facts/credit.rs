//! Credit and collateral facts.

use serde::{Deserialize, Serialize};

use super::YesNo;

fact_enum! {
    CreditRating { Ig => "ig", NonIg => "non_ig" }
}

fact_enum! {
    CollateralType {
        Unsecured => "unsecured",
        ParentGuaranty => "parent_guaranty",
        Lc => "lc",
        Cash => "cash",
        LcPlusMtm => "lc_plus_mtm",
        CashPlusMtm => "cash_plus_mtm",
    }
}

fact_enum! {
    CoverageBasis { SixMonths => "6_months", TwelveMonths => "12_months" }
}

fact_enum! {
    DowngradeTrigger {
        SubIgOnly => "sub_ig_only",
        MultipleTiers => "multiple_tiers",
        None => "none",
    }
}

fact_enum! {
    DowngradeSubstitution {
        GuarantyAllowed => "guaranty_allowed",
        LcOnly => "lc_only",
        CashOnly => "cash_only",
    }
}

fact_enum! {
    ThresholdStructure {
        Threshold => "threshold",
        IndependentAmount => "independent_amount",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuyerAssuranceFacts {
    pub buyer_credit_rating: Option<CreditRating>,
    pub collateral_type: Option<CollateralType>,
    pub coverage_basis: Option<CoverageBasis>,
    /// Fixed collateral in $ per MW.
    #[serde(rename = "fixedAmountPerMW")]
    pub fixed_amount_per_mw: Option<f64>,
    pub downgrade_trigger: Option<DowngradeTrigger>,
    pub downgrade_cure_period: Option<f64>,
    pub downgrade_substitution: Option<DowngradeSubstitution>,
    pub threshold_structure: Option<ThresholdStructure>,
}

fact_enum! {
    SellerCreditType {
        IgSponsorGuaranty => "ig_sponsor_guaranty",
        SponsorGuaranty => "sponsor_guaranty",
        Lc => "lc",
        Cash => "cash",
        SpvOnly => "spv_only",
    }
}

fact_enum! {
    PostCodCreditType {
        IgSponsorGuaranty => "ig_sponsor_guaranty",
        SponsorGuaranty => "sponsor_guaranty",
        Lc => "lc",
        SpvOnly => "spv_only",
        None => "none",
    }
}

fact_enum! {
    StepDownTiming {
        AfterAllCodTests => "after_all_cod_tests",
        AtCod => "at_cod",
        AtMechanicalCompletion => "at_mechanical_completion",
        AtFinancialClose => "at_financial_close",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SellerAssuranceFacts {
    #[serde(rename = "preCODCreditType")]
    pub pre_cod_credit_type: Option<SellerCreditType>,
    #[serde(rename = "preCODSizingPerMW")]
    pub pre_cod_sizing_per_mw: Option<f64>,
    pub completion_guaranty: Option<YesNo>,
    pub credit_survives_financing: Option<YesNo>,
    #[serde(rename = "postCODCreditType")]
    pub post_cod_credit_type: Option<PostCodCreditType>,
    #[serde(rename = "postCODSizingPerMW")]
    pub post_cod_sizing_per_mw: Option<f64>,
    pub step_down_timing: Option<StepDownTiming>,
    pub downgrade_trigger: Option<YesNo>,
}
