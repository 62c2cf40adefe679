//! Product, REC and incentive facts.

use serde::{Deserialize, Serialize};

use super::FeePayer;

fact_enum! {
    EnvironmentalAttributes {
        AllConveyed => "all_conveyed",
        PartialCarveouts => "partial_carveouts",
        NotDefined => "not_defined",
    }
}

fact_enum! {
    FutureAttributes {
        Included => "included",
        Excluded => "excluded",
        NotAddressed => "not_addressed",
    }
}

fact_enum! {
    BundledStructure { Bundled => "bundled", Unbundled => "unbundled" }
}

fact_enum! {
    ProjectSpecific { Yes => "yes", PortfolioGeneric => "portfolio_generic" }
}

fact_enum! {
    CapacityAncillaryTreatment {
        BuyerShares => "buyer_shares",
        SellerRetainsExplicit => "seller_retains_explicit",
        SellerRetainsSilent => "seller_retains_silent",
    }
}

fact_enum! {
    StorageHybrid { Yes => "yes", No => "no", NotApplicable => "not_applicable" }
}

fact_enum! {
    AdditionalityClaim {
        NewBuild => "new_build",
        Existing => "existing",
        NotAddressed => "not_addressed",
    }
}

fact_enum! {
    SettlementDefinitionClarity {
        ClearHubNode => "clear_hub_node",
        Vague => "vague",
        NotDefined => "not_defined",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductFacts {
    pub environmental_attributes: Option<EnvironmentalAttributes>,
    pub future_attributes: Option<FutureAttributes>,
    pub bundled_structure: Option<BundledStructure>,
    pub project_specific: Option<ProjectSpecific>,
    pub capacity_ancillary_treatment: Option<CapacityAncillaryTreatment>,
    pub storage_hybrid_addressed: Option<StorageHybrid>,
    pub additionality_claim: Option<AdditionalityClaim>,
    pub settlement_definition_clarity: Option<SettlementDefinitionClarity>,
}

fact_enum! {
    DeliveryTiming {
        Monthly => "monthly",
        Quarterly => "quarterly",
        Annual => "annual",
        LongLag => "long_lag",
    }
}

fact_enum! {
    ReplacementObligation { Yes => "yes", CashOnly => "cash_only", None => "none" }
}

fact_enum! {
    ReplacementQuality {
        SameTechSameRegion => "same_tech_same_region",
        SameRegionAnyRenewable => "same_region_any_renewable",
        AnyNationalRec => "any_national_rec",
    }
}

fact_enum! {
    VintageMatching { StrictMatch => "strict_match", LooseBanking => "loose_banking" }
}

fact_enum! {
    RegistryExplicit {
        YesSellerTransfers => "yes_seller_transfers",
        YesBuyerResponsible => "yes_buyer_responsible",
    }
}

fact_enum! {
    RecShortfallDamages {
        FullReplacementCost => "full_replacement_cost",
        MarketValueCash => "market_value_cash",
        FixedLd => "fixed_ld",
        CappedBelowMarket => "capped_below_market",
        None => "none",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecFacts {
    pub delivery_timing: Option<DeliveryTiming>,
    pub replacement_obligation: Option<ReplacementObligation>,
    pub replacement_quality: Option<ReplacementQuality>,
    pub vintage_matching: Option<VintageMatching>,
    pub registry_explicit: Option<RegistryExplicit>,
    pub shortfall_damages: Option<RecShortfallDamages>,
    pub transfer_fees: Option<FeePayer>,
}

fact_enum! {
    TaxCreditAllocation {
        BuyerSharesUpside => "buyer_shares_upside",
        SellerRetainsStrikeReflects => "seller_retains_strike_reflects",
        SellerRetainsNoTransparency => "seller_retains_no_transparency",
    }
}

fact_enum! {
    IncentiveShare {
        ReflectedInStrike => "reflected_in_strike",
        Shared => "shared",
        SellerRetains => "seller_retains",
        NotAddressed => "not_addressed",
    }
}

fact_enum! {
    TransferabilityShare {
        BuyerBenefits => "buyer_benefits",
        Shared => "shared",
        SellerRetains => "seller_retains",
        NotAddressed => "not_addressed",
    }
}

fact_enum! {
    IncrementalIncentives {
        BuyerShares => "buyer_shares",
        SellerRetains => "seller_retains",
        NotAddressed => "not_addressed",
    }
}

fact_enum! {
    IncentiveTransparency {
        SellerDiscloses => "seller_discloses",
        NoDisclosure => "no_disclosure",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IncentiveFacts {
    pub tax_credit_allocation: Option<TaxCreditAllocation>,
    pub bonus_credit_allocation: Option<IncentiveShare>,
    pub transferability_value_sharing: Option<TransferabilityShare>,
    pub incremental_incentives: Option<IncrementalIncentives>,
    pub state_local_incentives: Option<IncentiveShare>,
    pub incentive_transparency: Option<IncentiveTransparency>,
}
