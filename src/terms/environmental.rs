//! Product definition, REC mechanics and incentive allocation.

use crate::facts::{
    AdditionalityClaim, BundledStructure, CapacityAncillaryTreatment, DeliveryTiming,
    EnvironmentalAttributes, FeePayer, FutureAttributes, IncentiveFacts, IncentiveShare,
    IncentiveTransparency, IncrementalIncentives, ProductFacts, ProjectSpecific, RecFacts,
    RecShortfallDamages, RegistryExplicit, ReplacementObligation, ReplacementQuality,
    SettlementDefinitionClarity, StorageHybrid, TaxCreditAllocation, TransferabilityShare,
    VintageMatching,
};
use crate::terms::TermResult;

pub fn product(f: &ProductFacts) -> TermResult {
    use BundledStructure::{Bundled, Unbundled};
    use EnvironmentalAttributes::{AllConveyed, NotDefined, PartialCarveouts};
    let mut s = match (
        f.environmental_attributes.unwrap_or_default(),
        f.bundled_structure.unwrap_or_default(),
    ) {
        (AllConveyed, Bundled) => 5.0,
        (AllConveyed, Unbundled) => 20.0,
        (AllConveyed, BundledStructure::NotSpecified) => 15.0,
        (PartialCarveouts, Bundled) => 35.0,
        (PartialCarveouts, Unbundled) => 50.0,
        (PartialCarveouts, BundledStructure::NotSpecified) => 45.0,
        (NotDefined, Bundled) => 55.0,
        (NotDefined, Unbundled) => 70.0,
        (NotDefined, BundledStructure::NotSpecified) => 65.0,
        (EnvironmentalAttributes::NotSpecified, _) => 60.0,
    };

    s += match f.future_attributes.unwrap_or_default() {
        FutureAttributes::Included => -5.0,
        FutureAttributes::Excluded => 7.0,
        FutureAttributes::NotAddressed => 5.0,
        FutureAttributes::NotSpecified => 4.0,
    };
    s += match f.project_specific.unwrap_or_default() {
        ProjectSpecific::Yes => -3.0,
        ProjectSpecific::PortfolioGeneric => 3.0,
        ProjectSpecific::NotSpecified => 2.0,
    };
    s += match f.capacity_ancillary_treatment.unwrap_or_default() {
        CapacityAncillaryTreatment::BuyerShares => -5.0,
        CapacityAncillaryTreatment::SellerRetainsExplicit => 0.0,
        CapacityAncillaryTreatment::SellerRetainsSilent => 5.0,
        CapacityAncillaryTreatment::NotSpecified => 4.0,
    };
    s += match f.storage_hybrid_addressed.unwrap_or_default() {
        StorageHybrid::Yes => -3.0,
        StorageHybrid::No => 7.0,
        StorageHybrid::NotApplicable => 0.0,
        StorageHybrid::NotSpecified => 4.0,
    };
    s += match f.additionality_claim.unwrap_or_default() {
        AdditionalityClaim::NewBuild => -3.0,
        AdditionalityClaim::Existing => 2.0,
        AdditionalityClaim::NotAddressed => 3.0,
        AdditionalityClaim::NotSpecified => 2.0,
    };
    s += match f.settlement_definition_clarity.unwrap_or_default() {
        SettlementDefinitionClarity::ClearHubNode => -3.0,
        SettlementDefinitionClarity::Vague => 5.0,
        SettlementDefinitionClarity::NotDefined => 8.0,
        SettlementDefinitionClarity::NotSpecified => 5.0,
    };

    TermResult::scored(s).missing_if(
        f.environmental_attributes.is_none(),
        "Product not defined; buyer cannot assess what they're getting for the strike price.",
    )
}

pub fn recs(f: &RecFacts) -> TermResult {
    use ReplacementQuality::{AnyNationalRec, SameRegionAnyRenewable, SameTechSameRegion};
    let mut s = match (
        f.replacement_obligation.unwrap_or_default(),
        f.replacement_quality.unwrap_or_default(),
    ) {
        (ReplacementObligation::Yes, SameTechSameRegion) => 5.0,
        (ReplacementObligation::Yes, SameRegionAnyRenewable) => 15.0,
        (ReplacementObligation::Yes, AnyNationalRec) => 35.0,
        (ReplacementObligation::Yes, ReplacementQuality::NotSpecified) => 25.0,
        (ReplacementObligation::CashOnly, _) => 40.0,
        (ReplacementObligation::None, _) => 72.0,
        (ReplacementObligation::NotSpecified, _) => 65.0,
    };

    s += match f.delivery_timing.unwrap_or_default() {
        DeliveryTiming::Monthly => -5.0,
        DeliveryTiming::Quarterly => -3.0,
        DeliveryTiming::Annual => 0.0,
        DeliveryTiming::LongLag => 5.0,
        DeliveryTiming::NotSpecified => 3.0,
    };
    s += match f.vintage_matching.unwrap_or_default() {
        VintageMatching::StrictMatch => -3.0,
        VintageMatching::LooseBanking => 5.0,
        VintageMatching::NotSpecified => 3.0,
    };
    s += match f.registry_explicit.unwrap_or_default() {
        RegistryExplicit::YesSellerTransfers => -5.0,
        RegistryExplicit::YesBuyerResponsible => 3.0,
        RegistryExplicit::NotSpecified => 5.0,
    };
    s += match f.shortfall_damages.unwrap_or_default() {
        RecShortfallDamages::FullReplacementCost => -5.0,
        RecShortfallDamages::MarketValueCash => -3.0,
        RecShortfallDamages::FixedLd => 3.0,
        RecShortfallDamages::CappedBelowMarket => 7.0,
        RecShortfallDamages::None => 10.0,
        RecShortfallDamages::NotSpecified => 5.0,
    };
    s += match f.transfer_fees.unwrap_or_default() {
        FeePayer::SellerPays => -2.0,
        FeePayer::BuyerPays => 2.0,
        FeePayer::Shared | FeePayer::NotSpecified => 1.0,
    };

    TermResult::scored(s).missing_if(
        f.replacement_obligation.is_none(),
        "REC mechanics not defined; buyer cannot guarantee annual decarbonization claims.",
    )
}

pub fn incentives(f: &IncentiveFacts) -> TermResult {
    let mut s = match f.tax_credit_allocation.unwrap_or_default() {
        TaxCreditAllocation::BuyerSharesUpside => 5.0,
        TaxCreditAllocation::SellerRetainsStrikeReflects => 20.0,
        TaxCreditAllocation::SellerRetainsNoTransparency => 50.0,
        TaxCreditAllocation::NotSpecified => 55.0,
    };

    s += match f.bonus_credit_allocation.unwrap_or_default() {
        IncentiveShare::ReflectedInStrike => -5.0,
        IncentiveShare::Shared => -3.0,
        IncentiveShare::SellerRetains => 3.0,
        IncentiveShare::NotAddressed => 5.0,
        IncentiveShare::NotSpecified => 4.0,
    };
    s += match f.transferability_value_sharing.unwrap_or_default() {
        TransferabilityShare::BuyerBenefits => -5.0,
        TransferabilityShare::Shared => -3.0,
        TransferabilityShare::SellerRetains => 3.0,
        TransferabilityShare::NotAddressed => 5.0,
        TransferabilityShare::NotSpecified => 4.0,
    };
    s += match f.incremental_incentives.unwrap_or_default() {
        IncrementalIncentives::BuyerShares => -5.0,
        IncrementalIncentives::SellerRetains => 3.0,
        IncrementalIncentives::NotAddressed => 5.0,
        IncrementalIncentives::NotSpecified => 4.0,
    };
    s += match f.state_local_incentives.unwrap_or_default() {
        IncentiveShare::ReflectedInStrike => -3.0,
        IncentiveShare::Shared => -2.0,
        IncentiveShare::SellerRetains => 2.0,
        IncentiveShare::NotAddressed => 4.0,
        IncentiveShare::NotSpecified => 3.0,
    };
    s += match f.incentive_transparency.unwrap_or_default() {
        IncentiveTransparency::SellerDiscloses => -5.0,
        IncentiveTransparency::NoDisclosure => 5.0,
        IncentiveTransparency::NotSpecified => 3.0,
    };

    TermResult::scored(s).missing_if(
        f.tax_credit_allocation.is_none(),
        "Incentive allocation not defined; in the current IRA environment, undefined allocation \
         likely means seller captures all upside.",
    )
}

#[cfg(test)]
#[path = "environmental_test.rs"]
mod tests;
