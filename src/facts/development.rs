//! Project development facts: interconnection, conditions precedent, delay,
//! availability and production guarantees, permitting, COD.

use serde::{Deserialize, Serialize};

use super::YesNo;

fact_enum! {
    IaStatus {
        FullyExecuted => "fully_executed",
        FacilitiesStudyComplete => "facilities_study_complete",
        SystemImpactComplete => "system_impact_complete",
        FeasibilityStage => "feasibility_stage",
        NotFiled => "not_filed",
    }
}

fact_enum! {
    NetworkUpgradeCosts {
        DefinedAndCapped => "defined_and_capped",
        DefinedUncapped => "defined_uncapped",
        Undefined => "undefined",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterconnectionFacts {
    pub ia_status: Option<IaStatus>,
    pub network_upgrade_costs: Option<NetworkUpgradeCosts>,
    #[serde(rename = "iaAsCP")]
    pub ia_as_cp: Option<YesNo>,
}

fact_enum! {
    NoticeRequirement { Required => "required", NotRequired => "not_required" }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConditionsPrecedentFacts {
    /// Buyer-side conditions precedent as listed in the document.
    #[serde(rename = "buyerCPs")]
    pub buyer_cps: Option<Vec<String>>,
    /// Count used when the extractor did not list them individually.
    #[serde(rename = "buyerCPCount", deserialize_with = "super::lenient_count")]
    pub buyer_cp_count: Option<u32>,
    pub buyer_termination_right: Option<YesNo>,
    pub cp_deadline_months: Option<f64>,
    #[serde(rename = "sellerCPs")]
    pub seller_cps: Option<Vec<String>>,
    #[serde(rename = "sellerCPCount", deserialize_with = "super::lenient_count")]
    pub seller_cp_count: Option<u32>,
    pub cp_satisfaction_notice: Option<NoticeRequirement>,
}

impl ConditionsPrecedentFacts {
    /// Buyer CP count: the list wins over the bare count.
    pub fn buyer_count(&self) -> u32 {
        match &self.buyer_cps {
            Some(list) => u32::try_from(list.len()).unwrap_or(u32::MAX),
            None => self.buyer_cp_count.unwrap_or(0),
        }
    }

    pub fn seller_count(&self) -> u32 {
        match &self.seller_cps {
            Some(list) => u32::try_from(list.len()).unwrap_or(u32::MAX),
            None => self.seller_cp_count.unwrap_or(0),
        }
    }
}

fact_enum! {
    DamagesCapStructure {
        ProjectCostPct => "project_cost_pct",
        MonthsCapped => "months_capped",
        Both => "both",
        None => "none",
    }
}

fact_enum! {
    DelaySecurity {
        Lc => "lc",
        ParentGuaranty => "parent_guaranty",
        Both => "both",
        None => "none",
    }
}

fact_enum! {
    ExcusedDelays { Narrow => "narrow", Moderate => "moderate", Broad => "broad" }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DelayFacts {
    #[serde(rename = "guaranteedCOD")]
    pub guaranteed_cod: Option<YesNo>,
    pub delay_damages_present: Option<YesNo>,
    /// $/MW/day.
    pub delay_damages_rate: Option<f64>,
    pub grace_period_days: Option<f64>,
    pub damages_cap_structure: Option<DamagesCapStructure>,
    pub damages_cap_value: Option<f64>,
    pub longstop_months: Option<f64>,
    pub buyer_termination_at_longstop: Option<YesNo>,
    pub delay_security_backed: Option<DelaySecurity>,
    pub excused_delays: Option<ExcusedDelays>,
}

fact_enum! {
    MeasurementMethod { TimeBased => "time_based", EnergyWeighted => "energy_weighted" }
}

fact_enum! {
    AvailabilityRemedy {
        DeemedGeneration => "deemed_generation",
        LiquidatedDamages => "liquidated_damages",
        None => "none",
    }
}

fact_enum! {
    ExclusionScope { Narrow => "narrow", Standard => "standard", Broad => "broad" }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvailabilityFacts {
    /// Guaranteed mechanical availability in percent.
    pub avail_guarantee_pct: Option<f64>,
    pub measurement_method: Option<MeasurementMethod>,
    pub shortfall_remedy: Option<AvailabilityRemedy>,
    pub exclusion_scope: Option<ExclusionScope>,
    pub termination_right: Option<YesNo>,
    pub maintenance_cap_days: Option<f64>,
}

fact_enum! {
    PValue { P50 => "P50" | "p50", P75 => "P75" | "p75", P90 => "P90" | "p90", Other => "other" }
}

fact_enum! {
    MeasurementPeriod {
        Annual => "annual",
        Rolling2yr => "rolling_2yr",
        Rolling3yr => "rolling_3yr",
    }
}

fact_enum! {
    ProductionRemedy {
        DeemedGeneration => "deemed_generation",
        MakeWhole => "make_whole",
        LiquidatedDamages => "liquidated_damages",
        None => "none",
    }
}

fact_enum! {
    ExcessGenTreatment {
        BuyerReceivesAll => "buyer_receives_all",
        Capped => "capped",
        Clawback => "clawback",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductionFacts {
    pub production_guarantee: Option<YesNo>,
    pub p_value: Option<PValue>,
    pub measurement_period: Option<MeasurementPeriod>,
    pub resource_normalized: Option<YesNo>,
    pub shortfall_remedy: Option<ProductionRemedy>,
    pub excess_gen_treatment: Option<ExcessGenTreatment>,
    pub termination_right: Option<YesNo>,
}

fact_enum! {
    PermitStatus {
        AllObtained => "all_obtained",
        MajorObtained => "major_obtained",
        InProgress => "in_progress",
        NotStarted => "not_started",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PermitFacts {
    pub permit_status: Option<PermitStatus>,
    #[serde(rename = "permitAsCP")]
    pub permit_as_cp: Option<YesNo>,
}

fact_enum! {
    CodDefinitionStrength {
        TightObjective => "tight_objective",
        Moderate => "moderate",
        LooseSubstantial => "loose_substantial",
    }
}

fact_enum! {
    PerformanceTest {
        FullCapacityDemo => "full_capacity_demo",
        NameplateOnly => "nameplate_only",
        None => "none",
    }
}

fact_enum! {
    DocumentaryDeliverables {
        Comprehensive => "comprehensive",
        Partial => "partial",
        Minimal => "minimal",
    }
}

fact_enum! {
    BuyerVerificationRight {
        ReviewAndConfirm => "review_and_confirm",
        NoticeOnly => "notice_only",
        SellerSelfCertifies => "seller_self_certifies",
    }
}

fact_enum! {
    IndependentEngineer { Required => "required", Optional => "optional", None => "none" }
}

fact_enum! {
    PartialCod {
        NotAllowed => "not_allowed",
        AllowedWithConditions => "allowed_with_conditions",
        AllowedUnrestricted => "allowed_unrestricted",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodFacts {
    pub cod_definition_strength: Option<CodDefinitionStrength>,
    /// Percent of nameplate that must be demonstrated.
    pub capacity_threshold: Option<f64>,
    pub performance_test: Option<PerformanceTest>,
    pub documentary_deliverables: Option<DocumentaryDeliverables>,
    pub buyer_verification_right: Option<BuyerVerificationRight>,
    pub independent_engineer: Option<IndependentEngineer>,
    #[serde(rename = "partialCOD")]
    pub partial_cod: Option<PartialCod>,
}
