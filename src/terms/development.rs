//! Project development scorers.
//!
//! Delay, availability and production scoring read the deal technology:
//! wind and solar are held to different availability bars and damage
//! rates.

use crate::context::DealContext;
use crate::facts::{
    AvailabilityFacts, AvailabilityRemedy, BuyerVerificationRight, CodDefinitionStrength,
    CodFacts, ConditionsPrecedentFacts, DamagesCapStructure, DelayFacts, DelaySecurity,
    DocumentaryDeliverables, ExcessGenTreatment, ExclusionScope, ExcusedDelays, IaStatus,
    IndependentEngineer, InterconnectionFacts, MeasurementMethod, MeasurementPeriod,
    NetworkUpgradeCosts, NoticeRequirement, PValue, PartialCod, PerformanceTest, PermitFacts,
    PermitStatus, ProductionFacts, ProductionRemedy, YesNo,
};
use crate::numeric::{Step, step_at_least, step_at_most};
use crate::tables::{availability_tiers, delay_rate_tiers};
use crate::terms::{TermResult, yes_no};

pub fn interconnection(f: &InterconnectionFacts) -> TermResult {
    let status = f.ia_status.unwrap_or_default();
    let mut s = match status {
        IaStatus::FullyExecuted => 5.0,
        IaStatus::FacilitiesStudyComplete => 20.0,
        IaStatus::SystemImpactComplete => 35.0,
        IaStatus::FeasibilityStage => 55.0,
        IaStatus::NotFiled => 85.0,
        IaStatus::NotSpecified => 70.0,
    };
    s += match f.network_upgrade_costs.unwrap_or_default() {
        NetworkUpgradeCosts::DefinedAndCapped => -3.0,
        NetworkUpgradeCosts::DefinedUncapped => 0.0,
        NetworkUpgradeCosts::Undefined => 5.0,
        NetworkUpgradeCosts::NotSpecified => 3.0,
    };
    s += yes_no(f.ia_as_cp, -5.0, 5.0, 3.0);

    let early = matches!(status, IaStatus::FeasibilityStage | IaStatus::NotFiled);
    TermResult::scored(s)
        .missing_if(
            f.ia_status.is_none(),
            "IA status not disclosed; buyer cannot assess grid connection risk.",
        )
        .flag_if(
            early && f.ia_as_cp != Some(YesNo::Yes),
            "Early-stage IA not listed as condition precedent.",
        )
}

const CP_DEADLINE: &[Step] = &[
    Step::new(6.0, -5.0),
    Step::new(12.0, 0.0),
    Step::new(18.0, 3.0),
    Step::new(24.0, 5.0),
];

pub fn conditions_precedent(f: &ConditionsPrecedentFacts) -> TermResult {
    let count = f.buyer_count();
    let mut s = match count.min(5) {
        5 => 5.0,
        4 => 12.0,
        3 => 22.0,
        2 => 35.0,
        1 => 50.0,
        _ => 80.0,
    };
    s += yes_no(f.buyer_termination_right, -5.0, 10.0, 5.0);
    s += step_at_most(f.cp_deadline_months, CP_DEADLINE, 10.0, 8.0);
    s += f64::from(f.seller_count().min(3)) * 2.0;
    s += match f.cp_satisfaction_notice.unwrap_or_default() {
        NoticeRequirement::Required => -3.0,
        NoticeRequirement::NotRequired => 3.0,
        NoticeRequirement::NotSpecified => 2.0,
    };

    let message = "No conditions precedent; buyer is contractually committed from execution \
                   regardless of project status.";
    let absent = f.buyer_cps.is_none() && f.buyer_cp_count.is_none();
    TermResult::scored(s)
        .missing_if(absent, message)
        .flag_if(!absent && count == 0, message)
}

const GRACE_DAYS: &[Step] = &[Step::new(30.0, -3.0), Step::new(60.0, 0.0), Step::new(90.0, 3.0)];
const LONGSTOP_MONTHS: &[Step] = &[
    Step::new(12.0, -5.0),
    Step::new(18.0, -2.0),
    Step::new(24.0, 0.0),
];

fn damages_cap_delta(structure: DamagesCapStructure, value: Option<f64>) -> f64 {
    match (structure, value) {
        (DamagesCapStructure::Both, _) => 0.0,
        (DamagesCapStructure::None, _) => -5.0,
        (DamagesCapStructure::ProjectCostPct, Some(v)) => {
            if v <= 8.0 {
                -2.0
            } else if v <= 12.0 {
                0.0
            } else {
                -3.0
            }
        }
        (DamagesCapStructure::MonthsCapped, Some(v)) => {
            if v <= 12.0 {
                3.0
            } else if v <= 18.0 {
                0.0
            } else {
                -2.0
            }
        }
        _ => 3.0,
    }
}

pub fn delay(f: &DelayFacts, ctx: &DealContext) -> TermResult {
    let damages = f.delay_damages_present.unwrap_or_default();
    let mut s = match (f.guaranteed_cod.unwrap_or_default(), damages) {
        (YesNo::Yes, YesNo::Yes) => 10.0,
        (YesNo::Yes, YesNo::No) => 45.0,
        (YesNo::Yes, YesNo::NotSpecified) => 30.0,
        (YesNo::No, YesNo::Yes) => 35.0,
        (YesNo::No, YesNo::No) => 75.0,
        (YesNo::No, YesNo::NotSpecified) => 60.0,
        (YesNo::NotSpecified, _) => 80.0,
    };

    if damages == YesNo::Yes {
        let tiers = delay_rate_tiers(ctx.technology);
        s += step_at_least(f.delay_damages_rate, tiers.steps, tiers.below, 5.0);
    }
    s += step_at_most(f.grace_period_days, GRACE_DAYS, 7.0, 5.0);
    s += damages_cap_delta(
        f.damages_cap_structure.unwrap_or_default(),
        f.damages_cap_value,
    );
    s += step_at_most(f.longstop_months, LONGSTOP_MONTHS, 5.0, 8.0);
    s += yes_no(f.buyer_termination_at_longstop, -5.0, 10.0, 5.0);
    s += match f.delay_security_backed.unwrap_or_default() {
        DelaySecurity::Both => -3.0,
        DelaySecurity::Lc => -2.0,
        DelaySecurity::ParentGuaranty => 0.0,
        DelaySecurity::None => 8.0,
        DelaySecurity::NotSpecified => 5.0,
    };
    s += match f.excused_delays.unwrap_or_default() {
        ExcusedDelays::Narrow => -3.0,
        ExcusedDelays::Moderate => 0.0,
        ExcusedDelays::Broad => 7.0,
        ExcusedDelays::NotSpecified => 5.0,
    };

    let message = if f.delay_damages_present.is_none() {
        "No delay provisions; buyer has no protection if project misses COD."
    } else {
        "Guaranteed COD not stated; delay damages have no firm trigger date."
    };
    TermResult::scored(s).missing_if(f.guaranteed_cod.is_none(), message)
}

const MAINTENANCE_DAYS: &[Step] = &[Step::new(15.0, -3.0), Step::new(30.0, 0.0), Step::new(45.0, 3.0)];

pub fn availability(f: &AvailabilityFacts, ctx: &DealContext) -> TermResult {
    let tiers = availability_tiers(ctx.technology);
    let mut s = step_at_least(f.avail_guarantee_pct, tiers.steps, tiers.below, 78.0);
    s += match f.measurement_method.unwrap_or_default() {
        MeasurementMethod::TimeBased => 0.0,
        MeasurementMethod::EnergyWeighted if ctx.is_wind() => -5.0,
        MeasurementMethod::EnergyWeighted => -3.0,
        MeasurementMethod::NotSpecified => 3.0,
    };
    s += match f.shortfall_remedy.unwrap_or_default() {
        AvailabilityRemedy::DeemedGeneration => -5.0,
        AvailabilityRemedy::LiquidatedDamages => -3.0,
        AvailabilityRemedy::None => 15.0,
        AvailabilityRemedy::NotSpecified => 8.0,
    };
    s += match f.exclusion_scope.unwrap_or_default() {
        ExclusionScope::Narrow => -3.0,
        ExclusionScope::Standard => 0.0,
        ExclusionScope::Broad | ExclusionScope::NotSpecified => 5.0,
    };
    s += yes_no(f.termination_right, -5.0, 8.0, 5.0);
    s += step_at_most(f.maintenance_cap_days, MAINTENANCE_DAYS, 5.0, 3.0);

    TermResult::scored(s).missing_if(
        f.avail_guarantee_pct.is_none(),
        "No mechanical availability guarantee; buyer has no assurance of project uptime.",
    )
}

pub fn production(f: &ProductionFacts, ctx: &DealContext) -> TermResult {
    let guaranteed = f.production_guarantee.unwrap_or_default();
    let mut s = if guaranteed == YesNo::Yes {
        match f.p_value.unwrap_or_default() {
            PValue::P50 => 10.0,
            PValue::P75 => 45.0,
            PValue::P90 => 65.0,
            PValue::Other => 50.0,
            PValue::NotSpecified => 40.0,
        }
    } else {
        80.0
    };

    let wind = ctx.is_wind();
    s += match f.measurement_period.unwrap_or_default() {
        MeasurementPeriod::Annual if wind => -5.0,
        MeasurementPeriod::Annual => -3.0,
        MeasurementPeriod::Rolling2yr if wind => 0.0,
        MeasurementPeriod::Rolling2yr => 2.0,
        MeasurementPeriod::Rolling3yr if wind => 3.0,
        MeasurementPeriod::Rolling3yr => 5.0,
        MeasurementPeriod::NotSpecified => 3.0,
    };
    s += yes_no(f.resource_normalized, -3.0, 8.0, 5.0);
    s += match f.shortfall_remedy.unwrap_or_default() {
        ProductionRemedy::DeemedGeneration => -5.0,
        ProductionRemedy::MakeWhole => -4.0,
        ProductionRemedy::LiquidatedDamages => -2.0,
        ProductionRemedy::None => 15.0,
        ProductionRemedy::NotSpecified => 8.0,
    };
    s += match f.excess_gen_treatment.unwrap_or_default() {
        ExcessGenTreatment::BuyerReceivesAll => -3.0,
        ExcessGenTreatment::Capped => 3.0,
        ExcessGenTreatment::Clawback => 8.0,
        ExcessGenTreatment::NotSpecified => 2.0,
    };
    s += yes_no(f.termination_right, -5.0, 8.0, 5.0);

    let message =
        "No energy production guarantee; buyer has no protection against plant underperformance.";
    TermResult::scored(s)
        .missing_if(f.production_guarantee.is_none(), message)
        .flag_if(guaranteed == YesNo::No, message)
}

pub fn permit(f: &PermitFacts) -> TermResult {
    let status = f.permit_status.unwrap_or_default();
    let mut s = match status {
        PermitStatus::AllObtained => 5.0,
        PermitStatus::MajorObtained => 18.0,
        PermitStatus::InProgress => 40.0,
        PermitStatus::NotStarted => 70.0,
        PermitStatus::NotSpecified => 65.0,
    };
    s += yes_no(f.permit_as_cp, -5.0, 5.0, 3.0);

    let early = matches!(status, PermitStatus::InProgress | PermitStatus::NotStarted);
    TermResult::scored(s)
        .missing_if(f.permit_status.is_none(), "Permitting status not disclosed.")
        .flag_if(
            early && f.permit_as_cp != Some(YesNo::Yes),
            "Early-stage permitting not listed as condition precedent.",
        )
}

const CAPACITY_THRESHOLD: &[Step] = &[
    Step::new(100.0, -5.0),
    Step::new(97.0, -3.0),
    Step::new(95.0, 0.0),
    Step::new(90.0, 5.0),
];

pub fn cod(f: &CodFacts) -> TermResult {
    let mut s = match f.cod_definition_strength.unwrap_or_default() {
        CodDefinitionStrength::TightObjective => 8.0,
        CodDefinitionStrength::Moderate => 30.0,
        CodDefinitionStrength::LooseSubstantial => 58.0,
        CodDefinitionStrength::NotSpecified => 70.0,
    };
    s += step_at_least(f.capacity_threshold, CAPACITY_THRESHOLD, 10.0, 5.0);
    s += match f.performance_test.unwrap_or_default() {
        PerformanceTest::FullCapacityDemo => -5.0,
        PerformanceTest::NameplateOnly => 3.0,
        PerformanceTest::None => 8.0,
        PerformanceTest::NotSpecified => 5.0,
    };
    s += match f.documentary_deliverables.unwrap_or_default() {
        DocumentaryDeliverables::Comprehensive => -5.0,
        DocumentaryDeliverables::Partial => 0.0,
        DocumentaryDeliverables::Minimal | DocumentaryDeliverables::NotSpecified => 5.0,
    };
    s += match f.buyer_verification_right.unwrap_or_default() {
        BuyerVerificationRight::ReviewAndConfirm => -5.0,
        BuyerVerificationRight::NoticeOnly => 2.0,
        BuyerVerificationRight::SellerSelfCertifies => 7.0,
        BuyerVerificationRight::NotSpecified => 5.0,
    };
    s += match f.independent_engineer.unwrap_or_default() {
        IndependentEngineer::Required => -5.0,
        IndependentEngineer::Optional => 0.0,
        IndependentEngineer::None => 5.0,
        IndependentEngineer::NotSpecified => 3.0,
    };
    s += match f.partial_cod.unwrap_or_default() {
        PartialCod::NotAllowed => -3.0,
        PartialCod::AllowedWithConditions => 2.0,
        PartialCod::AllowedUnrestricted => 8.0,
        PartialCod::NotSpecified => 5.0,
    };

    TermResult::scored(s).missing_if(
        f.cod_definition_strength.is_none(),
        "COD definition not specified; seller controls when the contract clock starts.",
    )
}

#[cfg(test)]
#[path = "development_test.rs"]
mod tests;
