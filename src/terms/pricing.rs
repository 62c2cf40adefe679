//! Pricing and settlement scorers.

use crate::context::{DealContext, FallbackField};
use crate::facts::{
    AddersIncluded, BasisAllocation, BasisFacts, BusbarTrigger, DisputeMechanism, EscalatorType,
    FloatingFacts, IntervalFacts, InvoiceFacts, InvoiceFrequency, LatePaymentRate,
    MaintenanceCoordination, MarketDisruptFacts, NegPriceFacts, NegPriceMechanism,
    OutageNotification, Presence, PriceReference, SchedulingControl, SchedulingFacts,
    SettlementInterval, SettlementTreatment, SettlementType, StrikeFacts, TerminationRight,
    TrueUp, YesNo,
};
use crate::numeric::{Step, interpolate_bands, step_at_least, step_at_most};
use crate::terms::{TermResult, TermStatus};

/// Score added for an escalator of `pct` percent per year. A de-escalator
/// earns a credit on the same half-point scale.
pub fn escalator_penalty(pct: f64, kind: EscalatorType) -> f64 {
    if pct <= 1.0 {
        (pct / 0.5).round() * 3.0
    } else if pct <= 2.0 {
        6.0 + ((pct - 1.0) / 0.5).round() * 4.0
    } else {
        match kind {
            EscalatorType::Cpi => 8.0,
            EscalatorType::CpiSpread => 10.0,
            EscalatorType::Fixed | EscalatorType::NotSpecified => 15.0,
        }
    }
}

pub fn strike(f: &StrikeFacts, ctx: &DealContext) -> TermResult {
    let result = match (f.strike_price, ctx.ladder()) {
        (None, _) => TermResult::neutral(TermStatus::Missing)
            .with_flag("Strike price not yet specified; score is a placeholder."),
        (Some(_), None) => TermResult::neutral(TermStatus::Unsupported).with_flag(format!(
            "Not scored: no {} reference prices for {} (rare market offering).",
            ctx.market, ctx.technology
        )),
        (Some(price), Some(ladder)) => {
            let base = interpolate_bands(price, &ladder.bands(), 0.0, 100.0);
            let penalty = escalator_penalty(
                f.escalator_pct.unwrap_or(0.0),
                f.escalator_type.unwrap_or_default(),
            );
            TermResult::scored(base + penalty)
        }
    };
    // Market and technology both pick the ladder.
    [FallbackField::Market, FallbackField::Technology]
        .into_iter()
        .filter_map(|field| ctx.note_for(field))
        .fold(result, |r, note| {
            r.with_flag(format!("Reduced confidence: {}", note.message))
        })
}

pub fn floating(f: &FloatingFacts) -> TermResult {
    let st = f.settlement_type.unwrap_or_default();
    let ai = f.adders_included.unwrap_or_default();
    let base = match st {
        SettlementType::Hub | SettlementType::Zonal => match ai {
            AddersIncluded::AllIn => 5.0,
            AddersIncluded::Partial => 18.0,
            AddersIncluded::Excluded => 35.0,
            AddersIncluded::NotSpecified => 40.0,
        },
        SettlementType::Nodal => match ai {
            AddersIncluded::AllIn => 55.0,
            AddersIncluded::Partial => 62.0,
            AddersIncluded::Excluded => 70.0,
            AddersIncluded::NotSpecified => 75.0,
        },
        SettlementType::NotSpecified => 80.0,
    };

    let hub_like = matches!(st, SettlementType::Hub | SettlementType::Zonal);
    let spread = f.node_to_hub_spread.filter(|_| hub_like);
    TermResult::scored(base)
        .missing_if(
            f.settlement_type.is_none(),
            "Settlement point not defined; critical term missing.",
        )
        .flag_if(
            spread.is_some_and(|s| s > 7.0),
            format!(
                "High developer basis risk: ${}/MWh spread threatens project viability.",
                spread.unwrap_or_default()
            ),
        )
        .flag_if(
            spread.is_some_and(|s| s > 3.0 && s <= 7.0),
            format!(
                "Monitor developer basis exposure: ${}/MWh node-to-hub spread.",
                spread.unwrap_or_default()
            ),
        )
}

pub fn interval(f: &IntervalFacts) -> TermResult {
    let si = f.settlement_interval.unwrap_or_default();
    let mut s = match si {
        SettlementInterval::IsoNative => 5.0,
        SettlementInterval::Hourly => 30.0,
        SettlementInterval::Monthly => 60.0,
        SettlementInterval::Annual => 75.0,
        SettlementInterval::NotSpecified => 70.0,
    };
    s += match f.price_reference.unwrap_or_default() {
        PriceReference::RealTime => 0.0,
        PriceReference::DayAhead => 5.0,
        PriceReference::NotSpecified => 10.0,
    };

    TermResult::scored(s)
        .missing_if(
            f.settlement_interval.is_none(),
            "Settlement interval not defined; defaults typically favor seller.",
        )
        .flag_if(
            matches!(si, SettlementInterval::Monthly | SettlementInterval::Annual),
            "Aggregated settlement interval masks negative price hours.",
        )
}

const NEG_HOURS_CAP: &[Step] = &[
    Step::new(50.0, -10.0),
    Step::new(100.0, -7.0),
    Step::new(200.0, -4.0),
    Step::new(500.0, 0.0),
];

const NEG_PRICE_FLOOR: &[Step] = &[
    Step::new(-10.0, -8.0),
    Step::new(-25.0, -5.0),
    Step::new(-50.0, -2.0),
];

pub fn negprice(f: &NegPriceFacts) -> TermResult {
    let mech = f.neg_price_mechanism.unwrap_or_default();
    let mut s = match mech {
        NegPriceMechanism::ZeroFloor => 5.0,
        NegPriceMechanism::SellerCurtails => 30.0,
        NegPriceMechanism::FullPassthrough => 70.0,
        NegPriceMechanism::NotSpecified => 85.0,
    };

    if matches!(
        mech,
        NegPriceMechanism::SellerCurtails | NegPriceMechanism::FullPassthrough
    ) {
        s += step_at_most(f.hours_cap, NEG_HOURS_CAP, 5.0, 0.0);
        s += step_at_least(f.price_floor, NEG_PRICE_FLOOR, 0.0, 0.0);
        if f.annual_aggregate_cap == Some(true) {
            s -= 5.0;
        }
    }

    TermResult::scored(s).missing_if(
        f.neg_price_mechanism.is_none(),
        "No negative price provisions found; buyer assumes unlimited downside. \
         Critical gap in ERCOT and CAISO markets.",
    )
}

const PAYMENT_DAYS: &[Step] = &[
    Step::new(60.0, -10.0),
    Step::new(45.0, -5.0),
    Step::new(30.0, 0.0),
    Step::new(15.0, 5.0),
];

pub fn invoice(f: &InvoiceFacts) -> TermResult {
    let mut s = match f.invoice_frequency.unwrap_or_default() {
        InvoiceFrequency::Monthly => 25.0,
        InvoiceFrequency::Quarterly => 40.0,
        InvoiceFrequency::Annual => 60.0,
        InvoiceFrequency::NotSpecified => 55.0,
    };
    s += step_at_least(f.payment_terms_days, PAYMENT_DAYS, 10.0, 5.0);
    s += match f.netting.unwrap_or_default() {
        YesNo::Yes => -5.0,
        YesNo::No => 5.0,
        YesNo::NotSpecified => 3.0,
    };
    s += match f.dispute_mechanism.unwrap_or_default() {
        DisputeMechanism::WithholdDisputed => -5.0,
        DisputeMechanism::PayThenDispute => 5.0,
        DisputeMechanism::NotSpecified => 3.0,
    };
    s += match f.late_payment_rate.unwrap_or_default() {
        LatePaymentRate::Low => -2.0,
        LatePaymentRate::Moderate => 0.0,
        LatePaymentRate::High => 3.0,
        LatePaymentRate::NotSpecified => 2.0,
    };
    s += match f.true_up.unwrap_or_default() {
        TrueUp::Monthly => -3.0,
        TrueUp::Quarterly => 0.0,
        TrueUp::Annual => 3.0,
        TrueUp::None => 5.0,
        TrueUp::NotSpecified => 3.0,
    };

    TermResult::scored(s).missing_if(
        f.invoice_frequency.is_none(),
        "Invoicing and payment terms not defined; silence typically defaults to \
         seller-favorable terms.",
    )
}

const COLLAR_BAND: &[Step] = &[Step::new(3.0, -5.0), Step::new(7.0, 0.0), Step::new(15.0, 5.0)];
const BUSBAR_HOURS: &[Step] = &[Step::new(50.0, -3.0), Step::new(200.0, 0.0)];

pub fn basis(f: &BasisFacts) -> TermResult {
    let alloc = f.basis_allocation.unwrap_or_default();
    let mut s = match alloc {
        BasisAllocation::SellerBears => 10.0,
        BasisAllocation::SharedCollar => 35.0,
        BasisAllocation::BuyerBears => 65.0,
        BasisAllocation::NotSpecified => 75.0,
    };

    if alloc == BasisAllocation::SharedCollar {
        s += step_at_most(f.collar_band, COLLAR_BAND, 10.0, 5.0);
    }

    s += match f.busbar_transfer.unwrap_or_default() {
        Presence::Absent => 0.0,
        Presence::Present => {
            let trigger = match f.busbar_trigger.unwrap_or_default() {
                BusbarTrigger::StandardNodePlusPpa => 8.0,
                BusbarTrigger::LowerThreshold => 15.0,
                BusbarTrigger::NotSpecified => 12.0,
            };
            trigger + step_at_most(f.busbar_hours_cap, BUSBAR_HOURS, 3.0, 2.0)
        }
        Presence::NotSpecified => 3.0,
    };

    TermResult::scored(s).missing_if(
        f.basis_allocation.is_none(),
        "Basis risk allocation not defined; silence typically means buyer assumes all \
         locational spread risk.",
    )
}

const FALLBACK_CAP: &[Step] = &[
    Step::new(100.0, -5.0),
    Step::new(250.0, -3.0),
    Step::new(500.0, 0.0),
];
const DISRUPTION_TRIGGER_DAYS: &[Step] =
    &[Step::new(3.0, -3.0), Step::new(7.0, 0.0), Step::new(30.0, 3.0)];

pub fn marketdisrupt(f: &MarketDisruptFacts) -> TermResult {
    let defined = f.disruption_defined.unwrap_or_default();
    let mut s = if defined == YesNo::Yes {
        match f.settlement_treatment.unwrap_or_default() {
            SettlementTreatment::Suspend => 5.0,
            SettlementTreatment::FallbackAverage => 15.0,
            SettlementTreatment::FallbackLast => 30.0,
            SettlementTreatment::SettleNormal => 65.0,
            SettlementTreatment::NotSpecified => 50.0,
        }
    } else {
        80.0
    };

    s += step_at_most(f.fallback_cap_price, FALLBACK_CAP, 5.0, 3.0);
    s += match f.termination_right.unwrap_or_default() {
        TerminationRight::Buyer => -5.0,
        TerminationRight::Mutual => -3.0,
        TerminationRight::Seller | TerminationRight::None => 5.0,
        TerminationRight::NotSpecified => 3.0,
    };
    s += step_at_most(f.termination_trigger_days, DISRUPTION_TRIGGER_DAYS, 5.0, 3.0);
    s += match f.disruption_event_count.unwrap_or(0) {
        4.. => -3.0,
        2..=3 => 0.0,
        1 => 3.0,
        0 => 5.0,
    };

    let message = "No market disruption provisions; buyer is fully exposed to ISO emergency \
                   pricing. ERCOT Winter Storm Uri demonstrated catastrophic exposure.";
    TermResult::scored(s)
        .missing_if(f.disruption_defined.is_none(), message)
        .flag_if(defined == YesNo::No, message)
}

const NOTICE_WINDOW: &[Step] = &[
    Step::new(30.0, -3.0),
    Step::new(14.0, -1.0),
    Step::new(7.0, 0.0),
];

pub fn scheduling(f: &SchedulingFacts) -> TermResult {
    let mut s = match f.scheduling_control.unwrap_or_default() {
        SchedulingControl::IsoDispatch => 15.0,
        SchedulingControl::SellerSchedules => 35.0,
        SchedulingControl::BuyerApproval => 10.0,
        SchedulingControl::NotSpecified => 55.0,
    };

    let notice = f.outage_notification.unwrap_or_default();
    s += match notice {
        OutageNotification::AdvanceRequired => -5.0,
        OutageNotification::BestEfforts => 0.0,
        OutageNotification::None => 5.0,
        OutageNotification::NotSpecified => 3.0,
    };
    if notice == OutageNotification::AdvanceRequired {
        s += step_at_least(f.notification_window_days, NOTICE_WINDOW, 2.0, 2.0);
    }
    s += match f.anti_gaming.unwrap_or_default() {
        Presence::Present => -5.0,
        Presence::Absent => 5.0,
        Presence::NotSpecified => 3.0,
    };
    s += match f.maintenance_coordination.unwrap_or_default() {
        MaintenanceCoordination::BuyerConsent => -5.0,
        MaintenanceCoordination::BuyerConsultation => -2.0,
        MaintenanceCoordination::SellerDiscretion => 5.0,
        MaintenanceCoordination::NotSpecified => 3.0,
    };

    TermResult::scored(s).missing_if(
        f.scheduling_control.is_none(),
        "Scheduling rights not defined; buyer lacks visibility into dispatch decisions.",
    )
}

#[cfg(test)]
#[path = "pricing_test.rs"]
mod tests;
