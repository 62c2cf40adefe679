//! Pricing and settlement facts.

use serde::{Deserialize, Serialize};

use super::{DealFacts, Presence, TerminationRight, YesNo};

fact_enum! {
    EscalatorType { Fixed => "fixed", Cpi => "cpi", CpiSpread => "cpi_spread" }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrikeFacts {
    pub strike_price: Option<f64>,
    pub escalator_pct: Option<f64>,
    pub escalator_type: Option<EscalatorType>,
}

impl StrikeFacts {
    /// Fill gaps from the deal record, which some extractors use for pricing.
    pub fn or_deal(&self, deal: &DealFacts) -> StrikeFacts {
        StrikeFacts {
            strike_price: self.strike_price.or(deal.strike_price),
            escalator_pct: self.escalator_pct.or(deal.escalator_pct),
            escalator_type: self.escalator_type.or(deal.escalator_type),
        }
    }
}

fact_enum! {
    SettlementType { Hub => "hub", Zonal => "zonal", Nodal => "nodal" }
}

fact_enum! {
    AddersIncluded { AllIn => "all_in", Partial => "partial", Excluded => "excluded" }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FloatingFacts {
    pub settlement_type: Option<SettlementType>,
    pub adders_included: Option<AddersIncluded>,
    /// Historical node-to-hub spread in $/MWh.
    pub node_to_hub_spread: Option<f64>,
}

fact_enum! {
    SettlementInterval {
        IsoNative => "iso_native",
        Hourly => "hourly",
        Monthly => "monthly",
        Annual => "annual",
    }
}

fact_enum! {
    PriceReference { RealTime => "real_time", DayAhead => "day_ahead" }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntervalFacts {
    pub settlement_interval: Option<SettlementInterval>,
    pub price_reference: Option<PriceReference>,
}

fact_enum! {
    NegPriceMechanism {
        ZeroFloor => "zero_floor",
        SellerCurtails => "seller_curtails",
        FullPassthrough => "full_passthrough",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NegPriceFacts {
    pub neg_price_mechanism: Option<NegPriceMechanism>,
    /// Annual hours of negative-price exposure before protection kicks in.
    pub hours_cap: Option<f64>,
    /// Settlement floor in $/MWh (negative).
    pub price_floor: Option<f64>,
    pub annual_aggregate_cap: Option<bool>,
}

fact_enum! {
    InvoiceFrequency { Monthly => "monthly", Quarterly => "quarterly", Annual => "annual" }
}

fact_enum! {
    DisputeMechanism {
        WithholdDisputed => "withhold_disputed",
        PayThenDispute => "pay_then_dispute",
    }
}

fact_enum! {
    LatePaymentRate { Low => "low", Moderate => "moderate", High => "high" }
}

fact_enum! {
    TrueUp {
        Monthly => "monthly",
        Quarterly => "quarterly",
        Annual => "annual",
        None => "none",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceFacts {
    pub invoice_frequency: Option<InvoiceFrequency>,
    pub payment_terms_days: Option<f64>,
    pub netting: Option<YesNo>,
    pub dispute_mechanism: Option<DisputeMechanism>,
    pub late_payment_rate: Option<LatePaymentRate>,
    pub true_up: Option<TrueUp>,
}

fact_enum! {
    BasisAllocation {
        SellerBears => "seller_bears",
        SharedCollar => "shared_collar",
        BuyerBears => "buyer_bears",
    }
}

fact_enum! {
    BusbarTrigger {
        StandardNodePlusPpa => "standard_node_plus_ppa",
        LowerThreshold => "lower_threshold",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasisFacts {
    pub basis_allocation: Option<BasisAllocation>,
    /// Collar width in $/MWh when basis is shared.
    pub collar_band: Option<f64>,
    pub busbar_transfer: Option<Presence>,
    pub busbar_trigger: Option<BusbarTrigger>,
    pub busbar_hours_cap: Option<f64>,
}

fact_enum! {
    SettlementTreatment {
        Suspend => "suspend",
        FallbackAverage => "fallback_average",
        FallbackLast => "fallback_last",
        SettleNormal => "settle_normal",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketDisruptFacts {
    pub disruption_defined: Option<YesNo>,
    pub settlement_treatment: Option<SettlementTreatment>,
    pub fallback_cap_price: Option<f64>,
    pub termination_right: Option<TerminationRight>,
    pub termination_trigger_days: Option<f64>,
    /// Number of distinct disruption events the clause enumerates.
    #[serde(deserialize_with = "super::lenient_count")]
    pub disruption_event_count: Option<u32>,
}

fact_enum! {
    SchedulingControl {
        IsoDispatch => "iso_dispatch",
        SellerSchedules => "seller_schedules",
        BuyerApproval => "buyer_approval",
    }
}

fact_enum! {
    OutageNotification {
        AdvanceRequired => "advance_required",
        BestEfforts => "best_efforts",
        None => "none",
    }
}

fact_enum! {
    MaintenanceCoordination {
        BuyerConsent => "buyer_consent",
        BuyerConsultation => "buyer_consultation",
        SellerDiscretion => "seller_discretion",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchedulingFacts {
    pub scheduling_control: Option<SchedulingControl>,
    pub outage_notification: Option<OutageNotification>,
    pub notification_window_days: Option<f64>,
    pub anti_gaming: Option<Presence>,
    pub maintenance_coordination: Option<MaintenanceCoordination>,
}
