//! Structured facts extracted from a term sheet.
//!
//! The extractor (regex pass or LLM) emits one JSON record per scoreable
//! term plus a `deal` record. Every field is `Option<_>`: `None` means the
//! extractor found nothing, while a categorical `Some(NotSpecified)` means the
//! topic was addressed but the value was ambiguous. Scorers treat both as the
//! conservative default; only `None` raises a missing-data flag.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Declare a categorical fact enum.
///
/// Each variant maps to the exact wire string the extractor emits (with
/// optional aliases). A `NotSpecified` variant is appended, serialized as
/// `"not_specified"`, and made the `Default`, so `field.unwrap_or_default()`
/// resolves both absent and ambiguous facts to the same table row.
macro_rules! fact_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $text:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $text $(, alias = $alias)*)]
                $variant,
            )+
            #[default]
            #[serde(rename = "not_specified")]
            NotSpecified,
        }

        impl $name {
            /// Wire string for this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::NotSpecified => "not_specified",
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod contract;
pub mod credit;
pub mod curtailment;
pub mod development;
pub mod environmental;
pub mod legal;
pub mod pricing;

pub use contract::*;
pub use credit::*;
pub use curtailment::*;
pub use development::*;
pub use environmental::*;
pub use legal::*;
pub use pricing::*;

// ─── Shared categorical values ───────────────────────────────────────

fact_enum! {
    /// Plain yes/no answer.
    YesNo { Yes => "yes", No => "no" }
}

fact_enum! {
    /// Whether a mechanism is present in the document.
    Presence { Present => "present", Absent => "absent" }
}

fact_enum! {
    /// Which party may terminate.
    TerminationRight {
        Buyer => "buyer",
        Mutual => "mutual",
        Seller => "seller",
        None => "none",
    }
}

fact_enum! {
    /// Whether a transfer or disclosure is permitted.
    Permission { Permitted => "permitted", NotPermitted => "not_permitted" }
}

fact_enum! {
    /// Which party bears a recurring cost.
    CostBearer {
        SellerBears => "seller_bears",
        Shared => "shared",
        BuyerBears => "buyer_bears",
    }
}

fact_enum! {
    /// Which party pays a fee.
    FeePayer {
        SellerPays => "seller_pays",
        Shared => "shared",
        BuyerPays => "buyer_pays",
    }
}

// ─── Deal record ─────────────────────────────────────────────────────

/// Free-form descriptive value that the extractor may emit as text or number
/// (e.g. capacity `150` or `"150 MW"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Descriptor {
    Number(f64),
    Text(String),
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Number(n) => write!(f, "{n}"),
            Descriptor::Text(s) => f.write_str(s),
        }
    }
}

/// Deal-wide classification and metadata. `iso`, `technology` and
/// `asset_type` are kept as raw strings; the engine classifies them once
/// into a `DealContext` with explicit fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DealFacts {
    pub buyer: Option<Descriptor>,
    pub developer: Option<Descriptor>,
    pub project: Option<Descriptor>,
    pub iso: Option<String>,
    pub technology: Option<String>,
    /// Short alias some extractors emit next to `technology`.
    pub tech: Option<String>,
    pub asset_type: Option<String>,
    pub capacity: Option<Descriptor>,
    pub buyer_share: Option<Descriptor>,
    pub strike_price: Option<f64>,
    pub escalator_pct: Option<f64>,
    pub escalator_type: Option<EscalatorType>,
    pub term: Option<Descriptor>,
    pub cod: Option<Descriptor>,
}

// ─── Facts bundle ────────────────────────────────────────────────────

/// A `null` sub-record is the same as a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Counts may arrive as any JSON number (`3` or `3.0`). Fractions truncate,
/// negatives count as zero.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    // `as` saturates, and maps NaN to 0.
    Ok(Option::<f64>::deserialize(deserializer)?.map(|n| n as u32))
}

/// The full input to `score_all`: the deal record plus one sub-record per term.
/// Missing or `null` sub-records deserialize as empty (all fields absent).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Facts {
    #[serde(deserialize_with = "null_as_default")]
    pub deal: DealFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub strike: StrikeFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub floating: FloatingFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub interval: IntervalFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub negprice: NegPriceFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub invoice: InvoiceFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub basis: BasisFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub marketdisrupt: MarketDisruptFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub scheduling: SchedulingFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub curtailment: CurtailmentFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub nonecocurtail: NonEconCurtailFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub basiscurtail: BasisCurtailFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub ia: InterconnectionFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub cp: ConditionsPrecedentFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub delay: DelayFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub availmech: AvailabilityFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub availguaranteed: ProductionFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub permit: PermitFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub cod: CodFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub buyerpa: BuyerAssuranceFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub sellerpa: SellerAssuranceFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub assign: AssignmentFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub fm: ForceMajeureFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub eod: DefaultFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub eterm: TerminationFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub changeinlaw: ChangeInLawFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub reputation: ReputationFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub product: ProductFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub recs: RecFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub incentives: IncentiveFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub govlaw: GoverningLawFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub conf: ConfidentialityFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub excl: ExclusivityFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub expenses: ExpenseFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub acct: AccountingFacts,
    #[serde(deserialize_with = "null_as_default")]
    pub publicity: PublicityFacts,
}

impl Facts {
    /// Parse a facts bundle from the extractor's JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
