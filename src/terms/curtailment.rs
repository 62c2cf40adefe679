//! Curtailment scorers. Economic, non-economic and basis curtailment share
//! one shape: a base per allocation, then cap and deemed-generation
//! modifiers when the seller carries some of the volume risk.

use crate::facts::{
    BasisCurtailFacts, CurtailmentAllocation, CurtailmentFacts, CurtailmentTerms,
    DeemedGenMethod, NonEconCurtailFacts,
};
use crate::numeric::{Step, step_at_most};
use crate::terms::TermResult;

/// Base scores for `[seller_bears_deemed, shared, buyer_bears, not_specified]`.
type AllocationBase = [f64; 4];

const CAP_PCT: &[Step] = &[Step::new(3.0, -5.0), Step::new(5.0, 0.0), Step::new(10.0, 5.0)];

fn deemed_gen_delta(method: Option<DeemedGenMethod>) -> f64 {
    match method.unwrap_or_default() {
        DeemedGenMethod::WeatherAdjusted => -3.0,
        DeemedGenMethod::CapacityFactor => 0.0,
        DeemedGenMethod::ContractualFormula => 3.0,
        DeemedGenMethod::NotSpecified => 5.0,
    }
}

fn score_allocation(t: CurtailmentTerms, base: AllocationBase, missing: &str) -> TermResult {
    let s = match t.allocation.unwrap_or_default() {
        CurtailmentAllocation::SellerBearsDeemed => base[0] + deemed_gen_delta(t.deemed_gen_method),
        CurtailmentAllocation::Shared => {
            base[1]
                + step_at_most(t.cap, CAP_PCT, 10.0, 5.0)
                + deemed_gen_delta(t.deemed_gen_method)
        }
        CurtailmentAllocation::BuyerBears => base[2],
        CurtailmentAllocation::NotSpecified => base[3],
    };
    TermResult::scored(s).missing_if(t.allocation.is_none(), missing)
}

pub fn economic(f: &CurtailmentFacts) -> TermResult {
    score_allocation(
        f.terms(),
        [10.0, 40.0, 65.0, 75.0],
        "Economic curtailment risk allocation not defined; silence typically means buyer \
         absorbs lost volume.",
    )
}

pub fn non_economic(f: &NonEconCurtailFacts) -> TermResult {
    score_allocation(
        f.terms(),
        [15.0, 35.0, 60.0, 70.0],
        "Non-economic curtailment not addressed; buyer likely absorbs volume loss from \
         transmission congestion.",
    )
}

pub fn basis(f: &BasisCurtailFacts) -> TermResult {
    score_allocation(
        f.terms(),
        [10.0, 40.0, 70.0, 78.0],
        "Basis curtailment not addressed; seller can curtail during basis blowouts with no \
         buyer compensation.",
    )
}

#[cfg(test)]
#[path = "curtailment_test.rs"]
mod tests;
