//! Shape and curtailment facts. The three curtailment flavors share one
//! allocation vocabulary but arrive under different field names.

use serde::{Deserialize, Serialize};

fact_enum! {
    CurtailmentAllocation {
        SellerBearsDeemed => "seller_bears_deemed",
        Shared => "shared",
        BuyerBears => "buyer_bears",
    }
}

fact_enum! {
    DeemedGenMethod {
        WeatherAdjusted => "weather_adjusted",
        CapacityFactor => "capacity_factor",
        ContractualFormula => "contractual_formula",
    }
}

/// Allocation, cap and deemed-generation method for any curtailment flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CurtailmentTerms {
    pub allocation: Option<CurtailmentAllocation>,
    /// Percent of annual volume.
    pub cap: Option<f64>,
    pub deemed_gen_method: Option<DeemedGenMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurtailmentFacts {
    pub econ_curtailment_allocation: Option<CurtailmentAllocation>,
    pub curtailment_cap: Option<f64>,
    pub deemed_gen_method: Option<DeemedGenMethod>,
}

impl CurtailmentFacts {
    pub fn terms(&self) -> CurtailmentTerms {
        CurtailmentTerms {
            allocation: self.econ_curtailment_allocation,
            cap: self.curtailment_cap,
            deemed_gen_method: self.deemed_gen_method,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NonEconCurtailFacts {
    pub non_econ_curtail_allocation: Option<CurtailmentAllocation>,
    pub non_econ_curtail_cap: Option<f64>,
    pub non_econ_deemed_gen_method: Option<DeemedGenMethod>,
}

impl NonEconCurtailFacts {
    pub fn terms(&self) -> CurtailmentTerms {
        CurtailmentTerms {
            allocation: self.non_econ_curtail_allocation,
            cap: self.non_econ_curtail_cap,
            deemed_gen_method: self.non_econ_deemed_gen_method,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasisCurtailFacts {
    pub basis_curtail_allocation: Option<CurtailmentAllocation>,
    pub basis_curtail_cap: Option<f64>,
    pub basis_deemed_gen_method: Option<DeemedGenMethod>,
}

impl BasisCurtailFacts {
    pub fn terms(&self) -> CurtailmentTerms {
        CurtailmentTerms {
            allocation: self.basis_curtail_allocation,
            cap: self.basis_curtail_cap,
            deemed_gen_method: self.basis_deemed_gen_method,
        }
    }
}
