//! Market classification and the strike-price reference ladders.
//!
//! A ladder is seven price thresholds ($/MWh) for one market and technology.
//! Between consecutive thresholds the strike score moves linearly through a
//! fixed band, so a price inside the "market" range lands at 30–50 and a
//! price past the last threshold is a red flag.

use std::fmt;

use serde::Serialize;

use crate::numeric::{Band, Step};

/// Multiplier applied to every ladder threshold for operating assets, which
/// clear at lower prices than new builds.
pub const EXISTING_ASSET_SCALE: f64 = 0.75;

/// Wholesale market (ISO/RTO) the project settles in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Market {
    #[serde(rename = "ERCOT")]
    Ercot,
    #[serde(rename = "CAISO")]
    Caiso,
    #[serde(rename = "PJM")]
    Pjm,
    #[serde(rename = "MISO")]
    Miso,
    #[serde(rename = "SPP")]
    Spp,
    #[serde(rename = "ISO-NE")]
    IsoNe,
    #[serde(rename = "NYISO")]
    Nyiso,
}

impl Market {
    pub const ALL: [Market; 7] = [
        Market::Ercot,
        Market::Caiso,
        Market::Pjm,
        Market::Miso,
        Market::Spp,
        Market::IsoNe,
        Market::Nyiso,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Market::Ercot => "ERCOT",
            Market::Caiso => "CAISO",
            Market::Pjm => "PJM",
            Market::Miso => "MISO",
            Market::Spp => "SPP",
            Market::IsoNe => "ISO-NE",
            Market::Nyiso => "NYISO",
        }
    }

    /// Classify a free-text market name. Case, spaces and punctuation are
    /// ignored, so `"iso-ne"`, `"ISO NE"` and `"ISONE"` all match.
    pub fn parse(raw: &str) -> Option<Market> {
        let key: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match key.as_str() {
            "ERCOT" => Some(Market::Ercot),
            "CAISO" => Some(Market::Caiso),
            "PJM" => Some(Market::Pjm),
            "MISO" => Some(Market::Miso),
            "SPP" => Some(Market::Spp),
            "ISONE" | "NEISO" => Some(Market::IsoNe),
            "NYISO" => Some(Market::Nyiso),
            _ => None,
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generation technology. Several modifier tiers differ between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Technology {
    Solar,
    Wind,
}

impl Technology {
    pub fn as_str(self) -> &'static str {
        match self {
            Technology::Solar => "solar",
            Technology::Wind => "wind",
        }
    }

    /// Classify free text such as `"Wind"`, `"onshore wind"` or `"solar PV"`.
    pub fn parse(raw: &str) -> Option<Technology> {
        let lower = raw.trim().to_ascii_lowercase();
        if lower.contains("wind") {
            Some(Technology::Wind)
        } else if lower.contains("solar") || lower == "pv" {
            Some(Technology::Solar)
        } else {
            None
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Development stage of the contracted asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    NewBuild,
    Existing,
}

impl AssetType {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::NewBuild => "new_build",
            AssetType::Existing => "existing",
        }
    }

    pub fn parse(raw: &str) -> Option<AssetType> {
        let lower = raw.trim().to_ascii_lowercase();
        if lower.contains("exist") || lower.contains("operating") {
            Some(AssetType::Existing)
        } else if lower.contains("new") {
            Some(AssetType::NewBuild)
        } else {
            None
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seven ascending strike thresholds in $/MWh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceLadder {
    /// Buyer-favorable range.
    pub bf_low: f64,
    pub bf_high: f64,
    /// Market range.
    pub mkt_low: f64,
    pub mkt_high: f64,
    /// Seller-favorable range.
    pub sf_low: f64,
    pub sf_high: f64,
    /// Red-flag ceiling; prices above it score 100.
    pub rf_high: f64,
}

impl PriceLadder {
    const fn new(t: [f64; 7]) -> Self {
        Self {
            bf_low: t[0],
            bf_high: t[1],
            mkt_low: t[2],
            mkt_high: t[3],
            sf_low: t[4],
            sf_high: t[5],
            rf_high: t[6],
        }
    }

    /// Every threshold multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            bf_low: self.bf_low * factor,
            bf_high: self.bf_high * factor,
            mkt_low: self.mkt_low * factor,
            mkt_high: self.mkt_high * factor,
            sf_low: self.sf_low * factor,
            sf_high: self.sf_high * factor,
            rf_high: self.rf_high * factor,
        }
    }

    /// The ladder as a piecewise curve. The top band starts at 76 rather than
    /// 75, so crossing `sf_high` is a visible step into red-flag territory.
    pub fn bands(&self) -> [Band; 6] {
        let band = |from, to, score_from, score_to| Band {
            from,
            to,
            score_from,
            score_to,
        };
        [
            band(self.bf_low, self.bf_high, 0.0, 25.0),
            band(self.bf_high, self.mkt_low, 25.0, 30.0),
            band(self.mkt_low, self.mkt_high, 30.0, 50.0),
            band(self.mkt_high, self.sf_low, 50.0, 55.0),
            band(self.sf_low, self.sf_high, 55.0, 75.0),
            band(self.sf_high, self.rf_high, 76.0, 100.0),
        ]
    }
}

/// Reference ladder for a market and technology, if one exists.
/// ISO-NE and NYISO only carry solar ladders.
pub fn strike_ladder(market: Market, technology: Technology) -> Option<PriceLadder> {
    use Market::*;
    use Technology::*;

    let t = match (market, technology) {
        (Ercot, Solar) => [40.0, 45.0, 48.0, 52.0, 55.0, 60.0, 72.0],
        (Ercot, Wind) => [45.0, 50.0, 52.0, 60.0, 60.0, 70.0, 84.0],
        (Caiso, Solar) => [55.0, 62.0, 70.0, 80.0, 80.0, 90.0, 108.0],
        (Caiso, Wind) => [55.0, 65.0, 65.0, 75.0, 75.0, 85.0, 102.0],
        (Pjm, Solar) => [73.0, 81.0, 85.0, 95.0, 95.0, 110.0, 132.0],
        (Pjm, Wind) => [70.0, 80.0, 80.0, 92.0, 92.0, 105.0, 126.0],
        (Miso, Solar) => [58.0, 65.0, 65.0, 75.0, 75.0, 85.0, 102.0],
        (Miso, Wind) => [50.0, 58.0, 58.0, 68.0, 68.0, 78.0, 94.0],
        (Spp, Solar) => [48.0, 55.0, 55.0, 65.0, 65.0, 75.0, 90.0],
        (Spp, Wind) => [40.0, 48.0, 48.0, 55.0, 55.0, 65.0, 78.0],
        (IsoNe, Solar) => [63.0, 70.0, 75.0, 85.0, 85.0, 95.0, 114.0],
        (Nyiso, Solar) => [58.0, 65.0, 70.0, 80.0, 80.0, 90.0, 108.0],
        (IsoNe, Wind) | (Nyiso, Wind) => return None,
    };
    Some(PriceLadder::new(t))
}

/// Ladder adjusted for asset type.
pub fn effective_ladder(
    market: Market,
    technology: Technology,
    asset_type: AssetType,
) -> Option<PriceLadder> {
    let ladder = strike_ladder(market, technology)?;
    Some(match asset_type {
        AssetType::NewBuild => ladder,
        AssetType::Existing => ladder.scaled(EXISTING_ASSET_SCALE),
    })
}

// ─── Technology-dependent modifier tiers ─────────────────────────────

/// A descending threshold table plus the value used below its last row.
#[derive(Debug, Clone, Copy)]
pub struct Tiers {
    pub steps: &'static [Step],
    pub below: f64,
}

/// Base score for a guaranteed mechanical availability percentage. Wind
/// turbines are held to a lower bar than solar inverters.
pub fn availability_tiers(technology: Technology) -> Tiers {
    const WIND: &[Step] = &[
        Step::new(97.0, 5.0),
        Step::new(96.0, 15.0),
        Step::new(95.0, 30.0),
        Step::new(94.0, 42.0),
        Step::new(93.0, 55.0),
        Step::new(92.0, 65.0),
    ];
    const SOLAR: &[Step] = &[
        Step::new(99.0, 0.0),
        Step::new(98.0, 10.0),
        Step::new(97.0, 25.0),
        Step::new(96.0, 40.0),
        Step::new(95.0, 55.0),
    ];
    match technology {
        Technology::Wind => Tiers {
            steps: WIND,
            below: 82.0,
        },
        Technology::Solar => Tiers {
            steps: SOLAR,
            below: 80.0,
        },
    }
}

/// Modifier for the delay damages rate in $/MW/day.
pub fn delay_rate_tiers(technology: Technology) -> Tiers {
    const WIND: &[Step] = &[
        Step::new(3200.0, -5.0),
        Step::new(2000.0, 0.0),
        Step::new(1500.0, 5.0),
    ];
    const SOLAR: &[Step] = &[
        Step::new(2200.0, -5.0),
        Step::new(1400.0, 0.0),
        Step::new(1000.0, 5.0),
    ];
    let steps = match technology {
        Technology::Wind => WIND,
        Technology::Solar => SOLAR,
    };
    Tiers { steps, below: 10.0 }
}

/// Upper bounds ($/MW) for the buyer's fixed collateral amount: at or under
/// the first is lean, past the last is heavy. Twelve-month coverage doubles
/// the six-month bounds.
pub fn buyer_collateral_bounds(technology: Technology, six_months: bool) -> [f64; 3] {
    match (technology, six_months) {
        (Technology::Wind, true) => [28_500.0, 47_500.0, 66_500.0],
        (Technology::Wind, false) => [57_000.0, 95_000.0, 133_000.0],
        (Technology::Solar, true) => [22_500.0, 37_500.0, 52_500.0],
        (Technology::Solar, false) => [45_000.0, 75_000.0, 105_000.0],
    }
}

/// Modifier for the seller's pre-COD security in $/MW. More is better.
pub fn seller_pre_cod_tiers(technology: Technology) -> Tiers {
    const WIND: &[Step] = &[
        Step::new(158_000.0, -5.0),
        Step::new(75_000.0, -3.0),
        Step::new(27_000.0, 0.0),
        Step::new(15_000.0, 5.0),
    ];
    const SOLAR: &[Step] = &[
        Step::new(113_000.0, -5.0),
        Step::new(50_000.0, -3.0),
        Step::new(18_000.0, 0.0),
        Step::new(10_000.0, 5.0),
    ];
    let steps = match technology {
        Technology::Wind => WIND,
        Technology::Solar => SOLAR,
    };
    Tiers { steps, below: 10.0 }
}

/// Modifier for the seller's post-COD security in $/MW.
pub fn seller_post_cod_tiers(technology: Technology) -> Tiers {
    const WIND: &[Step] = &[
        Step::new(95_000.0, -5.0),
        Step::new(57_000.0, -3.0),
        Step::new(25_000.0, 0.0),
        Step::new(5_000.0, 2.0),
    ];
    const SOLAR: &[Step] = &[
        Step::new(75_000.0, -5.0),
        Step::new(45_000.0, -3.0),
        Step::new(20_000.0, 0.0),
        Step::new(5_000.0, 2.0),
    ];
    let steps = match technology {
        Technology::Wind => WIND,
        Technology::Solar => SOLAR,
    };
    Tiers { steps, below: 5.0 }
}

#[cfg(test)]
#[path = "tables_test.rs"]
mod tests;
