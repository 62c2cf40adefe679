//! Deal-wide classification shared by every scorer.
//!
//! Market, technology and asset stage are resolved once per scoring pass so
//! that all terms agree. Anything absent or unrecognized falls back to
//! ERCOT / solar / new build, and each fallback is recorded as a note.

use serde::Serialize;
use tracing::warn;

use crate::facts::DealFacts;
use crate::tables::{AssetType, Market, PriceLadder, Technology, effective_ladder};

pub const DEFAULT_MARKET: Market = Market::Ercot;
pub const DEFAULT_TECHNOLOGY: Technology = Technology::Solar;
pub const DEFAULT_ASSET_TYPE: AssetType = AssetType::NewBuild;

/// Which deal field fell back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackField {
    Market,
    Technology,
    AssetType,
}

/// A reduced-confidence note: the deal value could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextNote {
    pub field: FallbackField,
    /// Raw value as extracted, `None` if the field was absent.
    pub raw: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealContext {
    pub market: Market,
    pub technology: Technology,
    pub asset_type: AssetType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<ContextNote>,
}

impl Default for DealContext {
    fn default() -> Self {
        Self {
            market: DEFAULT_MARKET,
            technology: DEFAULT_TECHNOLOGY,
            asset_type: DEFAULT_ASSET_TYPE,
            notes: Vec::new(),
        }
    }
}

/// Classify `raw` with `parse`, or fall back to `default` and leave a note.
fn classify<T: Copy>(
    raw: Option<&str>,
    parse: fn(&str) -> Option<T>,
    default: T,
    field: FallbackField,
    what: &str,
    assumed: &str,
    notes: &mut Vec<ContextNote>,
) -> T {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    if let Some(value) = raw.and_then(parse) {
        return value;
    }
    let message = match raw {
        Some(r) => format!("{what} '{r}' not recognized; {assumed}."),
        None => format!("{what} not specified; {assumed}."),
    };
    warn!(field = ?field, raw = raw.unwrap_or(""), "{message}");
    notes.push(ContextNote {
        field,
        raw: raw.map(str::to_string),
        message,
    });
    default
}

impl DealContext {
    /// Resolve the deal record into a classification with explicit fallbacks.
    pub fn resolve(deal: &DealFacts) -> Self {
        let mut notes = Vec::new();
        let market = classify(
            deal.iso.as_deref(),
            Market::parse,
            DEFAULT_MARKET,
            FallbackField::Market,
            "Market",
            "scored against ERCOT reference prices",
            &mut notes,
        );
        let technology = classify(
            deal.technology.as_deref().or(deal.tech.as_deref()),
            Technology::parse,
            DEFAULT_TECHNOLOGY,
            FallbackField::Technology,
            "Technology",
            "assumed solar",
            &mut notes,
        );
        let asset_type = classify(
            deal.asset_type.as_deref(),
            AssetType::parse,
            DEFAULT_ASSET_TYPE,
            FallbackField::AssetType,
            "Asset type",
            "assumed new build",
            &mut notes,
        );
        Self {
            market,
            technology,
            asset_type,
            notes,
        }
    }

    /// Strike ladder for this deal, scaled for existing assets. `None` when
    /// the market has no ladder for the technology.
    pub fn ladder(&self) -> Option<PriceLadder> {
        effective_ladder(self.market, self.technology, self.asset_type)
    }

    pub fn note_for(&self, field: FallbackField) -> Option<&ContextNote> {
        self.notes.iter().find(|n| n.field == field)
    }

    pub fn is_wind(&self) -> bool {
        self.technology == Technology::Wind
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
