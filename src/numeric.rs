//! Numeric primitives shared by every term scorer.
//!
//! `clamp` bounds a raw total to the 0–100 score scale, `lerp` interpolates
//! inside one band of a piecewise-linear curve, and the step helpers turn a
//! threshold table into the additive delta a single modifier contributes.

/// Lower bound of the score scale (maximally buyer-favorable).
pub const SCORE_MIN: f64 = 0.0;
/// Upper bound of the score scale (red flag).
pub const SCORE_MAX: f64 = 100.0;

/// Constrain `value` to the closed interval `[min, max]`. NaN collapses to `min`.
pub fn clamp_range(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Constrain `value` to the 0–100 score scale.
pub fn clamp(value: f64) -> f64 {
    clamp_range(value, SCORE_MIN, SCORE_MAX)
}

/// Linear interpolation of `value` from `[in_low, in_high]` onto `[out_low, out_high]`.
///
/// A degenerate input range (`in_high == in_low`) returns `out_low`. Adjacent
/// ladder thresholds coincide for several markets, so this is a normal case.
pub fn lerp(value: f64, in_low: f64, in_high: f64, out_low: f64, out_high: f64) -> f64 {
    if in_high == in_low {
        return out_low;
    }
    out_low + (value - in_low) / (in_high - in_low) * (out_high - out_low)
}

/// One row of a modifier threshold table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Threshold compared against the fact value.
    pub limit: f64,
    /// Delta added to the running score when this row matches.
    pub delta: f64,
}

impl Step {
    pub const fn new(limit: f64, delta: f64) -> Self {
        Self { limit, delta }
    }
}

/// Delta for an ascending threshold table: the first row with `value <= limit`
/// wins, values past the last row get `beyond`, an absent value gets `absent`.
pub fn step_at_most(value: Option<f64>, steps: &[Step], beyond: f64, absent: f64) -> f64 {
    debug_assert!(
        steps.windows(2).all(|w| w[0].limit <= w[1].limit),
        "at-most steps must be sorted ascending"
    );
    let Some(v) = value else {
        return absent;
    };
    steps
        .iter()
        .find(|s| v <= s.limit)
        .map_or(beyond, |s| s.delta)
}

/// Delta for a descending threshold table: the first row with `value >= limit`
/// wins, values under the last row get `below`, an absent value gets `absent`.
pub fn step_at_least(value: Option<f64>, steps: &[Step], below: f64, absent: f64) -> f64 {
    debug_assert!(
        steps.windows(2).all(|w| w[0].limit >= w[1].limit),
        "at-least steps must be sorted descending"
    );
    let Some(v) = value else {
        return absent;
    };
    steps
        .iter()
        .find(|s| v >= s.limit)
        .map_or(below, |s| s.delta)
}

/// A segment of a piecewise-linear score curve: inputs in `(from, to]` map
/// linearly onto `[score_from, score_to]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub from: f64,
    pub to: f64,
    pub score_from: f64,
    pub score_to: f64,
}

/// Evaluate a curve made of consecutive bands. Values at or below the first
/// band's `from` score `floor`; values above the last band's `to` score
/// `ceiling`. Bands need not be contiguous in score, so a curve may jump
/// between bands.
pub fn interpolate_bands(value: f64, bands: &[Band], floor: f64, ceiling: f64) -> f64 {
    let Some(first) = bands.first() else {
        return floor;
    };
    if value <= first.from {
        return floor;
    }
    bands
        .iter()
        .find(|b| value <= b.to)
        .map_or(ceiling, |b| lerp(value, b.from, b.to, b.score_from, b.score_to))
}

#[cfg(test)]
#[path = "numeric_test.rs"]
mod tests;
