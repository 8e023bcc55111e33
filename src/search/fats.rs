// ABOUTME: Derived fat aggregates from optional raw sub-components
// ABOUTME: healthy = mono + poly, unhealthy = saturated + trans, defined when either operand is
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! Fat aggregation.
//!
//! No source API reports "healthy" or "unhealthy" fats directly; they are
//! derived from the fat sub-components. The aggregate is defined whenever
//! at least one operand is defined, with the absent operand contributing 0.
//! An aggregate of `None` therefore means "the source reported neither
//! component", not "the sum is zero".

/// Sum two optional fat components; `None` only when both are absent
#[must_use]
pub fn sum_components(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (None, None) => None,
        _ => Some(a.unwrap_or(0.0) + b.unwrap_or(0.0)),
    }
}

/// Both derived fat aggregates for one record
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FatAggregates {
    /// Monounsaturated plus polyunsaturated, if either was reported
    pub healthy: Option<f64>,
    /// Saturated plus trans, if either was reported
    pub unhealthy: Option<f64>,
}

/// Derive both aggregates from the four optional sub-components
#[must_use]
pub fn aggregate(
    saturated: Option<f64>,
    trans: Option<f64>,
    monounsaturated: Option<f64>,
    polyunsaturated: Option<f64>,
) -> FatAggregates {
    FatAggregates {
        healthy: sum_components(monounsaturated, polyunsaturated),
        unhealthy: sum_components(saturated, trans),
    }
}
