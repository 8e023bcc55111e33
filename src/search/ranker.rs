// ABOUTME: Search result normalization and ranking shared by all source adapters
// ABOUTME: Filters invalid candidates, sorts by relevance then source order, caps at 20
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! Result normalization and ranking.
//!
//! Each source adapter maps its raw payload into [`RawCandidate`] values in
//! the order the API returned them, then hands the list here. The ranker
//! applies the per-source [`RankingPolicy`], assigns relevance ranks, sorts
//! by (rank, source order), truncates, and strips the internal fields.

use crate::models::{NutritionData, ProductSearchResult};
use crate::search::relevance::Relevance;

/// Hard cap on the number of returned products
pub const RESULT_CAP: usize = 20;

/// Fallback label when a source record carries no usable name
pub const UNKNOWN_PRODUCT_LABEL: &str = "Unknown Product";

/// Per-source filtering policy.
///
/// The upstream application accumulated near-duplicate search routines with
/// slightly different rules; the differences live here so each adapter
/// states its policy once (see DESIGN.md for the per-source choices).
#[derive(Debug, Clone, PartialEq)]
pub struct RankingPolicy {
    /// Accept records whose calories are exactly zero. Negative or absent
    /// calories are always rejected.
    pub allow_zero_calories: bool,
    /// Re-check that the display name contains the query. Defensive, since
    /// upstream APIs already search by term; when off, non-containing
    /// records survive with the fallback rank and sort last.
    pub require_query_in_name: bool,
    /// Maximum number of returned products
    pub max_results: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            allow_zero_calories: false,
            require_query_in_name: true,
            max_results: RESULT_CAP,
        }
    }
}

/// One raw record surviving per-source decoding, in original API order
#[derive(Debug, Clone, Default)]
pub struct RawCandidate {
    /// Stable identifier from the source, if present
    pub id: Option<String>,
    /// Best available human label, if present
    pub display_name: Option<String>,
    /// Canonical nutrition snapshot mapped from the raw record
    pub nutrition: NutritionData,
}

struct RankedCandidate {
    product: ProductSearchResult,
    relevance: Relevance,
    source_order: usize,
}

/// Normalize, rank, and truncate one source's candidates.
///
/// Returns the ordered product list plus an error message when it is empty;
/// the message distinguishes "the source returned nothing" from "records
/// existed but none qualified".
#[must_use]
pub fn normalize_and_rank(
    source_label: &str,
    query: &str,
    candidates: Vec<RawCandidate>,
    policy: &RankingPolicy,
) -> (Vec<ProductSearchResult>, Option<String>) {
    if candidates.is_empty() {
        return (
            Vec::new(),
            Some(format!(
                "No products found for \"{query}\" from {source_label}."
            )),
        );
    }

    let id_prefix = source_label.to_lowercase().replace(' ', "-");
    let mut ranked: Vec<RankedCandidate> = Vec::new();

    for (source_order, candidate) in candidates.into_iter().enumerate() {
        let Some(calories) = candidate.nutrition.calories else {
            continue;
        };
        let calories_ok = if policy.allow_zero_calories {
            calories >= 0.0
        } else {
            calories > 0.0
        };
        if !calories_ok {
            continue;
        }

        let display_name = candidate
            .display_name
            .unwrap_or_else(|| UNKNOWN_PRODUCT_LABEL.to_owned());
        let relevance = Relevance::classify(&display_name, query);
        if policy.require_query_in_name && !relevance.is_match() {
            continue;
        }

        let id = candidate
            .id
            .unwrap_or_else(|| format!("{id_prefix}-{source_order}"));
        ranked.push(RankedCandidate {
            product: ProductSearchResult {
                id,
                display_name,
                nutrition_data: candidate.nutrition,
            },
            relevance,
            source_order,
        });
    }

    // Stable sort; equal ranks keep the source's own relevance ordering
    ranked.sort_by_key(|c| (c.relevance.rank(), c.source_order));
    ranked.truncate(policy.max_results);

    let products: Vec<ProductSearchResult> = ranked.into_iter().map(|c| c.product).collect();
    if products.is_empty() {
        let message = format!(
            "No suitable products found for \"{query}\" after processing {source_label} results. \
             Try a broader search term."
        );
        (products, Some(message))
    } else {
        (products, None)
    }
}
