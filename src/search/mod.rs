// ABOUTME: Food search normalization pipeline shared by every source adapter
// ABOUTME: Nutrient extraction, fat aggregation, relevance classification, ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! Food search pipeline.
//!
//! Raw per-source records flow through these stages:
//!
//! 1. [`nutrient`] pulls finite numeric values out of heterogeneous raw
//!    encodings, reconciling units (kJ → kcal).
//! 2. [`fats`] derives the healthy/unhealthy fat aggregates.
//! 3. [`relevance`] ranks each candidate name against the query.
//! 4. [`ranker`] filters, sorts, truncates, and produces the uniform
//!    product list.
//!
//! Everything here is pure and allocation-light; the network boundary lives
//! in [`crate::external`].

/// Derived fat aggregates
pub mod fats;
/// Nutrient value extraction and unit reconciliation
pub mod nutrient;
/// Relevance classification of candidate names
pub mod relevance;
/// Result normalization, ordering, and truncation
pub mod ranker;

pub use fats::{aggregate as aggregate_fats, FatAggregates};
pub use nutrient::{extract_nutrient, extract_value, KJ_PER_KCAL};
pub use ranker::{normalize_and_rank, RankingPolicy, RawCandidate, RESULT_CAP};
pub use relevance::Relevance;
