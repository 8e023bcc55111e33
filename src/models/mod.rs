// ABOUTME: Core data models for nutrition search and intake tracking
// ABOUTME: Re-exports the canonical nutrition wire shapes and the tracking types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! Core data models.

/// Canonical nutrition snapshot and search response shapes
pub mod nutrition;
/// Intake, weight, and measurement tracking types
pub mod tracking;

pub use nutrition::{NutritionData, ProductSearchResult, SearchFoodResponse};
pub use tracking::{
    BodyMeasurementLog, ChecklistItem, DailyChecklist, DailyLog, LoggedEntry, MealType,
    MealSuggestionPreferences, UserSettings, WeightLog,
};
