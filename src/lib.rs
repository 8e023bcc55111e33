// ABOUTME: Nutrition companion core — food search, nutrient normalization, tracking models
// ABOUTME: Library root wiring config, models, search pipeline, source adapters, suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! # Nutrition Companion Core
//!
//! Food search and nutrition tracking for a personal health companion.
//! Free-text food searches run against one of three external databases
//! (Edamam, Open Food Facts, USDA FoodData Central) and come back as a
//! uniform list of per-100 g nutrition profiles, relevance-ranked and
//! capped. Supporting modules cover intake tracking models, calendar
//! helpers, and AI-backed meal and grocery suggestions.
//!
//! ## Quick start
//!
//! ```no_run
//! use nutrition_companion::config::FoodApiConfig;
//! use nutrition_companion::external::FoodSearchProvider;
//!
//! # async fn run() {
//! let config = FoodApiConfig::from_env();
//! let client = config.open_food_facts_client();
//! let response = client.search_products("apple").await;
//! for product in &response.products {
//!     println!("{}", product.display_name);
//! }
//! # }
//! ```

#![deny(unsafe_code)]

/// Environment-driven configuration for food database credentials
pub mod config;
/// Calendar date helpers for day-keyed logs
pub mod dates;
/// Unified error handling
pub mod errors;
/// External food database clients
pub mod external;
/// Core data models
pub mod models;
/// Nutrient extraction, fat aggregation, relevance ranking
pub mod search;
/// AI-backed meal and grocery suggestions
pub mod suggestions;

pub use errors::{AppError, AppResult, ErrorCode};
pub use external::{CachedProvider, FoodSearchProvider};
pub use models::{NutritionData, ProductSearchResult, SearchFoodResponse};
