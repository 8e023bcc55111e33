// ABOUTME: Edamam Food Database API adapter
// ABOUTME: Parser-endpoint search with per-100g logging nutrients mapped into the canonical shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! Edamam Food Database client.
//!
//! Uses the parser endpoint with `nutrition-type=logging`, which reports
//! nutrients per 100 g. Requires an application id and key; see
//! <https://developer.edamam.com/food-database-api>.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Instant;
use tracing::debug;

use crate::config::is_placeholder;
use crate::external::{elapsed_ms, fetch_json, FoodSearchProvider, SearchFailure};
use crate::models::{NutritionData, SearchFoodResponse};
use crate::search::{aggregate_fats, extract_nutrient, normalize_and_rank, RankingPolicy, RawCandidate};

const SOURCE: &str = "Edamam";

/// Edamam client configuration
#[derive(Debug, Clone)]
pub struct EdamamClientConfig {
    /// Edamam application id
    pub app_id: String,
    /// Edamam application key
    pub app_key: String,
    /// Base URL (default: <https://api.edamam.com>)
    pub base_url: String,
    /// Filtering policy: zero-calorie records rejected, name re-filter on
    pub policy: RankingPolicy,
}

impl Default for EdamamClientConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_key: String::new(),
            base_url: "https://api.edamam.com".to_owned(),
            policy: RankingPolicy::default(),
        }
    }
}

/// Edamam Food Database API client
pub struct EdamamClient {
    config: EdamamClientConfig,
}

#[derive(Debug, Deserialize)]
struct ParserResponse {
    #[serde(default)]
    hints: Vec<Hint>,
}

#[derive(Debug, Deserialize)]
struct Hint {
    food: Option<EdamamFood>,
}

#[derive(Debug, Deserialize)]
struct EdamamFood {
    #[serde(rename = "foodId")]
    food_id: Option<String>,
    label: Option<String>,
    nutrients: Option<Map<String, Value>>,
}

impl EdamamClient {
    /// Create a new client with explicit credentials
    #[must_use]
    pub fn new(config: EdamamClientConfig) -> Self {
        Self { config }
    }

    fn check_credentials(&self) -> Result<(), SearchFailure> {
        if is_placeholder(&self.config.app_id) || is_placeholder(&self.config.app_key) {
            return Err(SearchFailure::MissingCredentials(
                "Server configuration error: Edamam API credentials missing. \
                 Please contact support."
                    .to_owned(),
            ));
        }
        Ok(())
    }

    fn search_url(&self, food_name: &str) -> String {
        format!(
            "{}/api/food-database/v2/parser?app_id={}&app_key={}&ingr={}\
             &nutrition-type=logging&category=generic-foods&category=packaged-foods",
            self.config.base_url,
            urlencoding::encode(&self.config.app_id),
            urlencoding::encode(&self.config.app_key),
            urlencoding::encode(food_name),
        )
    }

    async fn run_search(&self, food_name: &str) -> Result<SearchFoodResponse, SearchFailure> {
        self.check_credentials()?;

        let url = self.search_url(food_name);
        debug!(
            query = food_name,
            url = %url.replace(&self.config.app_key, "APP_KEY_REDACTED"),
            "searching Edamam food database"
        );
        let fetched = fetch_json(SOURCE, &url).await?;

        let parsed: ParserResponse = serde_json::from_value(fetched.value)
            .map_err(|_| SearchFailure::MalformedJson { source_name: SOURCE })?;

        let processing_started = Instant::now();
        let candidates: Vec<RawCandidate> = parsed.hints.into_iter().map(map_hint).collect();
        let (products, error) =
            normalize_and_rank(SOURCE, food_name, candidates, &self.config.policy);
        let processing_ms = elapsed_ms(processing_started);

        Ok(SearchFoodResponse {
            products,
            error,
            api_fetch_duration_ms: Some(fetched.fetch_ms),
            json_parse_duration_ms: Some(fetched.parse_ms),
            processing_duration_ms: Some(processing_ms),
        })
    }
}

/// Map one raw hint into a ranking candidate, degrading missing pieces to
/// absent fields rather than dropping the slot (source order is preserved)
fn map_hint(hint: Hint) -> RawCandidate {
    let Some(food) = hint.food else {
        return RawCandidate::default();
    };
    let nutrition = food.nutrients.as_ref().map_or_else(NutritionData::default, |n| {
        let fats = aggregate_fats(
            extract_nutrient(n, "FASAT"),
            extract_nutrient(n, "FATRN"),
            extract_nutrient(n, "FAMS"),
            extract_nutrient(n, "FAPU"),
        );
        NutritionData {
            calories: extract_nutrient(n, "ENERC_KCAL"),
            fat: extract_nutrient(n, "FAT"),
            healthy_fats: fats.healthy,
            unhealthy_fats: fats.unhealthy,
            carbs: extract_nutrient(n, "CHOCDF"),
            sugar: extract_nutrient(n, "SUGAR"),
            protein: extract_nutrient(n, "PROCNT"),
            fiber: extract_nutrient(n, "FIBTG"),
            source_name: food.label.clone(),
        }
    });
    RawCandidate {
        id: food.food_id,
        display_name: food.label,
        nutrition,
    }
}

#[async_trait]
impl FoodSearchProvider for EdamamClient {
    fn source_name(&self) -> &'static str {
        SOURCE
    }

    async fn search_products(&self, food_name: &str) -> SearchFoodResponse {
        if food_name.trim().is_empty() {
            return SearchFoodResponse::failed("Search query must not be empty.");
        }
        match self.run_search(food_name).await {
            Ok(response) => response,
            Err(failure) => failure.into_response(),
        }
    }
}
