// ABOUTME: USDA FoodData Central API adapter
// ABOUTME: Maps numbered foodNutrients from the search endpoint into the canonical shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! USDA `FoodData` Central client.
//!
//! The API is free but requires an API key
//! (<https://fdc.nal.usda.gov/api-key-signup.html>). Search results carry
//! nutrients identified by USDA nutrient numbers; the mapping below covers
//! the canonical per-100 g profile. Catalog descriptions are comma-inverted
//! ("Apples, raw, with skin"), so this adapter skips the defensive
//! name re-filter and lets non-containing rows sort last at the fallback
//! rank instead.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

use crate::config::is_placeholder;
use crate::external::{elapsed_ms, fetch_json, FoodSearchProvider, SearchFailure};
use crate::models::{NutritionData, SearchFoodResponse};
use crate::search::nutrient::{extract_value, is_kilojoule_unit, KJ_PER_KCAL};
use crate::search::{aggregate_fats, normalize_and_rank, RankingPolicy, RawCandidate, RESULT_CAP};

const SOURCE: &str = "USDA FoodData Central";

/// USDA nutrient numbers used for the canonical profile
mod nutrient_id {
    pub const ENERGY_KCAL: u32 = 1008;
    pub const ENERGY_KJ: u32 = 1062;
    pub const PROTEIN: u32 = 1003;
    pub const FAT: u32 = 1004;
    pub const CARBS: u32 = 1005;
    pub const SUGAR: u32 = 2000;
    pub const FIBER: u32 = 1079;
    pub const FAT_SATURATED: u32 = 1258;
    pub const FAT_TRANS: u32 = 1257;
    pub const FAT_MONO: u32 = 1292;
    pub const FAT_POLY: u32 = 1293;
}

/// USDA API client configuration
#[derive(Debug, Clone)]
pub struct UsdaClientConfig {
    /// USDA API key
    pub api_key: String,
    /// Base URL (default: <https://api.nal.usda.gov/fdc/v1>)
    pub base_url: String,
    /// Upstream page size to request (the ranker caps the final list at 20)
    pub page_size: u32,
    /// Filtering policy: zero-calorie records rejected, name re-filter off
    pub policy: RankingPolicy,
}

impl Default for UsdaClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.nal.usda.gov/fdc/v1".to_owned(),
            page_size: 50,
            policy: RankingPolicy {
                allow_zero_calories: false,
                require_query_in_name: false,
                max_results: RESULT_CAP,
            },
        }
    }
}

/// USDA `FoodData` Central API client
pub struct UsdaClient {
    config: UsdaClientConfig,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<UsdaFood>,
}

#[derive(Debug, Deserialize)]
struct UsdaFood {
    #[serde(rename = "fdcId")]
    fdc_id: Option<u64>,
    description: Option<String>,
    #[serde(rename = "foodNutrients", default)]
    food_nutrients: Vec<UsdaFoodNutrient>,
}

#[derive(Debug, Deserialize)]
struct UsdaFoodNutrient {
    #[serde(rename = "nutrientId")]
    nutrient_id: Option<u32>,
    #[serde(rename = "unitName")]
    unit_name: Option<String>,
    value: Option<Value>,
}

impl UsdaClient {
    /// Create a new client with an explicit API key
    #[must_use]
    pub fn new(config: UsdaClientConfig) -> Self {
        Self { config }
    }

    fn check_credentials(&self) -> Result<(), SearchFailure> {
        if is_placeholder(&self.config.api_key) {
            return Err(SearchFailure::MissingCredentials(
                "Server configuration error: USDA API key missing. \
                 Please contact support."
                    .to_owned(),
            ));
        }
        Ok(())
    }

    fn search_url(&self, food_name: &str) -> String {
        format!(
            "{}/foods/search?query={}&pageSize={}&api_key={}",
            self.config.base_url,
            urlencoding::encode(food_name),
            self.config.page_size,
            urlencoding::encode(&self.config.api_key),
        )
    }

    async fn run_search(&self, food_name: &str) -> Result<SearchFoodResponse, SearchFailure> {
        self.check_credentials()?;

        let url = self.search_url(food_name);
        debug!(
            query = food_name,
            url = %url.replace(&self.config.api_key, "API_KEY_REDACTED"),
            "searching USDA FoodData Central"
        );
        let fetched = fetch_json(SOURCE, &url).await?;

        let parsed: SearchResponse = serde_json::from_value(fetched.value)
            .map_err(|_| SearchFailure::MalformedJson { source_name: SOURCE })?;

        let processing_started = Instant::now();
        let candidates: Vec<RawCandidate> = parsed.foods.into_iter().map(map_food).collect();
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

/// Find the first nutrient with the given USDA number and extract its
/// finite value, converting kilojoule units to kilocalories
fn nutrient_by_id(nutrients: &[UsdaFoodNutrient], id: u32) -> Option<f64> {
    nutrients
        .iter()
        .find(|n| n.nutrient_id == Some(id))
        .and_then(|n| {
            let value = n.value.as_ref().and_then(extract_value)?;
            let in_kilojoules = n.unit_name.as_deref().is_some_and(is_kilojoule_unit);
            if in_kilojoules {
                Some(value / KJ_PER_KCAL)
            } else {
                Some(value)
            }
        })
}

fn map_food(food: UsdaFood) -> RawCandidate {
    let nutrients = &food.food_nutrients;
    let fats = aggregate_fats(
        nutrient_by_id(nutrients, nutrient_id::FAT_SATURATED),
        nutrient_by_id(nutrients, nutrient_id::FAT_TRANS),
        nutrient_by_id(nutrients, nutrient_id::FAT_MONO),
        nutrient_by_id(nutrients, nutrient_id::FAT_POLY),
    );
    let nutrition = NutritionData {
        calories: nutrient_by_id(nutrients, nutrient_id::ENERGY_KCAL)
            .or_else(|| nutrient_by_id(nutrients, nutrient_id::ENERGY_KJ)),
        fat: nutrient_by_id(nutrients, nutrient_id::FAT),
        healthy_fats: fats.healthy,
        unhealthy_fats: fats.unhealthy,
        carbs: nutrient_by_id(nutrients, nutrient_id::CARBS),
        sugar: nutrient_by_id(nutrients, nutrient_id::SUGAR),
        protein: nutrient_by_id(nutrients, nutrient_id::PROTEIN),
        fiber: nutrient_by_id(nutrients, nutrient_id::FIBER),
        source_name: food.description.clone(),
    };
    RawCandidate {
        id: food.fdc_id.map(|id| id.to_string()),
        display_name: food.description,
        nutrition,
    }
}

#[async_trait]
impl FoodSearchProvider for UsdaClient {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn food(value: serde_json::Value) -> UsdaFood {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn nutrient_numbers_map_into_the_profile() {
        let candidate = map_food(food(json!({
            "fdcId": 171_688,
            "description": "Apples, raw, with skin",
            "foodNutrients": [
                { "nutrientId": 1008, "unitName": "KCAL", "value": 52.0 },
                { "nutrientId": 1003, "unitName": "G", "value": 0.26 },
                { "nutrientId": 1004, "unitName": "G", "value": 0.17 },
                { "nutrientId": 1005, "unitName": "G", "value": 13.81 },
                { "nutrientId": 1079, "unitName": "G", "value": 2.4 },
                { "nutrientId": 1258, "unitName": "G", "value": 0.028 }
            ]
        })));
        assert_eq!(candidate.id.as_deref(), Some("171688"));
        assert_eq!(candidate.nutrition.calories, Some(52.0));
        assert_eq!(candidate.nutrition.protein, Some(0.26));
        assert_eq!(candidate.nutrition.unhealthy_fats, Some(0.028));
        assert_eq!(candidate.nutrition.healthy_fats, None);
    }

    #[test]
    fn kilojoule_energy_converts() {
        let candidate = map_food(food(json!({
            "fdcId": 1,
            "description": "Test food",
            "foodNutrients": [
                { "nutrientId": 1062, "unitName": "kJ", "value": 418.4 }
            ]
        })));
        let calories = candidate.nutrition.calories.unwrap();
        assert!((calories - 100.0).abs() < 1e-9);
    }

    #[test]
    fn search_url_includes_key_and_page_size() {
        let client = UsdaClient::new(UsdaClientConfig {
            api_key: "DEMO_KEY".into(),
            ..UsdaClientConfig::default()
        });
        let url = client.search_url("chicken breast");
        assert!(url.contains("query=chicken%20breast"));
        assert!(url.contains("pageSize=50"));
        assert!(url.contains("api_key=DEMO_KEY"));
    }
}
