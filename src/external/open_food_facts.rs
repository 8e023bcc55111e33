// ABOUTME: Open Food Facts API adapter, credential-free community food database
// ABOUTME: Maps *_100g nutriment keys (comma decimals, kJ energies) into the canonical shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! Open Food Facts client.
//!
//! The only source that needs no credentials. Nutriments arrive under
//! `*_100g` keys and are occasionally strings with a comma decimal
//! separator; energy may only be present in kilojoules (`energy_100g`).
//! Open Food Facts etiquette asks for a descriptive User-Agent, which the
//! shared client already sends.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Instant;
use tracing::debug;

use crate::external::{elapsed_ms, fetch_json, FoodSearchProvider, SearchFailure};
use crate::models::{NutritionData, SearchFoodResponse};
use crate::search::{
    aggregate_fats, extract_nutrient, extract_value, normalize_and_rank, RankingPolicy,
    RawCandidate, KJ_PER_KCAL, RESULT_CAP,
};

const SOURCE: &str = "Open Food Facts";

/// Open Food Facts client configuration
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClientConfig {
    /// Base URL (default: <https://world.openfoodfacts.org>)
    pub base_url: String,
    /// Upstream page size to request (the ranker caps the final list at 20)
    pub page_size: u32,
    /// Filtering policy: zero-calorie records accepted (water-class
    /// products are legitimate here), name re-filter on
    pub policy: RankingPolicy,
    /// Optional whole-food filter: reject products with more ingredients
    pub max_ingredients: Option<u32>,
    /// Optional whole-food filter: reject products of these brands
    pub excluded_brands: Vec<String>,
}

impl Default for OpenFoodFactsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://world.openfoodfacts.org".to_owned(),
            page_size: 50,
            policy: RankingPolicy {
                allow_zero_calories: true,
                require_query_in_name: true,
                max_results: RESULT_CAP,
            },
            max_ingredients: None,
            excluded_brands: Vec::new(),
        }
    }
}

/// Open Food Facts API client
pub struct OpenFoodFactsClient {
    config: OpenFoodFactsClientConfig,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<OffProduct>,
}

#[derive(Debug, Deserialize)]
struct OffProduct {
    code: Option<String>,
    #[serde(rename = "_id")]
    id: Option<String>,
    product_name: Option<String>,
    brands: Option<String>,
    ingredients_n: Option<Value>,
    nutriments: Option<Map<String, Value>>,
}

impl OpenFoodFactsClient {
    /// Create a new client
    #[must_use]
    pub fn new(config: OpenFoodFactsClientConfig) -> Self {
        Self { config }
    }

    fn search_url(&self, food_name: &str) -> String {
        format!(
            "{}/cgi/search.pl?search_terms={}&search_simple=1&action=process&json=1\
             &page_size={}&fields=code,product_name,brands,ingredients_n,nutriments",
            self.config.base_url,
            urlencoding::encode(food_name),
            self.config.page_size,
        )
    }

    /// Whole-food filters from the adapter config; a rejected product keeps
    /// its source-order slot but is stripped of data so the ranker drops it
    fn passes_whole_food_filters(&self, product: &OffProduct) -> bool {
        if let Some(cap) = self.config.max_ingredients {
            let count = product.ingredients_n.as_ref().and_then(extract_value);
            if count.is_some_and(|n| n > f64::from(cap)) {
                return false;
            }
        }
        if !self.config.excluded_brands.is_empty() {
            if let Some(brands) = &product.brands {
                let brands = brands.to_lowercase();
                if self
                    .config
                    .excluded_brands
                    .iter()
                    .any(|b| brands.contains(&b.to_lowercase()))
                {
                    return false;
                }
            }
        }
        true
    }

    fn map_product(&self, product: OffProduct) -> RawCandidate {
        if !self.passes_whole_food_filters(&product) {
            return RawCandidate::default();
        }
        let nutrition = product
            .nutriments
            .as_ref()
            .map_or_else(NutritionData::default, |n| {
                let fats = aggregate_fats(
                    extract_nutrient(n, "saturated-fat_100g"),
                    extract_nutrient(n, "trans-fat_100g"),
                    extract_nutrient(n, "monounsaturated-fat_100g"),
                    extract_nutrient(n, "polyunsaturated-fat_100g"),
                );
                NutritionData {
                    calories: extract_calories(n),
                    fat: extract_nutrient(n, "fat_100g"),
                    healthy_fats: fats.healthy,
                    unhealthy_fats: fats.unhealthy,
                    carbs: extract_nutrient(n, "carbohydrates_100g"),
                    sugar: extract_nutrient(n, "sugars_100g"),
                    protein: extract_nutrient(n, "proteins_100g"),
                    fiber: extract_nutrient(n, "fiber_100g"),
                    source_name: product.product_name.clone(),
                }
            });
        RawCandidate {
            id: product.code.or(product.id),
            display_name: product.product_name,
            nutrition,
        }
    }

    async fn run_search(&self, food_name: &str) -> Result<SearchFoodResponse, SearchFailure> {
        let url = self.search_url(food_name);
        debug!(query = food_name, %url, "searching Open Food Facts");
        let fetched = fetch_json(SOURCE, &url).await?;

        let parsed: SearchResponse = serde_json::from_value(fetched.value)
            .map_err(|_| SearchFailure::MalformedJson { source_name: SOURCE })?;

        let processing_started = Instant::now();
        let candidates: Vec<RawCandidate> = parsed
            .products
            .into_iter()
            .map(|p| self.map_product(p))
            .collect();
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

/// Calories per 100 g: prefer the kcal field, fall back to the kJ field
fn extract_calories(nutriments: &Map<String, Value>) -> Option<f64> {
    extract_nutrient(nutriments, "energy-kcal_100g")
        .or_else(|| extract_nutrient(nutriments, "energy_100g").map(|kj| kj / KJ_PER_KCAL))
}

#[async_trait]
impl FoodSearchProvider for OpenFoodFactsClient {
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
