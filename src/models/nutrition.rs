// ABOUTME: Canonical nutrition data models shared by all food database sources
// ABOUTME: NutritionData per-100g snapshot, ProductSearchResult, SearchFoodResponse wire shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

use serde::{Deserialize, Serialize};

/// Canonical per-100 g nutrient snapshot.
///
/// Every source adapter maps its raw payload into this shape. A `None`
/// field means the source did not report that nutrient (or reported an
/// unparsable value); it is serialized as an explicit `null` so the caller
/// can distinguish "unknown" from zero. Present values are always finite —
/// NaN and infinity are rejected during extraction and never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionData {
    /// Calories (kcal) per 100 g
    pub calories: Option<f64>,
    /// Total fat (g) per 100 g
    pub fat: Option<f64>,
    /// Monounsaturated plus polyunsaturated fats (g) per 100 g
    pub healthy_fats: Option<f64>,
    /// Saturated plus trans fats (g) per 100 g
    pub unhealthy_fats: Option<f64>,
    /// Carbohydrates (g) per 100 g
    pub carbs: Option<f64>,
    /// Sugars (g) per 100 g
    pub sugar: Option<f64>,
    /// Protein (g) per 100 g
    pub protein: Option<f64>,
    /// Fiber (g) per 100 g
    pub fiber: Option<f64>,
    /// Name of the food item as identified by the API source
    pub source_name: Option<String>,
}

/// One food product in a search response, in the uniform public shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchResult {
    /// Stable identifier from the source, or a generated placeholder
    pub id: String,
    /// Best available human-readable label
    pub display_name: String,
    /// Canonical per-100 g nutrition snapshot
    pub nutrition_data: NutritionData,
}

/// Result of one food product search.
///
/// `error` is present iff `products` is empty (or a partial failure
/// occurred); the message distinguishes "the source returned nothing" from
/// "the source returned records but none qualified". The duration fields
/// are observability-only diagnostics and not part of the functional
/// contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFoodResponse {
    /// Matching products ordered by relevance, at most 20 entries
    pub products: Vec<ProductSearchResult>,
    /// Human-readable failure or empty-result description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Time spent on the outbound HTTP fetch, in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_fetch_duration_ms: Option<u64>,
    /// Time spent parsing the response body as JSON, in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_parse_duration_ms: Option<u64>,
    /// Time spent filtering, mapping, and sorting, in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_duration_ms: Option<u64>,
}

impl SearchFoodResponse {
    /// Build an empty response carrying only an error message
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            products: Vec::new(),
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_nutrients_serialize_as_null() {
        let product = ProductSearchResult {
            id: "test-0".into(),
            display_name: "Apple".into(),
            nutrition_data: NutritionData {
                calories: Some(52.0),
                source_name: Some("Apple".into()),
                ..NutritionData::default()
            },
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["nutritionData"]["calories"], 52.0);
        assert!(json["nutritionData"]["fat"].is_null());
        assert!(json["nutritionData"]["healthyFats"].is_null());
        assert_eq!(json["displayName"], "Apple");
    }

    #[test]
    fn diagnostics_are_skipped_when_absent() {
        let response = SearchFoodResponse::failed("nothing found");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "nothing found");
        assert!(json.get("apiFetchDurationMs").is_none());
        assert!(json.get("processingDurationMs").is_none());
    }
}
