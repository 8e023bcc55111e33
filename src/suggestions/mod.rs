// ABOUTME: AI-backed meal and grocery suggestion service over a pluggable model seam
// ABOUTME: Request/response contracts plus prompt assembly and lenient response decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! Suggestion flows.
//!
//! Three generative flows share one seam: meal suggestions for a time of
//! day, a meal built from on-hand ingredients, and a grocery list derived
//! from recent eating habits. The [`GenerativeModel`] trait hides the
//! actual model; the service assembles the request payload, asks the model
//! for JSON, and decodes it leniently. A model failure or an undecodable
//! reply degrades to an empty suggestion list rather than an error, since
//! suggestions are advisory.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::errors::AppResult;
use crate::models::MealType;

/// Most recent logged items forwarded to the grocery flow
pub const GROCERY_HISTORY_CAP: usize = 50;

/// Request for time-of-day meal suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestionRequest {
    /// Upper bound on calories per suggested meal
    pub calorie_limit: f64,
    /// Free-text dietary preferences ("vegetarian, low sodium")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_preferences: Option<String>,
    /// Foods the user wants to avoid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_foods: Option<String>,
    /// Which meal the suggestions are for
    pub time_of_day: MealType,
}

/// One suggested meal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestion {
    /// Meal name
    pub name: String,
    /// Short description
    pub description: String,
    /// Estimated calories, kept as text ("approx. 450 kcal")
    pub calories: String,
    /// Main ingredients, when the model provides them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
}

/// Meal suggestion reply envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestionsResponse {
    /// Suggested meals, possibly empty
    #[serde(default)]
    pub meal_suggestions: Vec<MealSuggestion>,
}

/// Request for a meal built from ingredients already on hand
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientMealRequest {
    /// Ingredients available to cook with
    pub ingredients: Vec<String>,
    /// Which meal this is for, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    /// Free-text dietary preferences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_preferences: Option<String>,
}

/// A meal assembled from the user's ingredients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedMeal {
    /// Meal name
    pub name: String,
    /// Preparation description
    pub description: String,
    /// Estimated calories, kept as text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
    /// Which of the provided ingredients the meal uses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients_used: Option<Vec<String>>,
}

/// Request for a grocery list informed by recent logged foods
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryListRequest {
    /// Names of recently logged foods, most recent first
    pub logged_food_items: Vec<String>,
    /// Free-text steering ("more vegetables, no dairy")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_preferences: Option<String>,
}

/// One category of a grocery list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryCategory {
    /// Category label ("Produce", "Pantry")
    pub category: String,
    /// Items to buy in this category
    pub items: Vec<String>,
}

/// Grocery list reply envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryListResponse {
    /// Categorized grocery list, possibly empty
    #[serde(default)]
    pub grocery_list: Vec<GroceryCategory>,
}

/// Seam between the suggestion flows and whatever generative model backs
/// them. The model receives a JSON request payload and must reply with the
/// JSON the flow expects.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Run one completion.
    ///
    /// # Errors
    /// Returns an error when the model is unreachable or refuses the
    /// request; callers degrade to an empty suggestion set.
    async fn complete(&self, request: Value) -> AppResult<Value>;
}

/// Suggestion flows over a generative model
pub struct SuggestionService<M> {
    model: M,
}

impl<M: GenerativeModel> SuggestionService<M> {
    /// Create a service backed by the given model
    #[must_use]
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Suggest meals for a time of day within a calorie limit
    pub async fn suggest_meals(&self, request: &MealSuggestionRequest) -> MealSuggestionsResponse {
        let payload = json!({
            "task": "suggest_meals",
            "input": request,
        });
        self.run_flow("suggest_meals", payload).await
    }

    /// Suggest a meal the user can cook from ingredients on hand
    pub async fn suggest_meal_from_ingredients(
        &self,
        request: &IngredientMealRequest,
    ) -> Option<SuggestedMeal> {
        let payload = json!({
            "task": "suggest_meal_from_ingredients",
            "input": request,
        });
        let reply: Option<SuggestedMeal> =
            self.run_flow_optional("suggest_meal_from_ingredients", payload).await;
        reply
    }

    /// Suggest a categorized grocery list from recent logged foods
    pub async fn suggest_grocery_list(
        &self,
        request: &GroceryListRequest,
    ) -> GroceryListResponse {
        // Only the most recent items matter; keep the prompt bounded.
        let mut trimmed = request.clone();
        trimmed.logged_food_items.truncate(GROCERY_HISTORY_CAP);
        let payload = json!({
            "task": "suggest_grocery_list",
            "input": trimmed,
        });
        self.run_flow("suggest_grocery_list", payload).await
    }

    async fn run_flow<T: Default + for<'de> Deserialize<'de>>(
        &self,
        flow: &'static str,
        payload: Value,
    ) -> T {
        match self.model.complete(payload).await {
            Ok(reply) => serde_json::from_value(reply).unwrap_or_else(|err| {
                warn!(flow, error = %err, "model reply did not decode; returning empty suggestions");
                T::default()
            }),
            Err(err) => {
                warn!(flow, error = %err, "model call failed; returning empty suggestions");
                T::default()
            }
        }
    }

    async fn run_flow_optional<T: for<'de> Deserialize<'de>>(
        &self,
        flow: &'static str,
        payload: Value,
    ) -> Option<T> {
        match self.model.complete(payload).await {
            Ok(reply) => match serde_json::from_value(reply) {
                Ok(decoded) => Some(decoded),
                Err(err) => {
                    warn!(flow, error = %err, "model reply did not decode; no suggestion");
                    None
                }
            },
            Err(err) => {
                warn!(flow, error = %err, "model call failed; no suggestion");
                None
            }
        }
    }
}
