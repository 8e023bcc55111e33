// ABOUTME: Integration tests for the Open Food Facts adapter against a mock HTTP server
// ABOUTME: Covers comma decimals, kJ conversion, zero-calorie acceptance, whole-food filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

use mockito::Matcher;
use serde_json::json;

use nutrition_companion::external::{
    FoodSearchProvider, OpenFoodFactsClient, OpenFoodFactsClientConfig,
};

fn client_for(server: &mockito::ServerGuard) -> OpenFoodFactsClient {
    OpenFoodFactsClient::new(OpenFoodFactsClientConfig {
        base_url: server.url(),
        ..OpenFoodFactsClientConfig::default()
    })
}

#[tokio::test]
async fn comma_decimals_and_kilojoules_normalize_to_the_canonical_profile() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/cgi/search.pl")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "products": [
                    {
                        "code": "111",
                        "product_name": "Apple compote",
                        "nutriments": {
                            "energy-kcal_100g": "81,5",
                            "sugars_100g": "18,2",
                            "fiber_100g": 1.3
                        }
                    },
                    {
                        "code": "222",
                        "product_name": "Apple juice",
                        // Only kilojoules present: 188 kJ / 4.184 ≈ 44.9 kcal
                        "nutriments": { "energy_100g": 188.0 }
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = client_for(&server).search_products("apple").await;
    mock.assert_async().await;

    assert!(response.error.is_none());
    assert_eq!(response.products.len(), 2);

    let compote = &response.products[0].nutrition_data;
    assert_eq!(compote.calories, Some(81.5));
    assert_eq!(compote.sugar, Some(18.2));

    let juice = &response.products[1].nutrition_data;
    let calories = juice.calories.unwrap();
    assert!((calories - 188.0 / 4.184).abs() < 1e-9);
}

#[tokio::test]
async fn zero_calorie_products_are_kept() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/cgi/search.pl")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({
                "products": [
                    {
                        "code": "333",
                        "product_name": "Sparkling water",
                        "nutriments": { "energy-kcal_100g": 0.0 }
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = client_for(&server).search_products("water").await;
    assert!(response.error.is_none());
    assert_eq!(response.products.len(), 1);
    assert_eq!(response.products[0].nutrition_data.calories, Some(0.0));
}

#[tokio::test]
async fn whole_food_filters_drop_processed_and_excluded_products() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/cgi/search.pl")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({
                "products": [
                    {
                        "code": "1",
                        "product_name": "Apple",
                        "ingredients_n": 1,
                        "nutriments": { "energy-kcal_100g": 52.0 }
                    },
                    {
                        "code": "2",
                        "product_name": "Apple snack bar",
                        "ingredients_n": 14,
                        "nutriments": { "energy-kcal_100g": 410.0 }
                    },
                    {
                        "code": "3",
                        "product_name": "Apple soda",
                        "brands": "MegaCorp",
                        "ingredients_n": 2,
                        "nutriments": { "energy-kcal_100g": 42.0 }
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = OpenFoodFactsClient::new(OpenFoodFactsClientConfig {
        base_url: server.url(),
        max_ingredients: Some(5),
        excluded_brands: vec!["megacorp".into()],
        ..OpenFoodFactsClientConfig::default()
    });
    let response = client.search_products("apple").await;

    assert_eq!(response.products.len(), 1);
    assert_eq!(response.products[0].display_name, "Apple");
    assert_eq!(response.products[0].id, "1");
}

#[tokio::test]
async fn products_without_a_code_get_a_deterministic_placeholder_id() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/cgi/search.pl")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({
                "products": [
                    {
                        "product_name": "Apple",
                        "nutriments": { "energy-kcal_100g": 52.0 }
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = client_for(&server).search_products("apple").await;
    assert_eq!(response.products[0].id, "open-food-facts-0");
}

#[tokio::test]
async fn server_error_surfaces_in_the_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/cgi/search.pl")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let response = client_for(&server).search_products("apple").await;
    assert!(response.products.is_empty());
    let message = response.error.unwrap();
    assert!(message.contains("Open Food Facts API Error"));
    assert!(message.contains("503"));
}
