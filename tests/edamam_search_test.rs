// ABOUTME: Integration tests for the Edamam adapter against a mock HTTP server
// ABOUTME: Covers success mapping, ranking order, error taxonomy, and credential checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

use mockito::Matcher;
use serde_json::json;

use nutrition_companion::external::{EdamamClient, EdamamClientConfig, FoodSearchProvider};

fn client_for(server: &mockito::ServerGuard) -> EdamamClient {
    EdamamClient::new(EdamamClientConfig {
        app_id: "test_app_id".into(),
        app_key: "test_app_key".into(),
        base_url: server.url(),
        ..EdamamClientConfig::default()
    })
}

fn hint(label: &str, kcal: f64) -> serde_json::Value {
    json!({
        "food": {
            "foodId": format!("food_{}", label.to_lowercase().replace(' ', "_")),
            "label": label,
            "nutrients": {
                "ENERC_KCAL": kcal,
                "PROCNT": 0.3,
                "FAT": 0.2,
                "CHOCDF": 14.0,
                "FIBTG": 2.4
            }
        }
    })
}

#[tokio::test]
async fn search_maps_and_ranks_parser_hints() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/food-database/v2/parser")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "hints": [
                    hint("Green Apple", 58.0),
                    hint("Apple Juice", 46.0),
                    hint("Apple", 52.0),
                    hint("Pineapple", 50.0)
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = client_for(&server).search_products("apple").await;
    mock.assert_async().await;

    assert!(response.error.is_none());
    let names: Vec<&str> = response
        .products
        .iter()
        .map(|p| p.display_name.as_str())
        .collect();
    // Exact match first, then prefix, then substring matches in source order
    assert_eq!(names, ["Apple", "Apple Juice", "Green Apple", "Pineapple"]);
    assert_eq!(response.products[0].id, "food_apple");
    assert_eq!(response.products[0].nutrition_data.calories, Some(52.0));
    assert!(response.api_fetch_duration_ms.is_some());
    assert!(response.processing_duration_ms.is_some());
}

#[tokio::test]
async fn zero_calorie_hints_are_filtered_out() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/food-database/v2/parser")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({ "hints": [hint("Apple Water", 0.0)] }).to_string())
        .create_async()
        .await;

    let response = client_for(&server).search_products("apple").await;
    assert!(response.products.is_empty());
    let message = response.error.unwrap();
    assert!(message.contains("No suitable products found"));
    assert!(message.contains("Edamam"));
}

#[tokio::test]
async fn upstream_error_status_is_reported_with_the_status_code() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/food-database/v2/parser")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("{\"message\":\"invalid credentials\"}")
        .create_async()
        .await;

    let response = client_for(&server).search_products("apple").await;
    assert!(response.products.is_empty());
    let message = response.error.unwrap();
    assert!(message.contains("Edamam API Error"));
    assert!(message.contains("401"));
    assert!(message.contains("invalid credentials"));
}

#[tokio::test]
async fn malformed_json_body_is_reported_as_a_parse_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/food-database/v2/parser")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let response = client_for(&server).search_products("apple").await;
    let message = response.error.unwrap();
    assert!(message.contains("Failed to parse Edamam API response as JSON."));
}

#[tokio::test]
async fn missing_credentials_skip_the_network_entirely() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/food-database/v2/parser")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = EdamamClient::new(EdamamClientConfig {
        app_id: "YOUR_APP_ID".into(),
        app_key: String::new(),
        base_url: server.url(),
        ..EdamamClientConfig::default()
    });
    let response = client.search_products("apple").await;
    mock.assert_async().await;

    assert!(response.products.is_empty());
    let message = response.error.unwrap();
    assert!(message.contains("Server configuration error"));
    assert!(message.contains("Edamam API credentials missing"));
}

#[tokio::test]
async fn blank_query_is_rejected_before_any_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/food-database/v2/parser")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let response = client_for(&server).search_products("   ").await;
    mock.assert_async().await;
    assert_eq!(response.error.as_deref(), Some("Search query must not be empty."));
}

#[tokio::test]
async fn empty_hint_list_reports_no_products_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/food-database/v2/parser")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({ "hints": [] }).to_string())
        .create_async()
        .await;

    let response = client_for(&server).search_products("xyzzy").await;
    assert_eq!(
        response.error.as_deref(),
        Some("No products found for \"xyzzy\" from Edamam.")
    );
}
