// ABOUTME: Food database source adapters and the shared HTTP boundary
// ABOUTME: FoodSearchProvider trait, SearchFailure taxonomy, shared reqwest client, fetch helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! External food database clients.
//!
//! Three mutually exclusive source adapters implement [`FoodSearchProvider`]:
//! Edamam, Open Food Facts, and USDA FoodData Central. Each performs exactly
//! one outbound GET per search, no retries, and captures every expected
//! failure mode as a [`SearchFailure`] that is converted into a plain
//! [`SearchFoodResponse`] at the boundary — callers never need exception
//! handling for expected failures.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::SearchFoodResponse;

/// Session-scoped query cache wrapper
pub mod cache;
/// Edamam Food Database adapter
pub mod edamam;
/// Open Food Facts adapter
pub mod open_food_facts;
/// USDA FoodData Central adapter
pub mod usda;

pub use cache::CachedProvider;
pub use edamam::{EdamamClient, EdamamClientConfig};
pub use open_food_facts::{OpenFoodFactsClient, OpenFoodFactsClientConfig};
pub use usda::{UsdaClient, UsdaClientConfig};

/// Descriptive client identifier sent with every outbound request
pub const USER_AGENT: &str = "nutrition-companion/0.1 (personal nutrition tracker)";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Longest response-body excerpt included in an HTTP error message
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Process-wide shared HTTP client with connection pooling
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Configure the shared HTTP client timeouts.
///
/// Call once at startup before the first search. When not called, defaults
/// apply (30s request, 10s connect).
pub fn initialize_http_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let _ = CLIENT_TIMEOUTS.set((timeout_secs, connect_timeout_secs));
}

/// Shared HTTP client used by all source adapters
pub(crate) fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS));

        ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// A food database source that can answer free-text product searches.
///
/// Implementations never return `Err` for expected failures; all failure
/// modes surface inside the [`SearchFoodResponse`].
#[async_trait]
pub trait FoodSearchProvider: Send + Sync {
    /// Display label of the source, used in messages and placeholder ids
    fn source_name(&self) -> &'static str;

    /// Search for food products matching a free-text name
    async fn search_products(&self, food_name: &str) -> SearchFoodResponse;
}

/// Expected failure modes at the source adapter boundary
#[derive(Debug, Error)]
pub enum SearchFailure {
    /// Required API credentials are missing or placeholders; no network
    /// call was attempted
    #[error("{0}")]
    MissingCredentials(String),
    /// The source answered with a non-2xx status
    #[error("{source_name} API Error: {status}. {body}")]
    Http {
        /// Source display label
        source_name: &'static str,
        /// HTTP status returned by the source
        status: StatusCode,
        /// Truncated response body excerpt
        body: String,
    },
    /// The request never produced an HTTP response
    #[error(
        "{source_name} request failed: {detail}. This may be caused by running in a \
         sandboxed or offline environment without network access."
    )]
    Network {
        /// Source display label
        source_name: &'static str,
        /// Underlying transport error description
        detail: String,
    },
    /// The response body was not valid JSON
    #[error("Failed to parse {source_name} API response as JSON.")]
    MalformedJson {
        /// Source display label
        source_name: &'static str,
    },
}

impl SearchFailure {
    /// Convert into the non-throwing response shape
    #[must_use]
    pub fn into_response(self) -> SearchFoodResponse {
        SearchFoodResponse::failed(self.to_string())
    }
}

/// Raw JSON fetched from a source, with timing diagnostics
pub(crate) struct FetchedJson {
    /// Parsed response body
    pub value: Value,
    /// Milliseconds spent on the HTTP round trip
    pub fetch_ms: u64,
    /// Milliseconds spent parsing the body as JSON
    pub parse_ms: u64,
}

/// Perform a single GET and parse the body as JSON.
///
/// One request, no retry. Maps transport failures, non-2xx statuses (with a
/// truncated body excerpt), and malformed JSON into [`SearchFailure`].
pub(crate) async fn fetch_json(source: &'static str, url: &str) -> Result<FetchedJson, SearchFailure> {
    let fetch_started = Instant::now();
    let response = shared_client()
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| SearchFailure::Network {
            source_name: source,
            detail: e.to_string(),
        })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| SearchFailure::Network {
        source_name: source,
        detail: e.to_string(),
    })?;
    let fetch_ms = elapsed_ms(fetch_started);
    debug!(source, status = %status, fetch_ms, "food database fetch completed");

    if !status.is_success() {
        warn!(source, status = %status, "food database request failed");
        return Err(SearchFailure::Http {
            source_name: source,
            status,
            body: truncate_chars(&body, MAX_ERROR_BODY_CHARS),
        });
    }

    let parse_started = Instant::now();
    let value: Value = serde_json::from_str(&body).map_err(|e| {
        warn!(source, error = %e, "food database response was not valid JSON");
        SearchFailure::MalformedJson { source_name: source }
    })?;
    let parse_ms = elapsed_ms(parse_started);

    Ok(FetchedJson {
        value,
        fetch_ms,
        parse_ms,
    })
}

/// Milliseconds elapsed since `started`, saturating
pub(crate) fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Truncate to at most `max_chars` characters on a char boundary
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_owned()
    } else {
        let mut excerpt: String = text.chars().take(max_chars).collect();
        excerpt.push('…');
        excerpt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages_carry_the_taxonomy() {
        let config = SearchFailure::MissingCredentials(
            "Server configuration error: Edamam API credentials missing.".into(),
        );
        assert!(config.to_string().starts_with("Server configuration error"));

        let http = SearchFailure::Http {
            source_name: "Edamam",
            status: StatusCode::UNAUTHORIZED,
            body: "bad key".into(),
        };
        let text = http.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("bad key"));

        let network = SearchFailure::Network {
            source_name: "USDA FoodData Central",
            detail: "connection refused".into(),
        };
        assert!(network.to_string().contains("sandboxed or offline"));

        let parse = SearchFailure::MalformedJson { source_name: "Edamam" };
        assert!(parse.to_string().contains("as JSON"));
    }

    #[test]
    fn into_response_produces_empty_products_with_error() {
        let response = SearchFailure::MalformedJson { source_name: "Edamam" }.into_response();
        assert!(response.products.is_empty());
        assert!(response.error.is_some());
    }

    #[test]
    fn long_bodies_are_truncated_for_error_messages() {
        let body = "x".repeat(1000);
        let excerpt = truncate_chars(&body, MAX_ERROR_BODY_CHARS);
        assert_eq!(excerpt.chars().count(), MAX_ERROR_BODY_CHARS + 1);
        assert!(excerpt.ends_with('…'));
        assert_eq!(truncate_chars("short", MAX_ERROR_BODY_CHARS), "short");
    }
}
