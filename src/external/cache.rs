// ABOUTME: Session-scoped search cache wrapping any FoodSearchProvider
// ABOUTME: Keyed by lower-cased query, no eviction, stores successful responses only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! In-memory search cache.
//!
//! Sits in front of a source adapter so repeat searches for an identical
//! query within a session skip the network. No eviction and no TTL; the
//! cache lives as long as the session that owns it. Responses carrying an
//! `error` are not stored, so transient failures and empty results are
//! re-queried instead of pinned.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::external::FoodSearchProvider;
use crate::models::SearchFoodResponse;

/// Caching wrapper around a [`FoodSearchProvider`]
pub struct CachedProvider<P> {
    inner: P,
    responses: RwLock<HashMap<String, SearchFoodResponse>>,
}

impl<P> CachedProvider<P> {
    /// Wrap a provider with a fresh, empty cache
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            responses: RwLock::new(HashMap::new()),
        }
    }

    /// Number of cached queries
    pub async fn cached_queries(&self) -> usize {
        self.responses.read().await.len()
    }

    /// Drop all cached responses
    pub async fn clear(&self) {
        self.responses.write().await.clear();
    }
}

#[async_trait]
impl<P: FoodSearchProvider> FoodSearchProvider for CachedProvider<P> {
    fn source_name(&self) -> &'static str {
        self.inner.source_name()
    }

    async fn search_products(&self, food_name: &str) -> SearchFoodResponse {
        let key = food_name.to_lowercase();
        {
            let cache = self.responses.read().await;
            if let Some(hit) = cache.get(&key) {
                debug!(source = self.source_name(), query = %key, "search cache hit");
                return hit.clone();
            }
        }

        let response = self.inner.search_products(food_name).await;
        if response.error.is_none() {
            self.responses
                .write()
                .await
                .insert(key, response.clone());
        }
        response
    }
}
