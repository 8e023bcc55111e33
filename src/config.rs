// ABOUTME: Environment-driven configuration for food database credentials
// ABOUTME: Reads and validates credentials once, then injects them into adapter clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! Configuration.
//!
//! Credentials are read from the environment once and passed explicitly
//! into each adapter's constructor — never consulted as ambient globals —
//! so tests can inject fakes deterministically. Empty values and obvious
//! placeholders (e.g. `YOUR_APP_ID`) are treated as unset; the adapters
//! themselves turn an unset credential into a configuration error at call
//! time, without attempting a network request.

use std::env;

use tracing::warn;

use crate::external::{
    EdamamClient, EdamamClientConfig, OpenFoodFactsClient, OpenFoodFactsClientConfig, UsdaClient,
    UsdaClientConfig,
};

/// Environment variable holding the Edamam application id
pub const ENV_EDAMAM_APP_ID: &str = "EDAMAM_APP_ID";
/// Environment variable holding the Edamam application key
pub const ENV_EDAMAM_APP_KEY: &str = "EDAMAM_APP_KEY";
/// Environment variable holding the USDA API key
pub const ENV_USDA_API_KEY: &str = "USDA_API_KEY";

/// True for values that cannot be real credentials
#[must_use]
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.to_uppercase().starts_with("YOUR_")
}

/// Credentials for the external food database APIs
#[derive(Debug, Clone, Default)]
pub struct FoodApiConfig {
    /// Edamam application id, if configured
    pub edamam_app_id: Option<String>,
    /// Edamam application key, if configured
    pub edamam_app_key: Option<String>,
    /// USDA API key, if configured
    pub usda_api_key: Option<String>,
}

impl FoodApiConfig {
    /// Load credentials from the environment.
    ///
    /// Missing or placeholder values become `None` with a warning; Open
    /// Food Facts needs no credentials, so a fully empty config is still
    /// usable.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            edamam_app_id: env_credential(ENV_EDAMAM_APP_ID),
            edamam_app_key: env_credential(ENV_EDAMAM_APP_KEY),
            usda_api_key: env_credential(ENV_USDA_API_KEY),
        }
    }

    /// Build an Edamam client carrying whatever credentials are configured
    #[must_use]
    pub fn edamam_client(&self) -> EdamamClient {
        EdamamClient::new(EdamamClientConfig {
            app_id: self.edamam_app_id.clone().unwrap_or_default(),
            app_key: self.edamam_app_key.clone().unwrap_or_default(),
            ..EdamamClientConfig::default()
        })
    }

    /// Build an Open Food Facts client (credential-free)
    #[must_use]
    pub fn open_food_facts_client(&self) -> OpenFoodFactsClient {
        OpenFoodFactsClient::new(OpenFoodFactsClientConfig::default())
    }

    /// Build a USDA client carrying whatever key is configured
    #[must_use]
    pub fn usda_client(&self) -> UsdaClient {
        UsdaClient::new(UsdaClientConfig {
            api_key: self.usda_api_key.clone().unwrap_or_default(),
            ..UsdaClientConfig::default()
        })
    }
}

fn env_credential(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !is_placeholder(&value) => Some(value),
        Ok(_) => {
            warn!(variable = name, "credential is empty or a placeholder; treating as unset");
            None
        }
        Err(_) => None,
    }
}
