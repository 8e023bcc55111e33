// ABOUTME: Unified error handling with standard error codes for the nutrition companion core
// ABOUTME: Defines ErrorCode, AppError with constructor helpers, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! # Unified Error Handling
//!
//! Error types shared across the crate. Expected failures at the food
//! database boundary are converted into plain response values before they
//! reach callers (see [`crate::external`]); `AppError` covers everything
//! that remains a genuine `Result::Err`, such as invalid caller input or a
//! misbehaving generative model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Caller-supplied input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Required configuration (API credentials) is missing or a placeholder
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing,
    /// An upstream service returned an error or could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,
    /// A payload could not be serialized or deserialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

/// Application error with a standard code and a human-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    /// Standard error code
    pub code: ErrorCode,
    /// Human-readable message, safe to surface to the caller
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid caller input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing or placeholder configuration
    #[must_use]
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Upstream service failure, tagged with the service name
    #[must_use]
    pub fn external_service(service: &str, detail: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{service}: {}", detail.into()),
        )
    }

    /// Serialization or deserialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Unexpected internal failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Convenience alias for results carrying an [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_service_error_includes_service_name() {
        let err = AppError::external_service("Edamam API", "HTTP 500");
        assert_eq!(err.code, ErrorCode::ExternalServiceError);
        assert!(err.message.contains("Edamam API"));
        assert!(err.to_string().contains("HTTP 500"));
    }

    #[test]
    fn error_codes_serialize_as_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::ConfigMissing).unwrap();
        assert_eq!(json, "\"CONFIG_MISSING\"");
    }
}
