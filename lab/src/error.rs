//! Unified error types for the lab
//!
//! This module defines error types for each layer:
//! - `DomainError`: misuse of an entity subsystem that was never configured
//! - `ExplainerError`: failures of the remote explanation service
//!
//! Ordinary business-rule rejections (non-positive distances, empty
//! inventory, climbing past the ceiling, ...) are not errors. They are
//! reported through `bool` return values so callers can branch on them.

use thiserror::Error;

/// Domain layer errors - programmer errors that must not be swallowed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Fuel system not configured for {0}")]
    FuelNotConfigured(String),

    #[error("EV system not configured for {0}")]
    EvNotConfigured(String),
}

/// Explanation service errors
#[derive(Debug, Error)]
pub enum ExplainerError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Explainer returned an empty answer")]
    EmptyResponse,

    #[error("Explainer unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_names_the_entity() {
        let err = DomainError::FuelNotConfigured("Cessna 172".to_string());
        assert_eq!(err.to_string(), "Fuel system not configured for Cessna 172");

        let err = DomainError::EvNotConfigured("Zero SR/F".to_string());
        assert_eq!(err.to_string(), "EV system not configured for Zero SR/F");
    }

    #[test]
    fn explainer_api_error_display() {
        let err = ExplainerError::Api {
            status: 503,
            message: "model loading".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - model loading");
    }
}
