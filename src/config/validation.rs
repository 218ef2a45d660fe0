//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Base URLs must be absolute http(s) URLs
//! - Timeouts must be non-zero, home route must be a path
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: PageConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::PageConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid base URL '{value}': {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("session.home_route must start with '/', got '{0}'")]
    InvalidHomeRoute(String),

    #[error("storage.path must not be empty")]
    EmptyStoragePath,
}

pub fn validate_config(config: &PageConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_base_url("endpoints.primary_base", &config.endpoints.primary_base, &mut errors);
    check_base_url("endpoints.secondary_base", &config.endpoints.secondary_base, &mut errors);

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "timeouts.connect_secs" });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "timeouts.request_secs" });
    }

    if !config.session.home_route.starts_with('/') {
        errors.push(ValidationError::InvalidHomeRoute(config.session.home_route.clone()));
    }

    if config.storage.path.trim().is_empty() {
        errors.push(ValidationError::EmptyStoragePath);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_base_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        }),
    }
}
