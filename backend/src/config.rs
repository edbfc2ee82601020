//! Store configuration descriptor
//!
//! The store layout is described by a small JSON document with four
//! non-negative integers:
//!
//! ```json
//! {
//!   "regular_count": 1,
//!   "express_count": 0,
//!   "self_serve_count": 0,
//!   "line_capacity": 1
//! }
//! ```
//!
//! Parsing and validation happen here, at the boundary; the core models
//! assume a well-formed configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a store configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The descriptor is not valid JSON or has missing/mistyped fields
    #[error("malformed store configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The descriptor parsed but describes an unusable store
    #[error("invalid store configuration: {0}")]
    Invalid(String),
}

/// Counts and capacity describing a store's checkout lines
///
/// # Example
///
/// ```rust
/// use checkout_simulator_core_rs::StoreConfig;
///
/// let config = StoreConfig::from_json(
///     r#"{"regular_count": 2, "express_count": 1, "self_serve_count": 1, "line_capacity": 3}"#,
/// ).unwrap();
/// assert_eq!(config.num_lines(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Number of regular lines
    pub regular_count: usize,
    /// Number of express lines
    pub express_count: usize,
    /// Number of self-serve lines
    pub self_serve_count: usize,
    /// Shared capacity of every line
    pub line_capacity: usize,
}

impl StoreConfig {
    /// Parse and validate a JSON configuration descriptor
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a usable store
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_lines() == 0 {
            return Err(ConfigError::Invalid(
                "store must have at least one checkout line".to_string(),
            ));
        }
        if self.line_capacity == 0 {
            return Err(ConfigError::Invalid(
                "line_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Total number of lines across all variants
    pub fn num_lines(&self) -> usize {
        self.regular_count + self.express_count + self.self_serve_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_store_without_lines() {
        let result = StoreConfig::from_json(
            r#"{"regular_count": 0, "express_count": 0, "self_serve_count": 0, "line_capacity": 1}"#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let result = StoreConfig::from_json(
            r#"{"regular_count": 1, "express_count": 0, "self_serve_count": 0, "line_capacity": 0}"#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = StoreConfig::from_json("{not json");
        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }
}
