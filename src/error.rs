// src/error.rs
use thiserror::Error;

/// Custom error types for the bs-greeks library
#[derive(Debug, Error)]
pub enum GreeksError {
    /// Invalid parameter values
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Option type outside {call, put}
    #[error("Invalid option type '{value}': option type must be 'call' or 'put'")]
    InvalidOptionType { value: String },

    /// Sweep output name outside {Delta, Gamma, Theta, Vega, Rho, Payoff}
    #[error("Unknown output quantity '{name}': expected one of Delta, Gamma, Theta, Vega, Rho, Payoff")]
    UnknownQuantity { name: String },

    /// Invalid configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for bs-greeks operations
pub type GreeksResult<T> = Result<T, GreeksError>;

/// Validation utilities
pub mod validation {
    use super::{GreeksError, GreeksResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> GreeksResult<()> {
        // NaN fails the comparison, so it is rejected here as well
        if !(value > 0.0) {
            Err(GreeksError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> GreeksResult<()> {
        if !(value >= 0.0) {
            Err(GreeksError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> GreeksResult<()> {
        if !value.is_finite() {
            Err(GreeksError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
