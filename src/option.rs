// src/option.rs
//! Contract inputs for the analytic engine.
//!
//! [`OptionType`] is a closed two-variant enum. Strings coming from a UI or a
//! parameter file are parsed once here, case-insensitively, and everything
//! downstream works with the enum.

use crate::error::{validation::*, GreeksError, GreeksResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exercise right of a European option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OptionType {
    /// Right to buy at the strike
    Call,
    /// Right to sell at the strike
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = GreeksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(GreeksError::InvalidOptionType {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OptionType {
    type Error = GreeksError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OptionType> for String {
    fn from(value: OptionType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market and contract inputs for a single Black-Scholes evaluation.
///
/// `dividend_yield` defaults to zero, which gives the classical
/// non-dividend formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    pub spot: f64,
    pub strike: f64,
    pub time_to_maturity: f64,
    pub risk_free_rate: f64,
    #[serde(default)]
    pub dividend_yield: f64,
    pub volatility: f64,
    pub option_type: OptionType,
}

impl OptionParameters {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        OptionParameters {
            spot,
            strike,
            time_to_maturity,
            risk_free_rate,
            dividend_yield: 0.0,
            volatility,
            option_type,
        }
    }

    pub fn with_spot(mut self, spot: f64) -> Self {
        self.spot = spot;
        self
    }

    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Validate the parameters.
    ///
    /// Maturity and volatility are checked first so that the degenerate
    /// inputs the engine cannot handle are always reported by name.
    pub fn validate(&self) -> GreeksResult<()> {
        validate_positive("time_to_maturity", self.time_to_maturity)?;
        validate_positive("volatility", self.volatility)?;
        validate_positive("spot", self.spot)?;
        validate_positive("strike", self.strike)?;
        validate_finite("spot", self.spot)?;
        validate_finite("strike", self.strike)?;
        validate_finite("time_to_maturity", self.time_to_maturity)?;
        validate_finite("volatility", self.volatility)?;
        validate_finite("risk_free_rate", self.risk_free_rate)?;
        validate_non_negative("dividend_yield", self.dividend_yield)?;
        validate_finite("dividend_yield", self.dividend_yield)?;
        Ok(())
    }
}

impl Default for OptionParameters {
    fn default() -> Self {
        OptionParameters {
            spot: 100.0,
            strike: 100.0,
            time_to_maturity: 1.0,
            risk_free_rate: 0.05,
            dividend_yield: 0.0,
            volatility: 0.2,
            option_type: OptionType::Call,
        }
    }
}
