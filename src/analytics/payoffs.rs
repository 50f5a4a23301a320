//! Option Payoff Functions
//!
//! # Mathematical Definitions
//!
//! - **Call**: max(S_T - K, 0) - right to buy at strike K
//! - **Put**: max(K - S_T, 0) - right to sell at strike K
//!
//! The payoff depends only on the terminal spot, the strike and the exercise
//! right. Rates, volatility and time are irrelevant at expiry.

use crate::option::OptionType;

/// Intrinsic value of a European option at expiry
///
/// # Returns
/// Non-negative payoff value (options cannot have negative intrinsic value)
pub fn payoff(spot: f64, strike: f64, option_type: OptionType) -> f64 {
    match option_type {
        OptionType::Call => (spot - strike).max(0.0),
        OptionType::Put => (strike - spot).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_payoff() {
        assert_eq!(payoff(120.0, 100.0, OptionType::Call), 20.0);
        assert_eq!(payoff(80.0, 100.0, OptionType::Call), 0.0);
        assert_eq!(payoff(100.0, 100.0, OptionType::Call), 0.0);
    }

    #[test]
    fn test_put_payoff() {
        assert_eq!(payoff(80.0, 100.0, OptionType::Put), 20.0);
        assert_eq!(payoff(120.0, 100.0, OptionType::Put), 0.0);
    }
}
