// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes-Merton formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model with a continuous dividend yield q, the
//! underlying follows:
//! ```text
//! dS_t = (r - q) S_t dt + σ S_t dW_t
//! ```
//!
//! European prices and their sensitivities have closed forms in terms of the
//! standard normal CDF Φ(x) and PDF φ(x). Setting q = 0 recovers the classical
//! non-dividend formulas, so a single engine covers both cases.

use crate::error::GreeksResult;
use crate::math_utils::{norm_cdf, norm_pdf};
use crate::option::{OptionParameters, OptionType};
use serde::Serialize;
use std::fmt;

/// Price and first/second order sensitivities of a European option.
///
/// Every field comes from its own closed form; none is derived from another
/// numerically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GreekSet {
    /// Present value of the option
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂t, per year
    pub theta: f64,
    /// ∂V/∂σ, per unit of volatility
    pub vega: f64,
    /// ∂V/∂r, per unit of rate
    pub rho: f64,
}

impl fmt::Display for GreekSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "price={:.4}, Δ={:.4}, Γ={:.4}, Θ={:.4}, ν={:.4}, ρ={:.4}",
            self.price, self.delta, self.gamma, self.theta, self.vega, self.rho
        )
    }
}

/// Black-Scholes d₁ and d₂
///
/// # Formula
/// ```text
/// d₁ = [ln(S/K) + (r - q + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
pub fn d1_d2(params: &OptionParameters) -> GreeksResult<(f64, f64)> {
    params.validate()?;
    Ok(unchecked_d1_d2(params))
}

fn unchecked_d1_d2(p: &OptionParameters) -> (f64, f64) {
    let sigma_sqrt_t = p.volatility * p.time_to_maturity.sqrt();
    let d1 = ((p.spot / p.strike).ln()
        + (p.risk_free_rate - p.dividend_yield + 0.5 * p.volatility * p.volatility)
            * p.time_to_maturity)
        / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Price and Greeks of a European option
///
/// # Formulas
/// ```text
/// Call:  V = S e^(-qT) Φ(d₁) - K e^(-rT) Φ(d₂)
///        Δ = e^(-qT) Φ(d₁)
///        Θ = -S e^(-qT) φ(d₁) σ/(2√T) - r K e^(-rT) Φ(d₂) + q S e^(-qT) Φ(d₁)
///        ρ = K T e^(-rT) Φ(d₂)
///
/// Put:   V = K e^(-rT) Φ(-d₂) - S e^(-qT) Φ(-d₁)
///        Δ = -e^(-qT) Φ(-d₁)
///        Θ = -S e^(-qT) φ(d₁) σ/(2√T) + r K e^(-rT) Φ(-d₂) - q S e^(-qT) Φ(-d₁)
///        ρ = -K T e^(-rT) Φ(-d₂)
///
/// Both:  Γ = e^(-qT) φ(d₁) / (S σ √T)
///        ν = S e^(-qT) φ(d₁) √T
/// ```
///
/// # Errors
///
/// `InvalidParameter` when time to maturity or volatility is not positive
/// (checked before anything else), or when spot, strike or dividend yield are
/// outside their domain. No distribution function is evaluated on failure.
pub fn evaluate(params: &OptionParameters) -> GreeksResult<GreekSet> {
    let (d1, d2) = d1_d2(params)?;

    let OptionParameters {
        spot: s,
        strike: k,
        time_to_maturity: t,
        risk_free_rate: r,
        dividend_yield: q,
        volatility: sigma,
        option_type,
    } = *params;

    let sqrt_t = t.sqrt();
    let dividend_discount = (-q * t).exp();
    let discount = (-r * t).exp();
    let pdf_d1 = norm_pdf(d1);

    // Time decay from diffusion, shared by calls and puts
    let theta_diffusion = -(s * dividend_discount * pdf_d1 * sigma) / (2.0 * sqrt_t);

    let gamma = dividend_discount * pdf_d1 / (s * sigma * sqrt_t);
    let vega = s * dividend_discount * pdf_d1 * sqrt_t;

    let greeks = match option_type {
        OptionType::Call => {
            let nd1 = norm_cdf(d1);
            let nd2 = norm_cdf(d2);
            GreekSet {
                price: s * dividend_discount * nd1 - k * discount * nd2,
                delta: dividend_discount * nd1,
                gamma,
                theta: theta_diffusion - r * k * discount * nd2 + q * s * dividend_discount * nd1,
                vega,
                rho: k * t * discount * nd2,
            }
        }
        OptionType::Put => {
            let n_minus_d1 = norm_cdf(-d1);
            let n_minus_d2 = norm_cdf(-d2);
            GreekSet {
                price: k * discount * n_minus_d2 - s * dividend_discount * n_minus_d1,
                delta: -dividend_discount * n_minus_d1,
                gamma,
                theta: theta_diffusion + r * k * discount * n_minus_d2
                    - q * s * dividend_discount * n_minus_d1,
                vega,
                rho: -k * t * discount * n_minus_d2,
            }
        }
    };

    Ok(greeks)
}
