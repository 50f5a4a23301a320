//! # bs-greeks: Closed-form Black-Scholes Pricing and Greeks
//!
//! A Rust library for the analytic price and risk sensitivities of European
//! options, with an optional continuous dividend yield, plus spot sweeps of
//! those sensitivities for plotting.
//!
//! ## Key Features
//!
//! - **Single Engine**: one Black-Scholes-Merton implementation, q = 0 gives the classical case
//! - **Complete Greeks**: Delta, Gamma, Theta, Vega, Rho from their own closed forms
//! - **Spot Sweeps**: evenly spaced grids around the current spot, optionally on rayon
//! - **Presentation Ready**: selected series bundled with a panel layout, JSON/CSV output
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::{compute_dashboard, evaluate, OptionParameters, OptionType, Quantity, SweepConfig};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
//!
//! let greeks = evaluate(&params).expect("valid parameters");
//! println!("Call price: {:.4}, delta: {:.4}", greeks.price, greeks.delta);
//!
//! let report = compute_dashboard(&params, &[Quantity::Delta, Quantity::Payoff], &SweepConfig::default())
//!     .expect("valid parameters");
//! assert_eq!(report.spots.len(), 100);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Prices follow from risk-neutral expectation under geometric Brownian motion
//! with drift r - q. Every quantity is a closed form in d₁, d₂ and the standard
//! normal distribution; nothing is simulated or differentiated numerically.

// Module declarations
pub mod error;
pub mod math_utils;
pub mod option;
pub mod analytics;
pub mod sweep;
pub mod report;
pub mod output;

// Re-export commonly used types for convenience
pub use analytics::{evaluate, payoff, GreekSet};
pub use error::{GreeksError, GreeksResult};
pub use option::{OptionParameters, OptionType};
pub use report::{assemble, compute_dashboard, parse_selection, DashboardReport, PanelLayout};
pub use sweep::{sweep, sweep_with, Quantity, SpotSweep, SweepConfig, SweepSeries};
