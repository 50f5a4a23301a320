// src/sweep/sweep_engine.rs
use crate::analytics::{evaluate, payoff, GreekSet};
use crate::error::{GreeksError, GreeksResult};
use crate::option::OptionParameters;
use crate::sweep::quantity::Quantity;
use ndarray::Array1;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Bounds and resolution of the spot sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    pub sample_count: usize,
    /// Lowest spot the grid may start from
    pub lower_floor: f64,
    /// Distance from the current spot to each end of the grid
    pub half_width: f64,
    /// Evaluate samples on the rayon pool
    pub parallel: bool,
}

impl SweepConfig {
    /// Validate the sweep configuration
    pub fn validate(&self) -> GreeksResult<()> {
        if self.sample_count < 2 {
            return Err(config_error(
                "sample_count",
                format!("must be at least 2 (got {})", self.sample_count),
            ));
        }
        if !self.lower_floor.is_finite() {
            return Err(config_error(
                "lower_floor",
                format!("must be finite (got {})", self.lower_floor),
            ));
        }
        if !(self.half_width > 0.0 && self.half_width.is_finite()) {
            return Err(config_error(
                "half_width",
                format!("must be positive and finite (got {})", self.half_width),
            ));
        }
        Ok(())
    }

    /// Inclusive `[lower, upper]` interval sampled around `spot`
    ///
    /// The lower end must stay strictly positive, so that a sweep over valid
    /// option parameters never evaluates a non-positive spot.
    pub fn bounds(&self, spot: f64) -> GreeksResult<(f64, f64)> {
        self.validate()?;
        let lower = self.lower_floor.max(spot - self.half_width);
        let upper = spot + self.half_width;
        if !(lower > 0.0) {
            return Err(config_error(
                "lower_floor",
                format!(
                    "sweep would start at non-positive spot {} (floor {}, spot {}, half width {})",
                    lower, self.lower_floor, spot, self.half_width
                ),
            ));
        }
        if !(lower < upper) {
            return Err(config_error(
                "lower_floor",
                format!(
                    "sweep interval is empty: lower bound {} is not below upper bound {}",
                    lower, upper
                ),
            ));
        }
        Ok((lower, upper))
    }

    /// Evenly spaced, strictly ascending spot grid around `spot`
    pub fn spot_grid(&self, spot: f64) -> GreeksResult<Array1<f64>> {
        let (lower, upper) = self.bounds(spot)?;
        let grid = Array1::linspace(lower, upper, self.sample_count);
        // Spacing below float resolution yields repeated samples
        if grid.iter().zip(grid.iter().skip(1)).any(|(a, b)| !(a < b)) {
            return Err(config_error(
                "sample_count",
                format!(
                    "{} samples over [{}, {}] are closer than float resolution",
                    self.sample_count, lower, upper
                ),
            ));
        }
        Ok(grid)
    }
}

fn config_error(field: &str, reason: String) -> GreeksError {
    GreeksError::InvalidConfiguration {
        field: field.to_string(),
        reason,
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            sample_count: 100,
            lower_floor: 50.0,
            half_width: 50.0,
            parallel: false,
        }
    }
}

/// Per-quantity series sampled along a spot grid.
///
/// All series have the same length and share the grid's ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SweepSeries {
    delta: Vec<f64>,
    gamma: Vec<f64>,
    theta: Vec<f64>,
    vega: Vec<f64>,
    rho: Vec<f64>,
    payoff: Vec<f64>,
}

impl SweepSeries {
    fn with_capacity(n: usize) -> Self {
        SweepSeries {
            delta: Vec::with_capacity(n),
            gamma: Vec::with_capacity(n),
            theta: Vec::with_capacity(n),
            vega: Vec::with_capacity(n),
            rho: Vec::with_capacity(n),
            payoff: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, greeks: &GreekSet, payoff: f64) {
        self.delta.push(greeks.delta);
        self.gamma.push(greeks.gamma);
        self.theta.push(greeks.theta);
        self.vega.push(greeks.vega);
        self.rho.push(greeks.rho);
        self.payoff.push(payoff);
    }

    pub fn get(&self, quantity: Quantity) -> &[f64] {
        match quantity {
            Quantity::Delta => &self.delta,
            Quantity::Gamma => &self.gamma,
            Quantity::Theta => &self.theta,
            Quantity::Vega => &self.vega,
            Quantity::Rho => &self.rho,
            Quantity::Payoff => &self.payoff,
        }
    }

    /// Number of sampled points
    pub fn len(&self) -> usize {
        self.delta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delta.is_empty()
    }
}

/// Spot grid with the series evaluated on it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotSweep {
    pub spots: Vec<f64>,
    pub series: SweepSeries,
}

/// Evaluate price Greeks and payoff along a spot grid around `params.spot`
///
/// Every other parameter is held fixed. The first failing sample aborts the
/// sweep; since maturity and volatility do not vary with spot, either every
/// sample succeeds or the first one fails.
pub fn sweep(params: &OptionParameters, cfg: &SweepConfig) -> GreeksResult<SpotSweep> {
    params.validate()?;
    let spots = cfg.spot_grid(params.spot)?.to_vec();
    debug!(
        samples = spots.len(),
        lower = spots[0],
        upper = spots[spots.len() - 1],
        parallel = cfg.parallel,
        "sweeping spot grid"
    );

    let evaluate_at = |s: &f64| -> GreeksResult<(GreekSet, f64)> {
        let greeks = evaluate(&params.with_spot(*s))?;
        Ok((greeks, payoff(*s, params.strike, params.option_type)))
    };

    let points: Vec<(GreekSet, f64)> = if cfg.parallel {
        spots.par_iter().map(evaluate_at).collect::<GreeksResult<_>>()?
    } else {
        spots.iter().map(evaluate_at).collect::<GreeksResult<_>>()?
    };

    let mut series = SweepSeries::with_capacity(points.len());
    for (greeks, value) in &points {
        series.push(greeks, *value);
    }

    Ok(SpotSweep { spots, series })
}

/// [`sweep`] with the grid given as loose arguments, sequential evaluation
pub fn sweep_with(
    params: &OptionParameters,
    sample_count: usize,
    lower_floor: f64,
    half_width: f64,
) -> GreeksResult<SpotSweep> {
    let cfg = SweepConfig {
        sample_count,
        lower_floor,
        half_width,
        parallel: false,
    };
    sweep(params, &cfg)
}
