// src/report.rs
//! Packaging of engine output for presentation.
//!
//! Nothing in here prices anything: [`assemble`] only rearranges a
//! [`GreekSet`] and a [`SpotSweep`] that were computed elsewhere.
//! [`compute_dashboard`] is the one-call pipeline a host invokes whenever a
//! parameter changes; a newer call simply supersedes an older result.

use crate::analytics::{evaluate, payoff, GreekSet};
use crate::error::GreeksResult;
use crate::option::OptionParameters;
use crate::sweep::{sweep, Quantity, SpotSweep, SweepConfig};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Panels per row in the presentation grid
pub const PANEL_COLUMNS: usize = 2;

/// Grid of plot panels needed for a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelLayout {
    pub rows: usize,
    pub columns: usize,
}

impl PanelLayout {
    pub fn for_panels(count: usize) -> Self {
        PanelLayout {
            rows: count.div_ceil(PANEL_COLUMNS),
            columns: PANEL_COLUMNS,
        }
    }
}

/// One selected series, ready to be drawn against [`DashboardReport::spots`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSeries {
    pub quantity: Quantity,
    pub values: Vec<f64>,
}

/// Single-point values at the current spot plus the selected sweep series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub parameters: OptionParameters,
    /// Option price at the current spot
    pub premium: f64,
    /// Payoff at expiry, taking the current spot as the terminal spot
    pub payoff: f64,
    pub greeks: GreekSet,
    pub spots: Vec<f64>,
    pub series: Vec<SelectedSeries>,
    pub layout: PanelLayout,
}

impl DashboardReport {
    pub fn selected(&self) -> impl Iterator<Item = Quantity> + '_ {
        self.series.iter().map(|s| s.quantity)
    }

    pub fn series_for(&self, quantity: Quantity) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.quantity == quantity)
            .map(|s| s.values.as_slice())
    }
}

impl fmt::Display for DashboardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Computed Values")?;
        writeln!(f, "Premium (Option Price): {:.4}", self.premium)?;
        writeln!(
            f,
            "Payoff (at expiration, assuming current S as S_T): {:.4}",
            self.payoff
        )?;
        writeln!(f, "Greeks")?;
        let g = &self.greeks;
        for (name, value) in [
            ("Delta", g.delta),
            ("Gamma", g.gamma),
            ("Theta", g.theta),
            ("Vega", g.vega),
            ("Rho", g.rho),
        ] {
            writeln!(f, "  {}: {:.4}", name, value)?;
        }
        Ok(())
    }
}

/// Parse quantity names such as `["Delta", "payoff"]`
pub fn parse_selection<S: AsRef<str>>(names: &[S]) -> GreeksResult<Vec<Quantity>> {
    names.iter().map(|n| n.as_ref().parse()).collect()
}

/// Bundle a single-point evaluation with the selected sweep series.
///
/// Series appear in selection order; repeated entries keep their first
/// position.
pub fn assemble(
    parameters: &OptionParameters,
    greeks: GreekSet,
    spot_sweep: SpotSweep,
    selection: &[Quantity],
) -> DashboardReport {
    let mut series: Vec<SelectedSeries> = Vec::with_capacity(selection.len());
    for &quantity in selection {
        if series.iter().any(|s| s.quantity == quantity) {
            continue;
        }
        series.push(SelectedSeries {
            quantity,
            values: spot_sweep.series.get(quantity).to_vec(),
        });
    }

    DashboardReport {
        parameters: *parameters,
        premium: greeks.price,
        payoff: payoff(parameters.spot, parameters.strike, parameters.option_type),
        greeks,
        spots: spot_sweep.spots,
        layout: PanelLayout::for_panels(series.len()),
        series,
    }
}

/// Evaluate at the current spot, sweep, and assemble in one pure call
pub fn compute_dashboard(
    parameters: &OptionParameters,
    selection: &[Quantity],
    cfg: &SweepConfig,
) -> GreeksResult<DashboardReport> {
    let greeks = evaluate(parameters)?;
    debug!(%greeks, option_type = %parameters.option_type, "evaluated current spot");
    let spot_sweep = sweep(parameters, cfg)?;
    Ok(assemble(parameters, greeks, spot_sweep, selection))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_rows() {
        assert_eq!(PanelLayout::for_panels(0).rows, 0);
        assert_eq!(PanelLayout::for_panels(1).rows, 1);
        assert_eq!(PanelLayout::for_panels(2).rows, 1);
        assert_eq!(PanelLayout::for_panels(5).rows, 3);
        assert_eq!(PanelLayout::for_panels(6).rows, 3);
    }

    #[test]
    fn test_assemble_keeps_selection_order_and_drops_duplicates() {
        let params = OptionParameters::default();
        let greeks = evaluate(&params).unwrap();
        let spot_sweep = sweep(&params, &SweepConfig::default()).unwrap();
        let selection = [Quantity::Rho, Quantity::Delta, Quantity::Rho];

        let report = assemble(&params, greeks, spot_sweep.clone(), &selection);

        let order: Vec<Quantity> = report.selected().collect();
        assert_eq!(order, vec![Quantity::Rho, Quantity::Delta]);
        assert_eq!(
            report.series_for(Quantity::Delta).unwrap(),
            spot_sweep.series.get(Quantity::Delta)
        );
        assert!(report.series_for(Quantity::Gamma).is_none());
        assert_eq!(report.layout, PanelLayout { rows: 1, columns: 2 });
    }

    #[test]
    fn test_parse_selection() {
        let parsed = parse_selection(&["payoff", "Theta"]).unwrap();
        assert_eq!(parsed, vec![Quantity::Payoff, Quantity::Theta]);
        assert!(parse_selection(&["Delta", "charm"]).is_err());
    }

    #[test]
    fn test_summary_text() {
        let params = OptionParameters::default().with_spot(110.0);
        let report = compute_dashboard(&params, &Quantity::ALL, &SweepConfig::default()).unwrap();
        let text = report.to_string();

        assert!(text.contains("Premium (Option Price): "));
        assert!(text.contains("assuming current S as S_T): 10.0000"));
        assert!(text.contains("  Vega: "));
    }
}
