// src/output.rs
use crate::error::GreeksResult;
use crate::report::DashboardReport;
use std::io::Write;

/// Write the selected series as CSV: one row per spot sample, a `spot`
/// column followed by one column per selected quantity.
pub fn write_sweep_csv<W: Write>(writer: W, report: &DashboardReport) -> GreeksResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = vec!["spot".to_string()];
    header.extend(report.selected().map(|q| q.to_string()));
    csv.write_record(&header)?;

    for (i, spot) in report.spots.iter().enumerate() {
        let mut row = Vec::with_capacity(header.len());
        row.push(spot.to_string());
        row.extend(report.series.iter().map(|s| s.values[i].to_string()));
        csv.write_record(&row)?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the single-point values as `key,value` rows
pub fn write_summary_csv<W: Write>(writer: W, report: &DashboardReport) -> GreeksResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    let g = &report.greeks;
    csv.write_record(["key", "value"])?;
    for (key, value) in [
        ("premium", report.premium),
        ("payoff", report.payoff),
        ("delta", g.delta),
        ("gamma", g.gamma),
        ("theta", g.theta),
        ("vega", g.vega),
        ("rho", g.rho),
    ] {
        csv.write_record([key.to_string(), value.to_string()])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the whole report as pretty-printed JSON
pub fn write_report_json<W: Write>(mut writer: W, report: &DashboardReport) -> GreeksResult<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::OptionParameters;
    use crate::report::compute_dashboard;
    use crate::sweep::{Quantity, SweepConfig};

    fn small_report(selection: &[Quantity]) -> DashboardReport {
        let cfg = SweepConfig {
            sample_count: 5,
            ..Default::default()
        };
        compute_dashboard(&OptionParameters::default(), selection, &cfg).unwrap()
    }

    #[test]
    fn test_sweep_csv_shape() {
        let report = small_report(&[Quantity::Payoff, Quantity::Delta]);
        let mut buf = Vec::new();
        write_sweep_csv(&mut buf, &report).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "spot,Payoff,Delta");
        assert!(lines[1].starts_with("50,0,"));
        assert!(lines[5].starts_with("150,50,"));
    }

    #[test]
    fn test_summary_csv_keys() {
        let report = small_report(&[]);
        let mut buf = Vec::new();
        write_summary_csv(&mut buf, &report).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("key,value\npremium,10.45"));
        assert!(text.contains("\nrho,"));
    }

    #[test]
    fn test_report_json_fields() {
        let report = small_report(&[Quantity::Gamma]);
        let mut buf = Vec::new();
        write_report_json(&mut buf, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["parameters"]["option_type"], "call");
        assert_eq!(value["series"][0]["quantity"], "Gamma");
        assert_eq!(value["series"][0]["values"].as_array().unwrap().len(), 5);
        assert_eq!(value["layout"]["rows"], 1);
        assert!(value["greeks"]["price"].as_f64().unwrap() > 10.0);
    }
}
