//! Command-line front end for the Black-Scholes dashboard.
//!
//! Takes the same inputs as the interactive dashboard (spot, strike,
//! maturity, rate, dividend yield, volatility, option type and the plots to
//! show), runs one evaluation plus spot sweep, and prints or writes the
//! result.
//!
//! ```text
//! greeks-dashboard --spot 105 --option-type put --show delta,gamma
//! greeks-dashboard --params params.json --format csv --output sweep.csv
//! ```

use bs_greeks::output::{write_report_json, write_summary_csv, write_sweep_csv};
use bs_greeks::{
    compute_dashboard, parse_selection, DashboardReport, GreeksResult, OptionParameters,
    OptionType, Quantity, SweepConfig,
};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Computed values as text
    Table,
    /// Full report as JSON
    Json,
    /// Selected sweep series as CSV
    Csv,
    /// Computed values as key,value CSV
    Summary,
}

/// Black-Scholes price, Greeks and spot sweeps for a European option
#[derive(Parser, Debug)]
#[command(name = "greeks-dashboard", author, version, about, long_about = None)]
struct Cli {
    /// JSON file with option parameters; flags below override its fields
    #[arg(long)]
    params: Option<PathBuf>,

    /// Underlying price (S)
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price (K)
    #[arg(long)]
    strike: Option<f64>,

    /// Time to maturity in years (T)
    #[arg(long)]
    maturity: Option<f64>,

    /// Continuously compounded risk-free rate (r)
    #[arg(long)]
    rate: Option<f64>,

    /// Continuous dividend yield (q)
    #[arg(long)]
    dividend: Option<f64>,

    /// Volatility (sigma)
    #[arg(long)]
    volatility: Option<f64>,

    /// Option type: call or put
    #[arg(long)]
    option_type: Option<String>,

    /// Series to include, comma separated (Delta, Gamma, Theta, Vega, Rho, Payoff)
    #[arg(long, value_delimiter = ',')]
    show: Vec<String>,

    /// Number of spot samples in the sweep
    #[arg(long, default_value_t = 100)]
    samples: usize,

    /// Lowest spot the sweep may start from
    #[arg(long, default_value_t = 50.0)]
    floor: f64,

    /// Distance from the current spot to each end of the sweep
    #[arg(long, default_value_t = 50.0)]
    half_width: f64,

    /// Evaluate sweep samples in parallel
    #[arg(long)]
    parallel: bool,

    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn parameters(&self) -> GreeksResult<OptionParameters> {
        let mut params = match &self.params {
            Some(path) => serde_json::from_reader(File::open(path)?)?,
            None => OptionParameters::default(),
        };

        if let Some(spot) = self.spot {
            params.spot = spot;
        }
        if let Some(strike) = self.strike {
            params.strike = strike;
        }
        if let Some(maturity) = self.maturity {
            params.time_to_maturity = maturity;
        }
        if let Some(rate) = self.rate {
            params.risk_free_rate = rate;
        }
        if let Some(dividend) = self.dividend {
            params.dividend_yield = dividend;
        }
        if let Some(volatility) = self.volatility {
            params.volatility = volatility;
        }
        if let Some(option_type) = &self.option_type {
            params.option_type = option_type.parse::<OptionType>()?;
        }
        Ok(params)
    }

    fn selection(&self) -> GreeksResult<Vec<Quantity>> {
        if self.show.is_empty() {
            Ok(Quantity::ALL.to_vec())
        } else {
            parse_selection(&self.show)
        }
    }

    fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            sample_count: self.samples,
            lower_floor: self.floor,
            half_width: self.half_width,
            parallel: self.parallel,
        }
    }
}

fn render<W: Write>(mut out: W, format: Format, report: &DashboardReport) -> GreeksResult<()> {
    match format {
        Format::Table => {
            write!(out, "{}", report)?;
            let names: Vec<String> = report.selected().map(|q| q.to_string()).collect();
            writeln!(
                out,
                "Plots: {} ({} x {} panels, {} samples from {:.2} to {:.2})",
                names.join(", "),
                report.layout.rows,
                report.layout.columns,
                report.spots.len(),
                report.spots.first().copied().unwrap_or_default(),
                report.spots.last().copied().unwrap_or_default(),
            )?;
            out.flush()?;
            Ok(())
        }
        Format::Json => write_report_json(out, report),
        Format::Csv => write_sweep_csv(out, report),
        Format::Summary => write_summary_csv(out, report),
    }
}

fn run(cli: &Cli) -> GreeksResult<()> {
    let params = cli.parameters()?;
    let selection = cli.selection()?;
    let cfg = cli.sweep_config();

    info!(
        spot = params.spot,
        strike = params.strike,
        maturity = params.time_to_maturity,
        option_type = %params.option_type,
        "computing dashboard"
    );
    let report = compute_dashboard(&params, &selection, &cfg)?;

    match &cli.output {
        Some(path) => {
            let mut file = BufWriter::new(File::create(path)?);
            render(&mut file, cli.format, &report)?;
            file.flush()?;
            info!(path = %path.display(), "report written");
        }
        None => render(io::stdout().lock(), cli.format, &report)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "dashboard failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
