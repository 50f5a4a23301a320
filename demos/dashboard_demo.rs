// demos/dashboard_demo.rs
use bs_greeks::output::write_sweep_csv;
use bs_greeks::{
    compute_dashboard, evaluate, OptionParameters, OptionType, Quantity, SweepConfig,
};
use std::fs::File;

fn main() {
    println!("Running bs-greeks Dashboard Demo\n");

    let call = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
    let put = call.with_option_type(OptionType::Put);
    let dividend_call = call.with_dividend_yield(0.03);

    // --- Single-point values ---
    println!("--- Single-point values (S=100, K=100, T=1, r=5%, σ=20%) ---");
    for (label, params) in [
        ("Call", &call),
        ("Put", &put),
        ("Call, q=3%", &dividend_call),
    ] {
        let g = evaluate(params).expect("Valid parameters");
        println!("{:<12} {}", label, g);
    }

    // --- Put-call parity ---
    let c = evaluate(&call).expect("Valid parameters").price;
    let p = evaluate(&put).expect("Valid parameters").price;
    let forward_gap = call.spot - call.strike * (-call.risk_free_rate * call.time_to_maturity).exp();
    println!("\n--- Put-call parity ---");
    println!("C - P           = {:.8}", c - p);
    println!("S - K e^(-rT)   = {:.8}", forward_gap);

    // --- Sweep ---
    println!("\n--- Spot sweep ---");
    let selection = [Quantity::Delta, Quantity::Gamma, Quantity::Payoff];
    let cfg = SweepConfig {
        parallel: true,
        ..Default::default()
    };
    let report = compute_dashboard(&call, &selection, &cfg).expect("Valid parameters");

    print!("{}", report);
    println!(
        "\n{} samples from {:.2} to {:.2}, {} x {} panels",
        report.spots.len(),
        report.spots[0],
        report.spots[report.spots.len() - 1],
        report.layout.rows,
        report.layout.columns
    );

    println!("\n{:>10} {:>10} {:>10} {:>10}", "S", "Delta", "Gamma", "Payoff");
    for i in (0..report.spots.len()).step_by(11) {
        println!(
            "{:>10.2} {:>10.4} {:>10.4} {:>10.4}",
            report.spots[i],
            report.series[0].values[i],
            report.series[1].values[i],
            report.series[2].values[i]
        );
    }

    let current_dir = std::env::current_dir().expect("Failed to get current directory");
    let output_filename = current_dir.join("dashboard_sweep.csv");
    let file = File::create(&output_filename).expect("Could not create file");
    write_sweep_csv(file, &report).expect("Could not write sweep");
    println!("\nSweep written to {}", output_filename.display());
}
