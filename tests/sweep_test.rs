// tests/sweep_test.rs
use bs_greeks::{
    compute_dashboard, evaluate, sweep, sweep_with, GreeksError, OptionParameters, OptionType,
    Quantity, SweepConfig,
};

#[test]
fn test_sweep_grid_is_strictly_ascending_with_requested_count() {
    let params = OptionParameters::default();

    for sample_count in [2, 7, 100, 257] {
        let result = sweep_with(&params, sample_count, 50.0, 50.0).expect("Valid sweep");

        assert_eq!(result.spots.len(), sample_count);
        assert!(
            result.spots.windows(2).all(|w| w[0] < w[1]),
            "spot grid is not strictly ascending for {} samples",
            sample_count
        );
        for q in Quantity::ALL {
            assert_eq!(result.series.get(q).len(), sample_count, "{} series length", q);
        }
    }
}

#[test]
fn test_sweep_matches_pointwise_evaluation() {
    let params = OptionParameters::default()
        .with_option_type(OptionType::Put)
        .with_dividend_yield(0.02);
    let result = sweep(&params, &SweepConfig::default()).expect("Valid sweep");

    for (i, &s) in result.spots.iter().enumerate() {
        let g = evaluate(&params.with_spot(s)).expect("Valid parameters");
        assert_eq!(result.series.get(Quantity::Delta)[i], g.delta);
        assert_eq!(result.series.get(Quantity::Gamma)[i], g.gamma);
        assert_eq!(result.series.get(Quantity::Theta)[i], g.theta);
        assert_eq!(result.series.get(Quantity::Vega)[i], g.vega);
        assert_eq!(result.series.get(Quantity::Rho)[i], g.rho);
    }
}

#[test]
fn test_parallel_sweep_is_identical_to_sequential() {
    let params = OptionParameters::default().with_spot(123.0);
    let sequential = sweep(&params, &SweepConfig::default()).expect("Valid sweep");
    let parallel = sweep(
        &params,
        &SweepConfig {
            parallel: true,
            ..Default::default()
        },
    )
    .expect("Valid sweep");

    assert_eq!(sequential, parallel);
}

#[test]
fn test_sweep_is_idempotent() {
    let params = OptionParameters::default().with_dividend_yield(0.01);
    let first = compute_dashboard(&params, &Quantity::ALL, &SweepConfig::default()).expect("Valid");
    let second = compute_dashboard(&params, &Quantity::ALL, &SweepConfig::default()).expect("Valid");

    assert_eq!(first, second);
}

#[test]
fn test_sweep_aborts_on_invalid_parameters() {
    for params in [
        OptionParameters {
            time_to_maturity: 0.0,
            ..Default::default()
        },
        OptionParameters {
            volatility: 0.0,
            ..Default::default()
        },
    ] {
        for parallel in [false, true] {
            let cfg = SweepConfig {
                parallel,
                ..Default::default()
            };
            assert!(matches!(
                sweep(&params, &cfg),
                Err(GreeksError::InvalidParameter { .. })
            ));
        }
    }
}

#[test]
fn test_low_spot_grid_is_clipped_at_floor() {
    let params = OptionParameters::default().with_spot(60.0);
    let result = sweep_with(&params, 100, 50.0, 50.0).expect("Valid sweep");

    assert_eq!(result.spots[0], 50.0);
    assert!((result.spots[99] - 110.0).abs() < 1e-9);
}

#[test]
fn test_selection_filters_without_changing_values() {
    let params = OptionParameters::default();
    let cfg = SweepConfig::default();
    let full = compute_dashboard(&params, &Quantity::ALL, &cfg).expect("Valid");
    let partial = compute_dashboard(&params, &[Quantity::Vega, Quantity::Payoff], &cfg).expect("Valid");

    assert_eq!(partial.series.len(), 2);
    assert_eq!(partial.greeks, full.greeks);
    assert_eq!(partial.spots, full.spots);
    assert_eq!(
        partial.series_for(Quantity::Vega),
        full.series_for(Quantity::Vega)
    );
    assert_eq!(full.layout.rows, 3);
    assert_eq!(partial.layout.rows, 1);
}

#[test]
fn test_zero_floor_sweep_fails_as_configuration_error() {
    let params = OptionParameters::default().with_spot(40.0);

    match sweep_with(&params, 100, 0.0, 50.0) {
        Err(GreeksError::InvalidConfiguration { field, reason }) => {
            println!("lower_floor rejected: {}", reason);
            assert_eq!(field, "lower_floor");
        }
        other => panic!("expected InvalidConfiguration, got {:?}", other),
    }

    // Same floor with a narrower window stays on positive spots
    let result = sweep_with(&params, 100, 0.0, 30.0).expect("Valid sweep");
    assert!(result.spots.iter().all(|&s| s > 0.0));
}

#[test]
fn test_bad_sweep_settings_are_configuration_errors() {
    let params = OptionParameters::default();
    for (half_width, floor) in [(0.0, 50.0), (-5.0, 50.0), (f64::NAN, 50.0), (50.0, f64::NAN)] {
        assert!(matches!(
            sweep_with(&params, 100, floor, half_width),
            Err(GreeksError::InvalidConfiguration { .. })
        ));
    }
}
