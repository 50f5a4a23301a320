// demos/error_handling_demo.rs
use bs_greeks::error::GreeksError;
use bs_greeks::{evaluate, parse_selection, sweep, OptionParameters, OptionType, SweepConfig};

fn main() {
    println!("Error Handling Demo for bs-greeks");
    println!("=================================\n");

    // Test 1: Zero time to maturity
    println!("1. Testing zero time to maturity...");

    let expired = OptionParameters {
        time_to_maturity: 0.0,
        ..Default::default()
    };

    match evaluate(&expired) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Zero volatility
    println!("\n2. Testing zero volatility...");

    let flat = OptionParameters {
        volatility: 0.0,
        ..Default::default()
    };

    match evaluate(&flat) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Option type outside call/put
    println!("\n3. Testing unsupported option type...");

    match "straddle".parse::<OptionType>() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Mixed-case option type is accepted
    println!("\n4. Testing case-insensitive option type...");

    match "PuT".parse::<OptionType>() {
        Ok(t) => println!("   ✓ Parsed as {}", t),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 5: Sweep aborts as a whole on invalid parameters
    println!("\n5. Testing sweep with invalid volatility...");

    match sweep(&flat, &SweepConfig::default()) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 6: Invalid sweep configuration
    println!("\n6. Testing invalid sweep configuration...");

    let one_sample = SweepConfig {
        sample_count: 1,
        ..Default::default()
    };

    match sweep(&OptionParameters::default(), &one_sample) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 7: Unknown plot name
    println!("\n7. Testing unknown plot selection...");

    match parse_selection(&["Delta", "Vanna"]) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 8: Error type matching
    println!("\n8. Testing error type matching...");

    let negative_spot = OptionParameters::default().with_spot(-5.0);

    match evaluate(&negative_spot) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(GreeksError::InvalidParameter {
            parameter,
            value,
            constraint,
        }) => {
            println!(
                "   ✓ Caught InvalidParameter: {} = {} ({})",
                parameter, value, constraint
            );
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
    println!("All error cases were properly caught and handled.");
}
