use std::process;

use abpower::report::{render_recommendations, render_table};
use abpower::{compute_recommendations, compute_sweep, ParameterSet};

fn main() {
    // E-commerce checkout scenario
    let params = match ParameterSet::new(
        0.03,     // baseline_rate
        50_000.0, // monthly_population
        2,        // num_variants
        0.8,      // power
        0.05,     // alpha
    ) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let records = match compute_sweep(&params, None) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    print!("{}", render_table(&params, &records, Some(15)));

    let rule = "=".repeat(80);
    println!("\n{rule}");
    println!("RECOMMENDATIONS");
    println!("{rule}");
    print!(
        "{}",
        render_recommendations(&compute_recommendations(&records))
    );
}
