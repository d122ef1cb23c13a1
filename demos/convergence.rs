//! # Example: Convergence of the total approximation error
//!
//! Print the worst-case error of every numerical method for n = 5..=40 steps
//! and the observed order obtained by halving the step size.
//!

use ivp_compare::prelude::*;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    let equation = match InitialValueProblem::new(1.0, 3.0).and_then(DifferentialEquation::new) {
        Ok(de) => de,
        Err(err) => {
            eprintln!("Invalid problem: {err}");
            return;
        }
    };
    let xend = 5.0;
    let (n0, nend) = (5, 40);

    for method in Method::NUMERICAL {
        match total_approximation_error(method, &equation, xend, n0, nend) {
            Ok(errors) => {
                let total = TotalErrors { n0, nend, values: errors };
                println!("{method}:");
                for (n, e) in total.iter().step_by(5) {
                    println!("  n = {:>3}, max error = {:.4e}", n, e);
                }
            }
            Err(err) => eprintln!("{method} failed: {err}"),
        }

        match observed_order(method, &equation, xend, 20) {
            Ok(order) => println!("  observed order (n = 20 -> 40): {:.2}", order),
            Err(err) => eprintln!("  order estimate failed: {err}"),
        }
    }
}
