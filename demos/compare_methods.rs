//! # Example: Comparing fixed-step methods
//!
//! Solve y' = -y^2/3 - 2/(3x^2) with every method and print the solution grids
//! and the error summary.
//!
//! Initial condition: y(1) = 2 on [1, 5] with 10 steps.
//!

use ivp_compare::prelude::*;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    let params = Parameters::builder().x0(1.0).y0(2.0).xend(5.0).n(10).n0(3).nend(10).build();

    match solve_all(&params) {
        Ok(report) => {
            println!("{report}");

            for r in &report.methods {
                println!("{} ({}):", r.name(), r.color());
                for (i, (x, y)) in r.iter().enumerate() {
                    match &r.local_errors {
                        Some(errors) => println!(
                            "  x = {:>6.3}, y = {:>12.8}, error = {:.3e}",
                            x, y, errors[i]
                        ),
                        None => println!("  x = {:>6.3}, y = {:>12.8}", x, y),
                    }
                }
            }
        }
        Err(err) => eprintln!("Comparison failed: {err}"),
    }
}
