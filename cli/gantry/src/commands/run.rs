//! `gantry run`: execute the matrix entry for the ambient target.

use anyhow::Result;
use gantry_driver::{run_plan, DriverError, Plan, Toolchain};

/// Execute the plan for `target` and return the process exit status to
/// propagate: 0 on success, the failing step's own status otherwise.
///
/// When a delegated step fails, its transcript is already on the console;
/// the driver stays silent and only carries the status. Spawn failures and
/// signal deaths get an `error:` line of our own because the tool never got
/// to write one.
pub fn run(toolchain: &Toolchain, target: &str, reference: &str) -> Result<i32> {
    let plan = Plan::with_reference(target, reference);

    println!(
        "target: {}",
        if target.is_empty() { "(empty)" } else { target }
    );
    println!("steps:  {plan}");
    println!();

    match run_plan(toolchain, &plan, target) {
        Ok(report) => {
            print!("{report}");
            Ok(0)
        }
        Err(err @ DriverError::StepFailed { .. }) => Ok(err.exit_code()),
        Err(err) => {
            eprintln!("error: {err}");
            Ok(err.exit_code())
        }
    }
}
