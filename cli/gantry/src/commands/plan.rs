//! `gantry plan`: show the computed steps without running anything.

use anyhow::{bail, Result};
use serde::Serialize;

use gantry_driver::Plan;
use gantry_targets::TargetTriple;

/// Machine-readable plan view for `--format json`.
#[derive(Serialize)]
struct PlanView<'a> {
    target: &'a str,
    reference: &'a str,
    triple: Option<TargetTriple>,
    steps: &'a Plan,
}

/// Print the plan for `target` in the requested format.
pub fn run(target: &str, reference: &str, format: Option<&str>) -> Result<()> {
    let plan = Plan::with_reference(target, reference);

    match format.unwrap_or("human") {
        "human" => {
            println!(
                "target:    {}",
                if target.is_empty() { "(empty)" } else { target }
            );
            println!("reference: {reference}");
            println!();
            for step in plan.steps() {
                println!("  {step}");
            }
            if !target.is_empty() {
                if let Err(e) = target.parse::<TargetTriple>() {
                    println!();
                    println!("note: {e}; the toolchain will see it verbatim");
                }
            }
            Ok(())
        }
        "json" => {
            let view = PlanView {
                target,
                reference,
                triple: target.parse().ok(),
                steps: &plan,
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
            Ok(())
        }
        other => bail!("unknown format: '{other}'. Choose: human, json"),
    }
}
