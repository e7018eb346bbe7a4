//! Gantry CLI: drives one CI matrix entry per invocation.
//!
//! Invoked with no arguments it reads the `TARGET` environment variable,
//! checks the project for that target, and on the reference platform also
//! runs the test suite in both build profiles. The exit status of the first
//! failing toolchain step is propagated unmodified.

mod commands;
mod manifest;

use std::process;

use clap::{Parser, Subcommand};

use gantry_driver::Toolchain;
use gantry_targets::REFERENCE_TRIPLE;

use manifest::GantryManifest;

#[derive(Parser)]
#[command(name = "gantry", version, about = "CI build and test matrix driver")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the matrix entry for the TARGET environment variable (default)
    Run,
    /// Print the step plan without executing it
    Plan {
        /// Target triple (default: the TARGET environment variable)
        #[arg(long)]
        target: Option<String>,
        /// Output format (human, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Check toolchain and environment status
    Doctor {
        /// Inspect a specific target triple
        #[arg(long)]
        target: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

/// Dispatch the parsed command line, returning the process exit status.
///
/// Configuration is read once here and passed down as plain values: the
/// target and cargo path from the environment, the overrides from an
/// optional `gantry.toml` found by walking up from the working directory.
fn run(cli: Cli) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir()?;
    let manifest = GantryManifest::find_and_load(&cwd)?.map(|(manifest, _)| manifest);

    let env_target = std::env::var("TARGET").ok();
    let reference = manifest
        .as_ref()
        .and_then(|m| m.reference())
        .unwrap_or(REFERENCE_TRIPLE)
        .to_string();
    let cargo = manifest::resolve_cargo(manifest.as_ref(), std::env::var_os("CARGO"));
    let toolchain = Toolchain::new(cargo);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            // An unset TARGET is forwarded as the empty string; the
            // toolchain owns rejecting it.
            let target = env_target.unwrap_or_default();
            commands::run::run(&toolchain, &target, &reference)
        }
        Commands::Plan { target, format } => {
            let target = target.or(env_target).unwrap_or_default();
            commands::plan::run(&target, &reference, format.as_deref())?;
            Ok(0)
        }
        Commands::Doctor { target } => {
            commands::doctor::run(
                &cwd,
                &toolchain,
                env_target.as_deref(),
                target.as_deref(),
                &reference,
            )?;
            Ok(0)
        }
    }
}
