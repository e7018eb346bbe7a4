//! `gantry doctor`: toolchain and environment diagnostics.

use std::path::Path;
use std::process::Command;

use anyhow::Result;

use gantry_driver::Toolchain;
use gantry_targets::{known, TargetTriple};

use crate::manifest::GantryManifest;

/// Print diagnostic information about the toolchain, the environment, and
/// the (optional) manifest. Never fails the run: a broken environment is
/// exactly what this command is for.
pub fn run(
    project_dir: &Path,
    toolchain: &Toolchain,
    env_target: Option<&str>,
    target: Option<&str>,
    reference: &str,
) -> Result<()> {
    println!("=== Gantry Doctor ===");
    println!();

    println!("Gantry version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("--- Toolchain ---");
    print_tool_status(toolchain);
    println!();

    println!("--- Environment ---");
    match env_target {
        Some(value) if !value.is_empty() => println!("  TARGET: {value}"),
        Some(_) => println!("  TARGET: (set but empty)"),
        None => println!("  TARGET: not set"),
    }
    println!("  reference triple: {reference}");
    println!();

    println!("--- Project ---");
    match GantryManifest::find_and_load(project_dir) {
        Ok(Some((manifest, dir))) => {
            println!("  gantry.toml: found at {}", dir.display());
            if let Some(reference) = manifest.reference() {
                println!("  reference override: {reference}");
            }
            if let Some(cargo) = manifest.cargo_path() {
                println!("  cargo override: {cargo}");
            }
        }
        Ok(None) => println!("  gantry.toml: not found"),
        Err(e) => println!("  gantry.toml: error: {e:#}"),
    }

    let inspected = target.or(env_target).filter(|t| !t.is_empty());
    if let Some(name) = inspected {
        println!();
        println!("--- Target: {name} ---");
        match TargetTriple::parse(name) {
            Ok(triple) => {
                println!("  arch:   {}", triple.arch);
                println!("  vendor: {}", triple.vendor);
                println!("  os:     {}", triple.os);
                if let Some(ref env) = triple.env {
                    println!("  env:    {env}");
                }
                if let Some(description) = known::describe(name) {
                    println!("  known:  {description}");
                }
                println!(
                    "  tests:  {}",
                    if name == reference {
                        "debug + release (reference platform)"
                    } else {
                        "skipped (not the reference platform)"
                    }
                );
            }
            Err(e) => println!("  malformed: {e}"),
        }
    }

    Ok(())
}

fn print_tool_status(toolchain: &Toolchain) {
    let cargo = toolchain.cargo();
    match Command::new(cargo).arg("--version").output() {
        Ok(output) => {
            let version = String::from_utf8_lossy(&output.stdout);
            let first_line = version.lines().next().unwrap_or("(unknown version)");
            println!("  cargo: {} ({first_line})", cargo.display());
        }
        Err(_) => {
            println!("  cargo: {} (not found)", cargo.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_runs_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = Toolchain::new("cargo");
        run(
            dir.path(),
            &toolchain,
            None,
            None,
            "x86_64-unknown-linux-gnu",
        )
        .unwrap();
    }

    #[test]
    fn doctor_with_target_and_missing_tool() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = Toolchain::new(dir.path().join("no-such-cargo"));
        run(
            dir.path(),
            &toolchain,
            Some("x86_64-unknown-linux-gnu"),
            Some("aarch64-apple-darwin"),
            "x86_64-unknown-linux-gnu",
        )
        .unwrap();
    }

    #[test]
    fn doctor_with_malformed_target() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = Toolchain::new("cargo");
        run(
            dir.path(),
            &toolchain,
            None,
            Some("not-a"),
            "x86_64-unknown-linux-gnu",
        )
        .unwrap();
    }
}
