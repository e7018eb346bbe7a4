//! Synchronous execution of a plan against the cargo toolchain.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{DriverError, Result};
use crate::plan::Plan;
use crate::report::RunReport;
use crate::step::Step;

/// The resolved toolchain a plan is executed with.
#[derive(Debug, Clone)]
pub struct Toolchain {
    cargo: PathBuf,
    working_dir: Option<PathBuf>,
}

impl Toolchain {
    /// Toolchain invoking `cargo` in the caller's working directory.
    pub fn new(cargo: impl Into<PathBuf>) -> Self {
        Toolchain {
            cargo: cargo.into(),
            working_dir: None,
        }
    }

    /// Run toolchain invocations inside `dir` instead of the ambient
    /// working directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// The cargo executable this toolchain invokes.
    pub fn cargo(&self) -> &Path {
        &self.cargo
    }

    /// Run a single step and wait for it to exit.
    ///
    /// The child inherits stdout and stderr; the transcript belongs to the
    /// delegated tool, the driver adds nothing to it.
    pub fn run_step(&self, step: Step, target: &str) -> Result<()> {
        let mut cmd = Command::new(&self.cargo);
        cmd.args(step.cargo_args(target));
        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|source| DriverError::Spawn {
            program: self.cargo.clone(),
            source,
        })?;

        if status.success() {
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(DriverError::StepFailed { step, code }),
            None => Err(DriverError::Terminated { step }),
        }
    }
}

/// Execute every step of `plan` in order, stopping at the first failure.
///
/// The returned report lists the completed steps; on failure the error
/// carries the failing step's exit status and no later step has run.
pub fn run_plan(toolchain: &Toolchain, plan: &Plan, target: &str) -> Result<RunReport> {
    let mut report = RunReport::default();
    for &step in plan.steps() {
        toolchain.run_step(step, target)?;
        report.record(step);
    }
    Ok(report)
}
