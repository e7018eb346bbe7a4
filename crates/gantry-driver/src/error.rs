//! Driver errors carry the failing step's exit status.

use std::path::PathBuf;

use crate::step::Step;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// The toolchain executable could not be started at all.
    #[error("failed to run {}: {source}", program.display())]
    Spawn {
        /// The executable that could not be spawned.
        program: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A delegated step exited with a nonzero status.
    #[error("{step} failed with exit code {code}")]
    StepFailed {
        /// The step that failed.
        step: Step,
        /// Its exit code.
        code: i32,
    },

    /// A delegated step was killed by a signal before exiting.
    #[error("{step} terminated by signal")]
    Terminated {
        /// The step that died.
        step: Step,
    },
}

impl DriverError {
    /// The exit status the driver process should propagate.
    ///
    /// A failing step's own code passes through unmodified. Spawn failures
    /// and signal deaths have no tool-reported status and map to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::StepFailed { code, .. } => *code,
            DriverError::Spawn { .. } | DriverError::Terminated { .. } => 1,
        }
    }
}

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_failure_code_passes_through() {
        let err = DriverError::StepFailed {
            step: Step::Check,
            code: 101,
        };
        assert_eq!(err.exit_code(), 101);
    }

    #[test]
    fn spawn_and_signal_map_to_one() {
        let spawn = DriverError::Spawn {
            program: PathBuf::from("cargo"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(spawn.exit_code(), 1);

        let terminated = DriverError::Terminated {
            step: Step::Test { release: false },
        };
        assert_eq!(terminated.exit_code(), 1);
    }

    #[test]
    fn messages_name_the_step() {
        let err = DriverError::StepFailed {
            step: Step::Test { release: true },
            code: 7,
        };
        assert_eq!(err.to_string(), "test (release) failed with exit code 7");
    }
}
