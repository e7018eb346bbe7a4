//! The delegated toolchain invocations a matrix entry can run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One delegated toolchain invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    /// Static consistency check (`cargo check`).
    Check,
    /// Test suite run (`cargo test`), in the debug or release profile.
    Test {
        /// Use the optimized release profile.
        release: bool,
    },
}

impl Step {
    /// Render the cargo argv for this step.
    ///
    /// The target is forwarded verbatim, even when empty: rejecting a bad
    /// target specifier is the toolchain's job, not the driver's.
    pub fn cargo_args(&self, target: &str) -> Vec<String> {
        let mut args = match self {
            Step::Check => vec!["check".to_string()],
            Step::Test { .. } => vec!["test".to_string()],
        };
        args.push("--target".to_string());
        args.push(target.to_string());
        if let Step::Test { release: true } = self {
            args.push("--release".to_string());
        }
        args
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Check => write!(f, "check"),
            Step::Test { release: false } => write!(f, "test (debug)"),
            Step::Test { release: true } => write!(f, "test (release)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_args() {
        assert_eq!(
            Step::Check.cargo_args("x86_64-unknown-linux-gnu"),
            ["check", "--target", "x86_64-unknown-linux-gnu"]
        );
    }

    #[test]
    fn test_args_debug_and_release() {
        assert_eq!(
            Step::Test { release: false }.cargo_args("aarch64-apple-darwin"),
            ["test", "--target", "aarch64-apple-darwin"]
        );
        assert_eq!(
            Step::Test { release: true }.cargo_args("aarch64-apple-darwin"),
            ["test", "--target", "aarch64-apple-darwin", "--release"]
        );
    }

    #[test]
    fn empty_target_is_forwarded() {
        assert_eq!(Step::Check.cargo_args(""), ["check", "--target", ""]);
    }

    #[test]
    fn display_names() {
        assert_eq!(Step::Check.to_string(), "check");
        assert_eq!(Step::Test { release: false }.to_string(), "test (debug)");
        assert_eq!(Step::Test { release: true }.to_string(), "test (release)");
    }
}
