//! Parsing and display of `arch-vendor-os[-env]` triple strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TripleError};

/// The reference platform. Matrix entries for this triple also run the test
/// suite in both build profiles; every other triple only gets the check pass.
pub const REFERENCE_TRIPLE: &str = "x86_64-unknown-linux-gnu";

/// A parsed view of a target triple string.
///
/// Triples with exactly three segments (e.g. `aarch64-apple-darwin`) have no
/// environment component. Anything past the third segment is folded into
/// `env`, so `arm-unknown-linux-gnueabihf` parses with `env = "gnueabihf"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetTriple {
    /// CPU architecture (e.g. `x86_64`).
    pub arch: String,
    /// Vendor (e.g. `unknown`, `apple`, `pc`).
    pub vendor: String,
    /// Operating system (e.g. `linux`, `darwin`).
    pub os: String,
    /// ABI / environment (e.g. `gnu`, `musl`), if present.
    pub env: Option<String>,
}

impl TargetTriple {
    /// Parse a triple string into its components.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(TripleError::Empty);
        }

        let segments: Vec<&str> = input.split('-').collect();
        for (index, segment) in segments.iter().enumerate() {
            if segment.is_empty() {
                return Err(TripleError::EmptySegment {
                    input: input.to_string(),
                    index,
                });
            }
        }
        if segments.len() < 3 {
            return Err(TripleError::TooFewSegments {
                input: input.to_string(),
                count: segments.len(),
            });
        }

        let env = if segments.len() > 3 {
            Some(segments[3..].join("-"))
        } else {
            None
        };

        Ok(TargetTriple {
            arch: segments[0].to_string(),
            vendor: segments[1].to_string(),
            os: segments[2].to_string(),
            env,
        })
    }

    /// Whether this triple names the reference platform.
    pub fn is_reference(&self) -> bool {
        self.to_string() == REFERENCE_TRIPLE
    }
}

impl FromStr for TargetTriple {
    type Err = TripleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TargetTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.arch, self.vendor, self.os)?;
        if let Some(ref env) = self.env {
            write!(f, "-{env}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reference_triple() {
        let triple = TargetTriple::parse(REFERENCE_TRIPLE).unwrap();
        assert_eq!(triple.arch, "x86_64");
        assert_eq!(triple.vendor, "unknown");
        assert_eq!(triple.os, "linux");
        assert_eq!(triple.env.as_deref(), Some("gnu"));
        assert!(triple.is_reference());
    }

    #[test]
    fn parse_three_segment_triple() {
        let triple = TargetTriple::parse("aarch64-apple-darwin").unwrap();
        assert_eq!(triple.arch, "aarch64");
        assert_eq!(triple.vendor, "apple");
        assert_eq!(triple.os, "darwin");
        assert!(triple.env.is_none());
        assert!(!triple.is_reference());
    }

    #[test]
    fn parse_folds_extra_segments_into_env() {
        let triple = TargetTriple::parse("arm-unknown-linux-gnueabihf").unwrap();
        assert_eq!(triple.env.as_deref(), Some("gnueabihf"));
    }

    #[test]
    fn display_round_trips() {
        for input in [
            "x86_64-unknown-linux-gnu",
            "aarch64-apple-darwin",
            "x86_64-pc-windows-msvc",
            "wasm32-unknown-unknown",
        ] {
            let triple: TargetTriple = input.parse().unwrap();
            assert_eq!(triple.to_string(), input);
        }
    }

    #[test]
    fn reject_empty_input() {
        assert!(matches!(
            TargetTriple::parse(""),
            Err(TripleError::Empty)
        ));
    }

    #[test]
    fn reject_too_few_segments() {
        let err = TargetTriple::parse("x86_64-linux").unwrap_err();
        assert!(matches!(err, TripleError::TooFewSegments { count: 2, .. }));
    }

    #[test]
    fn reject_empty_segment() {
        let err = TargetTriple::parse("x86_64--linux-gnu").unwrap_err();
        assert!(matches!(err, TripleError::EmptySegment { index: 1, .. }));
    }
}
