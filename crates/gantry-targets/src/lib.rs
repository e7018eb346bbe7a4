//! Target platform identification for the gantry CI driver.
//!
//! A target is named by its triple string (`arch-vendor-os[-env]`). The
//! driver forwards that string to the toolchain verbatim; this crate parses
//! it only for diagnostics and plan display, so a malformed triple never
//! blocks a run.

pub mod error;
pub mod known;
pub mod triple;

pub use error::{Result, TripleError};
pub use triple::{TargetTriple, REFERENCE_TRIPLE};
