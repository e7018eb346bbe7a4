//! `gantry.toml` manifest parsing and toolchain resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The optional `gantry.toml` manifest.
///
/// Everything in it is an override; a project without one runs with the
/// built-in reference triple and whatever cargo the environment provides.
/// The target itself never comes from the manifest: it is the one piece of
/// per-invocation configuration and always flows through the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GantryManifest {
    /// Matrix configuration.
    #[serde(default)]
    pub matrix: Option<MatrixConfig>,
    /// Toolchain configuration.
    #[serde(default)]
    pub toolchain: Option<ToolchainConfig>,
}

/// Matrix configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Reference triple override: the target whose matrix entry also runs
    /// both test passes.
    #[serde(default)]
    pub reference: Option<String>,
}

/// Toolchain configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainConfig {
    /// Path of the cargo executable to invoke.
    #[serde(default)]
    pub cargo: Option<String>,
}

impl GantryManifest {
    /// Search upward from `start_dir` for a `gantry.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join("gantry.toml");
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: GantryManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing gantry.toml")
    }

    /// The reference triple override, if configured.
    pub fn reference(&self) -> Option<&str> {
        self.matrix.as_ref().and_then(|m| m.reference.as_deref())
    }

    /// The cargo executable override, if configured.
    pub fn cargo_path(&self) -> Option<&str> {
        self.toolchain.as_ref().and_then(|t| t.cargo.as_deref())
    }
}

/// Resolve the cargo executable to invoke.
///
/// Precedence: manifest override, then the `CARGO` environment variable
/// (cargo sets it for its subprocesses), then `cargo` on the PATH. The
/// environment value is passed in by the caller so resolution stays a pure
/// function of its inputs.
pub fn resolve_cargo(manifest: Option<&GantryManifest>, env_cargo: Option<OsString>) -> PathBuf {
    if let Some(path) = manifest.and_then(|m| m.cargo_path()) {
        return PathBuf::from(path);
    }
    match env_cargo {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from("cargo"),
    }
}
