//! Plan computation: which steps run for a given target.

use std::fmt;

use serde::{Deserialize, Serialize};

use gantry_targets::REFERENCE_TRIPLE;

use crate::step::Step;

/// The ordered step sequence for one matrix entry.
///
/// Computed once before any execution starts; execution never reorders or
/// extends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    /// Compute the plan for `target` against the built-in reference triple.
    pub fn for_target(target: &str) -> Self {
        Self::with_reference(target, REFERENCE_TRIPLE)
    }

    /// Compute the plan for `target` against an explicit reference triple.
    ///
    /// The check step always comes first. The debug and release test passes
    /// are appended only when `target` equals `reference` exactly; any other
    /// value, including the empty string, checks only.
    pub fn with_reference(target: &str, reference: &str) -> Self {
        let mut steps = vec![Step::Check];
        if target == reference {
            steps.push(Step::Test { release: false });
            steps.push(Step::Test { release: true });
        }
        Plan { steps }
    }

    /// The steps in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps in the plan.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// A plan is never empty; this exists for the `len` pairing.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for step in &self.steps {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{step}")?;
            first = false;
        }
        Ok(())
    }
}
