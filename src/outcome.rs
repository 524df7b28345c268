//! Tagged result of a fallible operation

use crate::exceptions::Failure;
use serde::Serialize;
use std::fmt;

/// Result of a fallible operation: `Ok` carries the produced value,
/// `Err` carries the classified failure.
pub type Outcome<T> = std::result::Result<T, Failure>;

/// Stable classification of a failure, usable for programmatic branching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Divisor was zero
    DivideByZero,
    /// Quotient is not representable (most negative value divided by -1)
    Overflow,
    /// The environment could not provide the resource
    ResourceUnavailable,
}

impl Classification {
    /// Stable snake-case name
    pub fn name(self) -> &'static str {
        match self {
            Classification::DivideByZero => "divide_by_zero",
            Classification::Overflow => "overflow",
            Classification::ResourceUnavailable => "resource_unavailable",
        }
    }

    /// True when the caller could have detected the failure before calling.
    ///
    /// Environment-dependent failures can only be handled after the call.
    pub fn is_caller_preventable(self) -> bool {
        match self {
            Classification::DivideByZero | Classification::Overflow => true,
            Classification::ResourceUnavailable => false,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-call lifecycle: `Init -> Validating -> {Succeeded | Failed}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Validating,
    Succeeded,
    Failed,
}

impl Phase {
    /// Terminal phase reached by a finished call
    pub fn of<T>(outcome: &Outcome<T>) -> Phase {
        match outcome {
            Ok(_) => Phase::Succeeded,
            Err(_) => Phase::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Succeeded | Phase::Failed)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Init => "init",
            Phase::Validating => "validating",
            Phase::Succeeded => "succeeded",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}
