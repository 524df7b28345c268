//! Failure type carried by every `Outcome`

use crate::diagnostics::{describe, errno};
use crate::outcome::Classification;
use std::fmt;
use std::io;

/// Reason a fallible operation did not produce a value
#[derive(Debug)]
pub enum Failure {
    /// Divisor was zero
    DivideByZero,

    /// Quotient does not fit the result type
    Overflow { dividend: i64, divisor: i64 },

    /// Resource could not be acquired
    ResourceUnavailable {
        resource: String,
        source: io::Error,
    },
}

impl Failure {
    /// Wrap an I/O error raised while acquiring `resource`
    pub fn unavailable<S: Into<String>>(resource: S, source: io::Error) -> Self {
        Failure::ResourceUnavailable {
            resource: resource.into(),
            source,
        }
    }

    pub fn classification(&self) -> Classification {
        match self {
            Failure::DivideByZero => Classification::DivideByZero,
            Failure::Overflow { .. } => Classification::Overflow,
            Failure::ResourceUnavailable { .. } => Classification::ResourceUnavailable,
        }
    }

    /// Platform error code, if the failure came from the environment.
    ///
    /// Errors raised before reaching the OS get the errno matching their kind.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            Failure::ResourceUnavailable { source, .. } => Some(errno::code_for(source)),
            _ => None,
        }
    }

    /// Platform message for `os_code()`, or the error's own text when it
    /// never reached the OS
    pub fn description(&self) -> Option<String> {
        match self {
            Failure::ResourceUnavailable { source, .. } => Some(
                source
                    .raw_os_error()
                    .map(describe)
                    .unwrap_or_else(|| source.to_string()),
            ),
            _ => None,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::DivideByZero => write!(f, "division by zero"),
            Failure::Overflow { dividend, divisor } => {
                write!(f, "integer overflow dividing {dividend} by {divisor}")
            }
            Failure::ResourceUnavailable { resource, .. } => {
                let description = self.description().unwrap_or_default();
                write!(f, "{resource}: {description}")
            }
        }
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Failure::ResourceUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}
