//! Human-readable views of a failure
//!
//! `describe` and `report` are the strerror/perror analogues. `Diagnostic`
//! bundles the classification, platform code and messages into one
//! serialisable value so they cannot drift apart.

pub mod errno;

use crate::exceptions::Failure;
use crate::outcome::Classification;
use serde::Serialize;
use std::io;

/// Platform message for an error code, without the "(os error N)" suffix
pub fn describe(code: i32) -> String {
    let message = io::Error::from_raw_os_error(code).to_string();
    let suffix = format!(" (os error {code})");
    match message.strip_suffix(&suffix) {
        Some(stripped) => stripped.to_string(),
        None => message,
    }
}

/// Format `"<context>: <message>"` for display
pub fn report(context: &str, failure: &Failure) -> String {
    let message = failure
        .description()
        .unwrap_or_else(|| failure.to_string());
    format!("{context}: {message}")
}

/// Serialisable view of a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub classification: Classification,
    pub caller_preventable: bool,
    pub code: Option<i32>,
    pub message: String,
    pub description: Option<String>,
}

impl From<&Failure> for Diagnostic {
    fn from(failure: &Failure) -> Self {
        let classification = failure.classification();
        Diagnostic {
            classification,
            caller_preventable: classification.is_caller_preventable(),
            code: failure.os_code(),
            message: failure.to_string(),
            description: failure.description(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_is_idempotent() {
        assert_eq!(describe(2), describe(2));
        assert!(!describe(2).is_empty());
        assert!(!describe(2).contains("os error"));
    }

    #[cfg(unix)]
    #[test]
    fn test_describe_distinguishes_codes() {
        assert_ne!(describe(libc::ENOENT), describe(libc::EACCES));
    }

    #[test]
    fn test_report_divide_by_zero() {
        assert_eq!(
            report("Error", &Failure::DivideByZero),
            "Error: division by zero"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_report_uses_platform_description() {
        let failure = Failure::unavailable("a.txt", io::Error::from_raw_os_error(libc::ENOENT));
        assert_eq!(
            report("Error", &failure),
            format!("Error: {}", describe(libc::ENOENT))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_diagnostic_json() {
        let failure = Failure::unavailable("a.txt", io::Error::from_raw_os_error(libc::ENOENT));
        let diagnostic = Diagnostic::from(&failure);

        assert_eq!(diagnostic.classification, Classification::ResourceUnavailable);
        assert!(!diagnostic.caller_preventable);
        assert_eq!(diagnostic.code, Some(libc::ENOENT));

        let value = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(value["classification"], "resource_unavailable");
        assert_eq!(value["code"], libc::ENOENT);
        assert_eq!(value["message"], failure.to_string());
    }

    #[test]
    fn test_diagnostic_for_precondition() {
        let diagnostic = Diagnostic::from(&Failure::DivideByZero);
        assert!(diagnostic.caller_preventable);
        assert_eq!(diagnostic.code, None);
        assert_eq!(diagnostic.message, "division by zero");
    }
}
