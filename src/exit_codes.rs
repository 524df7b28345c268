//! Standard exit codes for the demo binaries
//!
//! Every failure maps to a non-zero code so scripts can tell success from
//! failure without parsing output.

use crate::outcome::Classification;

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// Invalid command-line arguments
pub const EXIT_INVALID_ARGS: i32 = 105;

/// I/O error (file not found, permission denied, disk error)
pub const EXIT_IO_ERROR: i32 = 106;

/// Precondition violated by the caller (zero divisor, overflow)
pub const EXIT_PRECONDITION_ERROR: i32 = 111;

/// Exit code for a failure of the given classification
pub fn exit_code_for(classification: Classification) -> i32 {
    match classification {
        Classification::DivideByZero | Classification::Overflow => EXIT_PRECONDITION_ERROR,
        Classification::ResourceUnavailable => EXIT_IO_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_are_nonzero() {
        for classification in [
            Classification::DivideByZero,
            Classification::Overflow,
            Classification::ResourceUnavailable,
        ] {
            assert_ne!(exit_code_for(classification), EXIT_SUCCESS);
        }
    }
}
