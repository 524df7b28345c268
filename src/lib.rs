//! Fallible - a uniform contract for operations that can fail
//!
//! Every operation returns an [`Outcome`]: the produced value, or a
//! [`Failure`] carrying a stable [`Classification`], an optional platform
//! error code and a human-readable description. The success value cannot
//! be read without first matching the tag.
//!
//! # Example
//!
//! ```
//! use fallible::{Classification, divide, report};
//!
//! match divide(1, 0) {
//!     Ok(result) => println!("result: {result}"),
//!     Err(failure) => {
//!         assert_eq!(failure.classification(), Classification::DivideByZero);
//!         assert_eq!(report("Error", &failure), "Error: division by zero");
//!     }
//! }
//! ```

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,

    // All warnings must be fixed
    warnings,
)]
#![warn(
    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Code clarity and maintainability
    clippy::cognitive_complexity,
    clippy::type_complexity,

    // Best practices
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::single_match_else,
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod diagnostics;
pub mod exceptions;
pub mod exit_codes;
pub mod logger;
pub mod ops;
pub mod outcome;
pub mod version;

pub use diagnostics::{Diagnostic, describe, report};
pub use exceptions::Failure;
pub use ops::{Resource, divide, open_resource, with_resource};
pub use outcome::{Classification, Outcome, Phase};
