//! Error handling module for tabpick.
//!
//! This module provides the error types used across the crate:
//! - A single top-level [`TabpickError`] wrapping the specific kinds
//! - A crate-wide [`Result`] alias
//!
//! The completion path never surfaces errors to the invoking shell; request
//! failures are absorbed into an empty suggestion list by the completion
//! engine. Errors from the other subcommands (`script`, `config`) propagate
//! normally.

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, RequestError, Result, TabpickError};
