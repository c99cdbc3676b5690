//! Tabpick Library
//!
//! This library provides the core functionality for the tabpick completion
//! helper. It can be used as a standalone library to embed the completion
//! protocol in other tools.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `completion`: Completion request parsing, matching and reply encoding
//! - `config`: Configuration management
//! - `error`: Error types and handling
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tabpick::{CompletionEngine, CompletionRequest, StaticCandidateProvider};
//!
//! let engine = CompletionEngine::new(Arc::new(StaticCandidateProvider::new()));
//! let request = CompletionRequest::new(
//!     vec!["cmd".to_string(), "t".to_string()],
//!     Vec::new(),
//!     1,
//! );
//! assert_eq!(engine.complete(&request), vec!["two", "three"]);
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use completion::{
    CANDIDATES, CompletionEngine, CompletionReply, CompletionRequest, StaticCandidateProvider,
};
pub use config::Config;
pub use error::{Result, TabpickError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
