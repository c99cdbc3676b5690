//! Completion filtering for tabpick
//!
//! This module implements the one operation the tool exists for: given the
//! word list and cursor index supplied by the shell, return every candidate
//! whose text starts with the word under the cursor.
//!
//! # Architecture
//!
//! - **CompletionRequest**: the (words, eval words, index) triple parsed
//!   from the environment
//! - **CandidateProvider**: source of completion candidates
//! - **CompletionEngine**: resolves the target word and applies the filter
//! - **CompletionReply**: BEL-joined serialization of the matches
//!
//! # Examples
//!
//! ```
//! use tabpick::completion::{CompletionEngine, CompletionRequest, StaticCandidateProvider};
//! use std::sync::Arc;
//!
//! let engine = CompletionEngine::new(Arc::new(StaticCandidateProvider::new()));
//! let request = CompletionRequest::new(
//!     vec!["cmd".to_string(), "t".to_string()],
//!     Vec::new(),
//!     1,
//! );
//!
//! assert_eq!(engine.complete(&request), vec!["two", "three"]);
//! ```

mod candidates;
mod engine;
mod reply;
mod request;

pub use candidates::{CANDIDATES, CandidateProvider, StaticCandidateProvider};
pub use engine::CompletionEngine;
pub use reply::CompletionReply;
pub use request::{
    COMP_CWORD_VAR, COMP_WORDS_VAR, CompletionRequest, EVAL_WORDS_VAR, WORD_DELIMITER,
};

/// Tests in this subsystem that touch the process environment must hold
/// this lock; `COMP_*` variables are process-global and the test runner is
/// multi-threaded.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
