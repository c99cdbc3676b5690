//! Completion engine - orchestrates the completion flow
//!
//! The engine resolves the target word from a request and asks the provider
//! for matching candidates. Its env-reading entry point is fail-soft: a
//! completion helper must never crash or hang the interactive shell, so any
//! failure to resolve the target word yields an empty suggestion list.

use std::sync::Arc;

use tracing::{debug, trace};

use super::candidates::CandidateProvider;
use super::request::CompletionRequest;

/// Main completion engine.
pub struct CompletionEngine {
    /// Candidate provider for fetching suggestions
    provider: Arc<dyn CandidateProvider>,
}

impl CompletionEngine {
    /// Create a new completion engine.
    ///
    /// # Arguments
    /// * `provider` - Candidate provider for fetching suggestions
    pub fn new(provider: Arc<dyn CandidateProvider>) -> Self {
        Self { provider }
    }

    /// Complete a parsed request.
    ///
    /// # Returns
    /// * `Vec<String>` - Candidates starting with the target word, in
    ///   candidate-set order; empty when the index is out of range
    pub fn complete(&self, request: &CompletionRequest) -> Vec<String> {
        trace!(
            words = request.words().len(),
            eval_words = request.eval_words().len(),
            index = request.index(),
            "resolving completion request"
        );

        match request.target_word() {
            Some(word) => self.provider.candidates(word),
            None => {
                debug!(
                    index = request.index(),
                    words = request.words().len(),
                    "completion index out of range"
                );
                Vec::new()
            }
        }
    }

    /// Complete against the process environment, absorbing failures.
    ///
    /// This is the path the shell invokes. A malformed or missing
    /// environment produces an empty list, never an error; the failure is
    /// only visible at debug level on stderr.
    pub fn complete_from_env(&self) -> Vec<String> {
        match CompletionRequest::from_env() {
            Ok(request) => self.complete(&request),
            Err(e) => {
                debug!("unusable completion environment: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::request::{COMP_CWORD_VAR, COMP_WORDS_VAR, EVAL_WORDS_VAR};
    use crate::completion::{ENV_LOCK, StaticCandidateProvider};
    use std::env;

    fn create_test_engine() -> CompletionEngine {
        CompletionEngine::new(Arc::new(StaticCandidateProvider::new()))
    }

    fn request(words: &[&str], index: usize) -> CompletionRequest {
        CompletionRequest::new(
            words.iter().map(|w| w.to_string()).collect(),
            Vec::new(),
            index,
        )
    }

    #[test]
    fn test_complete_unique_prefix() {
        let engine = create_test_engine();
        assert_eq!(engine.complete(&request(&["cmd", "on"], 1)), vec!["one"]);
    }

    #[test]
    fn test_complete_shared_prefix() {
        let engine = create_test_engine();
        assert_eq!(
            engine.complete(&request(&["cmd", "t"], 1)),
            vec!["two", "three"]
        );
    }

    #[test]
    fn test_complete_no_match() {
        let engine = create_test_engine();
        assert!(engine.complete(&request(&["cmd", "x"], 1)).is_empty());
    }

    #[test]
    fn test_complete_out_of_range_index() {
        let engine = create_test_engine();
        assert!(engine.complete(&request(&["cmd"], 5)).is_empty());
    }

    #[test]
    fn test_complete_empty_word_list() {
        let engine = create_test_engine();
        assert!(engine.complete(&request(&[], 0)).is_empty());
    }

    #[test]
    fn test_complete_empty_prefix_matches_all() {
        let engine = create_test_engine();
        assert_eq!(
            engine.complete(&request(&["cmd", ""], 1)),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn test_complete_ignores_eval_words() {
        let engine = create_test_engine();
        let with_eval = CompletionRequest::new(
            vec!["cmd".to_string(), "t".to_string()],
            vec!["something".to_string(), "else".to_string()],
            1,
        );
        assert_eq!(engine.complete(&with_eval), vec!["two", "three"]);
    }

    #[test]
    fn test_complete_is_idempotent() {
        let engine = create_test_engine();
        let req = request(&["cmd", "t"], 1);
        assert_eq!(engine.complete(&req), engine.complete(&req));
    }

    #[test]
    fn test_complete_from_env() {
        let engine = create_test_engine();
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::set_var(COMP_WORDS_VAR, "cmd\x07on");
            env::set_var(EVAL_WORDS_VAR, "");
            env::set_var(COMP_CWORD_VAR, "1");
        }

        assert_eq!(engine.complete_from_env(), vec!["one"]);

        unsafe {
            env::remove_var(COMP_WORDS_VAR);
            env::remove_var(EVAL_WORDS_VAR);
            env::remove_var(COMP_CWORD_VAR);
        }
    }

    #[test]
    fn test_complete_from_env_absorbs_missing_vars() {
        let engine = create_test_engine();
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::remove_var(COMP_WORDS_VAR);
            env::remove_var(EVAL_WORDS_VAR);
            env::remove_var(COMP_CWORD_VAR);
        }

        assert!(engine.complete_from_env().is_empty());
    }

    #[test]
    fn test_complete_from_env_absorbs_bad_index() {
        let engine = create_test_engine();
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::set_var(COMP_WORDS_VAR, "cmd\x07on");
            env::set_var(EVAL_WORDS_VAR, "");
            env::set_var(COMP_CWORD_VAR, "-1");
        }

        assert!(engine.complete_from_env().is_empty());

        unsafe {
            env::remove_var(COMP_WORDS_VAR);
            env::remove_var(EVAL_WORDS_VAR);
            env::remove_var(COMP_CWORD_VAR);
        }
    }
}
