//! Completion request parsing
//!
//! A completion request is handed over by the shell through three
//! environment variables rather than argv, so that word boundaries survive
//! arbitrary quoting:
//!
//! - `COMP_WORDS`: the full command line, words joined by the BEL delimiter
//! - `EVAL_WORDS`: the evaluated word list in the same format (reserved,
//!   not consulted by the filter)
//! - `COMP_CWORD`: zero-based index of the word being completed

use std::env;

use crate::error::RequestError;

/// Delimiter used to join and split word lists on the wire.
///
/// BEL cannot appear in normal shell tokens, so it is safe to use as a
/// separator for words that may themselves contain spaces.
pub const WORD_DELIMITER: char = '\x07';

/// Environment variable carrying the command-line word list.
pub const COMP_WORDS_VAR: &str = "COMP_WORDS";

/// Environment variable carrying the evaluated word list.
pub const EVAL_WORDS_VAR: &str = "EVAL_WORDS";

/// Environment variable carrying the index of the word being completed.
pub const COMP_CWORD_VAR: &str = "COMP_CWORD";

/// A single completion request as handed over by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Words currently on the command line.
    words: Vec<String>,

    /// Evaluated words. Reserved for future use; never consulted by the
    /// filtering logic.
    eval_words: Vec<String>,

    /// Zero-based index of the word being completed.
    index: usize,
}

impl CompletionRequest {
    /// Create a request from already-split parts.
    pub fn new(words: Vec<String>, eval_words: Vec<String>, index: usize) -> Self {
        Self {
            words,
            eval_words,
            index,
        }
    }

    /// Build a request from the process environment.
    ///
    /// # Returns
    /// * `Result<CompletionRequest, RequestError>` - Parsed request, or the
    ///   single recoverable error class (missing variable, malformed index)
    pub fn from_env() -> Result<Self, RequestError> {
        let words = split_words(&read_var(COMP_WORDS_VAR)?);
        let eval_words = split_words(&read_var(EVAL_WORDS_VAR)?);
        let raw_index = read_var(COMP_CWORD_VAR)?;
        let index = raw_index
            .trim()
            .parse::<usize>()
            .map_err(|_| RequestError::InvalidIndex(raw_index.clone()))?;

        Ok(Self::new(words, eval_words, index))
    }

    /// The word the cursor is on, if the index is in range.
    ///
    /// This is the bounds-checked seam that replaces a catch-all: every
    /// out-of-range index becomes `None` here, and the engine maps `None`
    /// to an empty suggestion list.
    pub fn target_word(&self) -> Option<&str> {
        self.words.get(self.index).map(String::as_str)
    }

    /// Words currently on the command line.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Evaluated words (reserved).
    pub fn eval_words(&self) -> &[String] {
        &self.eval_words
    }

    /// Zero-based index of the word being completed.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Read one environment variable, mapping absence to [`RequestError`].
fn read_var(name: &str) -> Result<String, RequestError> {
    env::var(name).map_err(|_| RequestError::MissingVariable(name.to_string()))
}

/// Split a BEL-delimited word list.
///
/// An empty string means an empty word list, not a list containing one
/// empty word; every index is out of range for it.
fn split_words(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(WORD_DELIMITER).map(str::to_string).collect()
}
