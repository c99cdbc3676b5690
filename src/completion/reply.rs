//! Completion reply serialization
//!
//! The invoking shell splits stdout on the BEL delimiter to recover the
//! individual suggestions, so the reply is always exactly one line: the
//! matches joined by BEL, or an empty line when nothing matched.

use std::io::{self, Write};

use super::request::WORD_DELIMITER;

/// The outcome of a completion request, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReply {
    matches: Vec<String>,
}

impl CompletionReply {
    /// Wrap a list of matches.
    pub fn new(matches: Vec<String>) -> Self {
        Self { matches }
    }

    /// The matched candidates, in candidate-set order.
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Encode the reply as a BEL-joined string (no trailing newline).
    pub fn encode(&self) -> String {
        self.matches.join(&WORD_DELIMITER.to_string())
    }

    /// Write the encoded reply plus a newline.
    ///
    /// # Arguments
    /// * `writer` - Destination, normally stdout
    ///
    /// # Returns
    /// * `io::Result<()>` - Success or the underlying write error
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self.encode())
    }
}

impl From<Vec<String>> for CompletionReply {
    fn from(matches: Vec<String>) -> Self {
        Self::new(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(matches: &[&str]) -> CompletionReply {
        CompletionReply::new(matches.iter().map(|m| m.to_string()).collect())
    }

    #[test]
    fn test_encode_single_match() {
        assert_eq!(reply(&["one"]).encode(), "one");
    }

    #[test]
    fn test_encode_joins_with_bel() {
        assert_eq!(reply(&["two", "three"]).encode(), "two\x07three");
    }

    #[test]
    fn test_encode_empty() {
        let r = reply(&[]);
        assert!(r.is_empty());
        assert_eq!(r.encode(), "");
    }

    #[test]
    fn test_write_to_appends_newline() {
        let mut buf = Vec::new();
        reply(&["two", "three"]).write_to(&mut buf).unwrap();
        assert_eq!(buf, b"two\x07three\n");
    }

    #[test]
    fn test_write_to_empty_is_bare_newline() {
        let mut buf = Vec::new();
        reply(&[]).write_to(&mut buf).unwrap();
        assert_eq!(buf, b"\n");
    }

    #[test]
    fn test_from_vec() {
        let r: CompletionReply = vec!["one".to_string()].into();
        assert_eq!(r.matches(), &["one".to_string()]);
    }
}
