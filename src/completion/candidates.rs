//! Candidate provider for completion suggestions
//!
//! This module provides the trait and implementation for fetching the
//! candidates a completion request can be answered with. The candidate set
//! is a build-time constant; the trait exists so the engine does not care
//! where candidates come from.

/// The candidate set. Ordered, immutable, known at build time.
pub const CANDIDATES: &[&str] = &["one", "two", "three"];

/// Trait for providing completion candidates.
pub trait CandidateProvider: Send + Sync {
    /// Candidates whose text starts with `prefix`, in canonical order.
    ///
    /// An empty prefix matches every candidate. The match is exact and
    /// case-sensitive; no normalization is applied.
    fn candidates(&self, prefix: &str) -> Vec<String>;
}

/// Provider backed by the static candidate set.
pub struct StaticCandidateProvider {
    entries: &'static [&'static str],
}

impl StaticCandidateProvider {
    /// Create a provider over [`CANDIDATES`].
    pub fn new() -> Self {
        Self {
            entries: CANDIDATES,
        }
    }

    /// Create a provider over an arbitrary static slice.
    #[cfg(test)]
    pub fn with_entries(entries: &'static [&'static str]) -> Self {
        Self { entries }
    }
}

impl Default for StaticCandidateProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateProvider for StaticCandidateProvider {
    fn candidates(&self, prefix: &str) -> Vec<String> {
        // Preserve the canonical order of the set; suggestions are not
        // re-sorted.
        self.entries
            .iter()
            .filter(|entry| entry.starts_with(prefix))
            .map(|entry| entry.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prefix_matches_all() {
        let provider = StaticCandidateProvider::new();
        assert_eq!(provider.candidates(""), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_unique_prefix() {
        let provider = StaticCandidateProvider::new();
        assert_eq!(provider.candidates("on"), vec!["one"]);
    }

    #[test]
    fn test_shared_prefix_keeps_order() {
        let provider = StaticCandidateProvider::new();
        assert_eq!(provider.candidates("t"), vec!["two", "three"]);
    }

    #[test]
    fn test_no_match() {
        let provider = StaticCandidateProvider::new();
        assert!(provider.candidates("x").is_empty());
    }

    #[test]
    fn test_full_word_matches_itself() {
        let provider = StaticCandidateProvider::new();
        assert_eq!(provider.candidates("three"), vec!["three"]);
    }

    #[test]
    fn test_prefix_longer_than_candidate() {
        let provider = StaticCandidateProvider::new();
        assert!(provider.candidates("threes").is_empty());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let provider = StaticCandidateProvider::new();
        assert!(provider.candidates("ON").is_empty());
        assert!(provider.candidates("One").is_empty());
    }

    #[test]
    fn test_custom_entries_preserve_declaration_order() {
        let provider =
            StaticCandidateProvider::with_entries(&["zeta", "zebra", "alpha", "zenith"]);
        assert_eq!(provider.candidates("ze"), vec!["zeta", "zebra", "zenith"]);
    }
}
