//! Search execution across locales and repositories
//!
//! Runs a [`SearchQuery`] against the string tables of its locales.
//! Multi-word searches AND-intersect per token, longest token first:
//! long words are the most selective, so the candidate set shrinks
//! fastest and later tokens scan fewer strings. The composition is
//! commutative, the ordering only saves regex evaluations.

use super::query::SearchQuery;
use crate::error::AppError;
use crate::project::{locale_in_context, Repository};
use crate::source::StringTableSource;
use crate::StringTable;
use std::collections::BTreeMap;
use tracing::debug;

/// Per-locale search results, keyed by the requested locale codes. Every
/// requested locale is present, with an empty table when nothing matched.
pub type SearchResults = BTreeMap<String, StringTable>;

/// Split a multi-word search into its distinct tokens, longest first.
///
/// Tokens are split on single spaces, empty tokens from repeated
/// whitespace are dropped, duplicates keep their first occurrence, and
/// the length sort is stable so equal-length tokens keep their original
/// relative order.
pub fn unique_words(terms: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for word in terms.split(' ') {
        if !word.is_empty() && !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    }
    words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    words
}

/// Executes search queries against a string-table source.
pub struct SearchEngine<'a> {
    source: &'a dyn StringTableSource,
}

impl<'a> SearchEngine<'a> {
    pub fn new(source: &'a dyn StringTableSource) -> Self {
        Self { source }
    }

    /// One repository pass: match the query against every requested
    /// locale's table in `repository`.
    ///
    /// The result carries the complete match set; the query's limit is
    /// display advice for the caller, never applied here.
    pub fn run(&self, query: &SearchQuery, repository: Repository) -> Result<SearchResults, AppError> {
        let words = if query.is_perfect_match() {
            vec![query.terms_str().to_string()]
        } else {
            unique_words(query.terms_str())
        };

        let mut results = SearchResults::new();
        for locale in query.locales_list() {
            let matches = if words.is_empty() {
                // Blank search: never matches everything
                StringTable::new()
            } else {
                self.search_locale(query, &words, locale, repository)?
            };
            results.insert(locale.clone(), matches);
        }

        Ok(results)
    }

    /// Run the query over its repository scope: a single pass for one
    /// repository, or every supported repository with per-locale union
    /// for the global scope.
    pub fn run_scoped(&self, query: &SearchQuery) -> Result<SearchResults, AppError> {
        let mut merged = SearchResults::new();
        for repository in query.repository_scope().repositories() {
            for (locale, table) in self.run(query, repository)? {
                merged.entry(locale).or_default().extend(table);
            }
        }
        Ok(merged)
    }

    fn search_locale(
        &self,
        query: &SearchQuery,
        words: &[String],
        locale: &str,
        repository: Repository,
    ) -> Result<StringTable, AppError> {
        let effective = locale_in_context(locale, repository);
        let mut candidates = self.source.load(&effective, repository);
        debug!(
            "Searching {} candidates for {} in {}/{}",
            candidates.len(),
            query.terms_str(),
            effective,
            repository
        );

        for word in words {
            if candidates.is_empty() {
                break;
            }
            let pattern = query.compile_term(word)?;
            candidates.retain(|_, text| pattern.is_match(text));
        }

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::RepositoryScope;
    use crate::source::MemorySource;

    fn table(entries: &[(&str, &str)]) -> StringTable {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sample_source() -> MemorySource {
        let mut source = MemorySource::new();
        source.insert(
            "fr",
            Repository::Central,
            table(&[
                (
                    "browser/chrome/browser/downloads/downloads.dtd:cmd.showMac.label",
                    "Ouvrir dans le Finder",
                ),
                (
                    "browser/chrome/browser/browser.dtd:homeButton.label",
                    "Accueil",
                ),
            ]),
        );
        source.insert(
            "en-US",
            Repository::Central,
            table(&[
                (
                    "browser/chrome/browser/downloads/downloads.dtd:cmd.showMac.label",
                    "Show in Finder",
                ),
                (
                    "browser/chrome/browser/browser.dtd:homeButton.label",
                    "Home",
                ),
            ]),
        );
        source
    }

    #[test]
    fn test_unique_words_sorted_by_length_stable() {
        assert_eq!(unique_words("the quick brown fox"), ["quick", "brown", "the", "fox"]);
    }

    #[test]
    fn test_unique_words_collapses_whitespace_and_duplicates() {
        assert_eq!(unique_words("le  le chat   chat"), ["chat", "le"]);
        assert!(unique_words("").is_empty());
        assert!(unique_words("   ").is_empty());
    }

    #[test]
    fn test_multi_word_search_per_locale() {
        let source = sample_source();
        let engine = SearchEngine::new(&source);
        let query = SearchQuery::new()
            .terms("Ouvrir dans le Finder")
            .locales(&["en-US", "fr"]);

        let results = engine.run(&query, Repository::Central).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results["en-US"].is_empty());
        assert_eq!(
            results["fr"],
            table(&[(
                "browser/chrome/browser/downloads/downloads.dtd:cmd.showMac.label",
                "Ouvrir dans le Finder",
            )])
        );
    }

    #[test]
    fn test_blank_search_matches_nothing() {
        let source = sample_source();
        let engine = SearchEngine::new(&source);
        let query = SearchQuery::new().locales(&["en-US", "fr"]);

        let results = engine.run(&query, Repository::Central).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results["en-US"].is_empty());
        assert!(results["fr"].is_empty());
    }

    #[test]
    fn test_unmatched_terms_yield_empty_per_locale() {
        let source = sample_source();
        let engine = SearchEngine::new(&source);
        let query = SearchQuery::new()
            .terms("A new hope")
            .locales(&["en-US", "fr"]);

        let results = engine.run(&query, Repository::Central).unwrap();
        assert!(results["en-US"].is_empty());
        assert!(results["fr"].is_empty());
    }

    #[test]
    fn test_perfect_match_skips_tokenization() {
        let source = sample_source();
        let engine = SearchEngine::new(&source);
        let query = SearchQuery::new()
            .terms("Show in Finder")
            .perfect_match(true)
            .locales(&["en-US"]);

        let results = engine.run(&query, Repository::Central).unwrap();
        assert_eq!(results["en-US"].len(), 1);

        // Substring of a longer string no longer matches when anchored
        let query = SearchQuery::new()
            .terms("Finder")
            .perfect_match(true)
            .locales(&["en-US"]);
        assert!(engine.run(&query, Repository::Central).unwrap()["en-US"].is_empty());
    }

    #[test]
    fn test_limit_is_advisory_not_applied() {
        let source = sample_source();
        let engine = SearchEngine::new(&source);
        let query = SearchQuery::new()
            .terms("i")
            .locales(&["fr"])
            .limit(1);

        // Both French strings contain an i; the limit must not truncate
        let results = engine.run(&query, Repository::Central).unwrap();
        assert_eq!(results["fr"].len(), 2);
    }

    #[test]
    fn test_global_scope_merges_repositories() {
        let mut source = sample_source();
        source.insert(
            "fr",
            Repository::Gaia,
            table(&[("apps/system/system.properties:finder.open", "Ouvrir le Finder")]),
        );

        let engine = SearchEngine::new(&source);
        let query = SearchQuery::new()
            .terms("Ouvrir")
            .locales(&["fr"])
            .scope(RepositoryScope::Global);

        let results = engine.run_scoped(&query).unwrap();
        assert_eq!(results["fr"].len(), 2);
        assert!(results["fr"].contains_key("apps/system/system.properties:finder.open"));
    }

    #[test]
    fn test_locale_normalized_per_repository() {
        let mut source = MemorySource::new();
        // Gaia ships bare "es", not "es-ES"
        source.insert(
            "es",
            Repository::Gaia,
            table(&[("apps/browser/browser.properties:open", "Abrir")]),
        );

        let engine = SearchEngine::new(&source);
        let query = SearchQuery::new().terms("Abrir").locales(&["es-ES"]);

        let results = engine.run(&query, Repository::Gaia).unwrap();
        assert_eq!(results["es-ES"].len(), 1);
    }
}
