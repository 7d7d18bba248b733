//! Search queries and compiled match patterns
//!
//! A [`SearchQuery`] carries the canonical search terms and the match
//! flags; a [`CompiledPattern`] is the immutable regex value one term
//! compiles to under those flags. Multi-word searches compile one
//! pattern per token instead of mutating shared state, so a query can
//! be reused and shared freely.

use crate::error::AppError;
use crate::project::RepositoryScope;
use regex::{Regex, RegexBuilder};
use unicode_normalization::UnicodeNormalization;

/// Default number of results the presentation layer shows per locale.
pub const DEFAULT_RESULTS_LIMIT: usize = 200;

/// Normalize raw search input: NFKC then trim.
pub fn clean_search_input(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_string()
}

/// The regex source a term compiles to under the given flags.
///
/// Substring mode escapes the term so every character matches literally.
/// Perfect match anchors the raw term without escaping it, faithfully to
/// the historical behavior; broken regex syntax in the term then fails
/// at [`CompiledPattern::build`].
fn pattern_source(term: &str, whole_words: bool, perfect_match: bool) -> String {
    let body = if perfect_match {
        format!("^{}$", term)
    } else {
        regex::escape(term)
    };
    let boundary = if whole_words { r"\b" } else { "" };
    format!("{}{}{}", boundary, body, boundary)
}

/// An immutable compiled match predicate for one search term.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    whole_words: bool,
    case_insensitive: bool,
    perfect_match: bool,
}

impl CompiledPattern {
    /// Compile a term under the given flags. Only the perfect-match
    /// branch can fail; substring patterns are fully escaped.
    pub fn build(
        term: &str,
        whole_words: bool,
        case_insensitive: bool,
        perfect_match: bool,
    ) -> Result<Self, AppError> {
        let source = pattern_source(term, whole_words, perfect_match);
        let regex = RegexBuilder::new(&source)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| AppError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            source,
            regex,
            whole_words,
            case_insensitive,
            perfect_match,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The regex source, without flags.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn whole_words(&self) -> bool {
        self.whole_words
    }

    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn is_perfect_match(&self) -> bool {
        self.perfect_match
    }
}

/// A search request: terms, flags, target locales and repository scope.
///
/// Built fluently:
///
/// ```
/// use translens::search::SearchQuery;
///
/// let query = SearchQuery::new()
///     .terms("Bookmark this page")
///     .whole_words(true)
///     .case_insensitive(false)
///     .locales(&["en-US", "fr", "de"])
///     .limit(400);
/// assert_eq!(query.terms_str(), "Bookmark this page");
/// ```
#[derive(Debug, Clone)]
pub struct SearchQuery {
    locales: Vec<String>,
    terms: String,
    whole_words: bool,
    case_insensitive: bool,
    perfect_match: bool,
    scope: RepositoryScope,
    limit: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            locales: Vec::new(),
            terms: String::new(),
            whole_words: false,
            case_insensitive: true,
            perfect_match: false,
            scope: RepositoryScope::parse_or_default("aurora"),
            limit: DEFAULT_RESULTS_LIMIT,
        }
    }
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the searched string; kept trimmed and NFKC-normalized as the
    /// canonical reference.
    pub fn terms(mut self, terms: &str) -> Self {
        self.terms = clean_search_input(terms);
        self
    }

    /// Set the locales to return results for, duplicates removed and
    /// order preserved. Normal searches use two locales; a third drives
    /// the three-locale view. The ≤3 bound is the caller's concern.
    pub fn locales(mut self, locales: &[&str]) -> Self {
        let mut unique = Vec::new();
        for locale in locales {
            if !unique.iter().any(|l: &String| l == locale) {
                unique.push(locale.to_string());
            }
        }
        self.locales = unique;
        self
    }

    pub fn whole_words(mut self, flag: bool) -> Self {
        self.whole_words = flag;
        self
    }

    pub fn case_insensitive(mut self, flag: bool) -> Self {
        self.case_insensitive = flag;
        self
    }

    pub fn perfect_match(mut self, flag: bool) -> Self {
        self.perfect_match = flag;
        self
    }

    pub fn scope(mut self, scope: RepositoryScope) -> Self {
        self.scope = scope;
        self
    }

    /// Advisory display cap per locale; the engine never truncates.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn terms_str(&self) -> &str {
        &self.terms
    }

    pub fn locales_list(&self) -> &[String] {
        &self.locales
    }

    pub fn is_whole_words(&self) -> bool {
        self.whole_words
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn is_perfect_match(&self) -> bool {
        self.perfect_match
    }

    pub fn repository_scope(&self) -> RepositoryScope {
        self.scope
    }

    pub fn results_limit(&self) -> usize {
        self.limit
    }

    /// The regex source the canonical terms compile to.
    pub fn regex_source(&self) -> String {
        pattern_source(&self.terms, self.whole_words, self.perfect_match)
    }

    /// Compile the canonical terms.
    pub fn compile(&self) -> Result<CompiledPattern, AppError> {
        self.compile_term(&self.terms)
    }

    /// Compile one term under this query's flags. Used by the engine to
    /// build a fresh pattern per token of a multi-word search.
    pub fn compile_term(&self, term: &str) -> Result<CompiledPattern, AppError> {
        CompiledPattern::build(
            term,
            self.whole_words,
            self.case_insensitive,
            self.perfect_match,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{Repository, RepositoryScope};

    #[test]
    fn test_default_query() {
        let query = SearchQuery::new();
        assert!(query.locales_list().is_empty());
        assert_eq!(query.terms_str(), "");
        assert_eq!(query.regex_source(), "");
        assert!(query.is_case_insensitive());
        assert!(!query.is_whole_words());
        assert!(!query.is_perfect_match());
        assert_eq!(
            query.repository_scope(),
            RepositoryScope::One(Repository::Aurora)
        );
        assert_eq!(query.results_limit(), 200);
    }

    #[test]
    fn test_terms_are_trimmed() {
        let query = SearchQuery::new().terms(" foobar ");
        assert_eq!(query.terms_str(), "foobar");
        assert_eq!(query.regex_source(), "foobar");
    }

    #[test]
    fn test_locales_deduplicated_order_preserved() {
        let query = SearchQuery::new().locales(&["en-US", "fr", "fr"]);
        assert_eq!(query.locales_list(), &["en-US", "fr"]);
    }

    #[test]
    fn test_whole_words_wraps_in_boundaries() {
        let query = SearchQuery::new()
            .terms("A new hope")
            .whole_words(true)
            .case_insensitive(false);
        assert_eq!(query.regex_source(), r"\bA new hope\b");

        let pattern = query.compile().unwrap();
        assert!(pattern.is_match("A new hope rises"));
        assert!(!pattern.is_match("a new hope"));
        assert!(!pattern.is_match("A new hopeful"));
    }

    #[test]
    fn test_perfect_match_empty_term_matches_only_empty() {
        let query = SearchQuery::new()
            .perfect_match(true)
            .case_insensitive(false);
        assert_eq!(query.regex_source(), "^$");

        let pattern = query.compile().unwrap();
        assert!(pattern.is_match(""));
        assert!(!pattern.is_match("a"));
    }

    #[test]
    fn test_perfect_match_is_anchored_unescaped() {
        let query = SearchQuery::new()
            .terms("Return of the jedi")
            .perfect_match(true);
        assert_eq!(query.regex_source(), "^Return of the jedi$");

        let pattern = query.compile().unwrap();
        assert!(pattern.is_match("return of the jedi"));
        assert!(!pattern.is_match("The Return of the jedi"));
    }

    #[test]
    fn test_substring_mode_neutralizes_metacharacters() {
        let query = SearchQuery::new().terms(r"a.b*c(");
        let pattern = query.compile().unwrap();
        assert!(pattern.is_match("xa.b*c(y"));
        assert!(!pattern.is_match("aXbbbc"));
    }

    #[test]
    fn test_adversarial_substring_input_never_fails() {
        for terms in [r"((((", r"a{1,", r"[z-a]", r"\", r"(?P<"] {
            let query = SearchQuery::new().terms(terms);
            assert!(query.compile().is_ok(), "failed on {:?}", terms);
        }
    }

    #[test]
    fn test_perfect_match_broken_syntax_is_an_error() {
        let query = SearchQuery::new().terms("((((").perfect_match(true);
        assert!(matches!(query.compile(), Err(AppError::InvalidPattern(_))));
    }

    #[test]
    fn test_case_insensitive_unicode() {
        let query = SearchQuery::new().terms("FENÊTRE");
        let pattern = query.compile().unwrap();
        assert!(pattern.is_match("Nouvelle fenêtre"));
    }

    #[test]
    fn test_flag_changes_recompile_idempotently() {
        let query = SearchQuery::new()
            .terms("A new hope")
            .whole_words(true)
            .perfect_match(false)
            .case_insensitive(false);
        assert_eq!(query.regex_source(), r"\bA new hope\b");

        let query = query
            .terms("Return of the jedi")
            .whole_words(false)
            .perfect_match(true)
            .case_insensitive(true);
        assert_eq!(query.regex_source(), "^Return of the jedi$");
        assert_eq!(query.regex_source(), "^Return of the jedi$");
    }

    #[test]
    fn test_pattern_introspection() {
        let pattern = CompiledPattern::build("word", true, false, false).unwrap();
        assert_eq!(pattern.as_str(), r"\bword\b");
        assert!(pattern.whole_words());
        assert!(!pattern.case_insensitive());
        assert!(!pattern.is_perfect_match());
    }
}
