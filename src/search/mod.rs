//! Multi-locale string search
//!
//! Query compilation and execution: a free-text query plus match flags
//! becomes a set of immutable compiled patterns applied across the
//! string tables of the requested locales.

pub mod engine;
pub mod query;

pub use engine::{unique_words, SearchEngine, SearchResults};
pub use query::{clean_search_input, CompiledPattern, SearchQuery, DEFAULT_RESULTS_LIMIT};
