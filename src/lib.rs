//! translens: find and compare localized strings across locales and
//! source repositories.
//!
//! The crate exposes two cooperating engines:
//! - string selection: [`ProductSelection`] derives the in-scope string
//!   table for a `(product, locale, repository)` triple, with access-key
//!   and devtools views, memoized in a process-wide [`Cache`];
//! - search: [`search::SearchEngine`] runs a [`search::SearchQuery`]
//!   across one or all repositories and returns matches per locale.
//!
//! Presentation (routing, rendering, preferences) lives outside this
//! crate; it consumes the maps returned here.

use std::collections::BTreeMap;

pub mod cache;
pub mod cli;
pub mod error;
pub mod filter;
pub mod product;
pub mod project;
pub mod search;
pub mod selection;
pub mod source;

/// One translatable string key: `"<path/within/repository>:<string-id>"`.
pub type Entity = String;

/// Entity → localized text for one `(locale, repository)` pair. An empty
/// text value means the string is missing and never appears in a
/// materialized view.
pub type StringTable = BTreeMap<Entity, String>;

pub use cache::{Cache, CacheKey, CacheOp};
pub use error::AppError;
pub use filter::{filter_entities, Anchor};
pub use product::Product;
pub use project::{locale_in_context, Repository, RepositoryScope};
pub use search::{SearchEngine, SearchQuery, SearchResults};
pub use selection::ProductSelection;
pub use source::{JsonDirSource, MemorySource, StringTableSource};
