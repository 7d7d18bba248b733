//! Product-scoped string selection
//!
//! A `ProductSelection` composes a raw string-table source, the entity
//! filter rules of a product, and the process cache into the working
//! view of one `(product, locale, repository)` triple.
//!
//! ```no_run
//! use translens::{Cache, JsonDirSource, ProductSelection};
//!
//! let source = JsonDirSource::new("/var/lib/translens");
//! let cache = Cache::new();
//! let mut fr = ProductSelection::from_names(&source, &cache, "Firefox", "fr", "aurora");
//! fr.exclude_access_keys();
//! println!("{} strings", fr.strings().len());
//! ```

use crate::cache::{Cache, CacheKey, CacheOp};
use crate::filter::{filter_entities, Anchor};
use crate::product::{
    Product, ACCESS_KEY_SUFFIXES, DEVTOOLS_PREFIXES, DEVTOOLS_WHITELIST, GLOBAL_EXCLUDE_PREFIXES,
};
use crate::project::Repository;
use crate::source::StringTableSource;
use crate::StringTable;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// The in-scope string table for one product, locale and repository.
///
/// The working table is derived on construction and re-derived when the
/// repository changes. [`exclude_access_keys`](Self::exclude_access_keys)
/// narrows the working table in place; deriving a fresh selection is the
/// only way back.
pub struct ProductSelection<'a> {
    product: Product,
    locale: String,
    repository: Repository,
    strings: Arc<StringTable>,
    source: &'a dyn StringTableSource,
    cache: &'a Cache,
}

impl<'a> ProductSelection<'a> {
    pub fn new(
        source: &'a dyn StringTableSource,
        cache: &'a Cache,
        product: Product,
        locale: &str,
        repository: Repository,
    ) -> Self {
        let mut selection = Self {
            product,
            locale: locale.to_string(),
            repository,
            strings: Arc::new(StringTable::new()),
            source,
            cache,
        };
        selection.extract_strings();
        selection
    }

    /// Build a selection from raw names. Unknown products fall back to
    /// the first supported product, unknown repositories to central;
    /// neither is an error.
    pub fn from_names(
        source: &'a dyn StringTableSource,
        cache: &'a Cache,
        product: &str,
        locale: &str,
        repository: &str,
    ) -> Self {
        Self::new(
            source,
            cache,
            Product::parse_or_default(product),
            locale,
            Repository::parse_or_default(repository),
        )
    }

    pub fn product(&self) -> Product {
        self.product
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn repository(&self) -> Repository {
        self.repository
    }

    /// The current working table.
    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    /// Switch repository and re-derive the working table, dropping any
    /// prior in-place narrowing.
    pub fn set_repository(&mut self, repository: Repository) {
        self.repository = repository;
        self.extract_strings();
    }

    fn cache_key(&self, op: CacheOp) -> CacheKey {
        CacheKey {
            product: self.product,
            locale: self.locale.clone(),
            repository: self.repository,
            op,
        }
    }

    /// Derive the product view of the raw repository table: include
    /// filter, product and global exclusions, then drop empty strings —
    /// an empty string is always a missing one.
    fn extract_strings(&mut self) {
        let key = self.cache_key(CacheOp::ExtractStrings);
        if let Some(hit) = self.cache.get(&key) {
            self.strings = hit;
            return;
        }

        let raw = self.source.load(&self.locale, self.repository);
        let entities: Vec<&str> = raw.keys().map(String::as_str).collect();

        let entities =
            filter_entities(&entities, self.product.include_prefixes(), Anchor::Start, true);

        let exclude: Vec<&str> = self
            .product
            .exclude_prefixes()
            .iter()
            .chain(GLOBAL_EXCLUDE_PREFIXES)
            .copied()
            .collect();
        let entities = filter_entities(&entities, &exclude, Anchor::Start, false);

        // Dedupe before projection; the exclusion lists may overlap
        let keep: BTreeSet<String> = entities.into_iter().collect();

        let table: StringTable = raw
            .into_iter()
            .filter(|(entity, text)| keep.contains(entity) && !text.is_empty())
            .collect();

        debug!(
            "Extracted {} strings for {}/{}/{}",
            table.len(),
            self.product,
            self.locale,
            self.repository
        );
        self.strings = self.cache.insert(key, table);
    }

    /// Drop access-key entities from the working table. Subsequent calls
    /// to [`strings`](Self::strings) see the narrowed table.
    pub fn exclude_access_keys(&mut self) -> &mut Self {
        let key = self.cache_key(CacheOp::ExcludeAccessKeys);
        if let Some(hit) = self.cache.get(&key) {
            self.strings = hit;
            return self;
        }

        let entities: Vec<&str> = self.strings.keys().map(String::as_str).collect();
        let kept = filter_entities(&entities, ACCESS_KEY_SUFFIXES, Anchor::End, false);
        let keep: BTreeSet<String> = kept.into_iter().collect();

        let table: StringTable = self
            .strings
            .iter()
            .filter(|(entity, _)| keep.contains(*entity))
            .map(|(entity, text)| (entity.clone(), text.clone()))
            .collect();

        self.strings = self.cache.insert(key, table);
        self
    }

    /// The devtools subset of the current working table. Devtools ship
    /// in Firefox only; every other product yields an empty table.
    pub fn dev_tools_strings(&self) -> Arc<StringTable> {
        if self.product != Product::Firefox {
            return Arc::new(StringTable::new());
        }

        let key = self.cache_key(CacheOp::DevToolsStrings);
        if let Some(hit) = self.cache.get(&key) {
            return hit;
        }

        // Whitelisted entities are full keys; matching them as prefixes
        // makes one include pass cover both cases
        let matches: Vec<&str> = DEVTOOLS_PREFIXES
            .iter()
            .chain(DEVTOOLS_WHITELIST)
            .copied()
            .collect();

        let entities: Vec<&str> = self.strings.keys().map(String::as_str).collect();
        let kept = filter_entities(&entities, &matches, Anchor::Start, true);
        let keep: BTreeSet<String> = kept.into_iter().collect();

        let table: StringTable = self
            .strings
            .iter()
            .filter(|(entity, text)| keep.contains(*entity) && !text.is_empty())
            .map(|(entity, text)| (entity.clone(), text.clone()))
            .collect();

        self.cache.insert(key, table)
    }
}
