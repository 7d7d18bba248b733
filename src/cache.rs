//! Memoization of expensive string-table operations
//!
//! Filtering a repository down to a product view walks tens of thousands
//! of entity keys, which dwarfs request latency, so derived tables are
//! computed once per process. Keys are structured composites of the
//! operation and its inputs rather than concatenated strings, so two
//! different requests can never collide on a key. Values are immutable
//! once stored and there is no eviction; the cache lives as long as the
//! process.

use crate::product::Product;
use crate::project::Repository;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::StringTable;

/// The memoized operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheOp {
    ExtractStrings,
    ExcludeAccessKeys,
    DevToolsStrings,
}

/// Composite key identifying one memoized computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub product: Product,
    pub locale: String,
    pub repository: Repository,
    pub op: CacheOp,
}

/// Process-wide cache of derived string tables.
///
/// Racing writers storing the same key is harmless: keys are derived
/// from operation identity plus inputs, so both writers hold equal
/// values and last-write-wins.
#[derive(Default)]
pub struct Cache {
    entries: RwLock<HashMap<CacheKey, Arc<StringTable>>>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<StringTable>> {
        let entries = self.entries.read().expect("cache lock poisoned");
        let hit = entries.get(key).cloned();
        if hit.is_some() {
            debug!(
                "Cache hit: {:?} {}/{}/{:?}",
                key.op, key.product, key.locale, key.repository
            );
        }
        hit
    }

    pub fn insert(&self, key: CacheKey, value: StringTable) -> Arc<StringTable> {
        let value = Arc::new(value);
        let mut entries = self.entries.write().expect("cache lock poisoned");
        entries.insert(key, Arc::clone(&value));
        value
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.read().expect("cache lock poisoned").len()
    }
}
