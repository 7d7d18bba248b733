//! String-table loading
//!
//! A source hands back the full entity → text mapping for one
//! `(locale, repository)` pair. Absence of data is not an error: the
//! engine treats "no data" and "no match" identically, so a source must
//! come back empty rather than fail.

use crate::error::AppError;
use crate::project::Repository;
use crate::StringTable;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Supplies raw string tables per locale and repository.
///
/// Loading is expensive relative to request latency; callers memoize
/// derived views rather than re-reading tables.
pub trait StringTableSource {
    /// The full table for the pair, empty when no data exists.
    fn load(&self, locale: &str, repository: Repository) -> StringTable;
}

/// In-memory source for tests and embedding callers.
#[derive(Default)]
pub struct MemorySource {
    tables: HashMap<(String, Repository), StringTable>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locale: &str, repository: Repository, table: StringTable) {
        self.tables.insert((locale.to_string(), repository), table);
    }
}

impl StringTableSource for MemorySource {
    fn load(&self, locale: &str, repository: Repository) -> StringTable {
        self.tables
            .get(&(locale.to_string(), repository))
            .cloned()
            .unwrap_or_default()
    }
}

/// Source backed by a directory of precomputed JSON tables, one file per
/// pair at `<root>/<repository>/<locale>.json`, each a flat object of
/// entity → text.
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn table_path(&self, locale: &str, repository: Repository) -> PathBuf {
        self.root
            .join(repository.label())
            .join(format!("{}.json", locale))
    }

    /// Load one table, surfacing read and parse failures. A missing file
    /// is still an empty table, not an error; only a file that exists
    /// but cannot be used fails.
    pub fn try_load(
        &self,
        locale: &str,
        repository: Repository,
    ) -> Result<StringTable, AppError> {
        let path = self.table_path(locale, repository);
        if !path.exists() {
            debug!("No string table at {}", path.display());
            return Ok(StringTable::new());
        }

        let raw = std::fs::read_to_string(&path)?;
        let table = serde_json::from_str::<StringTable>(&raw)?;
        debug!("Loaded {} strings from {}", table.len(), path.display());
        Ok(table)
    }
}

impl StringTableSource for JsonDirSource {
    /// The trait contract degrades a broken file to an empty table so
    /// downstream treats it like missing data; callers that want the
    /// failure use [`JsonDirSource::try_load`].
    fn load(&self, locale: &str, repository: Repository) -> StringTable {
        match self.try_load(locale, repository) {
            Ok(table) => table,
            Err(e) => {
                warn!("Dropping string table for {}/{}: {}", locale, repository, e);
                StringTable::new()
            }
        }
    }
}
