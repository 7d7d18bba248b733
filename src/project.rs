//! Static project configuration: repositories and locale normalization
//!
//! A repository is a source channel of the product (release train or
//! device-specific track). The set is closed; unknown names fall back to
//! a default instead of failing, so that stale links and cookies keep
//! working.

use std::fmt;

/// Source repositories strings are extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Repository {
    Release,
    Beta,
    Aurora,
    Central,
    Gaia,
    MozillaOrg,
}

impl Repository {
    /// All supported repositories, in search order for global queries.
    pub const ALL: [Repository; 6] = [
        Repository::Release,
        Repository::Beta,
        Repository::Aurora,
        Repository::Central,
        Repository::Gaia,
        Repository::MozillaOrg,
    ];

    /// Short name used in URLs, data directories and CLI arguments.
    pub fn label(&self) -> &'static str {
        match self {
            Repository::Release => "release",
            Repository::Beta => "beta",
            Repository::Aurora => "aurora",
            Repository::Central => "central",
            Repository::Gaia => "gaia",
            Repository::MozillaOrg => "mozilla_org",
        }
    }

    pub fn parse(name: &str) -> Option<Repository> {
        Repository::ALL.iter().copied().find(|r| r.label() == name)
    }

    /// Unknown repository names silently fall back to central.
    pub fn parse_or_default(name: &str) -> Repository {
        Repository::parse(name).unwrap_or(Repository::Central)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a search runs: one repository, or all of them merged.
///
/// "global" is a real mode, not a magic repository name compared in
/// multiple places; callers drive the repository loop explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryScope {
    One(Repository),
    Global,
}

impl RepositoryScope {
    pub fn parse_or_default(name: &str) -> RepositoryScope {
        if name == "global" {
            RepositoryScope::Global
        } else {
            RepositoryScope::One(Repository::parse_or_default(name))
        }
    }

    /// The repositories a search over this scope iterates.
    pub fn repositories(&self) -> Vec<Repository> {
        match self {
            RepositoryScope::One(repo) => vec![*repo],
            RepositoryScope::Global => Repository::ALL.to_vec(),
        }
    }
}

/// Locale aliases that differ between repositories. Desktop repositories
/// use full codes where Gaia ships bare language codes, and mozilla.org
/// serves en-GB for plain English requests.
const LOCALE_ALIASES: &[(Repository, &str, &str)] = &[
    (Repository::Gaia, "es-ES", "es"),
    (Repository::Gaia, "sr", "sr-Cyrl"),
    (Repository::MozillaOrg, "en", "en-GB"),
    (Repository::MozillaOrg, "gu-IN", "gu"),
];

/// Map a requested locale to the closest code actually present in a
/// repository. Identity when no alias applies.
pub fn locale_in_context(locale: &str, repository: Repository) -> String {
    LOCALE_ALIASES
        .iter()
        .find(|(repo, from, _)| *repo == repository && *from == locale)
        .map(|(_, _, to)| to.to_string())
        .unwrap_or_else(|| locale.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_repository() {
        assert_eq!(Repository::parse("aurora"), Some(Repository::Aurora));
        assert_eq!(Repository::parse_or_default("gaia"), Repository::Gaia);
    }

    #[test]
    fn test_unknown_repository_falls_back_to_central() {
        assert_eq!(Repository::parse_or_default("nightly42"), Repository::Central);
        assert_eq!(Repository::parse("nightly42"), None);
    }

    #[test]
    fn test_scope_parsing() {
        assert_eq!(
            RepositoryScope::parse_or_default("beta"),
            RepositoryScope::One(Repository::Beta)
        );
        assert_eq!(RepositoryScope::parse_or_default("global"), RepositoryScope::Global);
        assert_eq!(RepositoryScope::Global.repositories().len(), Repository::ALL.len());
    }

    #[test]
    fn test_locale_in_context() {
        assert_eq!(locale_in_context("es-ES", Repository::Gaia), "es");
        assert_eq!(locale_in_context("es-ES", Repository::Central), "es-ES");
        assert_eq!(locale_in_context("en", Repository::MozillaOrg), "en-GB");
        assert_eq!(locale_in_context("fr", Repository::Aurora), "fr");
    }
}
