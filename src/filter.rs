//! Entity filtering by prefix or suffix match lists
//!
//! Entities are keys of the form `path/to/file.dtd:string.id`. Product
//! scoping works entirely off these keys: a list of path prefixes selects
//! or rejects entities, and a list of id suffixes strips access keys.

/// Which end of the entity key the match list is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

/// Filter entity keys against a list of exact prefix or suffix matches.
///
/// An empty match list is a no-op: every entity passes, regardless of
/// polarity. With `include` set, entities matching any list element are
/// kept; unset, they are dropped. Comparisons are exact byte prefix or
/// suffix checks, no wildcards.
pub fn filter_entities<S: AsRef<str>>(
    entities: &[S],
    matches: &[&str],
    anchor: Anchor,
    include: bool,
) -> Vec<String> {
    if matches.is_empty() {
        return entities.iter().map(|e| e.as_ref().to_string()).collect();
    }

    entities
        .iter()
        .map(|e| e.as_ref())
        .filter(|entity| {
            let hit = match anchor {
                Anchor::Start => matches.iter().any(|m| entity.starts_with(m)),
                Anchor::End => matches.iter().any(|m| entity.ends_with(m)),
            };
            hit == include
        })
        .map(|e| e.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities() -> Vec<&'static str> {
        vec![
            "browser/chrome/browser/browser.dtd:homeButton.label",
            "browser/chrome/browser/browser.dtd:editBookmark.accesskey",
            "mail/chrome/messenger/messenger.dtd:newMessage.label",
            "toolkit/chrome/global/tree.dtd:expand.label",
        ]
    }

    #[test]
    fn test_empty_match_list_is_noop() {
        let all = entities();
        assert_eq!(filter_entities(&all, &[], Anchor::Start, true).len(), 4);
        assert_eq!(filter_entities(&all, &[], Anchor::End, false).len(), 4);
    }

    #[test]
    fn test_include_by_prefix() {
        let kept = filter_entities(&entities(), &["browser"], Anchor::Start, true);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|e| e.starts_with("browser")));
    }

    #[test]
    fn test_exclude_by_prefix() {
        let kept = filter_entities(&entities(), &["browser", "mail"], Anchor::Start, false);
        assert_eq!(
            kept,
            vec!["toolkit/chrome/global/tree.dtd:expand.label".to_string()]
        );
    }

    #[test]
    fn test_exclude_by_suffix() {
        let kept = filter_entities(&entities(), &["accesskey"], Anchor::End, false);
        assert_eq!(kept.len(), 3);
        assert!(kept.iter().all(|e| !e.ends_with("accesskey")));
    }

    #[test]
    fn test_include_is_subset_and_complement_is_empty() {
        let all = entities();
        let included = filter_entities(&all, &["browser"], Anchor::Start, true);
        assert!(included.iter().all(|e| all.contains(&e.as_str())));

        let excluded = filter_entities(&included, &["browser"], Anchor::Start, false);
        assert!(excluded.is_empty());
    }
}
