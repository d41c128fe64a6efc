//! Placeholder scanning and per-part count merging
//!
//! Placeholders use the `{{name}}` syntax. Before scanning, the text is
//! normalized: the editing tool silently inserts non-breaking spaces and
//! zero-width characters when placeholders are typed or autocorrected, and
//! the matcher must not be defeated by them.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap();
}

/// One placeholder occurrence in normalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Canonical (lowercased) identifier
    pub name: String,
    /// Byte offset of the opening braces in the normalized text
    pub offset: usize,
}

/// Replace non-breaking spaces with ordinary spaces and strip zero-width
/// characters (ZWSP, ZWNJ, ZWJ, BOM).
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\u{00A0}' => Some(' '),
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => None,
            c => Some(c),
        })
        .collect()
}

/// Scan normalized text for placeholder tokens, in order of appearance
///
/// The captured identifier is lowercased, so spellings differing only in
/// case canonicalize to the same name.
pub fn scan_placeholders(text: &str) -> Vec<Placeholder> {
    PLACEHOLDER
        .captures_iter(text)
        .map(|caps| Placeholder {
            name: caps[1].to_lowercase(),
            offset: caps.get(0).map(|m| m.start()).unwrap_or(0),
        })
        .collect()
}

/// Count placeholders in the raw text of one part
///
/// Normalizes first, then scans; the result is this part's contribution to
/// the document-wide variable map.
pub fn count_placeholders(text: &str) -> BTreeMap<String, u32> {
    let normalized = normalize_text(text);
    let mut counts = BTreeMap::new();
    for placeholder in scan_placeholders(&normalized) {
        *counts.entry(placeholder.name).or_insert(0) += 1;
    }
    counts
}

/// Merge two part-level count maps by summing per name
///
/// Associative and commutative, so parts can be scanned in any order (or
/// concurrently) with identical output.
pub fn merge_counts(
    mut acc: BTreeMap<String, u32>,
    other: BTreeMap<String, u32>,
) -> BTreeMap<String, u32> {
    for (name, count) in other {
        *acc.entry(name).or_insert(0) += count;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_scan_basic_tokens() {
        let found = scan_placeholders("Bonjour {{prenom}} {{nom}}");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "prenom");
        assert_eq!(found[0].offset, 8);
        assert_eq!(found[1].name, "nom");
    }

    #[test]
    fn test_inner_whitespace_tolerated() {
        let found = scan_placeholders("{{ nom_employe }}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "nom_employe");
    }

    #[test]
    fn test_case_canonicalization() {
        let counts = count_placeholders("{{Nom_Client}} et {{ nom_client }}");
        assert_eq!(counts.get("nom_client"), Some(&2));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_non_breaking_space_inside_braces() {
        let counts = count_placeholders("{{\u{00A0}nom_client\u{00A0}}}");
        assert_eq!(counts.get("nom_client"), Some(&1));
    }

    #[test]
    fn test_zero_width_characters_stripped() {
        let counts = count_placeholders("{{\u{200B}date\u{FEFF}_debut\u{200C}}}");
        assert_eq!(counts.get("date_debut"), Some(&1));
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        assert!(scan_placeholders("{nom} {{nom prénom}} {{}} {{tarif-ht}}").is_empty());
    }

    #[test]
    fn test_merge_sums_by_name() {
        let body = count_placeholders("{{nom}}");
        let footer = count_placeholders("{{nom}} {{nom}}");
        let merged = merge_counts(body, footer);
        assert_eq!(merged.get("nom"), Some(&3));
    }

    proptest! {
        #[test]
        fn prop_merge_is_commutative(
            a in proptest::collection::btree_map("[a-z_]{1,8}", 1u32..5, 0..6),
            b in proptest::collection::btree_map("[a-z_]{1,8}", 1u32..5, 0..6),
        ) {
            prop_assert_eq!(
                merge_counts(a.clone(), b.clone()),
                merge_counts(b, a)
            );
        }

        #[test]
        fn prop_zero_width_insertion_does_not_change_counts(text in "[a-z_{} ]{0,40}") {
            let salted: String = text.chars().flat_map(|c| [c, '\u{200B}']).collect();
            prop_assert_eq!(count_placeholders(&text), count_placeholders(&salted));
        }
    }
}
