// SPDX-License-Identifier: MPL-2.0
//! Nested string dictionaries and dotted key-path resolution.
//!
//! A dictionary is a tree whose inner nodes are string-keyed mappings and
//! whose leaves are display strings. Any other JSON value (numbers, arrays,
//! `null`) makes the whole dictionary fail to load.

use crate::error::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// A node of a dictionary tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Branch(BTreeMap<String, Node>),
}

/// One locale's immutable message tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    root: BTreeMap<String, Node>,
}

impl Dictionary {
    /// Parses a dictionary from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parses a dictionary from raw file contents, which must be UTF-8.
    pub fn from_bytes(content: &[u8]) -> Result<Self> {
        Self::from_json(std::str::from_utf8(content)?)
    }

    /// Resolves a dotted key path to its string leaf.
    ///
    /// Returns `None` when a segment is missing, when the walk reaches a leaf
    /// before the path is exhausted, or when the path ends on a mapping.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&str> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut node = self.root.get(first)?;

        for segment in segments {
            match node {
                Node::Branch(children) => node = children.get(segment)?,
                Node::Text(_) => return None,
            }
        }

        match node {
            Node::Text(value) => Some(value.as_str()),
            Node::Branch(_) => None,
        }
    }

    /// Returns every leaf key path, sorted.
    #[must_use]
    pub fn leaf_paths(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        for (key, node) in &self.root {
            collect_leaves(node, key.clone(), &mut out);
        }
        out
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

fn collect_leaves(node: &Node, prefix: String, out: &mut BTreeSet<String>) {
    match node {
        Node::Text(_) => {
            out.insert(prefix);
        }
        Node::Branch(children) => {
            for (key, child) in children {
                collect_leaves(child, format!("{prefix}.{key}"), out);
            }
        }
    }
}

/// Structural differences between a dictionary and the canonical one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParityReport {
    /// Canonical leaf paths the candidate does not define.
    pub missing: Vec<String>,
    /// Candidate leaf paths the canonical dictionary does not define.
    pub extra: Vec<String>,
}

impl ParityReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Compares the leaf paths of `candidate` against `canonical`.
///
/// A path that is a leaf in one and a mapping in the other shows up as both
/// missing and extra, since the leaf sets differ on both sides.
#[must_use]
pub fn check_parity(canonical: &Dictionary, candidate: &Dictionary) -> ParityReport {
    let expected = canonical.leaf_paths();
    let actual = candidate.leaf_paths();

    ParityReport {
        missing: expected.difference(&actual).cloned().collect(),
        extra: actual.difference(&expected).cloned().collect(),
    }
}

/// Compares `candidate` against a fixed set of leaf paths.
///
/// A schema path is missing when `candidate` cannot resolve it to a string.
/// Candidate leaves outside the schema are extra.
#[must_use]
pub fn check_schema(schema: &BTreeSet<&str>, candidate: &Dictionary) -> ParityReport {
    ParityReport {
        missing: schema
            .iter()
            .filter(|path| candidate.resolve(path).is_none())
            .map(|path| (*path).to_string())
            .collect(),
        extra: candidate
            .leaf_paths()
            .into_iter()
            .filter(|path| !schema.contains(path.as_str()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample() -> Dictionary {
        Dictionary::from_json(
            r#"{
                "hero": { "title": "Hello", "cta": { "primary": "Go" } },
                "footer": "Bye"
            }"#,
        )
        .expect("sample dictionary parses")
    }

    #[test]
    fn resolves_nested_leaf() {
        let dict = sample();
        assert_eq!(dict.resolve("hero.title"), Some("Hello"));
        assert_eq!(dict.resolve("hero.cta.primary"), Some("Go"));
        assert_eq!(dict.resolve("footer"), Some("Bye"));
    }

    #[test]
    fn mapping_node_is_not_a_value() {
        let dict = sample();
        assert_eq!(dict.resolve("hero"), None);
        assert_eq!(dict.resolve("hero.cta"), None);
    }

    #[test]
    fn descending_past_a_leaf_fails() {
        let dict = sample();
        assert_eq!(dict.resolve("footer.more"), None);
        assert_eq!(dict.resolve("hero.title.extra"), None);
    }

    #[test]
    fn empty_and_malformed_paths_fail() {
        let dict = sample();
        assert_eq!(dict.resolve(""), None);
        assert_eq!(dict.resolve("."), None);
        assert_eq!(dict.resolve("hero."), None);
        assert_eq!(dict.resolve(".hero.title"), None);
        assert_eq!(dict.resolve("hero..title"), None);
    }

    #[test]
    fn leaf_paths_lists_only_strings() {
        let paths: Vec<String> = sample().leaf_paths().into_iter().collect();
        assert_eq!(paths, vec!["footer", "hero.cta.primary", "hero.title"]);
    }

    #[test]
    fn non_string_leaves_are_rejected() {
        let err = Dictionary::from_json(r#"{ "count": 3 }"#).unwrap_err();
        assert!(matches!(err, Error::Dictionary(_)));

        assert!(Dictionary::from_json(r#"{ "items": ["a", "b"] }"#).is_err());
        assert!(Dictionary::from_json(r#"{ "nothing": null }"#).is_err());
    }

    #[test]
    fn invalid_utf8_is_rejected_not_replaced() {
        let err = Dictionary::from_bytes(b"{ \"hero\": \"caf\xe9\" }").unwrap_err();
        assert!(matches!(err, Error::Dictionary(_)));

        let dict = Dictionary::from_bytes("{ \"hero\": \"café\" }".as_bytes()).expect("parses");
        assert_eq!(dict.resolve("hero"), Some("café"));
    }

    #[test]
    fn parity_reports_missing_and_extra() {
        let canonical = sample();
        let candidate = Dictionary::from_json(
            r#"{ "hero": { "title": "Hola", "subtitle": "Extra" }, "footer": "Adiós" }"#,
        )
        .expect("candidate parses");

        let report = check_parity(&canonical, &candidate);
        assert_eq!(report.missing, vec!["hero.cta.primary".to_string()]);
        assert_eq!(report.extra, vec!["hero.subtitle".to_string()]);
        assert!(!report.is_clean());
    }

    #[test]
    fn leaf_versus_mapping_counts_both_ways() {
        let canonical = Dictionary::from_json(r#"{ "a": { "b": "x" } }"#).expect("parses");
        let candidate = Dictionary::from_json(r#"{ "a": "flat" }"#).expect("parses");

        let report = check_parity(&canonical, &candidate);
        assert_eq!(report.missing, vec!["a.b".to_string()]);
        assert_eq!(report.extra, vec!["a".to_string()]);
    }

    #[test]
    fn schema_check_reports_unresolvable_and_unknown_paths() {
        let schema: BTreeSet<&str> = ["hero.title", "hero.cta.primary", "footer.note"]
            .into_iter()
            .collect();

        let report = check_schema(&schema, &sample());
        assert_eq!(report.missing, vec!["footer.note".to_string()]);
        assert_eq!(report.extra, vec!["footer".to_string()]);
    }

    #[test]
    fn identical_dictionaries_are_clean() {
        assert!(check_parity(&sample(), &sample()).is_clean());
    }
}
