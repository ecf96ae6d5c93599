//! Nested bullet-point content and the JSON store it is loaded from.
//!
//! Bullet text arrives as a recursively nested tree of strings: a nested
//! list signifies one additional indentation level relative to its parent.
//! Flattening the tree yields an ordered sequence of (text, indent) pairs,
//! and formatting renders each pair as `indent × "   " + "• " + text`,
//! which is the shape the placement operations consume.

use crate::error::DeckError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Three spaces per indentation level
pub const INDENT: &str = "   ";

/// The glyph prefixed to every rendered bullet point
pub const BULLET_GLYPH: &str = "• ";

/// One node of a bullet tree: either a leaf string or a nested sub-list
/// one indentation level deeper.
///
/// The untagged serde representation matches the JSON store's shape
/// directly: `["A", ["B", ["C"]], "D"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BulletNode {
    Text(String),
    Nested(Vec<BulletNode>),
}

/// Flatten a bullet tree into (text, indent level) pairs in document order
pub fn flatten(tree: &[BulletNode]) -> Vec<(String, usize)> {
    fn walk(nodes: &[BulletNode], level: usize, out: &mut Vec<(String, usize)>) {
        for node in nodes {
            match node {
                BulletNode::Text(text) => out.push((text.clone(), level)),
                BulletNode::Nested(children) => walk(children, level + 1, out),
            }
        }
    }

    let mut out = Vec::new();
    walk(tree, 0, &mut out);
    out
}

/// Render a bullet tree into display strings, one per flattened entry,
/// indented three spaces per level and prefixed with the bullet glyph
pub fn format_bullets(tree: &[BulletNode]) -> Vec<String> {
    flatten(tree)
        .into_iter()
        .map(|(text, level)| format!("{}{}{}", INDENT.repeat(level), BULLET_GLYPH, text))
        .collect()
}

/// A key → bullet-tree store backed by a single JSON file.
///
/// The file maps slide content keys to nested string lists; one store
/// typically feeds every slide in a deck.
#[derive(Debug, Clone, Default)]
pub struct BulletStore {
    entries: HashMap<String, Vec<BulletNode>>,
}

impl BulletStore {
    /// Read and parse the store. A missing or malformed file is fatal:
    /// deck generation is one-shot, with no partial-success semantics.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<BulletStore, DeckError> {
        let data = std::fs::read(path)?;
        let entries = serde_json::from_slice(&data)?;
        Ok(BulletStore { entries })
    }

    /// Build a store from already-parsed entries
    pub fn from_entries(entries: HashMap<String, Vec<BulletNode>>) -> BulletStore {
        BulletStore { entries }
    }

    /// The formatted bullet points stored under `key`. A missing key
    /// yields an empty list, not an error.
    pub fn load(&self, key: &str) -> Vec<String> {
        self.entries
            .get(key)
            .map(|tree| format_bullets(tree))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn tree(json: &str) -> Vec<BulletNode> {
        serde_json::from_str(json).expect("valid bullet tree")
    }

    #[test]
    fn flattening_preserves_document_order_and_depth() {
        let flat = flatten(&tree(r#"["A", ["B", ["C"]], "D"]"#));
        assert_eq!(
            flat,
            vec![
                ("A".to_string(), 0),
                ("B".to_string(), 1),
                ("C".to_string(), 2),
                ("D".to_string(), 0),
            ]
        );
    }

    #[test]
    fn formatting_indents_three_spaces_per_level() {
        let points = format_bullets(&tree(r#"["top", ["deeper"]]"#));
        assert_eq!(points, vec!["• top", "   • deeper"]);
    }

    #[test]
    fn missing_key_loads_as_empty() {
        let store = BulletStore::default();
        assert!(store.load("nope").is_empty());
    }

    #[test]
    fn store_round_trips_through_a_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"scenario": ["first", ["nested"]], "assumptions": ["only"]}}"#
        )
        .expect("write store");

        let store = BulletStore::from_path(file.path()).expect("parse store");
        assert_eq!(store.load("scenario"), vec!["• first", "   • nested"]);
        assert_eq!(store.load("assumptions"), vec!["• only"]);
        assert!(store.load("comments").is_empty());
    }

    #[test]
    fn malformed_store_is_a_hard_failure() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write store");
        assert!(BulletStore::from_path(file.path()).is_err());
    }
}
