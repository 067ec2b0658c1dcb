use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::core::{Leaf, LocaleMessages, Node};

/// A parsed locale file: the tree and its flattened leaves.
#[derive(Debug, Clone)]
pub struct LocaleFile {
    pub tree: Node,
    pub messages: LocaleMessages,
}

/// Read and parse a JSON file into a [`Value`].
pub fn read_json_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON file: {:?}", path))
}

/// Read and parse a JSON file into a localization tree.
pub fn load_tree(path: &Path) -> Result<Node> {
    read_json_value(path).map(Node::from)
}

/// Load a locale file and flatten it.
///
/// The locale label is taken from the file name (see [`extract_locale`]).
pub fn parse_locale_file(path: &Path) -> Result<LocaleFile> {
    let tree = load_tree(path)?;
    let locale = extract_locale(path).unwrap_or_default();
    let mut messages = LocaleMessages::new(locale);
    flatten_into(&tree, String::new(), &mut messages.entries);
    debug!(
        "Flattened {} into {} leaves",
        path.display(),
        messages.entries.len()
    );
    Ok(LocaleFile { tree, messages })
}

/// Flatten a tree into a mapping from key path to leaf value.
pub fn flatten(tree: &Node) -> BTreeMap<String, Leaf> {
    flatten_with_prefix(tree, "")
}

/// Flatten a tree, prepending `prefix` to every produced key path.
pub fn flatten_with_prefix(tree: &Node, prefix: &str) -> BTreeMap<String, Leaf> {
    let mut result = BTreeMap::new();
    flatten_into(tree, prefix.to_string(), &mut result);
    result
}

fn flatten_into(value: &Node, prefix: String, result: &mut BTreeMap<String, Leaf>) {
    match value {
        Node::Mapping(entries) => {
            for (key, val) in entries {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(val, new_prefix, result);
            }
        }
        Node::Sequence(items) => {
            for (index, val) in items.iter().enumerate() {
                flatten_into(val, format!("{}[{}]", prefix, index), result);
            }
        }
        Node::Leaf(leaf) => {
            // Keys like "a.b" next to {"a": {"b": ..}} collide; last write wins.
            if let Some(previous) = result.insert(prefix, leaf.clone()) {
                debug!("Key path collision, overwriting {:?}", previous);
            }
        }
    }
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-tw.json" -> Some("zh-tw")
/// - "/path/to/locales/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
