//! Key path resolution against a reference tree.
//!
//! Used by the `missing` command to turn the missing key paths of an audit
//! back into the reference values translators need.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::{KeyPath, Node, NodeKind, PathError, Step};

/// Why a key path could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("key not found: '{key}'")]
    KeyNotFound { key: String },
    #[error("index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cannot look up key '{key}' in a {kind}")]
    NotAMapping { key: String, kind: NodeKind },
    #[error("cannot index a {kind} with [{index}]")]
    NotASequence { index: usize, kind: NodeKind },
}

/// Walk `tree` along the steps of `path`.
pub fn navigate<'a>(tree: &'a Node, path: &KeyPath) -> Result<&'a Node, ResolveError> {
    let mut current = tree;
    for step in path.steps() {
        current = match (step, current) {
            (Step::Field(key), Node::Mapping(_)) => {
                current
                    .get(key)
                    .ok_or_else(|| ResolveError::KeyNotFound { key: key.clone() })?
            }
            (Step::Field(key), other) => {
                return Err(ResolveError::NotAMapping {
                    key: key.clone(),
                    kind: other.kind(),
                });
            }
            (Step::Index(index), Node::Sequence(items)) => {
                items
                    .get(*index)
                    .ok_or(ResolveError::IndexOutOfRange {
                        index: *index,
                        len: items.len(),
                    })?
            }
            (Step::Index(index), other) => {
                return Err(ResolveError::NotASequence {
                    index: *index,
                    kind: other.kind(),
                });
            }
        };
    }
    Ok(current)
}

/// Parse `key` and walk `tree` along it.
pub fn resolve_key<'a>(tree: &'a Node, key: &str) -> Result<&'a Node, ResolveError> {
    let path = KeyPath::parse(key)?;
    navigate(tree, &path)
}

/// Outcome of looking up one missing key in the reference tree.
///
/// Serializes as `{"key": .., "en": ..}` or `{"key": .., "error": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MissingValue {
    Found { key: String, en: Node },
    Failed { key: String, error: String },
}

impl MissingValue {
    pub fn key(&self) -> &str {
        match self {
            MissingValue::Found { key, .. } | MissingValue::Failed { key, .. } => key,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MissingValue::Failed { .. })
    }
}

/// Resolve every key against the reference tree, preserving input order.
///
/// A failing lookup becomes a [`MissingValue::Failed`] record; it never aborts
/// the batch.
pub fn resolve_missing<S: AsRef<str>>(tree: &Node, keys: &[S]) -> Vec<MissingValue> {
    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            match resolve_key(tree, key) {
                Ok(node) => MissingValue::Found {
                    key: key.to_string(),
                    en: node.clone(),
                },
                Err(err) => {
                    debug!("Cannot resolve {}: {}", key, err);
                    MissingValue::Failed {
                        key: key.to_string(),
                        error: err.to_string(),
                    }
                }
            }
        })
        .collect()
}
