use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::{Number, Value};

/// A scalar value terminating a tree path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Leaf {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Leaf {
    /// Returns the string payload, or `None` for numbers, booleans and null.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Leaf::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Leaf::Null => NodeKind::Null,
            Leaf::Bool(_) => NodeKind::Boolean,
            Leaf::Number(_) => NodeKind::Number,
            Leaf::String(_) => NodeKind::String,
        }
    }
}

/// Kind of a tree node, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Mapping,
    Sequence,
    String,
    Number,
    Boolean,
    Null,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Mapping => write!(f, "mapping"),
            NodeKind::Sequence => write!(f, "sequence"),
            NodeKind::String => write!(f, "string"),
            NodeKind::Number => write!(f, "number"),
            NodeKind::Boolean => write!(f, "boolean"),
            NodeKind::Null => write!(f, "null"),
        }
    }
}

/// A node of a localization tree.
///
/// Localization files are nested JSON documents. Every value is one of:
///
/// 1. **Mapping**: `{"Common": {...}}`, string keys to child nodes
/// 2. **Sequence**: `["first", "second"]`, ordered child nodes
/// 3. **Leaf**: any scalar (`"Save"`, `3`, `true`, `null`)
///
/// Mapping entries keep the order of the source document. Keys are unique
/// because the JSON parser keeps the last occurrence of a duplicated key.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Mapping(Vec<(String, Node)>),
    Sequence(Vec<Node>),
    Leaf(Leaf),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Mapping(_) => NodeKind::Mapping,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Leaf(leaf) => leaf.kind(),
        }
    }

    /// Look up a child of a mapping node by key.
    ///
    /// Returns `None` when the key is absent or the node is not a mapping.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Returns the leaf payload if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                Node::Mapping(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::String(s) => Node::Leaf(Leaf::String(s)),
            Value::Number(n) => Node::Leaf(Leaf::Number(n)),
            Value::Bool(b) => Node::Leaf(Leaf::Bool(b)),
            Value::Null => Node::Leaf(Leaf::Null),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Node::Sequence(items) => items.serialize(serializer),
            Node::Leaf(leaf) => leaf.serialize(serializer),
        }
    }
}
