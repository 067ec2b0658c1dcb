//! Core data types used across both pipelines.
//!
//! ## Module Structure
//!
//! - `key_path`: Key path parser (KeyPath, Step)
//! - `message`: Flattened locale messages (LocaleMessages)
//! - `node`: Localization tree (Node, Leaf)

pub mod key_path;
pub mod message;
pub mod node;

pub use key_path::{KeyPath, PathError, Step};
pub use message::LocaleMessages;
pub use node::{Leaf, Node, NodeKind};
