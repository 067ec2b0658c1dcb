//! Core engine: localization trees, flattening and key path resolution.
//!
//! ## Module Structure
//!
//! - `context`: AuditContext (both flattened locales of one audit run)
//! - `data`: Tree, key path and flattened message types
//! - `parsers`: JSON locale file loading and flattening
//! - `resolve`: Key path navigation and missing value lookup

pub mod context;
pub mod data;
pub mod parsers;
pub mod resolve;

pub use context::{AuditContext, CommonString};
pub use data::*;
pub use resolve::{MissingValue, ResolveError, navigate, resolve_key, resolve_missing};
