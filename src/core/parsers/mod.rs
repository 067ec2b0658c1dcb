//! File parsers for locale files.
//!
//! - `json`: JSON locale file loader and flattener

pub mod json;
