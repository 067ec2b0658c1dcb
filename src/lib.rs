//! Transaudit - translation audit for localization JSON files
//!
//! Transaudit is a CLI tool and library that compares a translated locale file
//! against its source-language reference. It flattens both JSON trees into key
//! paths (`Menu.items[2].label`) and reports missing and extra keys,
//! placeholder mismatches, untranslated values and mostly-ASCII values. A
//! second command looks up the reference values of the missing keys for
//! translators.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and terminal output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Localization trees, flattening and key path resolution
//! - `issues`: Issue and audit report types
//! - `report`: JSON and Markdown report files
//! - `rules`: Detection rules for translation issues
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod report;
pub mod rules;
pub mod utils;
