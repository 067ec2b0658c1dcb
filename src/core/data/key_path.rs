//! Key path mini-language.
//!
//! A key path addresses a node of a localization tree: mapping keys are joined
//! with `.` and sequence indices are appended as `[i]` to the preceding segment,
//! e.g. `Menu.items[2].label` or `matrix[1][0]`.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// One navigation step of a parsed key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Descend into a mapping by key.
    Field(String),
    /// Descend into a sequence by position.
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("invalid index '[{index}]' in segment '{segment}'")]
    InvalidIndex { segment: String, index: String },
}

/// A parsed key path: the ordered steps from the root to a node.
///
/// The empty string parses to the root path (no steps).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath {
    steps: Vec<Step>,
}

impl KeyPath {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Parse a key path string into navigation steps.
    ///
    /// Each `.`-separated segment is a name followed by zero or more `[digits]`
    /// suffixes. A segment whose trailing brackets are not all numeric is taken
    /// as a literal mapping key (`label[beta]`), so keys containing brackets
    /// still resolve.
    pub fn parse(path: &str) -> Result<Self, PathError> {
        let mut steps = Vec::new();
        if path.is_empty() {
            return Ok(Self { steps });
        }

        for segment in path.split('.') {
            let (name, indices) = split_index_suffixes(segment)?;
            // A bare `[i]` segment reuses the node the previous segment yielded.
            if !name.is_empty() || indices.is_empty() {
                steps.push(Step::Field(name.to_string()));
            }
            steps.extend(indices.into_iter().map(Step::Index));
        }

        Ok(Self { steps })
    }
}

/// Strip trailing `[digits]` groups from a segment.
///
/// Returns the remaining name and the indices in left-to-right order.
fn split_index_suffixes(segment: &str) -> Result<(&str, Vec<usize>), PathError> {
    let mut name = segment;
    let mut indices = Vec::new();

    while let Some(body) = name.strip_suffix(']') {
        let Some(open) = body.rfind('[') else {
            break;
        };
        let digits = &body[open + 1..];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            break;
        }
        let index = digits
            .parse::<usize>()
            .map_err(|_| PathError::InvalidIndex {
                segment: segment.to_string(),
                index: digits.to_string(),
            })?;
        indices.push(index);
        name = &body[..open];
    }

    indices.reverse();
    Ok((name, indices))
}

impl FromStr for KeyPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                Step::Field(name) if i == 0 => write!(f, "{}", name)?,
                Step::Field(name) => write!(f, ".{}", name)?,
                Step::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}
