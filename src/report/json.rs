//! JSON rendering for report files and status lines.

use std::io;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::Formatter;

use crate::core::MissingValue;

/// Pretty JSON with 2-space indentation; non-ASCII characters are written
/// literally.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize JSON")
}

/// Single-line JSON with `", "` and `": "` separators and every non-ASCII
/// character escaped as `\uXXXX`.
///
/// Used for the status line printed to stdout, which must survive terminals
/// that are not UTF-8.
pub fn to_ascii_json_line<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, AsciiLineFormatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    // The formatter only ever emits ASCII.
    String::from_utf8(buf).context("Serialized JSON is not valid UTF-8")
}

/// Resolved missing values as `"key": <compact JSON>,` lines, sorted by key
/// path, ready to paste into a JSON object.
///
/// Keys that could not be resolved are left out. Returns the snippet and its
/// line count.
pub fn render_snippet(values: &[MissingValue]) -> Result<(String, usize)> {
    let mut found: Vec<(&str, &crate::core::Node)> = values
        .iter()
        .filter_map(|value| match value {
            MissingValue::Found { key, en } => Some((key.as_str(), en)),
            MissingValue::Failed { .. } => None,
        })
        .collect();
    found.sort_by(|a, b| a.0.cmp(b.0));

    let lines = found
        .iter()
        .map(|(key, en)| -> Result<String, serde_json::Error> {
            Ok(format!(
                "{}: {},",
                serde_json::to_string(key)?,
                serde_json::to_string(en)?
            ))
        })
        .collect::<Result<Vec<String>, serde_json::Error>>()
        .context("Failed to serialize JSON")?;

    Ok((lines.join("\n"), lines.len()))
}

struct AsciiLineFormatter;

impl Formatter for AsciiLineFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
