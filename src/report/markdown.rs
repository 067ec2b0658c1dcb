//! Markdown rendering of an audit report for human reviewers.
//!
//! The Markdown report is condensed: the summary plus the first `limit`
//! entries of the missing, identical and mostly-ASCII lists. Placeholder
//! mismatches are always listed in full since each one breaks interpolation.

use crate::issues::AuditReport;

/// Render the Markdown report.
///
/// `locale` labels the translated side in headings (e.g. "zh-tw").
pub fn render_markdown(report: &AuditReport, locale: &str, limit: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Translation Audit".to_string());
    lines.push(String::new());
    lines.push("## Summary".to_string());
    lines.push(String::new());
    for (name, count) in report.summary.fields() {
        lines.push(format!("- **{}**: {}", name, count));
    }

    lines.push(String::new());
    lines.push(format!("## Missing keys in {} (first {})", locale, limit));
    lines.push(String::new());
    for key in report.missing_keys.iter().take(limit) {
        lines.push(format!("- {}", key));
    }
    push_truncation_note(&mut lines, "missing keys", limit, report.missing_keys.len());

    lines.push(String::new());
    lines.push("## Placeholder mismatches".to_string());
    lines.push(String::new());
    if report.placeholder_mismatch.is_empty() {
        lines.push("- (none)".to_string());
    } else {
        for issue in &report.placeholder_mismatch {
            lines.push(format!("- {}", issue.key));
            lines.push(format!("  - EN: {}", issue.en));
            lines.push(format!("  - ZH: {}", issue.zh));
            lines.push(format!(
                "  - EN placeholders: {}",
                format_list(&issue.en_placeholders)
            ));
            lines.push(format!(
                "  - ZH placeholders: {}",
                format_list(&issue.zh_placeholders)
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("## Identical to EN (first {})", limit));
    lines.push(String::new());
    for issue in report.identical_to_en.iter().take(limit) {
        lines.push(format!("- {} = {}", issue.key, issue.zh));
    }
    push_truncation_note(
        &mut lines,
        "identical values",
        limit,
        report.identical_to_en.len(),
    );

    lines.push(String::new());
    lines.push(format!("## Mostly ASCII (first {})", limit));
    lines.push(String::new());
    for issue in report.mostly_ascii.iter().take(limit) {
        lines.push(format!(
            "- {} (ascii_ratio={:.2}) = {}",
            issue.key, issue.ascii_ratio, issue.zh
        ));
    }
    push_truncation_note(
        &mut lines,
        "mostly-ASCII values",
        limit,
        report.mostly_ascii.len(),
    );

    lines.join("\n")
}

/// Note a list cut off at `limit`; nothing is added when it fits.
fn push_truncation_note(lines: &mut Vec<String>, what: &str, limit: usize, total: usize) {
    if total > limit {
        lines.push(String::new());
        lines.push(format!(
            "_Output truncated: showing first {} {} out of {} total._",
            limit, what, total
        ));
    }
}

/// Format a string list as `['{a}', '{b}']`.
fn format_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| quote(item)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Quote with single quotes, switching to double quotes when the text holds a
/// single quote but no double quote.
///
/// Non-printable characters are escaped as `\xNN`, `\uNNNN` or `\UNNNNNNNN`.
fn quote(text: &str) -> String {
    let delimiter = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(delimiter);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => out.push_str(&escape_code_point(c)),
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

fn escape_code_point(c: char) -> String {
    let code = u32::from(c);
    if code < 0x100 {
        format!("\\x{:02x}", code)
    } else if code < 0x10000 {
        format!("\\u{:04x}", code)
    } else {
        format!("\\U{:08x}", code)
    }
}

/// Control, format, private-use and separator characters (except the ASCII
/// space) are not printable. Unassigned code points are printed as is.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control() || c.is_whitespace() || is_format_char(c) || is_private_use(c))
}

/// Unicode general category `Cf`.
fn is_format_char(c: char) -> bool {
    matches!(
        u32::from(c),
        0x00AD
            | 0x0600..=0x0605
            | 0x061C
            | 0x06DD
            | 0x070F
            | 0x0890..=0x0891
            | 0x08E2
            | 0x180E
            | 0x200B..=0x200F
            | 0x202A..=0x202E
            | 0x2060..=0x2064
            | 0x2066..=0x206F
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0x110BD
            | 0x110CD
            | 0x13430..=0x1343F
            | 0x1BCA0..=0x1BCA3
            | 0x1D173..=0x1D17A
            | 0xE0001
            | 0xE0020..=0xE007F
    )
}

/// Unicode general category `Co`.
fn is_private_use(c: char) -> bool {
    matches!(
        u32::from(c),
        0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD
    )
}
