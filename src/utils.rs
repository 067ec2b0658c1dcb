//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Latin letter (`A-Z` or `a-z`).
///
/// # Examples
///
/// ```
/// use transaudit::utils::contains_latin_letter;
///
/// assert!(contains_latin_letter("OK"));
/// assert!(contains_latin_letter("按 Enter"));
/// assert!(!contains_latin_letter("你好"));
/// assert!(!contains_latin_letter("123"));
/// assert!(!contains_latin_letter("é"));
/// ```
pub fn contains_latin_letter(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

/// Checks if a character counts as whitespace when trimming translated values.
///
/// This is the Unicode `White_Space` set plus the ASCII separators
/// U+001C to U+001F.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strips leading and trailing whitespace as defined by [`is_whitespace`].
///
/// # Examples
///
/// ```
/// use transaudit::utils::strip_whitespace;
///
/// assert_eq!(strip_whitespace("  Save\n"), "Save");
/// assert_eq!(strip_whitespace("\u{1f}Save\u{3000}"), "Save");
/// assert_eq!(strip_whitespace("\u{1b}Save"), "\u{1b}Save");
/// ```
pub fn strip_whitespace(text: &str) -> &str {
    text.trim_matches(is_whitespace)
}

/// Fraction of characters (code points) below 128.
///
/// Returns 0.0 for an empty string.
///
/// # Examples
///
/// ```
/// use transaudit::utils::ascii_ratio;
///
/// assert_eq!(ascii_ratio("OK"), 1.0);
/// assert_eq!(ascii_ratio("好的"), 0.0);
/// assert_eq!(ascii_ratio("OK好的"), 0.5);
/// assert_eq!(ascii_ratio(""), 0.0);
/// ```
pub fn ascii_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let ascii = text.chars().filter(char::is_ascii).count();
    ascii as f64 / total as f64
}
