//! Display formatting for item metadata.

use chrono::{DateTime, Utc};

/// Language code used when an item declares no usable language.
pub const DEFAULT_LANGUAGE: &str = "en";

/// RFC 850 layout, e.g. `Monday, 02-Jan-06 15:04:05 UTC`.
const DATE_FORMAT: &str = "%A, %d-%b-%y %H:%M:%S UTC";

/// Returns the lowercased two-letter prefix of a language value, falling
/// back to [`DEFAULT_LANGUAGE`].
pub fn two_letter_language_code(language: &str) -> String {
    two_letter_language_code_or(language, DEFAULT_LANGUAGE)
}

/// Same as [`two_letter_language_code`] with a caller-chosen fallback.
///
/// The fallback is trimmed and lowercased like any declared language.
pub fn two_letter_language_code_or(language: &str, fallback: &str) -> String {
    let code: String = language.trim().chars().take(2).collect();
    if code.chars().count() < 2 {
        return fallback.trim().to_lowercase();
    }
    code.to_lowercase()
}

/// Formats a metadata timestamp; a missing date formats as an empty string.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|value| value.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}
