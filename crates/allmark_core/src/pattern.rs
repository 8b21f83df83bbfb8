//! Regex matching helper shared by content collaborators.

use regex::Regex;

/// Matches `text` against `pattern`.
///
/// Returns whether it matched and the captured groups, where index `0` is
/// the whole match and groups that did not participate are empty strings.
pub fn match_groups(text: &str, pattern: &Regex) -> (bool, Vec<String>) {
    match pattern.captures(text) {
        Some(captures) => (
            true,
            captures
                .iter()
                .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
                .collect(),
        ),
        None => (false, Vec::new()),
    }
}
