//! Text patterns used during resolution

use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)/\*.*?\*/")
        .unwrap_or_else(|e| panic!("BUG: Invalid comment pattern: {}", e))
});

/// Escaped literal alternation: `a|b|c`
pub(crate) fn alternation<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items.into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

/// Matches class names starting with `<key>-` for any registry key
pub(crate) fn key_pattern(keys: &[&str]) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})-", alternation(keys.iter().copied())))
}

/// Matches `.<class>` for any of the class names
pub(crate) fn selector_pattern(class_names: &[&str]) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\.(?:{})", alternation(class_names.iter().copied())))
}

/// Matches a keyframes declaration at the very start of an entry, capturing
/// the animation name
pub(crate) fn keyframes_pattern(prefix: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"^@keyframes\s+({}-[^{{\s]+)", regex::escape(prefix)))
}

/// Remove every `/* ... */` block
pub fn strip_comments(css: &str) -> String {
    COMMENT_PATTERN.replace_all(css, "").into_owned()
}
