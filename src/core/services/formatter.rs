//! Company name formatting
//!
//! Turns a raw company name into the token used for domain lookups and the
//! token submitted to registry searches. Both functions are total: any input
//! yields a string, possibly empty.

use std::sync::LazyLock;

use regex::Regex;

/// Legal-entity suffixes: LLC, L.L.C., INC, I.N.C. with an optional trailing dot
static SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:L\.L\.C|I\.N\.C|LLC|INC)\b\.?").expect("suffix pattern is valid")
});

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("non-word pattern is valid"));

fn strip_suffixes(name: &str) -> String {
    SUFFIX.replace_all(name, "").into_owned()
}

fn alphanumeric_lower(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Domain-safe token: suffixes removed, only `[a-z0-9]` kept
///
/// Applying it to its own output returns the same string.
#[must_use]
pub fn to_domain_token(name: &str) -> String {
    let compact = alphanumeric_lower(&strip_suffixes(name));
    // "In C" compacts to "inc", which is itself a suffix.
    alphanumeric_lower(&strip_suffixes(&compact))
}

/// Registry search token: optionally suffix-free, punctuation removed, trimmed
///
/// Case and inner whitespace are preserved.
#[must_use]
pub fn to_jurisdiction_token(name: &str, remove_suffix: bool) -> String {
    let name = if remove_suffix {
        strip_suffixes(name)
    } else {
        name.to_string()
    };
    NON_WORD.replace_all(&name, "").trim().to_string()
}

/// Whether `name` already carries an `LLC` or `INC` word
#[must_use]
pub fn has_entity_suffix(name: &str) -> bool {
    SUFFIX.is_match(name)
}

/// Upper-case `name` and append ` LLC` unless it already has an entity suffix
///
/// Several registries only accept searches that include the suffix.
#[must_use]
pub fn with_llc_suffix(name: &str) -> String {
    let upper = name.trim().to_uppercase();
    if has_entity_suffix(&upper) {
        upper
    } else if upper.is_empty() {
        "LLC".to_string()
    } else {
        format!("{upper} LLC")
    }
}
