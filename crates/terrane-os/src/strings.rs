//! Small string helpers with fixed edge-case semantics.
//!
//! Mostly thin wrappers over `str` methods, kept so that every Terrane
//! consumer gets the same answers for the awkward inputs: empty strings,
//! empty delimiters, whitespace-only text.

/// True if `s` ends with `suffix`.
pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

/// True if `s` starts with `prefix`.
pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

/// Split `s` on `delim`.
///
/// An empty input yields no pieces; an empty delimiter splits into
/// single characters.
pub fn split(s: &str, delim: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    if delim.is_empty() {
        return s.chars().map(String::from).collect();
    }
    s.split(delim).map(str::to_owned).collect()
}

/// Replace every occurrence of `from` with `to`.
pub fn replace_all(s: &str, from: &str, to: &str) -> String {
    s.replace(from, to)
}

/// Join `parts` with `delim` between them.
pub fn join(parts: &[String], delim: &str) -> String {
    parts.join(delim)
}

/// Lowercase `s` (Unicode-aware).
pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Uppercase `s` (Unicode-aware).
pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Strip leading and trailing whitespace.
pub fn trim(s: &str) -> String {
    s.trim().to_string()
}
