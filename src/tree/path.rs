//! Dotted key paths.
//!
//! Example: "greetings.morning"  =>  KeyPath(vec!["greetings", "morning"])
//!
//! Stored as a Vec<String> with derived ordering so it can key a BTreeSet/Map.

use std::fmt;

pub const SEPARATOR: char = '.';

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct KeyPath(pub Vec<String>);

impl KeyPath {
    /// Split a dotted string. Empty segments are kept so that a resolver
    /// can reject them.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::default();
        }
        Self(path.split(SEPARATOR).map(str::to_string).collect())
    }

    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.to_string());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// A key usable as one path segment: non-empty and free of the separator.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(SEPARATOR)
}

/// Join a parent path string and a key.
pub(crate) fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", prefix, SEPARATOR, key)
    }
}
