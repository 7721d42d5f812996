//! Naming helpers shared by keys, roles and namespaces.

use std::fmt;

/// Uppercase the first character and leave the rest untouched.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title-case every whitespace separated word: first character uppercased,
/// the remainder lowercased (`"login"` → `"Login"`, `"userProfile"` → `"Userprofile"`).
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_whitespace() {
            out.push(ch);
            at_word_start = true;
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Namespace は型名を修飾するホストアプリケーションの識別子
///
/// 型名にスペースは含められないため、スペースは `_` に正規化されます。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    pub fn new(identity: impl AsRef<str>) -> Self {
        Self(identity.as_ref().replace(' ', "_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Namespace.Name`, or the bare name when the namespace is empty.
    pub fn qualify(&self, name: &str) -> String {
        if self.0.is_empty() {
            name.replace(' ', "_")
        } else {
            format!("{}.{}", self.0, name).replace(' ', "_")
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
