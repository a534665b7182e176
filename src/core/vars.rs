//! Variable table and `$NAME` / `${NAME}` substitution.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

/// Leftover `$NAME` or `${NAME}` after substitution
static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{?(\w+)\}?").expect("valid reference regex"));

/// Name → value, iterated in insertion order.
///
/// The first writer of a name wins: overrides are inserted before any file
/// is read, and `@var` only fills names nobody has set yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    table: IndexMap<String, String>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` unless it already has a value. Returns true if inserted.
    pub fn define(&mut self, name: &str, value: &str) -> bool {
        if self.table.contains_key(name) {
            return false;
        }
        self.table.insert(name.to_string(), value.to_string());
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.table.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace every `${NAME}` then every `$NAME`, one variable at a time in
    /// table order. Values are not rescanned for their own references.
    pub fn substitute(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (name, value) in &self.table {
            if !out.contains('$') {
                break;
            }
            out = out.replace(&format!("${{{name}}}"), value);
            out = out.replace(&format!("${name}"), value);
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Variables::new();
        for (k, v) in iter {
            vars.define(k.as_ref(), v.as_ref());
        }
        vars
    }
}

/// Names of `$NAME` / `${NAME}` tokens left in `text`, skipping purely
/// numeric names such as `$1`.
pub fn unresolved(text: &str) -> Vec<String> {
    REFERENCE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| !name.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

/// Split a `NAME=value` override token. The name must be non-empty.
pub fn parse_assignment(token: &str) -> Option<(String, String)> {
    let (name, value) = token.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.to_string()))
}
