//! Options dictionary passed to view-helper calls.
//!
//! An [`Options`] value is the bag of rendering attributes a helper receives
//! (`class`, `escape`, `bootstrap-type`, ...). Helpers take it by value and hand
//! back the rewritten dictionary, so a caller's copy is never changed in place.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

/// Single option value: a flag, a string, or a list of strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean flag such as `escape` or a disabled `bootstrap-size`.
    Flag(bool),
    /// Plain string value.
    Text(String),
    /// Sequence of strings, typically class names.
    List(Vec<String>),
}

impl OptionValue {
    /// Whether the value counts as "set" for shorthand options.
    ///
    /// Empty strings, `"0"`, `false` and empty lists are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(text) => !text.is_empty() && text != "0",
            Self::List(items) => !items.is_empty(),
        }
    }

    /// String form used when the value is spliced into a class name.
    #[inline]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Flag(true) => Cow::Borrowed("1"),
            Self::Flag(false) => Cow::Borrowed(""),
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::List(items) => Cow::Owned(items.join(" ")),
        }
    }
}

impl From<bool> for OptionValue {
    #[inline]
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&str> for OptionValue {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for OptionValue {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for OptionValue {
    #[inline]
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for OptionValue {
    #[inline]
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_owned).collect())
    }
}

/// Key-value bag of rendering attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options {
    entries: BTreeMap<String, OptionValue>,
}

impl Options {
    /// Create an empty options dictionary.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[inline]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace a value, returning the previous one.
    #[inline]
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Insert only when `key` is absent. Existing values win.
    #[inline]
    pub fn insert_default(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.entries.entry(key.into()).or_insert_with(|| value.into());
    }

    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.entries.remove(key)
    }

    /// Text form of a value, if present.
    #[inline]
    pub fn text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.entries.get(key).map(OptionValue::to_text)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String, OptionValue> {
        self.entries.iter()
    }
}

impl<'opts> IntoIterator for &'opts Options {
    type Item = (&'opts String, &'opts OptionValue);
    type IntoIter = Iter<'opts, String, OptionValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
