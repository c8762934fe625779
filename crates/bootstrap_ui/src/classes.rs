//! CSS class list merging.

use crate::options::{OptionValue, Options};
use core::fmt;

/// Option key that holds class names unless told otherwise.
pub const CLASS_KEY: &str = "class";

/// Class names supplied by a caller: one whitespace-separated string or a list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassInput {
    /// Whitespace-separated class names, e.g. `"btn btn-primary"`.
    Single(String),
    /// Individual class names. Items are trimmed but not split.
    Many(Vec<String>),
}

impl ClassInput {
    /// Raw tokens in input order, untrimmed and possibly empty.
    fn tokens(&self) -> Vec<&str> {
        match self {
            Self::Single(text) => text.split_whitespace().collect(),
            Self::Many(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for ClassInput {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Single(text.to_owned())
    }
}

impl From<String> for ClassInput {
    #[inline]
    fn from(text: String) -> Self {
        Self::Single(text)
    }
}

impl From<Vec<String>> for ClassInput {
    #[inline]
    fn from(items: Vec<String>) -> Self {
        Self::Many(items)
    }
}

impl From<Vec<&str>> for ClassInput {
    #[inline]
    fn from(items: Vec<&str>) -> Self {
        Self::Many(items.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for ClassInput {
    #[inline]
    fn from(items: &[&str]) -> Self {
        Self::Many(items.iter().map(|item| (*item).to_owned()).collect())
    }
}

impl From<&OptionValue> for ClassInput {
    fn from(value: &OptionValue) -> Self {
        match value {
            OptionValue::List(items) => Self::Many(items.clone()),
            other => Self::Single(other.to_text().into_owned()),
        }
    }
}

/// Ordered set of class names: trimmed, non-empty, first occurrence wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every token of `input` not already present.
    pub fn extend(&mut self, input: &ClassInput) {
        for raw in input.tokens() {
            self.push(raw);
        }
    }

    /// Append a single class name if it is non-empty and new.
    pub fn push(&mut self, raw: &str) {
        let name = raw.trim();
        if name.is_empty() || self.contains(name) {
            return;
        }
        self.names.push(name.to_owned());
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl From<&ClassInput> for ClassList {
    fn from(input: &ClassInput) -> Self {
        let mut list = Self::new();
        list.extend(input);
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.names.join(" "))
    }
}

/// Merge `input` into the classes stored at `options[key]`.
///
/// Existing classes come first, then the new ones. The merged list is stored
/// back as a single space-joined string; all other keys are left alone.
pub fn add_class(mut options: Options, input: impl Into<ClassInput>, key: &str) -> Options {
    let mut list = options
        .get(key)
        .map(|existing| ClassList::from(&ClassInput::from(existing)))
        .unwrap_or_default();
    list.extend(&input.into());
    options.insert(key, list.to_string());
    options
}
