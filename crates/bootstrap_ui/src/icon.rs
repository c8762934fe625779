//! `i:icon-name` shorthand expansion.
//!
//! Text such as `"i:star Favourite"` is rewritten so the token becomes icon
//! markup produced by an [`IconRenderer`]. Whitespace around the token is kept.

use anyhow::{Result, anyhow};
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::{Captures, Error as RegexError, Regex};

/// Leading whitespace (or start), `i:`, icon name, trailing whitespace (or end).
///
/// Whitespace is ASCII only: a non-breaking space does not separate a token.
static ICON_TOKEN: Lazy<Result<Regex, RegexError>> =
    Lazy::new(|| Regex::new(r"(^|(?-u:\s)+)i:([a-zA-Z0-9\-_]+)((?-u:\s)+|$)"));

/// Produces markup for a named icon. Supplied by the hosting view layer.
pub trait IconRenderer {
    /// Render the icon called `name`.
    ///
    /// # Errors
    /// Returns an error if the icon cannot be rendered (unknown name, ...).
    fn render_icon(&self, name: &str) -> Result<String>;
}

impl<F> IconRenderer for F
where
    F: Fn(&str) -> Result<String>,
{
    #[inline]
    fn render_icon(&self, name: &str) -> Result<String> {
        self(name)
    }
}

/// Renders `<i class="{prefix} {prefix}-{name}" aria-hidden="true"></i>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassIconRenderer {
    prefix: String,
}

impl ClassIconRenderer {
    /// Create a renderer for the given icon font class prefix.
    #[inline]
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for ClassIconRenderer {
    #[inline]
    fn default() -> Self {
        Self::new("glyphicon")
    }
}

impl IconRenderer for ClassIconRenderer {
    fn render_icon(&self, name: &str) -> Result<String> {
        if name.is_empty() {
            return Err(anyhow!("icon name must not be empty"));
        }
        Ok(format!(
            r#"<i class="{prefix} {prefix}-{name}" aria-hidden="true"></i>"#,
            prefix = self.prefix
        ))
    }
}

/// Result of [`convert_icon_tokens`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconConversion {
    /// Text after substitution.
    pub text: String,
    /// Whether at least one token was replaced.
    pub converted: bool,
}

impl IconConversion {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            converted: false,
        }
    }
}

/// Replace every `i:name` token in `text` with `renderer`'s markup.
///
/// With `enabled == false` the text is returned untouched without matching.
/// Matches do not overlap: the trailing whitespace of one token is consumed,
/// so `"i:a i:b"` only converts `i:a`.
///
/// # Errors
/// Propagates the first error returned by `renderer`.
pub fn convert_icon_tokens<R>(text: &str, enabled: bool, renderer: &R) -> Result<IconConversion>
where
    R: IconRenderer + ?Sized,
{
    if !enabled {
        return Ok(IconConversion::unchanged(text));
    }
    let pattern = ICON_TOKEN
        .as_ref()
        .map_err(|err| anyhow!("icon token pattern failed to compile: {err}"))?;

    let mut out = String::with_capacity(text.len());
    let mut last_end = 0;
    let mut count = 0_usize;
    for caps in pattern.captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        trace!("[ICON] converting token `{}`", name.as_str());
        out.push_str(&text[last_end..whole.start()]);
        out.push_str(group(&caps, 1));
        out.push_str(&renderer.render_icon(name.as_str())?);
        out.push_str(group(&caps, 3));
        last_end = whole.end();
        count += 1;
    }
    if count == 0 {
        return Ok(IconConversion::unchanged(text));
    }
    out.push_str(&text[last_end..]);
    debug!("[ICON] converted {count} icon token(s)");
    Ok(IconConversion {
        text: out,
        converted: true,
    })
}

fn group<'text>(caps: &Captures<'text>, index: usize) -> &'text str {
    caps.get(index).map_or("", |found| found.as_str())
}
