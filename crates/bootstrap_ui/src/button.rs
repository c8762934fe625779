//! Bootstrap button classes from `bootstrap-type` / `bootstrap-size` shorthands.

use crate::classes::{CLASS_KEY, add_class};
use crate::options::{OptionValue, Options};
use log::debug;
use once_cell::sync::Lazy;
use regex::{Error as RegexError, Regex};
use serde::{Deserialize, Serialize};

/// Shorthand option naming the button variant (`primary`, `danger`, ...).
pub const TYPE_KEY: &str = "bootstrap-type";
/// Shorthand option naming the button size (`lg`, `sm`, ...).
pub const SIZE_KEY: &str = "bootstrap-size";

const BTN_PREFIX: &str = "btn-";

/// Any `btn-` followed by lowercase letters, anywhere in the class string.
static BTN_WORD: Lazy<Result<Regex, RegexError>> = Lazy::new(|| Regex::new("btn-[a-z]+"));

/// Classes that start with `btn-` but do not name a button variant.
const MODIFIER_CLASSES: [&str; 5] = ["btn-lg", "btn-sm", "btn-xs", "btn-block", "btn-group"];

/// How to decide that a caller already supplied a button variant class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonClassCheck {
    /// Any `btn-` followed by a lowercase letter anywhere in the class string.
    ///
    /// `btn-block` or `my-btn-x` also suppress the automatic variant class.
    #[default]
    Substring,
    /// Only whole `btn-<lowercase>` tokens that are not size or layout modifiers.
    Token,
}

impl ButtonClassCheck {
    /// Whether `classes` already carries a variant class under this check.
    pub fn has_variant(self, classes: &str) -> bool {
        match self {
            Self::Substring => contains_btn_word(classes),
            Self::Token => classes.split_whitespace().any(|token| {
                is_lowercase_btn_class(token) && !MODIFIER_CLASSES.contains(&token)
            }),
        }
    }
}

/// Unanchored search for `btn-[a-z]+`.
fn contains_btn_word(haystack: &str) -> bool {
    BTN_WORD
        .as_ref()
        .is_ok_and(|pattern| pattern.is_match(haystack))
}

fn is_lowercase_btn_class(token: &str) -> bool {
    token.strip_prefix(BTN_PREFIX).is_some_and(|rest| {
        !rest.is_empty() && rest.bytes().all(|byte| byte.is_ascii_lowercase())
    })
}

/// Turn the button shorthands in `options` into `btn` classes.
///
/// `bootstrap-type` falls back to `default_type`, `bootstrap-size` to unset.
/// Both keys are removed. `btn` is always added, `btn-<type>` only when `check`
/// finds no variant class yet, and `btn-<size>` when the size is truthy.
pub fn derive_button_classes(
    mut options: Options,
    default_type: &str,
    check: ButtonClassCheck,
) -> Options {
    let kind = options
        .remove(TYPE_KEY)
        .unwrap_or_else(|| OptionValue::from(default_type));
    let size = options.remove(SIZE_KEY).unwrap_or(OptionValue::Flag(false));

    options = add_class(options, "btn", CLASS_KEY);
    let current = options
        .text(CLASS_KEY)
        .unwrap_or_default()
        .into_owned();
    if !check.has_variant(&current) {
        options = add_class(options, format!("{BTN_PREFIX}{}", kind.to_text()), CLASS_KEY);
    }
    if size.is_truthy() {
        options = add_class(options, format!("{BTN_PREFIX}{}", size.to_text()), CLASS_KEY);
    }

    debug!(
        "[BUTTON] derived classes: {}",
        options.text(CLASS_KEY).unwrap_or_default()
    );
    options
}
