//! Helper configuration.
//!
//! Settings are fixed when a helper is built. They can be constructed in code,
//! parsed from JSON, or read from environment variables, and answer dotted-key
//! lookups such as `"buttons.type"`.

use crate::button::ButtonClassCheck;
use anyhow::{Context as _, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;

/// Default button variant used when `bootstrap-type` is not given.
pub const DEFAULT_BUTTON_TYPE: &str = "default";
/// Default icon font class prefix.
pub const DEFAULT_ICON_PREFIX: &str = "glyphicon";

/// Button defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Variant applied when a button has none (`btn-<type>`).
    #[serde(rename = "type")]
    pub kind: String,
    /// How an existing variant class is detected.
    pub check: ButtonClassCheck,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            kind: DEFAULT_BUTTON_TYPE.to_owned(),
            check: ButtonClassCheck::default(),
        }
    }
}

/// Icon markup settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Class prefix of the icon font (`glyphicon`, `fa`, ...).
    pub prefix: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_ICON_PREFIX.to_owned(),
        }
    }
}

/// Configuration of a [`crate::BootstrapHelper`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Whether `i:name` tokens are expanded into icons.
    #[serde(alias = "easyIcon")]
    pub easy_icon: bool,
    pub buttons: ButtonConfig,
    pub icon: IconConfig,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            easy_icon: true,
            buttons: ButtonConfig::default(),
            icon: IconConfig::default(),
        }
    }
}

impl HelperConfig {
    /// Construct a configuration with explicit values.
    #[inline]
    #[must_use]
    pub fn new(easy_icon: bool, button_type: impl Into<String>) -> Self {
        Self {
            easy_icon,
            buttons: ButtonConfig {
                kind: button_type.into(),
                ..ButtonConfig::default()
            },
            ..Self::default()
        }
    }

    /// Builder-style override of the variant check.
    #[inline]
    #[must_use]
    pub fn with_button_check(mut self, check: ButtonClassCheck) -> Self {
        self.buttons.check = check;
        self
    }

    /// Builder-style override of the icon prefix.
    #[inline]
    #[must_use]
    pub fn with_icon_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.icon.prefix = prefix.into();
        self
    }

    /// Parse a JSON document. Missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns an error if the document is not valid configuration JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse helper configuration")
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `BOOTSTRAP_EASY_ICON`: `0` or `false` disables icon expansion (default: enabled)
    /// - `BOOTSTRAP_BUTTON_TYPE`: default button variant (default: `default`)
    /// - `BOOTSTRAP_BUTTON_CHECK`: `substring` or `token` (default: `substring`;
    ///   other values log a warning and use the default)
    /// - `BOOTSTRAP_ICON_PREFIX`: icon font class prefix (default: `glyphicon`)
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let easy_icon = lookup("BOOTSTRAP_EASY_ICON").map_or(defaults.easy_icon, |val| {
            !matches!(val.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off")
        });
        let kind = lookup("BOOTSTRAP_BUTTON_TYPE")
            .map(|val| val.trim().to_owned())
            .filter(|val| !val.is_empty())
            .unwrap_or(defaults.buttons.kind);
        let check = lookup("BOOTSTRAP_BUTTON_CHECK")
            .map(|val| val.trim().to_owned())
            .filter(|val| !val.is_empty())
            .map_or(defaults.buttons.check, |val| {
                parse_button_check(&val).unwrap_or_else(|| {
                    warn!("[CONFIG] unknown BOOTSTRAP_BUTTON_CHECK `{val}`, using substring");
                    defaults.buttons.check
                })
            });
        let prefix = lookup("BOOTSTRAP_ICON_PREFIX")
            .map(|val| val.trim().to_owned())
            .filter(|val| !val.is_empty())
            .unwrap_or(defaults.icon.prefix);
        Self {
            easy_icon,
            buttons: ButtonConfig { kind, check },
            icon: IconConfig { prefix },
        }
    }

    /// Look up a setting by dotted key, e.g. `"buttons.type"` or `"easyIcon"`.
    pub fn get(&self, dotted_key: &str) -> Option<Value> {
        let mut current = serde_json::to_value(self).ok()?;
        for segment in dotted_key.split('.') {
            let segment = if segment == "easyIcon" {
                "easy_icon"
            } else {
                segment
            };
            current = current.get_mut(segment).map(Value::take)?;
        }
        Some(current)
    }
}

/// Case-insensitive `substring` / `token`; `None` for anything else.
fn parse_button_check(raw: &str) -> Option<ButtonClassCheck> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("token") {
        Some(ButtonClassCheck::Token)
    } else if trimmed.eq_ignore_ascii_case("substring") {
        Some(ButtonClassCheck::Substring)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    /// Tests the built-in defaults
    #[test]
    fn defaults() {
        let config = HelperConfig::default();
        assert!(config.easy_icon);
        assert_eq!(config.buttons.kind, "default");
        assert_eq!(config.buttons.check, ButtonClassCheck::Substring);
        assert_eq!(config.icon.prefix, "glyphicon");
    }

    /// Tests partial JSON documents
    ///
    /// # Errors
    /// Returns an error if parsing fails
    #[test]
    fn partial_json_keeps_defaults() -> Result<()> {
        let config =
            HelperConfig::from_json_str(r#"{"easyIcon": false, "buttons": {"type": "primary"}}"#)?;
        assert!(!config.easy_icon);
        assert_eq!(config.buttons.kind, "primary");
        assert_eq!(config.buttons.check, ButtonClassCheck::Substring);
        assert_eq!(config.icon.prefix, "glyphicon");
        Ok(())
    }

    /// Tests that malformed JSON is reported
    #[test]
    fn malformed_json_is_an_error() {
        let message = HelperConfig::from_json_str("{")
            .err()
            .map(|err| err.to_string());
        assert_eq!(
            message.as_deref(),
            Some("failed to parse helper configuration")
        );
    }

    /// Tests dotted-key lookups
    #[test]
    fn dotted_lookup() {
        let config = HelperConfig::new(false, "warning").with_button_check(ButtonClassCheck::Token);
        assert_eq!(config.get("buttons.type"), Some(json!("warning")));
        assert_eq!(config.get("buttons.check"), Some(json!("token")));
        assert_eq!(config.get("easyIcon"), Some(json!(false)));
        assert_eq!(config.get("icon.prefix"), Some(json!("glyphicon")));
        assert_eq!(config.get("buttons.missing"), None);
    }

    /// Tests environment-style loading
    #[test]
    fn lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("BOOTSTRAP_EASY_ICON", "false"),
            ("BOOTSTRAP_BUTTON_TYPE", " success "),
            ("BOOTSTRAP_BUTTON_CHECK", "Token"),
            ("BOOTSTRAP_ICON_PREFIX", "fa"),
        ]
        .into_iter()
        .collect();
        let config = HelperConfig::from_lookup(|name| vars.get(name).map(|val| (*val).to_owned()));
        assert!(!config.easy_icon);
        assert_eq!(config.buttons.kind, "success");
        assert_eq!(config.buttons.check, ButtonClassCheck::Token);
        assert_eq!(config.icon.prefix, "fa");
    }

    /// Tests that an unknown check mode falls back to substring
    #[test]
    fn unknown_check_mode_uses_default() {
        let config = HelperConfig::from_lookup(|name| {
            (name == "BOOTSTRAP_BUTTON_CHECK").then(|| "tokn".to_owned())
        });
        assert_eq!(config.buttons.check, ButtonClassCheck::Substring);
        assert_eq!(parse_button_check(" SUBSTRING "), Some(ButtonClassCheck::Substring));
        assert_eq!(parse_button_check("tokn"), None);
    }

    /// Tests that blank variables fall back to defaults
    #[test]
    fn blank_lookup_uses_defaults() {
        let config = HelperConfig::from_lookup(|_name| Some("   ".to_owned()));
        assert!(config.easy_icon);
        assert_eq!(config.buttons.kind, "default");
        assert_eq!(config.buttons.check, ButtonClassCheck::Substring);
        assert_eq!(config.icon.prefix, "glyphicon");
    }
}
