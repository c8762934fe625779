//! View-helper mixin tying the class, button and icon utilities to a configuration.

use crate::button::derive_button_classes;
use crate::classes::{CLASS_KEY, ClassInput, add_class};
use crate::config::HelperConfig;
use crate::icon::{ClassIconRenderer, IconConversion, IconRenderer, convert_icon_tokens};
use crate::options::{OptionValue, Options};
use crate::shape::is_associative;
use anyhow::Result;
use log::debug;
use serde_json::Value;

/// Option telling the renderer whether the title must be HTML-escaped.
pub const ESCAPE_KEY: &str = "escape";

/// Shared behaviour of Bootstrap view helpers.
///
/// Implementors only provide their configuration and icon renderer; every
/// other method has a default implementation.
pub trait ClassOptionsHelper {
    /// Renderer used for `i:name` tokens.
    type Icons: IconRenderer + ?Sized;

    fn config(&self) -> &HelperConfig;

    fn icon_renderer(&self) -> &Self::Icons;

    /// Merge `input` into the `class` option.
    fn add_class(&self, options: Options, input: impl Into<ClassInput>) -> Options {
        add_class(options, input, CLASS_KEY)
    }

    /// Merge `input` into the option stored at `key`.
    fn add_class_to(&self, options: Options, input: impl Into<ClassInput>, key: &str) -> Options {
        add_class(options, input, key)
    }

    /// Replace `bootstrap-type` / `bootstrap-size` with `btn` classes.
    fn derive_button_classes(&self, options: Options) -> Options {
        let buttons = &self.config().buttons;
        derive_button_classes(options, &buttons.kind, buttons.check)
    }

    /// Whether `value` is a keyed container rather than a list.
    fn is_associative(&self, value: &Value) -> bool {
        is_associative(value)
    }

    /// Expand `i:name` tokens in `text` when easy icons are enabled.
    ///
    /// # Errors
    /// Propagates icon renderer failures.
    fn convert_icon_tokens(&self, text: &str) -> Result<IconConversion> {
        convert_icon_tokens(text, self.config().easy_icon, self.icon_renderer())
    }

    /// Expand icons in `title`, then call `render(title, options)`.
    ///
    /// When a token was converted the title now holds markup, so `escape`
    /// is set to `false` unless the caller already chose a value.
    ///
    /// # Errors
    /// Propagates icon renderer failures; `render` is not called then.
    fn with_icon_expansion<F, Out>(
        &self,
        render: F,
        title: &str,
        mut options: Options,
    ) -> Result<Out>
    where
        F: FnOnce(String, Options) -> Out,
    {
        let conversion = self.convert_icon_tokens(title)?;
        if conversion.converted {
            debug!("[ICON] title contains markup, disabling escape");
            options.insert_default(ESCAPE_KEY, OptionValue::Flag(false));
        }
        Ok(render(conversion.text, options))
    }
}

/// Ready-made helper holding a configuration and an icon renderer.
#[derive(Clone, Debug)]
pub struct BootstrapHelper<R = ClassIconRenderer> {
    config: HelperConfig,
    icons: R,
}

impl BootstrapHelper<ClassIconRenderer> {
    /// Build a helper whose icons use the configured class prefix.
    #[must_use]
    pub fn new(config: HelperConfig) -> Self {
        let icons = ClassIconRenderer::new(config.icon.prefix.clone());
        Self { config, icons }
    }
}

impl Default for BootstrapHelper<ClassIconRenderer> {
    fn default() -> Self {
        Self::new(HelperConfig::default())
    }
}

impl<R: IconRenderer> BootstrapHelper<R> {
    /// Build a helper with a host-provided icon renderer.
    #[inline]
    pub const fn with_renderer(config: HelperConfig, icons: R) -> Self {
        Self { config, icons }
    }
}

impl<R: IconRenderer> ClassOptionsHelper for BootstrapHelper<R> {
    type Icons = R;

    #[inline]
    fn config(&self) -> &HelperConfig {
        &self.config
    }

    #[inline]
    fn icon_renderer(&self) -> &R {
        &self.icons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use core::cell::Cell;

    /// Tests that a converted title turns escaping off
    ///
    /// # Errors
    /// Returns an error if icon rendering fails
    #[test]
    fn expansion_disables_escape() -> Result<()> {
        let helper = BootstrapHelper::new(HelperConfig::default());
        let (title, options) = helper.with_icon_expansion(
            |title, opts| (title, opts),
            "i:star label",
            Options::new(),
        )?;
        assert!(title.starts_with("<i class=\"glyphicon glyphicon-star\""));
        assert!(title.ends_with(" label"));
        assert_eq!(options.get(ESCAPE_KEY), Some(&OptionValue::Flag(false)));
        Ok(())
    }

    /// Tests that an explicit escape choice is kept
    ///
    /// # Errors
    /// Returns an error if icon rendering fails
    #[test]
    fn expansion_keeps_explicit_escape() -> Result<()> {
        let helper = BootstrapHelper::new(HelperConfig::default());
        let options = Options::new().with(ESCAPE_KEY, true);
        let escape = helper.with_icon_expansion(
            |_title, opts: Options| opts.get(ESCAPE_KEY).cloned(),
            "i:star",
            options,
        )?;
        assert_eq!(escape, Some(OptionValue::Flag(true)));
        Ok(())
    }

    /// Tests that plain titles leave options untouched
    ///
    /// # Errors
    /// Returns an error if icon rendering fails
    #[test]
    fn plain_title_passes_through() -> Result<()> {
        let helper = BootstrapHelper::new(HelperConfig::default());
        let options = Options::new().with("id", "x");
        let (title, out) =
            helper.with_icon_expansion(|title, opts| (title, opts), "Save", options.clone())?;
        assert_eq!(title, "Save");
        assert_eq!(out, options);
        Ok(())
    }

    /// Tests that disabled easy icons skip the renderer entirely
    ///
    /// # Errors
    /// Returns an error if icon rendering fails
    #[test]
    fn disabled_easy_icon_never_renders() -> Result<()> {
        let calls = Cell::new(0_u32);
        let renderer = |name: &str| -> Result<String> {
            calls.set(calls.get() + 1);
            Ok(name.to_owned())
        };
        let helper = BootstrapHelper::with_renderer(HelperConfig::new(false, "default"), renderer);
        let conversion = helper.convert_icon_tokens("i:star")?;
        assert_eq!(conversion.text, "i:star");
        assert!(!conversion.converted);
        assert_eq!(calls.get(), 0);
        Ok(())
    }

    /// Tests that render is skipped when the icon renderer fails
    #[test]
    fn renderer_failure_skips_render() {
        let renderer = |_name: &str| -> Result<String> { Err(anyhow!("no icons")) };
        let helper = BootstrapHelper::with_renderer(HelperConfig::default(), renderer);
        let rendered = Cell::new(false);
        let result =
            helper.with_icon_expansion(|_title, _opts| rendered.set(true), "i:x", Options::new());
        assert_eq!(result.ok(), None);
        assert!(!rendered.get());
    }

    /// Tests that button derivation reads the configured default type
    #[test]
    fn button_classes_use_configured_type() {
        let helper = BootstrapHelper::new(HelperConfig::new(true, "primary"));
        let options = helper.derive_button_classes(Options::new());
        assert_eq!(options.text(CLASS_KEY).as_deref(), Some("btn btn-primary"));
    }
}
