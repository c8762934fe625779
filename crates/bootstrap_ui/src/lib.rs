//! Bootstrap UI - class and icon helpers for server-rendered Bootstrap views
//!
//! This crate rewrites the option dictionaries handed to view helpers: it merges
//! CSS class lists, turns `bootstrap-type` / `bootstrap-size` shorthands into
//! `btn-*` classes, and expands inline `i:icon-name` tokens into icon markup.
//! Rendering itself is left to the host view layer.

#![forbid(unsafe_code)]

pub mod button;
pub mod classes;
pub mod config;
pub mod helper;
pub mod icon;
pub mod options;
pub mod shape;

pub use button::ButtonClassCheck;
pub use classes::{ClassInput, ClassList, add_class};
pub use config::{ButtonConfig, HelperConfig, IconConfig};
pub use helper::{BootstrapHelper, ClassOptionsHelper};
pub use icon::{ClassIconRenderer, IconConversion, IconRenderer, convert_icon_tokens};
pub use options::{OptionValue, Options};
pub use shape::{is_associative, is_associative_keys};
