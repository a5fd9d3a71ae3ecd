//! Themes and the catalog they live in.
//!
//! ## Key Types
//!
//! - `Theme`: Token pool, color label and adjustable pair count
//! - `ThemeCatalog`: Ordered themes, unique by name, with a current selection
//!
//! `theme_for` and `default_themes` expose the built-in registry.

pub mod catalog;
pub mod defaults;
pub mod theme;

pub use catalog::ThemeCatalog;
pub use defaults::{built_in_names, default_themes, theme_for};
pub use theme::{Theme, ThemeColor, DEFAULT_PAIR_COUNT};
