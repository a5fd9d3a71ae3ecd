//! Session and catalog configuration.
//!
//! - `ThemeConfig`: one theme as written in a configuration document
//! - `CatalogConfig`: which themes a catalog starts with
//! - `SessionConfig`: seed, corner radius and opening theme for a session
//!
//! Both top-level configs are plain serde types and load from JSON.
//!
//! ```
//! use memorize::core::CatalogConfig;
//!
//! let config = CatalogConfig::from_json(r#"{
//!     "themes": [{ "name": "Weather", "tokens": ["☀️", "🌧", "❄️"], "color": "blue" }]
//! }"#).unwrap();
//!
//! assert!(config.include_defaults);
//! assert_eq!(config.themes[0].name, "Weather");
//! ```

use serde::{Deserialize, Serialize};

use super::error::{CatalogError, SessionError};
use crate::session::ThemeSelector;
use crate::themes::ThemeColor;

/// Corner radius handed to the presentation layer when none is configured.
pub const DEFAULT_CORNER_RADIUS: f64 = 10.0;

/// A theme as described in configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Unique theme name.
    pub name: String,

    /// Token pool, one token per possible pair.
    pub tokens: Vec<String>,

    #[serde(default)]
    pub color: ThemeColor,

    /// Starting pair count. Clamped into the pool; `None` keeps the default.
    #[serde(default)]
    pub pair_count: Option<usize>,
}

impl ThemeConfig {
    pub fn new<I, T>(name: impl Into<String>, tokens: I, color: ThemeColor) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            tokens: tokens.into_iter().map(Into::into).collect(),
            color,
            pair_count: None,
        }
    }

    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = Some(pair_count);
        self
    }
}

/// Themes a catalog is built from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Start from the built-in themes.
    pub include_defaults: bool,

    /// Accept themes with no tokens. They deal empty decks.
    pub allow_empty: bool,

    /// Extra themes, appended after the built-ins.
    pub themes: Vec<ThemeConfig>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_defaults: true,
            allow_empty: false,
            themes: Vec::new(),
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn without_defaults(mut self) -> Self {
        self.include_defaults = false;
        self
    }

    #[must_use]
    pub fn allowing_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ThemeConfig) -> Self {
        self.themes.push(theme);
        self
    }
}

/// Session settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Card corner radius for the presentation layer. No gameplay meaning.
    pub corner_radius: f64,

    /// Theme the first game is dealt from.
    pub initial_theme: ThemeSelector,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            corner_radius: DEFAULT_CORNER_RADIUS,
            initial_theme: ThemeSelector::Index(0),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON session document.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    #[must_use]
    pub fn with_initial_theme(mut self, selector: ThemeSelector) -> Self {
        self.initial_theme = selector;
        self
    }
}
