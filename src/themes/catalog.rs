//! Theme catalog: the ordered set of themes and the current selection.
//!
//! The catalog is an owned value. A session takes it at construction and
//! mutates it in place; the current selection and every theme's pair count
//! outlive individual games.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::defaults::default_themes;
use super::theme::{Theme, ThemeColor};
use crate::core::{CatalogConfig, CatalogError, GameRng};

/// Ordered collection of themes, unique by name.
///
/// ## Example
///
/// ```
/// use memorize::themes::{ThemeCatalog, ThemeColor};
///
/// let mut catalog = ThemeCatalog::with_defaults();
/// assert!(catalog.add_theme("Weather", ["☀️", "🌧", "❄️", "🌈"], ThemeColor::Blue));
/// assert!(!catalog.add_theme("Weather", ["⚡️"], ThemeColor::Gray));
///
/// assert_eq!(catalog.get("Weather").unwrap().content_pool().len(), 4);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "CatalogSnapshot", into = "CatalogSnapshot")]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
    by_name: FxHashMap<String, usize>,
    current: usize,
}

impl ThemeCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the built-in themes, first one selected.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_themes(default_themes())
    }

    /// Build a catalog from themes in order. Later duplicates are dropped.
    pub fn from_themes(themes: impl IntoIterator<Item = Theme>) -> Self {
        let mut catalog = Self::new();
        for theme in themes {
            catalog.insert(theme);
        }
        catalog
    }

    /// Build a catalog from configuration.
    ///
    /// Built-in themes come first when requested, then configured themes in
    /// order. A configured theme whose name already exists is ignored.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut catalog = if config.include_defaults {
            Self::with_defaults()
        } else {
            Self::new()
        };

        for theme_config in &config.themes {
            if theme_config.tokens.is_empty() && !config.allow_empty {
                return Err(CatalogError::EmptyPool {
                    name: theme_config.name.clone(),
                });
            }
            let mut theme = Theme::new(
                theme_config.name.clone(),
                theme_config.tokens.iter().cloned(),
                theme_config.color,
            );
            if let Some(pair_count) = theme_config.pair_count {
                theme = theme.with_pair_count(pair_count);
            }
            catalog.insert(theme);
        }

        Ok(catalog)
    }

    /// Append a theme unless one with the same name exists.
    ///
    /// Returns whether the theme was added. A duplicate is not an error.
    pub fn add_theme<I, T>(&mut self, name: impl Into<String>, tokens: I, color: ThemeColor) -> bool
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.insert(Theme::new(name, tokens, color))
    }

    /// Append an already-built theme unless its name is taken.
    pub fn insert(&mut self, theme: Theme) -> bool {
        if self.by_name.contains_key(theme.name()) {
            debug!(theme = theme.name(), "duplicate theme ignored");
            return false;
        }
        debug!(theme = theme.name(), tokens = theme.content_pool().len(), "theme added");
        self.by_name.insert(theme.name().to_string(), self.themes.len());
        self.themes.push(theme);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.position(name).map(|index| &self.themes[index])
    }

    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Theme> {
        self.themes.get(index)
    }

    /// Catalog index of the theme with this name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Index of the selected theme.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The selected theme, or `None` for an empty catalog.
    #[must_use]
    pub fn current(&self) -> Option<&Theme> {
        self.themes.get(self.current)
    }

    /// Select the theme at `index`. Returns `false` if out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.themes.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Add a pair to the selected theme.
    pub fn increase_pairs(&mut self) -> bool {
        self.adjust_current(Theme::increase_pairs)
    }

    /// Remove a pair from the selected theme.
    pub fn decrease_pairs(&mut self) -> bool {
        self.adjust_current(Theme::decrease_pairs)
    }

    fn adjust_current(&mut self, adjust: fn(&mut Theme) -> bool) -> bool {
        let Some(theme) = self.themes.get_mut(self.current) else {
            return false;
        };
        let applied = adjust(theme);
        debug!(theme = theme.name(), pairs = theme.pair_count(), applied, "pair count adjusted");
        applied
    }

    /// Uniformly pick a catalog index. `None` for an empty catalog.
    pub fn random_index(&self, rng: &mut GameRng) -> Option<usize> {
        rng.choose_index(self.themes.len())
    }

    /// Uniformly pick a theme, including themes added at runtime.
    pub fn random_theme(&self, rng: &mut GameRng) -> Option<&Theme> {
        self.random_index(rng).map(|index| &self.themes[index])
    }
}

/// Serialized form: the name index is rebuilt on load and an out-of-range
/// selection is clamped to the last theme.
#[derive(Serialize, Deserialize)]
struct CatalogSnapshot {
    themes: Vec<Theme>,
    current: usize,
}

impl From<CatalogSnapshot> for ThemeCatalog {
    fn from(snapshot: CatalogSnapshot) -> Self {
        let mut catalog = Self::from_themes(snapshot.themes);
        let last = catalog.len().saturating_sub(1);
        catalog.current = snapshot.current.min(last);
        catalog
    }
}

impl From<ThemeCatalog> for CatalogSnapshot {
    fn from(catalog: ThemeCatalog) -> Self {
        Self {
            themes: catalog.themes,
            current: catalog.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ThemeConfig;

    #[test]
    fn test_defaults_select_first() {
        let catalog = ThemeCatalog::with_defaults();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.current_index(), 0);
        assert_eq!(catalog.current().unwrap().name(), "Halloween");
        assert_eq!(catalog.position("Food"), Some(4));
    }

    #[test]
    fn test_add_theme_appends_and_ignores_duplicates() {
        let mut catalog = ThemeCatalog::with_defaults();

        assert!(catalog.add_theme("Flags", ["🇫🇷", "🇯🇵", "🇧🇷"], ThemeColor::Pink));
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.position("Flags"), Some(6));

        assert!(!catalog.add_theme("Animals", ["🦄"], ThemeColor::Pink));
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.get("Animals").unwrap().color(), ThemeColor::Green);
    }

    #[test]
    fn test_select_bounds() {
        let mut catalog = ThemeCatalog::with_defaults();
        assert!(catalog.select(3));
        assert_eq!(catalog.current_index(), 3);

        assert!(!catalog.select(6));
        assert_eq!(catalog.current_index(), 3);
    }

    #[test]
    fn test_pair_adjustment_targets_current_theme() {
        let mut catalog = ThemeCatalog::with_defaults();
        catalog.select(1);

        assert!(catalog.increase_pairs());
        assert_eq!(catalog.get("Animals").unwrap().pair_count(), 4);
        assert_eq!(catalog.get("Halloween").unwrap().pair_count(), 3);

        // Selection change keeps the adjusted count.
        catalog.select(0);
        catalog.select(1);
        assert_eq!(catalog.current().unwrap().pair_count(), 4);
    }

    #[test]
    fn test_pair_adjustment_on_empty_catalog() {
        let mut catalog = ThemeCatalog::new();
        assert!(catalog.current().is_none());
        assert!(!catalog.increase_pairs());
        assert!(!catalog.decrease_pairs());
    }

    #[test]
    fn test_random_theme_covers_catalog() {
        let mut catalog = ThemeCatalog::with_defaults();
        catalog.add_theme("Runtime", ["x", "y"], ThemeColor::Gray);
        let mut rng = GameRng::new(42);

        let mut hits = vec![0usize; catalog.len()];
        for _ in 0..700 {
            hits[catalog.random_index(&mut rng).unwrap()] += 1;
        }
        assert!(hits.iter().all(|&n| n > 0));

        assert!(ThemeCatalog::new().random_theme(&mut rng).is_none());
    }

    #[test]
    fn test_from_config() {
        let config = CatalogConfig::new()
            .with_theme(ThemeConfig::new("Weather", ["☀️", "🌧", "❄️", "🌈", "🌪"], ThemeColor::Blue).with_pair_count(5))
            .with_theme(ThemeConfig::new("Halloween", ["🧛"], ThemeColor::Red));

        let catalog = ThemeCatalog::from_config(&config).unwrap();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.get("Weather").unwrap().pair_count(), 5);
        assert_eq!(catalog.get("Halloween").unwrap().color(), ThemeColor::Orange);
    }

    #[test]
    fn test_from_config_rejects_empty_pool() {
        let config = CatalogConfig::new()
            .without_defaults()
            .with_theme(ThemeConfig::new("Blank", Vec::<String>::new(), ThemeColor::Gray));

        let err = ThemeCatalog::from_config(&config).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyPool { ref name } if name == "Blank"));

        let catalog = ThemeCatalog::from_config(&config.allowing_empty()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.current().unwrap().is_playable());
    }

    #[test]
    fn test_serde_rebuilds_name_index() {
        let mut catalog = ThemeCatalog::with_defaults();
        catalog.add_theme("Flags", ["🇫🇷", "🇯🇵"], ThemeColor::Pink);
        catalog.select(6);

        let json = serde_json::to_string(&catalog).unwrap();
        let restored: ThemeCatalog = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 7);
        assert_eq!(restored.current_index(), 6);
        assert_eq!(restored.position("Flags"), Some(6));
    }

    #[test]
    fn test_serde_clamps_stale_selection() {
        let json = r#"{ "themes": [
            { "name": "One", "content_pool": ["a", "b"] },
            { "name": "Two", "content_pool": ["c", "d"] }
        ], "current": 9 }"#;
        let restored: ThemeCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(restored.current_index(), 1);
        assert_eq!(restored.current().unwrap().name(), "Two");

        let empty: ThemeCatalog = serde_json::from_str(r#"{ "themes": [], "current": 3 }"#).unwrap();
        assert_eq!(empty.current_index(), 0);
        assert!(empty.current().is_none());
    }

    #[test]
    fn test_serde_clamps_theme_pair_counts() {
        let json = r#"{ "themes": [{ "name": "Short", "content_pool": ["a"], "pair_count": 5 }], "current": 0 }"#;
        let restored: ThemeCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(restored.current().unwrap().pair_count(), 1);
    }
}
