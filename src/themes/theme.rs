//! A theme: a named pool of tokens, a display color and a pair count.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Pair count a theme starts with, capped by the size of its pool.
pub const DEFAULT_PAIR_COUNT: usize = 3;

/// Semantic color label. The presentation layer maps it to real colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    Red,
    #[default]
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Gray,
}

impl std::fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Gray => "gray",
        };
        f.write_str(name)
    }
}

/// Named content set from which decks are dealt.
///
/// Tokens in the pool are distinct. `pair_count` always stays within
/// `[1, pool size]`; a theme with an empty pool has a pair count of zero and
/// deals an empty deck. Deserialized themes are rebuilt through the same
/// rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ThemeSnapshot", into = "ThemeSnapshot")]
pub struct Theme {
    name: String,
    content_pool: Vec<String>,
    color: ThemeColor,
    pair_count: usize,
}

impl Theme {
    /// Create a theme with the default pair count.
    ///
    /// Repeated tokens are dropped, keeping the first occurrence.
    pub fn new<I, T>(name: impl Into<String>, tokens: I, color: ThemeColor) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut distinct = FxHashSet::default();
        let content_pool: Vec<String> = tokens
            .into_iter()
            .map(Into::into)
            .filter(|token: &String| distinct.insert(token.clone()))
            .collect();
        let pair_count = DEFAULT_PAIR_COUNT.min(content_pool.len());
        Self {
            name: name.into(),
            content_pool,
            color,
            pair_count,
        }
    }

    /// A theme with no tokens. It deals zero-card decks.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::<String>::new(), ThemeColor::default())
    }

    /// Set the starting pair count, clamped into `[1, pool size]`.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        let pool = self.content_pool.len();
        self.pair_count = if pool == 0 { 0 } else { pair_count.clamp(1, pool) };
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn content_pool(&self) -> &[String] {
        &self.content_pool
    }

    #[must_use]
    pub fn color(&self) -> ThemeColor {
        self.color
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Whether a deck dealt from this theme would have any cards.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.pair_count > 0
    }

    /// Token for pair `index` of a deal.
    #[must_use]
    pub fn token(&self, index: usize) -> Option<&str> {
        self.content_pool.get(index).map(String::as_str)
    }

    /// Add one pair. Returns `false`, changing nothing, at the pool size.
    pub fn increase_pairs(&mut self) -> bool {
        self.adjust_pairs(self.pair_count.checked_add(1))
    }

    /// Remove one pair. Returns `false`, changing nothing, at one pair.
    pub fn decrease_pairs(&mut self) -> bool {
        self.adjust_pairs(self.pair_count.checked_sub(1))
    }

    fn adjust_pairs(&mut self, next: Option<usize>) -> bool {
        match next {
            Some(next) if (1..=self.content_pool.len()).contains(&next) => {
                self.pair_count = next;
                true
            }
            _ => false,
        }
    }
}

/// Serialized form: loading goes back through `Theme::new`.
#[derive(Serialize, Deserialize)]
struct ThemeSnapshot {
    name: String,
    content_pool: Vec<String>,
    #[serde(default)]
    color: ThemeColor,
    #[serde(default)]
    pair_count: Option<usize>,
}

impl From<ThemeSnapshot> for Theme {
    fn from(snapshot: ThemeSnapshot) -> Self {
        let theme = Self::new(snapshot.name, snapshot.content_pool, snapshot.color);
        match snapshot.pair_count {
            Some(pair_count) => theme.with_pair_count(pair_count),
            None => theme,
        }
    }
}

impl From<Theme> for ThemeSnapshot {
    fn from(theme: Theme) -> Self {
        Self {
            name: theme.name,
            content_pool: theme.content_pool,
            color: theme.color,
            pair_count: Some(theme.pair_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces() -> Theme {
        Theme::new("Faces", ["😀", "😂", "😍", "🤔", "😴"], ThemeColor::Yellow)
    }

    #[test]
    fn test_new_uses_default_pair_count() {
        let theme = faces();
        assert_eq!(theme.name(), "Faces");
        assert_eq!(theme.content_pool().len(), 5);
        assert_eq!(theme.color(), ThemeColor::Yellow);
        assert_eq!(theme.pair_count(), DEFAULT_PAIR_COUNT);
    }

    #[test]
    fn test_small_pool_caps_pair_count() {
        let theme = Theme::new("Tiny", ["a", "b"], ThemeColor::Gray);
        assert_eq!(theme.pair_count(), 2);
    }

    #[test]
    fn test_empty_theme_is_unplayable() {
        let theme = Theme::empty("Nothing");
        assert_eq!(theme.pair_count(), 0);
        assert!(!theme.is_playable());
        assert_eq!(theme.token(0), None);
    }

    #[test]
    fn test_increase_stops_at_pool_size() {
        let mut theme = faces();
        assert!(theme.increase_pairs());
        assert!(theme.increase_pairs());
        assert_eq!(theme.pair_count(), 5);

        assert!(!theme.increase_pairs());
        assert_eq!(theme.pair_count(), 5);
    }

    #[test]
    fn test_decrease_stops_at_one() {
        let mut theme = faces();
        assert!(theme.decrease_pairs());
        assert!(theme.decrease_pairs());
        assert_eq!(theme.pair_count(), 1);

        assert!(!theme.decrease_pairs());
        assert_eq!(theme.pair_count(), 1);
    }

    #[test]
    fn test_empty_theme_cannot_adjust() {
        let mut theme = Theme::empty("Nothing");
        assert!(!theme.increase_pairs());
        assert!(!theme.decrease_pairs());
        assert_eq!(theme.pair_count(), 0);
    }

    #[test]
    fn test_with_pair_count_clamps() {
        assert_eq!(faces().with_pair_count(99).pair_count(), 5);
        assert_eq!(faces().with_pair_count(0).pair_count(), 1);
        assert_eq!(faces().with_pair_count(4).pair_count(), 4);
        assert_eq!(Theme::empty("x").with_pair_count(3).pair_count(), 0);
    }

    #[test]
    fn test_repeated_tokens_are_dropped() {
        let theme = Theme::new("Dup", ["x", "y", "x", "z", "y"], ThemeColor::Gray);
        assert_eq!(theme.content_pool(), ["x", "y", "z"]);

        let mut pair = Theme::new("Pair", ["x", "x"], ThemeColor::Gray);
        assert_eq!(pair.pair_count(), 1);
        assert!(!pair.increase_pairs());
    }

    #[test]
    fn test_deserialize_clamps_pair_count() {
        let theme: Theme = serde_json::from_str(
            r#"{ "name": "Bad", "content_pool": ["a", "a"], "color": "red", "pair_count": 3 }"#,
        )
        .unwrap();
        assert_eq!(theme.content_pool(), ["a"]);
        assert_eq!(theme.pair_count(), 1);

        let empty: Theme = serde_json::from_str(r#"{ "name": "Empty", "content_pool": [], "pair_count": 2 }"#).unwrap();
        assert_eq!(empty.pair_count(), 0);
    }

    #[test]
    fn test_serde_keeps_adjusted_pair_count() {
        let mut theme = faces();
        theme.increase_pairs();

        let json = serde_json::to_string(&theme).unwrap();
        let restored: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, theme);
        assert_eq!(restored.pair_count(), 4);
    }

    #[test]
    fn test_color_serde_is_lowercase() {
        let json = serde_json::to_string(&ThemeColor::Purple).unwrap();
        assert_eq!(json, "\"purple\"");
        assert_eq!(ThemeColor::Purple.to_string(), "purple");
    }
}
