//! Game session: the surface a presentation layer talks to.
//!
//! A `GameSession` owns the theme catalog, the current game and the RNG.
//! Intents (`choose`, `new_game`, `reset`, `increase_cards`,
//! `decrease_cards`) go in; read-only projections come out.
//!
//! Every intent except `choose` throws away the current game. When
//! [`GameSession::needs_confirmation`] is true the caller should ask the
//! player before sending one.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::cards::{Card, CardId, CardView};
use crate::core::{GameRng, SessionConfig, SessionError};
use crate::game::{ChooseOutcome, MemoryGame};
use crate::themes::{Theme, ThemeCatalog, ThemeColor};

/// Which theme a new game is dealt from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeSelector {
    /// Catalog position.
    Index(usize),
    /// Catalog entry with this name.
    Named(String),
    /// This theme. Added to the catalog first if the name is new; if the
    /// name exists, the catalog entry is used as-is.
    Theme(Theme),
    /// Uniform pick over the whole catalog.
    Random,
}

/// One player's running session.
///
/// ## Example
///
/// ```
/// use memorize::core::SessionConfig;
/// use memorize::session::{GameSession, ThemeSelector};
/// use memorize::themes::ThemeCatalog;
///
/// let config = SessionConfig::new().with_seed(42);
/// let mut session = GameSession::new(ThemeCatalog::with_defaults(), &config).unwrap();
/// assert_eq!(session.theme_name(), "Halloween");
/// assert_eq!(session.cards().len(), 6);
///
/// assert!(session.increase_cards());
/// assert_eq!(session.cards().len(), 8);
///
/// session.new_game(ThemeSelector::Named("Food".into())).unwrap();
/// assert_eq!(session.theme_name(), "Food");
/// assert!(!session.needs_confirmation());
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    catalog: ThemeCatalog,
    game: MemoryGame<String>,
    rng: GameRng,
    corner_radius: f64,
}

impl GameSession {
    /// Start a session over `catalog` and deal the first game.
    pub fn new(catalog: ThemeCatalog, config: &SessionConfig) -> Result<Self, SessionError> {
        if catalog.is_empty() {
            return Err(SessionError::EmptyCatalog);
        }
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(seed = rng.seed(), themes = catalog.len(), "session started");

        let mut session = Self {
            catalog,
            game: MemoryGame::from_cards(Vec::new()),
            rng,
            corner_radius: config.corner_radius,
        };
        session.new_game(config.initial_theme.clone())?;
        Ok(session)
    }

    // === Intents ===

    /// Select a theme and replace the current game with a fresh deal.
    ///
    /// On error the selection and the current game are left untouched.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, selector: ThemeSelector) -> Result<(), SessionError> {
        let index = self.resolve(selector)?;
        self.catalog.select(index);
        self.deal();
        Ok(())
    }

    /// Select a theme by name and deal.
    pub fn select_theme(&mut self, name: &str) -> Result<(), SessionError> {
        self.new_game(ThemeSelector::Named(name.to_string()))
    }

    /// Redeal the current theme. Score starts over at zero.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.deal();
    }

    /// Add a pair to the current theme and redeal.
    ///
    /// Returns `false`, leaving the game alone, when the theme is already at
    /// its pool size.
    #[instrument(skip(self))]
    pub fn increase_cards(&mut self) -> bool {
        let applied = self.catalog.increase_pairs();
        if applied {
            self.deal();
        }
        applied
    }

    /// Remove a pair from the current theme and redeal.
    ///
    /// Returns `false`, leaving the game alone, at one pair.
    #[instrument(skip(self))]
    pub fn decrease_cards(&mut self) -> bool {
        let applied = self.catalog.decrease_pairs();
        if applied {
            self.deal();
        }
        applied
    }

    /// Choose a card in the current game.
    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        self.game.choose(id)
    }

    /// Add a theme to the catalog without changing the current game.
    pub fn add_theme<I, T>(&mut self, name: impl Into<String>, tokens: I, color: ThemeColor) -> bool
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.catalog.add_theme(name, tokens, color)
    }

    pub fn set_corner_radius(&mut self, radius: f64) {
        self.corner_radius = radius;
    }

    // === Queries ===

    /// The player has done something a new deal would throw away.
    #[must_use]
    pub fn is_begun(&self) -> bool {
        self.game.any_face_up() || self.game.any_matched() || self.game.any_seen()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game.all_matched()
    }

    /// Whether a game-discarding intent should be confirmed first.
    #[must_use]
    pub fn needs_confirmation(&self) -> bool {
        self.is_begun() && !self.is_over()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.game.score()
    }

    #[must_use]
    pub fn best_possible_score(&self) -> i64 {
        self.game.best_possible_score()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card<String>] {
        self.game.cards()
    }

    #[must_use]
    pub fn card_views(&self) -> Vec<CardView<String>> {
        self.game.views()
    }

    #[must_use]
    pub fn game(&self) -> &MemoryGame<String> {
        &self.game
    }

    #[must_use]
    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    /// The theme the current game was dealt from.
    #[must_use]
    pub fn theme(&self) -> Option<&Theme> {
        self.catalog.current()
    }

    #[must_use]
    pub fn theme_name(&self) -> &str {
        self.theme().map_or("", Theme::name)
    }

    #[must_use]
    pub fn theme_color(&self) -> ThemeColor {
        self.theme().map(Theme::color).unwrap_or_default()
    }

    #[must_use]
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Seed the session's RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Internals ===

    fn resolve(&mut self, selector: ThemeSelector) -> Result<usize, SessionError> {
        match selector {
            ThemeSelector::Index(index) if index < self.catalog.len() => Ok(index),
            ThemeSelector::Index(index) => Err(SessionError::ThemeIndexOutOfRange {
                index,
                len: self.catalog.len(),
            }),
            ThemeSelector::Named(name) => self.catalog.position(&name).ok_or(SessionError::UnknownTheme(name)),
            ThemeSelector::Theme(theme) => {
                let name = theme.name().to_string();
                self.catalog.insert(theme);
                self.catalog.position(&name).ok_or(SessionError::UnknownTheme(name))
            }
            ThemeSelector::Random => self.catalog.random_index(&mut self.rng).ok_or(SessionError::EmptyCatalog),
        }
    }

    /// Replace the game with a fresh deal from the current theme.
    fn deal(&mut self) {
        let Some(theme) = self.catalog.current() else {
            return;
        };
        if !theme.is_playable() {
            warn!(theme = theme.name(), "dealing an empty deck from a theme with no tokens");
        }
        let pairs = theme.pair_count().min(theme.content_pool().len());
        self.game = MemoryGame::new(pairs, &mut self.rng, |pair| {
            theme.token(pair).unwrap_or_default().to_string()
        });
        info!(theme = theme.name(), pairs = theme.pair_count(), "new game dealt");
    }
}
