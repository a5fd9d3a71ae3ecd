//! # memorize
//!
//! Game-state engine for a themed memory (concentration) card game.
//!
//! A shuffled deck of paired tokens lies face-down. The player reveals cards
//! one at a time; two equal tokens in a row score a match, and turning a
//! previously seen card back down costs a point.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No rendering, layout or animation. A UI
//!    reads projections and forwards intents.
//!
//! 2. **No Hidden Globals**: The theme catalog and RNG are owned by a
//!    `GameSession` and passed in at construction.
//!
//! 3. **No-Op Over Failure**: Choosing an unavailable card or adjusting a
//!    pair count past its bounds changes nothing and says so.
//!
//! ## Modules
//!
//! - `core`: Seeded RNG, configuration, errors
//! - `cards`: Card identity, flags and render projection
//! - `game`: The deck and its choose/match/score state machine
//! - `themes`: Themes, built-in registry and catalog
//! - `session`: Session controller consumed by the presentation layer

pub mod core;
pub mod cards;
pub mod game;
pub mod themes;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CatalogConfig, CatalogError, GameRng, SessionConfig, SessionError, ThemeConfig,
};

pub use crate::cards::{Card, CardId, CardView};

pub use crate::game::{ChooseOutcome, MemoryGame, MATCH_REWARD, MISMATCH_PENALTY};

pub use crate::themes::{default_themes, theme_for, Theme, ThemeCatalog, ThemeColor};

pub use crate::session::{GameSession, ThemeSelector};
