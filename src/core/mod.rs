//! Core building blocks: RNG, configuration, errors.
//!
//! Nothing here knows about cards or themes beyond the configuration types
//! that describe them.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{CatalogConfig, SessionConfig, ThemeConfig, DEFAULT_CORNER_RADIUS};
pub use error::{CatalogError, SessionError};
pub use rng::GameRng;
