//! Error types for configuration and theme addressing.
//!
//! Gameplay itself never fails: choosing an unavailable card or adjusting a
//! pair count past its bounds is a no-op reported through return values.
//! These errors cover configuration that does not parse and selectors that
//! point at nothing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid catalog configuration")]
    InvalidConfig(#[from] serde_json::Error),
    #[error("theme {name:?} has no tokens")]
    EmptyPool { name: String },
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("the theme catalog is empty")]
    EmptyCatalog,
    #[error("theme index {index} is out of range for a catalog of {len}")]
    ThemeIndexOutOfRange { index: usize, len: usize },
    #[error("no theme named {0:?}")]
    UnknownTheme(String),
    #[error("invalid session configuration")]
    InvalidConfig(#[from] serde_json::Error),
}
