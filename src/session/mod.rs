//! Session controller: creates and replaces games, selects themes.

pub mod controller;

pub use controller::{GameSession, ThemeSelector};
