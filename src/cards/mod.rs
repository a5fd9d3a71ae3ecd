//! Cards and their render projection.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier unique within one deck
//! - `Card`: Content plus face-up, seen and matched flags
//! - `CardView`: What the presentation layer draws

pub mod card;

pub use card::{Card, CardId, CardView};
