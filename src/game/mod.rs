//! The deck and its choose/match/score state machine.

pub mod memory;

pub use memory::{ChooseOutcome, MemoryGame, MATCH_REWARD, MISMATCH_PENALTY};
