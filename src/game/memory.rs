//! The memory game state machine.
//!
//! A `MemoryGame` owns the shuffled deck and the score. The only mutation
//! entry point during play is [`MemoryGame::choose`]; everything else is a
//! read-only query.
//!
//! ## Rules
//!
//! - Choosing a face-up or matched card does nothing.
//! - With no unmatched card face-up, the chosen card is turned face-up.
//! - With one unmatched card face-up, contents are compared. Equal contents mark both
//!   cards matched and score [`MATCH_REWARD`]. Either way the chosen card
//!   becomes the one face-up card, and the previous one is turned down.
//! - Turning down a card that was already seen and is not matched costs
//!   [`MISMATCH_PENALTY`].
//!
//! A freshly matched card stays face-up until the next choice turns it down.
//!
//! ```
//! use memorize::core::GameRng;
//! use memorize::game::{ChooseOutcome, MemoryGame};
//!
//! let mut rng = GameRng::new(1);
//! let mut game = MemoryGame::new(2, &mut rng, |pair| ["🐶", "🐱"][pair]);
//!
//! let dogs: Vec<_> = game.cards().iter().filter(|c| *c.content() == "🐶").map(|c| c.id()).collect();
//! game.choose(dogs[0]);
//! assert!(matches!(game.choose(dogs[1]), ChooseOutcome::Matched { .. }));
//! assert_eq!(game.score(), 2);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{Card, CardId, CardView};
use crate::core::GameRng;

/// Points scored for each pair found.
pub const MATCH_REWARD: i64 = 2;

/// Points lost each time a seen, unmatched card is turned back down.
pub const MISMATCH_PENALTY: i64 = 1;

/// What a call to [`MemoryGame::choose`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChooseOutcome {
    /// No card has that id.
    UnknownCard,
    /// The card was already face-up or matched.
    Ignored,
    /// No unmatched card was face-up; the chosen card is now the only one.
    Revealed { penalty: i64 },
    /// The chosen card matched the face-up card.
    Matched { partner: CardId, penalty: i64 },
    /// The chosen card did not match the face-up card.
    Mismatched { other: CardId, penalty: i64 },
}

impl ChooseOutcome {
    /// Net change to the score caused by this choice.
    #[must_use]
    pub fn score_delta(&self) -> i64 {
        match *self {
            Self::UnknownCard | Self::Ignored => 0,
            Self::Revealed { penalty } | Self::Mismatched { penalty, .. } => -penalty,
            Self::Matched { penalty, .. } => MATCH_REWARD - penalty,
        }
    }

    /// Did the choice change the deck at all?
    #[must_use]
    pub fn changed(&self) -> bool {
        !matches!(self, Self::UnknownCard | Self::Ignored)
    }
}

/// Deck of paired cards plus the running score.
///
/// The number of cards is fixed at construction (`2 × pairs`). The deck is
/// replaced wholesale when a new game starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryGame<C> {
    cards: Vec<Card<C>>,
    score: i64,
}

impl<C: PartialEq> MemoryGame<C> {
    /// Deal a new game.
    ///
    /// Builds two cards per pair index with consecutive ids (`2p`, `2p + 1`)
    /// and content `content(p)`, then shuffles the display order.
    pub fn new<F>(pair_count: usize, rng: &mut GameRng, mut content: F) -> Self
    where
        F: FnMut(usize) -> C,
    {
        let mut cards = Vec::with_capacity(pair_count * 2);
        for pair in 0..pair_count {
            let id = pair * 2;
            cards.push(Card::new(CardId::new(id), content(pair)));
            cards.push(Card::new(CardId::new(id + 1), content(pair)));
        }
        rng.shuffle(&mut cards);
        Self { cards, score: 0 }
    }

    /// Build a game from cards in a fixed order, without shuffling.
    #[must_use]
    pub fn from_cards(cards: Vec<Card<C>>) -> Self {
        Self { cards, score: 0 }
    }

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card<C>] {
        &self.cards
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Display index of the card with this id.
    #[must_use]
    pub fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card<C>> {
        self.cards.iter().find(|c| c.id() == id)
    }

    /// Index of the one and only face-up card.
    ///
    /// `None` when no card or more than one card is face-up.
    #[must_use]
    pub fn face_up_index(&self) -> Option<usize> {
        let mut face_up = self.cards.iter().enumerate().filter(|(_, c)| c.is_face_up());
        match (face_up.next(), face_up.next()) {
            (Some((index, _)), None) => Some(index),
            _ => None,
        }
    }

    /// Make the card at `index` the only face-up card.
    ///
    /// Every other face-up card is turned down, and each penalized
    /// turn-down is subtracted from the score. Returns the total penalty.
    pub fn set_face_up(&mut self, index: usize) -> i64 {
        let mut penalty = 0;
        for (i, card) in self.cards.iter_mut().enumerate() {
            if i == index {
                card.turn_face_up();
            } else if card.is_face_up() {
                let cost = i64::from(card.turn_face_down()) * MISMATCH_PENALTY;
                trace!(card = %card.id(), cost, "turned face-down");
                penalty += cost;
            }
        }
        self.score -= penalty;
        penalty
    }

    /// Choose the card with the given id.
    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        let Some(chosen) = self.index_of(id) else {
            debug!(card = %id, "choose ignored: unknown card");
            return ChooseOutcome::UnknownCard;
        };
        if self.cards[chosen].is_face_up() || self.cards[chosen].is_matched() {
            debug!(card = %id, "choose ignored: already face-up or matched");
            return ChooseOutcome::Ignored;
        }

        let candidate = self
            .face_up_index()
            .filter(|&index| !self.cards[index].is_matched());
        let Some(other) = candidate else {
            let penalty = self.set_face_up(chosen);
            debug!(card = %id, penalty, score = self.score, "card revealed");
            return ChooseOutcome::Revealed { penalty };
        };

        let other_id = self.cards[other].id();
        let matched = self.cards[chosen].content() == self.cards[other].content();
        if matched {
            self.cards[chosen].mark_matched();
            self.cards[other].mark_matched();
            self.score += MATCH_REWARD;
        }
        let penalty = self.set_face_up(chosen);

        if matched {
            debug!(card = %id, partner = %other_id, score = self.score, "pair matched");
            ChooseOutcome::Matched { partner: other_id, penalty }
        } else {
            debug!(card = %id, other = %other_id, penalty, score = self.score, "mismatch");
            ChooseOutcome::Mismatched { other: other_id, penalty }
        }
    }
}

impl<C> MemoryGame<C> {
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    #[must_use]
    pub fn none_matched(&self) -> bool {
        !self.any_matched()
    }

    #[must_use]
    pub fn none_face_up(&self) -> bool {
        !self.any_face_up()
    }

    #[must_use]
    pub fn any_seen(&self) -> bool {
        self.cards.iter().any(Card::is_seen)
    }

    #[must_use]
    pub fn any_matched(&self) -> bool {
        self.cards.iter().any(Card::is_matched)
    }

    #[must_use]
    pub fn any_face_up(&self) -> bool {
        self.cards.iter().any(Card::is_face_up)
    }

    #[must_use]
    pub fn number_of_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Score for finding every pair without a single penalty.
    #[must_use]
    pub fn best_possible_score(&self) -> i64 {
        MATCH_REWARD * self.number_of_pairs() as i64
    }

    /// Render projection of every card, in display order.
    #[must_use]
    pub fn views(&self) -> Vec<CardView<C>>
    where
        C: Clone,
    {
        self.cards.iter().map(Card::view).collect()
    }
}
