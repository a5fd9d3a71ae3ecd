//! Cards: immutable identity and content, mutable face/seen/matched flags.
//!
//! ## Flags
//!
//! - `face_up`: visible to the player right now
//! - `seen`: has been face-up and turned back down at least once
//! - `matched`: its pair has been found; never cleared for the life of a deck
//!
//! Turning a card face-down is the only transition that reports anything:
//! it says whether the turn-down costs the player a point.

use serde::{Deserialize, Serialize};

/// Identifier of a card within one deck.
///
/// Both cards of a pair share content but never share an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub usize);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl From<usize> for CardId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single card on the table.
///
/// `C` is the content token. The game only ever compares contents for
/// equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card<C> {
    id: CardId,
    content: C,
    face_up: bool,
    matched: bool,
    seen: bool,
}

impl<C> Card<C> {
    /// Create a face-down, unseen, unmatched card.
    #[must_use]
    pub fn new(id: CardId, content: C) -> Self {
        Self {
            id,
            content,
            face_up: false,
            matched: false,
            seen: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    #[must_use]
    pub fn is_seen(&self) -> bool {
        self.seen
    }

    /// Toggle the face.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Turn the card face-up, whatever its current face.
    pub fn turn_face_up(&mut self) {
        self.face_up = true;
    }

    /// Turn the card face-down.
    ///
    /// Returns `true` when the turn-down incurs a penalty: the card was
    /// face-up, had already been seen, and is not matched. A face-down card
    /// is left alone and never incurs one. Any face-up card is marked seen
    /// afterwards.
    pub fn turn_face_down(&mut self) -> bool {
        if !self.face_up {
            return false;
        }
        self.face_up = false;
        let penalty = self.seen && !self.matched;
        self.seen = true;
        penalty
    }

    /// Mark the card as part of a found pair.
    pub fn mark_matched(&mut self) {
        self.matched = true;
    }

    /// Read-only projection handed to the presentation layer.
    #[must_use]
    pub fn view(&self) -> CardView<C>
    where
        C: Clone,
    {
        CardView {
            id: self.id,
            content: self.content.clone(),
            face_up: self.face_up,
            matched: self.matched,
        }
    }
}

/// What a renderer needs to draw one card.
///
/// `seen` is bookkeeping for scoring and is not exposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView<C> {
    pub id: CardId,
    pub content: C,
    pub face_up: bool,
    pub matched: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card<&'static str> {
        Card::new(CardId::new(0), "👻")
    }

    #[test]
    fn test_new_card_is_face_down() {
        let card = card();
        assert_eq!(card.id(), CardId::new(0));
        assert_eq!(*card.content(), "👻");
        assert!(!card.is_face_up());
        assert!(!card.is_matched());
        assert!(!card.is_seen());
    }

    #[test]
    fn test_flip() {
        let mut card = card();
        card.flip();
        assert!(card.is_face_up());
        card.flip();
        assert!(!card.is_face_up());
        // Flipping is not a turn-down; seen is untouched.
        assert!(!card.is_seen());
    }

    #[test]
    fn test_turn_face_up_is_unconditional() {
        let mut card = card();
        card.turn_face_up();
        card.turn_face_up();
        assert!(card.is_face_up());
    }

    #[test]
    fn test_turn_face_down_when_already_down() {
        let mut card = card();
        assert!(!card.turn_face_down());
        assert!(!card.is_seen());
    }

    #[test]
    fn test_first_turn_down_marks_seen_without_penalty() {
        let mut card = card();
        card.turn_face_up();

        assert!(!card.turn_face_down());
        assert!(!card.is_face_up());
        assert!(card.is_seen());
    }

    #[test]
    fn test_second_turn_down_incurs_penalty() {
        let mut card = card();
        card.turn_face_up();
        card.turn_face_down();

        card.turn_face_up();
        assert!(card.turn_face_down());
        assert!(card.is_seen());
    }

    #[test]
    fn test_matched_card_never_penalized() {
        let mut card = card();
        card.turn_face_up();
        card.turn_face_down();
        card.mark_matched();

        for _ in 0..3 {
            card.turn_face_up();
            assert!(!card.turn_face_down());
        }
        assert!(card.is_matched());
    }

    #[test]
    fn test_view_projection() {
        let mut card = Card::new(CardId::new(4), String::from("🍕"));
        card.turn_face_up();
        card.mark_matched();

        let view = card.view();
        assert_eq!(view.id, CardId::new(4));
        assert_eq!(view.content, "🍕");
        assert!(view.face_up);
        assert!(view.matched);
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId::new(42)), "Card(42)");
        assert_eq!(CardId::from(7).raw(), 7);
    }

    #[test]
    fn test_card_id_is_not_truncated() {
        let wide = u32::MAX as usize + 3;
        assert_eq!(CardId::new(wide).raw(), wide);
    }

    #[test]
    fn test_serialization() {
        let mut card = card();
        card.turn_face_up();
        card.turn_face_down();

        let json = serde_json::to_string(&card).unwrap();
        let restored: Card<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.id(), card.id());
        assert_eq!(restored.content(), "👻");
        assert!(restored.is_seen());
    }
}
