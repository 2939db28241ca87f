//! Per-player state: name, hand, and the drawn-this-turn flag.
//!
//! The hand keeps insertion order for display. Legality never depends on
//! that order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::config::ScoringVariant;

/// Inline capacity for a hand. Opening hands are 5 cards and rarely grow
/// far past that before the game ends.
pub type Hand = SmallVec<[Card; 8]>;

/// A seated player.
///
/// ## Example
///
/// ```
/// use crazy_eights::cards::Card;
/// use crazy_eights::core::Player;
///
/// let mut alice = Player::new("alice");
/// alice.add_card(Card::from_code("9C").unwrap());
///
/// assert!(alice.has_code("9C"));
/// assert_eq!(alice.play_code("9C").map(|c| c.code()), Some("9C".to_string()));
/// assert!(alice.has_won());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Hand,
    has_drawn: bool,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: SmallVec::new(),
            has_drawn: false,
        }
    }

    /// Rebuild a player from stored parts.
    pub fn with_hand(
        name: impl Into<String>,
        hand: impl IntoIterator<Item = Card>,
        has_drawn: bool,
    ) -> Self {
        Self {
            name: name.into(),
            hand: hand.into_iter().collect(),
            has_drawn,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Hand Mutation ===

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Remove a card from the hand.
    ///
    /// Returns `None` if the card is not held. Legality is the caller's job.
    pub fn play(&mut self, card: Card) -> Option<Card> {
        let idx = self.hand.iter().position(|&c| c == card)?;
        Some(self.hand.remove(idx))
    }

    /// Remove a card by its code. Unparseable codes are simply not held.
    pub fn play_code(&mut self, code: &str) -> Option<Card> {
        let card = Card::from_code(code).ok()?;
        self.play(card)
    }

    // === Queries ===

    #[must_use]
    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        Card::from_code(code).is_ok_and(|card| self.has_card(card))
    }

    /// Sum of penalty points in hand.
    #[must_use]
    pub fn hand_points(&self, variant: ScoringVariant) -> u32 {
        self.hand.iter().map(|c| c.point_value(variant)).sum()
    }

    /// A player with no cards has won.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn hand_codes(&self) -> Vec<String> {
        self.hand.iter().map(Card::code).collect()
    }

    pub(crate) fn clear_hand(&mut self) {
        self.hand.clear();
    }

    // === Turn Flag ===

    pub fn set_drawn(&mut self, drawn: bool) {
        self.has_drawn = drawn;
    }

    #[must_use]
    pub fn has_drawn(&self) -> bool {
        self.has_drawn
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} cards)", self.name, self.hand.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        Card::from_code(code).unwrap()
    }

    #[test]
    fn test_new_player() {
        let p = Player::new("bob");
        assert_eq!(p.name(), "bob");
        assert_eq!(p.hand_size(), 0);
        assert!(!p.has_drawn());
        assert!(p.has_won());
    }

    #[test]
    fn test_play_removes_one_copy() {
        let mut p = Player::with_hand("bob", [card("2H"), card("3H"), card("4H")], false);

        assert_eq!(p.play(card("3H")), Some(card("3H")));
        assert_eq!(p.hand_codes(), vec!["2H", "4H"]);
        assert_eq!(p.play(card("3H")), None);
        assert_eq!(p.hand_size(), 2);
    }

    #[test]
    fn test_play_code() {
        let mut p = Player::with_hand("bob", [card("10D")], false);
        assert_eq!(p.play_code("junk"), None);
        assert_eq!(p.play_code("10D"), Some(card("10D")));
        assert!(p.has_won());
    }

    #[test]
    fn test_has_card_and_code() {
        let p = Player::with_hand("bob", [card("QS")], false);
        assert!(p.has_card(card("QS")));
        assert!(p.has_code("QS"));
        assert!(!p.has_code("QH"));
        assert!(!p.has_code("??"));
    }

    #[test]
    fn test_hand_points() {
        let p = Player::with_hand("bob", [card("8H"), card("KS"), card("AC"), card("5D")], false);
        assert_eq!(p.hand_points(ScoringVariant::Classic), 50 + 10 + 1 + 5);
        assert_eq!(p.hand_points(ScoringVariant::Flat), 8 + 10 + 1 + 5);
    }

    #[test]
    fn test_add_cards_preserves_order() {
        let mut p = Player::new("bob");
        p.add_card(card("9C"));
        p.add_cards([card("2S"), card("JD")]);
        assert_eq!(p.hand_codes(), vec!["9C", "2S", "JD"]);
    }

    #[test]
    fn test_drawn_flag() {
        let mut p = Player::new("bob");
        p.set_drawn(true);
        assert!(p.has_drawn());
        p.set_drawn(false);
        assert!(!p.has_drawn());
    }

    #[test]
    fn test_display() {
        let p = Player::with_hand("bob", [card("9C"), card("2S")], false);
        assert_eq!(p.to_string(), "bob (2 cards)");
    }
}
