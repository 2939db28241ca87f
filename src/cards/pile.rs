//! Ordered card piles.
//!
//! A `Pile` backs both the draw pile and the discard pile:
//! - Draw pile: the front is the next card to draw.
//! - Discard pile: the back is the top (most recently discarded) card.
//!
//! Backed by `im::Vector`, so cloning a pile for a snapshot is O(1) and
//! front removal is O(log n).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;
use crate::error::CardParseError;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// An ordered sequence of cards.
///
/// ## Example
///
/// ```
/// use crazy_eights::cards::Pile;
///
/// let mut pile = Pile::standard();
/// assert_eq!(pile.len(), 52);
///
/// let hand = pile.deal_front(5);
/// assert_eq!(hand.len(), 5);
/// assert_eq!(pile.len(), 47);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh, unshuffled 52-card deck, suit by suit (H, D, C, S), Ace to King.
    #[must_use]
    pub fn standard() -> Self {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect()
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Remove and return the front card, or `None` if the pile is empty.
    pub fn draw_top(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Remove up to `n` cards from the front.
    ///
    /// Stops early when the pile runs out; a short deal is not an error.
    pub fn deal_front(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        let rest = self.cards.split_off(take);
        let dealt = std::mem::replace(&mut self.cards, rest);
        dealt.into_iter().collect()
    }

    /// Add a card to the back (the top of a discard pile).
    pub fn push_top(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Add a card to the front (the next card drawn).
    pub fn push_front(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// The last card, i.e. the top of a discard pile.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// The first card, i.e. the next card drawn from a draw pile.
    #[must_use]
    pub fn front(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card codes, front to back.
    #[must_use]
    pub fn to_codes(&self) -> Vec<String> {
        self.cards.iter().map(Card::code).collect()
    }

    /// Build a pile from card codes, front to back.
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Self, CardParseError> {
        codes.iter().map(|c| Card::from_code(c.as_ref())).collect()
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}
