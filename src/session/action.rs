//! Action requests and their results.
//!
//! An `Action` is what an external caller asks for on behalf of a user;
//! an `Outcome` is what it gets back after the snapshot round-trip.
//! Card codes arrive as strings and are parsed at dispatch.

use serde::{Deserialize, Serialize};

use super::roster::Roster;
use crate::cards::Card;

/// One requested action.
///
/// ## Example
///
/// ```
/// use crazy_eights::session::Action;
///
/// assert_eq!(Action::play("10H"), Action::Play("10H".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Deal a new game for every non-admin user on the roster. Admin only.
    Start(Roster),
    /// Play a card by code.
    Play(String),
    /// Draw one card.
    Draw,
    /// End the turn after drawing with nothing playable.
    Pass,
    /// Show turn order from the current player.
    Order,
    /// Show a player's hand. Allowed for that player or the admin.
    Cards(String),
}

impl Action {
    /// Shorthand for `Action::Play`.
    pub fn play(code: impl Into<String>) -> Self {
        Action::Play(code.into())
    }

    /// Shorthand for `Action::Cards`.
    pub fn cards(player: impl Into<String>) -> Self {
        Action::Cards(player.into())
    }
}

/// A hand as shown to a viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandView {
    pub player: String,
    /// Each card with whether it can be played on the current top discard.
    pub cards: Vec<(Card, bool)>,
    pub top_discard: Option<Card>,
}

impl HandView {
    /// Cards that can be played right now.
    pub fn playable(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().filter(|(_, ok)| *ok).map(|(c, _)| *c)
    }
}

/// Result of a dispatched action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Started {
        players: Vec<String>,
        current: String,
        top_discard: Option<Card>,
    },
    Played {
        card: Card,
        /// Next player, or `None` if the play ended the game.
        next: Option<String>,
        winner: Option<String>,
    },
    /// A card was drawn; the drawer's updated hand.
    Drew { card: Card, hand: HandView },
    /// The draw pile was empty, so the game ended.
    PileExhausted { winner: Option<String> },
    Passed { next: String },
    Order(Vec<String>),
    Hand(HandView),
}
