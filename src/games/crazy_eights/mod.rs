//! Crazy Eights.
//!
//! - 2 or more players, one standard 52-card deck
//! - Each player is dealt 5 cards; one card is flipped to start the discard pile
//! - On your turn play a card matching the top discard by rank or suit, or
//!   any 8 (wild)
//! - You may draw once per turn; after drawing you may pass only if nothing
//!   in hand is playable
//! - The first player to empty their hand wins. If the draw pile runs out,
//!   the lowest hand total wins

mod game;

pub use game::{DrawOutcome, Game, GameBuilder, Phase, ADMIN};
pub(crate) use game::seat_players;
