//! Rule engine for Crazy Eights.
//!
//! Pure functions only:
//! - Legality of a play against the top discard
//! - Whether a player has any legal move
//! - Game-over detection and the points tiebreak
//! - Turn rotation
//!
//! The game state machine calls into these but never re-implements them.

pub mod engine;

pub use engine::{
    can_make_valid_move, is_game_over, is_valid_play, next_player_index, playable_cards,
    winner_by_points, INITIAL_CARDS_PER_PLAYER, MIN_PLAYERS,
};
