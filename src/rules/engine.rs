//! Crazy Eights rules as pure functions.
//!
//! Nothing here holds state. The game state machine asks these functions
//! whether a move is legal, whose turn is next, and who won.

use crate::cards::{Card, Pile};
use crate::core::{Player, ScoringVariant};

/// Cards dealt to each player at the start of a game.
pub const INITIAL_CARDS_PER_PLAYER: usize = 5;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Can `candidate` be played on `top`?
///
/// Eights are wild; anything else must match the top card's rank or suit.
#[must_use]
pub fn is_valid_play(candidate: Card, top: Card) -> bool {
    candidate.is_wild() || candidate.rank == top.rank || candidate.suit == top.suit
}

/// Does the player hold at least one legal card?
#[must_use]
pub fn can_make_valid_move(player: &Player, top: Card) -> bool {
    player.hand().iter().any(|&c| is_valid_play(c, top))
}

/// Cards in hand that may be played on `top`, in hand order.
#[must_use]
pub fn playable_cards(player: &Player, top: Card) -> Vec<Card> {
    player
        .hand()
        .iter()
        .copied()
        .filter(|&c| is_valid_play(c, top))
        .collect()
}

/// The game ends when the acting player empties their hand or the draw pile
/// runs out.
#[must_use]
pub fn is_game_over(current_player: &Player, draw_pile: &Pile) -> bool {
    current_player.has_won() || draw_pile.is_empty()
}

/// Index of the player with the strictly lowest hand total.
///
/// Ties go to the earliest player in seat order. Returns `None` only for an
/// empty slice.
#[must_use]
pub fn winner_by_points(players: &[Player], variant: ScoringVariant) -> Option<usize> {
    players
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, u32)>, (idx, player)| {
            let points = player.hand_points(variant);
            match best {
                Some((_, low)) if points >= low => best,
                _ => Some((idx, points)),
            }
        })
        .map(|(idx, _)| idx)
}

/// Seat index of the next player, wrapping in either direction.
///
/// `total` must be non-zero.
#[must_use]
pub fn next_player_index(current: usize, total: usize, reverse: bool) -> usize {
    debug_assert!(total > 0, "next_player_index needs at least one player");
    if reverse {
        (current + total - 1) % total
    } else {
        (current + 1) % total
    }
}
