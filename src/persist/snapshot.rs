//! Serializable game snapshots.
//!
//! A `GameSnapshot` is the durable form of a `Game`: plain strings and
//! flags, nothing derived. Loading a snapshot re-validates everything the
//! in-memory `Game` relies on, so a hand-edited or truncated file is
//! rejected rather than producing a broken game.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Pile, DECK_SIZE};
use crate::core::{GameConfig, Player, ScoringVariant};
use crate::error::{GameError, SnapshotError};
use crate::games::crazy_eights::{seat_players, Game};
use crate::rules::MIN_PLAYERS;

/// One player's stored state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    /// Card codes in hand order.
    pub hand: Vec<String>,
    #[serde(default)]
    pub has_drawn: bool,
}

/// Complete stored game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Seat (turn) order.
    pub players: Vec<PlayerSnapshot>,
    /// Card codes, front = next to draw.
    pub draw_pile: Vec<String>,
    /// Card codes, last = top.
    pub discard_pile: Vec<String>,
    /// Name of the player whose turn it is.
    pub current_player: String,
    #[serde(default)]
    pub reverse_direction: bool,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub scoring: ScoringVariant,
}

impl GameSnapshot {
    /// Validate and rebuild the in-memory game.
    ///
    /// `config` supplies everything not stored in the snapshot; the stored
    /// scoring variant wins over the config's. Dealing settings in `config`
    /// are not applied: a stored game is already dealt.
    pub fn into_game(self, config: GameConfig) -> Result<Game, SnapshotError> {
        let config = config.with_scoring(self.scoring);

        let names = self.players.iter().map(|p| p.name.clone());
        let mut players = seat_players(names, MIN_PLAYERS)?;
        for (player, stored) in players.iter_mut().zip(&self.players) {
            let hand = parse_codes(&stored.hand)?;
            *player = Player::with_hand(stored.name.clone(), hand, stored.has_drawn);
        }

        let draw_pile = Pile::from_codes(&self.draw_pile)?;
        let discard_pile = Pile::from_codes(&self.discard_pile)?;
        if discard_pile.is_empty() {
            return Err(SnapshotError::EmptyDiscard);
        }
        if !self.game_over {
            if let Some(p) = players.iter().find(|p| p.has_won()) {
                return Err(SnapshotError::UnfinishedWithEmptyHand(p.name().to_string()));
            }
        }

        check_full_deck(
            players
                .iter()
                .flat_map(|p| p.hand().iter())
                .chain(draw_pile.iter())
                .chain(discard_pile.iter()),
        )?;

        Game::from_parts(
            config,
            players,
            &self.current_player,
            draw_pile,
            discard_pile,
            self.reverse_direction,
            self.game_over,
        )
        .map_err(|err| match err {
            GameError::UnknownPlayer(name) => SnapshotError::UnknownCurrentPlayer(name),
            _ => SnapshotError::UnknownCurrentPlayer(self.current_player.clone()),
        })
    }
}

fn parse_codes(codes: &[String]) -> Result<Vec<Card>, SnapshotError> {
    codes
        .iter()
        .map(|c| Card::from_code(c).map_err(SnapshotError::from))
        .collect()
}

/// Every card exactly once.
fn check_full_deck<'a>(cards: impl Iterator<Item = &'a Card>) -> Result<(), SnapshotError> {
    let mut seen = FxHashSet::default();
    for &card in cards {
        if !seen.insert(card) {
            return Err(SnapshotError::DuplicateCard(card));
        }
    }
    if seen.len() != DECK_SIZE {
        return Err(SnapshotError::CardCount(seen.len()));
    }
    Ok(())
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            players: game
                .players()
                .iter()
                .map(|p| PlayerSnapshot {
                    name: p.name().to_string(),
                    hand: p.hand_codes(),
                    has_drawn: p.has_drawn(),
                })
                .collect(),
            draw_pile: game.draw_pile().to_codes(),
            discard_pile: game.discard_pile().to_codes(),
            current_player: game.current_player().name().to_string(),
            reverse_direction: game.reverse_direction(),
            game_over: game.is_over(),
            scoring: game.scoring(),
        }
    }
}

impl Game {
    /// Capture the full state for storage.
    #[must_use]
    pub fn to_snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Rebuild a game from storage. See [`GameSnapshot::into_game`].
    pub fn from_snapshot(
        snapshot: GameSnapshot,
        config: GameConfig,
    ) -> Result<Self, SnapshotError> {
        snapshot.into_game(config)
    }
}
