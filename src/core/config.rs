//! Game configuration types.
//!
//! A game is configured at creation time by a `GameConfig`:
//! - Opening hand size and minimum table size
//! - Which point table settles a game that ends on an empty draw pile
//! - An optional seed for a reproducible opening shuffle
//!
//! The config travels with the in-memory `Game`; the scoring variant is also
//! written into every snapshot so a resumed game scores the way it started.

use serde::{Deserialize, Serialize};

use crate::rules::{INITIAL_CARDS_PER_PLAYER, MIN_PLAYERS};

/// Point table used for the empty-draw-pile tiebreak.
///
/// Two tables exist for Crazy Eights and they disagree only on the wild 8:
///
/// | Rank       | `Classic` | `Flat` |
/// |------------|-----------|--------|
/// | A          | 1         | 1      |
/// | 2-7, 9     | face      | face   |
/// | 8          | 50        | 8      |
/// | 10, J, Q, K| 10        | 10     |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringVariant {
    /// Eights are punished at 50 points.
    #[default]
    Classic,
    /// No special case for eights.
    Flat,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each player at start.
    pub initial_hand_size: usize,

    /// Fewest players allowed to start.
    pub min_players: usize,

    /// Point table for the tiebreak.
    pub scoring: ScoringVariant,

    /// Seed for the opening shuffle. `None` draws from system entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_hand_size: INITIAL_CARDS_PER_PLAYER,
            min_players: MIN_PLAYERS,
            scoring: ScoringVariant::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scoring variant.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringVariant) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_initial_hand_size(mut self, size: usize) -> Self {
        self.initial_hand_size = size;
        self
    }

    /// Set the minimum number of players.
    ///
    /// Values below 2 are raised to 2; a one-player game has no turn cycle.
    #[must_use]
    pub fn with_min_players(mut self, count: usize) -> Self {
        self.min_players = count.max(MIN_PLAYERS);
        self
    }
}
