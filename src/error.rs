//! Error types.
//!
//! Every rejected game operation leaves state untouched, so all of these are
//! recoverable: the caller reports them and may retry.
//!
//! An empty draw pile is not an error. It ends the game and is reported as
//! [`DrawOutcome::PileExhausted`](crate::games::crazy_eights::DrawOutcome).

use crate::cards::Card;

/// A card code that does not name a card.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CardParseError {
    #[error("card code must be 2 or 3 characters, got {0}")]
    BadLength(usize),

    #[error("unknown rank {0:?}")]
    UnknownRank(String),

    #[error("unknown suit {0:?}")]
    UnknownSuit(char),
}

/// A move the rules do not allow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("card {} is not in hand", .0.code())]
    NotHeld(Card),

    #[error("card {} cannot be played on {}", .card.code(), .top.code())]
    IllegalPlay { card: Card, top: Card },

    #[error("already drawn a card this turn")]
    AlreadyDrawn,

    #[error("must draw a card before passing")]
    MustDrawFirst,

    #[error("a valid move is available; cannot pass")]
    ValidMoveAvailable,

    #[error("game is over")]
    GameFinished,

    #[error("player {0:?} is not seated")]
    UnknownPlayer(String),
}

/// A table that cannot be seated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("at least {required} players are required, found {found}")]
    NotEnoughPlayers { found: usize, required: usize },

    #[error("duplicate player name {0:?}")]
    DuplicatePlayer(String),

    #[error("too many players for one deck: {found}, at most {max}")]
    TooManyPlayers { found: usize, max: usize },

    #[error("the name 'admin' is reserved")]
    ReservedName,
}

/// A stored snapshot that does not describe a valid game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("bad card in snapshot: {0}")]
    Card(#[from] CardParseError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("current player {0:?} is not seated")]
    UnknownCurrentPlayer(String),

    #[error("snapshot holds {0} cards, expected 52")]
    CardCount(usize),

    #[error("card {} appears more than once", .0.code())]
    DuplicateCard(Card),

    #[error("discard pile is empty")]
    EmptyDiscard,

    #[error("{0:?} has no cards but the game is not marked over")]
    UnfinishedWithEmptyHand(String),
}

/// Failure loading or saving a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("no saved game named {0:?}")]
    NotFound(String),

    #[error("invalid game name {0:?}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Failure dispatching an action through a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid credentials for {0:?}")]
    Unauthorized(String),

    #[error("it is not {user}'s turn; current player is {current}")]
    NotYourTurn { user: String, current: String },

    #[error("not allowed to view another player's cards")]
    Forbidden,

    #[error("player {0:?} not found")]
    UnknownPlayer(String),

    #[error(transparent)]
    Card(#[from] CardParseError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result alias for game operations.
pub type Result<T, E = GameError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_messages() {
        let card = Card::new(Rank::Nine, Suit::Clubs);
        let top = Card::new(Rank::Five, Suit::Diamonds);

        assert_eq!(GameError::NotHeld(card).to_string(), "card 9C is not in hand");
        assert_eq!(
            GameError::IllegalPlay { card, top }.to_string(),
            "card 9C cannot be played on 5D"
        );
        assert_eq!(
            SetupError::NotEnoughPlayers { found: 1, required: 2 }.to_string(),
            "at least 2 players are required, found 1"
        );
        assert_eq!(
            SnapshotError::CardCount(51).to_string(),
            "snapshot holds 51 cards, expected 52"
        );
    }

    #[test]
    fn test_conversions() {
        let err: SnapshotError = CardParseError::BadLength(4).into();
        assert!(matches!(err, SnapshotError::Card(CardParseError::BadLength(4))));

        let err: SessionError = GameError::AlreadyDrawn.into();
        assert_eq!(err.to_string(), "already drawn a card this turn");

        let err: SessionError = StorageError::NotFound("g".into()).into();
        assert!(matches!(err, SessionError::Storage(StorageError::NotFound(_))));
    }
}
