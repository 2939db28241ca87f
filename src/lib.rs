//! # crazy-eights
//!
//! A Crazy Eights rule engine over persistent, snapshot-backed sessions.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Legality, turn rotation and scoring are plain
//!    functions in `rules`. The state machine calls them and never
//!    re-implements them.
//!
//! 2. **Reject Before Mutate**: Every game operation validates first. A
//!    rejected action leaves the game exactly as it was.
//!
//! 3. **Snapshot Round-Trips**: Each external action loads a complete
//!    snapshot, mutates an in-memory `Game`, and saves it back. The engine
//!    never holds storage open.
//!
//! ## Modules
//!
//! - `cards`: Rank, suit, card codes, piles
//! - `core`: Players, configuration, deterministic RNG
//! - `rules`: The rule engine
//! - `games`: The Crazy Eights turn state machine
//! - `persist`: Snapshots and snapshot stores
//! - `session`: Identity, roster, and action dispatch
//! - `error`: Error types

pub mod cards;
pub mod core;
pub mod error;
pub mod games;
pub mod persist;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::cards::{Card, Pile, Rank, Suit, DECK_SIZE};

pub use crate::core::{GameConfig, GameRng, Hand, Player, ScoringVariant};

pub use crate::error::{
    CardParseError, GameError, SessionError, SetupError, SnapshotError, StorageError,
};

pub use crate::games::crazy_eights::{DrawOutcome, Game, GameBuilder, Phase, ADMIN};

pub use crate::persist::{
    FileStore, GameSnapshot, MemoryStore, PlayerSnapshot, SnapshotFormat, SnapshotStore,
};

pub use crate::rules::{INITIAL_CARDS_PER_PLAYER, MIN_PLAYERS};

pub use crate::session::{
    Action, AllowAll, CredentialTable, HandView, IdentityProvider, Outcome, Roster, Session,
};
