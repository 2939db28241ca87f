//! Core engine types: players, configuration, RNG.
//!
//! These are the building blocks the game state machine is assembled from.
//! None of them know the turn cycle.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{GameConfig, ScoringVariant};
pub use player::{Hand, Player};
pub use rng::GameRng;
