//! Durable game state.
//!
//! ## Key Types
//!
//! - `GameSnapshot`: Serializable form of a `Game`, validated on load
//! - `SnapshotStore`: Load/save by game name
//! - `MemoryStore`, `FileStore`: Provided stores
//!
//! One action is one full round-trip: load, mutate in memory, save.

pub mod snapshot;
pub mod store;

pub use snapshot::{GameSnapshot, PlayerSnapshot};
pub use store::{FileStore, MemoryStore, SnapshotFormat, SnapshotStore};
