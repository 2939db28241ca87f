//! Session layer: who may do what, and the load/mutate/save cycle.
//!
//! ## Key Types
//!
//! - `IdentityProvider`: Yes/no authorization, checked before anything else
//! - `Roster`: Registered users a game is seated from
//! - `Action`, `Outcome`: Request and result of one dispatch
//! - `Session`: Ties a `SnapshotStore` and an `IdentityProvider` together
//!
//! Only the `admin` user may start a game. Turn actions are accepted only
//! from the current player. A hand can be viewed by its owner or by `admin`.

pub mod action;
pub mod dispatch;
pub mod identity;
pub mod roster;

pub use action::{Action, HandView, Outcome};
pub use dispatch::Session;
pub use identity::{AllowAll, CredentialTable, IdentityProvider};
pub use roster::Roster;
