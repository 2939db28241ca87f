//! Card model: card identity and piles.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: Closed enumerations, so an invalid card cannot be built
//! - `Card`: `(rank, suit)` value with a derived short code (`"10H"`)
//! - `Pile`: Ordered card sequence used for the draw and discard piles

pub mod card;
pub mod pile;

pub use card::{Card, Rank, Suit};
pub use pile::{Pile, DECK_SIZE};
