//! Game implementations built on the card model and rule engine.

pub mod crazy_eights;
