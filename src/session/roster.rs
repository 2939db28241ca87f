//! Registered users of a game.
//!
//! The roster is the list a game is seated from when it starts. It
//! may include the administrator, who is never dealt in.

use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::games::crazy_eights::ADMIN;

/// Ordered list of registered usernames. Registration order is seat order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roster {
    users: Vec<String>,
}

impl Roster {
    /// Empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user.
    ///
    /// `admin` is reserved in any letter case, and names must be unique
    /// (case-sensitive).
    pub fn add_user(&mut self, name: impl Into<String>) -> Result<(), SetupError> {
        let name = name.into();
        if name.eq_ignore_ascii_case(ADMIN) {
            return Err(SetupError::ReservedName);
        }
        if self.contains(&name) {
            return Err(SetupError::DuplicatePlayer(name));
        }
        self.users.push(name);
        Ok(())
    }

    /// Unregister a user. Returns whether they were registered.
    pub fn remove_user(&mut self, name: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u != name);
        self.users.len() != before
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.users.iter().any(|u| u == name)
    }

    /// All registered users.
    #[must_use]
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Users who will be seated, in order.
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(String::as_str).filter(|u| *u != ADMIN)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    /// Collect names without validation, e.g. when loading a stored list.
    /// `admin` entries are kept but never seated.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            users: iter.into_iter().map(Into::into).collect(),
        }
    }
}
