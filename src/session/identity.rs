//! Identity providers.
//!
//! The engine trusts its caller completely. Before any action is dispatched,
//! a session asks an `IdentityProvider` one question: may this user act with
//! this credential? How credentials are stored or hashed is the provider's
//! business.

use rustc_hash::FxHashMap;

/// Yes/no authorization of a user.
pub trait IdentityProvider {
    fn authorize(&self, username: &str, credential: &str) -> bool;
}

impl<F> IdentityProvider for F
where
    F: Fn(&str, &str) -> bool,
{
    fn authorize(&self, username: &str, credential: &str) -> bool {
        self(username, credential)
    }
}

/// Accepts everyone. For trusted in-process callers and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl IdentityProvider for AllowAll {
    fn authorize(&self, _username: &str, _credential: &str) -> bool {
        true
    }
}

/// Fixed table of username to expected credential.
///
/// The credential is compared as an opaque string, typically a hash
/// produced by the caller.
#[derive(Clone, Debug, Default)]
pub struct CredentialTable {
    entries: FxHashMap<String, String>,
}

impl CredentialTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a user's credential.
    #[must_use]
    pub fn with_user(mut self, username: impl Into<String>, credential: impl Into<String>) -> Self {
        self.insert(username, credential);
        self
    }

    pub fn insert(&mut self, username: impl Into<String>, credential: impl Into<String>) {
        self.entries.insert(username.into(), credential.into());
    }

    /// Forget a user. Returns whether they were registered.
    pub fn remove(&mut self, username: &str) -> bool {
        self.entries.remove(username).is_some()
    }
}

impl IdentityProvider for CredentialTable {
    fn authorize(&self, username: &str, credential: &str) -> bool {
        self.entries.get(username).is_some_and(|c| c == credential)
    }
}
