//! Bearer-token authentication.

use std::{collections::HashMap, fmt};

/// Authenticated user identity attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wraps a user name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the user name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Verifies bearer tokens.
#[cfg_attr(test, mockall::automock)]
pub trait Authenticator: Send + Sync {
    /// Returns the user owning `token`, or `None` when it is not recognised.
    fn authenticate(&self, token: &str) -> Option<UserId>;
}

/// Authenticator backed by a fixed token table.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthenticator {
    tokens: HashMap<String, UserId>,
}

impl StaticTokenAuthenticator {
    /// Creates an authenticator that accepts no token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `token` on behalf of `user`.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>, user: UserId) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    /// Returns the number of accepted tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when no token is accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<(String, UserId)> for StaticTokenAuthenticator {
    fn from_iter<I: IntoIterator<Item = (String, UserId)>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl Authenticator for StaticTokenAuthenticator {
    fn authenticate(&self, token: &str) -> Option<UserId> {
        self.tokens.get(token).cloned()
    }
}
